use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Identifier of one of the five instrumented sorting algorithms.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmId {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
}

impl AlgorithmId {
    /// Every algorithm, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Bubble,
        Self::Selection,
        Self::Insertion,
        Self::Merge,
        Self::Quick,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Merge => "merge",
            Self::Quick => "quick",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "bubble" => Some(Self::Bubble),
            "selection" => Some(Self::Selection),
            "insertion" => Some(Self::Insertion),
            "merge" => Some(Self::Merge),
            "quick" => Some(Self::Quick),
            _ => None,
        }
    }
}

impl std::fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AlgorithmId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CoreError::UnknownAlgorithm(s.to_string()))
    }
}
