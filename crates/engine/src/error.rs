use sortlab_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("A run is already active")]
    RunActive,

    #[error("Invalid run status transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    #[error("Step channel closed before the run started")]
    ChannelClosed,

    #[error("Execution failed: {0}")]
    ExecutionFailed(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = EngineError::InvalidTransition {
            from: "idle".to_string(),
            to: "completed".to_string(),
        };
        assert!(error.to_string().contains("idle"));
        assert!(error.to_string().contains("completed"));
    }

    #[test]
    fn test_core_error_conversion() {
        let error: EngineError = CoreError::UnknownAlgorithm("bogo".to_string()).into();
        assert!(matches!(error, EngineError::Core(_)));
    }
}
