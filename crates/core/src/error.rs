use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Invalid run status transition from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    #[error("Validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = CoreError::UnknownAlgorithm("bogo".to_string());
        assert!(error.to_string().contains("bogo"));
    }
}
