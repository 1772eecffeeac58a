use thiserror::Error;

/// Custom error type for the scalargrad engine and its neural network layers.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Invalid activation function '{name}': expected one of tanh, relu, sigmoid")]
    InvalidActivation { name: String },

    #[error("Arity mismatch during {operation}: expected {expected} inputs, got {actual}")]
    ArityMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Malformed persisted state: {0}")]
    MalformedPersistedState(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ScalarGradError {
    fn from(err: std::io::Error) -> Self {
        ScalarGradError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ScalarGradError {
    fn from(err: serde_json::Error) -> Self {
        ScalarGradError::MalformedPersistedState(err.to_string())
    }
}
