use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelterError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Scenario error: {message}")]
    ScenarioError { message: String },
}

pub type Result<T> = std::result::Result<T, ShelterError>;
