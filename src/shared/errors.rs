use thiserror::Error;

use crate::domain::services::ValidationError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl AppError {
    /// Message shown to the user under the form.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(e) => e.to_string(),
            AppError::Http { .. } | AppError::Network(_) => {
                "Could not reach the server, please try again".to_string()
            }
            AppError::SerializationError(_) => "Unexpected response from the server".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
