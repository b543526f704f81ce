use std::time::Duration;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use async_openai::error::OpenAIError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body returned for every server-side failure. Provider details never leave the process.
pub const SERVER_BUSY_MESSAGE: &str = "Server is busy. Please try again in a minute.";

/// The submitted answers broke the quiz schema. Carries the first violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("provider request failed: {0}")]
    Provider(#[from] OpenAIError),

    #[error("provider returned no generated text")]
    EmptyResponse,

    #[error("provider did not answer within {0:?}")]
    Timeout(Duration),

    #[error("provider credential is not configured")]
    MissingCredential,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    Validation(#[from] ValidationError),

    #[error("Completion failed: {0}")]
    Completion(#[from] CompletionError),

    /// 500 branch for unexpected failures that are not the provider's fault.
    /// Nothing in the summary pipeline produces it today.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Text that is safe to hand back to the caller.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(_) => self.to_string(),
            AppError::Completion(_) | AppError::Internal(_) => SERVER_BUSY_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Completion(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.public_message(),
        })
    }
}

pub type AppResult<T> = Result<T, AppError>;
