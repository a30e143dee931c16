// ABOUTME: Error types for the generator package
// ABOUTME: Failure taxonomy for a generation attempt and translation to user-facing text

use thiserror::Error;

use namecraft_ai::AIServiceError;
use namecraft_core::{ValidationError, GENERATION_FAILED_MESSAGE};

use crate::decoder::DecodeError;

/// Everything that can end a generation attempt
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error("Generation service returned no content")]
    EmptyResponse,

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Result {index} failed schema validation on `{field}`: {reason}")]
    Schema {
        index: usize,
        field: String,
        reason: String,
    },

    #[error("Transient service failure: {0}")]
    TransientService(#[source] AIServiceError),

    #[error("Service failure: {0}")]
    Service(#[source] AIServiceError),
}

impl GenerateError {
    /// Text safe to show the user. Internal detail never leaks past this point.
    pub fn user_message(&self) -> String {
        match self {
            GenerateError::Validation(err) => err.user_message(),
            _ => GENERATION_FAILED_MESSAGE.to_string(),
        }
    }
}

impl From<DecodeError> for GenerateError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::Empty => GenerateError::EmptyResponse,
            DecodeError::Malformed(detail) => GenerateError::MalformedResponse(detail),
            DecodeError::Schema {
                index,
                field,
                reason,
            } => GenerateError::Schema {
                index,
                field,
                reason,
            },
        }
    }
}

impl From<AIServiceError> for GenerateError {
    fn from(err: AIServiceError) -> Self {
        if err.is_transient() {
            GenerateError::TransientService(err)
        } else {
            GenerateError::Service(err)
        }
    }
}

/// Synchronous rejection of a submit; the generation state is left untouched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error("A generation is already in progress")]
    InProgress,

    #[error("No previous request to regenerate")]
    NothingToRegenerate,
}

impl SubmitError {
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Validation(err) => err.user_message(),
            SubmitError::InProgress => "正在生成中，请稍候".to_string(),
            SubmitError::NothingToRegenerate => "请先填写并提交取名需求".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GenerateError>;
