use serde::Serialize;

use crate::error::IntakeError;

/// API 오류 응답
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl From<&IntakeError> for ErrorResponse {
    fn from(err: &IntakeError) -> Self {
        let error = match err {
            IntakeError::Persistence(_) => "PERSISTENCE_FAILED",
            IntakeError::Task(_) => "INTAKE_TASK_FAILED",
        };
        Self {
            error: error.to_string(),
            message: err.to_string(),
        }
    }
}
