use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// A single violated field, addressed by a zod-style path such as
/// `answers[2].value[0]` or `[3].prompt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub path: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Validation failed with {} violation(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Question bank error: {0}")]
    QuestionBank(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldViolation>>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::QuestionBank(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let details = match self {
            AppError::Validation(violations) => Some(violations.clone()),
            _ => None,
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
            details,
        })
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Maps actix's JSON extractor failures (malformed bodies, wrong content
/// type) onto the same error envelope the rest of the API speaks.
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    AppError::BadRequest(format!("invalid JSON payload: {err}")).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::Validation(vec![]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::BadRequest("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::QuestionBank("test".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::Validation(vec![
            FieldViolation::new("answers[0].value", "expected an integer"),
            FieldViolation::new("answers[1].id", "expected a string or an integer"),
        ]);
        assert_eq!(err.to_string(), "Validation failed with 2 violation(s)");

        let err = AppError::BadRequest("Invalid payload".into());
        assert_eq!(err.to_string(), "Bad request: Invalid payload");
    }

    #[test]
    fn test_field_violation_serialization() {
        let violation = FieldViolation::new("answers[0].value", "expected an integer");

        let json = serde_json::to_value(&violation).unwrap();

        assert_eq!(json["path"], "answers[0].value");
        assert_eq!(json["message"], "expected an integer");
    }
}
