use std::collections::HashMap;

use log::warn;
use serde_json::Value;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::errors::{AppError, AppResult, FieldViolation};
use crate::models::domain::{
    AnswerValue, GradeRequest, Question, QuestionBank, QuestionId, SubmittedAnswer,
};

/// Validates the two untrusted inputs of the system, the question bank
/// loaded at startup and each grade request body, and reports every
/// violation it finds rather than stopping at the first.
pub struct ValidationService;

impl ValidationService {
    /// Parses and validates a raw JSON question bank. Intended for startup,
    /// where any error is fatal.
    pub fn validate_question_bank(raw: &str) -> AppResult<QuestionBank> {
        let questions: Vec<Question> = serde_json::from_str(raw)
            .map_err(|err| AppError::QuestionBank(format!("malformed question bank: {err}")))?;
        Self::validate_questions(questions)
    }

    /// Validates already-parsed questions and seals them into a bank.
    pub fn validate_questions(questions: Vec<Question>) -> AppResult<QuestionBank> {
        if questions.is_empty() {
            return Err(AppError::QuestionBank(
                "question bank must not be empty".to_string(),
            ));
        }

        let mut violations = Vec::new();
        for (index, question) in questions.iter().enumerate() {
            if let Err(errors) = question.validate() {
                flatten_validation_errors(&errors, &format!("[{index}]"), &mut violations);
            }
        }
        if !violations.is_empty() {
            return Err(AppError::Validation(violations));
        }

        flag_authoring_smells(&questions);
        Ok(QuestionBank::new(questions))
    }

    /// Validates a grade request payload field by field, so that a bad id on
    /// one answer does not hide a bad value on another.
    pub fn validate_grade_request(payload: &Value) -> AppResult<GradeRequest> {
        let mut violations = Vec::new();

        let entries: &[Value] = match payload.get("answers") {
            Some(Value::Array(entries)) => entries,
            Some(_) => {
                violations.push(FieldViolation::new("answers", "expected an array of answers"));
                &[]
            }
            None => {
                violations.push(FieldViolation::new("answers", "answers array is required"));
                &[]
            }
        };

        let mut answers = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            if !entry.is_object() {
                violations.push(FieldViolation::new(
                    format!("answers[{index}]"),
                    "expected an answer object",
                ));
                continue;
            }
            let id = parse_answer_id(entry.get("id"), index, &mut violations);
            let value = parse_answer_value(entry.get("value"), index, &mut violations);
            if let (Some(id), Some(value)) = (id, value) {
                answers.push(SubmittedAnswer { id, value });
            }
        }

        if violations.is_empty() {
            Ok(GradeRequest { answers })
        } else {
            Err(AppError::Validation(violations))
        }
    }
}

fn parse_answer_id(
    raw: Option<&Value>,
    index: usize,
    violations: &mut Vec<FieldViolation>,
) -> Option<QuestionId> {
    match raw {
        Some(Value::String(id)) if !id.is_empty() => Some(QuestionId::Text(id.clone())),
        Some(Value::Number(id)) => match id.as_i64() {
            Some(id) => Some(QuestionId::Number(id)),
            None => {
                violations.push(FieldViolation::new(
                    format!("answers[{index}].id"),
                    "id must be an integer, not a fraction",
                ));
                None
            }
        },
        _ => {
            violations.push(FieldViolation::new(
                format!("answers[{index}].id"),
                "id must be a non-empty string or an integer",
            ));
            None
        }
    }
}

fn parse_answer_value(
    raw: Option<&Value>,
    index: usize,
    violations: &mut Vec<FieldViolation>,
) -> Option<AnswerValue> {
    match raw {
        Some(Value::String(text)) => Some(AnswerValue::Text(text.clone())),
        Some(Value::Number(number)) => match number.as_i64() {
            Some(choice) => Some(AnswerValue::Index(choice)),
            None => {
                violations.push(FieldViolation::new(
                    format!("answers[{index}].value"),
                    "expected an integer choice index",
                ));
                None
            }
        },
        Some(Value::Array(items)) => {
            let mut indexes = Vec::with_capacity(items.len());
            let mut all_valid = true;
            for (position, item) in items.iter().enumerate() {
                match item.as_i64() {
                    Some(choice) if choice >= 0 => indexes.push(choice),
                    _ => {
                        violations.push(FieldViolation::new(
                            format!("answers[{index}].value[{position}]"),
                            "expected a non-negative integer choice index",
                        ));
                        all_valid = false;
                    }
                }
            }
            all_valid.then_some(AnswerValue::Indexes(indexes))
        }
        _ => {
            violations.push(FieldViolation::new(
                format!("answers[{index}].value"),
                "value must be a string, an integer, or an array of choice indexes",
            ));
            None
        }
    }
}

/// Renders nested `validator` errors into flat zod-style paths such as
/// `[3].prompt`. Schema-level errors carry the synthetic `__all__` field name
/// and are reported against the element itself.
fn flatten_validation_errors(
    errors: &ValidationErrors,
    prefix: &str,
    violations: &mut Vec<FieldViolation>,
) {
    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                let path = if *field == "__all__" {
                    prefix.to_string()
                } else {
                    format!("{prefix}.{field}")
                };
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| format!("failed the '{}' rule", error.code));
                    violations.push(FieldViolation::new(path.clone(), message));
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                flatten_validation_errors(nested, &format!("{prefix}.{field}"), violations);
            }
            ValidationErrorsKind::List(nested_list) => {
                for (position, nested) in nested_list {
                    flatten_validation_errors(
                        nested,
                        &format!("{prefix}.{field}[{position}]"),
                        violations,
                    );
                }
            }
        }
    }
}

/// Structurally valid banks can still contain authoring mistakes worth
/// surfacing in the logs without refusing to start.
fn flag_authoring_smells(questions: &[Question]) {
    let mut seen: HashMap<&QuestionId, usize> = HashMap::new();
    for (index, question) in questions.iter().enumerate() {
        if let Some(previous) = seen.insert(&question.id, index) {
            warn!(
                "question bank declares id '{}' at entries {} and {}; grading resolves it to the later one",
                question.id, previous, index
            );
        }
        if let Some(text) = &question.correct_answer_text {
            if text.trim().is_empty() {
                warn!(
                    "question '{}' has a blank correctAnswerText; only blank submissions can match",
                    question.id
                );
            }
        }
    }
}
