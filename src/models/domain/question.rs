use std::fmt;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A gradable question with its embedded answer key, as served by the quiz
/// endpoint and held in the in-memory question bank.
///
/// Exactly one answer-key field may be populated and it must match
/// `question_type`; `choices` is required for radio/checkbox questions and
/// forbidden for text questions. Both rules are enforced by validation at
/// bank-load time, never during grading.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
#[validate(schema(function = validate_answer_key, skip_on_field_errors = false))]
pub struct Question {
    #[validate(custom(function = validate_question_id))]
    pub id: QuestionId,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[validate(length(min = 1, message = "prompt must not be empty"))]
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_choice_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_choice_indexes: Option<Vec<u32>>,
}

/// Discriminant for the grading strategy applied to a question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Text,
    Radio,
    Checkbox,
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuestionType::Text => "text",
            QuestionType::Radio => "radio",
            QuestionType::Checkbox => "checkbox",
        };
        f.write_str(name)
    }
}

/// Question identifier; the wire format allows both integers and strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
pub enum QuestionId {
    Number(i64),
    Text(String),
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionId::Number(id) => write!(f, "{id}"),
            QuestionId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for QuestionId {
    fn from(id: i64) -> Self {
        QuestionId::Number(id)
    }
}

impl From<&str> for QuestionId {
    fn from(id: &str) -> Self {
        QuestionId::Text(id.to_string())
    }
}

fn validate_question_id(id: &QuestionId) -> Result<(), ValidationError> {
    match id {
        QuestionId::Text(text) if text.is_empty() => {
            let mut error = ValidationError::new("question_id");
            error.message = Some("id must be a non-empty string or an integer".into());
            Err(error)
        }
        _ => Ok(()),
    }
}

fn validate_answer_key(question: &Question) -> Result<(), ValidationError> {
    let has_choices = question.choices.as_ref().is_some_and(|c| !c.is_empty());

    let problem = match question.question_type {
        QuestionType::Text => {
            if question.correct_answer_text.is_none() {
                Some("is missing correctAnswerText")
            } else if question.choices.is_some() {
                Some("must not carry choices")
            } else if question.correct_choice_index.is_some()
                || question.correct_choice_indexes.is_some()
            {
                Some("carries an answer key for a different question type")
            } else {
                None
            }
        }
        QuestionType::Radio => {
            if !has_choices {
                Some("requires a non-empty choices list")
            } else if question.correct_choice_index.is_none() {
                Some("is missing correctChoiceIndex")
            } else if question.correct_answer_text.is_some()
                || question.correct_choice_indexes.is_some()
            {
                Some("carries an answer key for a different question type")
            } else {
                None
            }
        }
        QuestionType::Checkbox => {
            if !has_choices {
                Some("requires a non-empty choices list")
            } else if question.correct_choice_indexes.is_none() {
                Some("is missing correctChoiceIndexes")
            } else if question.correct_answer_text.is_some()
                || question.correct_choice_index.is_some()
            {
                Some("carries an answer key for a different question type")
            } else {
                None
            }
        }
    };

    match problem {
        None => Ok(()),
        Some(detail) => {
            let mut error = ValidationError::new("answer_key");
            error.message = Some(
                format!(
                    "question '{}' of type '{}' {}",
                    question.id, question.question_type, detail
                )
                .into(),
            );
            Err(error)
        }
    }
}
