use serde::{Deserialize, Serialize};

use crate::models::domain::QuestionId;

/// A batch of submitted answers to grade against the question bank.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct GradeRequest {
    pub answers: Vec<SubmittedAnswer>,
}

/// One submitted answer. The value carries no type tag of its own; its
/// interpretation depends on the type of the question it references.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubmittedAnswer {
    pub id: QuestionId,
    pub value: AnswerValue,
}

/// The shapes a submitted value can take: free text (or a radio label),
/// a single choice index, or a set of checkbox indexes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Index(i64),
    Indexes(Vec<i64>),
}
