use serde::{Deserialize, Serialize};

use crate::models::domain::QuestionId;

/// The aggregate score report for one graded submission.
///
/// `total` is the size of the question bank, not the number of submitted
/// answers; `results` preserves submission order with one entry per
/// submitted answer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct GradeOutcome {
    pub score: usize,
    pub total: usize,
    pub results: Vec<AnswerResult>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnswerResult {
    pub id: QuestionId,
    pub correct: bool,
}
