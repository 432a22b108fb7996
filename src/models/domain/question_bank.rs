use serde::Serialize;

use crate::models::domain::Question;

/// The authoritative, immutable ordered set of gradable questions.
///
/// Constructed only by the schema validator, so holding a `QuestionBank`
/// means every question in it passed validation. Serializes transparently as
/// the question array the fetch endpoint returns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub(crate) fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::sample_questions;

    #[test]
    fn serializes_as_a_bare_array() {
        let bank = QuestionBank::new(sample_questions());

        let json = serde_json::to_value(&bank).unwrap();

        let questions = json.as_array().expect("bank should serialize as an array");
        assert_eq!(questions.len(), bank.len());
        assert_eq!(questions[0]["correctAnswerText"], "paris");
    }
}
