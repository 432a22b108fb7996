use crate::models::domain::{
    AnswerValue, Question, QuestionBank, QuestionId, QuestionType, SubmittedAnswer,
};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Creates the standard three-question reference bank, one question per
    /// grading strategy.
    pub fn sample_questions() -> Vec<Question> {
        vec![
            Question {
                id: QuestionId::Number(1),
                question_type: QuestionType::Text,
                prompt: "What is the capital of France?".to_string(),
                choices: None,
                correct_answer_text: Some("paris".to_string()),
                correct_choice_index: None,
                correct_choice_indexes: None,
            },
            Question {
                id: QuestionId::Number(2),
                question_type: QuestionType::Radio,
                prompt: "2 + 2 = ?".to_string(),
                choices: Some(vec!["3".to_string(), "4".to_string(), "5".to_string()]),
                correct_answer_text: None,
                correct_choice_index: Some(1),
                correct_choice_indexes: None,
            },
            Question {
                id: QuestionId::Number(3),
                question_type: QuestionType::Checkbox,
                prompt: "Select prime numbers".to_string(),
                choices: Some(vec![
                    "2".to_string(),
                    "3".to_string(),
                    "4".to_string(),
                    "5".to_string(),
                ]),
                correct_answer_text: None,
                correct_choice_index: None,
                correct_choice_indexes: Some(vec![0, 1, 3]),
            },
        ]
    }

    /// Seals the reference questions into a bank.
    pub fn sample_bank() -> QuestionBank {
        QuestionBank::new(sample_questions())
    }

    /// Seals arbitrary questions into a bank without running validation.
    pub fn bank_of(questions: Vec<Question>) -> QuestionBank {
        QuestionBank::new(questions)
    }

    /// Creates a text question keyed on `answer`.
    pub fn text_question(id: impl Into<QuestionId>, answer: &str) -> Question {
        Question {
            id: id.into(),
            question_type: QuestionType::Text,
            prompt: format!("Type the word '{answer}'"),
            choices: None,
            correct_answer_text: Some(answer.to_string()),
            correct_choice_index: None,
            correct_choice_indexes: None,
        }
    }

    /// Creates a radio question whose correct choice sits at `correct`.
    pub fn radio_question(id: impl Into<QuestionId>, choices: &[&str], correct: u32) -> Question {
        Question {
            id: id.into(),
            question_type: QuestionType::Radio,
            prompt: "Pick the right choice".to_string(),
            choices: Some(choices.iter().map(|choice| choice.to_string()).collect()),
            correct_answer_text: None,
            correct_choice_index: Some(correct),
            correct_choice_indexes: None,
        }
    }

    /// Creates a checkbox question keyed on the `correct` index set.
    pub fn checkbox_question(
        id: impl Into<QuestionId>,
        choices: &[&str],
        correct: &[u32],
    ) -> Question {
        Question {
            id: id.into(),
            question_type: QuestionType::Checkbox,
            prompt: "Pick all that apply".to_string(),
            choices: Some(choices.iter().map(|choice| choice.to_string()).collect()),
            correct_answer_text: None,
            correct_choice_index: None,
            correct_choice_indexes: Some(correct.to_vec()),
        }
    }

    /// Creates one submitted answer.
    pub fn answer(id: impl Into<QuestionId>, value: AnswerValue) -> SubmittedAnswer {
        SubmittedAnswer {
            id: id.into(),
            value,
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::QuestionId;
    use validator::Validate;

    #[test]
    fn test_sample_questions_are_valid() {
        for question in sample_questions() {
            assert!(question.validate().is_ok(), "fixture should pass validation");
        }
    }

    #[test]
    fn test_question_builders() {
        let text = text_question("q5", "hello");
        let radio = radio_question(7, &["Earth", "Jupiter"], 1);
        let checkbox = checkbox_question("q6", &["1", "2", "3", "4"], &[1, 3]);

        assert_eq!(text.id, QuestionId::Text("q5".to_string()));
        assert_eq!(text.correct_answer_text.as_deref(), Some("hello"));
        assert_eq!(radio.correct_choice_index, Some(1));
        assert_eq!(checkbox.correct_choice_indexes, Some(vec![1, 3]));
    }
}
