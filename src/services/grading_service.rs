use std::collections::{HashMap, HashSet};

use crate::models::domain::{
    AnswerResult, AnswerValue, GradeOutcome, GradeRequest, Question, QuestionBank, QuestionId,
    QuestionType,
};

/// Strategy for deciding whether one submitted value satisfies one question.
///
/// Evaluators are pure predicates over already-validated data. They never
/// reject input; a value whose shape does not fit the question simply grades
/// as incorrect.
#[cfg_attr(test, mockall::automock)]
pub trait AnswerEvaluator: Send + Sync {
    fn evaluate(&self, question: &Question, value: &AnswerValue) -> bool;
}

/// Compares free-text answers after trimming and lowercasing both sides.
/// A bare integer submission is compared through its decimal rendering, so
/// `42` matches a key of `"42"`.
pub struct TextAnswerEvaluator;

impl AnswerEvaluator for TextAnswerEvaluator {
    fn evaluate(&self, question: &Question, value: &AnswerValue) -> bool {
        let Some(expected) = question.correct_answer_text.as_deref() else {
            return false;
        };
        let submitted = match value {
            AnswerValue::Text(text) => text.clone(),
            AnswerValue::Index(number) => number.to_string(),
            AnswerValue::Indexes(_) => return false,
        };
        normalize(&submitted) == normalize(expected)
    }
}

/// Accepts either the correct choice index or the correct choice's label.
/// A label resolves to the index of its first exact occurrence in `choices`;
/// an unknown label resolves to nothing and grades as incorrect.
pub struct RadioAnswerEvaluator;

impl AnswerEvaluator for RadioAnswerEvaluator {
    fn evaluate(&self, question: &Question, value: &AnswerValue) -> bool {
        let Some(correct) = question.correct_choice_index else {
            return false;
        };
        match value {
            AnswerValue::Index(choice) => *choice == i64::from(correct),
            AnswerValue::Text(label) => question
                .choices
                .as_deref()
                .and_then(|choices| choices.iter().position(|choice| choice == label))
                .is_some_and(|submitted| submitted == correct as usize),
            AnswerValue::Indexes(_) => false,
        }
    }
}

/// Requires the submitted index set to equal the answer-key set exactly.
/// Order carries no meaning and duplicate indexes collapse.
pub struct CheckboxAnswerEvaluator;

impl AnswerEvaluator for CheckboxAnswerEvaluator {
    fn evaluate(&self, question: &Question, value: &AnswerValue) -> bool {
        let Some(correct) = question.correct_choice_indexes.as_deref() else {
            return false;
        };
        let AnswerValue::Indexes(submitted) = value else {
            return false;
        };
        let expected: HashSet<i64> = correct.iter().map(|choice| i64::from(*choice)).collect();
        let submitted: HashSet<i64> = submitted.iter().copied().collect();
        expected == submitted
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Scores a batch of submitted answers against a question bank by
/// dispatching each answer to the evaluator registered for its question's
/// type.
pub struct Grader {
    evaluators: HashMap<QuestionType, Box<dyn AnswerEvaluator>>,
}

impl Default for Grader {
    fn default() -> Self {
        let mut evaluators: HashMap<QuestionType, Box<dyn AnswerEvaluator>> = HashMap::new();
        evaluators.insert(QuestionType::Text, Box::new(TextAnswerEvaluator));
        evaluators.insert(QuestionType::Radio, Box::new(RadioAnswerEvaluator));
        evaluators.insert(QuestionType::Checkbox, Box::new(CheckboxAnswerEvaluator));
        Self { evaluators }
    }
}

impl Grader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the evaluator registered for a question type. New grading
    /// behaviors plug in here without touching `grade`.
    pub fn with_evaluator(
        mut self,
        question_type: QuestionType,
        evaluator: Box<dyn AnswerEvaluator>,
    ) -> Self {
        self.evaluators.insert(question_type, evaluator);
        self
    }

    /// Grades every submitted answer and reports the aggregate outcome.
    ///
    /// `total` is always the bank size, independent of how many answers were
    /// submitted, and `results` keeps submission order with one entry per
    /// answer. Unknown question ids grade as incorrect rather than failing
    /// the request.
    pub fn grade(&self, request: &GradeRequest, bank: &QuestionBank) -> GradeOutcome {
        let mut by_id: HashMap<&QuestionId, &Question> = HashMap::new();
        for question in bank.questions() {
            by_id.insert(&question.id, question);
        }

        let mut results = Vec::with_capacity(request.answers.len());
        for answer in &request.answers {
            let correct = by_id.get(&answer.id).is_some_and(|question| {
                self.evaluators
                    .get(&question.question_type)
                    .is_some_and(|evaluator| evaluator.evaluate(question, &answer.value))
            });
            results.push(AnswerResult {
                id: answer.id.clone(),
                correct,
            });
        }

        let score = results.iter().filter(|result| result.correct).count();
        GradeOutcome {
            score,
            total: bank.len(),
            results,
        }
    }
}
