pub mod outcome;
pub mod question;
pub mod question_bank;
pub mod submission;

pub use outcome::{AnswerResult, GradeOutcome};
pub use question::{Question, QuestionId, QuestionType};
pub use question_bank::QuestionBank;
pub use submission::{AnswerValue, GradeRequest, SubmittedAnswer};
