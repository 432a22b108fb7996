pub mod quiz_handler;

pub use quiz_handler::{get_quiz, grade_quiz, health_check, index};
