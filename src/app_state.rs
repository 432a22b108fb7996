use std::sync::Arc;

use crate::{
    config::Config,
    constants::question_bank::QUESTION_BANK_JSON,
    errors::AppResult,
    models::domain::QuestionBank,
    services::{grading_service::Grader, validation_service::ValidationService},
};

#[derive(Clone)]
pub struct AppState {
    pub question_bank: Arc<QuestionBank>,
    pub grader: Arc<Grader>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Builds the shared state for the server, validating the embedded
    /// question bank up front. A bank that fails validation is a startup
    /// error, never a runtime one.
    pub fn new(config: Config) -> AppResult<Self> {
        let question_bank = ValidationService::validate_question_bank(QUESTION_BANK_JSON)?;

        Ok(Self {
            question_bank: Arc::new(question_bank),
            grader: Arc::new(Grader::new()),
            config: Arc::new(config),
        })
    }
}
