pub mod grading_service;
pub mod validation_service;
