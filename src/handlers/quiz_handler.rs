use actix_web::{get, http::header, post, web, HttpResponse};
use serde_json::{json, Value};

use crate::{
    app_state::AppState, errors::AppError, services::validation_service::ValidationService,
};

#[get("/")]
async fn index() -> HttpResponse {
    HttpResponse::Ok().body("OK")
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "ok": true }))
}

/// Serves the full question bank, answer keys included. The payload changes
/// only on redeploy but clients must not cache it across deploys.
#[get("/api/quiz")]
async fn get_quiz(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(state.question_bank.as_ref()))
}

/// Grades a submission. The body is taken as raw JSON so that validation can
/// report every violation with its field path instead of failing on the
/// first deserialization error.
#[post("/api/grade")]
async fn grade_quiz(
    state: web::Data<AppState>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let request = ValidationService::validate_grade_request(&payload)?;
    let outcome = state.grader.grade(&request, &state.question_bank);
    Ok(HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(outcome))
}
