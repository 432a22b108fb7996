use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};
use log::{error, info};

use enrolla_server::{
    app_state::AppState,
    config::Config,
    errors::{json_error_handler, AppError},
    handlers::{get_quiz, grade_quiz, health_check, index},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = match AppState::new(config) {
        Ok(state) => state,
        Err(err) => {
            if let AppError::Validation(violations) = &err {
                for violation in violations {
                    error!("question bank violation at {}: {}", violation.path, violation.message);
                }
            }
            panic!("refusing to start with an invalid question bank: {err}");
        }
    };
    info!(
        "question bank validated: {} question(s)",
        state.question_bank.len()
    );
    info!("starting HTTP server on {host}:{port}");

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION]);
        for origin in state.config.allowed_origins.iter() {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .wrap(cors)
            .wrap(Logger::default())
            .service(index)
            .service(health_check)
            .service(get_quiz)
            .service(grade_quiz)
    })
    .bind((host, port))?
    .run()
    .await
}
