// src/api/routes.rs
use super::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(handlers::health_check))
            .route("/models", web::get().to(handlers::get_models))
            .route("/generate", web::post().to(handlers::run_generation))
            .route("/prompt", web::get().to(handlers::get_prompt))
            .route("/prompt", web::put().to(handlers::put_prompt))
            .route("/samples", web::get().to(handlers::get_samples))
            .route("/samples/fetch", web::post().to(handlers::fetch_sample)),
    );
}
