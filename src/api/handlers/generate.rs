// src/api/handlers/generate.rs
use crate::api::AppState;
use crate::errors::GenError;
use crate::models::GenerationRequest;
use crate::prompts::PromptVariant;
use crate::runner;
use actix_web::{web, HttpResponse, Result};
use serde::Serialize;
use serde_json::json;

/// Runs one generation batch. Per-request model failures come back as
/// `failed` items inside a 200 response; only pre-flight problems
/// (validation, unknown provider) fail the request as a whole.
pub async fn run_generation(
    state: web::Data<AppState>,
    req: web::Json<GenerationRequest>,
) -> Result<HttpResponse> {
    match runner::run_generation(&state.config, &req, &state.client).await {
        Ok(batch) => Ok(HttpResponse::Ok().json(batch)),
        Err(e) => {
            let status_code = match &e {
                GenError::InvalidInput(_)
                | GenError::ImageDecode(_)
                | GenError::ProviderNotFound(_)
                | GenError::Config(_) => 400,
                _ => 500,
            };
            log::warn!("Generation batch rejected: {}", e);
            let body = json!({"error": e.to_string()});
            match status_code {
                400 => Ok(HttpResponse::BadRequest().json(body)),
                _ => Ok(HttpResponse::InternalServerError().json(body)),
            }
        }
    }
}

#[derive(Serialize)]
pub struct ModelsResponse {
    pub models: Vec<String>,
    pub default_model: Option<String>,
    pub max_fanout: usize,
    pub default_prompts: DefaultPrompts,
}

#[derive(Serialize)]
pub struct DefaultPrompts {
    pub html: &'static str,
    pub sketch: &'static str,
}

pub async fn get_models(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ModelsResponse {
        models: state.config.models.clone(),
        default_model: state.config.default_model().map(|s| s.to_string()),
        max_fanout: runner::MAX_FANOUT,
        default_prompts: DefaultPrompts {
            html: PromptVariant::Html.default_prompt(),
            sketch: PromptVariant::Sketch.default_prompt(),
        },
    }))
}
