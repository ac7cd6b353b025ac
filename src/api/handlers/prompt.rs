// src/api/handlers/prompt.rs
use crate::api::AppState;
use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
pub struct PromptQuery {
    pub key: String,
}

#[derive(Deserialize)]
pub struct SavePromptRequest {
    pub key: String,
    pub body: String,
}

/// Loads the stored prompt for a key. Returns `body: null` when nothing is
/// stored yet or when the store is unavailable; the frontend then falls
/// back to its built-in default.
pub async fn get_prompt(
    state: web::Data<AppState>,
    query: web::Query<PromptQuery>,
) -> Result<HttpResponse> {
    let Some(store) = state.prompt_store.as_ref() else {
        return Ok(HttpResponse::Ok().json(json!({"key": query.key, "body": null})));
    };

    match store.load(&query.key).await {
        Ok(body) => Ok(HttpResponse::Ok().json(json!({"key": query.key, "body": body}))),
        Err(e) => {
            log::error!("Failed to load prompt '{}': {}", query.key, e);
            Ok(HttpResponse::InternalServerError()
                .json(json!({"error": "Failed to load prompt from storage."})))
        }
    }
}

pub async fn put_prompt(
    state: web::Data<AppState>,
    req: web::Json<SavePromptRequest>,
) -> Result<HttpResponse> {
    let Some(store) = state.prompt_store.as_ref() else {
        return Ok(HttpResponse::ServiceUnavailable()
            .json(json!({"error": "Prompt storage is not available."})));
    };

    match store.save(&req.key, &req.body).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({"key": req.key, "saved": true}))),
        Err(e) => {
            log::error!("Failed to save prompt '{}': {}", req.key, e);
            Ok(HttpResponse::InternalServerError()
                .json(json!({"error": "Failed to save prompt to storage."})))
        }
    }
}
