// src/api/handlers/samples.rs
use crate::api::AppState;
use actix_web::{web, HttpResponse, Result};
use base64::Engine;
use serde::Deserialize;
use serde_json::json;

pub async fn get_samples(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({"samples": state.config.sample_images})))
}

#[derive(Deserialize)]
pub struct FetchSampleRequest {
    pub url: String,
}

/// Fetches one of the configured sample images server-side and returns it
/// as a base64 payload, so the browser is not blocked by the image host's
/// CORS policy. Only URLs from the configured sample list are fetched.
pub async fn fetch_sample(
    state: web::Data<AppState>,
    req: web::Json<FetchSampleRequest>,
) -> Result<HttpResponse> {
    if !state.config.sample_images.iter().any(|u| u == &req.url) {
        return Ok(HttpResponse::BadRequest()
            .json(json!({"error": "URL is not in the sample image list."})));
    }

    let resp = match state.client.get(&req.url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            log::error!("Failed to fetch sample image {}: {}", req.url, e);
            return Ok(HttpResponse::BadGateway()
                .json(json!({"error": "Failed to fetch sample image."})));
        }
    };

    if !resp.status().is_success() {
        log::warn!("Sample image {} returned status {}", req.url, resp.status());
        return Ok(HttpResponse::BadGateway()
            .json(json!({"error": "Sample image host returned an error."})));
    }

    let mime_type = resp
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| {
            mime_guess::from_path(&req.url)
                .first_or_octet_stream()
                .to_string()
        });

    let bytes = match resp.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            log::error!("Failed to read sample image body {}: {}", req.url, e);
            return Ok(HttpResponse::BadGateway()
                .json(json!({"error": "Failed to read sample image body."})));
        }
    };

    let data = base64::engine::general_purpose::STANDARD.encode(&bytes);
    Ok(HttpResponse::Ok().json(json!({"mime_type": mime_type, "data": data})))
}
