// src/runner.rs
use crate::config::AppConfig;
use crate::errors::{GenError, Result};
use crate::extract::extract_code;
use crate::models::{BatchResult, GenerationOutcome, GenerationRequest, OutputItem};
use crate::providers::{gemini::GeminiProvider, openai::OpenAIProvider, ImageAttachment, LlmProvider};
use base64::Engine;
use futures::future;
use std::time::Instant;

/// Upper bound on the fan-out slider.
pub const MAX_FANOUT: usize = 10;

/// Rejects a request before any network call is made.
pub fn validate_request(req: &GenerationRequest) -> Result<()> {
    if req.prompt.trim().is_empty() {
        return Err(GenError::InvalidInput("Prompt must not be empty".to_string()));
    }
    if req.image_data.trim().is_empty() {
        return Err(GenError::InvalidInput("No image provided".to_string()));
    }
    if !req.image_mime_type.starts_with("image/") {
        return Err(GenError::InvalidInput(format!(
            "'{}' is not an image mime type",
            req.image_mime_type
        )));
    }
    if req.count < 1 || req.count > MAX_FANOUT {
        return Err(GenError::InvalidInput(format!(
            "Count must be between 1 and {}, got {}",
            MAX_FANOUT, req.count
        )));
    }
    base64::engine::general_purpose::STANDARD.decode(req.image_data.trim())?;
    Ok(())
}

/// Appends the optional free-text instruction to the prompt.
pub fn compose_prompt(prompt: &str, user_input: Option<&str>) -> String {
    match user_input.map(str::trim).filter(|s| !s.is_empty()) {
        Some(extra) => format!("{}\n\nAdditional instructions: {}", prompt.trim_end(), extra),
        None => prompt.trim_end().to_string(),
    }
}

/// Parses a model string like "provider:model_name" and returns the provider
/// and model. Defaults to "gemini" if no provider is specified.
pub fn parse_model_string(model_str: &str) -> (String, String) {
    match model_str.split_once(':') {
        Some((provider, model)) => (provider.to_string(), model.to_string()),
        None => ("gemini".to_string(), model_str.to_string()),
    }
}

/// Call the appropriate provider based on the provider name.
async fn call_provider(
    config: &AppConfig,
    client: &reqwest::Client,
    provider_name: &str,
    model_name: &str,
    prompt: &str,
    image: ImageAttachment<'_>,
) -> Result<(String, u64)> {
    match provider_name {
        "gemini" => {
            let gemini_config = config
                .gemini
                .as_ref()
                .ok_or_else(|| GenError::ProviderNotFound("gemini".to_string()))?;
            let provider = GeminiProvider::new(client.clone(), gemini_config.clone());
            provider.generate(model_name, prompt, image).await
        }
        "openai" => {
            let openai_config = config
                .openai
                .as_ref()
                .ok_or_else(|| GenError::ProviderNotFound("openai".to_string()))?;
            let provider = OpenAIProvider::new(client.clone(), openai_config.clone());
            provider.generate(model_name, prompt, image).await
        }
        _ => Err(GenError::ProviderNotFound(provider_name.to_string())),
    }
}

/// Maps joined per-request results into ordered output items.
///
/// Ids are 1-based submission indices; one request's failure leaves the
/// others untouched. The code field is derived here, exactly once.
pub fn collect_outcomes(results: Vec<Result<(String, u64)>>) -> Vec<OutputItem> {
    results
        .into_iter()
        .enumerate()
        .map(|(idx, result)| {
            let outcome = match result {
                Ok((full_response, latency_ms)) => GenerationOutcome::Succeeded {
                    code: extract_code(&full_response),
                    full_response,
                    latency_ms,
                },
                Err(e) => GenerationOutcome::Failed { reason: e.to_string() },
            };
            OutputItem { id: idx as u32 + 1, outcome }
        })
        .collect()
}

/// Runs one generation batch: validates the input, fans out `count`
/// identical requests concurrently, and joins them into per-item outcomes.
///
/// Only validation and an unknown provider fail the batch as a whole;
/// individual model failures surface as `Failed` items. There is no retry
/// and no throttling between the concurrent requests.
pub async fn run_generation(
    config: &AppConfig,
    req: &GenerationRequest,
    client: &reqwest::Client,
) -> Result<BatchResult> {
    validate_request(req)?;

    let model = match req.model.as_deref() {
        Some(m) => m.to_string(),
        None => config
            .default_model()
            .ok_or_else(|| GenError::Config("No models configured".to_string()))?
            .to_string(),
    };
    let (provider_name, model_name) = parse_model_string(&model);

    // Fail fast on an unknown provider instead of producing N identical
    // Failed items.
    match provider_name.as_str() {
        "gemini" if config.gemini.is_some() => {}
        "openai" if config.openai.is_some() => {}
        other => return Err(GenError::ProviderNotFound(other.to_string())),
    }

    let prompt = compose_prompt(&req.prompt, req.user_input.as_deref());
    let image = ImageAttachment {
        mime_type: &req.image_mime_type,
        data: req.image_data.trim(),
    };

    let batch_start = Instant::now();
    log::info!(
        "Starting generation batch: model={} fanout={}",
        model,
        req.count
    );

    let futures: Vec<_> = (0..req.count)
        .map(|_| call_provider(config, client, &provider_name, &model_name, &prompt, image))
        .collect();

    let results = future::join_all(futures).await;
    let items = collect_outcomes(results);

    let succeeded = items
        .iter()
        .filter(|i| matches!(i.outcome, GenerationOutcome::Succeeded { .. }))
        .count();
    let failed = items.len() - succeeded;

    log::info!(
        "Batch of {} completed in {}ms ({} ok, {} failed)",
        items.len(),
        batch_start.elapsed().as_millis(),
        succeeded,
        failed
    );

    Ok(BatchResult {
        batch_id: uuid::Uuid::new_v4().to_string(),
        model,
        total: items.len(),
        succeeded,
        failed,
        created_at: chrono::Utc::now().to_rfc3339(),
        items,
    })
}
