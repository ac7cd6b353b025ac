// src/config.rs
use crate::errors::{GenError, Result};

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_base: String,
    pub api_key: String,
    pub models: Vec<String>,
}

/// Configuration for an OpenAI-compatible provider.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    pub api_base: String,
    pub api_key: String,
    pub models: Vec<String>,
}

/// High-level application configuration loaded from environment variables.
///
/// This is the explicit replacement for the demo's module-global API client:
/// everything the request path needs is constructed here once and passed down.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini: Option<GeminiConfig>,
    pub openai: Option<OpenAIConfig>,
    /// Flattened `provider:model` identifiers across all configured providers.
    pub models: Vec<String>,
    /// Externally hosted sample images offered by the frontend.
    pub sample_images: Vec<String>,
    pub port: u16,
}

/// Sample images shown when `SAMPLE_IMAGE_URLS` is not set.
const DEFAULT_SAMPLE_IMAGES: &[&str] = &[
    "https://storage.googleapis.com/generativeai-downloads/images/croissant.jpg",
    "https://storage.googleapis.com/generativeai-downloads/images/factory.png",
    "https://storage.googleapis.com/generativeai-downloads/images/scones.jpg",
];

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let mut all_models = Vec::new();

        let mut gemini_config = None;
        if let Ok(api_key) = std::env::var("GEMINI_API_KEY") {
            let api_base = std::env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string());
            let models_str = std::env::var("GEMINI_MODELS")
                .unwrap_or_else(|_| "gemini-2.0-flash,gemini-1.5-pro-latest".to_string());
            let models = split_csv(&models_str);
            all_models.extend(models.iter().map(|m| format!("gemini:{}", m)));
            gemini_config = Some(GeminiConfig { api_base, api_key, models });
        }

        let mut openai_config = None;
        if let Ok(api_key) = std::env::var("OPENAI_API_KEY") {
            let api_base = std::env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
            let models_str =
                std::env::var("OPENAI_MODELS").unwrap_or_else(|_| "gpt-4o-mini".to_string());
            let models = split_csv(&models_str);
            all_models.extend(models.iter().map(|m| format!("openai:{}", m)));
            openai_config = Some(OpenAIConfig { api_base, api_key, models });
        }

        if gemini_config.is_none() && openai_config.is_none() {
            return Err(GenError::Config(
                "No providers configured. Please set either GEMINI_API_KEY or OPENAI_API_KEY."
                    .to_string(),
            ));
        }

        let sample_images = match std::env::var("SAMPLE_IMAGE_URLS") {
            Ok(urls) => split_csv(&urls),
            Err(_) => DEFAULT_SAMPLE_IMAGES.iter().map(|s| s.to_string()).collect(),
        };

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        Ok(AppConfig {
            gemini: gemini_config,
            openai: openai_config,
            models: all_models,
            sample_images,
            port,
        })
    }

    /// The model used when a request does not name one: first configured.
    pub fn default_model(&self) -> Option<&str> {
        self.models.first().map(|s| s.as_str())
    }
}

fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_csv_trims_and_drops_empties() {
        assert_eq!(
            split_csv(" a, b ,,c "),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn test_default_model_is_first_configured() {
        let config = AppConfig {
            gemini: None,
            openai: None,
            models: vec!["gemini:gemini-2.0-flash".into(), "openai:gpt-4o-mini".into()],
            sample_images: vec![],
            port: 8080,
        };
        assert_eq!(config.default_model(), Some("gemini:gemini-2.0-flash"));
    }
}
