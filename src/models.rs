// src/models.rs
use serde::{Deserialize, Serialize};

/// One user action's worth of input: the image, the prompt, and how many
/// identical requests to fan out. Created per submission, discarded after
/// the batch resolves.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    /// Base64-encoded image bytes (no data-URL prefix).
    pub image_data: String,
    /// Mime type of the image, e.g. `image/png`.
    pub image_mime_type: String,
    /// The generation prompt.
    pub prompt: String,
    /// Optional free-text instruction appended to the prompt.
    #[serde(default)]
    pub user_input: Option<String>,
    /// `provider:model` identifier; falls back to the first configured model.
    #[serde(default)]
    pub model: Option<String>,
    /// Number of concurrent identical requests, 1 to 10.
    #[serde(default = "default_count")]
    pub count: usize,
}

fn default_count() -> usize {
    1
}

/// Outcome of a single request within a batch. Each request is tracked
/// independently so one failure never discards the other results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GenerationOutcome {
    Succeeded {
        /// Extracted once from `full_response`; never recomputed after
        /// the user edits it client-side.
        code: String,
        full_response: String,
        latency_ms: u64,
    },
    Failed {
        reason: String,
    },
}

/// One entry per concurrent request, ordered by submission index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputItem {
    /// Sequential 1-based id, unique within the batch.
    pub id: u32,
    #[serde(flatten)]
    pub outcome: GenerationOutcome,
}

/// The joined result of one generation batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResult {
    pub batch_id: String,
    pub model: String,
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub created_at: String,
    pub items: Vec<OutputItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let req: GenerationRequest = serde_json::from_str(
            r#"{"image_data":"aGk=","image_mime_type":"image/png","prompt":"draw"}"#,
        )
        .unwrap();
        assert_eq!(req.count, 1);
        assert!(req.model.is_none());
        assert!(req.user_input.is_none());
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let ok = OutputItem {
            id: 1,
            outcome: GenerationOutcome::Succeeded {
                code: "<div/>".into(),
                full_response: "```html\n<div/>\n```".into(),
                latency_ms: 120,
            },
        };
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["status"], "succeeded");
        assert_eq!(json["id"], 1);
        assert_eq!(json["code"], "<div/>");

        let failed = OutputItem {
            id: 2,
            outcome: GenerationOutcome::Failed { reason: "boom".into() },
        };
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["reason"], "boom");
    }
}
