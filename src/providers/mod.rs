// src/providers/mod.rs

use crate::errors::Result;

pub mod gemini;
pub mod openai;

/// Base64 image payload attached to a generation request.
#[derive(Debug, Clone, Copy)]
pub struct ImageAttachment<'a> {
    pub mime_type: &'a str,
    /// Base64-encoded bytes, without a data-URL prefix.
    pub data: &'a str,
}

impl<'a> ImageAttachment<'a> {
    /// Renders the attachment as a `data:` URL for APIs that take one.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// A common trait for hosted vision-model backends.
///
/// Note: we're not using async_trait here, so implementers must handle
/// async directly.
pub trait LlmProvider: Send + Sync {
    /// Sends one prompt-plus-image request to the model.
    ///
    /// # Arguments
    /// * `model` - The specific model to use (e.g. "gemini-2.0-flash", "gpt-4o-mini").
    /// * `prompt` - The full composed prompt text.
    /// * `image` - The uploaded image payload.
    ///
    /// # Returns
    /// A `Result` with the model's full response text and the latency in
    /// milliseconds.
    fn generate(
        &self,
        model: &str,
        prompt: &str,
        image: ImageAttachment<'_>,
    ) -> impl std::future::Future<Output = Result<(String, u64)>> + Send;
}
