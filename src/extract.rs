// src/extract.rs
use regex::Regex;
use std::sync::OnceLock;

/// Matches the first fenced code block: opening fence with an optional
/// language tag, lazy body, closing fence. The tag is ignored.
fn fence_regex() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| {
        Regex::new(r"```[A-Za-z0-9_+#.-]*[ \t]*\r?\n?(?s)(.*?)```").unwrap()
    })
}

/// Pulls the code out of free-form model output.
///
/// Returns the trimmed inner content of the first fenced code block. When the
/// response contains no complete fenced block (including an unterminated
/// fence), falls back to the whole response, trimmed: a blank editor hides
/// the model's answer, while the raw text is at least visible and editable.
pub fn extract_code(text: &str) -> String {
    match fence_regex().captures(text) {
        Some(caps) => caps[1].trim().to_string(),
        None => text.trim().to_string(),
    }
}
