// src/prompts.rs
use serde::{Deserialize, Serialize};

/// The two built-in generation styles the frontend can reset to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptVariant {
    Html,
    Sketch,
}

/// Default prompt asking the model to recreate the uploaded image as a web page.
pub const HTML_PROMPT: &str = "\
You are an expert web developer. Look carefully at the attached image and \
recreate it as a single self-contained web page: layout, colors, typography \
and spacing should match as closely as possible. Use only HTML, CSS and \
vanilla JavaScript, all inline in one document. First briefly explain what \
you see and how you will structure the page, then return the complete \
document in a single fenced code block tagged `html`.";

/// Default prompt asking the model for a generative-art interpretation.
pub const SKETCH_PROMPT: &str = "\
You are a creative coder. Look at the attached image and write a p5.js \
sketch inspired by it: capture its palette, composition and mood rather \
than reproducing it pixel by pixel. The sketch must run standalone with \
`setup()` and `draw()` and draw on a canvas sized to the window. First \
describe your interpretation in a few sentences, then return the complete \
sketch in a single fenced code block tagged `javascript`.";

impl PromptVariant {
    pub fn default_prompt(self) -> &'static str {
        match self {
            PromptVariant::Html => HTML_PROMPT,
            PromptVariant::Sketch => SKETCH_PROMPT,
        }
    }

    /// Storage key under which the user's edited copy of this variant lives.
    pub fn storage_key(self) -> &'static str {
        match self {
            PromptVariant::Html => "prompt.html",
            PromptVariant::Sketch => "prompt.sketch",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_have_distinct_prompts_and_keys() {
        assert_ne!(
            PromptVariant::Html.default_prompt(),
            PromptVariant::Sketch.default_prompt()
        );
        assert_ne!(
            PromptVariant::Html.storage_key(),
            PromptVariant::Sketch.storage_key()
        );
    }

    #[test]
    fn test_variant_serde_names() {
        assert_eq!(serde_json::to_string(&PromptVariant::Html).unwrap(), "\"html\"");
        assert_eq!(serde_json::to_string(&PromptVariant::Sketch).unwrap(), "\"sketch\"");
    }
}
