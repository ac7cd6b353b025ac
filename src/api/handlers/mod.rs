// src/api/handlers/mod.rs
mod generate;
mod health;
mod prompt;
mod samples;

pub use generate::{get_models, run_generation};
pub use health::health_check;
pub use prompt::{get_prompt, put_prompt};
pub use samples::{fetch_sample, get_samples};
