// src/api/state.rs
use crate::config::AppConfig;
use crate::storage::PromptStore;
use reqwest::Client;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub client: Client,
    /// None when the database could not be opened; prompt persistence
    /// endpoints degrade gracefully in that case.
    pub prompt_store: Option<Arc<dyn PromptStore>>,
}

impl AppState {
    pub fn new(config: AppConfig, prompt_store: Option<Arc<dyn PromptStore>>) -> Self {
        Self {
            config: Arc::new(config),
            client: Client::new(),
            prompt_store,
        }
    }
}
