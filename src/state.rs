use std::sync::Arc;

use reqwest::Client;

use crate::controllers::{AudioController, SearchController};
use crate::secrets::Config;

/// Shared by every request; both controllers reuse one outbound client.
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<SearchController>,
    pub audio: Arc<AudioController>,
}

impl AppState {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, config.deezer_search_url.clone()))
    }

    pub fn with_client(client: Client, search_url: impl Into<String>) -> Self {
        AppState {
            search: Arc::new(SearchController::new(client.clone(), search_url)),
            audio: Arc::new(AudioController::new(client)),
        }
    }
}
