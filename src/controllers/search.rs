use axum::{body::Bytes, http::StatusCode};
use reqwest::Client;
use serde::Serialize;

use crate::error::{RelayError, UpstreamError};

/// Upstream response handed back to the caller untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relayed {
    pub status: StatusCode,
    pub body: Bytes,
}

#[derive(Serialize)]
struct SearchParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    q: Option<&'a str>,
}

pub struct SearchController {
    client: Client,
    search_url: String,
}

impl SearchController {
    pub fn new(client: Client, search_url: impl Into<String>) -> Self {
        SearchController {
            client,
            search_url: search_url.into(),
        }
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    /// Forwards `q` to the Deezer search endpoint. A missing `q` is sent as no
    /// parameter at all.
    pub async fn search(&self, q: Option<&str>) -> Result<Relayed, RelayError> {
        self.forward(q).await.map_err(RelayError::Search)
    }

    async fn forward(&self, q: Option<&str>) -> Result<Relayed, UpstreamError> {
        let response = self
            .client
            .get(&self.search_url)
            .query(&SearchParams { q })
            .send()
            .await?
            .error_for_status()?;

        let status = response.status();
        let body = response.bytes().await?;

        // Validate only; the original bytes go back out.
        serde_json::from_slice::<serde::de::IgnoredAny>(&body)?;

        Ok(Relayed { status, body })
    }
}
