use axum::body::Bytes;
use reqwest::Client;
use tracing::{debug, error};
use url::Url;

use crate::error::{RelayError, UpstreamError};

pub const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

pub struct AudioController {
    client: Client,
}

impl AudioController {
    pub fn new(client: Client) -> Self {
        AudioController { client }
    }

    /// Fetches the raw bytes behind a caller-supplied URL. Any host is
    /// accepted.
    pub async fn fetch(&self, url: Option<&str>) -> Result<Bytes, RelayError> {
        let url = match url {
            Some(u) if !u.is_empty() => u,
            _ => return Err(RelayError::MissingAudioUrl),
        };

        match self.download(url).await {
            Ok(bytes) => {
                debug!("Relayed {} bytes of audio from {}", bytes.len(), url);
                Ok(bytes)
            }
            Err(e) => {
                error!("Failed to fetch audio file from {}: {}", url, e);
                Err(RelayError::Audio(e))
            }
        }
    }

    async fn download(&self, url: &str) -> Result<Bytes, UpstreamError> {
        let url = Url::parse(url)?;
        let bytes = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(bytes)
    }
}
