use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub const MISSING_AUDIO_URL_MESSAGE: &str = "L'URL du fichier audio est requise";
pub const SEARCH_ERROR_MESSAGE: &str = "Erreur avec l'API Deezer";
pub const AUDIO_ERROR_MESSAGE: &str = "Erreur avec la récupération du fichier audio";

/// Failures surfaced by the relays.
///
/// Upstream causes are kept for server-side logging only; clients always get
/// the fixed message of the variant.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("audio url parameter is missing")]
    MissingAudioUrl,
    #[error("search upstream failed")]
    Search(#[source] UpstreamError),
    #[error("audio upstream failed")]
    Audio(#[source] UpstreamError),
}

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Url(#[from] url::ParseError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MissingAudioUrl => StatusCode::BAD_REQUEST,
            RelayError::Search(_) | RelayError::Audio(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            RelayError::MissingAudioUrl => MISSING_AUDIO_URL_MESSAGE,
            RelayError::Search(_) => SEARCH_ERROR_MESSAGE,
            RelayError::Audio(_) => AUDIO_ERROR_MESSAGE,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status(), self.message()).into_response()
    }
}
