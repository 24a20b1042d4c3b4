use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::collections::HashMap;

use crate::controllers::audio::AUDIO_CONTENT_TYPE;
use crate::state::AppState;

/// GET /api/audio - relay the bytes behind `url` as mp3
pub async fn audio_route(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    match state.audio.fetch(params.get("url").map(String::as_str)).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, AUDIO_CONTENT_TYPE)],
            bytes,
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
