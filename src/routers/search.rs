use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use std::collections::HashMap;

use crate::state::AppState;

/// GET /api/search - relay a track search to Deezer
///
/// A repeated `q` never fails extraction; the last value wins.
pub async fn search_route(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    match state.search.search(params.get("q").map(String::as_str)).await {
        Ok(relayed) => (
            relayed.status,
            [(header::CONTENT_TYPE, "application/json")],
            relayed.body,
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
