use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub const SERVICE_NAME: &str = "deezer-relay";

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

pub struct RootController;

impl RootController {
    pub async fn root() -> Response {
        format!("{} {}: /api/search?q=..., /api/audio?url=...", SERVICE_NAME, env!("CARGO_PKG_VERSION"))
            .into_response()
    }

    pub async fn health_check() -> Response {
        Json(Health {
            status: "ok",
            service: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
        })
        .into_response()
    }
}
