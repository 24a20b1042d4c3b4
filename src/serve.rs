use std::net::SocketAddr;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::secrets::{Config, Hosting};

/// The hosting adaptation picked for this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Runner {
    Listener(SocketAddr),
    Lambda,
}

impl Runner {
    pub fn for_config(config: &Config) -> Self {
        match config.hosting {
            Hosting::Listener => Runner::Listener(config.bind_addr),
            Hosting::Lambda => Runner::Lambda,
        }
    }

    pub async fn run(self, app: Router) -> anyhow::Result<()> {
        match self {
            Runner::Listener(addr) => {
                let listener = TcpListener::bind(addr)
                    .await
                    .with_context(|| format!("failed to bind {}", addr))?;
                serve_on(listener, app).await
            }
            Runner::Lambda => {
                info!("🎧 Proxy handler running under the Lambda HTTP runtime");
                lambda_http::run(app).await.map_err(|e| anyhow::anyhow!(e))
            }
        }
    }
}

/// Serves `app` on an already bound listener until the process stops.
pub async fn serve_on(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    info!("🎧 Proxy server listening on http://{}", listener.local_addr()?);
    info!("📡 Routes: /api/search?q=..., /api/audio?url=...");
    axum::serve(listener, app).await?;
    Ok(())
}
