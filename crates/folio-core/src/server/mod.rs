//! HTTP server for the site API
//!
//! Serves `GET /api/download-resume` and `POST /api/contact` until the
//! shutdown channel flips to `true`.

mod routes;

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::info;

use crate::config::AppConfig;
use crate::Result;

pub use routes::{build_router, SiteState};

/// HTTP server bound to the configured host and port
pub struct SiteServer {
    config: Arc<AppConfig>,
}

impl SiteServer {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    /// Bind the configured address and serve
    pub async fn run(&self, shutdown_rx: watch::Receiver<bool>) -> Result<()> {
        let listener = TcpListener::bind(self.config.bind_addr()).await?;
        self.serve(listener, shutdown_rx).await
    }

    /// Serve on an already bound listener (tests bind port 0)
    pub async fn serve(
        &self,
        listener: TcpListener,
        mut shutdown_rx: watch::Receiver<bool>,
    ) -> Result<()> {
        info!("Site server listening on: {}", listener.local_addr()?);
        info!(
            "Serving resume from: {}",
            self.config.resume_path().display()
        );

        let app = build_router(SiteState::from_config(&self.config));

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                loop {
                    if *shutdown_rx.borrow() {
                        break;
                    }
                    if shutdown_rx.changed().await.is_err() {
                        break;
                    }
                }
            })
            .await?;

        info!("Site server shutting down");
        Ok(())
    }
}
