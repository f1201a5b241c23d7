use std::sync::Arc;

use anyhow::Result;
use tokio::sync::watch;
use tracing::{error, info};

use folio_core::{AppConfig, SiteServer};

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    let resume = config.resume_path();
    if !resume.exists() {
        info!(
            "No resume at {}; downloads will answer 404 until one is added",
            resume.display()
        );
    }

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for ctrl-c: {}", e);
            return;
        }
        info!("Shutting down");
        let _ = shutdown_tx.send(true);
    });

    let server = SiteServer::new(config);
    server.run(shutdown_rx).await?;

    Ok(())
}
