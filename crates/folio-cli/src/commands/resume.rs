use std::path::PathBuf;

use anyhow::Result;

use folio_core::{AppConfig, SiteClient};

pub async fn run(config: &AppConfig, out: Option<PathBuf>) -> Result<()> {
    let dir = out.unwrap_or_else(|| config.download_dir());
    let client = SiteClient::from_config(config)?;

    let path = client.download_resume(&dir).await?;
    println!("Resume saved to {}", path.display());

    Ok(())
}
