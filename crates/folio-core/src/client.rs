//! HTTP client for the site API
//!
//! Provides a type-safe interface for the two `/api` endpoints.

use std::path::{Path, PathBuf};
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::CONTENT_DISPOSITION;
use reqwest::{Client, Response};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};
use url::Url;

use crate::config::AppConfig;
use crate::contact::{ContactReply, ContactSubmission};
use crate::{Error, Result};

const CONTACT_PATH: &str = "/api/contact";
const RESUME_PATH: &str = "/api/download-resume";

/// Client for the site API
#[derive(Clone)]
pub struct SiteClient {
    client: Client,
    base_url: Url,
    fallback_resume_name: String,
}

impl SiteClient {
    /// Create a new client against `base_url`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
            fallback_resume_name: "resume.pdf".to_string(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let mut client = Self::new(
            &config.client.base_url,
            Duration::from_secs(config.client.request_timeout_secs),
        )?;
        client.fallback_resume_name = config.server.resume_download_name.clone();
        Ok(client)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Submit the contact form; returns the server's confirmation message
    pub async fn submit_contact(&self, submission: &ContactSubmission) -> Result<String> {
        let url = self.base_url.join(CONTACT_PATH)?;
        debug!("POST {}", url);

        let response = self.client.post(url).json(submission).send().await?;
        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let reply: ContactReply = response.json().await?;
        Ok(reply.message)
    }

    /// Download the resume into `dir`
    ///
    /// The body is written to `<name>.part` and renamed once complete. The
    /// partial file is removed on any failure.
    pub async fn download_resume(&self, dir: &Path) -> Result<PathBuf> {
        let url = self.base_url.join(RESUME_PATH)?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let filename = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .and_then(attachment_filename)
            .unwrap_or_else(|| self.fallback_resume_name.clone());

        tokio::fs::create_dir_all(dir).await?;
        let target = dir.join(&filename);
        let part = dir.join(format!("{}.part", filename));

        let written = match write_body(&part, response).await {
            Ok(written) => written,
            Err(e) => {
                let _ = tokio::fs::remove_file(&part).await;
                return Err(e);
            }
        };

        if let Err(e) = tokio::fs::rename(&part, &target).await {
            let _ = tokio::fs::remove_file(&part).await;
            return Err(e.into());
        }

        info!(bytes = written, "Resume saved to {}", target.display());
        Ok(target)
    }
}

async fn write_body(path: &Path, response: Response) -> Result<u64> {
    let mut file = tokio::fs::File::create(path).await?;
    let mut stream = response.bytes_stream();
    let mut written = 0u64;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }

    file.flush().await?;
    Ok(written)
}

/// Turn a non-2xx response into `Error::Status`, keeping the server's message
async fn status_error(response: Response) -> Error {
    let status = response.status();
    let message = match response.json::<ContactReply>().await {
        Ok(reply) => reply.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string(),
    };
    Error::Status {
        status: status.as_u16(),
        message,
    }
}

/// Extract the filename from an `attachment; filename="..."` header
///
/// Only the final path component is kept.
pub fn attachment_filename(header: &str) -> Option<String> {
    let raw = header
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("filename="))?;
    let name = raw.trim_matches('"');
    let name = Path::new(name).file_name()?.to_str()?;
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_filename_quoted() {
        assert_eq!(
            attachment_filename("attachment; filename=\"Alex_Morgan_Resume.pdf\""),
            Some("Alex_Morgan_Resume.pdf".to_string())
        );
    }

    #[test]
    fn test_attachment_filename_unquoted() {
        assert_eq!(
            attachment_filename("attachment; filename=cv.pdf"),
            Some("cv.pdf".to_string())
        );
    }

    #[test]
    fn test_attachment_filename_strips_directories() {
        assert_eq!(
            attachment_filename("attachment; filename=\"../../etc/passwd\""),
            Some("passwd".to_string())
        );
    }

    #[test]
    fn test_attachment_filename_missing() {
        assert_eq!(attachment_filename("attachment"), None);
        assert_eq!(attachment_filename("attachment; filename=\"\""), None);
    }

    #[test]
    fn test_invalid_base_url() {
        let err = SiteClient::new("not a url", Duration::from_secs(1)).err();
        assert!(matches!(err, Some(Error::UrlParse(_))));
    }
}
