//! API routes
//!
//! - `GET /api/download-resume` - stream the resume PDF as an attachment
//! - `POST /api/contact` - validate and log a contact submission

use std::io::ErrorKind;
use std::path::PathBuf;

use axum::{
    body::Body,
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use bytes::Bytes;
use futures_util::{Stream, TryStreamExt};
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::contact::{ContactReply, ContactSubmission, MSG_REQUIRED, MSG_THANKS};

const MSG_RESUME_MISSING: &str = "Resume file not found. Please contact the administrator.";
const MSG_RESUME_FAILED: &str = "Error downloading resume";
const MSG_INTERNAL: &str = "Internal server error";

/// Chunk size used when streaming files
const CHUNK_SIZE: usize = 64 * 1024;

/// Shared handler state
#[derive(Debug, Clone)]
pub struct SiteState {
    pub resume_path: PathBuf,
    pub resume_download_name: String,
}

impl SiteState {
    pub fn new(resume_path: impl Into<PathBuf>, resume_download_name: impl Into<String>) -> Self {
        Self {
            resume_path: resume_path.into(),
            resume_download_name: resume_download_name.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.resume_path(),
            config.server.resume_download_name.clone(),
        )
    }
}

/// Build the API router
pub fn build_router(state: SiteState) -> Router {
    Router::new()
        .route("/api/download-resume", get(download_resume))
        .route("/api/contact", post(submit_contact))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn reply(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ContactReply::new(message))).into_response()
}

/// GET /api/download-resume
///
/// 404 when the file is absent, 500 when it cannot be opened. Both are
/// decided before any body byte is sent.
async fn download_resume(State(state): State<SiteState>) -> Response {
    let metadata = match tokio::fs::metadata(&state.resume_path).await {
        Ok(metadata) if metadata.is_file() => metadata,
        Ok(_) => return reply(StatusCode::NOT_FOUND, MSG_RESUME_MISSING),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %state.resume_path.display(), "Resume file not found");
            return reply(StatusCode::NOT_FOUND, MSG_RESUME_MISSING);
        }
        Err(e) => {
            error!(error = %e, "Resume download error");
            return reply(StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL);
        }
    };

    let file = match File::open(&state.resume_path).await {
        Ok(file) => file,
        Err(e) => {
            error!(error = %e, "Failed to open resume");
            return reply(StatusCode::INTERNAL_SERVER_ERROR, MSG_RESUME_FAILED);
        }
    };

    let disposition = format!(
        "attachment; filename=\"{}\"",
        state.resume_download_name.replace('"', "")
    );
    let disposition = match HeaderValue::from_str(&disposition) {
        Ok(value) => value,
        Err(e) => {
            error!(error = %e, "Invalid resume download name");
            return reply(StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL);
        }
    };

    info!(bytes = metadata.len(), "Streaming resume");

    let body = Body::from_stream(
        file_chunks(file).inspect_err(|e| error!(error = %e, "File streaming error")),
    );

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (header::CONTENT_DISPOSITION, disposition),
            (header::CONTENT_LENGTH, HeaderValue::from(metadata.len())),
        ],
        body,
    )
        .into_response()
}

/// Read a file as a stream of chunks
fn file_chunks(file: File) -> impl Stream<Item = std::io::Result<Bytes>> {
    futures_util::stream::try_unfold(file, |mut file| async move {
        let mut buf = vec![0u8; CHUNK_SIZE];
        let read = file.read(&mut buf).await?;
        if read == 0 {
            return Ok(None);
        }
        buf.truncate(read);
        Ok(Some((Bytes::from(buf), file)))
    })
}

/// POST /api/contact
///
/// Nothing is persisted; the submission is only logged.
async fn submit_contact(payload: Result<Json<ContactSubmission>, JsonRejection>) -> Response {
    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(e) => {
            warn!(error = %e, "Rejected contact payload");
            return reply(StatusCode::BAD_REQUEST, MSG_REQUIRED);
        }
    };

    if let Err(e) = submission.validate() {
        debug!(reason = %e, "Contact submission failed validation");
        return reply(StatusCode::BAD_REQUEST, e.to_string());
    }

    info!(
        submission_id = %Uuid::new_v4(),
        received_at = %chrono::Utc::now().to_rfc3339(),
        name = %submission.name,
        email = %submission.email,
        subject = ?submission.subject,
        message = %submission.message,
        "Contact form submission"
    );

    reply(StatusCode::OK, MSG_THANKS)
}
