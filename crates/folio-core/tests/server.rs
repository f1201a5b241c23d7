//! HTTP-level tests for the site API router.

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use folio_core::server::{build_router, SiteState};
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

fn temp_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("folio-server-{}", Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn app_with_resume(dir: &PathBuf) -> axum::Router {
    build_router(SiteState::new(
        dir.join("resume.pdf"),
        "Alex_Morgan_Resume.pdf",
    ))
}

fn contact_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn contact_empty_name_is_rejected() {
    let app = app_with_resume(&temp_dir());
    let resp = app
        .oneshot(contact_request(
            r#"{"name":"","email":"a@b.com","message":"hi"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("required"));
}

#[tokio::test]
async fn contact_bad_email_is_rejected() {
    let app = app_with_resume(&temp_dir());
    let resp = app
        .oneshot(contact_request(
            r#"{"name":"A","email":"not-an-email","message":"hi"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("valid email"));
}

#[tokio::test]
async fn contact_valid_submission_is_acknowledged() {
    let app = app_with_resume(&temp_dir());
    let resp = app
        .oneshot(contact_request(
            r#"{"name":"A","email":"a@b.com","subject":"Hello","message":"hi"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(body["message"].as_str().unwrap().starts_with("Thank you"));
}

#[tokio::test]
async fn contact_malformed_json_is_rejected() {
    let app = app_with_resume(&temp_dir());
    let resp = app.oneshot(contact_request("{not json")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("required"));
}

#[tokio::test]
async fn contact_rejects_get() {
    let app = app_with_resume(&temp_dir());
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/contact")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn resume_absent_returns_404_json() {
    let app = app_with_resume(&temp_dir());
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/download-resume")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(resp.headers().get(header::CONTENT_DISPOSITION).is_none());
    let content_type = resp.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("application/json"));
    let body = body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn resume_present_streams_pdf_attachment() {
    let dir = temp_dir();
    let contents: Vec<u8> = (0..200_000u32).map(|i| (i % 251) as u8).collect();
    std::fs::write(dir.join("resume.pdf"), &contents).unwrap();

    let app = app_with_resume(&dir);
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/download-resume")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/pdf");
    assert_eq!(
        resp.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"Alex_Morgan_Resume.pdf\""
    );
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(bytes.as_ref(), contents.as_slice());
}
