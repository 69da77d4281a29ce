#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use api::config::{AppConfig, MailConfig};
use api::mailer::{Email, MailError, Mailer};
use api::routes;
use api::state::AppState;
use api::store::TestimonialStore;
use shared::Language;

/// Mailer that records every message it is asked to deliver.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<Email>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: Email) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

/// Mailer that always fails, either as a credentials rejection or as a
/// generic transport failure.
pub struct FailingMailer {
    pub auth_failure: bool,
}

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _email: Email) -> Result<(), MailError> {
        if self.auth_failure {
            Err(MailError::Auth)
        } else {
            Err(MailError::Status(reqwest::StatusCode::BAD_GATEWAY))
        }
    }
}

/// Mailer that delivers the first message and fails every later one.
#[derive(Default)]
pub struct SecondSendFailsMailer {
    pub sent: Mutex<Vec<Email>>,
    calls: AtomicUsize,
}

#[async_trait]
impl Mailer for SecondSendFailsMailer {
    async fn send(&self, email: Email) -> Result<(), MailError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            self.sent.lock().unwrap().push(email);
            Ok(())
        } else {
            Err(MailError::Status(reqwest::StatusCode::BAD_GATEWAY))
        }
    }
}

pub fn test_config(testimonials_path: PathBuf) -> AppConfig {
    AppConfig {
        mail: MailConfig {
            api_url: "http://127.0.0.1:9/send".to_string(),
            api_key: "test-key".to_string(),
            from_address: "noreply@example.com".to_string(),
            owner_address: "owner@example.com".to_string(),
        },
        testimonials_path,
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        language: Language::En,
        allowed_origins: Vec::new(),
    }
}

pub fn test_app_with_path(mailer: Arc<dyn Mailer>, testimonials_path: PathBuf) -> Router {
    let config = test_config(testimonials_path);
    let store = TestimonialStore::new(config.testimonials_path.clone());
    routes::app_router(AppState::new(config, mailer, store))
}

pub fn test_app(mailer: Arc<dyn Mailer>, data_dir: &Path) -> Router {
    test_app_with_path(mailer, data_dir.join("testimonials.json"))
}

pub async fn post_json(
    app: Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: String) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}
