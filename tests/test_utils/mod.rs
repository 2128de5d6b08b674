//! Test utilities for integration tests
use std::env;
use std::fs;
use std::sync::Arc;

use axum::{Router, body::Body};
use uuid::Uuid;

use agenthub::api::AppState;
use agenthub::api::app;
use agenthub::core::AppConfig;
use agenthub::core::db::{async_db, initialize_db};

/// Creates a test application router backed by a fresh database in a
/// uniquely named temporary directory, so tests can run in parallel.
/// The completion endpoint points at an unroutable address; tests
/// that exercise the chat flow pass a mock server url instead.
pub async fn test_app() -> Router {
    test_app_with_llm("http://127.0.0.1:1").await
}

pub async fn test_app_with_llm(llm_hostname: &str) -> Router {
    let dir = env::temp_dir().join(format!("agenthub-test-{}", Uuid::new_v4()));
    let db_path = dir.join("db");
    fs::create_dir_all(&db_path).expect("Failed to create db directory");
    let db_path = db_path.to_str().unwrap().to_string();

    let db = async_db(&db_path)
        .await
        .expect("Failed to connect to async db");
    db.call(|conn| {
        initialize_db(conn).expect("Failed to migrate db");
        Ok(())
    })
    .await
    .unwrap();

    let config = AppConfig {
        db_path,
        openai_api_hostname: llm_hostname.to_string(),
        openai_api_key: String::from("test-api-key"),
        openai_model: String::from("gpt-4o"),
    };
    let app_state = AppState::new(db, config);
    app(Arc::new(app_state))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("Response body was not utf-8")
}
