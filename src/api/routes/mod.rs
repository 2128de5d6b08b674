//! API routes module

pub mod chat;
pub mod conversations;

use std::sync::Arc;

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<AppState>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Chat routes
        .nest("/chat", chat::router())
        // Conversation routes
        .nest("/conversations", conversations::router())
}
