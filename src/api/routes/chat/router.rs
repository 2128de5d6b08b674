//! Router for the chat API

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use serde_json::json;

use super::public;
use crate::ai::chat::{PersistStatus, respond};
use crate::ai::persona::Agent;
use crate::api::state::AppState;

type SharedState = Arc<AppState>;

fn failed_request() -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(json!({ "error": "Failed to process your request" })),
    )
        .into_response()
}

/// Generate the next assistant reply for the client's transcript and,
/// when a conversation is addressed, record it there.
async fn chat_handler(
    State(state): State<SharedState>,
    axum::Json(payload): axum::Json<public::ChatRequest>,
) -> impl IntoResponse {
    let Some(last_message) = payload.messages.last() else {
        tracing::warn!("Chat request carried an empty transcript");
        return failed_request();
    };

    let agent = Agent::from_tag(payload.agent_type.as_deref().unwrap_or_default());

    let result = respond(
        &state.db,
        agent,
        &last_message.content,
        payload.conversation_id.as_deref(),
        &state.config.openai_api_hostname,
        &state.config.openai_api_key,
        &state.config.openai_model,
    )
    .await;

    match result {
        Ok(reply) => {
            if reply.persisted == PersistStatus::NotSaved {
                tracing::warn!("Returning a reply that was not saved to history");
            }
            axum::Json(reply.message).into_response()
        }
        Err(err) => {
            tracing::error!("Chat handler error: {}", err);
            failed_request()
        }
    }
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(chat_handler))
}
