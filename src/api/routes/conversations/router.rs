//! Router for the conversations API

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_extra::extract::Query;
use serde_json::json;

use super::public;
use crate::ai::persona::Agent;
use crate::api::state::AppState;
use crate::conversations::{
    StoreError, append_message, create_conversation, find_conversation_by_id, list_conversations,
};

type SharedState = Arc<AppState>;

fn not_found() -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        axum::Json(json!({ "error": "Conversation not found" })),
    )
        .into_response()
}

/// Get one conversation by id, or every conversation ordered by most
/// recent activity when no id is given
async fn conversation_list(
    State(state): State<SharedState>,
    Query(params): Query<public::ConversationsQuery>,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    match params.id {
        Some(id) => match find_conversation_by_id(&state.db, &id).await {
            Ok(conversation) => Ok(axum::Json(conversation).into_response()),
            Err(StoreError::NotFound | StoreError::InvalidId(_)) => Ok(not_found()),
            Err(err) => Err(err.into()),
        },
        None => {
            let conversations = list_conversations(&state.db).await?;
            Ok(axum::Json(conversations).into_response())
        }
    }
}

/// Create a conversation seeded with the persona's greeting
async fn conversation_create(
    State(state): State<SharedState>,
    axum::Json(payload): axum::Json<public::CreateConversationRequest>,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    let agent = Agent::from_tag(payload.agent_type.as_deref().unwrap_or_default());
    let conversation = create_conversation(&state.db, &payload.title, agent).await?;
    Ok(axum::Json(conversation))
}

/// Append a message to a conversation and return the updated record
async fn conversation_append(
    State(state): State<SharedState>,
    axum::Json(payload): axum::Json<public::AppendMessageRequest>,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    match append_message(&state.db, &payload.id, &payload.message).await {
        Ok(conversation) => Ok(axum::Json(conversation).into_response()),
        Err(StoreError::NotFound | StoreError::InvalidId(_)) => Ok(not_found()),
        Err(err) => Err(err.into()),
    }
}

/// Create the conversations router
pub fn router() -> Router<SharedState> {
    Router::new().route(
        "/",
        get(conversation_list)
            .post(conversation_create)
            .put(conversation_append),
    )
}
