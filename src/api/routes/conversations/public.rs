//! Public types for the conversations API
use serde::Deserialize;

use crate::conversations::Message;

#[derive(Deserialize)]
pub struct ConversationsQuery {
    pub id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConversationRequest {
    pub title: String,
    pub agent_type: Option<String>,
}

#[derive(Deserialize)]
pub struct AppendMessageRequest {
    pub id: String,
    pub message: Message,
}
