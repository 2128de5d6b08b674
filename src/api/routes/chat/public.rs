//! Public types for the chat API
use serde::Deserialize;

use crate::conversations::Message;

/// The client sends its whole visible transcript; only the last
/// message is forwarded to the completion provider.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    pub conversation_id: Option<String>,
    pub agent_type: Option<String>,
}
