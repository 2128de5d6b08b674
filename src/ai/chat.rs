//! Chat turn orchestration: one completion, one best-effort append.

use tokio_rusqlite::Connection;

use crate::ai::persona::Agent;
use crate::conversations::{Message, Role, append_message};
use crate::openai::{CompletionError, completion};

/// Whether the generated reply made it into the conversation store.
/// Persistence is secondary to answering: a failed append must not
/// cost the client an otherwise successful completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PersistStatus {
    /// Appended to the addressed conversation.
    Saved,
    /// Append failed; the reply was returned anyway.
    NotSaved,
    /// No conversation was addressed.
    Skipped,
}

#[derive(Debug)]
pub struct ChatReply {
    pub message: Message,
    pub persisted: PersistStatus,
}

/// Run one chat turn: complete the latest user utterance under the
/// persona's system prompt, then append the assistant reply to the
/// addressed conversation. Only the latest utterance is sent to the
/// model; prior turns are not replayed.
pub async fn respond(
    db: &Connection,
    agent: Agent,
    user_text: &str,
    conversation_id: Option<&str>,
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<ChatReply, CompletionError> {
    let text = completion(
        agent.system_prompt(),
        user_text,
        api_hostname,
        api_key,
        model,
    )
    .await?;

    let message = Message::new(Role::Assistant, &text);

    let persisted = match conversation_id {
        Some(id) => match append_message(db, id, &message).await {
            Ok(_) => PersistStatus::Saved,
            Err(err) => {
                tracing::error!("Failed to save reply to conversation {}: {}", id, err);
                PersistStatus::NotSaved
            }
        },
        None => PersistStatus::Skipped,
    };

    Ok(ChatReply { message, persisted })
}
