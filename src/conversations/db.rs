//! Persistence for conversation documents.
//!
//! Each conversation is a single row holding the full transcript as a
//! JSON document. Appending a message is one atomic UPDATE (array
//! push plus `updatedAt` set), so concurrent appends to the same
//! conversation both land in whatever order SQLite serializes them.

use thiserror::Error;
use tokio_rusqlite::{Connection, params};
use uuid::Uuid;

use super::models::{Conversation, Message, timestamp};
use crate::ai::persona::Agent;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("conversation not found")]
    NotFound,
    #[error("malformed conversation id: {0}")]
    InvalidId(String),
    #[error("conversation store error: {0}")]
    Storage(String),
}

impl From<tokio_rusqlite::Error> for StoreError {
    fn from(err: tokio_rusqlite::Error) -> Self {
        match err {
            tokio_rusqlite::Error::Rusqlite(rusqlite::Error::QueryReturnedNoRows) => {
                StoreError::NotFound
            }
            err => StoreError::Storage(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Storage(err.to_string())
    }
}

/// Ids are minted as UUIDs; anything that doesn't parse as one can't
/// match a stored conversation.
fn validate_id(id: &str) -> Result<(), StoreError> {
    Uuid::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))?;
    Ok(())
}

/// Insert a new conversation seeded with the persona's greeting.
pub async fn create_conversation(
    db: &Connection,
    title: &str,
    agent: Agent,
) -> Result<Conversation, StoreError> {
    let conversation = Conversation::new(title, agent);
    let id = conversation.id.clone();
    let data = serde_json::to_string(&conversation)?;

    db.call(move |conn| {
        let mut stmt = conn.prepare("INSERT INTO conversation (id, data) VALUES (?1, ?2)")?;
        stmt.execute(params![id, data])?;
        Ok(())
    })
    .await?;

    Ok(conversation)
}

pub async fn find_conversation_by_id(
    db: &Connection,
    id: &str,
) -> Result<Conversation, StoreError> {
    validate_id(id)?;

    let conversation_id = id.to_owned();
    let data = db
        .call(move |conn| {
            let mut stmt = conn.prepare("SELECT data FROM conversation WHERE id = ?1")?;
            let data: String = stmt.query_row([conversation_id], |row| row.get(0))?;
            Ok(data)
        })
        .await?;

    Ok(serde_json::from_str(&data)?)
}

/// All conversations, most recently active first.
pub async fn list_conversations(db: &Connection) -> Result<Vec<Conversation>, StoreError> {
    let rows = db
        .call(|conn| {
            let mut stmt = conn.prepare(
                r#"
                SELECT data FROM conversation
                ORDER BY json_extract(data, '$.updatedAt') DESC
                "#,
            )?;
            let rows = stmt
                .query_map([], |row| row.get::<_, String>(0))?
                .collect::<Result<Vec<String>, _>>()?;
            Ok(rows)
        })
        .await?;

    rows.iter()
        .map(|data| serde_json::from_str(data).map_err(StoreError::from))
        .collect()
}

/// Push `message` onto the transcript and bump `updatedAt` in a
/// single UPDATE, then return the updated conversation.
pub async fn append_message(
    db: &Connection,
    id: &str,
    message: &Message,
) -> Result<Conversation, StoreError> {
    validate_id(id)?;

    let conversation_id = id.to_owned();
    let data = serde_json::to_string(message)?;
    let stamp = timestamp::to_stamp(&chrono::Utc::now());

    let changed = db
        .call(move |conn| {
            let mut stmt = conn.prepare(
                r#"
                UPDATE conversation
                SET data = json_set(
                    json_insert(data, '$.messages[#]', json(?1)),
                    '$.updatedAt', ?2
                )
                WHERE id = ?3
                "#,
            )?;
            let changed = stmt.execute(params![data, stamp, conversation_id])?;
            Ok(changed)
        })
        .await?;

    if changed == 0 {
        return Err(StoreError::NotFound);
    }

    find_conversation_by_id(db, id).await
}
