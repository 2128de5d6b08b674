//! Conversation transcript types as they are stored and served.
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ai::persona::Agent;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    #[serde(with = "timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.to_string(),
            // Truncated to the millisecond precision the wire format
            // carries, so a stored message round-trips equal
            timestamp: Utc::now().trunc_subsecs(3),
        }
    }
}

/// A persisted transcript: append-only messages plus metadata. The
/// persona is fixed at creation and governs every completion request
/// for the conversation's lifetime.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub title: String,
    pub agent_type: Agent,
    pub messages: Vec<Message>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    /// A new conversation starts with a single greeting authored by
    /// the persona.
    pub fn new(title: &str, agent: Agent) -> Self {
        let now = Utc::now().trunc_subsecs(3);
        Conversation {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            agent_type: agent,
            messages: vec![Message::new(Role::Assistant, &agent.greeting())],
            created_at: now,
            updated_at: now,
        }
    }
}

/// ISO-8601 UTC timestamps with fixed millisecond precision, matching
/// the JavaScript `toISOString` wire format. Fixed precision keeps
/// lexicographic order equal to chronological order, which the list
/// query's `ORDER BY` on the raw string relies on.
pub mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn to_stamp(dt: &DateTime<Utc>) -> String {
        dt.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&to_stamp(dt))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(D::Error::custom)
    }
}
