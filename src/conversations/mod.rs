pub mod db;
pub mod models;

pub use db::{
    StoreError, append_message, create_conversation, find_conversation_by_id, list_conversations,
};
pub use models::{Conversation, Message, Role};
