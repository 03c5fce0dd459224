//! Chat view models

use serde::{Deserialize, Serialize};

/// A discussion channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Base64 avatar, `None` when the channel has none.
    pub image: Option<String>,
    pub last_message_date: String,
}

/// A single chat message. `body` is HTML as stored by the ERP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: i64,
    pub body: String,
    pub date: String,
    pub author_id: i64,
    pub author_name: String,
    /// Whether the message was written by the dashboard's own user.
    pub is_me: bool,
}
