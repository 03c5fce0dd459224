//! Chat accessors
//!
//! The ERP returns channel messages newest-first; the dashboard renders a
//! chat window, so the message accessor reverses them to oldest-first.

use kivu_domain::{Channel, ChatMessage, Record};

use crate::ports::{Clause, ErpGateway, DEFAULT_LIMIT};

pub const CHANNEL_MODEL: &str = "mail.channel";
pub const MESSAGE_MODEL: &str = "mail.message";

const CHANNEL_FIELDS: &[&str] = &["id", "name", "description", "image", "last_message_date"];
const MESSAGE_FIELDS: &[&str] = &["id", "body", "date", "author_id"];

/// Cap on messages loaded per chat window.
const MESSAGE_LIMIT: u32 = 30;

pub async fn all_channels(gateway: &dyn ErpGateway) -> Vec<Channel> {
    gateway
        .search_read(CHANNEL_MODEL, CHANNEL_FIELDS, Vec::new(), DEFAULT_LIMIT)
        .await
        .iter()
        .map(map_channel)
        .collect()
}

/// Messages of one channel, oldest first. `self_partner_id` marks which
/// messages were authored by the dashboard's own service account.
pub async fn channel_messages(
    gateway: &dyn ErpGateway,
    channel_id: i64,
    self_partner_id: i64,
) -> Vec<ChatMessage> {
    let domain = vec![
        Clause::eq("res_id", channel_id),
        Clause::eq("model", CHANNEL_MODEL),
    ];

    let mut messages: Vec<ChatMessage> = gateway
        .search_read(MESSAGE_MODEL, MESSAGE_FIELDS, domain, MESSAGE_LIMIT)
        .await
        .iter()
        .map(|r| map_message(r, self_partner_id))
        .collect();

    // ERP order is newest-first; chat rendering wants oldest-first.
    messages.reverse();
    messages
}

pub fn map_channel(record: &Record) -> Channel {
    Channel {
        id: record.id(),
        name: record.str_or("name", ""),
        description: record.str_or("description", ""),
        image: record.base64_or_none("image"),
        last_message_date: record.str_or("last_message_date", ""),
    }
}

pub fn map_message(record: &Record, self_partner_id: i64) -> ChatMessage {
    let author = record.reference("author_id");
    ChatMessage {
        id: record.id(),
        body: record.str_or("body", ""),
        date: record.str_or("date", ""),
        author_id: author.id,
        author_name: author.display_label(),
        is_me: author.is_set() && author.id == self_partner_id,
    }
}
