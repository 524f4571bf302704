//! Messaging engine: conversations keyed by unordered participant pair.
//!
//! `send_message` is the single entry point that looks up or creates the
//! conversation for a pair; lookup-or-create and the subsequent message
//! append happen under one write-lock acquisition, so two concurrent first
//! messages between the same pair cannot create two conversations.

use chrono::Utc;
use tracing::{debug, info};

use crate::store::{Conversation, EntityStore, Message};
use crate::types::{AgoraError, Result};
use crate::view::{self, ConversationDetail, ConversationSummary, MessageView};

impl EntityStore {
    /// Append a message from `from_id` to `to_id`, creating the
    /// conversation on first contact. Updates the conversation's
    /// `last_message` snapshot and returns the message with its sender
    /// embedded.
    pub fn send_message(&self, from_id: &str, to_id: &str, content: &str) -> MessageView {
        let mut data = self.write();
        let now = Utc::now();

        if data.find_conversation(from_id, to_id).is_none() {
            let conv = Conversation {
                id: Self::new_id(),
                participants: [from_id.to_string(), to_id.to_string()],
                last_message: content.to_string(),
                last_message_time: now,
                messages: Vec::new(),
            };
            info!(
                conversation_id = %conv.id,
                from = from_id,
                to = to_id,
                "Conversation created"
            );
            data.conversations.insert(conv.id.clone(), conv);
        }

        let message = Message {
            id: Self::new_id(),
            sender_id: from_id.to_string(),
            content: content.to_string(),
            timestamp: now,
        };
        if let Some(conv) = data.find_conversation_mut(from_id, to_id) {
            conv.messages.push(message.clone());
            conv.last_message = message.content.clone();
            conv.last_message_time = message.timestamp;
            debug!(conversation_id = %conv.id, message_id = %message.id, "Message appended");
        }

        view::message(&data, &message)
    }

    /// All conversations involving `user_id`, most recent activity first,
    /// each annotated with the other participant.
    pub fn list_conversations(&self, user_id: &str) -> Vec<ConversationSummary> {
        let data = self.read();
        let mut views: Vec<ConversationSummary> = data
            .conversations
            .values()
            .filter(|c| c.participants.iter().any(|p| p == user_id))
            .map(|c| view::conversation_summary(&data, c, user_id))
            .collect();
        views.sort_by(|a, b| b.last_message_time.cmp(&a.last_message_time));
        views
    }

    /// The conversation between two users, order-insensitive, with message
    /// senders embedded.
    pub fn get_conversation(&self, user_id: &str, other_user_id: &str) -> Result<ConversationDetail> {
        let data = self.read();
        let conv = data
            .find_conversation(user_id, other_user_id)
            .ok_or(AgoraError::NotFound("Conversation"))?;
        Ok(view::conversation_detail(&data, conv))
    }
}
