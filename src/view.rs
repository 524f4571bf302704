//! Read-time view materialization.
//!
//! Pure joins from raw entities to response shapes: user ids are resolved
//! against a `Dataset` snapshot and embedded inline. No function here
//! mutates anything; callers invoke these under the store's read lock and
//! serialize the result after releasing it.
//!
//! A reference that does not resolve yields `None`, which serde omits from
//! the JSON instead of failing the whole response.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::store::entities::{
    Comment, Conversation, Message, Notification, NotificationKind, Post, User,
};
use crate::store::Dataset;

/// A post with its author and comment authors embedded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub id: String,
    pub user_id: String,
    pub content: String,
    pub image: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub likes: Vec<String>,
    pub comments: Vec<CommentView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// A comment with its author embedded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: String,
    pub user_id: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// A conversation as listed for one user: the other side embedded, raw
/// messages carried along.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSummary {
    pub id: String,
    pub participants: [String; 2],
    pub last_message: String,
    pub last_message_time: DateTime<Utc>,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_participant: Option<User>,
}

/// A single conversation with each message's sender embedded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationDetail {
    pub id: String,
    pub participants: [String; 2],
    pub last_message: String,
    pub last_message_time: DateTime<Utc>,
    pub messages: Vec<MessageView>,
}

/// A message with its sender embedded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageView {
    pub id: String,
    pub sender_id: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// A notification with its originating user embedded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationView {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub from_user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_user: Option<User>,
}

fn resolve_user(data: &Dataset, id: &str) -> Option<User> {
    data.users.get(id).cloned()
}

pub fn comment(data: &Dataset, comment: &Comment) -> CommentView {
    CommentView {
        id: comment.id.clone(),
        user_id: comment.user_id.clone(),
        content: comment.content.clone(),
        timestamp: comment.timestamp,
        user: resolve_user(data, &comment.user_id),
    }
}

pub fn post(data: &Dataset, post: &Post) -> PostView {
    PostView {
        id: post.id.clone(),
        user_id: post.user_id.clone(),
        content: post.content.clone(),
        image: post.image.clone(),
        timestamp: post.timestamp,
        likes: post.likes.clone(),
        comments: post.comments.iter().map(|c| comment(data, c)).collect(),
        user: resolve_user(data, &post.user_id),
    }
}

pub fn message(data: &Dataset, message: &Message) -> MessageView {
    MessageView {
        id: message.id.clone(),
        sender_id: message.sender_id.clone(),
        content: message.content.clone(),
        timestamp: message.timestamp,
        user: resolve_user(data, &message.sender_id),
    }
}

/// Shape a conversation for `viewer_id`'s conversation list.
pub fn conversation_summary(
    data: &Dataset,
    conv: &Conversation,
    viewer_id: &str,
) -> ConversationSummary {
    let other = conv
        .other_participant(viewer_id)
        .and_then(|id| resolve_user(data, id));
    ConversationSummary {
        id: conv.id.clone(),
        participants: conv.participants.clone(),
        last_message: conv.last_message.clone(),
        last_message_time: conv.last_message_time,
        messages: conv.messages.clone(),
        other_participant: other,
    }
}

pub fn conversation_detail(data: &Dataset, conv: &Conversation) -> ConversationDetail {
    ConversationDetail {
        id: conv.id.clone(),
        participants: conv.participants.clone(),
        last_message: conv.last_message.clone(),
        last_message_time: conv.last_message_time,
        messages: conv.messages.iter().map(|m| message(data, m)).collect(),
    }
}

pub fn notification(data: &Dataset, notif: &Notification) -> NotificationView {
    NotificationView {
        id: notif.id.clone(),
        user_id: notif.user_id.clone(),
        kind: notif.kind,
        from_user_id: notif.from_user_id.clone(),
        post_id: notif.post_id.clone(),
        message: notif.message.clone(),
        timestamp: notif.timestamp,
        read: notif.read,
        from_user: resolve_user(data, &notif.from_user_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;
    use chrono::Utc;

    #[test]
    fn test_post_view_embeds_author_and_comment_authors() {
        let data = seed::dataset(Utc::now());
        let raw = &data.posts["1"];
        let view = post(&data, raw);
        assert_eq!(view.user.as_ref().map(|u| u.name.as_str()), Some("John Doe"));
        assert_eq!(view.comments.len(), 2);
        assert_eq!(
            view.comments[0].user.as_ref().map(|u| u.name.as_str()),
            Some("Jane Smith")
        );
    }

    #[test]
    fn test_unresolved_author_is_omitted_not_fatal() {
        let mut data = seed::dataset(Utc::now());
        let mut raw = data.posts["1"].clone();
        raw.user_id = "ghost".into();
        data.posts.insert(raw.id.clone(), raw.clone());

        let view = post(&data, &raw);
        assert!(view.user.is_none());

        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("user").is_none(), "unresolved user must be omitted");
        assert_eq!(json["userId"], serde_json::json!("ghost"));
    }

    #[test]
    fn test_conversation_summary_picks_other_side() {
        let data = seed::dataset(Utc::now());
        let conv = &data.conversations["1"]; // between "1" and "2"
        let for_one = conversation_summary(&data, conv, "1");
        assert_eq!(
            for_one.other_participant.as_ref().map(|u| u.id.as_str()),
            Some("2")
        );
        let for_two = conversation_summary(&data, conv, "2");
        assert_eq!(
            for_two.other_participant.as_ref().map(|u| u.id.as_str()),
            Some("1")
        );
    }

    #[test]
    fn test_conversation_detail_embeds_senders() {
        let data = seed::dataset(Utc::now());
        let conv = &data.conversations["2"];
        let view = conversation_detail(&data, conv);
        assert_eq!(view.messages.len(), 3);
        assert_eq!(
            view.messages[0].user.as_ref().map(|u| u.id.as_str()),
            Some("1")
        );
    }
}
