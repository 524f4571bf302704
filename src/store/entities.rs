//! Entity definitions for the social dataset.
//!
//! These structs are both the in-memory representation and the wire shape:
//! serde renames produce exactly the camelCase JSON the API clients expect.
//! Cross-entity references are always by id; denormalized shapes with
//! embedded users live in [`crate::view`], not here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user.
///
/// `friends`, `friend_requests` (incoming, pending) and `sent_requests`
/// (outgoing, pending) are sets of user ids with the membership invariants
/// of the relationship engine: friendship is symmetric, and a pending
/// request is double-booked on both sides
/// (`x in target.friend_requests` iff `target.id in x.sent_requests`).
/// Backed by `Vec` to keep deterministic ordering on the wire; the
/// relationship engine guards against duplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub cover_photo: String,
    pub bio: String,
    pub location: String,
    /// Kept as a plain string: seeded users carry bare dates ("2020-01-15"),
    /// runtime-created users an RFC 3339 instant.
    pub join_date: String,
    pub friends: Vec<String>,
    pub friend_requests: Vec<String>,
    pub sent_requests: Vec<String>,
}

/// A feed post. `likes` is a toggle set of user ids; `comments` is
/// append-only in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub user_id: String,
    pub content: String,
    pub image: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub likes: Vec<String>,
    pub comments: Vec<Comment>,
}

/// A comment, immutable once appended and owned by its parent post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub user_id: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// A two-party conversation. `participants` is an unordered pair for
/// lookup purposes: at most one conversation exists per pair, enforced by
/// the messaging engine's single lookup-or-create entry point.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub participants: [String; 2],
    /// Text snapshot of the most recent message.
    pub last_message: String,
    pub last_message_time: DateTime<Utc>,
    pub messages: Vec<Message>,
}

impl Conversation {
    /// Whether this conversation involves both given users, in either order.
    pub fn involves(&self, a: &str, b: &str) -> bool {
        let [p0, p1] = &self.participants;
        (p0 == a && p1 == b) || (p0 == b && p1 == a)
    }

    /// The participant that is not `user_id`, if `user_id` participates.
    pub fn other_participant(&self, user_id: &str) -> Option<&str> {
        let [p0, p1] = &self.participants;
        if p0 == user_id {
            Some(p1)
        } else if p1 == user_id {
            Some(p0)
        } else {
            None
        }
    }
}

/// A message, immutable once appended and owned by its parent conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// What a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Like,
    Comment,
    FriendRequest,
}

/// A notification for a target user. Seed data only: no engine operation
/// currently generates notifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    /// Target user this notification is addressed to.
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub from_user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversation_involves_is_order_insensitive() {
        let conv = Conversation {
            id: "1".into(),
            participants: ["1".into(), "2".into()],
            last_message: String::new(),
            last_message_time: Utc::now(),
            messages: Vec::new(),
        };
        assert!(conv.involves("1", "2"));
        assert!(conv.involves("2", "1"));
        assert!(!conv.involves("1", "3"));
    }

    #[test]
    fn test_other_participant() {
        let conv = Conversation {
            id: "1".into(),
            participants: ["1".into(), "2".into()],
            last_message: String::new(),
            last_message_time: Utc::now(),
            messages: Vec::new(),
        };
        assert_eq!(conv.other_participant("1"), Some("2"));
        assert_eq!(conv.other_participant("2"), Some("1"));
        assert_eq!(conv.other_participant("9"), None);
    }

    #[test]
    fn test_user_wire_shape_is_camel_case() {
        let user = User {
            id: "1".into(),
            name: "John Doe".into(),
            email: "john@example.com".into(),
            avatar: String::new(),
            cover_photo: String::new(),
            bio: String::new(),
            location: String::new(),
            join_date: "2020-01-15".into(),
            friends: vec!["2".into()],
            friend_requests: vec![],
            sent_requests: vec![],
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("coverPhoto").is_some());
        assert!(json.get("joinDate").is_some());
        assert!(json.get("friendRequests").is_some());
        assert!(json.get("sentRequests").is_some());
        assert!(json.get("cover_photo").is_none());
    }

    #[test]
    fn test_notification_kind_wire_names() {
        let json = serde_json::to_value(NotificationKind::FriendRequest).unwrap();
        assert_eq!(json, serde_json::json!("friend_request"));
        let json = serde_json::to_value(NotificationKind::Like).unwrap();
        assert_eq!(json, serde_json::json!("like"));
    }
}
