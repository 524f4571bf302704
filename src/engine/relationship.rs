//! Relationship engine: the friendship and friend-request state machine.
//!
//! The state per ordered pair lives in two directional sets
//! (`friend_requests` on the target, `sent_requests` on the sender) plus the
//! symmetric `friends` sets. Requesting does not check existing friendship
//! or a reverse pending request, so duplicate and symmetric pendings are
//! representable; accepting clears the request bookkeeping unconditionally
//! and establishes friendship mutually.

use tracing::debug;

use crate::store::{EntityStore, User};
use crate::types::{AgoraError, Result};

impl EntityStore {
    /// Record a friend request from `from_user_id` to `target_id`.
    ///
    /// Idempotent: if the request is already pending on the target, nothing
    /// changes (in particular no duplicate `sent_requests` entry appears).
    pub fn send_friend_request(&self, target_id: &str, from_user_id: &str) -> Result<()> {
        let mut data = self.write();
        if !data.users.contains_key(from_user_id) {
            return Err(AgoraError::NotFound("User"));
        }
        let Some(target) = data.users.get_mut(target_id) else {
            return Err(AgoraError::NotFound("User"));
        };

        if target.friend_requests.iter().any(|id| id == from_user_id) {
            debug!(to = target_id, from = from_user_id, "Friend request already pending");
            return Ok(());
        }
        target.friend_requests.push(from_user_id.to_string());
        if let Some(from) = data.users.get_mut(from_user_id) {
            from.sent_requests.push(target_id.to_string());
        }
        debug!(to = target_id, from = from_user_id, "Friend request sent");
        Ok(())
    }

    /// Accept the pending request from `from_user_id` on `user_id`.
    ///
    /// Clears the request entries on both sides (a no-op if absent) and, if
    /// the two are not already friends, adds each to the other's friends
    /// set. The whole four-set update happens under one write-lock
    /// acquisition, so no reader can observe the request cleared without
    /// the friendship established.
    pub fn accept_friend_request(&self, user_id: &str, from_user_id: &str) -> Result<()> {
        let mut data = self.write();
        if !data.users.contains_key(user_id) || !data.users.contains_key(from_user_id) {
            return Err(AgoraError::NotFound("User"));
        }

        let already_friends = data.users[user_id]
            .friends
            .iter()
            .any(|id| id == from_user_id);

        if let Some(user) = data.users.get_mut(user_id) {
            user.friend_requests.retain(|id| id != from_user_id);
            if !already_friends {
                user.friends.push(from_user_id.to_string());
            }
        }
        if let Some(from) = data.users.get_mut(from_user_id) {
            from.sent_requests.retain(|id| id != user_id);
            if !already_friends {
                from.friends.push(user_id.to_string());
            }
        }
        debug!(user = user_id, from = from_user_id, "Friend request accepted");
        Ok(())
    }

    /// Materialize a user's friends list.
    ///
    /// Friend ids that no longer resolve are silently dropped rather than
    /// failing the whole listing.
    pub fn list_friends(&self, user_id: &str) -> Result<Vec<User>> {
        let data = self.read();
        let user = data.users.get(user_id).ok_or(AgoraError::NotFound("User"))?;
        Ok(user
            .friends
            .iter()
            .filter_map(|id| data.users.get(id).cloned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_friend_request_books_both_sides() {
        let store = EntityStore::new();
        store.send_friend_request("3", "6").unwrap();
        let three = store.get_user("3").unwrap();
        let six = store.get_user("6").unwrap();
        assert!(three.friend_requests.contains(&"6".to_string()));
        assert!(six.sent_requests.contains(&"3".to_string()));
    }

    #[test]
    fn test_duplicate_request_is_a_no_op() {
        // Seeded: "6" already appears in "1".friend_requests.
        let store = EntityStore::new();
        let before = store.get_user("1").unwrap().friend_requests.len();
        let sent_before = store.get_user("6").unwrap().sent_requests.len();

        store.send_friend_request("1", "6").unwrap();

        assert_eq!(store.get_user("1").unwrap().friend_requests.len(), before);
        assert_eq!(store.get_user("6").unwrap().sent_requests.len(), sent_before);
    }

    #[test]
    fn test_send_friend_request_unknown_user() {
        let store = EntityStore::new();
        assert!(matches!(
            store.send_friend_request("1", "missing"),
            Err(AgoraError::NotFound("User"))
        ));
        assert!(matches!(
            store.send_friend_request("missing", "1"),
            Err(AgoraError::NotFound("User"))
        ));
    }

    #[test]
    fn test_accept_establishes_symmetric_friendship() {
        // Seeded: "5" has a pending request from "2" and "2" booked it.
        let store = EntityStore::new();
        store.accept_friend_request("5", "2").unwrap();

        let five = store.get_user("5").unwrap();
        let two = store.get_user("2").unwrap();
        assert!(five.friends.contains(&"2".to_string()));
        assert!(two.friends.contains(&"5".to_string()));
        assert!(!five.friend_requests.contains(&"2".to_string()));
        assert!(!two.sent_requests.contains(&"5".to_string()));
    }

    #[test]
    fn test_accept_when_already_friends_does_not_duplicate() {
        let store = EntityStore::new();
        store.accept_friend_request("5", "2").unwrap();
        store.accept_friend_request("5", "2").unwrap();

        let five = store.get_user("5").unwrap();
        let count = five.friends.iter().filter(|id| *id == "2").count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_pending_and_friends_may_coexist() {
        // Requesting does not check existing friendship: "1" and "2" are
        // already friends, yet a pending request between them is recorded.
        let store = EntityStore::new();
        store.send_friend_request("2", "1").unwrap();

        let two = store.get_user("2").unwrap();
        assert!(two.friends.contains(&"1".to_string()));
        assert!(two.friend_requests.contains(&"1".to_string()));
    }

    #[test]
    fn test_list_friends_materializes_users() {
        let store = EntityStore::new();
        let friends = store.list_friends("1").unwrap();
        let names: Vec<_> = friends.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Jane Smith", "Mike Johnson", "Sarah Wilson", "Alex Brown"]
        );
    }

    #[test]
    fn test_list_friends_drops_unresolvable_ids() {
        let store = EntityStore::new();
        {
            let mut data = store.write();
            if let Some(user) = data.users.get_mut("1") {
                user.friends.push("ghost".to_string());
            }
        }
        let friends = store.list_friends("1").unwrap();
        assert_eq!(friends.len(), 4);
    }

    #[test]
    fn test_list_friends_unknown_user() {
        let store = EntityStore::new();
        assert!(matches!(
            store.list_friends("missing"),
            Err(AgoraError::NotFound("User"))
        ));
    }
}
