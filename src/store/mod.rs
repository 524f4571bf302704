//! The entity store: the four shared collections behind a single lock.
//!
//! All engine operations go through [`EntityStore`]. One coarse
//! `RwLock<Dataset>` makes every multi-step read-modify-write (the
//! accept-friend four-set update, lookup-or-create plus message append,
//! like toggling) appear atomic to concurrent request handlers. Nothing
//! awaits or re-enters the store while a guard is held, so lock hold times
//! are bounded by in-memory work.

pub mod entities;
pub mod seed;

use chrono::Utc;
use indexmap::IndexMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::info;
use uuid::Uuid;

pub use entities::{
    Comment, Conversation, Message, Notification, NotificationKind, Post, User,
};

use crate::types::{AgoraError, Result};
use crate::view::{self, NotificationView};

/// The four collections. Users, posts and conversations are indexed by id
/// for O(1) lookup; iteration order is insertion order, which for posts is
/// feed order (newest prepended).
#[derive(Debug, Clone)]
pub struct Dataset {
    pub users: IndexMap<String, User>,
    pub posts: IndexMap<String, Post>,
    pub conversations: IndexMap<String, Conversation>,
    pub notifications: Vec<Notification>,
}

impl Dataset {
    /// Find the conversation between two users, order-insensitive.
    ///
    /// A linear scan, matching the reference behavior: uniqueness of the
    /// pair is enforced lazily by the messaging engine's single
    /// lookup-or-create entry point, not by an index.
    pub fn find_conversation(&self, a: &str, b: &str) -> Option<&Conversation> {
        self.conversations.values().find(|c| c.involves(a, b))
    }

    pub fn find_conversation_mut(&mut self, a: &str, b: &str) -> Option<&mut Conversation> {
        self.conversations.values_mut().find(|c| c.involves(a, b))
    }
}

/// Shared mutable social dataset with an immutable seed snapshot.
///
/// The snapshot is captured once at construction; [`EntityStore::reset`]
/// restores it wholesale, so a reset yields the exact process-start state
/// (same ids, content, relationships and timestamps).
pub struct EntityStore {
    data: RwLock<Dataset>,
    pristine: Dataset,
}

impl EntityStore {
    /// Create a store populated with the seed dataset.
    pub fn new() -> Self {
        let pristine = seed::dataset(Utc::now());
        Self {
            data: RwLock::new(pristine.clone()),
            pristine,
        }
    }

    /// Assign a fresh unique entity id.
    pub fn new_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Take the shared read lock. Poisoning means a panic mid-mutation,
    /// i.e. a broken invariant, and is not a recoverable condition.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Dataset> {
        self.data.read().expect("store lock poisoned")
    }

    /// Take the exclusive write lock.
    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Dataset> {
        self.data.write().expect("store lock poisoned")
    }

    /// Look up a user by id.
    pub fn get_user(&self, id: &str) -> Result<User> {
        self.read()
            .users
            .get(id)
            .cloned()
            .ok_or(AgoraError::NotFound("User"))
    }

    /// All users, in seed/creation order.
    pub fn list_users(&self) -> Vec<User> {
        self.read().users.values().cloned().collect()
    }

    /// Find the user with the given email, or create a stub account.
    ///
    /// This is the login operation: not real authentication, just a lookup
    /// that falls back to signup with demo defaults.
    pub fn login_or_create(&self, email: &str) -> User {
        let mut data = self.write();
        if let Some(user) = data.users.values().find(|u| u.email == email) {
            return user.clone();
        }

        let name = email.split('@').next().unwrap_or(email).to_string();
        let user = User {
            id: Self::new_id(),
            name,
            email: email.to_string(),
            avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e\
                     ?w=150&h=150&fit=crop&crop=face"
                .into(),
            cover_photo: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4\
                          ?w=800&h=300&fit=crop"
                .into(),
            bio: "New to the platform!".into(),
            location: "Unknown".into(),
            join_date: Utc::now().to_rfc3339(),
            friends: Vec::new(),
            friend_requests: Vec::new(),
            sent_requests: Vec::new(),
        };
        info!(user_id = %user.id, email = %user.email, "Created user at first login");
        data.users.insert(user.id.clone(), user.clone());
        user
    }

    /// Notifications addressed to a user, newest first, with the sender
    /// joined in. Seed data only: no mutation generates notifications.
    pub fn list_notifications(&self, user_id: &str) -> Vec<NotificationView> {
        let data = self.read();
        let mut views: Vec<NotificationView> = data
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id)
            .map(|n| view::notification(&data, n))
            .collect();
        views.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        views
    }

    /// Collection sizes, for the health endpoint and logging.
    pub fn stats(&self) -> StoreStats {
        let data = self.read();
        StoreStats {
            users: data.users.len(),
            posts: data.posts.len(),
            conversations: data.conversations.len(),
            notifications: data.notifications.len(),
        }
    }

    /// Discard all mutations and restore the seed snapshot.
    ///
    /// Holding the write lock for the whole swap makes the reset
    /// indivisible with respect to every other operation.
    pub fn reset(&self) {
        let mut data = self.write();
        *data = self.pristine.clone();
        info!("Store reset to seed snapshot");
    }
}

/// Snapshot of collection sizes.
#[derive(Debug, Clone)]
pub struct StoreStats {
    pub users: usize,
    pub posts: usize,
    pub conversations: usize,
    pub notifications: usize,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}
