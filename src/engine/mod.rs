//! Mutation engines over the entity store.
//!
//! Each engine is an `impl` block on [`crate::store::EntityStore`] grouping
//! one workflow: relationship (friendships and friend requests), content
//! (posts, likes, comments, feed) and messaging (conversations). Every
//! operation takes the store lock exactly once, so each multi-step update
//! is atomic with respect to the others.

pub mod content;
pub mod messaging;
pub mod relationship;
