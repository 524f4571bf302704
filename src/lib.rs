//! Agora - in-memory social network backend
//!
//! A demo-scale social backend serving a JSON API over HTTP. All state
//! lives in one seeded in-memory dataset and can be restored to its
//! process-start snapshot at any time.
//!
//! ## Services
//!
//! - **Entity store**: users, posts, conversations and notifications
//!   behind a single lock, with reset-to-seed
//! - **Relationship engine**: friend requests and acceptance
//! - **Content engine**: posts, likes and comments
//! - **Messaging engine**: two-party conversations
//! - **Views**: wire-shaped projections with embedded author/sender data

pub mod config;
pub mod engine;
pub mod routes;
pub mod server;
pub mod store;
pub mod types;
pub mod view;

pub use config::Args;
pub use server::{run, AppState};
pub use store::EntityStore;
pub use types::{AgoraError, Result};
