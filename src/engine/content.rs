//! Content engine: post authoring, like toggling, comments and the feed.

use chrono::Utc;
use tracing::{debug, info};

use crate::store::{Comment, EntityStore, Post};
use crate::types::{AgoraError, Result};
use crate::view::{self, CommentView, PostView};

impl EntityStore {
    /// Author a new post and prepend it to the feed ordering.
    ///
    /// The author id is not validated against the users collection; the
    /// view layer simply omits the embedded user if it does not resolve.
    pub fn create_post(&self, user_id: &str, content: &str, image: Option<String>) -> PostView {
        let mut data = self.write();
        let post = Post {
            id: Self::new_id(),
            user_id: user_id.to_string(),
            content: content.to_string(),
            image,
            timestamp: Utc::now(),
            likes: Vec::new(),
            comments: Vec::new(),
        };
        info!(post_id = %post.id, user_id, "Post created");
        data.posts.shift_insert(0, post.id.clone(), post.clone());
        view::post(&data, &post)
    }

    /// Flip `user_id`'s membership in the post's like set and return the
    /// resulting set. One operation, not separate like/unlike: two calls in
    /// sequence restore the original state.
    pub fn toggle_like(&self, post_id: &str, user_id: &str) -> Result<Vec<String>> {
        let mut data = self.write();
        let post = data
            .posts
            .get_mut(post_id)
            .ok_or(AgoraError::NotFound("Post"))?;

        if let Some(pos) = post.likes.iter().position(|id| id == user_id) {
            post.likes.remove(pos);
            debug!(post_id, user_id, "Like removed");
        } else {
            post.likes.push(user_id.to_string());
            debug!(post_id, user_id, "Like added");
        }
        Ok(post.likes.clone())
    }

    /// Append a comment to a post. Comments are never reordered or deleted.
    pub fn add_comment(&self, post_id: &str, user_id: &str, content: &str) -> Result<CommentView> {
        let mut data = self.write();
        let comment = Comment {
            id: Self::new_id(),
            user_id: user_id.to_string(),
            content: content.to_string(),
            timestamp: Utc::now(),
        };
        {
            let post = data
                .posts
                .get_mut(post_id)
                .ok_or(AgoraError::NotFound("Post"))?;
            post.comments.push(comment.clone());
        }
        debug!(post_id, comment_id = %comment.id, "Comment added");
        Ok(view::comment(&data, &comment))
    }

    /// The full feed, denormalized, ordered by timestamp descending. The
    /// sort is stable, so equal timestamps keep feed (insertion) order.
    pub fn list_feed(&self) -> Vec<PostView> {
        let data = self.read();
        let mut views: Vec<PostView> =
            data.posts.values().map(|p| view::post(&data, p)).collect();
        views.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        views
    }

    /// One author's posts, same ordering as the feed.
    pub fn list_user_posts(&self, user_id: &str) -> Vec<PostView> {
        let data = self.read();
        let mut views: Vec<PostView> = data
            .posts
            .values()
            .filter(|p| p.user_id == user_id)
            .map(|p| view::post(&data, p))
            .collect();
        views.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        views
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_post_lands_first_in_feed() {
        let store = EntityStore::new();
        let created = store.create_post("2", "fresh off the press", None);
        assert_eq!(created.user.as_ref().map(|u| u.id.as_str()), Some("2"));
        assert!(created.likes.is_empty());
        assert!(created.comments.is_empty());

        let feed = store.list_feed();
        assert_eq!(feed.len(), 6);
        assert_eq!(feed[0].id, created.id);
    }

    #[test]
    fn test_feed_is_sorted_newest_first() {
        let store = EntityStore::new();
        let feed = store.list_feed();
        let ids: Vec<_> = feed.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
        assert!(feed.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }

    #[test]
    fn test_toggle_like_is_an_involution() {
        // Seeded: "9" has not liked post "3", which has four likes.
        let store = EntityStore::new();
        let before = likes_of(&store, "3");

        let after_first = store.toggle_like("3", "9").unwrap();
        assert_eq!(after_first.len(), before.len() + 1);
        assert!(after_first.contains(&"9".to_string()));

        let after_second = store.toggle_like("3", "9").unwrap();
        assert_eq!(after_second, before);
    }

    #[test]
    fn test_toggle_like_unknown_post() {
        let store = EntityStore::new();
        assert!(matches!(
            store.toggle_like("missing", "1"),
            Err(AgoraError::NotFound("Post"))
        ));
    }

    #[test]
    fn test_comments_are_append_only() {
        let store = EntityStore::new();
        let first = store.add_comment("3", "1", "first").unwrap();
        let second = store.add_comment("3", "2", "second").unwrap();
        assert_eq!(first.user.as_ref().map(|u| u.id.as_str()), Some("1"));

        // Interleave unrelated mutations; the comment sequence only grows.
        store.toggle_like("3", "1").unwrap();
        store.create_post("1", "noise", None);

        let feed = store.list_feed();
        let post = feed.iter().find(|p| p.id == "3").unwrap();
        assert_eq!(post.comments.len(), 2);
        assert_eq!(post.comments[0].id, first.id);
        assert_eq!(post.comments[1].id, second.id);
    }

    #[test]
    fn test_add_comment_unknown_post() {
        let store = EntityStore::new();
        assert!(matches!(
            store.add_comment("missing", "1", "hello"),
            Err(AgoraError::NotFound("Post"))
        ));
    }

    #[test]
    fn test_list_user_posts_filters_by_author() {
        let store = EntityStore::new();
        store.create_post("3", "another one", None);

        let posts = store.list_user_posts("3");
        assert_eq!(posts.len(), 2);
        assert!(posts.iter().all(|p| p.user_id == "3"));
        assert!(posts[0].timestamp >= posts[1].timestamp);
    }

    fn likes_of(store: &EntityStore, post_id: &str) -> Vec<String> {
        store.read().posts[post_id].likes.clone()
    }
}
