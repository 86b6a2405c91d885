//! Feed posts, likes and comments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identity::{Identity, UserId};

/// Backend post ID.
pub type PostId = i64;

/// Backend comment ID.
pub type CommentId = i64;

/// One like on a post. Only membership and count are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub user_id: UserId,
}

/// A comment attached to a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
    pub created_at: String,
    pub author: Identity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_id: Option<PostId>,
}

impl Comment {
    pub fn created_time(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }
}

/// A post in the feed.
///
/// `comments` is never sent by the posts endpoint; the feed fetches them
/// per post and attaches them client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub content: String,
    pub created_at: String,
    pub author: Identity,
    #[serde(default)]
    pub likes: Vec<Like>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Comment>>,
}

impl Post {
    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    pub fn is_liked_by(&self, user_id: UserId) -> bool {
        self.likes.iter().any(|like| like.user_id == user_id)
    }

    /// "1 Like" or "N Likes".
    pub fn like_label(&self) -> String {
        let count = self.like_count();
        if count == 1 {
            "1 Like".to_string()
        } else {
            format!("{} Likes", count)
        }
    }

    /// Attached comments, empty when none were fetched.
    pub fn comments(&self) -> &[Comment] {
        self.comments.as_deref().unwrap_or_default()
    }

    pub fn created_time(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }
}

/// Parse a backend RFC 3339 timestamp.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_json() -> serde_json::Value {
        serde_json::json!({
            "id": 10,
            "content": "hello",
            "createdAt": "2024-05-01T12:30:00.000Z",
            "author": {"id": 1, "username": "ana"},
            "likes": [{"userId": 2}, {"userId": 3}]
        })
    }

    #[test]
    fn test_deserialize_post_without_comments() {
        let post: Post = serde_json::from_value(post_json()).unwrap();
        assert_eq!(post.id, 10);
        assert_eq!(post.author.username, "ana");
        assert!(post.comments.is_none());
        assert!(post.comments().is_empty());
    }

    #[test]
    fn test_missing_likes_defaults_to_empty() {
        let mut json = post_json();
        json.as_object_mut().unwrap().remove("likes");
        let post: Post = serde_json::from_value(json).unwrap();
        assert_eq!(post.like_count(), 0);
    }

    #[test]
    fn test_like_membership_and_label() {
        let mut post: Post = serde_json::from_value(post_json()).unwrap();
        assert!(post.is_liked_by(2));
        assert!(!post.is_liked_by(1));
        assert_eq!(post.like_label(), "2 Likes");

        post.likes.truncate(1);
        assert_eq!(post.like_label(), "1 Like");

        post.likes.clear();
        assert_eq!(post.like_label(), "0 Likes");
    }

    #[test]
    fn test_created_time() {
        let post: Post = serde_json::from_value(post_json()).unwrap();
        let time = post.created_time().unwrap();
        assert_eq!(time.to_rfc3339(), "2024-05-01T12:30:00+00:00");
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn test_comment_post_id_optional() {
        let comment: Comment = serde_json::from_value(serde_json::json!({
            "id": 5,
            "content": "nice",
            "createdAt": "2024-05-01T12:31:00Z",
            "author": {"id": 2, "username": "bo"}
        }))
        .unwrap();
        assert_eq!(comment.post_id, None);
    }
}
