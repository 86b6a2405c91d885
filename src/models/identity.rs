//! User identity as embedded by the backend.

use serde::{Deserialize, Serialize};

/// Backend user ID.
pub type UserId = i64;

/// A user as returned at login or profile fetch time.
///
/// This is a snapshot: it is embedded by value wherever an author is
/// referenced and can go stale until the next fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: UserId,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
}

impl Identity {
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: None,
            profile_pic: None,
        }
    }

    /// `@username` handle as shown next to posts and comments.
    pub fn handle(&self) -> String {
        format!("@{}", self.username)
    }
}
