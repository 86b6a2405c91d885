//! Public user profiles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identity::UserId;
use super::post::{parse_timestamp, Like, PostId};

/// A post as listed on its author's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePost {
    pub id: PostId,
    pub content: String,
    pub created_at: String,
    #[serde(default)]
    pub likes: Vec<Like>,
}

impl ProfilePost {
    pub fn created_time(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }
}

/// Response of `GET /users/:username`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub profile_pic: Option<String>,
    #[serde(default)]
    pub posts: Vec<ProfilePost>,
}

impl UserProfile {
    /// Full name when either part is known, otherwise the username.
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|p| !p.trim().is_empty())
            .collect();

        if parts.is_empty() {
            self.username.clone()
        } else {
            parts.join(" ")
        }
    }
}

/// Response of `POST /users/upload-profile-pic`.
///
/// The backend answers with the updated user; only the picture matters here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PictureUpdate {
    #[serde(default)]
    pub profile_pic: Option<String>,
}
