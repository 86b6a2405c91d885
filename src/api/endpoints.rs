//! Backend endpoint paths and per-operation fallback messages.

use crate::models::PostId;

pub const REGISTER: &str = "/auth/register";
pub const LOGIN: &str = "/auth/login";
pub const POSTS: &str = "/posts";
pub const UPLOAD_PROFILE_PIC: &str = "/users/upload-profile-pic";

/// Multipart field carrying the picture.
pub const UPLOAD_FIELD: &str = "file";

pub fn like(post_id: PostId) -> String {
    format!("/posts/{}/like", post_id)
}

pub fn comments(post_id: PostId) -> String {
    format!("/posts/{}/comments", post_id)
}

pub fn user(username: &str) -> String {
    format!("/users/{}", urlencoding::encode(username))
}

/// Messages used when the backend gives no `message` of its own.
pub mod fallback {
    pub const REGISTER: &str = "Registration failed";
    pub const LOGIN: &str = "Login failed";
    pub const GET_POSTS: &str = "Failed to fetch posts";
    pub const CREATE_POST: &str = "Failed to create post";
    pub const TOGGLE_LIKE: &str = "Failed to toggle like";
    pub const GET_PROFILE: &str = "User not found";
    pub const UPLOAD: &str = "Upload failed";
    pub const GET_COMMENTS: &str = "Failed to fetch comments";
    pub const ADD_COMMENT: &str = "Failed to add comment";
}
