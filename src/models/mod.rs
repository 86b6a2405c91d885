//! Data model shared by the API client, session store and views.

pub mod auth;
pub mod identity;
pub mod post;
pub mod profile;

pub use auth::{ContentBody, LoginRequest, LoginResponse, RegisterRequest};
pub use identity::{Identity, UserId};
pub use post::{Comment, CommentId, Like, Post, PostId};
pub use profile::{PictureUpdate, ProfilePost, UserProfile};
