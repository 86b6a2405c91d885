//! View-models behind each screen.
//!
//! Auth views surface failures to the user. Feed and profile views only
//! log them and keep what they already show.

pub mod auth;
pub mod feed;
pub mod password;
pub mod profile;
pub mod route;

pub use auth::{LoginView, RegisterView, REGISTER_SUCCESS};
pub use feed::{FeedState, FeedViewModel};
pub use password::{validate_password, MIN_PASSWORD_LENGTH};
pub use profile::{OwnProfileView, Picture, PublicProfileView};
pub use route::{Redirect, Route};
