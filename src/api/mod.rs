//! Backend API access.
//!
//! | Operation | Endpoint | Auth |
//! |-----------|----------|------|
//! | `register_user` | `POST /auth/register` | - |
//! | `login_user` | `POST /auth/login` | - |
//! | `get_posts` | `GET /posts` | bearer |
//! | `create_post` | `POST /posts` | bearer |
//! | `toggle_like` | `POST /posts/:id/like` | bearer |
//! | `get_comments_for_post` | `GET /posts/:id/comments` | - |
//! | `add_comment` | `POST /posts/:id/comments` | bearer |
//! | `get_user_profile` | `GET /users/:username` | - |
//! | `upload_profile_pic` | `POST /users/upload-profile-pic` | bearer, multipart |

pub mod client;
pub mod endpoints;
pub mod upload;

pub use client::{ensure_token, failure, ApiClient};
pub use upload::picture_part;
