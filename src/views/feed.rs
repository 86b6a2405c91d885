//! Feed view-model.
//!
//! Holds the post list with merged comments plus the draft inputs. Every
//! mutation is followed by a full reload; the backend is the only source
//! of truth and nothing is patched locally. Failures go to the log and
//! leave the previous list on screen.

use std::collections::HashMap;

use futures::future::try_join_all;

use super::route::Route;
use crate::api::ApiClient;
use crate::error::ClientResult;
use crate::models::{Post, PostId};
use crate::session::SessionStore;
use crate::traits::HttpClient;

/// Load state of the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedState {
    #[default]
    Uninitialized,
    Loading,
    Ready,
}

/// State behind the feed screen.
pub struct FeedViewModel<H: HttpClient> {
    api: ApiClient<H>,
    session: SessionStore,
    state: FeedState,
    posts: Vec<Post>,
    new_post: String,
    comment_drafts: HashMap<PostId, String>,
}

impl<H: HttpClient> FeedViewModel<H> {
    pub fn new(api: ApiClient<H>, session: SessionStore) -> Self {
        Self {
            api,
            session,
            state: FeedState::Uninitialized,
            posts: Vec::new(),
            new_post: String::new(),
            comment_drafts: HashMap::new(),
        }
    }

    pub fn state(&self) -> FeedState {
        self.state
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn new_post(&self) -> &str {
        &self.new_post
    }

    pub fn set_new_post(&mut self, content: impl Into<String>) {
        self.new_post = content.into();
    }

    /// Draft comment for a post (empty when none).
    pub fn comment_draft(&self, post_id: PostId) -> &str {
        self.comment_drafts
            .get(&post_id)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn set_comment_draft(&mut self, post_id: PostId, content: impl Into<String>) {
        self.comment_drafts.insert(post_id, content.into());
    }

    /// Open the screen: redirect to login without a session, else load.
    pub async fn enter(&mut self) -> Option<Route> {
        if let Some(redirect) = Route::Feed.guard(&self.session.session()) {
            return Some(redirect);
        }
        self.load_posts().await;
        None
    }

    /// Fetch all posts, then every post's comments concurrently, and swap
    /// the list in one step.
    ///
    /// Any failing request aborts the whole load; the old list stays and
    /// the state returns to what it was before.
    pub async fn load_posts(&mut self) {
        let Some(token) = self.session.token() else {
            tracing::debug!("feed load skipped: no session");
            return;
        };

        let previous = self.state;
        self.state = FeedState::Loading;

        match self.fetch_posts(&token).await {
            Ok(posts) => {
                tracing::debug!(count = posts.len(), "feed loaded");
                self.posts = posts;
                self.state = FeedState::Ready;
            }
            Err(e) => {
                tracing::error!(code = e.error_code(), "failed to load posts: {}", e);
                self.state = previous;
            }
        }
    }

    async fn fetch_posts(&self, token: &str) -> ClientResult<Vec<Post>> {
        let posts = self.api.get_posts(Some(token)).await?;
        let comments =
            try_join_all(posts.iter().map(|post| self.api.get_comments_for_post(post.id))).await?;

        Ok(posts
            .into_iter()
            .zip(comments)
            .map(|(mut post, comments)| {
                post.comments = Some(comments);
                post
            })
            .collect())
    }

    /// Publish the new-post draft. Blank drafts are ignored.
    ///
    /// Returns whether the backend accepted the post; the reload that
    /// follows reports through [`state`](Self::state).
    pub async fn create_post(&mut self) -> bool {
        let Some(token) = self.session.token() else {
            return false;
        };
        if self.new_post.trim().is_empty() {
            return false;
        }

        let result = self.api.create_post(Some(&token), &self.new_post).await;
        match result {
            Ok(post) => {
                tracing::debug!(post = post.id, "post created");
                self.new_post.clear();
                self.load_posts().await;
                true
            }
            Err(e) => {
                tracing::error!(code = e.error_code(), "failed to create post: {}", e);
                false
            }
        }
    }

    /// Flip the current user's like on a post. Returns whether the backend
    /// accepted the toggle.
    pub async fn toggle_like(&mut self, post_id: PostId) -> bool {
        let Some(token) = self.session.token() else {
            return false;
        };

        match self.api.toggle_like(Some(&token), post_id).await {
            Ok(()) => {
                self.load_posts().await;
                true
            }
            Err(e) => {
                tracing::error!(
                    post = post_id,
                    code = e.error_code(),
                    "failed to toggle like: {}",
                    e
                );
                false
            }
        }
    }

    /// Submit the draft comment for one post. Other drafts are untouched.
    /// Returns whether the backend accepted the comment.
    pub async fn add_comment(&mut self, post_id: PostId) -> bool {
        let Some(token) = self.session.token() else {
            return false;
        };
        let draft = self.comment_draft(post_id).to_string();
        if draft.trim().is_empty() {
            return false;
        }

        match self.api.add_comment(Some(&token), post_id, &draft).await {
            Ok(_) => {
                self.comment_drafts.remove(&post_id);
                self.load_posts().await;
                true
            }
            Err(e) => {
                tracing::error!(
                    post = post_id,
                    code = e.error_code(),
                    "failed to add comment: {}",
                    e
                );
                false
            }
        }
    }

    /// Sign out and leave the screen.
    pub fn logout(&mut self) -> Route {
        if let Err(e) = self.session.logout() {
            tracing::warn!("stored session not fully cleared: {}", e);
        }
        Route::Login
    }
}
