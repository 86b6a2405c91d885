//! Navigation targets shared by the views.

use std::fmt;
use std::time::Duration;

use crate::session::Session;

/// A screen the client can navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Feed,
    /// The signed-in user's own profile
    OwnProfile,
    /// Someone's public profile, by username
    Profile(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Feed => "/feed".to_string(),
            Route::OwnProfile => "/profile".to_string(),
            Route::Profile(username) => format!("/profile/{}", username),
        }
    }

    /// Whether the screen needs a session token.
    pub fn requires_session(&self) -> bool {
        matches!(self, Route::Feed | Route::OwnProfile)
    }

    /// Where to go instead of this screen, if the session cannot open it.
    pub fn guard(&self, session: &Session) -> Option<Route> {
        if self.requires_session() && session.token().is_none() {
            Some(Route::Login)
        } else {
            None
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Navigation that should happen after a delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub to: Route,
    pub after: Duration,
}

impl Redirect {
    pub fn new(to: Route, after: Duration) -> Self {
        Self { to, after }
    }

    /// Wait out the delay and yield the destination.
    pub async fn wait(self) -> Route {
        if !self.after.is_zero() {
            tokio::time::sleep(self.after).await;
        }
        self.to
    }
}
