//! Login and registration views.
//!
//! Unlike the feed and profile views, these surface failures to the user:
//! the message of the error is kept in `error()` and the view stays usable
//! for another attempt.

use std::time::Duration;

use super::password::validate_password;
use super::route::{Redirect, Route};
use crate::api::ApiClient;
use crate::config::DEFAULT_REDIRECT_DELAY;
use crate::error::ClientError;
use crate::models::{LoginRequest, RegisterRequest};
use crate::session::SessionStore;
use crate::traits::HttpClient;

/// Message shown after a successful registration.
pub const REGISTER_SUCCESS: &str = "Registration successful! Please log in.";

/// Username/password login form.
pub struct LoginView<H: HttpClient> {
    api: ApiClient<H>,
    session: SessionStore,
    pub username: String,
    pub password: String,
    error: Option<String>,
}

impl<H: HttpClient> LoginView<H> {
    pub fn new(api: ApiClient<H>, session: SessionStore) -> Self {
        Self {
            api,
            session,
            username: String::new(),
            password: String::new(),
            error: None,
        }
    }

    /// Error message from the last attempt, if it failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Attempt to sign in.
    ///
    /// Returns `Some(Route::Feed)` on success after storing the session.
    pub async fn submit(&mut self) -> Option<Route> {
        self.error = None;

        let request = LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        };

        match self.api.login_user(&request).await {
            Ok(response) => {
                if let Err(e) = self.session.login(&response.access_token, response.user) {
                    // the in-memory session is live; only persistence failed
                    tracing::warn!("session not persisted: {}", e);
                }
                Some(Route::Feed)
            }
            Err(e) => {
                tracing::debug!(code = e.error_code(), "login failed: {}", e);
                self.error = Some(e.to_string());
                None
            }
        }
    }
}

/// Account registration form.
pub struct RegisterView<H: HttpClient> {
    api: ApiClient<H>,
    redirect_delay: Duration,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    error: Option<String>,
    success: Option<String>,
}

impl<H: HttpClient> RegisterView<H> {
    pub fn new(api: ApiClient<H>) -> Self {
        Self {
            api,
            redirect_delay: DEFAULT_REDIRECT_DELAY,
            username: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            error: None,
            success: None,
        }
    }

    pub fn with_redirect_delay(mut self, delay: Duration) -> Self {
        self.redirect_delay = delay;
        self
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    /// Validate locally, then register.
    ///
    /// A policy violation sets the error without sending anything. On
    /// success the returned redirect points at the login screen.
    pub async fn submit(&mut self) -> Option<Redirect> {
        self.error = None;
        self.success = None;

        if let Err(policy) = validate_password(&self.password, &self.confirm_password) {
            let e = ClientError::from(policy);
            tracing::debug!(code = e.error_code(), "registration rejected locally: {}", e);
            self.error = Some(e.to_string());
            return None;
        }

        let request = RegisterRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        };

        match self.api.register_user(&request).await {
            Ok(_) => {
                tracing::info!(user = %self.username, "registered");
                self.success = Some(REGISTER_SUCCESS.to_string());
                Some(Redirect::new(Route::Login, self.redirect_delay))
            }
            Err(e) => {
                tracing::debug!(code = e.error_code(), "registration failed: {}", e);
                self.error = Some(e.to_string());
                None
            }
        }
    }
}
