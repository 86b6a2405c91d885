//! Process-wide session store.
//!
//! Created once at startup with [`SessionStore::restore`] and handed to
//! every view. Mutators write through to durable storage and publish the
//! new [`Session`] to subscribers.

use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;

use super::state::Session;
use crate::models::Identity;
use crate::traits::{SessionStorage, StorageError, TOKEN_KEY, USER_KEY};

struct Inner {
    storage: Box<dyn SessionStorage>,
    state: watch::Sender<Session>,
}

/// Shared handle to the session. Clones refer to the same session.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl SessionStore {
    /// Create a signed-out store without reading storage.
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        Self::with_session(storage, Session::empty())
    }

    /// Create a store seeded from durable storage.
    ///
    /// Both keys must be present and the identity must decode. Anything
    /// else is treated as a broken session: both keys are removed and the
    /// store starts signed out.
    pub fn restore(storage: impl SessionStorage + 'static) -> Self {
        let session = Self::load_persisted(&storage);
        Self::with_session(storage, session)
    }

    fn with_session(storage: impl SessionStorage + 'static, session: Session) -> Self {
        let (state, _) = watch::channel(session);
        Self {
            inner: Arc::new(Inner {
                storage: Box::new(storage),
                state,
            }),
        }
    }

    fn load_persisted(storage: &dyn SessionStorage) -> Session {
        let token = read_or_log(storage, TOKEN_KEY);
        let user = read_or_log(storage, USER_KEY);

        match (token, user) {
            (None, None) => Session::empty(),
            (Some(token), Some(raw_user)) => match serde_json::from_str::<Identity>(&raw_user) {
                Ok(user) => {
                    tracing::debug!(user = %user.username, "restored session");
                    Session::authenticated(token, user)
                }
                Err(e) => {
                    tracing::warn!("stored identity does not decode, discarding session: {}", e);
                    discard(storage);
                    Session::empty()
                }
            },
            (token, user) => {
                tracing::warn!(
                    has_token = token.is_some(),
                    has_user = user.is_some(),
                    "partial session in storage, discarding"
                );
                discard(storage);
                Session::empty()
            }
        }
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.inner.state.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.inner.state.borrow().token().map(str::to_string)
    }

    pub fn user(&self) -> Option<Identity> {
        self.inner.state.borrow().user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.state.borrow().is_authenticated()
    }

    /// Watch session changes.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.inner.state.subscribe()
    }

    /// Sign in: set the session and persist both values.
    ///
    /// The in-memory session is set even when persisting fails. Storage
    /// never keeps a token without its identity: if the identity cannot be
    /// written the token is removed again.
    pub fn login(&self, token: &str, user: Identity) -> Result<(), StorageError> {
        let serialized = serde_json::to_string(&user).map_err(|e| StorageError::WriteFailed {
            key: USER_KEY.to_string(),
            message: e.to_string(),
        })?;

        tracing::info!(user = %user.username, "signed in");
        self.inner
            .state
            .send_replace(Session::authenticated(token, user));

        self.inner.storage.set(TOKEN_KEY, token)?;
        if let Err(e) = self.inner.storage.set(USER_KEY, &serialized) {
            if let Err(undo) = self.inner.storage.remove(TOKEN_KEY) {
                tracing::warn!("could not roll back stored token: {}", undo);
            }
            return Err(e);
        }
        Ok(())
    }

    /// Sign out: clear the session and remove both stored values.
    pub fn logout(&self) -> Result<(), StorageError> {
        self.inner.state.send_replace(Session::empty());
        tracing::info!("signed out");

        let token_result = self.inner.storage.remove(TOKEN_KEY);
        let user_result = self.inner.storage.remove(USER_KEY);
        token_result.and(user_result)
    }

    /// Replace the signed-in identity in memory and in storage.
    ///
    /// Does nothing while signed out.
    pub fn update_identity(&self, user: Identity) -> Result<(), StorageError> {
        if !self.is_authenticated() {
            return Ok(());
        }

        let serialized = serde_json::to_string(&user).map_err(|e| StorageError::WriteFailed {
            key: USER_KEY.to_string(),
            message: e.to_string(),
        })?;

        self.inner
            .state
            .send_modify(|session| session.replace_user(user));
        self.inner.storage.set(USER_KEY, &serialized)
    }
}

fn read_or_log(storage: &dyn SessionStorage, key: &str) -> Option<String> {
    match storage.get(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("could not read stored session value: {}", e);
            None
        }
    }
}

fn discard(storage: &dyn SessionStorage) {
    for key in [TOKEN_KEY, USER_KEY] {
        if let Err(e) = storage.remove(key) {
            tracing::warn!("could not clear stored session value: {}", e);
        }
    }
}
