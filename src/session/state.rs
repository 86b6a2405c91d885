//! The in-memory session value.

use crate::models::Identity;

/// Current authentication state.
///
/// Token and user are set and cleared together; the constructors are the
/// only way to build one, so a token without an identity (or the reverse)
/// cannot exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    user: Option<Identity>,
}

impl Session {
    /// A signed-out session.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A signed-in session.
    pub fn authenticated(token: impl Into<String>, user: Identity) -> Self {
        Self {
            token: Some(token.into()),
            user: Some(user),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&Identity> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Replace the identity of a signed-in session. No-op when signed out.
    pub(crate) fn replace_user(&mut self, user: Identity) {
        if self.is_authenticated() {
            self.user = Some(user);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let session = Session::empty();
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_authenticated_sets_both() {
        let session = Session::authenticated("tok", Identity::new(1, "ana"));
        assert_eq!(session.token(), Some("tok"));
        assert_eq!(session.user().map(|u| u.username.as_str()), Some("ana"));
    }

    #[test]
    fn test_replace_user_requires_session() {
        let mut empty = Session::empty();
        empty.replace_user(Identity::new(1, "ana"));
        assert!(empty.user().is_none());

        let mut session = Session::authenticated("tok", Identity::new(1, "ana"));
        let mut updated = Identity::new(1, "ana");
        updated.profile_pic = Some("/p.png".to_string());
        session.replace_user(updated.clone());
        assert_eq!(session.user(), Some(&updated));
    }
}
