//! Own and public profile views.

use std::path::{Path, PathBuf};

use super::route::Route;
use crate::api::{picture_part, ApiClient};
use crate::error::ClientResult;
use crate::models::UserProfile;
use crate::session::SessionStore;
use crate::traits::HttpClient;

/// What the profile picture slot currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Picture {
    #[default]
    None,
    /// A picture reference confirmed by the backend
    Remote(String),
    /// A local file shown while its upload is in flight
    LocalPreview(PathBuf),
}

impl Picture {
    fn from_remote(reference: Option<&str>) -> Self {
        match reference {
            Some(r) if !r.is_empty() => Picture::Remote(r.to_string()),
            _ => Picture::None,
        }
    }

    pub fn is_preview(&self) -> bool {
        matches!(self, Picture::LocalPreview(_))
    }
}

/// The signed-in user's own profile, with picture upload.
pub struct OwnProfileView<H: HttpClient> {
    api: ApiClient<H>,
    session: SessionStore,
    profile: Option<UserProfile>,
    loaded_for: Option<String>,
    picture: Picture,
    confirmed: Option<String>,
}

impl<H: HttpClient> OwnProfileView<H> {
    pub fn new(api: ApiClient<H>, session: SessionStore) -> Self {
        Self {
            api,
            session,
            profile: None,
            loaded_for: None,
            picture: Picture::None,
            confirmed: None,
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn picture(&self) -> &Picture {
        &self.picture
    }

    /// Load the profile if the session token changed since the last load.
    ///
    /// Redirects to login when signed out.
    pub async fn refresh(&mut self) -> Option<Route> {
        let session = self.session.session();
        if let Some(redirect) = Route::OwnProfile.guard(&session) {
            return Some(redirect);
        }
        let (Some(token), Some(user)) = (session.token(), session.user()) else {
            return Some(Route::Login);
        };
        if self.loaded_for.as_deref() == Some(token) {
            return None;
        }

        match self.api.get_user_profile(&user.username).await {
            Ok(profile) => {
                self.confirmed = profile.profile_pic.clone();
                self.picture = Picture::from_remote(self.confirmed.as_deref());
                self.profile = Some(profile);
                self.loaded_for = Some(token.to_string());
            }
            Err(e) => tracing::error!(user = %user.username, "failed to load profile: {}", e),
        }
        None
    }

    /// Upload a new profile picture.
    ///
    /// The local file is previewed right away. On success the confirmed
    /// reference replaces the preview, the loaded profile and the stored
    /// identity; on failure the last confirmed picture comes back.
    /// Returns whether the backend accepted the picture.
    pub async fn upload_picture(&mut self, path: &Path) -> bool {
        let Some(token) = self.session.token() else {
            tracing::error!("picture upload attempted without a session");
            return false;
        };

        self.picture = Picture::LocalPreview(path.to_path_buf());

        match self.send_picture(&token, path).await {
            Ok(reference) => {
                self.confirm_picture(reference);
                true
            }
            Err(e) => {
                tracing::error!(code = e.error_code(), "profile picture upload failed: {}", e);
                self.picture = Picture::from_remote(self.confirmed.as_deref());
                false
            }
        }
    }

    async fn send_picture(&self, token: &str, path: &Path) -> ClientResult<Option<String>> {
        let part = picture_part(path).await?;
        let update = self.api.upload_profile_pic(Some(token), part).await?;
        Ok(update.profile_pic)
    }

    fn confirm_picture(&mut self, reference: Option<String>) {
        self.picture = Picture::from_remote(reference.as_deref());
        if let Some(profile) = self.profile.as_mut() {
            profile.profile_pic = reference.clone();
        }

        if let Some(mut user) = self.session.user() {
            user.profile_pic = reference.clone();
            if let Err(e) = self.session.update_identity(user) {
                tracing::warn!("updated identity not persisted: {}", e);
            }
        }
        self.confirmed = reference;
    }
}

/// Someone's public profile, read-only.
pub struct PublicProfileView<H: HttpClient> {
    api: ApiClient<H>,
    username: Option<String>,
    profile: Option<UserProfile>,
}

impl<H: HttpClient> PublicProfileView<H> {
    pub fn new(api: ApiClient<H>) -> Self {
        Self {
            api,
            username: None,
            profile: None,
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Show a user's profile. Loads only when `username` differs from the
    /// last one loaded.
    pub async fn show(&mut self, username: &str) {
        if self.username.as_deref() == Some(username) {
            return;
        }

        match self.api.get_user_profile(username).await {
            Ok(profile) => {
                self.profile = Some(profile);
                self.username = Some(username.to_string());
            }
            Err(e) => tracing::error!(user = %username, "failed to load profile: {}", e),
        }
    }
}
