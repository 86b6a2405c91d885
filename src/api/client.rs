//! API client for the murmur backend.
//!
//! Each operation issues exactly one request (single attempt, no retry) and
//! either decodes the JSON answer or fails with a [`ClientError`]. Operations
//! that need a session check the token first and fail with
//! [`ClientError::Unauthenticated`] before touching the network.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::endpoints::{self, fallback};
use crate::error::{ClientError, ClientResult};
use crate::models::{
    Comment, ContentBody, LoginRequest, LoginResponse, PictureUpdate, Post, PostId,
    RegisterRequest, UserProfile,
};
use crate::traits::{FilePart, Headers, HttpClient, Response};

/// Fail fast when no session token is held.
pub fn ensure_token(token: Option<&str>) -> ClientResult<&str> {
    match token {
        Some(t) if !t.is_empty() => Ok(t),
        _ => Err(ClientError::Unauthenticated),
    }
}

/// Build the error for a non-success response.
///
/// Uses the backend's `message` when the body carries one (a string, or a
/// list of strings as validation pipes produce), else `fallback`.
pub fn failure(response: &Response, fallback: &str) -> ClientError {
    let message = response
        .json::<serde_json::Value>()
        .ok()
        .and_then(|body| match body.get("message") {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(serde_json::Value::Array(items)) => {
                let parts: Vec<&str> = items.iter().filter_map(|v| v.as_str()).collect();
                (!parts.is_empty()).then(|| parts.join(", "))
            }
            _ => None,
        })
        .unwrap_or_else(|| fallback.to_string());

    ClientError::Request {
        status: response.status,
        message,
    }
}

/// Client for the backend REST API.
///
/// Generic over the transport so tests can inject a recording mock.
///
/// # Example
///
/// ```ignore
/// use murmur::api::ApiClient;
/// use murmur::adapters::ReqwestHttpClient;
///
/// let api = ApiClient::new("http://localhost:3000", ReqwestHttpClient::new());
/// let posts = api.get_posts(Some(&token)).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient<H: HttpClient> {
    base_url: String,
    http: H,
}

impl<H: HttpClient> ApiClient<H> {
    /// Create a client for `base_url` (a trailing slash is dropped).
    pub fn new(base_url: impl Into<String>, http: H) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn json_headers() -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers
    }

    fn with_bearer(mut headers: Headers, token: &str) -> Headers {
        headers.insert("Authorization".to_string(), format!("Bearer {}", token));
        headers
    }

    fn decode<T: DeserializeOwned>(response: &Response) -> ClientResult<T> {
        response.json().map_err(|e| ClientError::InvalidResponse {
            message: e.to_string(),
        })
    }

    fn encode<T: Serialize>(body: &T) -> ClientResult<String> {
        serde_json::to_string(body).map_err(|e| ClientError::InvalidResponse {
            message: e.to_string(),
        })
    }

    async fn get(&self, path: &str, headers: &Headers, fallback: &str) -> ClientResult<Response> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);
        let response = self.http.get(&url, headers).await?;
        Self::check(response, fallback)
    }

    async fn post(
        &self,
        path: &str,
        body: &str,
        headers: &Headers,
        fallback: &str,
    ) -> ClientResult<Response> {
        let url = self.url(path);
        tracing::debug!("POST {}", url);
        let response = self.http.post(&url, body, headers).await?;
        Self::check(response, fallback)
    }

    fn check(response: Response, fallback: &str) -> ClientResult<Response> {
        if response.is_success() {
            Ok(response)
        } else {
            let err = failure(&response, fallback);
            tracing::debug!(status = response.status, "request failed: {}", err);
            Err(err)
        }
    }

    /// `POST /auth/register`
    ///
    /// Returns the backend's JSON answer untouched.
    pub async fn register_user(&self, request: &RegisterRequest) -> ClientResult<serde_json::Value> {
        let body = Self::encode(request)?;
        let response = self
            .post(endpoints::REGISTER, &body, &Self::json_headers(), fallback::REGISTER)
            .await?;
        Self::decode(&response)
    }

    /// `POST /auth/login`
    pub async fn login_user(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        let body = Self::encode(request)?;
        let response = self
            .post(endpoints::LOGIN, &body, &Self::json_headers(), fallback::LOGIN)
            .await?;
        Self::decode(&response)
    }

    /// `GET /posts` (bearer auth)
    pub async fn get_posts(&self, token: Option<&str>) -> ClientResult<Vec<Post>> {
        let token = ensure_token(token)?;
        let headers = Self::with_bearer(Headers::new(), token);
        let response = self
            .get(endpoints::POSTS, &headers, fallback::GET_POSTS)
            .await?;
        Self::decode(&response)
    }

    /// `POST /posts` (bearer auth)
    pub async fn create_post(&self, token: Option<&str>, content: &str) -> ClientResult<Post> {
        let token = ensure_token(token)?;
        let body = Self::encode(&ContentBody {
            content: content.to_string(),
        })?;
        let headers = Self::with_bearer(Self::json_headers(), token);
        let response = self
            .post(endpoints::POSTS, &body, &headers, fallback::CREATE_POST)
            .await?;
        Self::decode(&response)
    }

    /// `POST /posts/:id/like` (bearer auth)
    ///
    /// The backend flips membership; the response body is ignored.
    pub async fn toggle_like(&self, token: Option<&str>, post_id: PostId) -> ClientResult<()> {
        let token = ensure_token(token)?;
        let headers = Self::with_bearer(Headers::new(), token);
        self.post(&endpoints::like(post_id), "", &headers, fallback::TOGGLE_LIKE)
            .await?;
        Ok(())
    }

    /// `GET /users/:username`
    pub async fn get_user_profile(&self, username: &str) -> ClientResult<UserProfile> {
        let response = self
            .get(&endpoints::user(username), &Headers::new(), fallback::GET_PROFILE)
            .await?;
        Self::decode(&response)
    }

    /// `POST /users/upload-profile-pic` (bearer auth, multipart field `file`)
    pub async fn upload_profile_pic(
        &self,
        token: Option<&str>,
        file: FilePart,
    ) -> ClientResult<PictureUpdate> {
        let token = ensure_token(token)?;
        let headers = Self::with_bearer(Headers::new(), token);
        let url = self.url(endpoints::UPLOAD_PROFILE_PIC);
        tracing::debug!("POST {} ({} bytes)", url, file.content.len());
        let response = self.http.post_multipart(&url, file, &headers).await?;
        let response = Self::check(response, fallback::UPLOAD)?;
        Self::decode(&response)
    }

    /// `GET /posts/:id/comments`
    pub async fn get_comments_for_post(&self, post_id: PostId) -> ClientResult<Vec<Comment>> {
        let response = self
            .get(&endpoints::comments(post_id), &Headers::new(), fallback::GET_COMMENTS)
            .await?;
        Self::decode(&response)
    }

    /// `POST /posts/:id/comments` (bearer auth)
    pub async fn add_comment(
        &self,
        token: Option<&str>,
        post_id: PostId,
        content: &str,
    ) -> ClientResult<Comment> {
        let token = ensure_token(token)?;
        let body = Self::encode(&ContentBody {
            content: content.to_string(),
        })?;
        let headers = Self::with_bearer(Self::json_headers(), token);
        let response = self
            .post(&endpoints::comments(post_id), &body, &headers, fallback::ADD_COMMENT)
            .await?;
        Self::decode(&response)
    }
}
