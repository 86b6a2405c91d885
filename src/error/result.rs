//! Result type alias for client operations.

use super::client_error::ClientError;

/// Type alias for Results using ClientError.
///
/// # Example
///
/// ```ignore
/// use murmur::error::ClientResult;
///
/// async fn load(api: &ApiClient<ReqwestHttpClient>) -> ClientResult<Vec<Post>> {
///     api.get_posts(Some("token")).await
/// }
/// ```
pub type ClientResult<T> = Result<T, ClientError>;
