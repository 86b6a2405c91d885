//! Building the multipart file part for picture uploads.

use std::path::Path;

use bytes::Bytes;

use super::endpoints::UPLOAD_FIELD;
use crate::error::{ClientError, ClientResult};
use crate::traits::FilePart;

/// Read a local picture into the `file` form part.
///
/// The MIME type is guessed from the extension, falling back to
/// `application/octet-stream`.
pub async fn picture_part(path: &Path) -> ClientResult<FilePart> {
    let content = tokio::fs::read(path)
        .await
        .map_err(|e| ClientError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "upload".to_string());
    let mime_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();

    Ok(FilePart {
        field: UPLOAD_FIELD.to_string(),
        file_name,
        mime_type,
        content: Bytes::from(content),
    })
}
