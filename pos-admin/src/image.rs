//! Image loading for image fields
//!
//! A picked file is read whole and embedded in the record as a data URI.
//! There is no size or type check beyond what the picker filters.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use shared::error::{AppError, AppResult, ErrorCode};

/// A loaded image ready for [`crate::form::FormController::apply_image`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageData {
    /// `data:<mime>;base64,<payload>`
    pub data_uri: String,
    /// Original file name, display only
    pub file_name: String,
}

/// Encode raw bytes as a data URI
pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Read an image file into a data URI
///
/// The MIME type is guessed from the extension.
pub async fn read_image_file(path: impl AsRef<Path>) -> AppResult<ImageData> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "Failed to read image file");
        AppError::with_message(ErrorCode::ImageReadFailed, format!("{}: {e}", ErrorCode::ImageReadFailed.message()))
            .with_detail("path", path.display().to_string())
    })?;

    let mime = mime_guess::from_path(path).first_or_octet_stream();
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    tracing::debug!(file = %file_name, mime = %mime, bytes = bytes.len(), "Image loaded");
    Ok(ImageData {
        data_uri: encode_data_uri(mime.essence_str(), &bytes),
        file_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_data_uri() {
        assert_eq!(encode_data_uri("image/png", b"hi"), "data:image/png;base64,aGk=");
    }

    #[tokio::test]
    async fn test_read_image_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        tokio::fs::write(&path, [0x89, b'P', b'N', b'G']).await.unwrap();

        let image = read_image_file(&path).await.unwrap();
        assert_eq!(image.file_name, "logo.png");
        assert_eq!(image.data_uri, "data:image/png;base64,iVBORw==");
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_image_file(dir.path().join("nope.jpg")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ImageReadFailed);
    }
}
