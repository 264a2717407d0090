//! Optional order image: bounds checks and base64 encoding for inline embedding.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

/// Largest accepted image, in bytes (5 MiB).
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// MIME types accepted for the order image.
pub const ALLOWED_IMAGE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

const FALLBACK_MIME_TYPE: &str = "image/png";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AttachmentError {
    #[error("file too large")]
    TooLarge,

    #[error("unsupported image type")]
    UnsupportedType,
}

/// An uploaded file part, as read from the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageUpload {
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// An accepted image ready to embed in the notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedAttachment {
    pub mime_type: String,
    pub base64: String,
}

impl EncodedAttachment {
    /// `data:` URI for an inline `<img>`.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64)
    }
}

/// Validate and encode the optional image.
///
/// A missing upload and an empty one both mean "no image". Size is checked
/// before type, so an oversized file is reported as too large whatever it is.
pub fn handle(upload: Option<&ImageUpload>) -> Result<Option<EncodedAttachment>, AttachmentError> {
    let upload = match upload {
        Some(upload) if upload.size() > 0 => upload,
        _ => return Ok(None),
    };

    if upload.size() > MAX_IMAGE_BYTES {
        return Err(AttachmentError::TooLarge);
    }

    let declared = upload.content_type.as_deref().unwrap_or_default();
    if declared.is_empty() || !ALLOWED_IMAGE_TYPES.contains(&declared) {
        return Err(AttachmentError::UnsupportedType);
    }

    let mime_type = if declared.is_empty() {
        FALLBACK_MIME_TYPE
    } else {
        declared
    };

    Ok(Some(EncodedAttachment {
        mime_type: mime_type.to_string(),
        base64: STANDARD.encode(&upload.bytes),
    }))
}
