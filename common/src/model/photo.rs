use base64::Engine;
use base64::engine::general_purpose;
use serde::{Deserialize, Serialize};

use crate::config::MAX_PHOTO_BYTES;
use crate::error::FormError;

/// A student photo embedded as a `data:` URI, ready to be stored in local
/// storage and used directly as an image source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoData(String);

impl PhotoData {
    /// Wraps an existing data URI (or any image URL) without inspecting it.
    pub fn from_uri(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// Builds a data URI from raw file bytes.
    ///
    /// The MIME type comes from the file's magic bytes rather than from the
    /// browser-reported type, so renamed files are labelled correctly and
    /// non-images are rejected.
    pub fn from_image_bytes(bytes: &[u8]) -> Result<Self, FormError> {
        let format = image::guess_format(bytes).map_err(|_| FormError::NotAnImage)?;
        let encoded = general_purpose::STANDARD.encode(bytes);
        Ok(Self(format!(
            "data:{};base64,{}",
            format.to_mime_type(),
            encoded
        )))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// MIME type declared by the data URI, if it is one.
    pub fn mime_type(&self) -> Option<&str> {
        let rest = self.0.strip_prefix("data:")?;
        let end = rest.find([';', ','])?;
        Some(&rest[..end])
    }
}

impl AsRef<str> for PhotoData {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Rejects photo files larger than [`MAX_PHOTO_BYTES`].
///
/// Runs before the file is read so an oversized selection never touches form
/// state.
pub fn check_photo_size(size: u64) -> Result<(), FormError> {
    if size > MAX_PHOTO_BYTES {
        return Err(FormError::PhotoTooLarge {
            size,
            limit: MAX_PHOTO_BYTES,
        });
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Smallest byte sequence `image::guess_format` recognises as PNG.
    pub(crate) const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    #[test]
    fn png_bytes_become_png_data_uri() {
        let photo = PhotoData::from_image_bytes(PNG_MAGIC).unwrap();
        assert!(photo.as_str().starts_with("data:image/png;base64,"));
        assert_eq!(photo.mime_type(), Some("image/png"));
    }

    #[test]
    fn jpeg_is_detected_from_magic_bytes() {
        let photo = PhotoData::from_image_bytes(&[0xFF, 0xD8, 0xFF, 0xE0, 0, 0x10]).unwrap();
        assert_eq!(photo.mime_type(), Some("image/jpeg"));
    }

    #[test]
    fn text_files_are_not_images() {
        let err = PhotoData::from_image_bytes(b"hello world").unwrap_err();
        assert_eq!(err, FormError::NotAnImage);
    }

    #[test]
    fn size_cap_is_inclusive() {
        assert!(check_photo_size(MAX_PHOTO_BYTES).is_ok());
        assert!(matches!(
            check_photo_size(3 * 1024 * 1024),
            Err(FormError::PhotoTooLarge { size: 3_145_728, .. })
        ));
    }

    #[test]
    fn blank_uri_counts_as_empty() {
        assert!(PhotoData::from_uri("  ").is_empty());
        assert!(!PhotoData::from_uri("data:image/png;base64,AA==").is_empty());
    }
}
