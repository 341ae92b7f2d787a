//! Stamp image loading and base64 encoding.

use crate::error::{BrandingError, BrandingResult};
use base64::Engine;
use std::path::Path;

/// MIME prefix for the embedded image
const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Base64 text of an image, standard alphabet with padding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    encoded: String,
}

impl EncodedImage {
    /// Read an image from disk and encode it
    ///
    /// # Errors
    ///
    /// Returns [`BrandingError::ImageMissing`] if the file cannot be read.
    pub fn load(path: &Path) -> BrandingResult<Self> {
        let bytes = std::fs::read(path).map_err(|source| BrandingError::ImageMissing {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "read image");
        Ok(Self::from_bytes(&bytes))
    }

    /// Encode raw image bytes
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            encoded: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }

    /// Encoded text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.encoded
    }

    /// Encoded length in characters
    #[must_use]
    pub fn len(&self) -> usize {
        self.encoded.len()
    }

    /// Check if the source image was empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.encoded.is_empty()
    }

    /// `data:` URI usable as an `<img>` source
    #[must_use]
    pub fn data_uri(&self) -> String {
        format!("{DATA_URI_PREFIX}{}", self.encoded)
    }
}
