//! Error types for the branding update.

use std::io;
use std::path::PathBuf;

/// Result type for branding operations
pub type BrandingResult<T> = Result<T, BrandingError>;

/// Branding update error
#[derive(Debug, thiserror::Error)]
pub enum BrandingError {
    /// Stamp image absent or unreadable
    #[error("Could not find image at {}", .path.display())]
    ImageMissing {
        /// Image path as configured
        path: PathBuf,
        /// Underlying read failure
        #[source]
        source: io::Error,
    },

    /// Target source file absent or unreadable
    #[error("Could not find index.ts at {}", .path.display())]
    TargetMissing {
        /// Target path as configured
        path: PathBuf,
        /// Underlying read failure
        #[source]
        source: io::Error,
    },

    /// Overwriting the target failed
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// Target path as configured
        path: PathBuf,
        /// Underlying write failure
        #[source]
        source: io::Error,
    },

    /// Status line could not be written
    #[error("Failed to write status: {0}")]
    Status(#[from] io::Error),
}

impl BrandingError {
    /// Whether this is one of the two reported input conditions
    ///
    /// These end the run early with nothing modified. Every other error is
    /// unexpected and should propagate.
    #[must_use]
    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::ImageMissing { .. } | Self::TargetMissing { .. })
    }
}
