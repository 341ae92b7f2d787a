//! Fixed input locations.

use std::path::{Path, PathBuf};

/// Stamp image, relative to the working directory
pub const IMAGE_PATH: &str = "public/thank_donors_stamp.png";

/// Webhook receiver source that carries the postcard template
pub const TARGET_PATH: &str = "supabase/functions/webhook-receiver/index.ts";

/// Class name shared by the badge CSS rule and its wrapping element
pub const BADGE_CLASS: &str = "branding-badge";

/// Paths used by a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandingConfig {
    /// PNG to embed
    pub image_path: PathBuf,
    /// Text file rewritten in place
    pub target_path: PathBuf,
}

impl BrandingConfig {
    /// Create a config for explicit paths
    #[must_use]
    pub fn new(image_path: impl Into<PathBuf>, target_path: impl Into<PathBuf>) -> Self {
        Self {
            image_path: image_path.into(),
            target_path: target_path.into(),
        }
    }

    /// Image path
    #[must_use]
    pub fn image_path(&self) -> &Path {
        &self.image_path
    }

    /// Target path
    #[must_use]
    pub fn target_path(&self) -> &Path {
        &self.target_path
    }
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self::new(IMAGE_PATH, TARGET_PATH)
    }
}
