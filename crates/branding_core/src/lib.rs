//! Branding badge updater
//!
//! Embeds the donor stamp PNG into the webhook receiver's postcard template
//! as a base64 data URI, replacing whatever badge CSS and markup were there.
//! All console output is left to the caller.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod badge;
pub mod config;
pub mod error;
pub mod image;
pub mod pipeline;
pub mod target;

// Re-exports
pub use badge::{Splice, SpliceOutcome};
pub use config::{BrandingConfig, BADGE_CLASS, IMAGE_PATH, TARGET_PATH};
pub use error::{BrandingError, BrandingResult};
pub use image::EncodedImage;
pub use pipeline::{run, RunReport};
