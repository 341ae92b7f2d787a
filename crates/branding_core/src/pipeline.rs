//! End-to-end branding update.

use crate::badge;
use crate::config::BrandingConfig;
use crate::error::BrandingResult;
use crate::image::EncodedImage;
use crate::target;
use std::io::Write;

/// Summary of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Encoded image length in characters
    pub encoded_len: usize,
    /// Whether the CSS rule was replaced
    pub css_replaced: bool,
    /// Whether the markup block was replaced
    pub html_replaced: bool,
}

/// Encode the stamp and splice it into the target file
///
/// Status lines go to `out`. The target is only written once both inputs
/// have been read; it is rewritten even when neither block matched.
///
/// # Errors
///
/// Returns [`BrandingError::ImageMissing`](crate::BrandingError::ImageMissing)
/// or [`BrandingError::TargetMissing`](crate::BrandingError::TargetMissing)
/// before anything is written, and propagates write failures.
pub fn run<W: Write>(config: &BrandingConfig, out: &mut W) -> BrandingResult<RunReport> {
    let image = EncodedImage::load(config.image_path())?;
    writeln!(out, "Encoded image size: {} chars", image.len())?;

    let content = target::load(config.target_path())?;
    let outcome = badge::apply(&content, &image);
    target::write(config.target_path(), &outcome.content)?;

    tracing::debug!(
        target_path = %config.target_path().display(),
        css = outcome.css_replaced,
        html = outcome.html_replaced,
        "branding updated"
    );
    writeln!(out, "Updated index.ts successfully.")?;

    Ok(RunReport {
        encoded_len: image.len(),
        css_replaced: outcome.css_replaced,
        html_replaced: outcome.html_replaced,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BrandingError;

    #[test]
    fn test_run_reports_status_lines() {
        let dir = tempfile::tempdir().unwrap();
        let config = BrandingConfig::new(dir.path().join("stamp.png"), dir.path().join("index.ts"));
        std::fs::write(config.image_path(), b"abc").unwrap();
        std::fs::write(config.target_path(), "plain").unwrap();

        let mut out = Vec::new();
        let report = run(&config, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Encoded image size: 4 chars\nUpdated index.ts successfully.\n"
        );
        assert_eq!(report.encoded_len, 4);
        assert!(!report.css_replaced);
        assert!(!report.html_replaced);
    }

    #[test]
    fn test_run_missing_image_prints_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = BrandingConfig::new(dir.path().join("stamp.png"), dir.path().join("index.ts"));

        let mut out = Vec::new();
        let err = run(&config, &mut out).unwrap_err();

        assert!(matches!(err, BrandingError::ImageMissing { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_missing_target_prints_size_only() {
        let dir = tempfile::tempdir().unwrap();
        let config = BrandingConfig::new(dir.path().join("stamp.png"), dir.path().join("index.ts"));
        std::fs::write(config.image_path(), b"abcdef").unwrap();

        let mut out = Vec::new();
        let err = run(&config, &mut out).unwrap_err();

        assert!(matches!(err, BrandingError::TargetMissing { .. }));
        assert_eq!(String::from_utf8(out).unwrap(), "Encoded image size: 8 chars\n");
        assert!(!config.target_path().exists());
    }
}
