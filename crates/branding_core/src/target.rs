//! Reading and overwriting the target source file.

use crate::error::{BrandingError, BrandingResult};
use std::path::Path;

/// Read the whole target file as text
///
/// # Errors
///
/// Returns [`BrandingError::TargetMissing`] if the file is absent,
/// unreadable or not UTF-8.
pub fn load(path: &Path) -> BrandingResult<String> {
    let content = std::fs::read_to_string(path).map_err(|source| BrandingError::TargetMissing {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "read target");
    Ok(content)
}

/// Overwrite the target file with `content`
///
/// Truncates in place. An interrupted write can leave a partial file.
///
/// # Errors
///
/// Returns [`BrandingError::Write`] if the file cannot be written.
pub fn write(path: &Path, content: &str) -> BrandingResult<()> {
    std::fs::write(path, content).map_err(|source| BrandingError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote target");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.ts");

        let err = load(&path).unwrap_err();
        assert!(matches!(err, BrandingError::TargetMissing { .. }));
        assert!(err.to_string().contains("index.ts"));
    }

    #[test]
    fn test_load_rejects_non_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.ts");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        assert!(load(&path).unwrap_err().is_missing_input());
    }

    #[test]
    fn test_write_preserves_line_endings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.ts");
        let content = "line one\r\nline two\n";

        write(&path, content).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), content.as_bytes());
        assert_eq!(load(&path).unwrap(), content);
    }

    #[test]
    fn test_write_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.ts");
        std::fs::write(&path, "a much longer previous body").unwrap();

        write(&path, "short").unwrap();
        assert_eq!(load(&path).unwrap(), "short");
    }

    #[test]
    fn test_write_into_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("index.ts");

        let err = write(&path, "x").unwrap_err();
        assert!(matches!(err, BrandingError::Write { .. }));
        assert!(!err.is_missing_input());
    }
}
