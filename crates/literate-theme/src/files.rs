//! Reading and writing theme files.

use std::fs;
use std::path::Path;

use literate_plist::Document;

use crate::error::{Result, ThemeError};

/// Reads and parses the theme at `path`.
pub fn load(path: &Path) -> Result<Document> {
    let xml = fs::read_to_string(path).map_err(|source| ThemeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = xml.len(), "read theme");

    Document::parse(&xml).map_err(|source| ThemeError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Serializes `document` and writes it to `path`, replacing any existing file.
pub fn write(document: &Document, path: &Path) -> Result<()> {
    let xml = document.to_pretty_string()?;
    fs::write(path, &xml).map_err(|source| ThemeError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = xml.len(), "wrote theme");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load(&dir.path().join("missing.tmTheme")).unwrap_err();
        assert!(matches!(err, ThemeError::Read { .. }));
    }

    #[test]
    fn test_load_malformed_xml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.tmTheme");
        fs::write(&path, "<plist><dict></plist>").unwrap();
        let err = load(&path).unwrap_err();
        assert!(matches!(err, ThemeError::Parse { .. }));
    }

    #[test]
    fn test_write_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.tmTheme");
        fs::write(&path, "old contents").unwrap();

        let doc = Document::parse("<plist><dict/></plist>").unwrap();
        write(&doc, &path).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("<dict/>"));
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = TempDir::new().unwrap();
        let doc = Document::parse("<plist/>").unwrap();
        let err = write(&doc, &dir.path().join("nope").join("out.tmTheme")).unwrap_err();
        assert!(matches!(err, ThemeError::Write { .. }));
    }
}
