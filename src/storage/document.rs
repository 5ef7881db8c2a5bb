//! Translation documents on disk
//!
//! A document is the saved state of one translation: what went in, what
//! came out, which direction, when, and by which version. Stored as
//! pretty-printed JSON at a path the user chooses.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::{Direction, OracleError, OracleResult};

/// Format of the `timestamp` field
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Version written into every saved document
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TranslationDocument {
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub output: String,
    #[serde(default)]
    pub mode: Direction,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub version: String,
}

impl TranslationDocument {
    /// Build a document stamped with the current time and crate version
    pub fn new(input: &str, output: &str, mode: Direction) -> Self {
        Self {
            input: input.to_string(),
            output: output.to_string(),
            mode,
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            version: VERSION.to_string(),
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn save_document(path: &Path, doc: &TranslationDocument) -> OracleResult<()> {
    let json = serde_json::to_string_pretty(doc)
        .map_err(|e| OracleError::Storage(format!("Serialization error: {e}")))?;
    std::fs::write(path, json)
        .map_err(|e| OracleError::Storage(format!("Failed to write '{}': {e}", file_name(path))))?;
    log::info!("Saved translation to {}", path.display());
    Ok(())
}

pub fn load_document(path: &Path) -> OracleResult<TranslationDocument> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| OracleError::Storage(format!("Failed to read '{}': {e}", file_name(path))))?;
    let doc = serde_json::from_str(&json)
        .map_err(|e| OracleError::Storage(format!("Failed to parse '{}': {e}", file_name(path))))?;
    log::info!("Loaded translation from {}", path.display());
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn new_document_is_stamped() {
        let doc = TranslationDocument::new("SOS", "... --- ...", Direction::Encode);
        assert_eq!(doc.version, VERSION);
        assert!(chrono::NaiveDateTime::parse_from_str(&doc.timestamp, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn document_json_field_names() {
        let doc = TranslationDocument::new("SOS", "... --- ...", Direction::Decode);
        let value: serde_json::Value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["input"], "SOS");
        assert_eq!(value["output"], "... --- ...");
        assert_eq!(value["mode"], "decode");
        assert!(value["timestamp"].is_string());
        assert!(value["version"].is_string());
    }

    #[test]
    fn save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sos.mor");
        let doc = TranslationDocument::new("SOS", "... --- ...", Direction::Encode);

        save_document(&path, &doc).unwrap();
        assert_eq!(load_document(&path).unwrap(), doc);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("partial.mor");
        std::fs::write(&path, r#"{"input": "HI"}"#).unwrap();

        let doc = load_document(&path).unwrap();
        assert_eq!(doc.input, "HI");
        assert_eq!(doc.output, "");
        assert_eq!(doc.mode, Direction::Encode);
    }

    #[test]
    fn load_errors_are_readable() {
        let dir = tempdir().unwrap();

        let missing = load_document(&dir.path().join("nope.mor")).unwrap_err();
        assert!(missing.to_string().contains("Failed to read 'nope.mor'"));

        let garbage = dir.path().join("garbage.mor");
        std::fs::write(&garbage, "not json").unwrap();
        let err = load_document(&garbage).unwrap_err();
        assert!(err.to_string().contains("Failed to parse 'garbage.mor'"));
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("dir.mor");
        let doc = TranslationDocument::default();
        assert!(save_document(&path, &doc).is_err());
    }
}
