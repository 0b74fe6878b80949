use crate::error::InputError;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Read and parse a UTF-8 JSON document
pub fn load_document(path: impl AsRef<Path>) -> Result<Value, InputError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| InputError::io(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "read document");

    serde_json::from_slice(&bytes).map_err(|e| InputError::malformed(path, e))
}

/// Parse a document already held in memory
pub fn parse_document(text: &str) -> Result<Value, InputError> {
    serde_json::from_str(text).map_err(InputError::MalformedText)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn loads_valid_document() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"tracks": ["a.mp3"]}}"#).unwrap();

        let document = load_document(file.path()).unwrap();
        assert!(document.get("tracks").is_some());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");

        assert_matches!(load_document(&path), Err(InputError::Io { path: p, .. }) if p == path);
    }

    #[test]
    fn invalid_json_is_malformed() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        assert_matches!(load_document(file.path()), Err(InputError::Malformed { .. }));
    }

    #[test]
    fn invalid_utf8_is_malformed() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[b'"', 0xff, 0xfe, b'"']).unwrap();

        assert_matches!(load_document(file.path()), Err(InputError::Malformed { .. }));
    }

    #[test]
    fn parse_document_reports_text_errors() {
        assert_matches!(parse_document("[1, 2"), Err(InputError::MalformedText(_)));
        assert_matches!(parse_document("[1, 2]"), Ok(Value::Array(items)) if items.len() == 2);
    }
}
