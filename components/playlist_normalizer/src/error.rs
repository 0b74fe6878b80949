use std::path::PathBuf;
use thiserror::Error;

/// The document could not be turned into a JSON value.
///
/// Once a value exists, normalization itself never fails.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read document {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("document {path} is not valid JSON")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("document is not valid JSON")]
    MalformedText(#[source] serde_json::Error),
}

impl InputError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        InputError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        InputError::Malformed {
            path: path.into(),
            source,
        }
    }
}
