use crate::error::ServiceError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier the service assigned to a created playlist
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaylistId(String);

impl PlaylistId {
    pub fn new(id: impl Into<String>) -> Self {
        PlaylistId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who can see a created playlist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    #[default]
    Private,
    Public,
}

impl Visibility {
    pub fn is_public(&self) -> bool {
        matches!(self, Visibility::Public)
    }
}

#[async_trait]
pub trait CatalogLookup {
    /// Best match for a free-text query, `None` when nothing matches.
    ///
    /// The query is a title optionally followed by `artist:<name>` and
    /// `album:<name>` qualifiers.
    async fn search(&self, query: &str) -> Result<Option<String>, ServiceError>;
}

#[async_trait]
pub trait PlaylistMutator {
    /// Create an empty playlist
    async fn create(&self, name: &str, visibility: Visibility) -> Result<PlaylistId, ServiceError>;

    /// Append track identifiers, at most [`MAX_BATCH_SIZE`](crate::MAX_BATCH_SIZE) per call
    async fn append(&self, playlist: &PlaylistId, uris: &[String]) -> Result<(), ServiceError>;
}

#[cfg(test)]
pub mod stub {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        Search(String),
        Create(String, Visibility),
        Append(PlaylistId, Vec<String>),
    }

    /// In-memory service that answers every search with `stub:<query>`
    /// unless told otherwise, and records each call it receives.
    #[derive(Default)]
    pub struct ServiceStub {
        missing: HashSet<String>,
        search_failures: HashSet<String>,
        create_failures: HashSet<String>,
        append_failures: HashMap<String, usize>,
        calls: Mutex<Vec<Call>>,
    }

    impl ServiceStub {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_missing(mut self, query: &str) -> Self {
            self.missing.insert(query.to_string());
            self
        }

        pub fn failing_search(mut self, query: &str) -> Self {
            self.search_failures.insert(query.to_string());
            self
        }

        pub fn failing_create(mut self, name: &str) -> Self {
            self.create_failures.insert(name.to_string());
            self
        }

        /// Fail the `batch`th append (zero based) to the named playlist
        pub fn failing_append(mut self, name: &str, batch: usize) -> Self {
            self.append_failures.insert(Self::id_for(name).to_string(), batch);
            self
        }

        pub fn id_for(name: &str) -> PlaylistId {
            PlaylistId::new(format!("id-{name}"))
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        pub fn appends(&self) -> Vec<(PlaylistId, Vec<String>)> {
            self.calls()
                .into_iter()
                .filter_map(|call| match call {
                    Call::Append(id, uris) => Some((id, uris)),
                    _ => None,
                })
                .collect()
        }

        fn record(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait]
    impl CatalogLookup for ServiceStub {
        async fn search(&self, query: &str) -> Result<Option<String>, ServiceError> {
            self.record(Call::Search(query.to_string()));

            if self.search_failures.contains(query) {
                return Err(ServiceError::Connection("search unavailable".to_string()));
            }
            if self.missing.contains(query) {
                return Ok(None);
            }
            Ok(Some(format!("stub:{query}")))
        }
    }

    #[async_trait]
    impl PlaylistMutator for ServiceStub {
        async fn create(&self, name: &str, visibility: Visibility) -> Result<PlaylistId, ServiceError> {
            self.record(Call::Create(name.to_string(), visibility));

            if self.create_failures.contains(name) {
                return Err(ServiceError::Rejected {
                    status: 403,
                    message: "not allowed".to_string(),
                });
            }
            Ok(Self::id_for(name))
        }

        async fn append(&self, playlist: &PlaylistId, uris: &[String]) -> Result<(), ServiceError> {
            let previous = self
                .appends()
                .iter()
                .filter(|(id, _)| id == playlist)
                .count();
            self.record(Call::Append(playlist.clone(), uris.to_vec()));

            if self.append_failures.get(playlist.as_str()) == Some(&previous) {
                return Err(ServiceError::Protocol("append rejected".to_string()));
            }
            Ok(())
        }
    }
}
