//! Contracts for the two external collaborators: the record source and the
//! user directory search. Only their request/response shapes matter here;
//! transports live with the embedder.

use thiserror::Error;

/// Queries shorter than this never reach the directory; the caller
/// short-circuits to an empty suggestion list without a call.
pub const MIN_QUERY_LEN: usize = 3;

/// Record source failure. Surfaced to the operator as a generic banner and
/// never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("record source unreachable: {0}")]
    Unreachable(String),
    #[error("record source returned status {0}")]
    BadStatus(u16),
    #[error("record source body malformed: {0}")]
    MalformedBody(String),
}

impl LoadError {
    /// Operator-facing banner text. Deliberately generic; the detail stays
    /// in the error itself.
    #[must_use]
    pub fn banner_message(&self) -> &'static str {
        "Failed to load incidents. Please try again later."
    }
}

/// User directory failure. Swallowed by the caller: degrades to "no
/// suggestions" plus a retained warning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("user directory unreachable: {0}")]
    Unreachable(String),
    #[error("user directory body malformed: {0}")]
    MalformedBody(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCandidate {
    pub identifier: String,
    pub display_name: String,
}

/// Provides the initial (and only) wholesale record load.
pub trait RecordSource {
    fn fetch(&self) -> Result<Vec<crate::record::IncidentRecord>, LoadError>;
}

/// Name-prefix lookup for the assignee picker.
pub trait UserDirectory {
    fn search(&self, query: &str) -> Result<Vec<UserCandidate>, SearchError>;
}
