// src/error.rs
//
// Failure taxonomy for the fetch/filter/persist pipeline. Every variant here
// is handled fail-soft by the orchestrator: the worst outcome of any of them
// is "no message shown this run".

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// A source could not be fetched or its top-level payload could not be
/// decoded. The source is skipped; remaining sources are still tried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {cause}")]
    Http { url: String, cause: anyhow::Error },
    #[error("invalid JSON from {url}: {source}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("null or empty payload from {url}")]
    EmptyPayload { url: String },
    #[error("top-level payload from {url} is not an array")]
    NotAnArray { url: String },
}

/// A single record within an otherwise valid payload is malformed. The
/// record is skipped; sibling records are still considered.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("record is not a JSON object")]
    NotAnObject,
    #[error("record has no uuid")]
    MissingId,
    #[error("record uuid {0} is not a valid UUID")]
    BadId(String),
    #[error("record {uuid} has no message")]
    MissingMessage { uuid: uuid::Uuid },
    #[error("malformed record: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Seen-set persistence failure. Load falls back to an empty set; save is
/// abandoned. Never propagated past the store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("seen file {path} not found")]
    NotFound { path: PathBuf },
    #[error("reading seen file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("seen file {path} contains an invalid UUID {line:?}: {source}")]
    BadLine {
        path: PathBuf,
        line: String,
        #[source]
        source: uuid::Error,
    },
    #[error("creating directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("writing seen file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why an admissibility check rejected a structurally valid record. This is
/// a normal filtering outcome, not an error; it is logged at debug level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    AlreadySeen,
    LocaleMismatch,
    TooEarly,
    Expired,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkipReason::AlreadySeen => "already seen",
            SkipReason::LocaleMismatch => "locale mismatch",
            SkipReason::TooEarly => "too early",
            SkipReason::Expired => "expired",
        };
        f.write_str(s)
    }
}
