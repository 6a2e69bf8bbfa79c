use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("invalid options for the {lookup} lookup: {source}")]
    InvalidOptions {
        lookup: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to stat {path}: {source}")]
    Probe {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("user {0} not found")]
    UserNotFound(String),

    #[error("user database lookup for {term} failed: {source}")]
    UserDatabase {
        term: String,
        #[source]
        source: io::Error,
    },

    #[error("attribute {0} doesn't exist")]
    UnknownAttribute(String),

    #[error("unknown lookup {0}")]
    UnknownLookup(String),

    #[error("unknown filter {0}")]
    UnknownFilter(String),

    #[error("failed to encode lookup result: {0}")]
    Encode(#[from] serde_json::Error),
}
