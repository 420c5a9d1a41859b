use std::path::PathBuf;

use thiserror::Error;

/// Failure to retrieve a page over the network.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("timed out fetching {0}")]
    Timeout(String),
    #[error("failed to fetch the webpage: {0}")]
    Request(String),
    #[error("HTTP {status} {reason} for {url}")]
    Status {
        status: u16,
        reason: String,
        url: String,
    },
}

/// The fetched body could not be turned into a usable document.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("empty document returned by {0}")]
    EmptyDocument(String),
    #[error("unsupported content type '{content_type}' from {url}")]
    UnsupportedContentType { content_type: String, url: String },
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A linguistic resource could not be loaded. Never fatal: the resource is
/// treated as empty.
#[derive(Debug, Error)]
pub enum ResourceLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}:{line}: malformed entry '{entry}'")]
    Malformed {
        path: PathBuf,
        line: usize,
        entry: String,
    },
}

#[derive(Debug, Error)]
#[error("invalid configuration: {0}")]
pub struct ConfigError(#[from] pub config::ConfigError);
