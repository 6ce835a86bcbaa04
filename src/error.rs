// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Everything that can go wrong between "request page" and "parsed rows".
/// None of these are fatal to a batch; the orchestrator logs them and moves on.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("{0} not found")]
    TableNotFound(String),
    #[error("cell {cell} has {found} links, expected at least {expected}")]
    MissingLinks {
        cell: usize,
        found: usize,
        expected: usize,
    },
}

/// Write-side failures. These propagate out of the run.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("could not write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not serialize {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
