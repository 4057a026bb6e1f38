use std::{io, path::PathBuf};

use partysplit_domain::RosterEditError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterDocumentError {
    #[error("Roster document is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("Roster document must be an array of participants (found {found})")]
    NotAnArray { found: &'static str },
    #[error("Participant record #{index} is invalid: {source}")]
    InvalidRecord {
        index: usize,
        source: serde_json::Error,
    },
    #[error("Failed to serialize roster: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Failed to read roster from {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("Failed to write roster to {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("Stored roster is unreadable: {0}")]
    Document(#[from] RosterDocumentError),
}

#[derive(Debug, Error)]
pub enum RosterStoreError {
    #[error(transparent)]
    Edit(#[from] RosterEditError),
    #[error(transparent)]
    Document(#[from] RosterDocumentError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
