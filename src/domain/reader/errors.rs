//! Reader Context - Errors

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewStateError {
    #[error("Load already in progress: {0}")]
    LoadInProgress(Uuid),

    #[error("No load in progress")]
    NotLoading,

    #[error("Stale load result: expected {expected}, got {actual}")]
    StaleLoad { expected: Uuid, actual: Uuid },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PresenterError {
    #[error("Index out of range: {index} (count: {count})")]
    IndexOutOfRange { index: usize, count: usize },
}
