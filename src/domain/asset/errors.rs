//! Asset Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Unable to open {0}")]
    NotFound(String),
}
