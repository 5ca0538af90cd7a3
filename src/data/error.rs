//! Dataset error types

use super::types::{Kind, Level, Sorting};
use crate::remote::FetchError;
use ndarray_npy::ReadNpzError;
use thiserror::Error;

/// Errors that can occur when loading a dataset
#[derive(Error, Debug)]
pub enum DataError {
    #[error("unknown dataset level '{0}', must be one of {allowed}", allowed = Level::allowed())]
    UnknownLevel(String),

    #[error("unknown dataset sorting '{0}', must be one of {allowed}", allowed = Sorting::allowed())]
    UnknownSorting(String),

    #[error("unknown dataset kind '{0}', must be one of {allowed}", allowed = Kind::allowed())]
    UnknownKind(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("failed to read npz archive: {0}")]
    Npz(#[from] ReadNpzError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for dataset operations
pub type DataResult<T> = Result<T, DataError>;
