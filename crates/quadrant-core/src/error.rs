// File: crates/quadrant-core/src/error.rs
// Summary: Typed loader errors; rendering uses anyhow.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}:{line}: invalid {column} value {value:?}", path.display())]
    InvalidNumber {
        path: PathBuf,
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("no valid rows in {}", path.display())]
    Empty { path: PathBuf },
}

pub type LoadResult<T> = std::result::Result<T, LoadError>;
