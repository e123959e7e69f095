use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading configuration and corpus data.
///
/// Classification itself never fails; everything here happens before the
/// first record is produced, or while writing records out.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0} not found")]
    NotFound(String),

    #[error("invalid path '{0}'\n  hint: expected <owner>/<name>")]
    InvalidPath(String),

    #[error("duplicate label id {0} in catalog")]
    DuplicateLabel(i64),

    #[error("duplicate milestone number {0} in catalog")]
    DuplicateMilestone(i32),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid catalog: {0}")]
    Catalog(#[from] toml::de::Error),

    #[error("invalid corpus: {0}")]
    Corpus(#[from] serde_json::Error),

    #[error("failed to write records: {0}")]
    Write(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
