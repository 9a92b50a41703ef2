use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DnagenError>;

#[derive(Debug, Error)]
pub enum DnagenError {
    #[error("invalid length {input:?}: expected a non-negative integer")]
    InvalidLength { input: String },

    #[error("sequence contains no recognized nucleotides; composition is undefined")]
    EmptyComposition,

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
