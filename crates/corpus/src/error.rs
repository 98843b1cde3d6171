//! Error types for corpus generation.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Result type for corpus operations.
pub type CorpusResult<T> = Result<T, CorpusError>;

/// Corpus error types.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// Two seeds were generated under the same name.
    #[error("duplicate seed name: {0}")]
    DuplicateSeed(String),

    /// The catalog is too small to bootstrap the fuzzer.
    #[error("only {count} seeds generated, need at least {min}")]
    InsufficientSeeds { count: usize, min: usize },

    /// A payload length is not a whole number of `f32` elements.
    #[error("payload of {len} bytes is not a multiple of 4")]
    MisalignedPayload { len: usize },

    /// Normal distribution parameters were rejected.
    #[error("invalid normal distribution: {0}")]
    InvalidDistribution(#[from] rand_distr::NormalError),

    /// Filesystem failure while reading or writing the corpus.
    #[error("io error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CorpusError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Check if this error reports an undersized corpus.
    pub fn is_insufficient(&self) -> bool {
        matches!(self, Self::InsufficientSeeds { .. })
    }
}
