use crate::converter::ConversionOutcome;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Chunk size must be greater than zero")]
    InvalidChunkSize,

    #[error("Failed to open input {path}: {source}")]
    OpenInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create output directory {path}: {source}")]
    CreateOutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read input {path}: {source}")]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write chunk file {path}: {source}")]
    WriteChunk {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Conversion of chunk {index} failed: {outcome}")]
    ConversionFailed {
        index: usize,
        outcome: ConversionOutcome,
    },

    #[error("Failed to write manifest {path}: {reason}")]
    Manifest { path: PathBuf, reason: String },

    #[error("Failed to reassemble {path}: {reason}")]
    Verify { path: PathBuf, reason: String },

    #[error("Reassembled output does not match input: expected sha256 {expected}, got {actual}")]
    DigestMismatch { expected: String, actual: String },
}
