use crate::converter::ConversionOutcome;
use std::path::PathBuf;

/// What one run produced
#[derive(Debug, Clone)]
pub struct SplitReport {
    /// Input file as given
    pub input: PathBuf,
    /// `<input>_parsed` directory
    pub output_dir: PathBuf,
    /// Total bytes read from the input
    pub input_len: u64,
    /// Hex SHA-256 of the whole input
    pub input_sha256: String,
    /// Chunk size the run used
    pub chunk_size: usize,
    /// One record per written container, in index order
    pub chunks: Vec<ChunkRecord>,
}

/// One written container and its conversion
#[derive(Debug, Clone)]
pub struct ChunkRecord {
    pub index: usize,
    /// Offset of the payload in the input
    pub offset: u64,
    /// Payload length, header excluded
    pub len: usize,
    pub pvr_path: PathBuf,
    pub jpg_path: PathBuf,
    /// Hex SHA-256 of the payload
    pub sha256: String,
    pub conversion: ConversionOutcome,
}

impl SplitReport {
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Chunks whose conversion failed or could not start
    pub fn conversion_failures(&self) -> impl Iterator<Item = &ChunkRecord> {
        self.chunks.iter().filter(|c| c.conversion.is_failure())
    }

    /// Chunks that have a converted image
    pub fn converted_count(&self) -> usize {
        self.chunks
            .iter()
            .filter(|c| c.conversion == ConversionOutcome::Converted)
            .count()
    }
}
