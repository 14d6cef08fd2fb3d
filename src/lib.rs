// Public API exports
pub mod container;
pub mod converter;
pub mod manifest;
pub mod output;
pub mod splitter;
pub mod verify;

// Re-export main types for convenience
pub use container::{CHUNK_SIZE, HEADER_LEN, PVR_HEADER};

pub use converter::{
    ConversionOutcome, Converter, DEFAULT_CONVERTER, DisabledConverter, ExternalConverter,
    FailurePolicy,
};

pub use output::OutputLayout;

pub use splitter::{
    Chunk, ChunkReader, ChunkRecord, SplitError, SplitReport, Splitter, SplitterBuilder,
};

pub use manifest::Manifest;
