mod error;
mod reader;
mod report;


pub use error::SplitError;
pub use reader::{Chunk, ChunkReader};
pub use report::{ChunkRecord, SplitReport};

use crate::container::{self, CHUNK_SIZE};
use crate::converter::{Converter, ExternalConverter, FailurePolicy};
use crate::manifest;
use crate::output::OutputLayout;
use crate::verify;
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

/// Splits one input file into synthesized containers
pub struct Splitter {
    chunk_size: usize,
    converter: Box<dyn Converter>,
    failure_policy: FailurePolicy,
    write_manifest: bool,
    verify: bool,
}

/// Builder for a [`Splitter`]
pub struct SplitterBuilder {
    chunk_size: usize,
    converter: Box<dyn Converter>,
    failure_policy: FailurePolicy,
    write_manifest: bool,
    verify: bool,
}

impl SplitterBuilder {
    /// Create a new builder with the stock settings: 327680-byte chunks,
    /// `./PVRtoJPG` as converter, converter failures ignored
    pub fn new() -> Self {
        Self {
            chunk_size: CHUNK_SIZE,
            converter: Box::new(ExternalConverter::default()),
            failure_policy: FailurePolicy::default(),
            write_manifest: false,
            verify: false,
        }
    }

    /// Set the payload size of each container
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    /// Set the converter invoked after each container is written
    pub fn converter(mut self, converter: impl Converter + 'static) -> Self {
        self.converter = Box::new(converter);
        self
    }

    /// Set how converter failures are handled
    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Write `manifest.json` into the output directory after the run
    pub fn write_manifest(mut self, enabled: bool) -> Self {
        self.write_manifest = enabled;
        self
    }

    /// Reassemble the written containers after the run and compare them
    /// against the input
    pub fn verify(mut self, enabled: bool) -> Self {
        self.verify = enabled;
        self
    }

    pub fn build(self) -> Splitter {
        Splitter {
            chunk_size: self.chunk_size,
            converter: self.converter,
            failure_policy: self.failure_policy,
            write_manifest: self.write_manifest,
            verify: self.verify,
        }
    }
}

impl Default for SplitterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Splitter {
    pub fn builder() -> SplitterBuilder {
        SplitterBuilder::new()
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }

    /// Split `input` into `<input>_parsed/<index>.pvr` files, converting each
    /// one as soon as it is written.
    ///
    /// The input is opened and checked to be a regular file before anything
    /// is created, so a missing or unreadable input leaves the file system
    /// untouched. A failed write aborts the run and leaves the files written
    /// so far in place.
    pub fn split(&self, input: impl AsRef<Path>) -> Result<SplitReport, SplitError> {
        let input = input.as_ref();
        if self.chunk_size == 0 {
            return Err(SplitError::InvalidChunkSize);
        }

        info!("Opening: {}", input.display());
        let file = File::open(input).map_err(|source| SplitError::OpenInput {
            path: input.to_path_buf(),
            source,
        })?;
        ensure_regular_file(input, &file)?;

        let layout = OutputLayout::for_input(input);
        layout.ensure_dir()?;

        let mut input_hasher = Sha256::new();
        let mut chunks = Vec::new();

        let mut reader = ChunkReader::new(file, self.chunk_size);
        for chunk in reader.by_ref() {
            let chunk = chunk.map_err(|source| SplitError::ReadInput {
                path: input.to_path_buf(),
                source,
            })?;

            input_hasher.update(&chunk.data);
            chunks.push(self.emit_chunk(&layout, chunk)?);
        }

        let report = SplitReport {
            input: input.to_path_buf(),
            output_dir: layout.dir().to_path_buf(),
            input_len: reader.bytes_read(),
            input_sha256: hex::encode(input_hasher.finalize()),
            chunk_size: self.chunk_size,
            chunks,
        };

        info!(
            "Wrote {} chunks ({} bytes) to {}",
            report.chunk_count(),
            report.input_len,
            report.output_dir.display()
        );

        if self.write_manifest {
            manifest::write(&layout, &report)?;
        }

        if self.verify {
            verify::verify(&report)?;
        }

        Ok(report)
    }

    /// Write one container, then hand it to the converter
    fn emit_chunk(&self, layout: &OutputLayout, chunk: Chunk) -> Result<ChunkRecord, SplitError> {
        let pvr_path = layout.pvr_path(chunk.index);
        let jpg_path = layout.jpg_path(chunk.index);

        info!("Writing {} ({} bytes)", chunk.index, chunk.data.len());
        fs::write(&pvr_path, container::synthesize(&chunk.data)).map_err(|source| {
            SplitError::WriteChunk {
                path: pvr_path.clone(),
                source,
            }
        })?;

        let conversion = self.converter.convert(&pvr_path, &jpg_path);
        if conversion.is_failure() {
            match self.failure_policy {
                FailurePolicy::Ignore => debug!("Chunk {}: {}", chunk.index, conversion),
                FailurePolicy::Warn => warn!("Chunk {}: {}", chunk.index, conversion),
                FailurePolicy::Fail => {
                    return Err(SplitError::ConversionFailed {
                        index: chunk.index,
                        outcome: conversion,
                    });
                }
            }
        }

        Ok(ChunkRecord {
            index: chunk.index,
            offset: chunk.offset,
            len: chunk.data.len(),
            pvr_path,
            jpg_path,
            sha256: hex::encode(Sha256::digest(&chunk.data)),
            conversion,
        })
    }
}

/// Opening a directory succeeds on some platforms; reject it as an open failure
fn ensure_regular_file(path: &Path, file: &File) -> Result<(), SplitError> {
    let open_error = |source| SplitError::OpenInput {
        path: path.to_path_buf(),
        source,
    };

    let metadata = file.metadata().map_err(open_error)?;
    if metadata.is_dir() {
        return Err(open_error(io::Error::new(
            io::ErrorKind::IsADirectory,
            "input is a directory",
        )));
    }
    Ok(())
}
