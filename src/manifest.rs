use crate::container::HEADER_LEN;
use crate::converter::ConversionOutcome;
use crate::output::OutputLayout;
use crate::splitter::{ChunkRecord, SplitError, SplitReport};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub generator: String,
    pub created_at: String,
    pub input: InputInfo,
    pub chunk_size: usize,
    pub header_len: usize,
    pub chunks: Vec<ChunkEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InputInfo {
    pub path: String,
    pub size_bytes: u64,
    pub sha256: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChunkEntry {
    pub index: usize,
    pub offset: u64,
    pub size_bytes: usize,
    pub pvr: String,
    pub jpg: String,
    pub sha256: String,
    pub conversion: ConversionOutcome,
}

impl Manifest {
    /// Build a manifest describing a finished run
    pub fn from_report(report: &SplitReport) -> Self {
        Self {
            generator: format!("texsplit v{}", env!("CARGO_PKG_VERSION")),
            created_at: Utc::now().to_rfc3339(),
            input: InputInfo {
                path: report.input.display().to_string(),
                size_bytes: report.input_len,
                sha256: report.input_sha256.clone(),
            },
            chunk_size: report.chunk_size,
            header_len: HEADER_LEN,
            chunks: report.chunks.iter().map(ChunkEntry::from_record).collect(),
        }
    }
}

impl ChunkEntry {
    fn from_record(record: &ChunkRecord) -> Self {
        Self {
            index: record.index,
            offset: record.offset,
            size_bytes: record.len,
            pvr: file_name(&record.pvr_path),
            jpg: file_name(&record.jpg_path),
            sha256: record.sha256.clone(),
            conversion: record.conversion.clone(),
        }
    }
}

/// Names are stored relative to the output directory
fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Write `manifest.json` for a finished run
pub fn write(layout: &OutputLayout, report: &SplitReport) -> Result<(), SplitError> {
    let path = layout.manifest_path();
    let manifest = Manifest::from_report(report);

    let json = serde_json::to_string_pretty(&manifest).map_err(|e| SplitError::Manifest {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    fs::write(&path, json).map_err(|e| SplitError::Manifest {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    info!("Manifest written to {}", path.display());
    Ok(())
}

/// Read a manifest back from an output directory
pub fn read(layout: &OutputLayout) -> Result<Manifest, SplitError> {
    let path = layout.manifest_path();
    let contents = fs::read_to_string(&path).map_err(|e| SplitError::Manifest {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&contents).map_err(|e| SplitError::Manifest {
        path,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_report(dir: &Path) -> SplitReport {
        let layout = OutputLayout::for_input(dir.join("atlas.iosTex"));
        SplitReport {
            input: dir.join("atlas.iosTex"),
            output_dir: layout.dir().to_path_buf(),
            input_len: 6,
            input_sha256: "ab".repeat(32),
            chunk_size: 4,
            chunks: vec![
                ChunkRecord {
                    index: 0,
                    offset: 0,
                    len: 4,
                    pvr_path: layout.pvr_path(0),
                    jpg_path: layout.jpg_path(0),
                    sha256: "00".repeat(32),
                    conversion: ConversionOutcome::Converted,
                },
                ChunkRecord {
                    index: 1,
                    offset: 4,
                    len: 2,
                    pvr_path: layout.pvr_path(1),
                    jpg_path: layout.jpg_path(1),
                    sha256: "11".repeat(32),
                    conversion: ConversionOutcome::Failed { code: Some(2) },
                },
            ],
        }
    }

    #[test]
    fn test_manifest_from_report() {
        let report = sample_report(&PathBuf::from("work"));
        let manifest = Manifest::from_report(&report);

        assert!(manifest.generator.starts_with("texsplit v"));
        assert_eq!(manifest.input.size_bytes, 6);
        assert_eq!(manifest.header_len, HEADER_LEN);
        assert_eq!(manifest.chunk_size, 4);
        assert_eq!(manifest.chunks.len(), 2);
        assert_eq!(manifest.chunks[1].pvr, "1.pvr");
        assert_eq!(manifest.chunks[1].jpg, "1.jpg");
        assert_eq!(manifest.chunks[1].offset, 4);
    }

    #[test]
    fn test_manifest_written_and_read_back() {
        let tmp = tempfile::tempdir().unwrap();
        let report = sample_report(tmp.path());
        let layout = OutputLayout::for_input(&report.input);
        layout.ensure_dir().unwrap();

        write(&layout, &report).unwrap();
        let manifest = read(&layout).unwrap();

        assert_eq!(manifest.input.sha256, report.input_sha256);
        assert_eq!(
            manifest.chunks[1].conversion,
            ConversionOutcome::Failed { code: Some(2) }
        );
        assert!(chrono::DateTime::parse_from_rfc3339(&manifest.created_at).is_ok());
    }

    #[test]
    fn test_manifest_write_fails_without_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let report = sample_report(tmp.path());
        let layout = OutputLayout::for_input(&report.input);

        let result = write(&layout, &report);
        assert!(matches!(result, Err(SplitError::Manifest { .. })));
    }
}
