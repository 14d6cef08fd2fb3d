use crate::container;
use crate::output::OutputLayout;
use crate::splitter::{SplitError, SplitReport};
use sha2::{Digest, Sha256};
use std::fs;
use tracing::info;

/// Concatenate the payloads of `0.pvr` through `(count - 1).pvr`.
///
/// Every file must start with the container header.
pub fn reassemble(layout: &OutputLayout, count: usize) -> Result<Vec<u8>, SplitError> {
    let mut joined = Vec::new();

    for index in 0..count {
        let path = layout.pvr_path(index);
        let bytes = fs::read(&path).map_err(|e| SplitError::Verify {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        let payload = container::payload(&bytes).ok_or_else(|| SplitError::Verify {
            path: path.clone(),
            reason: "missing container header".to_string(),
        })?;
        joined.extend_from_slice(payload);
    }

    Ok(joined)
}

/// Check that the containers of a run reassemble into the original input.
///
/// Returns the hex SHA-256 of the reassembled bytes.
pub fn verify(report: &SplitReport) -> Result<String, SplitError> {
    let layout = OutputLayout::for_input(&report.input);
    let joined = reassemble(&layout, report.chunk_count())?;
    let actual = hex::encode(Sha256::digest(&joined));

    if actual != report.input_sha256 {
        return Err(SplitError::DigestMismatch {
            expected: report.input_sha256.clone(),
            actual,
        });
    }

    info!("Verified {} chunks: sha256 {}", report.chunk_count(), actual);
    Ok(actual)
}
