use super::{ConversionOutcome, Converter};
use std::path::Path;

/// Converter used when conversion is turned off; writes nothing
pub struct DisabledConverter;

impl Converter for DisabledConverter {
    fn convert(&self, _pvr: &Path, _jpg: &Path) -> ConversionOutcome {
        ConversionOutcome::Skipped
    }
}
