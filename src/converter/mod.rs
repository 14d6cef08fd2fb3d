mod disabled;
mod external;
mod outcome;

#[cfg(test)]
mod tests;

pub use disabled::DisabledConverter;
pub use external::ExternalConverter;
pub use outcome::{ConversionOutcome, FailurePolicy};

use std::path::Path;

/// Converter expected next to the working directory when none is configured
pub const DEFAULT_CONVERTER: &str = "./PVRtoJPG";

/// Core trait for turning a synthesized container into a viewable image
pub trait Converter {
    /// Convert one container, blocking until the conversion is finished
    ///
    /// # Arguments
    /// * `pvr` - Container file that was just written
    /// * `jpg` - Image path the converter should produce
    ///
    /// # Returns
    /// What happened; never an error, failures are reported as outcomes
    /// so the caller's [`FailurePolicy`] decides what they mean.
    fn convert(&self, pvr: &Path, jpg: &Path) -> ConversionOutcome;
}
