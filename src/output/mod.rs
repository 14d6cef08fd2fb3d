mod layout;


pub use layout::OutputLayout;

/// Suffix appended to the input path to name the output directory
pub const OUTPUT_DIR_SUFFIX: &str = "_parsed";

/// File name of the optional run manifest
pub const MANIFEST_FILE: &str = "manifest.json";
