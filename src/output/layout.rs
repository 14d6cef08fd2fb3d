use super::{MANIFEST_FILE, OUTPUT_DIR_SUFFIX};
use crate::splitter::SplitError;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Where a run writes its files, derived from the input path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    dir: PathBuf,
}

impl OutputLayout {
    /// Layout for an input file: `<input>_parsed/`.
    ///
    /// The suffix is appended to the whole path, so `atlas.iosTex` maps to
    /// `atlas.iosTex_parsed` rather than replacing the extension.
    pub fn for_input(input: impl AsRef<Path>) -> Self {
        let mut dir: OsString = input.as_ref().as_os_str().to_owned();
        dir.push(OUTPUT_DIR_SUFFIX);
        Self {
            dir: PathBuf::from(dir),
        }
    }

    /// Output directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the synthesized container for a chunk
    pub fn pvr_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{}.pvr", index))
    }

    /// Path the converter is asked to write for a chunk
    pub fn jpg_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{}.jpg", index))
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.dir.join(MANIFEST_FILE)
    }

    /// Create the output directory next to the input.
    ///
    /// An existing directory is not an error; any other failure is,
    /// including a non-directory at that path or a missing parent.
    pub fn ensure_dir(&self) -> Result<(), SplitError> {
        match fs::create_dir(&self.dir) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::AlreadyExists && self.dir.is_dir() => Ok(()),
            Err(source) => Err(SplitError::CreateOutputDir {
                path: self.dir.clone(),
                source,
            }),
        }
    }
}
