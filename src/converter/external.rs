use super::{ConversionOutcome, Converter, DEFAULT_CONVERTER};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// Runs an external executable as `<program> <pvr> <jpg>`
#[derive(Debug, Clone)]
pub struct ExternalConverter {
    program: PathBuf,
}

impl ExternalConverter {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for ExternalConverter {
    fn default() -> Self {
        Self::new(DEFAULT_CONVERTER)
    }
}

impl Converter for ExternalConverter {
    fn convert(&self, pvr: &Path, jpg: &Path) -> ConversionOutcome {
        debug!(
            "Running {} {} {}",
            self.program.display(),
            pvr.display(),
            jpg.display()
        );

        // Arguments are passed directly, no shell, so paths need no quoting
        let status = Command::new(&self.program)
            .arg(pvr)
            .arg(jpg)
            .stdin(Stdio::null())
            .status();

        match status {
            Ok(status) if status.success() => ConversionOutcome::Converted,
            Ok(status) => ConversionOutcome::Failed {
                code: status.code(),
            },
            Err(e) => ConversionOutcome::Unavailable {
                reason: format!("{}: {}", self.program.display(), e),
            },
        }
    }
}
