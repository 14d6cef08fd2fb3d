use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Result of one converter invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConversionOutcome {
    /// Converter exited successfully
    Converted,
    /// Converter ran and exited unsuccessfully (`None` when killed by a signal)
    Failed { code: Option<i32> },
    /// Converter could not be started at all
    Unavailable { reason: String },
    /// Conversion is turned off
    Skipped,
}

impl ConversionOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. } | Self::Unavailable { .. })
    }
}

impl fmt::Display for ConversionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Converted => write!(f, "converted"),
            Self::Failed { code: Some(code) } => write!(f, "converter exited with code {}", code),
            Self::Failed { code: None } => write!(f, "converter terminated by signal"),
            Self::Unavailable { reason } => write!(f, "converter unavailable: {}", reason),
            Self::Skipped => write!(f, "skipped"),
        }
    }
}

/// What a run does when a conversion fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Continue silently; missing images are only visible on disk
    #[default]
    Ignore,
    /// Continue, logging a warning per failed chunk; the run's records are
    /// the same as under `Ignore`
    Warn,
    /// Abort the run on the first failure
    Fail,
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "warn" => Ok(Self::Warn),
            "fail" => Ok(Self::Fail),
            other => Err(format!(
                "unknown failure policy '{}' (expected ignore, warn or fail)",
                other
            )),
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ignore => "ignore",
            Self::Warn => "warn",
            Self::Fail => "fail",
        };
        f.write_str(name)
    }
}
