//! Error types for ncdflash-core
//!
//! Every failure in a run is terminal: nothing is retried, and the
//! orchestrator reduces each variant to exit code 1 with its display text.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::acquire::FetchError;
use crate::catalog::{AssetKind, Channel};

/// A file the bundled asset directory was expected to contain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingAsset {
    /// Which asset the file provides
    pub kind: AssetKind,
    /// Where it was looked for
    pub path: PathBuf,
}

impl fmt::Display for MissingAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind.file_name(), self.path.display())
    }
}

/// Core error type
#[derive(Debug, Error)]
pub enum Error {
    /// Unknown variant id for the selected channel
    #[error("Invalid firmware ID \"{id}\" on the {channel} channel")]
    NotFound {
        /// The id that was looked up
        id: String,
        /// The channel it was looked up in
        channel: Channel,
    },

    /// Fetching a remote asset failed
    #[error("Failed to download {kind} from {url}: {source}")]
    Download {
        /// The asset being fetched
        kind: AssetKind,
        /// Its remote location
        url: String,
        /// Transport or HTTP failure
        #[source]
        source: FetchError,
    },

    /// One or more bundled files are absent
    #[error("Missing local files: {}", join_missing(.missing))]
    MissingLocalAsset {
        /// Every missing file, not just the first
        missing: Vec<MissingAsset>,
    },

    /// The filesystem-image build tool failed, timed out or is not installed
    #[error("SPIFFS build failed: {reason}{}", format_output(.output))]
    BuildFailed {
        /// Short description of what went wrong
        reason: String,
        /// Captured diagnostic output of the build tool
        output: String,
    },

    /// The build succeeded but no image could be found in its output tree
    #[error("No spiffs.bin found under {} after buildfs", .search_root.display())]
    ImageNotFound {
        /// Directory that was searched
        search_root: PathBuf,
    },

    /// The external flashing tool reported an error
    #[error("Flashing failed (invocation {invocation} of {total}): {message}")]
    FlashFailed {
        /// 1-based index of the failing invocation
        invocation: usize,
        /// Number of invocations in the plan
        total: usize,
        /// Tool message, verbatim
        message: String,
    },

    /// Writing into the working directory failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// The tool configuration could not be loaded
    #[error("Invalid configuration: {0}")]
    Config(String),
}

fn join_missing(missing: &[MissingAsset]) -> String {
    missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_output(output: &str) -> String {
    let output = output.trim();
    if output.is_empty() {
        String::new()
    } else {
        format!("\n{}", output)
    }
}

impl Error {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias using the core Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_local_asset_lists_every_file() {
        let err = Error::MissingLocalAsset {
            missing: vec![
                MissingAsset {
                    kind: AssetKind::Spiffs,
                    path: PathBuf::from("AWS/spiffs.bin"),
                },
                MissingAsset {
                    kind: AssetKind::BootApp0,
                    path: PathBuf::from("AWS/boot_app0.bin"),
                },
            ],
        };
        let msg = err.to_string();
        assert!(msg.contains("spiffs.bin (AWS/spiffs.bin)"));
        assert!(msg.contains("boot_app0.bin (AWS/boot_app0.bin)"));
    }

    #[test]
    fn build_failed_appends_output_only_when_present() {
        let bare = Error::BuildFailed {
            reason: "pio not found".into(),
            output: "  ".into(),
        };
        assert_eq!(bare.to_string(), "SPIFFS build failed: pio not found");

        let with_output = Error::BuildFailed {
            reason: "exit status 1".into(),
            output: "Error: no data dir\n".into(),
        };
        assert_eq!(
            with_output.to_string(),
            "SPIFFS build failed: exit status 1\nError: no data dir"
        );
    }
}
