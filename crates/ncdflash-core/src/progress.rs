//! Progress reporting
//!
//! A supervising process parses stdout for `[PROGRESS] <stage>` lines and a
//! final `Status: Success` / `Status: Failure`. That text is a contract, so
//! it is produced in exactly one place: [`StdoutProgress`].

use std::io::{self, Write};

use crate::catalog::AssetKind;

/// Prefix of every stage line
pub const PROGRESS_PREFIX: &str = "[PROGRESS]";

/// Final status line for a run
pub fn status_line(success: bool) -> &'static str {
    if success {
        "Status: Success"
    } else {
        "Status: Failure"
    }
}

/// Receiver for run progress.
///
/// `stage` is mandatory; the byte-level download callbacks default to
/// no-ops for sinks that only care about stage boundaries.
pub trait Progress {
    /// A coarse stage boundary was reached
    fn stage(&mut self, stage: &str);

    /// A download started; `total` is the content length when known
    fn download_started(&mut self, _kind: AssetKind, _total: Option<u64>) {}

    /// `bytes` have been received so far
    fn download_progress(&mut self, _bytes: u64) {}

    /// The current download finished
    fn download_finished(&mut self) {}
}

/// Writes stage lines to stdout and flushes after each one
#[derive(Debug, Default)]
pub struct StdoutProgress;

impl Progress for StdoutProgress {
    fn stage(&mut self, stage: &str) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        // A closed stdout must not abort a flash in progress
        let _ = writeln!(out, "{} {}", PROGRESS_PREFIX, stage);
        let _ = out.flush();
    }
}

/// Capitalize the first letter of an asset label ("firmware" -> "Firmware")
pub(crate) fn capitalized(kind: AssetKind) -> String {
    let label = kind.label();
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
