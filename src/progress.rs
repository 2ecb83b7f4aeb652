//! Terminal progress output
//!
//! Stage lines go to stdout through [`StdoutProgress`]; download byte
//! counts are drawn as an indicatif bar on stderr, which indicatif hides
//! when stderr is not a terminal.

use indicatif::{ProgressBar, ProgressStyle};
use ncdflash_core::{AssetKind, Progress, StdoutProgress};

const BAR_TEMPLATE: &str =
    "{msg:>14} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})";

#[derive(Default)]
pub struct CliProgress {
    stages: StdoutProgress,
    bar: Option<ProgressBar>,
}

impl Progress for CliProgress {
    fn stage(&mut self, stage: &str) {
        self.stages.stage(stage);
    }

    fn download_started(&mut self, kind: AssetKind, total: Option<u64>) {
        let pb = match total {
            Some(len) => {
                let pb = ProgressBar::new(len);
                if let Ok(style) = ProgressStyle::default_bar().template(BAR_TEMPLATE) {
                    pb.set_style(style.progress_chars("#>-"));
                }
                pb
            }
            None => ProgressBar::new_spinner(),
        };
        pb.set_message(kind.file_name());
        self.bar = Some(pb);
    }

    fn download_progress(&mut self, bytes: u64) {
        if let Some(pb) = &self.bar {
            pb.set_position(bytes);
        }
    }

    fn download_finished(&mut self) {
        if let Some(pb) = self.bar.take() {
            pb.finish_and_clear();
        }
    }
}
