//! esptool invocation
//!
//! Each [`Invocation`] of a plan becomes one `write_flash` command line.
//! Invocations run strictly in order; the first failure ends the run and
//! later invocations are skipped.

use std::collections::VecDeque;
use std::io::{BufRead, BufReader, Read};
use std::process::{Command, Stdio};
use std::thread;

use crate::acquire::ResolvedAssets;
use crate::catalog::AssetKind;
use crate::error::{Error, Result};
use crate::layout::{FlashPlan, Invocation};
use crate::progress::Progress;

/// An external flashing tool
pub trait FlashTool {
    /// Run the tool with `args`, returning its error message on failure
    fn run(&mut self, args: &[String]) -> std::result::Result<(), String>;
}

/// Lines of esptool stdout kept for the failure message
const TAIL_LINES: usize = 20;

/// esptool prefixes the line explaining an aborted run with this
const FATAL_MARKER: &str = "A fatal error occurred:";

/// Runs esptool as a child process.
///
/// esptool writes its diagnostics, including the fatal error of a failed
/// run, to stdout. Each stdout line is forwarded to the terminal as it
/// arrives and the last few are kept. On failure the message is the last
/// fatal-error line, then stderr, then the kept tail.
#[derive(Debug, Clone)]
pub struct EsptoolCommand {
    command: Vec<String>,
}

impl EsptoolCommand {
    /// `command` is the program followed by any leading arguments,
    /// e.g. `["python3", "-m", "esptool"]`
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }
}

impl FlashTool for EsptoolCommand {
    fn run(&mut self, args: &[String]) -> std::result::Result<(), String> {
        let (program, leading) = self
            .command
            .split_first()
            .ok_or_else(|| "no flashing command configured".to_string())?;

        log::debug!("Running {} {} {}", program, leading.join(" "), args.join(" "));
        let mut child = Command::new(program)
            .args(leading)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| format!("failed to start {}: {}", program, e))?;

        // stderr drains on its own thread so a full pipe cannot stall stdout
        let stderr_reader = child.stderr.take().map(|mut pipe| {
            thread::spawn(move || {
                let mut buf = String::new();
                let _ = pipe.read_to_string(&mut buf);
                buf
            })
        });

        let mut tail: VecDeque<String> = VecDeque::with_capacity(TAIL_LINES);
        let mut fatal: Option<String> = None;
        if let Some(stdout) = child.stdout.take() {
            for line in BufReader::new(stdout).lines().map_while(|l| l.ok()) {
                println!("{}", line);
                if line.contains(FATAL_MARKER) {
                    fatal = Some(line.trim().to_string());
                }
                if tail.len() == TAIL_LINES {
                    tail.pop_front();
                }
                tail.push_back(line);
            }
        }

        let status = child
            .wait()
            .map_err(|e| format!("failed to wait for {}: {}", program, e))?;
        let stderr = stderr_reader
            .and_then(|h| h.join().ok())
            .unwrap_or_default();

        if status.success() {
            return Ok(());
        }
        if let Some(line) = fatal {
            return Err(line);
        }
        if !stderr.trim().is_empty() {
            return Err(stderr.trim().to_string());
        }
        let tail = tail
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        if tail.is_empty() {
            Err(format!("{} exited with {}", program, status))
        } else {
            Err(tail)
        }
    }
}

/// Turns a plan into tool invocations
pub struct FlashInvoker<T> {
    tool: T,
    chip: String,
}

impl<T: FlashTool> FlashInvoker<T> {
    /// Create an invoker for `chip`
    pub fn new(tool: T, chip: impl Into<String>) -> Self {
        Self {
            tool,
            chip: chip.into(),
        }
    }

    /// The underlying tool, for inspection
    pub fn tool(&self) -> &T {
        &self.tool
    }

    /// Command line for one invocation.
    ///
    /// Returns the first step whose asset was not acquired as the error.
    pub fn build_args(
        &self,
        invocation: &Invocation,
        assets: &ResolvedAssets,
        port: &str,
    ) -> std::result::Result<Vec<String>, AssetKind> {
        let p = &invocation.params;
        let mut args: Vec<String> = vec![
            "--chip".into(),
            self.chip.clone(),
            "--port".into(),
            port.into(),
            "--baud".into(),
            p.baud.to_string(),
            "--before".into(),
            p.before.as_arg().into(),
            "--after".into(),
            p.after.as_arg().into(),
            "write_flash".into(),
        ];
        if p.compress {
            args.push("-z".into());
        }
        args.extend([
            "--flash_mode".into(),
            p.flash_mode.as_arg().into(),
            "--flash_freq".into(),
            p.flash_freq.as_arg().into(),
            "--flash_size".into(),
            p.flash_size.as_arg().into(),
        ]);

        for step in &invocation.steps {
            let asset = assets.get(step.asset).ok_or(step.asset)?;
            args.push(format!("0x{:x}", step.address));
            args.push(asset.path.to_string_lossy().into_owned());
        }
        Ok(args)
    }

    /// Run every invocation of `plan` in order
    pub fn invoke(
        &mut self,
        plan: &FlashPlan,
        assets: &ResolvedAssets,
        port: &str,
        progress: &mut dyn Progress,
    ) -> Result<()> {
        let total = plan.invocations.len();

        for (i, invocation) in plan.invocations.iter().enumerate() {
            let n = i + 1;
            let args = self
                .build_args(invocation, assets, port)
                .map_err(|kind| Error::FlashFailed {
                    invocation: n,
                    total,
                    message: format!("{} was not acquired", kind.file_name()),
                })?;

            if i == 0 {
                progress.stage("Starting upload to device...");
            } else if invocation.writes(AssetKind::Spiffs) {
                progress.stage("Writing SPIFFS partition...");
            } else {
                progress.stage(&format!("Continuing upload ({}/{})...", n, total));
            }

            log::info!("Flashing invocation {}/{} on {}", n, total, port);
            for step in &invocation.steps {
                log::debug!("  {}", step);
            }

            self.tool.run(&args).map_err(|message| Error::FlashFailed {
                invocation: n,
                total,
                message,
            })?;
        }

        Ok(())
    }

    /// Command line for a full chip erase
    pub fn erase_args(&self, port: &str) -> Vec<String> {
        vec![
            "--chip".into(),
            self.chip.clone(),
            "--port".into(),
            port.into(),
            "erase_flash".into(),
        ]
    }

    /// Erase the whole flash of the device on `port`
    pub fn erase(&mut self, port: &str, progress: &mut dyn Progress) -> Result<()> {
        progress.stage("Erasing flash...");
        log::info!("Erasing flash on {}", port);

        let args = self.erase_args(port);
        self.tool.run(&args).map_err(|message| Error::FlashFailed {
            invocation: 1,
            total: 1,
            message,
        })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Records argument lists, optionally failing one call
    #[derive(Debug, Default)]
    pub struct FakeTool {
        pub calls: Vec<Vec<String>>,
        pub fail_on: Option<(usize, String)>,
    }

    impl FlashTool for FakeTool {
        fn run(&mut self, args: &[String]) -> std::result::Result<(), String> {
            self.calls.push(args.to_vec());
            match &self.fail_on {
                Some((n, msg)) if *n == self.calls.len() => Err(msg.clone()),
                _ => Ok(()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeTool;
    use super::*;
    use crate::acquire::{AcquisitionOptions, ResolvedAsset};
    use crate::catalog::{self, Channel};
    use crate::layout;
    use crate::progress::testing::RecordingProgress;
    use std::path::PathBuf;

    fn assets_for(plan: &FlashPlan) -> ResolvedAssets {
        let mut assets = ResolvedAssets::new();
        for kind in plan.required_assets() {
            assets.insert(ResolvedAsset {
                kind,
                path: PathBuf::from(kind.file_name()),
                size: 0,
                sha256: String::new(),
            });
        }
        assets
    }

    fn plan_for(id: &str, want_spiffs: bool) -> FlashPlan {
        let profile = catalog::resolve(id, Channel::Stable).unwrap();
        let opts = AcquisitionOptions {
            want_spiffs,
            ..Default::default()
        };
        layout::plan(&profile, &opts)
    }

    #[test]
    fn test_detect_size_command_line() {
        let plan = plan_for("3", false);
        let invoker = FlashInvoker::new(FakeTool::default(), "esp32");
        let args = invoker
            .build_args(&plan.invocations[0], &assets_for(&plan), "/dev/ttyUSB0")
            .unwrap();
        assert_eq!(
            args.join(" "),
            "--chip esp32 --port /dev/ttyUSB0 --baud 921600 --before default_reset \
             --after hard_reset write_flash -z --flash_mode dio --flash_freq 40m \
             --flash_size detect 0x1000 bootloader.bin 0x8000 partitions.bin \
             0x10000 firmware.bin"
        );
    }

    #[test]
    fn test_fixed_4mb_command_line() {
        let plan = plan_for("3", true);
        let invoker = FlashInvoker::new(FakeTool::default(), "esp32");
        let args = invoker
            .build_args(&plan.invocations[0], &assets_for(&plan), "COM3")
            .unwrap();
        assert_eq!(
            args.join(" "),
            "--chip esp32 --port COM3 --baud 460800 --before default_reset \
             --after hard_reset write_flash -z --flash_mode dio --flash_freq 80m \
             --flash_size 4MB 0x1000 bootloader.bin 0x8000 partitions.bin \
             0xe000 boot_app0.bin 0x10000 firmware.bin 0x290000 spiffs.bin"
        );
    }

    #[test]
    fn test_missing_asset_is_reported() {
        let plan = plan_for("3", true);
        let mut assets = ResolvedAssets::new();
        for a in assets_for(&plan).iter().filter(|a| a.kind != AssetKind::Spiffs) {
            assets.insert(a.clone());
        }

        let mut invoker = FlashInvoker::new(FakeTool::default(), "esp32");
        let err = invoker
            .invoke(&plan, &assets, "p", &mut RecordingProgress::default())
            .unwrap_err();
        assert!(matches!(err, Error::FlashFailed { invocation: 1, total: 1, .. }));
        assert!(invoker.tool().calls.is_empty());
    }

    #[test]
    fn test_split_plan_runs_two_invocations() {
        let plan = plan_for("1", true);
        let mut invoker = FlashInvoker::new(FakeTool::default(), "esp32");
        let mut progress = RecordingProgress::default();
        invoker
            .invoke(&plan, &assets_for(&plan), "/dev/ttyUSB0", &mut progress)
            .unwrap();

        let calls = &invoker.tool().calls;
        assert_eq!(calls.len(), 2);
        assert!(calls[0].join(" ").ends_with("0xe000 boot_app0.bin 0x10000 firmware.bin"));
        assert!(calls[1].join(" ").ends_with("0x290000 spiffs.bin"));
        assert_eq!(
            progress.stages,
            ["Starting upload to device...", "Writing SPIFFS partition..."]
        );
    }

    #[test]
    fn test_failure_skips_remaining_invocations() {
        let plan = plan_for("1", true);
        let tool = FakeTool {
            fail_on: Some((1, "A fatal error occurred: Failed to connect".into())),
            ..Default::default()
        };
        let mut invoker = FlashInvoker::new(tool, "esp32");
        let err = invoker
            .invoke(&plan, &assets_for(&plan), "p", &mut RecordingProgress::default())
            .unwrap_err();

        match err {
            Error::FlashFailed {
                invocation,
                total,
                message,
            } => {
                assert_eq!((invocation, total), (1, 2));
                assert_eq!(message, "A fatal error occurred: Failed to connect");
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(invoker.tool().calls.len(), 1);
    }

    #[test]
    fn test_missing_program_reports_start_failure() {
        let mut tool = EsptoolCommand::new(vec!["ncdflash-test-no-such-esptool".into()]);
        let msg = tool.run(&["version".into()]).unwrap_err();
        assert!(msg.starts_with("failed to start ncdflash-test-no-such-esptool"));

        assert!(EsptoolCommand::new(Vec::new()).run(&[]).is_err());
    }

    #[cfg(unix)]
    fn shell(script: &str) -> EsptoolCommand {
        EsptoolCommand::new(vec!["sh".into(), "-c".into(), script.into()])
    }

    #[test]
    #[cfg(unix)]
    fn test_fatal_error_line_from_stdout() {
        let mut tool = shell(
            "echo 'Connecting......'; \
             echo 'A fatal error occurred: Failed to connect to ESP32: No serial data received.'; \
             exit 2",
        );
        let msg = tool.run(&[]).unwrap_err();
        assert_eq!(
            msg,
            "A fatal error occurred: Failed to connect to ESP32: No serial data received."
        );
    }

    #[test]
    #[cfg(unix)]
    fn test_stdout_tail_when_no_fatal_line() {
        let mut tool = shell("echo 'Serial port /dev/ttyUSB9'; echo 'could not open port'; exit 1");
        let msg = tool.run(&[]).unwrap_err();
        assert_eq!(msg, "Serial port /dev/ttyUSB9\ncould not open port");

        let mut tool = shell("echo 'Traceback' >&2; exit 1");
        assert_eq!(tool.run(&[]).unwrap_err(), "Traceback");

        let mut tool = shell("exit 3");
        assert!(tool.run(&[]).unwrap_err().starts_with("sh exited with"));

        assert!(shell("echo 'Hash of data verified.'").run(&[]).is_ok());
    }

    #[test]
    fn test_erase_command_line() {
        let mut invoker = FlashInvoker::new(FakeTool::default(), "esp32");
        let mut progress = RecordingProgress::default();
        invoker.erase("/dev/ttyUSB0", &mut progress).unwrap();

        assert_eq!(
            invoker.tool().calls,
            [vec!["--chip", "esp32", "--port", "/dev/ttyUSB0", "erase_flash"]]
        );
        assert_eq!(progress.stages, ["Erasing flash..."]);
    }

    #[test]
    fn test_erase_failure() {
        let tool = FakeTool {
            fail_on: Some((1, "A fatal error occurred: Failed to connect".into())),
            ..Default::default()
        };
        let mut invoker = FlashInvoker::new(tool, "esp32");
        let err = invoker
            .erase("COM4", &mut RecordingProgress::default())
            .unwrap_err();
        assert!(matches!(err, Error::FlashFailed { invocation: 1, total: 1, .. }));
    }
}
