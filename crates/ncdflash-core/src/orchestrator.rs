//! Run orchestration
//!
//! Resolve, plan, acquire, flash. Every error ends the run and is reduced
//! to a [`RunOutcome`] with exit code 1.

use std::path::Path;

use crate::acquire::{
    AcquisitionOptions, AssetAcquirer, Fetch, HttpFetcher, ImageBuilder, PioBuilder,
};
use crate::catalog::{self, AssetKind, Channel, FirmwareProfile};
use crate::config::ToolConfig;
use crate::error::{Error, Result};
use crate::invoke::{EsptoolCommand, FlashInvoker, FlashTool};
use crate::layout::{self, FlashPlan};
use crate::progress::Progress;

/// Message reported on success
pub const SUCCESS_MESSAGE: &str = "Firmware flashed successfully";

/// Message reported after a successful erase
pub const ERASE_MESSAGE: &str = "Flash erased successfully";

/// What to flash
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A catalog variant
    Catalog {
        /// Variant id
        id: String,
        /// Release channel
        channel: Channel,
    },
    /// The fixed SOTA Relay build, bypassing the catalog
    SotaOverride,
}

/// Everything a run needs, resolved before it starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// What to flash
    pub target: Target,
    /// Planning and acquisition options
    pub options: AcquisitionOptions,
    /// Serial port of the device
    pub port: String,
}

impl RunConfig {
    /// Create a run config.
    ///
    /// `options.sota_override` takes precedence over `target`.
    pub fn new(target: Target, options: AcquisitionOptions, port: impl Into<String>) -> Self {
        let target = if options.sota_override {
            Target::SotaOverride
        } else {
            target
        };
        Self {
            target,
            options,
            port: port.into(),
        }
    }
}

/// Result of a run as seen by the process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Process exit code, 0 or 1
    pub exit_code: i32,
    /// Human-readable summary or error message
    pub message: String,
}

impl RunOutcome {
    /// Whether the run succeeded
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    fn from_result(result: Result<()>, success: &str) -> Self {
        match result {
            Ok(()) => Self {
                exit_code: 0,
                message: success.to_string(),
            },
            Err(e) => {
                log::error!("{}", e);
                Self {
                    exit_code: 1,
                    message: e.to_string(),
                }
            }
        }
    }
}

/// Resolve the profile a target refers to
pub fn resolve_profile(target: &Target) -> Result<FirmwareProfile> {
    match target {
        Target::Catalog { id, channel } => catalog::resolve(id, *channel),
        Target::SotaOverride => Ok(catalog::sota_override()),
    }
}

/// Resolve and plan without touching the network, filesystem or device
pub fn resolve_plan(
    target: &Target,
    options: &AcquisitionOptions,
) -> Result<(FirmwareProfile, FlashPlan)> {
    let profile = resolve_profile(target)?;
    let plan = layout::plan(&profile, options);
    Ok((profile, plan))
}

/// Drives one complete flash run
pub struct Orchestrator<F, B, T> {
    acquirer: AssetAcquirer<F, B>,
    invoker: FlashInvoker<T>,
}

impl Orchestrator<HttpFetcher, PioBuilder, EsptoolCommand> {
    /// Wire up the real HTTP client, PlatformIO and esptool
    pub fn with_defaults(config: &ToolConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(config.connect_timeout())
            .map_err(|e| Error::Config(format!("cannot create HTTP client: {}", e)))?;
        let builder = PioBuilder::new(config.pio.clone(), config.build_timeout());
        let tool = EsptoolCommand::new(config.esptool.clone());

        Ok(Self::new(
            AssetAcquirer::new(fetcher, builder, &config.work_dir, config.bundled_path()),
            FlashInvoker::new(tool, config.chip.clone()),
        ))
    }
}

impl<F: Fetch, B: ImageBuilder, T: FlashTool> Orchestrator<F, B, T> {
    /// Assemble an orchestrator from its stages
    pub fn new(acquirer: AssetAcquirer<F, B>, invoker: FlashInvoker<T>) -> Self {
        Self { acquirer, invoker }
    }

    /// Run and reduce the result to an exit code and message
    pub fn run(&mut self, config: &RunConfig, progress: &mut dyn Progress) -> RunOutcome {
        RunOutcome::from_result(self.try_run(config, progress), SUCCESS_MESSAGE)
    }

    /// Run, keeping the typed error
    pub fn try_run(&mut self, config: &RunConfig, progress: &mut dyn Progress) -> Result<()> {
        let (profile, plan) = resolve_plan(&config.target, &config.options)?;
        log::info!(
            "Flashing {} ({} channel) on {}",
            profile.name,
            profile.channel,
            config.port
        );

        if config.options.want_spiffs && !plan.writes(AssetKind::Spiffs) {
            log::info!("No SPIFFS image will be written for {}", profile.name);
        }

        let assets = self
            .acquirer
            .acquire(&profile, &plan, &config.options, progress)?;
        self.invoker.invoke(&plan, &assets, &config.port, progress)
    }

    /// Erase the whole flash of the device on `port`.
    ///
    /// Nothing is resolved or acquired; only the flashing tool runs.
    pub fn erase(&mut self, port: &str, progress: &mut dyn Progress) -> RunOutcome {
        let result = validate_port(port).and_then(|()| self.invoker.erase(port, progress));
        RunOutcome::from_result(result, ERASE_MESSAGE)
    }

    /// The acquisition stage
    pub fn acquirer(&self) -> &AssetAcquirer<F, B> {
        &self.acquirer
    }

    /// The invocation stage
    pub fn invoker(&self) -> &FlashInvoker<T> {
        &self.invoker
    }
}

/// Check that a port name is usable before a run starts
pub fn validate_port(port: &str) -> Result<()> {
    if port.trim().is_empty() {
        return Err(Error::Config("serial port must not be empty".into()));
    }
    if cfg!(unix) && port.starts_with('/') && !Path::new(port).exists() {
        log::warn!("{} does not exist; esptool will likely fail to open it", port);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acquire::testing::{bundle_with, FakeBuilder, FakeFetcher};
    use crate::invoke::testing::FakeTool;
    use crate::progress::testing::RecordingProgress;
    use std::path::PathBuf;
    use std::time::Duration;

    struct Env {
        _tmp: tempfile::TempDir,
        work: PathBuf,
        bundle: PathBuf,
    }

    fn env() -> Env {
        let tmp = tempfile::tempdir().unwrap();
        let work = tmp.path().join("work");
        let bundle = tmp.path().join("AWS");
        bundle_with(&bundle, &[AssetKind::BootApp0]);
        Env {
            _tmp: tmp,
            work,
            bundle,
        }
    }

    fn orchestrator<B: ImageBuilder>(
        env: &Env,
        builder: B,
    ) -> Orchestrator<FakeFetcher, B, FakeTool> {
        Orchestrator::new(
            AssetAcquirer::new(FakeFetcher::default(), builder, &env.work, &env.bundle),
            FlashInvoker::new(FakeTool::default(), "esp32"),
        )
    }

    fn stable(id: &str) -> Target {
        Target::Catalog {
            id: id.into(),
            channel: Channel::Stable,
        }
    }

    #[test]
    fn test_standard_variant_with_spiffs() {
        let env = env();
        let mut orch = orchestrator(&env, FakeBuilder::default());
        let config = RunConfig::new(stable("3"), AcquisitionOptions::default(), "/dev/ttyUSB0");
        let mut progress = RecordingProgress::default();

        let outcome = orch.run(&config, &mut progress);
        assert_eq!(
            outcome,
            RunOutcome {
                exit_code: 0,
                message: SUCCESS_MESSAGE.into()
            }
        );

        assert_eq!(orch.acquirer().fetcher().requests.len(), 4);
        let calls = &orch.invoker().tool().calls;
        assert_eq!(calls.len(), 1);
        let addrs: Vec<&str> = calls[0]
            .iter()
            .filter(|a| a.starts_with("0x"))
            .map(String::as_str)
            .collect();
        assert_eq!(addrs, ["0x1000", "0x8000", "0xe000", "0x10000", "0x290000"]);
        assert_eq!(progress.stages.last().unwrap(), "Starting upload to device...");
    }

    #[test]
    fn test_spiffs_disabled_variant() {
        let env = env();
        let mut orch = orchestrator(&env, FakeBuilder::default());
        let config = RunConfig::new(stable("20"), AcquisitionOptions::default(), "COM4");

        assert!(orch.run(&config, &mut RecordingProgress::default()).success());

        let requests = &orch.acquirer().fetcher().requests;
        assert_eq!(requests.len(), 3);
        assert!(requests.iter().all(|u| !u.contains("spiffs")));
        let args = orch.invoker().tool().calls[0].join(" ");
        assert!(!args.contains("spiffs.bin"));
        assert!(args.contains("--flash_size detect"));
    }

    #[test]
    fn test_missing_build_tool_aborts_before_flashing() {
        let env = env();
        let project = env.work.parent().unwrap().join("project");
        std::fs::create_dir_all(&project).unwrap();

        let builder = PioBuilder::new("ncdflash-test-no-such-pio", Duration::from_secs(5));
        let mut orch = orchestrator(&env, builder);
        let options = AcquisitionOptions {
            spiffs_project: Some(project),
            ..Default::default()
        };
        let config = RunConfig::new(stable("3"), options, "/dev/ttyUSB0");

        let outcome = orch.run(&config, &mut RecordingProgress::default());
        assert_eq!(outcome.exit_code, 1);
        assert!(outcome.message.starts_with("SPIFFS build failed"));
        assert!(orch.invoker().tool().calls.is_empty());

        let err = orch
            .try_run(&config, &mut RecordingProgress::default())
            .unwrap_err();
        assert!(matches!(err, Error::BuildFailed { .. }));
    }

    #[test]
    fn test_unknown_id_makes_no_requests() {
        let env = env();
        let mut orch = orchestrator(&env, FakeBuilder::default());
        let config = RunConfig::new(stable("99"), AcquisitionOptions::default(), "/dev/ttyUSB0");
        let mut progress = RecordingProgress::default();

        let outcome = orch.run(&config, &mut progress);
        assert_eq!(outcome.exit_code, 1);
        assert_eq!(outcome.message, "Invalid firmware ID \"99\" on the stable channel");
        assert!(orch.acquirer().fetcher().requests.is_empty());
        assert!(orch.invoker().tool().calls.is_empty());
        assert!(progress.stages.is_empty());
    }

    #[test]
    fn test_sota_override_ignores_catalog_id() {
        let env = env();
        let mut orch = orchestrator(&env, FakeBuilder::default());
        let options = AcquisitionOptions {
            sota_override: true,
            ..Default::default()
        };
        let config = RunConfig::new(stable("99"), options, "/dev/ttyUSB0");
        assert_eq!(config.target, Target::SotaOverride);

        assert!(orch.run(&config, &mut RecordingProgress::default()).success());
        let requests = &orch.acquirer().fetcher().requests;
        assert_eq!(requests.len(), 3);
        assert!(requests.iter().all(|u| u.contains("SOTA_Relay")));
    }

    #[test]
    fn test_flash_failure_is_reported() {
        let env = env();
        let mut orch = Orchestrator::new(
            AssetAcquirer::new(
                FakeFetcher::default(),
                FakeBuilder::default(),
                &env.work,
                &env.bundle,
            ),
            FlashInvoker::new(
                FakeTool {
                    fail_on: Some((1, "Failed to connect to ESP32".into())),
                    ..Default::default()
                },
                "esp32",
            ),
        );
        let config = RunConfig::new(stable("7"), AcquisitionOptions::default(), "/dev/ttyUSB0");

        let outcome = orch.run(&config, &mut RecordingProgress::default());
        assert!(!outcome.success());
        assert!(outcome.message.contains("Failed to connect to ESP32"));
    }

    #[test]
    fn test_erase_skips_acquisition() {
        let env = env();
        let mut orch = orchestrator(&env, FakeBuilder::default());
        let mut progress = RecordingProgress::default();

        let outcome = orch.erase("/dev/ttyUSB0", &mut progress);
        assert_eq!(
            outcome,
            RunOutcome {
                exit_code: 0,
                message: ERASE_MESSAGE.into()
            }
        );
        assert!(orch.acquirer().fetcher().requests.is_empty());
        assert_eq!(orch.invoker().tool().calls.len(), 1);
        assert_eq!(orch.invoker().tool().calls[0].last().unwrap(), "erase_flash");

        let outcome = orch.erase("  ", &mut progress);
        assert_eq!(outcome.exit_code, 1);
        assert_eq!(orch.invoker().tool().calls.len(), 1);
    }

    #[test]
    fn test_plan_only() {
        let (profile, plan) = resolve_plan(&stable("5"), &AcquisitionOptions::default()).unwrap();
        assert_eq!(profile.id, "5");
        assert_eq!(plan.address_of(AssetKind::Spiffs), Some(0x383000));
        assert!(resolve_plan(&stable("22"), &AcquisitionOptions::default()).is_err());
    }

    #[test]
    fn test_validate_port() {
        assert!(validate_port("").is_err());
        assert!(validate_port("COM3").is_ok());
    }
}
