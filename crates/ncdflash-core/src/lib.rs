//! ncdflash-core - Flash-plan resolution and asset acquisition
//!
//! This crate turns a firmware selection (variant id, channel, options) into
//! a concrete set of `(flash address, file)` pairs and drives an external
//! flashing tool with them.
//!
//! # Pipeline
//!
//! ```text
//! catalog::resolve ──► layout::plan ──► AssetAcquirer::acquire ──► FlashInvoker::invoke
//!   (profile)            (FlashPlan)        (ResolvedAssets)            (esptool)
//! ```
//!
//! The [`Orchestrator`] runs the stages in order and stops at the first
//! fatal error. Every external collaborator (HTTP, the SPIFFS build tool,
//! the flashing tool, progress output) sits behind a trait so the pipeline
//! can be exercised without hardware or network.
//!
//! # Example
//!
//! ```ignore
//! use ncdflash_core::{Channel, Orchestrator, RunConfig, StdoutProgress, Target, ToolConfig};
//!
//! let tools = ToolConfig::default();
//! let mut orchestrator = Orchestrator::with_defaults(&tools)?;
//! let config = RunConfig::new(
//!     Target::Catalog { id: "3".into(), channel: Channel::Stable },
//!     Default::default(),
//!     "/dev/ttyUSB0",
//! );
//! let outcome = orchestrator.run(&config, &mut StdoutProgress);
//! std::process::exit(outcome.exit_code);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod acquire;
pub mod catalog;
pub mod config;
pub mod error;
pub mod invoke;
pub mod layout;
pub mod orchestrator;
pub mod progress;

pub use acquire::{
    asset_source, AcquisitionOptions, AssetAcquirer, AssetSource, ResolvedAsset, ResolvedAssets,
};
pub use catalog::{AssetKind, Channel, FirmwareProfile, LayoutFamily};
pub use config::ToolConfig;
pub use error::{Error, Result};
pub use invoke::{EsptoolCommand, FlashInvoker, FlashTool};
pub use layout::{FlashParams, FlashPlan, FlashStep, Invocation};
pub use orchestrator::{
    resolve_plan, validate_port, Orchestrator, RunConfig, RunOutcome, Target, ERASE_MESSAGE,
};
pub use progress::{Progress, StdoutProgress};
