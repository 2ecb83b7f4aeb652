//! CLI argument parsing

use clap::{Parser, Subcommand};
use ncdflash_core::{AcquisitionOptions, Channel};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ncdflash")]
#[command(author, version, about = "ESP32 firmware flasher for NCD gateways", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Tool configuration file (TOML)
    /// Defaults to ./ncdflash.toml, then /etc/ncdflash/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub flash: FlashArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Firmware selection options shared by flashing and `plan`
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Firmware variant id (prompts when omitted)
    #[arg(short, long)]
    pub firmware: Option<String>,

    /// Use the prerelease (-dev) channel
    #[arg(long)]
    pub dev: bool,

    /// Do not flash a SPIFFS image
    #[arg(long)]
    pub no_spiffs: bool,

    /// Flash the SOTA Relay build regardless of --firmware
    #[arg(long)]
    pub sota: bool,

    /// Build SPIFFS from this PlatformIO project instead of downloading it
    #[arg(long, value_name = "PATH")]
    pub spiffs_project_dir: Option<PathBuf>,

    /// Download assets even for variants shipped in the bundled directory
    #[arg(long)]
    pub no_bundled: bool,
}

impl SelectionArgs {
    /// Release channel selected by --dev
    pub fn channel(&self) -> Channel {
        if self.dev {
            Channel::Prerelease
        } else {
            Channel::Stable
        }
    }

    /// Planning and acquisition options
    pub fn options(&self) -> AcquisitionOptions {
        AcquisitionOptions {
            want_spiffs: !self.no_spiffs,
            spiffs_project: self.spiffs_project_dir.clone(),
            sota_override: self.sota,
            use_bundled_assets: !self.no_bundled,
        }
    }
}

/// Options for a flash run
#[derive(clap::Args, Debug, Clone, Default)]
pub struct FlashArgs {
    /// Serial port of the device (prompts when omitted)
    #[arg(short, long)]
    pub port: Option<String>,

    #[command(flatten)]
    pub selection: SelectionArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List firmware variants
    ListFirmware {
        /// List the prerelease channel
        #[arg(long)]
        dev: bool,
    },

    /// List serial ports
    ListPorts,

    /// Print the flash plan for a variant without touching anything
    Plan {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Erase the entire flash of a device
    Erase {
        /// Serial port of the device (prompts when omitted)
        #[arg(short, long)]
        port: Option<String>,
    },
}
