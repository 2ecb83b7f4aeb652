//! Layout types
//!
//! A [`FlashPlan`] is an ordered list of esptool invocations, each carrying
//! its own write parameters and the `(address, asset)` pairs it writes.

use std::fmt;

use crate::catalog::AssetKind;

/// Serial reset strategy passed to esptool as `--before` / `--after`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetMode {
    /// Toggle DTR/RTS to enter the bootloader
    DefaultReset,
    /// Reset the chip through RTS once done
    HardReset,
}

impl ResetMode {
    /// esptool spelling
    pub fn as_arg(self) -> &'static str {
        match self {
            ResetMode::DefaultReset => "default_reset",
            ResetMode::HardReset => "hard_reset",
        }
    }
}

/// SPI flash I/O mode. Every NCD gateway layout writes in dual I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashMode {
    /// Dual I/O
    Dio,
}

impl FlashMode {
    /// esptool spelling
    pub fn as_arg(self) -> &'static str {
        match self {
            FlashMode::Dio => "dio",
        }
    }
}

/// SPI flash clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashFreq {
    /// 40 MHz
    Mhz40,
    /// 80 MHz
    Mhz80,
}

impl FlashFreq {
    /// esptool spelling
    pub fn as_arg(self) -> &'static str {
        match self {
            FlashFreq::Mhz40 => "40m",
            FlashFreq::Mhz80 => "80m",
        }
    }
}

/// Flash size written into the bootloader header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashSize {
    /// Let esptool read the size from the chip
    Detect,
    /// 4 MiB
    Mb4,
}

impl FlashSize {
    /// esptool spelling
    pub fn as_arg(self) -> &'static str {
        match self {
            FlashSize::Detect => "detect",
            FlashSize::Mb4 => "4MB",
        }
    }
}

/// Parameters of one esptool `write_flash` invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashParams {
    /// Serial baud rate
    pub baud: u32,
    /// Reset before writing
    pub before: ResetMode,
    /// Reset after writing
    pub after: ResetMode,
    /// SPI flash mode
    pub flash_mode: FlashMode,
    /// SPI flash clock
    pub flash_freq: FlashFreq,
    /// Flash size
    pub flash_size: FlashSize,
    /// Compress data in transfer (`-z`)
    pub compress: bool,
}

impl FlashParams {
    /// Auto-detected flash size at 40 MHz, full baud
    pub const DETECT_SIZE: FlashParams = FlashParams {
        baud: 921_600,
        before: ResetMode::DefaultReset,
        after: ResetMode::HardReset,
        flash_mode: FlashMode::Dio,
        flash_freq: FlashFreq::Mhz40,
        flash_size: FlashSize::Detect,
        compress: true,
    };

    /// Fixed 4 MiB at 80 MHz, half baud
    pub const FIXED_4MB: FlashParams = FlashParams {
        baud: 460_800,
        before: ResetMode::DefaultReset,
        after: ResetMode::HardReset,
        flash_mode: FlashMode::Dio,
        flash_freq: FlashFreq::Mhz80,
        flash_size: FlashSize::Mb4,
        compress: true,
    };
}

/// One asset written at one address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashStep {
    /// Byte offset in flash
    pub address: u32,
    /// Asset written there
    pub asset: AssetKind,
}

impl FlashStep {
    /// Create a new step
    pub fn new(address: u32, asset: AssetKind) -> Self {
        Self { address, asset }
    }
}

impl fmt::Display for FlashStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x} {}", self.address, self.asset.file_name())
    }
}

/// One complete call to the flashing tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Write parameters
    pub params: FlashParams,
    /// Steps, ordered by address
    pub steps: Vec<FlashStep>,
}

impl Invocation {
    /// Create an invocation, sorting its steps by address
    pub fn new(params: FlashParams, mut steps: Vec<FlashStep>) -> Self {
        steps.sort_by_key(|s| s.address);
        Self { params, steps }
    }

    /// Check whether this invocation writes `kind`
    pub fn writes(&self, kind: AssetKind) -> bool {
        self.steps.iter().any(|s| s.asset == kind)
    }
}

/// Ordered set of invocations for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashPlan {
    /// Invocations, executed strictly in order
    pub invocations: Vec<Invocation>,
}

impl FlashPlan {
    /// Every step of every invocation, in execution order
    pub fn steps(&self) -> impl Iterator<Item = &FlashStep> {
        self.invocations.iter().flat_map(|i| i.steps.iter())
    }

    /// Check whether any invocation writes `kind`
    pub fn writes(&self, kind: AssetKind) -> bool {
        self.invocations.iter().any(|i| i.writes(kind))
    }

    /// Address `kind` is written at, if it is written at all
    pub fn address_of(&self, kind: AssetKind) -> Option<u32> {
        self.steps().find(|s| s.asset == kind).map(|s| s.address)
    }

    /// Assets the plan needs, in acquisition order
    pub fn required_assets(&self) -> Vec<AssetKind> {
        AssetKind::ACQUISITION_ORDER
            .iter()
            .copied()
            .filter(|k| self.writes(*k))
            .collect()
    }
}
