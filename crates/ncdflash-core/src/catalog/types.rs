//! Catalog types

use std::fmt;
use std::str::FromStr;

/// The binary assets a device can be flashed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AssetKind {
    /// Application image
    Firmware,
    /// SPIFFS filesystem image
    Spiffs,
    /// Second-stage bootloader
    Bootloader,
    /// Partition table
    Partitions,
    /// OTA data initial image (boot stage 0)
    BootApp0,
}

impl AssetKind {
    /// Order in which assets are acquired
    pub const ACQUISITION_ORDER: [AssetKind; 5] = [
        AssetKind::Firmware,
        AssetKind::Spiffs,
        AssetKind::Bootloader,
        AssetKind::Partitions,
        AssetKind::BootApp0,
    ];

    /// Fixed file name in the working directory.
    ///
    /// esptool is invoked with these names, so they must not change.
    pub fn file_name(self) -> &'static str {
        match self {
            AssetKind::Firmware => "firmware.bin",
            AssetKind::Spiffs => "spiffs.bin",
            AssetKind::Bootloader => "bootloader.bin",
            AssetKind::Partitions => "partitions.bin",
            AssetKind::BootApp0 => "boot_app0.bin",
        }
    }

    /// Short label used in progress lines
    pub fn label(self) -> &'static str {
        match self {
            AssetKind::Firmware => "firmware",
            AssetKind::Spiffs => "SPIFFS",
            AssetKind::Bootloader => "bootloader",
            AssetKind::Partitions => "partitions",
            AssetKind::BootApp0 => "boot_app0",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Firmware release track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Channel {
    /// Production builds
    #[default]
    Stable,
    /// Development builds (`-dev` assets), a subset of variants
    Prerelease,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Stable => f.write_str("stable"),
            Channel::Prerelease => f.write_str("prerelease"),
        }
    }
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stable" | "production" => Ok(Channel::Stable),
            "prerelease" | "dev" => Ok(Channel::Prerelease),
            _ => Err(format!("unknown channel: {}", s)),
        }
    }
}

/// How a variant's images are laid out in flash.
///
/// This tag is the only input the layout planner branches on; the
/// planner never looks at variant ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutFamily {
    /// SPIFFS at 0x290000 in a single fixed-4MB write together with
    /// boot_app0; detect-size write without SPIFFS
    Standard,
    /// Detect-size layout with the SPIFFS partition moved to 0x383000
    RelocatedSpiffs,
    /// Fixed-4MB layout with boot_app0, SPIFFS written by a second
    /// esptool invocation
    SplitSpiffs,
    /// SPIFFS is never flashed, whatever the caller asks for
    SpiffsDisabled,
}

impl LayoutFamily {
    /// Whether this family ever writes a SPIFFS image
    pub fn allows_spiffs(self) -> bool {
        !matches!(self, LayoutFamily::SpiffsDisabled)
    }

    /// Whether some plan for this family writes boot_app0
    pub fn may_use_boot_app0(self) -> bool {
        matches!(self, LayoutFamily::Standard | LayoutFamily::SplitSpiffs)
    }
}

/// Remote locations of a variant's assets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetLocations {
    /// Application image URL
    pub firmware: &'static str,
    /// Bootloader URL
    pub bootloader: &'static str,
    /// Partition table URL
    pub partitions: &'static str,
    /// SPIFFS image URL, if the variant publishes one
    pub spiffs: Option<&'static str>,
}

impl AssetLocations {
    /// URL of `kind`, if it has one.
    ///
    /// boot_app0 never has a remote location; it is always bundled.
    pub fn url(&self, kind: AssetKind) -> Option<&'static str> {
        match kind {
            AssetKind::Firmware => Some(self.firmware),
            AssetKind::Bootloader => Some(self.bootloader),
            AssetKind::Partitions => Some(self.partitions),
            AssetKind::Spiffs => self.spiffs,
            AssetKind::BootApp0 => None,
        }
    }
}

/// One selectable firmware variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirmwareProfile {
    /// Catalog key, unique within a channel
    pub id: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// Track this profile belongs to
    pub channel: Channel,
    /// Where the assets are downloaded from
    pub assets: AssetLocations,
    /// Flash layout rules
    pub family: LayoutFamily,
    /// Assets can be copied from the bundled directory instead of downloaded
    pub bundled: bool,
}

impl FirmwareProfile {
    /// Whether the profile itself publishes a SPIFFS image
    pub fn has_spiffs(&self) -> bool {
        self.assets.spiffs.is_some()
    }
}
