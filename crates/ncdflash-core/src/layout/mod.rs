//! Flash layout planning
//!
//! [`plan`] is a pure function from a profile's [`LayoutFamily`] and the
//! caller's options to a [`FlashPlan`]. The address map:
//!
//! | asset       | address    | written when                                  |
//! |-------------|------------|-----------------------------------------------|
//! | bootloader  | `0x1000`   | always                                        |
//! | partitions  | `0x8000`   | always                                        |
//! | boot_app0   | `0xe000`   | fixed-4MB writes only                         |
//! | firmware    | `0x10000`  | always                                        |
//! | spiffs      | `0x290000` | requested and available                       |
//! | spiffs      | `0x383000` | requested, available, `RelocatedSpiffs` family |
//!
//! A wrong offset bricks the device until it is reflashed over serial, so
//! every branch here is covered by tests.

mod types;

pub use types::*;

use crate::acquire::AcquisitionOptions;
use crate::catalog::{AssetKind, FirmwareProfile, LayoutFamily};

/// Second-stage bootloader offset
pub const BOOTLOADER_ADDR: u32 = 0x1000;
/// Partition table offset
pub const PARTITIONS_ADDR: u32 = 0x8000;
/// OTA data (boot_app0) offset
pub const BOOT_APP0_ADDR: u32 = 0xe000;
/// Application offset
pub const FIRMWARE_ADDR: u32 = 0x10000;
/// Default SPIFFS partition offset
pub const SPIFFS_ADDR: u32 = 0x290000;
/// SPIFFS offset for the `RelocatedSpiffs` family
pub const RELOCATED_SPIFFS_ADDR: u32 = 0x383000;

/// Steps written by every plan
fn base_steps() -> Vec<FlashStep> {
    vec![
        FlashStep::new(BOOTLOADER_ADDR, AssetKind::Bootloader),
        FlashStep::new(PARTITIONS_ADDR, AssetKind::Partitions),
        FlashStep::new(FIRMWARE_ADDR, AssetKind::Firmware),
    ]
}

/// Decide whether the run writes a SPIFFS image
pub fn spiffs_planned(profile: &FirmwareProfile, options: &AcquisitionOptions) -> bool {
    options.want_spiffs
        && profile.family.allows_spiffs()
        && (profile.has_spiffs() || options.spiffs_project.is_some())
}

/// Compute the flash plan for `profile`
pub fn plan(profile: &FirmwareProfile, options: &AcquisitionOptions) -> FlashPlan {
    let with_spiffs = spiffs_planned(profile, options);
    let mut invocations = Vec::with_capacity(2);

    match (profile.family, with_spiffs) {
        (LayoutFamily::Standard, true) => {
            let mut steps = base_steps();
            steps.push(FlashStep::new(BOOT_APP0_ADDR, AssetKind::BootApp0));
            steps.push(FlashStep::new(SPIFFS_ADDR, AssetKind::Spiffs));
            invocations.push(Invocation::new(FlashParams::FIXED_4MB, steps));
        }
        (LayoutFamily::RelocatedSpiffs, true) => {
            let mut steps = base_steps();
            steps.push(FlashStep::new(RELOCATED_SPIFFS_ADDR, AssetKind::Spiffs));
            invocations.push(Invocation::new(FlashParams::DETECT_SIZE, steps));
        }
        (LayoutFamily::SplitSpiffs, with_spiffs) => {
            let mut steps = base_steps();
            steps.push(FlashStep::new(BOOT_APP0_ADDR, AssetKind::BootApp0));
            invocations.push(Invocation::new(FlashParams::FIXED_4MB, steps));

            // esptool rejects all five offsets in one write for this layout
            if with_spiffs {
                invocations.push(Invocation::new(
                    FlashParams::FIXED_4MB,
                    vec![FlashStep::new(SPIFFS_ADDR, AssetKind::Spiffs)],
                ));
            }
        }
        _ => {
            invocations.push(Invocation::new(FlashParams::DETECT_SIZE, base_steps()));
        }
    }

    FlashPlan { invocations }
}
