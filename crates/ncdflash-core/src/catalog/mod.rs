//! Firmware catalog
//!
//! Immutable tables mapping `(channel, id)` to a [`FirmwareProfile`].
//! Lookup is pure: no I/O, no side effects.
//!
//! ```ignore
//! let profile = catalog::resolve("5", Channel::Stable)?;
//! assert_eq!(profile.family, LayoutFamily::RelocatedSpiffs);
//! ```

mod table;
mod types;

pub use types::*;

use crate::error::{Error, Result};

/// All profiles of `channel`, in id order
pub fn entries(channel: Channel) -> &'static [FirmwareProfile] {
    match channel {
        Channel::Stable => table::STABLE,
        Channel::Prerelease => table::PRERELEASE,
    }
}

/// Look up a variant by id on the given channel
pub fn resolve(id: &str, channel: Channel) -> Result<FirmwareProfile> {
    let id = id.trim();
    entries(channel)
        .iter()
        .find(|p| p.id == id)
        .copied()
        .ok_or_else(|| Error::NotFound {
            id: id.to_string(),
            channel,
        })
}

/// The hardwired SOTA Relay profile, independent of the tables
pub fn sota_override() -> FirmwareProfile {
    table::SOTA_OVERRIDE
}
