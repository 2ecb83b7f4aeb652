//! List commands implementation

use ncdflash_core::{catalog, Channel, LayoutFamily};

use crate::select;

fn family_name(family: LayoutFamily) -> &'static str {
    match family {
        LayoutFamily::Standard => "standard",
        LayoutFamily::RelocatedSpiffs => "spiffs@0x383000",
        LayoutFamily::SplitSpiffs => "split",
        LayoutFamily::SpiffsDisabled => "no-spiffs",
    }
}

/// List the firmware variants of a channel
pub fn list_firmware(channel: Channel) {
    println!("Firmware variants ({} channel):", channel);
    println!();
    println!("{:>4}  {:<36} {:<16} {:>7}", "ID", "Name", "Layout", "SPIFFS");
    println!("{}", "-".repeat(66));

    for profile in catalog::entries(channel) {
        let spiffs = match (profile.family.allows_spiffs(), profile.has_spiffs()) {
            (false, _) => "-",
            (true, true) => "yes",
            (true, false) => "build",
        };
        let bundled = if profile.bundled { " (bundled)" } else { "" };
        println!(
            "{:>4}  {:<36} {:<16} {:>7}{}",
            profile.id,
            profile.name,
            family_name(profile.family),
            spiffs,
            bundled
        );
    }
}

/// List serial ports
pub fn list_ports() -> Result<(), Box<dyn std::error::Error>> {
    let ports = select::list_ports()?;
    if ports.is_empty() {
        println!("No serial ports found");
        return Ok(());
    }

    println!("{:<24} {}", "Port", "Type");
    println!("{}", "-".repeat(48));
    for port in ports {
        println!("{:<24} {}", port.name, port.kind);
    }
    Ok(())
}
