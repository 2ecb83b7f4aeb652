//! Flash plan display

use ncdflash_core::layout::FlashSize;
use ncdflash_core::{asset_source, AcquisitionOptions, FirmwareProfile, FlashPlan};

/// Print a flash plan in human-readable form
pub fn print_plan(profile: &FirmwareProfile, plan: &FlashPlan, options: &AcquisitionOptions) {
    println!("Flash Plan");
    println!("==========");
    println!("Firmware: [{}] {}", profile.id, profile.name);
    println!("Channel:  {}", profile.channel);

    for (i, invocation) in plan.invocations.iter().enumerate() {
        let p = &invocation.params;
        println!(
            "\nInvocation {}/{}: baud {}, {} @ {}, flash size {}{}",
            i + 1,
            plan.invocations.len(),
            p.baud,
            p.flash_mode.as_arg(),
            p.flash_freq.as_arg(),
            match p.flash_size {
                FlashSize::Detect => "detect",
                FlashSize::Mb4 => "4 MiB",
            },
            if p.compress { ", compressed" } else { "" }
        );
        println!("{:<12} {:<16}", "Address", "File");
        println!("{:-<40}", "");
        for step in &invocation.steps {
            println!("{:#010X}   {:<16}", step.address, step.asset.file_name());
        }
    }

    println!("\nAssets:");
    for kind in plan.required_assets() {
        println!(
            "  {:<16} {}",
            kind.file_name(),
            asset_source(profile, plan, options, kind)
        );
    }
}
