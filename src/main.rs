//! ncdflash - ESP32 firmware flasher for NCD gateways
//!
//! Resolves a firmware variant to a flash plan, fetches or builds the
//! images it needs and writes them with esptool.
//!
//! # Output
//!
//! stdout carries the machine-readable protocol a supervising process
//! parses: `[PROGRESS] <stage>` lines, the outcome message and a final
//! `Status: Success` or `Status: Failure`. The `erase` subcommand follows
//! the same protocol. Logs, prompts and download bars go to stderr.

mod cli;
mod commands;
mod progress;
mod select;

use clap::Parser;
use cli::{Cli, Commands, FlashArgs};
use ncdflash_core::progress::status_line;
use ncdflash_core::{
    resolve_plan, validate_port, Orchestrator, RunConfig, RunOutcome, Target, ToolConfig,
};
use progress::CliProgress;
use select::{Selection, StdinPrompter};

fn main() {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Set log level based on verbosity
    match cli.verbose {
        0 => {} // default (info)
        1 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    }

    let code = match cli.command {
        Some(Commands::ListFirmware { dev }) => {
            let channel = if dev {
                ncdflash_core::Channel::Prerelease
            } else {
                ncdflash_core::Channel::Stable
            };
            commands::list_firmware(channel);
            0
        }
        Some(Commands::ListPorts) => report(commands::list_ports()),
        Some(Commands::Plan { selection }) => {
            let target: Result<Target, Box<dyn std::error::Error>> =
                match (&selection.firmware, selection.sota) {
                    (_, true) => Ok(Target::SotaOverride),
                    (Some(id), false) => Ok(Target::Catalog {
                        id: id.clone(),
                        channel: selection.channel(),
                    }),
                    (None, false) => Err("plan needs --firmware or --sota".into()),
                };
            let options = selection.options();
            report(target.and_then(|target| {
                let (profile, plan) = resolve_plan(&target, &options)?;
                commands::print_plan(&profile, &plan, &options);
                Ok(())
            }))
        }
        Some(Commands::Erase { port }) => finish(erase(port, cli.config.as_deref())),
        None => finish(flash(&cli.flash, cli.config.as_deref())),
    };

    std::process::exit(code);
}

fn report(result: Result<(), Box<dyn std::error::Error>>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

/// Print the outcome message and the final status line
fn finish(result: Result<RunOutcome, Box<dyn std::error::Error>>) -> i32 {
    let outcome = result.unwrap_or_else(|e| {
        log::error!("{}", e);
        RunOutcome {
            exit_code: 1,
            message: e.to_string(),
        }
    });
    println!("{}", outcome.message);
    println!("{}", status_line(outcome.success()));
    outcome.exit_code
}

fn choose_port(
    port: Option<String>,
    prompter: &mut dyn select::Prompter,
) -> Result<String, Box<dyn std::error::Error>> {
    let port = match Selection::from(port) {
        Selection::Preset(port) => port,
        Selection::Interactive => {
            eprintln!("Scanning for serial ports...");
            let ports = select::list_ports()?;
            select::select_port(Selection::Interactive, &ports, prompter)?
        }
    };
    validate_port(&port)?;
    Ok(port)
}

/// Erase the device flash without resolving any firmware
fn erase(
    port: Option<String>,
    config: Option<&std::path::Path>,
) -> Result<RunOutcome, Box<dyn std::error::Error>> {
    let tools = ToolConfig::load(config)?;
    let port = choose_port(port, &mut StdinPrompter::terminal())?;

    let mut orchestrator = Orchestrator::with_defaults(&tools)?;
    Ok(orchestrator.erase(&port, &mut CliProgress::default()))
}

/// Resolve the selection, then run the full pipeline
fn flash(
    args: &FlashArgs,
    config: Option<&std::path::Path>,
) -> Result<RunOutcome, Box<dyn std::error::Error>> {
    let tools = ToolConfig::load(config)?;
    let selection = &args.selection;
    let mut prompter = StdinPrompter::terminal();

    let port = choose_port(args.port.clone(), &mut prompter)?;

    let target = if selection.sota {
        Target::SotaOverride
    } else {
        let id = select::select_firmware(
            Selection::from(selection.firmware.clone()),
            selection.channel(),
            &mut prompter,
        )?;
        Target::Catalog {
            id,
            channel: selection.channel(),
        }
    };

    if let Some(project) = &selection.spiffs_project_dir {
        log::info!("Using SPIFFS from project: {}", project.display());
    }

    let run = RunConfig::new(target, selection.options(), port);
    let mut orchestrator = Orchestrator::with_defaults(&tools)?;
    Ok(orchestrator.run(&run, &mut CliProgress::default()))
}
