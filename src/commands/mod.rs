//! CLI command implementations
//!
//! Flashing itself is driven from `main`; these are the read-only
//! subcommands.

mod list;
mod plan;

pub use list::{list_firmware, list_ports};
pub use plan::print_plan;
