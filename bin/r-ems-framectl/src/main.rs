//! ---
//! ems_section: "05-networking-external-interfaces"
//! ems_subsection: "binary"
//! ems_type: "source"
//! ems_scope: "code"
//! ems_description: "CLI for encoding and inspecting data frame capture files."
//! ems_version: "v0.0.0-prealpha"
//! ems_owner: "tbd"
//! ---
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use r_ems_common::config::FrameCtlConfig;
use r_ems_common::logging::init_tracing;
use tracing::debug;

mod encode;
mod inspect;
mod render;

const SERVICE_NAME: &str = "r-ems-framectl";
const CONFIG_CANDIDATES: [&str; 2] = ["r-ems-framectl.toml", "/etc/r-ems/framectl.toml"];

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Encode and inspect R-EMS data frame capture files",
    long_about = None
)]
struct Cli {
    /// Configuration file (TOML). Falls back to R_EMS_FRAMECTL_CONFIG, then
    /// ./r-ems-framectl.toml and /etc/r-ems/framectl.toml.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build one frame and write it to a capture file.
    Encode(encode::EncodeCommand),
    /// Print every frame of a capture file.
    Inspect(inspect::InspectCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let loaded = FrameCtlConfig::load_with_source(cli.config.as_deref(), &CONFIG_CANDIDATES)?;
    let _log_guard = init_tracing(SERVICE_NAME, &loaded.config.logging)?;
    debug!(config_source = ?loaded.source, "configuration resolved");

    match cli.command {
        Commands::Encode(cmd) => encode::run(cmd)?,
        Commands::Inspect(cmd) => inspect::run(cmd, &loaded.config.output)?,
    }
    Ok(())
}
