//! ---
//! ems_section: "05-networking-external-interfaces"
//! ems_subsection: "binary"
//! ems_type: "source"
//! ems_scope: "code"
//! ems_description: "CLI for encoding and inspecting data frame capture files."
//! ems_version: "v0.0.0-prealpha"
//! ems_owner: "tbd"
//! ---
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use r_ems_common::config::{BinaryEncoding, OutputConfig, OutputFormat};
use r_ems_frame_schema::decode_frames;
use tracing::info;

use crate::render::render_frame;

#[derive(Debug, Args)]
pub struct InspectCommand {
    /// Capture file produced by `encode` or any length-delimited frame writer.
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Override the configured output format.
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Override the configured encoding for binary payloads.
    #[arg(long, value_enum)]
    binary: Option<BinaryArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Pretty,
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Pretty => OutputFormat::Pretty,
            FormatArg::Text => OutputFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BinaryArg {
    Hex,
    Base64,
}

impl From<BinaryArg> for BinaryEncoding {
    fn from(value: BinaryArg) -> Self {
        match value {
            BinaryArg::Hex => BinaryEncoding::Hex,
            BinaryArg::Base64 => BinaryEncoding::Base64,
        }
    }
}

pub fn run(cmd: InspectCommand, configured: &OutputConfig) -> Result<()> {
    let output = OutputConfig {
        format: cmd.format.map(Into::into).unwrap_or(configured.format),
        binary: cmd.binary.map(Into::into).unwrap_or(configured.binary),
    };

    let bytes = fs::read(&cmd.input)
        .with_context(|| format!("unable to read {}", cmd.input.display()))?;
    let frames = decode_frames(&bytes)
        .with_context(|| format!("{} is not a valid frame capture", cmd.input.display()))?;
    info!(input = %cmd.input.display(), frames = frames.len(), "capture decoded");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (index, frame) in frames.iter().enumerate() {
        writeln!(out, "{}", render_frame(index, frame, &output)?)?;
    }
    out.flush()?;
    Ok(())
}
