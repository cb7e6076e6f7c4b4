//! ---
//! ems_section: "05-networking-external-interfaces"
//! ems_subsection: "binary"
//! ems_type: "source"
//! ems_scope: "code"
//! ems_description: "CLI for encoding and inspecting data frame capture files."
//! ems_version: "v0.0.0-prealpha"
//! ems_owner: "tbd"
//! ---
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use r_ems_frame::{DataFrame, DataFrameExt, FrameValue};
use r_ems_frame_schema::encode_frames;
use tracing::info;

#[derive(Debug, Args)]
pub struct EncodeCommand {
    /// Capture file to write.
    #[arg(long, short = 'o', value_name = "FILE")]
    output: PathBuf,

    #[command(flatten)]
    value: ValueArgs,

    /// Source annotation, repeatable. Order on the command line is kept.
    #[arg(long = "source", value_name = "FIELD=VALUE", value_parser = parse_source)]
    sources: Vec<(String, String)>,

    /// Append to an existing capture instead of replacing it.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    append: bool,
}

/// At most one payload flag; none writes an empty frame.
#[derive(Debug, Args)]
#[group(required = false, multiple = false)]
struct ValueArgs {
    /// Integer payload (NUMBER).
    #[arg(long, allow_negative_numbers = true, value_name = "INT")]
    number: Option<i64>,
    /// Measurement payload (REAL).
    #[arg(long, allow_negative_numbers = true, value_name = "FLOAT")]
    real: Option<f64>,
    /// Text payload (TEXT).
    #[arg(long, value_name = "STRING")]
    text: Option<String>,
    /// Binary payload given as hex (BINARY).
    #[arg(long = "blob-hex", value_name = "HEX")]
    blob_hex: Option<String>,
}

impl ValueArgs {
    fn into_frame_value(self) -> Result<Option<FrameValue<'static>>> {
        if let Some(n) = self.number {
            return Ok(Some(n.into()));
        }
        if let Some(r) = self.real {
            return Ok(Some(r.into()));
        }
        if let Some(s) = self.text {
            return Ok(Some(s.into()));
        }
        if let Some(encoded) = self.blob_hex {
            let bytes = hex::decode(encoded.trim()).context("--blob-hex is not valid hex")?;
            return Ok(Some(bytes.into()));
        }
        Ok(None)
    }
}

fn parse_source(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((field, value)) if !field.is_empty() => Ok((field.to_owned(), value.to_owned())),
        _ => Err(format!("expected FIELD=VALUE, got '{raw}'")),
    }
}

pub fn run(cmd: EncodeCommand) -> Result<()> {
    let mut frame = DataFrame::default();
    frame.set_value(cmd.value.into_frame_value()?);
    frame
        .extend_sources(cmd.sources)
        .context("unable to attach source annotations")?;

    let bytes = encode_frames([&frame])?;
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(cmd.append)
        .truncate(!cmd.append)
        .open(&cmd.output)
        .with_context(|| format!("unable to open {}", cmd.output.display()))?;
    file.write_all(&bytes)
        .with_context(|| format!("unable to write {}", cmd.output.display()))?;

    info!(
        output = %cmd.output.display(),
        payload = frame.payload().as_str_name(),
        sources = frame.source.len(),
        bytes = bytes.len(),
        append = cmd.append,
        "frame written"
    );
    Ok(())
}
