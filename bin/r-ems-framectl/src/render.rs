//! ---
//! ems_section: "05-networking-external-interfaces"
//! ems_subsection: "binary"
//! ems_type: "source"
//! ems_scope: "code"
//! ems_description: "CLI for encoding and inspecting data frame capture files."
//! ems_version: "v0.0.0-prealpha"
//! ems_owner: "tbd"
//! ---
use anyhow::Result;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use r_ems_common::config::{BinaryEncoding, OutputConfig, OutputFormat};
use r_ems_frame::{DataFrame, DataFrameExt, FrameValue};
use serde_json::{json, Value};
use tracing::warn;

fn encode_binary(bytes: &[u8], encoding: BinaryEncoding) -> String {
    match encoding {
        BinaryEncoding::Hex => hex::encode(bytes),
        BinaryEncoding::Base64 => BASE64.encode(bytes),
    }
}

fn value_json(value: &FrameValue<'_>, encoding: BinaryEncoding) -> Value {
    match value {
        FrameValue::Number(n) => json!(n),
        // non-finite measurements become null
        FrameValue::Real(r) => json!(r),
        FrameValue::Text(s) => json!(s.as_ref()),
        FrameValue::Binary(b) => json!(encode_binary(b, encoding)),
    }
}

/// JSON document describing one frame of a capture.
pub fn frame_document(index: usize, frame: &DataFrame, encoding: BinaryEncoding) -> Value {
    let sources = frame.source_map();

    match frame.value() {
        Ok(None) => json!({
            "index": index,
            "kind": "empty",
            "value": Value::Null,
            "sources": sources,
        }),
        Ok(Some(value)) => json!({
            "index": index,
            "kind": value.kind(),
            "value": value_json(&value, encoding),
            "sources": sources,
        }),
        Err(err) => {
            warn!(
                index,
                discriminant = frame.payload,
                error = %err,
                "frame has unknown payload kind"
            );
            json!({
                "index": index,
                "kind": "unknown",
                "value": Value::Null,
                "sources": sources,
                "error": err.to_string(),
            })
        }
    }
}

fn text_line(index: usize, frame: &DataFrame, encoding: BinaryEncoding) -> String {
    let sources = frame
        .source_map()
        .iter()
        .map(|(field, value)| format!("{field}={value}"))
        .collect::<Vec<_>>()
        .join(", ");

    let body = match frame.value() {
        Ok(None) => "empty".to_owned(),
        Ok(Some(FrameValue::Binary(bytes))) => {
            format!("binary {}", encode_binary(&bytes, encoding))
        }
        Ok(Some(value)) => format!("{} {}", value.kind(), value),
        Err(err) => {
            warn!(
                index,
                discriminant = frame.payload,
                error = %err,
                "frame has unknown payload kind"
            );
            format!("unknown ({err})")
        }
    };
    format!("#{index} {body} [{sources}]")
}

/// Render one frame according to the output settings.
pub fn render_frame(index: usize, frame: &DataFrame, output: &OutputConfig) -> Result<String> {
    let rendered = match output.format {
        OutputFormat::Json => serde_json::to_string(&frame_document(index, frame, output.binary))?,
        OutputFormat::Pretty => {
            serde_json::to_string_pretty(&frame_document(index, frame, output.binary))?
        }
        OutputFormat::Text => text_line(index, frame, output.binary),
    };
    Ok(rendered)
}
