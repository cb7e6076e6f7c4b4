//! ---
//! ems_section: "02-messaging-ipc-data-model"
//! ems_subsection: "module"
//! ems_type: "source"
//! ems_scope: "code"
//! ems_description: "Data frame protobuf types, limits and stream codec."
//! ems_version: "v0.0.0-prealpha"
//! ems_owner: "tbd"
//! ---
//! Length-delimited frame streams, as written to capture files.

use bytes::Buf;
use prost::Message;
use tracing::debug;

use crate::{DataFrame, SchemaResult};

/// Encode frames back to back, each prefixed with its varint length.
pub fn encode_frames<'a, I>(frames: I) -> SchemaResult<Vec<u8>>
where
    I: IntoIterator<Item = &'a DataFrame>,
{
    let mut buf = Vec::new();
    let mut count = 0usize;
    for frame in frames {
        frame.encode_length_delimited(&mut buf)?;
        count += 1;
    }
    debug!(frames = count, bytes = buf.len(), "encoded frame stream");
    Ok(buf)
}

/// Decode every frame in `buf`; a truncated trailing frame is an error.
///
/// No annotation cap is applied here: anything the wire format accepts is
/// returned as-is.
pub fn decode_frames(mut buf: &[u8]) -> SchemaResult<Vec<DataFrame>> {
    let total = buf.len();
    let mut frames = Vec::new();
    while buf.has_remaining() {
        frames.push(DataFrame::decode_length_delimited(&mut buf)?);
    }
    debug!(frames = frames.len(), bytes = total, "decoded frame stream");
    Ok(frames)
}
