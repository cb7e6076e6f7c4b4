//! ---
//! ems_section: "02-messaging-ipc-data-model"
//! ems_subsection: "module"
//! ems_type: "source"
//! ems_scope: "code"
//! ems_description: "Data frame protobuf types, limits and stream codec."
//! ems_version: "v0.0.0-prealpha"
//! ems_owner: "tbd"
//! ---
//! Write-side capacity policy for source annotations.
//!
//! The wire schema puts no bound on `source`; frames from other producers may
//! carry any number of entries and always decode. R-EMS writers cap what they
//! append themselves through [`append_source`].

use crate::{DataFrame, SchemaError, SchemaResult, Source};

/// Maximum number of source annotations R-EMS writers attach to one frame.
pub const MAX_SOURCES: usize = 256;

/// Append one source annotation, refusing to grow past [`MAX_SOURCES`].
pub fn append_source(
    frame: &mut DataFrame,
    field: impl Into<String>,
    value: impl Into<String>,
) -> SchemaResult<()> {
    if frame.source.len() >= MAX_SOURCES {
        return Err(SchemaError::AnnotationLimitExceeded { limit: MAX_SOURCES });
    }
    frame.source.push(Source {
        field: field.into(),
        value: value.into(),
    });
    Ok(())
}
