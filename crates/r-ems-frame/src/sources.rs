//! ---
//! ems_section: "02-messaging-ipc-data-model"
//! ems_subsection: "module"
//! ems_type: "source"
//! ems_scope: "code"
//! ems_description: "Typed accessors over data frame messages."
//! ems_version: "v0.0.0-prealpha"
//! ems_owner: "tbd"
//! ---
//! Map-shaped view over a frame's ordered `source` annotations.
//!
//! The two directions are deliberately asymmetric:
//!
//! * reading collapses duplicate fields, the entry stored last wins;
//! * writing only ever appends, existing entries are kept as they are.
//!
//! Writing `{"site": "b"}` to a frame that already carries `site = a` keeps
//! both records on the wire while the map view reports `site = b`. Callers
//! wanting replace semantics must clear `frame.source` first.

use indexmap::IndexMap;
use r_ems_frame_schema::{append_source, DataFrame, Source};
use tracing::debug;

use crate::Result;

/// Source annotations keyed by field, in first-seen order.
pub type SourceMap = IndexMap<String, String>;

/// Project an ordered annotation list onto a map, last write wins.
pub fn collect_sources(sources: &[Source]) -> SourceMap {
    let mut map = SourceMap::with_capacity(sources.len());
    for source in sources {
        map.insert(source.field.clone(), source.value.clone());
    }
    map
}

/// Append one annotation per entry, in iteration order.
///
/// Returns the number of entries appended. On failure the entries appended
/// before the error stay on the frame.
pub fn append_sources<I, K, V>(frame: &mut DataFrame, entries: I) -> Result<usize>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut appended = 0usize;
    for (field, value) in entries {
        append_source(frame, field, value)?;
        appended += 1;
    }
    debug!(
        appended,
        total = frame.source.len(),
        "appended source annotations"
    );
    Ok(appended)
}
