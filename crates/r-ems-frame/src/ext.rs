//! ---
//! ems_section: "02-messaging-ipc-data-model"
//! ems_subsection: "module"
//! ems_type: "source"
//! ems_scope: "code"
//! ems_description: "Typed accessors over data frame messages."
//! ems_version: "v0.0.0-prealpha"
//! ems_owner: "tbd"
//! ---
use std::borrow::Cow;

use r_ems_frame_schema::{DataFrame, Payload};

use crate::sources::{self, SourceMap};
use crate::value::FrameValue;
use crate::{FrameError, Result};

/// Value and annotation accessors for [`DataFrame`].
pub trait DataFrameExt {
    /// Checked discriminant of the frame. Pure: reporting an unknown kind is
    /// left to the caller.
    fn payload_kind(&self) -> Result<Payload>;

    /// Active payload, `None` for an empty frame.
    ///
    /// Fails with [`FrameError::UnknownPayloadKind`] when the discriminant is
    /// outside the known set rather than guessing at a field.
    fn value(&self) -> Result<Option<FrameValue<'_>>>;

    /// Replace the payload, setting the discriminant to match and resetting
    /// the other payload fields. `None` empties the frame.
    fn set_value(&mut self, value: Option<FrameValue<'_>>);

    /// Source annotations as a map; later duplicates override earlier ones.
    fn source_map(&self) -> SourceMap;

    /// Append one annotation per entry without touching existing ones.
    ///
    /// See [`crate::sources`] for how this interacts with [`Self::source_map`].
    fn extend_sources<I, K, V>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>;
}

impl DataFrameExt for DataFrame {
    fn payload_kind(&self) -> Result<Payload> {
        Payload::try_from(self.payload).map_err(|_| FrameError::UnknownPayloadKind {
            discriminant: self.payload,
        })
    }

    fn value(&self) -> Result<Option<FrameValue<'_>>> {
        let value = match self.payload_kind()? {
            Payload::Empty => None,
            Payload::Number => Some(FrameValue::Number(self.value_numeric)),
            Payload::Real => Some(FrameValue::Real(self.value_measurement)),
            Payload::Text => Some(FrameValue::Text(Cow::Borrowed(&self.value_textual))),
            Payload::Binary => Some(FrameValue::Binary(Cow::Borrowed(&self.value_blob))),
        };
        Ok(value)
    }

    fn set_value(&mut self, value: Option<FrameValue<'_>>) {
        self.value_numeric = 0;
        self.value_measurement = 0.0;
        self.value_textual.clear();
        self.value_blob.clear();

        let Some(value) = value else {
            self.set_payload(Payload::Empty);
            return;
        };
        self.set_payload(value.payload());
        match value {
            FrameValue::Number(n) => self.value_numeric = n,
            FrameValue::Real(r) => self.value_measurement = r,
            FrameValue::Text(s) => self.value_textual = s.into_owned(),
            FrameValue::Binary(b) => self.value_blob = b.into_owned(),
        }
    }

    fn source_map(&self) -> SourceMap {
        sources::collect_sources(&self.source)
    }

    fn extend_sources<I, K, V>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        sources::append_sources(self, entries).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_value_clears_stale_fields() {
        let mut frame = DataFrame::default();
        frame.set_value(Some(FrameValue::from("stale")));
        frame.set_value(Some(FrameValue::from(12i64)));
        assert_eq!(frame.payload, Payload::Number as i32);
        assert_eq!(frame.value_numeric, 12);
        assert!(frame.value_textual.is_empty());

        frame.set_value(None);
        assert_eq!(frame, DataFrame::default());
    }

    #[test]
    fn set_value_leaves_sources_alone() {
        let mut frame = DataFrame::default();
        frame.extend_sources([("meter", "m-1")]).expect("extend");
        frame.set_value(Some(FrameValue::from(vec![9u8])));
        assert_eq!(frame.source.len(), 1);
        assert_eq!(frame.value().expect("value"), Some(FrameValue::from(&[9u8][..])));
    }

    #[test]
    fn payload_kind_reports_raw_discriminant() {
        let frame = DataFrame {
            payload: -1,
            ..DataFrame::default()
        };
        match frame.payload_kind() {
            Err(FrameError::UnknownPayloadKind { discriminant }) => assert_eq!(discriminant, -1),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn failed_reads_are_repeatable_and_leave_frame_untouched() {
        let frame = DataFrame {
            payload: 99,
            value_textual: "kept".into(),
            ..DataFrame::default()
        };
        let before = frame.clone();
        let first = frame.value().unwrap_err().to_string();
        let second = frame.value().unwrap_err().to_string();
        assert_eq!(first, second);
        assert!(frame.payload_kind().is_err());
        assert_eq!(frame, before);
    }
}
