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
use std::fmt;

use r_ems_frame_schema::Payload;

/// Value carried by a non-empty data frame.
///
/// Text and binary payloads borrow from the frame they were read from. An
/// empty frame has no `FrameValue`; accessors return `Option::None` instead.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameValue<'a> {
    /// Integer reading (`NUMBER`).
    Number(i64),
    /// Floating point measurement (`REAL`).
    Real(f64),
    /// UTF-8 text (`TEXT`).
    Text(Cow<'a, str>),
    /// Opaque bytes (`BINARY`).
    Binary(Cow<'a, [u8]>),
}

impl FrameValue<'_> {
    /// Short lowercase name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            FrameValue::Number(_) => "number",
            FrameValue::Real(_) => "real",
            FrameValue::Text(_) => "text",
            FrameValue::Binary(_) => "binary",
        }
    }

    /// Discriminant written to the frame for this value.
    pub fn payload(&self) -> Payload {
        match self {
            FrameValue::Number(_) => Payload::Number,
            FrameValue::Real(_) => Payload::Real,
            FrameValue::Text(_) => Payload::Text,
            FrameValue::Binary(_) => Payload::Binary,
        }
    }

    /// Detach the value from the frame it borrows from.
    pub fn into_owned(self) -> FrameValue<'static> {
        match self {
            FrameValue::Number(n) => FrameValue::Number(n),
            FrameValue::Real(r) => FrameValue::Real(r),
            FrameValue::Text(s) => FrameValue::Text(Cow::Owned(s.into_owned())),
            FrameValue::Binary(b) => FrameValue::Binary(Cow::Owned(b.into_owned())),
        }
    }

    /// Integer payload, if this is a `Number`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FrameValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Measurement payload, if this is a `Real`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FrameValue::Real(r) => Some(*r),
            _ => None,
        }
    }

    /// Text payload, if this is a `Text`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FrameValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Byte payload, if this is a `Binary`.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            FrameValue::Binary(b) => Some(b),
            _ => None,
        }
    }
}

/// Binary values render as lowercase hex.
impl fmt::Display for FrameValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameValue::Number(n) => write!(f, "{n}"),
            FrameValue::Real(r) => write!(f, "{r}"),
            FrameValue::Text(s) => f.write_str(s),
            FrameValue::Binary(b) => f.write_str(&hex::encode(b)),
        }
    }
}

impl From<i64> for FrameValue<'_> {
    fn from(value: i64) -> Self {
        FrameValue::Number(value)
    }
}

impl From<f64> for FrameValue<'_> {
    fn from(value: f64) -> Self {
        FrameValue::Real(value)
    }
}

impl<'a> From<&'a str> for FrameValue<'a> {
    fn from(value: &'a str) -> Self {
        FrameValue::Text(Cow::Borrowed(value))
    }
}

impl From<String> for FrameValue<'_> {
    fn from(value: String) -> Self {
        FrameValue::Text(Cow::Owned(value))
    }
}

impl<'a> From<&'a [u8]> for FrameValue<'a> {
    fn from(value: &'a [u8]) -> Self {
        FrameValue::Binary(Cow::Borrowed(value))
    }
}

impl From<Vec<u8>> for FrameValue<'_> {
    fn from(value: Vec<u8>) -> Self {
        FrameValue::Binary(Cow::Owned(value))
    }
}
