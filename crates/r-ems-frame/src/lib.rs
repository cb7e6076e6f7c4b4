//! ---
//! ems_section: "02-messaging-ipc-data-model"
//! ems_subsection: "module"
//! ems_type: "source"
//! ems_scope: "code"
//! ems_description: "Typed accessors over data frame messages."
//! ems_version: "v0.0.0-prealpha"
//! ems_owner: "tbd"
//! ---
//! Accessors for [`DataFrame`] messages.
//!
//! The schema keeps a frame's payload as a discriminant plus one flat field
//! per payload kind. [`DataFrameExt`] is the single place where those fields
//! are turned into a [`FrameValue`] and back, and where the ordered `source`
//! list is exposed as a map. The trait is implemented on the schema type
//! itself; no wrapper or derived message type is introduced.
#![warn(missing_docs)]

pub mod ext;
pub mod sources;
pub mod value;

pub use ext::DataFrameExt;
pub use r_ems_frame_schema::{DataFrame, Payload, SchemaError, Source};
pub use sources::SourceMap;
pub use value::FrameValue;

/// Shared result type for frame accessors.
pub type Result<T> = std::result::Result<T, FrameError>;

/// Errors surfaced by the frame accessors.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The frame's discriminant is not one this build understands.
    #[error("unknown payload kind: {discriminant}")]
    UnknownPayloadKind {
        /// Raw discriminant as carried on the wire.
        discriminant: i32,
    },
    /// Raised by the schema layer, passed through unchanged.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}
