//! ---
//! ems_section: "02-messaging-ipc-data-model"
//! ems_subsection: "module"
//! ems_type: "source"
//! ems_scope: "code"
//! ems_description: "Data frame protobuf types, limits and stream codec."
//! ems_version: "v0.0.0-prealpha"
//! ems_owner: "tbd"
//! ---
//! Data frame schema for the R-EMS acquisition path.
//!
//! The message types mirror `proto/ems/frame/v1/dataframe.proto` field for
//! field and are declared with the prost derives directly, so the crate builds
//! without `protoc`. Keep both in sync when the schema changes. Behaviour on
//! top of these types (typed value access, annotation maps) lives in
//! `r-ems-frame`; this crate only owns shape, capacity and framing.

pub mod limits;
pub mod stream;

pub mod ems {
    pub mod frame {
        pub mod v1 {
            /// Provenance annotation attached to a frame.
            #[derive(Clone, PartialEq, Eq, Hash, ::prost::Message)]
            pub struct Source {
                #[prost(string, tag = "1")]
                pub field: ::prost::alloc::string::String,
                #[prost(string, tag = "2")]
                pub value: ::prost::alloc::string::String,
            }

            /// Tagged value with an ordered list of source annotations.
            ///
            /// `payload` selects which of the `value_*` fields is meaningful.
            /// It is kept as the raw wire integer so that discriminants
            /// written by newer producers survive decoding.
            #[derive(Clone, PartialEq, ::prost::Message)]
            pub struct DataFrame {
                #[prost(enumeration = "data_frame::Payload", tag = "1")]
                pub payload: i32,
                #[prost(sint64, tag = "2")]
                pub value_numeric: i64,
                #[prost(double, tag = "3")]
                pub value_measurement: f64,
                #[prost(string, tag = "4")]
                pub value_textual: ::prost::alloc::string::String,
                #[prost(bytes = "vec", tag = "5")]
                pub value_blob: ::prost::alloc::vec::Vec<u8>,
                #[prost(message, repeated, tag = "6")]
                pub source: ::prost::alloc::vec::Vec<Source>,
            }

            /// Nested types of [`DataFrame`].
            pub mod data_frame {
                #[derive(
                    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration,
                )]
                #[repr(i32)]
                pub enum Payload {
                    Empty = 0,
                    Number = 1,
                    Real = 2,
                    Text = 3,
                    Binary = 4,
                }

                impl Payload {
                    /// Name of the variant as declared in the `.proto` file.
                    pub fn as_str_name(&self) -> &'static str {
                        match self {
                            Payload::Empty => "EMPTY",
                            Payload::Number => "NUMBER",
                            Payload::Real => "REAL",
                            Payload::Text => "TEXT",
                            Payload::Binary => "BINARY",
                        }
                    }

                    /// Resolve a variant from its `.proto` name.
                    pub fn from_str_name(value: &str) -> Option<Self> {
                        match value {
                            "EMPTY" => Some(Self::Empty),
                            "NUMBER" => Some(Self::Number),
                            "REAL" => Some(Self::Real),
                            "TEXT" => Some(Self::Text),
                            "BINARY" => Some(Self::Binary),
                            _ => None,
                        }
                    }
                }
            }
        }
    }
}

pub use ems::frame::v1::data_frame::Payload;
pub use ems::frame::v1::{DataFrame, Source};
pub use limits::{append_source, MAX_SOURCES};
pub use stream::{decode_frames, encode_frames};

/// Shared result type for schema level operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Failures raised by the schema layer itself.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Appending would take a frame past the writer-side annotation cap.
    #[error("source annotation limit exceeded: at most {limit} entries per frame")]
    AnnotationLimitExceeded { limit: usize },
    /// Input bytes are not a valid frame stream.
    #[error("failed to decode data frame: {0}")]
    Decode(#[from] prost::DecodeError),
    /// Output buffer could not hold the encoded frame.
    #[error("failed to encode data frame: {0}")]
    Encode(#[from] prost::EncodeError),
}
