//! ---
//! ems_section: "01-core-functionality"
//! ems_subsection: "module"
//! ems_type: "source"
//! ems_scope: "code"
//! ems_description: "Shared primitives and utilities for the core runtime."
//! ems_version: "v0.0.0-prealpha"
//! ems_owner: "tbd"
//! ---
//! Shared configuration and logging setup for the R-EMS frame tools.

pub mod config;
pub mod logging;

pub use config::{BinaryEncoding, FrameCtlConfig, LoggingConfig, OutputConfig, OutputFormat};
pub use logging::{init_tracing, LogFormat, LoggingGuard};
