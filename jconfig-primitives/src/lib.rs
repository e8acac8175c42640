//! Core shared types for JSON configuration handles.

#![warn(missing_docs, clippy::pedantic)]

mod error;
mod location;

/// Error type and result alias shared across the workspace.
pub use error::{Error, Result};
/// Directory and file name pair identifying a configuration file.
pub use location::ConfigLocation;
