//! JSON configuration handles.
//!
//! A [`JConfig`] binds a file location to a configuration shape `T`. Loading
//! creates the directory and file (seeded with caller-supplied default
//! content) when they are missing, then deserialises the file's JSON into `T`.
//! Shapes derive [`ZeroInit`] and carry `#[serde(default)]`, so every field
//! the file leaves out starts from its zero value: empty containers and
//! allocated optional structures. Saving writes the in-memory value back as
//! indented JSON.

#![warn(missing_docs, clippy::pedantic)]

pub mod format;
mod fs;
mod handle;
mod zero;

/// Shared primitives re-exported for convenience.
pub use jconfig_primitives::{ConfigLocation, Error, Result};

/// Pretty printer used when saving.
pub use format::{PrefixedFormatter, to_prefixed_vec};
/// Configuration handle binding a location, a shape and its loaded value.
pub use handle::JConfig;
/// Zero-initialisation capability for configuration shapes.
pub use zero::ZeroInit;
