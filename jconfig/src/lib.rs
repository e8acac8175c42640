//! Typed JSON configuration files that create themselves on first use.
//!
//! [`JConfig`] binds a file location to your own configuration type. The
//! first [`JConfig::load`] creates the directory and writes the default
//! content you supply; every load parses the file into your type, with
//! every field the file leaves out taken from the zero-initialised value,
//! so collections missing from the file come back empty rather than absent.
//! [`JConfig::save`] writes the value back as indented JSON.
//!
//! Configuration structs derive [`ZeroInit`] and carry `#[serde(default)]`.
//! The derive implements `Default` through `zero_init`, and serde uses it for
//! missing fields at every level, including structs inside sequences. The
//! derive rejects named-field structs without `#[serde(default)]`.
//!
//! ```
//! use jconfig::{JConfig, ZeroInit};
//! use serde::{Deserialize, Serialize};
//!
//! const DEFAULT_CONTENT: &str = r#"{
//!     "server": "127.0.0.1:8088"
//! }
//! "#;
//!
//! #[derive(Serialize, Deserialize, ZeroInit)]
//! #[serde(default)]
//! struct Config {
//!     server: String,
//!     peers: Vec<String>,
//! }
//!
//! # fn main() -> jconfig::Result<()> {
//! # let dir = std::env::temp_dir().join(format!("jconfig-doc-{}", std::process::id()));
//! let mut config = JConfig::<Config>::with_dir(&dir, "config.json");
//!
//! let data = config.load(DEFAULT_CONTENT)?;
//! assert_eq!(data.server, "127.0.0.1:8088");
//! assert!(data.peers.is_empty());
//!
//! data.peers.push("10.0.0.2:8088".to_owned());
//! config.save()?;
//! # std::fs::remove_dir_all(dir).ok();
//! # Ok(())
//! # }
//! ```
//!
//! Cargo features: `store` (the handle, on by default) and `derive`
//! (`#[derive(ZeroInit)]`, on by default).

#![warn(missing_docs, clippy::pedantic)]

/// Locations and errors shared by every component.
pub use jconfig_primitives::{ConfigLocation, Error, Result};

/// Configuration handle and zero-initialisation (enabled by `store` feature).
#[cfg(feature = "store")]
pub use jconfig_store::{JConfig, ZeroInit};

/// JSON output helpers (enabled by `store` feature).
#[cfg(feature = "store")]
pub use jconfig_store::format;

/// Derive macro for [`ZeroInit`] (enabled by `derive` feature).
#[cfg(feature = "derive")]
pub use jconfig_macros::ZeroInit;
