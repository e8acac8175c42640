//! Shared error definitions for configuration handles.

use std::io;
use std::path::PathBuf;

use serde_json::Error as SerdeError;
use thiserror::Error;

/// Result alias used throughout the configuration crates.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or saving a configuration file.
#[derive(Debug, Error)]
pub enum Error {
    /// The directory or the file name of the handle is empty.
    #[error("invalid config path: directory `{}`, file name `{filename}`", .dir.display())]
    InvalidPath {
        /// Configured directory.
        dir: PathBuf,
        /// Configured file name.
        filename: String,
    },

    /// The configuration directory (or one of its parents) could not be created.
    #[error("failed to create config directory {}: {source}", .path.display())]
    DirectoryCreate {
        /// Directory that was being created.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Querying the configuration file failed for a reason other than absence.
    #[error("failed to stat config file {}: {source}", .path.display())]
    FileStat {
        /// File that was queried.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The configuration file could not be created or opened for writing.
    #[error("failed to create config file {}: {source}", .path.display())]
    FileCreate {
        /// File that was being created.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The configuration file could not be opened for reading.
    #[error("failed to open config file {}: {source}", .path.display())]
    FileOpen {
        /// File that was being opened.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Reading the configuration file failed.
    #[error("failed to read config file {}: {source}", .path.display())]
    FileRead {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The file content is not valid JSON or does not match the configuration shape.
    #[error("failed to parse config file {}: {source}", .path.display())]
    Deserialize {
        /// File whose content was rejected.
        path: PathBuf,
        /// Source [`serde_json::Error`].
        #[source]
        source: SerdeError,
    },

    /// The in-memory configuration could not be serialized to JSON.
    #[error("failed to serialize config: {source}")]
    Serialize {
        /// Source [`serde_json::Error`].
        #[source]
        source: SerdeError,
    },

    /// Writing to the configuration file failed.
    #[error("failed to write config file {}: {source}", .path.display())]
    FileWrite {
        /// File that was being written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// `save` was called before any successful `load`.
    #[error("config {} has not been loaded", .path.display())]
    NotLoaded {
        /// File the handle is bound to.
        path: PathBuf,
    },
}

impl Error {
    /// Returns the file system path the error refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::DirectoryCreate { path, .. }
            | Self::FileStat { path, .. }
            | Self::FileCreate { path, .. }
            | Self::FileOpen { path, .. }
            | Self::FileRead { path, .. }
            | Self::Deserialize { path, .. }
            | Self::FileWrite { path, .. }
            | Self::NotLoaded { path } => Some(path),
            Self::InvalidPath { .. } | Self::Serialize { .. } => None,
        }
    }
}
