//! The configuration handle.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use crate::format::{SAVE_INDENT, SAVE_PREFIX, to_prefixed_vec};
use crate::{ConfigLocation, Error, Result, ZeroInit, fs};

/// Binds a configuration file location to a configuration shape `T` and the
/// value most recently loaded from it.
///
/// The handle is either unloaded (no data) or loaded. [`JConfig::load`]
/// moves it to loaded and replaces the data on every call;
/// [`JConfig::save`] writes the current data back. Callers mutate the data
/// in between through the reference returned by `load` or through
/// [`JConfig::data_mut`].
///
/// The handle does no locking; concurrent `load`/`save` calls need external
/// synchronisation.
#[derive(Clone, Debug)]
pub struct JConfig<T> {
    location: ConfigLocation,
    data: Option<T>,
}

impl<T> JConfig<T> {
    /// Creates a handle from a combined path.
    ///
    /// A bare file name is placed in the current directory. No I/O happens
    /// until [`JConfig::load`].
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::from_location(ConfigLocation::from_path(path))
    }

    /// Creates a handle from a separate directory and file name.
    #[must_use]
    pub fn with_dir(dir: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        Self::from_location(ConfigLocation::new(dir, filename))
    }

    /// Creates a handle for an existing location.
    #[must_use]
    pub const fn from_location(location: ConfigLocation) -> Self {
        Self {
            location,
            data: None,
        }
    }

    /// Returns the location of the configuration file.
    #[must_use]
    pub const fn location(&self) -> &ConfigLocation {
        &self.location
    }

    /// Returns the full path of the configuration file.
    #[must_use]
    pub fn file_path(&self) -> PathBuf {
        self.location.file_path()
    }

    /// Returns the directory containing the configuration file.
    #[must_use]
    pub fn dir(&self) -> &Path {
        self.location.dir()
    }

    /// Returns just the file name of the configuration file.
    #[must_use]
    pub fn filename(&self) -> &str {
        self.location.filename()
    }

    /// Returns the loaded configuration, or `None` before the first
    /// successful load.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Returns the loaded configuration mutably.
    #[must_use]
    pub const fn data_mut(&mut self) -> Option<&mut T> {
        self.data.as_mut()
    }

    /// Returns `true` once a load has succeeded.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.data.is_some()
    }

    /// Consumes the handle, returning the loaded configuration.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

impl<T> JConfig<T>
where
    T: Serialize + DeserializeOwned + ZeroInit,
{
    /// Loads the configuration file, creating it first when it is missing.
    ///
    /// Missing directories are created with their parents. A missing file is
    /// created holding `default_content` verbatim. The file's JSON is then
    /// deserialised into `T`; with `#[serde(default)]` on the shape, each
    /// field the file leaves out takes its value from `T::zero_init()`
    /// (empty containers, allocated optional structures), at every nesting
    /// level including sequence elements. The result replaces the handle's
    /// data and a reference to it is returned; a failed load leaves the
    /// previous data untouched.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPath`] if the directory or file name is empty.
    /// - [`Error::DirectoryCreate`], [`Error::FileStat`],
    ///   [`Error::FileCreate`], [`Error::FileWrite`] while preparing the file.
    /// - [`Error::FileOpen`], [`Error::FileRead`] while reading it.
    /// - [`Error::Deserialize`] for malformed JSON or a shape mismatch, with
    ///   the line and column reported by `serde_json`.
    pub fn load(&mut self, default_content: &str) -> Result<&mut T> {
        self.location.validate()?;
        let path = self.location.file_path();

        fs::ensure_dir(self.location.dir())?;
        let created = fs::ensure_file(&path, default_content)?;

        let bytes = fs::read_file(&path)?;
        trace!(path = ?path, len = bytes.len(), "read config file");

        let value: T = serde_json::from_slice(&bytes).map_err(|source| Error::Deserialize {
            path: path.clone(),
            source,
        })?;

        debug!(path = ?path, created, "config loaded");
        Ok(self.data.insert(value))
    }

    /// Writes the current configuration to the file, replacing its content.
    ///
    /// Output is indented JSON in field declaration order. The file is
    /// truncated before writing, so a failed write can leave it partially
    /// written.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPath`] if the directory or file name is empty.
    /// - [`Error::NotLoaded`] if nothing has been loaded yet.
    /// - [`Error::Serialize`] if the data cannot be represented as JSON.
    /// - [`Error::FileCreate`], [`Error::FileWrite`] on I/O failure.
    pub fn save(&self) -> Result<()> {
        self.location.validate()?;
        let path = self.location.file_path();

        let data = self.data.as_ref().ok_or_else(|| Error::NotLoaded {
            path: path.clone(),
        })?;
        let bytes = to_prefixed_vec(data, SAVE_PREFIX, SAVE_INDENT)
            .map_err(|source| Error::Serialize { source })?;

        fs::write_file(&path, &bytes)?;
        debug!(path = ?path, len = bytes.len(), "config saved");
        Ok(())
    }
}
