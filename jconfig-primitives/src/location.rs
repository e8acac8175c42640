//! Configuration file location.

use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Directory and file name of a configuration file.
///
/// Construction never touches the file system; [`ConfigLocation::validate`]
/// is checked by the handle before every load and save.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ConfigLocation {
    dir: PathBuf,
    filename: String,
}

impl ConfigLocation {
    /// Creates a location from a separate directory and file name.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            filename: filename.into(),
        }
    }

    /// Splits a combined path into directory and file name.
    ///
    /// A bare file name such as `config.json` resolves to the current
    /// directory `.`. Paths without a final component (`/`, `..`, the empty
    /// path) and file names that are not valid UTF-8 produce an empty file
    /// name and fail validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use jconfig_primitives::ConfigLocation;
    /// use std::path::Path;
    ///
    /// let location = ConfigLocation::from_path("/etc/app/config.json");
    /// assert_eq!(location.dir(), Path::new("/etc/app"));
    /// assert_eq!(location.filename(), "config.json");
    ///
    /// let bare = ConfigLocation::from_path("config.json");
    /// assert_eq!(bare.dir(), Path::new("."));
    /// ```
    #[must_use]
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let filename = path
            .file_name()
            .and_then(std::ffi::OsStr::to_str)
            .map(str::to_owned)
            .unwrap_or_default();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        Self { dir, filename }
    }

    /// Returns the directory containing the configuration file.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns just the file name of the configuration file.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Returns the full path of the configuration file.
    #[must_use]
    pub fn file_path(&self) -> PathBuf {
        self.dir.join(&self.filename)
    }

    /// Checks that both the directory and the file name are non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] when either part is empty.
    pub fn validate(&self) -> Result<()> {
        if self.dir.as_os_str().is_empty() || self.filename.is_empty() {
            return Err(Error::InvalidPath {
                dir: self.dir.clone(),
                filename: self.filename.clone(),
            });
        }
        Ok(())
    }
}

impl Display for ConfigLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.file_path().display(), f)
    }
}

impl From<&Path> for ConfigLocation {
    fn from(value: &Path) -> Self {
        Self::from_path(value)
    }
}

impl From<PathBuf> for ConfigLocation {
    fn from(value: PathBuf) -> Self {
        Self::from_path(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_path_joins_dir_and_filename() {
        let location = ConfigLocation::new("/home/user/.config/app", "settings.json");
        let expected = format!(
            "/home/user/.config/app{}settings.json",
            std::path::MAIN_SEPARATOR
        );
        assert_eq!(location.file_path(), PathBuf::from(expected));
        assert_eq!(location.dir(), Path::new("/home/user/.config/app"));
        assert_eq!(location.filename(), "settings.json");
    }

    #[test]
    fn bare_filename_resolves_to_current_dir() {
        let location = ConfigLocation::from_path("config.json");
        assert_eq!(location.dir(), Path::new("."));
        assert_eq!(location.filename(), "config.json");
        assert!(location.validate().is_ok());
    }

    #[test]
    fn relative_path_keeps_its_parent() {
        let location = ConfigLocation::from_path("conf/app/config.json");
        assert_eq!(location.dir(), Path::new("conf/app"));
        assert_eq!(location.filename(), "config.json");
    }

    #[test]
    fn path_without_file_name_is_invalid() {
        for raw in ["", "/", ".."] {
            let location = ConfigLocation::from_path(raw);
            assert!(location.filename().is_empty(), "{raw:?}");
            let err = location.validate().expect_err("should be invalid");
            assert!(matches!(err, Error::InvalidPath { .. }));
        }
    }

    #[test]
    fn empty_parts_fail_validation() {
        let no_dir = ConfigLocation::new("", "config.json");
        assert!(matches!(no_dir.validate(), Err(Error::InvalidPath { .. })));

        let no_file = ConfigLocation::new(".", "");
        assert!(matches!(no_file.validate(), Err(Error::InvalidPath { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_file_name_is_invalid() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw = Path::new("/etc/app").join(OsStr::from_bytes(b"conf\xffig.json"));
        let location = ConfigLocation::from_path(&raw);
        assert_eq!(location.dir(), Path::new("/etc/app"));
        assert!(location.filename().is_empty());
        let err = location.validate().expect_err("should be invalid");
        assert!(matches!(err, Error::InvalidPath { .. }));
    }
}
