//! File system steps of the load and save cycle.

use std::fs::{self, DirBuilder, File};
use std::io::{self, Read, Write};
use std::path::Path;

use tracing::debug;

use crate::{Error, Result};

/// Mode requested for directories created on load, before the umask applies.
#[cfg(unix)]
const DIR_MODE: u32 = 0o777;

/// Creates `dir` and any missing parents.
pub(crate) fn ensure_dir(dir: &Path) -> Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }

    builder.create(dir).map_err(|source| Error::DirectoryCreate {
        path: dir.to_path_buf(),
        source,
    })?;
    debug!(path = ?dir, "config directory ready");
    Ok(())
}

/// Creates `path` holding `default_content` unless it already exists.
///
/// Returns `true` when the file was created.
pub(crate) fn ensure_file(path: &Path, default_content: &str) -> Result<bool> {
    match fs::metadata(path) {
        Ok(_) => Ok(false),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = ?path, "config file missing, writing default content");
            write_file(path, default_content.as_bytes())?;
            Ok(true)
        }
        Err(source) => Err(Error::FileStat {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Reads the whole file.
pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|source| Error::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(bytes)
}

/// Truncates (or creates) `path` and writes `bytes` to it.
///
/// The write is not atomic: a failure part-way leaves a truncated file.
pub(crate) fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|source| Error::FileCreate {
        path: path.to_path_buf(),
        source,
    })?;

    file.write_all(bytes)
        .and_then(|()| file.flush())
        .map_err(|source| Error::FileWrite {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use uuid::Uuid;

    use super::*;

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("jconfig-fs-{}", Uuid::new_v4()))
    }

    #[test]
    fn ensure_dir_creates_parents() {
        let root = temp_dir();
        let nested = root.join("a").join("b");

        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // Existing directories are fine.
        ensure_dir(&nested).unwrap();

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn ensure_dir_fails_below_a_file() {
        let root = temp_dir();
        fs::create_dir_all(&root).unwrap();
        let blocker = root.join("blocker");
        fs::write(&blocker, b"x").unwrap();

        let err = ensure_dir(&blocker.join("sub")).expect_err("should fail");
        assert!(matches!(err, Error::DirectoryCreate { .. }));

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn ensure_file_writes_default_only_once() {
        let root = temp_dir();
        fs::create_dir_all(&root).unwrap();
        let path = root.join("config.json");

        assert!(ensure_file(&path, "{\"a\": 1}").unwrap());
        assert!(!ensure_file(&path, "{\"a\": 2}").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"a\": 1}");

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn stat_below_a_regular_file_fails() {
        let root = temp_dir();
        fs::create_dir_all(&root).unwrap();
        let blocker = root.join("blocker");
        fs::write(&blocker, b"x").unwrap();

        // ENOTDIR is not "not found", so no default file is attempted.
        let err = ensure_file(&blocker.join("config.json"), "{}").expect_err("should fail");
        assert!(matches!(err, Error::FileStat { .. }));

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn write_onto_a_directory_is_create_error() {
        let root = temp_dir();
        let target = root.join("config.json");
        fs::create_dir_all(&target).unwrap();

        let err = write_file(&target, b"{}").expect_err("should fail");
        assert!(matches!(err, Error::FileCreate { .. }));

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn read_missing_file_is_open_error() {
        let path = temp_dir().join("absent.json");
        let err = read_file(&path).expect_err("should fail");
        assert!(matches!(err, Error::FileOpen { .. }));
    }

    #[test]
    fn write_file_replaces_content() {
        let root = temp_dir();
        fs::create_dir_all(&root).unwrap();
        let path = root.join("config.json");

        write_file(&path, b"a much longer first version").unwrap();
        write_file(&path, b"short").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"short");

        let _ = fs::remove_dir_all(root);
    }
}
