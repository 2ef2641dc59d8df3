use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::{Error, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, replacing any previous content
    fn write(&self, base: &Path) -> Result<PathBuf> {
        let path = self.path(base);
        write_file(&path, &self.render())?;
        Ok(path)
    }
}

/// Create `path` and any missing ancestors. Succeeds if it already exists.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| Error::io(path, e))
}

/// Write `content` to `path`, creating parent directories and replacing any previous content.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, content).map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Read a file as text, treating a missing file as `None`.
pub fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Exclusive hold on `<path>.lock` for the lifetime of the guard.
///
/// Runs that take the lock before reading a file cannot interleave their
/// read-modify-write cycles on it. Writers that ignore the lock are not stopped.
#[derive(Debug)]
pub struct FileLock {
    lock: PathBuf,
}

impl FileLock {
    /// Lock `path`, failing with [`Error::Locked`] when another holder exists.
    pub fn acquire(path: &Path) -> Result<Self> {
        let mut name = path.as_os_str().to_os_string();
        name.push(".lock");
        let lock = PathBuf::from(name);

        if let Some(parent) = lock.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure_dir(parent)?;
        }

        match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&lock)
        {
            Ok(_) => {
                debug!(path = %lock.display(), "acquired lock");
                Ok(Self { lock })
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(Box::new(Error::Locked {
                path: path.to_path_buf(),
                lock: lock.display().to_string(),
            })),
            Err(e) => Err(Error::io(&lock, e)),
        }
    }

    /// Path of the lock file.
    pub fn path(&self) -> &Path {
        &self.lock
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.lock) {
            warn!(path = %self.lock.display(), error = %e, "failed to remove lock");
        }
    }
}

/// Replace the content of `path` only if it still matches `expected`.
///
/// `expected` is the snapshot the new content was computed from, `None`
/// meaning the file did not exist. A new file is created exclusively; an
/// existing one is replaced through a temporary file in the same directory
/// that is renamed over the target, keeping the original permissions.
///
/// The compare and the rename are separate steps, so this narrows the race
/// with other writers but does not close it. Hold a [`FileLock`] across the
/// read and this call to exclude other tscrud runs.
pub fn replace_if_unchanged(path: &Path, expected: Option<&str>, content: &str) -> Result<()> {
    let conflict = || {
        Box::new(Error::ConcurrentModification {
            path: path.to_path_buf(),
        })
    };

    let current = read_optional(path)?;
    if current.as_deref() != expected {
        return Err(conflict());
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    ensure_dir(dir)?;

    if current.is_none() {
        let mut file = match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Err(conflict()),
            Err(e) => return Err(Error::io(path, e)),
        };
        file.write_all(content.as_bytes())
            .map_err(|e| Error::io(path, e))?;
    } else {
        let permissions = fs::metadata(path)
            .map_err(|e| Error::io(path, e))?
            .permissions();
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| Error::io(tmp.path(), e))?;
        fs::set_permissions(tmp.path(), permissions).map_err(|e| Error::io(tmp.path(), e))?;
        tmp.persist(path).map_err(|e| Error::io(path, e.error))?;
    }

    debug!(path = %path.display(), bytes = content.len(), "replaced file");
    Ok(())
}

/// A file to be generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Capture a generated file rendered against `base`
    pub fn from_generated<F: GeneratedFile + ?Sized>(base: &Path, file: &F) -> Self {
        Self::new(file.path(base), file.render())
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }
}
