//! Index files that collect every generated resource.
//!
//! Unlike per-resource files, index files are never regenerated. Each run
//! merges one registration into the existing text (see [`merge`]).

mod entity_index;
mod merge;
mod route_index;

use std::path::{Path, PathBuf};

pub use entity_index::{ENTITY_EXPORT_MARKER, EntityIndex};
pub use merge::{Merge, MergeOutcome, Placement, Registration, merge};
pub use route_index::{ROUTES_EXPORT_MARKER, RouteIndex};
use tracing::info;
use tscrud_core::{File, FileLock, read_optional, replace_if_unchanged};

/// Result of updating one index file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexUpdate {
    pub path: PathBuf,
    pub outcome: MergeOutcome,
}

/// An index file that resources are registered into.
pub trait IndexFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Lines registering the current resource
    fn registration(&self) -> Registration;

    /// Compute the merged content without writing it.
    fn plan(&self, base: &Path) -> tscrud_core::Result<(Option<String>, Merge)> {
        let path = self.path(base);
        let current = read_optional(&path)?;
        let merged = merge(current.as_deref().unwrap_or_default(), &self.registration());
        Ok((current, merged))
    }

    /// The file as it would look after the update, if the update changes it.
    fn preview(&self, base: &Path) -> tscrud_core::Result<Option<File>> {
        let (_, merged) = self.plan(base)?;
        Ok(merged
            .outcome
            .changes_text()
            .then(|| File::new(self.path(base), merged.text)))
    }

    /// Merge the registration into the file on disk.
    ///
    /// A missing file is treated as empty and created. Nothing is written when
    /// the resource is already registered. The file stays locked from the read
    /// until the write completes.
    fn update(&self, base: &Path) -> tscrud_core::Result<IndexUpdate> {
        let path = self.path(base);
        let _lock = FileLock::acquire(&path)?;
        let (current, merged) = self.plan(base)?;

        if merged.outcome.changes_text() {
            replace_if_unchanged(&path, current.as_deref(), &merged.text)?;
        }

        match merged.outcome {
            MergeOutcome::AlreadyRegistered => {
                info!(path = %path.display(), "already registered");
            }
            MergeOutcome::Registered => {
                info!(path = %path.display(), "registered");
            }
            // surfaced to the user through the returned outcome
            MergeOutcome::MarkerMissing { marker } => {
                info!(path = %path.display(), marker, "marker not found, only the import was added");
            }
        }

        Ok(IndexUpdate {
            path,
            outcome: merged.outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{
        fs,
        io::{self, Write},
        sync::{Arc, Mutex},
    };

    use tempfile::TempDir;
    use tracing::Level;
    use tscrud_core::{DerivedIdentifiers, Error, NamingScheme};

    use super::*;

    /// Log sink shared with the subscriber.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn ids(raw: &str) -> DerivedIdentifiers {
        DerivedIdentifiers::from_raw(raw, NamingScheme::Canonical).unwrap()
    }

    #[test]
    fn test_update_releases_lock() {
        let temp = TempDir::new().unwrap();
        let ids = ids("order");
        let index = EntityIndex::new(&ids);

        let update = index.update(temp.path()).unwrap();

        assert_eq!(update.outcome, MergeOutcome::Registered);
        assert!(!temp.path().join("src/infra/entity/index.ts.lock").exists());
    }

    #[test]
    fn test_update_refuses_locked_index() {
        let temp = TempDir::new().unwrap();
        let ids = ids("order");
        let index = RouteIndex::new(&ids, "isAuthenticated");
        let path = index.path(temp.path());

        let held = FileLock::acquire(&path).unwrap();
        let err = index.update(temp.path()).unwrap_err();

        assert!(matches!(*err, Error::Locked { .. }));
        assert!(!path.exists());
        assert!(held.path().exists());

        drop(held);
        index.update(temp.path()).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn test_missing_marker_is_not_logged_as_warning() {
        let temp = TempDir::new().unwrap();
        let ids = ids("order");
        let index = RouteIndex::new(&ids, "isAuthenticated");
        fs::create_dir_all(temp.path().join("src/routes")).unwrap();
        fs::write(index.path(temp.path()), "const routes = Router();\n").unwrap();

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::WARN)
            .with_writer(move || writer.clone())
            .finish();

        let update =
            tracing::subscriber::with_default(subscriber, || index.update(temp.path()).unwrap());

        assert!(matches!(update.outcome, MergeOutcome::MarkerMissing { .. }));
        assert!(captured.0.lock().unwrap().is_empty());
    }
}
