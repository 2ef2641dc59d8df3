//! Resource generator: renders the four resource files and updates both indexes.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use tracing::debug;
use tscrud_core::{Config, DerivedIdentifiers, File, GeneratedFile, ensure_dir};

use crate::{
    aggregate::{EntityIndex, IndexFile, IndexUpdate, RouteIndex},
    files::{ControllerTs, EntityTs, RESOURCE_DIRS, RepositoryTs, RouteTs},
};

/// Result of generating a resource.
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Resource files written, in generation order
    pub written: Vec<PathBuf>,
    /// Entity index update followed by route index update
    pub indexes: Vec<IndexUpdate>,
}

/// Generator for one resource.
pub struct Generator {
    ids: DerivedIdentifiers,
    schema: String,
    auth_middleware: String,
}

impl Generator {
    pub fn new(ids: DerivedIdentifiers, config: &Config) -> Self {
        Self {
            ids,
            schema: config.schema().to_string(),
            auth_middleware: config.auth_middleware().to_string(),
        }
    }

    pub fn identifiers(&self) -> &DerivedIdentifiers {
        &self.ids
    }

    /// Entity, controller, repository and route files, in that order.
    pub fn resource_files(&self) -> Vec<Box<dyn GeneratedFile + '_>> {
        vec![
            Box::new(EntityTs::new(&self.ids, &self.schema)),
            Box::new(ControllerTs::new(&self.ids)),
            Box::new(RepositoryTs::new(&self.ids)),
            Box::new(RouteTs::new(&self.ids)),
        ]
    }

    /// Entity index followed by route index.
    pub fn index_files(&self) -> Vec<Box<dyn IndexFile + '_>> {
        vec![
            Box::new(EntityIndex::new(&self.ids)),
            Box::new(RouteIndex::new(&self.ids, &self.auth_middleware)),
        ]
    }

    /// Files a run would write, without touching disk.
    ///
    /// Index files are read to compute their merged content and are only
    /// listed when the merge would change them.
    pub fn preview(&self, base: &Path) -> Result<Vec<File>> {
        let mut files: Vec<File> = self
            .resource_files()
            .iter()
            .map(|file| File::from_generated(base, file.as_ref()))
            .collect();

        for index in self.index_files() {
            let path = index.path(base);
            if let Some(file) = index
                .preview(base)
                .wrap_err_with(|| format!("Failed to read {}", path.display()))?
            {
                files.push(file);
            }
        }

        Ok(files)
    }

    /// Generate the resource into the project rooted at `base`.
    ///
    /// Steps run in a fixed order and stop at the first error; files written
    /// before the failure stay on disk.
    pub fn generate(&self, base: &Path) -> Result<GenerateResult> {
        for dir in RESOURCE_DIRS {
            let dir = base.join(dir);
            ensure_dir(&dir)
                .wrap_err_with(|| format!("Failed to create {}", dir.display()))?;
        }

        let mut result = GenerateResult::default();

        for file in self.resource_files() {
            let path = file
                .write(base)
                .wrap_err_with(|| format!("Failed to write {}", file.path(base).display()))?;
            result.written.push(path);
        }

        for index in self.index_files() {
            let update = index
                .update(base)
                .wrap_err_with(|| format!("Failed to update {}", index.path(base).display()))?;
            result.indexes.push(update);
        }

        debug!(
            class = %self.ids.class_name,
            written = result.written.len(),
            "generated resource"
        );

        Ok(result)
    }
}
