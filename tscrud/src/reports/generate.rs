//! Generate command report data structures.

use tscrud_codegen::MergeOutcome;

use super::output::{Output, Report};

/// Report data from scaffolding one resource.
#[derive(Debug)]
pub struct GenerateReport {
    /// Class name of the generated resource.
    pub class_name: String,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Resource files, relative to the project root.
    pub files: Vec<String>,
    /// Index files the resource was merged into.
    pub indexes: Vec<IndexChange>,
}

/// What happened to one index file.
#[derive(Debug)]
pub struct IndexChange {
    pub path: String,
    pub outcome: MergeOutcome,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be written.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        for index in &written.indexes {
            if let MergeOutcome::MarkerMissing { marker } = index.outcome {
                out.warning(&format!(
                    "`{}` not found in {}, add the registration manually",
                    marker, index.path
                ));
            }
        }

        out.preformatted(&format!(
            "Resource {} created successfully!",
            self.class_name
        ));
        out.newline();

        out.section("Files");
        for file in &written.files {
            out.added_item(file);
        }

        if !written.indexes.is_empty() {
            out.newline();
            out.section("Indexes");
            for index in &written.indexes {
                let status = match index.outcome {
                    MergeOutcome::Registered => "registered",
                    MergeOutcome::AlreadyRegistered => "already registered",
                    MergeOutcome::MarkerMissing { .. } => "import only",
                };
                out.list_item(&format!("{} ({})", index.path, status));
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}
