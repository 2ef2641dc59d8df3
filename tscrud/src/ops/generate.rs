//! Generate operation - scaffold one resource and register it.

use std::path::Path;

use eyre::{Context, Result};
use tracing::info;
use tscrud_codegen::Generator;
use tscrud_core::{Config, ResourceName};

use crate::reports::{
    GenerateReport, GenerationResult, IndexChange, PreviewFile, PreviewResult, WrittenResult,
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Project root the `src/` tree lives in.
    pub root: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(
    name: &ResourceName,
    config: &Config,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let ids = config.naming().convention().derive(name);
    info!(
        resource = %name,
        class = %ids.class_name,
        file = %ids.file_name,
        naming = %config.naming(),
        "generating resource"
    );

    let generator = Generator::new(ids, config);
    let result = if opts.dry_run {
        let files = generator
            .preview(opts.root)
            .wrap_err("Failed to preview resource")?
            .into_iter()
            .map(|f| PreviewFile {
                path: relative(opts.root, f.path()),
                content: f.content().to_string(),
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let result = generator
            .generate(opts.root)
            .wrap_err("Failed to generate resource")?;

        GenerationResult::Written(WrittenResult {
            files: result
                .written
                .iter()
                .map(|p| relative(opts.root, p))
                .collect(),
            indexes: result
                .indexes
                .iter()
                .map(|update| IndexChange {
                    path: relative(opts.root, &update.path),
                    outcome: update.outcome,
                })
                .collect(),
        })
    };

    Ok(GenerateReport {
        class_name: generator.identifiers().class_name.clone(),
        result,
    })
}

/// Display `path` relative to the project root when possible.
fn relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
        .replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use tscrud_codegen::MergeOutcome;

    use super::*;

    fn run(root: &Path, raw: &str, dry_run: bool) -> GenerateReport {
        let name = ResourceName::parse(raw).unwrap();
        generate(&name, &Config::default(), GenerateOptions { root, dry_run }).unwrap()
    }

    #[test]
    fn test_generate_writes_and_reports() {
        let temp = TempDir::new().unwrap();
        let report = run(temp.path(), "order", false);

        assert_eq!(report.class_name, "Order");
        let GenerationResult::Written(written) = report.result else {
            panic!("expected files to be written");
        };
        assert_eq!(
            written.files,
            vec![
                "src/infra/entity/order.ts",
                "src/controllers/order-controller.ts",
                "src/repositories/order-repository.ts",
                "src/routes/order.routes.ts",
            ]
        );
        assert_eq!(written.indexes[0].path, "src/infra/entity/index.ts");
        assert_eq!(written.indexes[0].outcome, MergeOutcome::Registered);
        assert_eq!(written.indexes[1].path, "src/routes/index.ts");
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let report = run(temp.path(), "orderItem", true);

        let GenerationResult::Preview(preview) = report.result else {
            panic!("expected a preview");
        };
        assert_eq!(preview.files.len(), 6);
        assert_eq!(preview.files[0].path, "src/infra/entity/order-item.ts");
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_relative_falls_back_to_full_path() {
        assert_eq!(
            relative(Path::new("/a"), Path::new("/a/src/x.ts")),
            "src/x.ts"
        );
        assert_eq!(relative(Path::new("/a"), Path::new("/b/x.ts")), "/b/x.ts");
    }
}
