//! Snapshot tests for the generated resource files.
//!
//! These tests verify that the generated TypeScript matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::path::Path;

use tscrud_codegen::Generator;
use tscrud_core::{Config, DerivedIdentifiers, NamingScheme};

/// Render every file for `raw` and return (relative path, content) pairs.
fn generate_files(raw: &str) -> Vec<(String, String)> {
    let ids = DerivedIdentifiers::from_raw(raw, NamingScheme::Canonical)
        .expect("Failed to derive identifiers");
    let generator = Generator::new(ids, &Config::default());
    let base = Path::new("");

    generator
        .resource_files()
        .iter()
        .map(|file| {
            (
                file.path(base).to_string_lossy().replace('\\', "/"),
                file.render(),
            )
        })
        .collect()
}

/// Get a specific file from the generated output.
fn get_file<'a>(files: &'a [(String, String)], path: &str) -> Option<&'a str> {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
}

#[test]
fn test_order_entity() {
    let files = generate_files("order");
    let entity = get_file(&files, "src/infra/entity/order.ts").expect("entity not found");
    insta::assert_snapshot!("order_entity", entity);
}

#[test]
fn test_order_controller() {
    let files = generate_files("order");
    let controller =
        get_file(&files, "src/controllers/order-controller.ts").expect("controller not found");
    insta::assert_snapshot!("order_controller", controller);
}

#[test]
fn test_order_repository() {
    let files = generate_files("order");
    let repository =
        get_file(&files, "src/repositories/order-repository.ts").expect("repository not found");
    insta::assert_snapshot!("order_repository", repository);
}

#[test]
fn test_order_route() {
    let files = generate_files("order");
    let route = get_file(&files, "src/routes/order.routes.ts").expect("route not found");
    insta::assert_snapshot!("order_route", route);
}

#[test]
fn test_rendering_is_deterministic() {
    assert_eq!(generate_files("orderItem"), generate_files("orderItem"));
}
