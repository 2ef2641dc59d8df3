//! Core utilities and types for the tscrud resource scaffolder.
//!
//! This crate provides the pieces every other tscrud crate builds on:
//! resource name validation and derivation, the file writing layer and the
//! project configuration.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;
mod naming;
mod utils;

pub use config::{CONFIG_FILE, Config, DEFAULT_AUTH_MIDDLEWARE, DEFAULT_SCHEMA};
pub use error::{Error, Result};
// File operations
pub use file::{
    File, FileLock, GeneratedFile, ensure_dir, read_optional, replace_if_unchanged, write_file,
};
// Resource naming
pub use naming::{
    CANONICAL_NAMING, DerivedIdentifiers, LEGACY_NAMING, NamingConvention, NamingScheme,
    ResourceName,
};
// String utilities
pub use utils::{
    prefix_uppercase, to_camel_case, to_kebab_case, to_pascal_case,
    to_screaming_snake_case,
};
