//! TypeScript resource generator for tscrud.
//!
//! Given the identifiers derived from a resource name, this crate renders the
//! four files of a layered CRUD resource and registers the resource in the
//! project's entity and route indexes.
//!
//! # Usage
//!
//! ```ignore
//! use tscrud_codegen::Generator;
//! use tscrud_core::{Config, DerivedIdentifiers, NamingScheme};
//! use std::path::Path;
//!
//! let ids = DerivedIdentifiers::from_raw("order", NamingScheme::Canonical)?;
//! let generator = Generator::new(ids, &Config::default());
//!
//! // Preview files without writing
//! let files = generator.preview(Path::new("."))?;
//!
//! // Generate files to disk
//! let result = generator.generate(Path::new("."))?;
//! ```
//!
//! # Generated Output
//!
//! - `src/infra/entity/<file>.ts` - typeorm entity
//! - `src/controllers/<file>-controller.ts` - tsoa controller
//! - `src/repositories/<file>-repository.ts` - repository
//! - `src/routes/<file>.routes.ts` - express router
//! - `src/infra/entity/index.ts`, `src/routes/index.ts` - merged, never overwritten

mod generator;

pub mod aggregate;
pub mod ast;
pub mod files;

pub use aggregate::{IndexFile, IndexUpdate, MergeOutcome};
pub use generator::{GenerateResult, Generator};
