//! Small builders for TypeScript statements shared by templates and index files.

mod imports;

pub use imports::Import;
