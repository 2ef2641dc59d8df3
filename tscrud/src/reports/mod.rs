//! Report data structures for commands.
//!
//! Operations collect what happened into a report, then the command renders
//! it to an Output target.

mod generate;
mod output;

pub use generate::{
    GenerateReport, GenerationResult, IndexChange, PreviewFile, PreviewResult, WrittenResult,
};
pub use output::{Report, TerminalOutput};
