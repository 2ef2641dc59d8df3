use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for tscrud-core operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("please provide a resource name")]
    #[diagnostic(
        code(tscrud::usage),
        help("usage: tscrud <resource-name>, e.g. 'tscrud order'")
    )]
    MissingResourceName,

    #[error("invalid resource name '{name}'")]
    #[diagnostic(
        code(tscrud::usage),
        help("{reason}. Use only letters and digits, starting with a letter, e.g. 'orderItem'.")
    )]
    InvalidResourceName { name: String, reason: String },

    #[error("failed to access '{path}'")]
    #[diagnostic(code(tscrud::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' was modified by another run")]
    #[diagnostic(
        code(tscrud::concurrent_modification),
        help("run the generator again once the other run has finished")
    )]
    ConcurrentModification { path: PathBuf },

    #[error("'{path}' is locked by another run")]
    #[diagnostic(
        code(tscrud::locked),
        help("wait for the other run to finish, or delete '{lock}' if no run is active")
    )]
    Locked { path: PathBuf, lock: String },

    #[error("failed to parse {filename}")]
    #[diagnostic(code(tscrud::config))]
    ConfigParse {
        filename: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create an I/O error for the given path
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }

    /// Create an invalid resource name error
    pub fn invalid_resource_name(name: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::InvalidResourceName {
            name: name.into(),
            reason: reason.into(),
        })
    }

    /// Create a config parse error from a toml error with source context
    pub fn config_parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::ConfigParse {
            filename: filename.to_string(),
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Whether this error stems from bad command-line input rather than the environment
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Error::MissingResourceName | Error::InvalidResourceName { .. }
        )
    }
}
