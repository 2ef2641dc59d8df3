//! Project configuration loaded from `tscrud.toml`.

use std::path::Path;

use serde::Deserialize;

use crate::{Error, NamingScheme, Result, file::read_optional};

/// Default configuration file name, looked up in the project root.
pub const CONFIG_FILE: &str = "tscrud.toml";

/// Schema expression used when none is configured.
pub const DEFAULT_SCHEMA: &str = "process.env.DB_CONNECTION_SCHEMA";

/// Route middleware used when none is configured.
pub const DEFAULT_AUTH_MIDDLEWARE: &str = "isAuthenticated";

/// Generator settings.
///
/// Every field is optional; accessors fall back to the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Expression inserted verbatim as the entity's `schema`
    pub schema: Option<String>,
    /// Middleware passed to `routes.use` when mounting a resource
    pub auth_middleware: Option<String>,
    /// Naming convention used to derive identifiers
    pub naming: Option<NamingScheme>,
}

impl Config {
    /// Parse configuration from a string (uses "tscrud.toml" as filename)
    pub fn from_toml(content: &str) -> Result<Self> {
        Self::from_toml_with_filename(content, CONFIG_FILE)
    }

    /// Parse configuration with a custom filename for error reporting
    pub fn from_toml_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config_parse(e, content, filename))
    }

    /// Load a configuration file that must exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_with_filename(&content, &path.display().to_string())
    }

    /// Load a configuration file if present, otherwise use defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match read_optional(path)? {
            Some(content) => Self::from_toml_with_filename(&content, &path.display().to_string()),
            None => Ok(Self::default()),
        }
    }

    /// Override values that were given explicitly (command line or environment).
    pub fn with_overrides(
        mut self,
        schema: Option<String>,
        auth_middleware: Option<String>,
        naming: Option<NamingScheme>,
    ) -> Self {
        if schema.is_some() {
            self.schema = schema;
        }
        if auth_middleware.is_some() {
            self.auth_middleware = auth_middleware;
        }
        if naming.is_some() {
            self.naming = naming;
        }
        self
    }

    pub fn schema(&self) -> &str {
        self.schema.as_deref().unwrap_or(DEFAULT_SCHEMA)
    }

    pub fn auth_middleware(&self) -> &str {
        self.auth_middleware
            .as_deref()
            .unwrap_or(DEFAULT_AUTH_MIDDLEWARE)
    }

    pub fn naming(&self) -> NamingScheme {
        self.naming.unwrap_or_default()
    }
}
