use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tscrud_core::{CONFIG_FILE, Config, NamingScheme, ResourceName};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Resource name in camelCase (e.g., "order" or "orderItem")
    pub resource: Option<String>,

    /// Project root (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Path to the config file (defaults to <root>/tscrud.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Expression used as the entity schema (overrides tscrud.toml)
    #[arg(long, env = "TSCRUD_SCHEMA")]
    pub schema: Option<String>,

    /// Middleware passed to routes.use (overrides tscrud.toml)
    #[arg(long)]
    pub auth_middleware: Option<String>,

    /// Naming convention: canonical or legacy (overrides tscrud.toml)
    #[arg(long)]
    pub naming: Option<NamingScheme>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let (name, config) = self.resolve().unwrap_or_exit();

        let report = ops::generate(
            &name,
            &config,
            ops::generate::GenerateOptions {
                root: &self.root,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    /// Validate the resource name, then load configuration.
    ///
    /// Performs no writes, so a failure here leaves the project untouched.
    fn resolve(&self) -> tscrud_core::Result<(ResourceName, Config)> {
        let name = ResourceName::parse(self.resource.as_deref().unwrap_or_default())?;

        let config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::load_or_default(self.root.join(CONFIG_FILE))?,
        };

        Ok((
            name,
            config.with_overrides(
                self.schema.clone(),
                self.auth_middleware.clone(),
                self.naming,
            ),
        ))
    }
}
