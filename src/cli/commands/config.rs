//! Config Command
//!
//! Manage docsight configuration.
//!
//! Usage:
//!   docsight config show [-f json|toml]
//!   docsight config path
//!   docsight config init [-g] [--force]

use crate::cli::ui::Output;
use crate::cli::util::CommandContext;
use crate::config::ConfigLoader;
use crate::types::Result;

/// Show the effective (merged) configuration
pub fn show(context: &CommandContext, format: &str) -> Result<()> {
    ConfigLoader::show_config(&context.config, format)
}

/// Show configuration paths
pub fn path() -> Result<()> {
    ConfigLoader::show_path();
    Ok(())
}

/// Initialize global configuration
pub fn init_global(force: bool) -> Result<()> {
    let dir = ConfigLoader::init_global(force)?;
    let out = Output::new();
    out.success("Initialized global configuration");
    out.field("Directory", dir.display());
    if let Some(config_path) = ConfigLoader::global_config_path() {
        out.field("Config", config_path.display());
    }
    Ok(())
}

/// Initialize project configuration and document store
pub fn init_project(force: bool) -> Result<()> {
    let dir = ConfigLoader::init_project(force)?;
    let out = Output::new();
    out.success("Initialized project configuration");
    out.field("Directory", dir.display());
    out.field("Config", ConfigLoader::project_config_path().display());
    out.field("Documents", dir.join("documents").display());
    Ok(())
}
