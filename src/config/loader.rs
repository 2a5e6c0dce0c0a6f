//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Global config (~/.config/docsight/config.toml)
//! 3. Project config (.docsight/config.toml)
//! 4. Environment variables (DOCSIGHT_* prefix, `__` between nested keys)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::types::Config;
use crate::types::{DocsightError, Result, ResultExt};

const ENV_PREFIX: &str = "DOCSIGHT_";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with full resolution chain using Figment:
    /// defaults → global → project → env vars
    pub fn load() -> Result<Config> {
        Self::resolve(
            Self::global_config_path().as_deref(),
            &Self::project_config_path(),
        )
    }

    /// Load configuration from a specific file, still honoring env vars
    pub fn load_from_file(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(DocsightError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        Self::resolve(None, path)
    }

    fn resolve(global: Option<&Path>, project: &Path) -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(global_path) = global
            && global_path.exists()
        {
            debug!("Loading global config from: {}", global_path.display());
            figment = figment.merge(Toml::file(global_path));
        }

        if project.exists() {
            debug!("Loading project config from: {}", project.display());
            figment = figment.merge(Toml::file(project));
        }

        // DOCSIGHT_ANALYSIS__TOP_KEYWORDS -> analysis.top_keywords
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| DocsightError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    // =========================================================================
    // Path Management
    // =========================================================================

    /// Get path to global config directory (~/.config/docsight/)
    pub fn global_dir() -> Option<PathBuf> {
        env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                env::var("HOME")
                    .ok()
                    .map(|home| PathBuf::from(home).join(".config"))
            })
            .map(|p| p.join("docsight"))
    }

    /// Get path to global config file
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_dir().map(|dir| dir.join("config.toml"))
    }

    /// Get path to project config file
    pub fn project_config_path() -> PathBuf {
        Self::project_dir().join("config.toml")
    }

    /// Get project data directory
    pub fn project_dir() -> PathBuf {
        PathBuf::from(".docsight")
    }

    // =========================================================================
    // Config Commands
    // =========================================================================

    /// Show config file paths
    pub fn show_path() {
        println!("Configuration paths:");
        println!();

        if let Some(global) = Self::global_config_path() {
            let exists = if global.exists() { "✓" } else { "✗" };
            println!("  Global:  {} {}", exists, global.display());
        } else {
            println!("  Global:  (not available)");
        }

        let project = Self::project_config_path();
        let exists = if project.exists() { "✓" } else { "✗" };
        println!("  Project: {} {}", exists, project.display());
    }

    /// Render a configuration as `json` or `toml`
    pub fn render(config: &Config, format: &str) -> Result<String> {
        match format {
            "json" => Ok(serde_json::to_string_pretty(config)?),
            "toml" => toml::to_string_pretty(config).config_context("Failed to render TOML"),
            other => Err(DocsightError::invalid_input(format!(
                "unknown config format '{}' (expected json or toml)",
                other
            ))),
        }
    }

    /// Show current effective configuration
    pub fn show_config(config: &Config, format: &str) -> Result<()> {
        println!("{}", Self::render(config, format)?);
        Ok(())
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Initialize global configuration
    pub fn init_global(force: bool) -> Result<PathBuf> {
        let global_dir = Self::global_dir().ok_or_else(|| {
            DocsightError::Config("Cannot determine global config directory".to_string())
        })?;
        Self::write_config(&global_dir, Self::default_global_config(), force)?;
        Ok(global_dir)
    }

    /// Initialize project configuration in the current directory
    pub fn init_project(force: bool) -> Result<PathBuf> {
        Self::init_project_in(&Self::project_dir(), force)
    }

    /// Initialize a project directory, creating the document store beside it
    pub fn init_project_in(project_dir: &Path, force: bool) -> Result<PathBuf> {
        fs::create_dir_all(project_dir.join("documents"))?;
        Self::write_config(project_dir, Self::default_project_config(), force)?;
        Ok(project_dir.to_path_buf())
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn write_config(dir: &Path, content: &str, force: bool) -> Result<()> {
        fs::create_dir_all(dir)?;

        let config_path = dir.join("config.toml");
        if !config_path.exists() || force {
            fs::write(&config_path, content)?;
            info!("Created config: {}", config_path.display());
        } else {
            info!("Config exists: {}", config_path.display());
        }
        Ok(())
    }

    /// Default global config content (TOML)
    fn default_global_config() -> &'static str {
        r#"# Docsight Global Configuration
# User-wide defaults. Project settings in .docsight/config.toml override these.

version = "1.0"

[analysis]
word_count = true
extract_keywords = false
summarize = false
extract_links = false
detect_language = false
extract_tables = false
top_keywords = 20
max_summary_sentences = 5
"#
    }

    /// Default project config content (TOML)
    fn default_project_config() -> &'static str {
        r#"# Docsight Project Configuration
# Project-specific settings that override global defaults.

version = "1.0"

[analysis]
extract_keywords = true
summarize = true

# Document trees served to tool requests, one <id>.json per document
[store]
root = ".docsight/documents"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_defaults_without_files() {
        let dir = TempDir::new().unwrap();
        let config =
            ConfigLoader::resolve(None, &dir.path().join("missing.toml")).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.analysis.top_keywords, 20);
    }

    #[test]
    fn test_project_overrides_global() {
        let dir = TempDir::new().unwrap();
        let global = dir.path().join("global.toml");
        let project = dir.path().join("project.toml");
        fs::write(&global, "[analysis]\ntop_keywords = 7\nsummarize = true\n").unwrap();
        fs::write(&project, "[analysis]\ntop_keywords = 3\n").unwrap();

        let config = ConfigLoader::resolve(Some(global.as_path()), &project).unwrap();
        assert_eq!(config.analysis.top_keywords, 3);
        assert!(config.analysis.summarize);
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let dir = TempDir::new().unwrap();
        let project = dir.path().join("config.toml");
        fs::write(&project, "[analysis]\nmax_summary_sentences = 0\n").unwrap();

        let err = ConfigLoader::load_from_file(&project).unwrap_err();
        assert!(matches!(err, DocsightError::Config(_)));
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = ConfigLoader::load_from_file(Path::new("/nonexistent/docsight.toml"))
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_init_project_in() {
        let dir = TempDir::new().unwrap();
        let project_dir = dir.path().join(".docsight");

        ConfigLoader::init_project_in(&project_dir, false).unwrap();
        assert!(project_dir.join("config.toml").exists());
        assert!(project_dir.join("documents").is_dir());

        let config = ConfigLoader::load_from_file(&project_dir.join("config.toml")).unwrap();
        assert!(config.analysis.extract_keywords);

        // existing file is left alone without force
        fs::write(project_dir.join("config.toml"), "version = \"2.0\"\n").unwrap();
        ConfigLoader::init_project_in(&project_dir, false).unwrap();
        let content = fs::read_to_string(project_dir.join("config.toml")).unwrap();
        assert_eq!(content, "version = \"2.0\"\n");
    }

    #[test]
    fn test_default_global_config_parses() {
        let config: Config = toml::from_str(ConfigLoader::default_global_config()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_render_formats() {
        let config = Config::default();
        let json = ConfigLoader::render(&config, "json").unwrap();
        assert!(json.contains("\"top_keywords\": 20"));
        let toml = ConfigLoader::render(&config, "toml").unwrap();
        assert!(toml.contains("[analysis]"));
        assert!(ConfigLoader::render(&config, "yaml").is_err());
    }

    #[test]
    fn test_env_override() {
        let dir = TempDir::new().unwrap();
        // SAFETY: no other test reads or writes this variable
        unsafe {
            std::env::set_var("DOCSIGHT_ANALYSIS__DETECT_LANGUAGE", "true");
        }
        let config = ConfigLoader::resolve(None, &dir.path().join("none.toml")).unwrap();
        unsafe {
            std::env::remove_var("DOCSIGHT_ANALYSIS__DETECT_LANGUAGE");
        }
        assert!(config.analysis.detect_language);
    }
}
