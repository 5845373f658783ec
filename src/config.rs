//! Configuration file support for totool.
//!
//! Provides YAML-based configuration through `totool.config.yml` files,
//! including data structures, file loading, validation and the merge with
//! command-line flags.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::adapters::outbound::process::DEFAULT_TOOL;
use crate::application::dto::OutputFormat;
use crate::ports::outbound::DiagnosticReporter;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "totool.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Inspection utility to run as `<tool> -L <binary>`
    pub tool: Option<String>,
    pub format: Option<String>,
    pub verbose: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Settings in effect after merging CLI flags, config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub tool: String,
    pub format: OutputFormat,
    pub verbose: bool,
}

/// The subset of command-line flags that can override the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub tool: Option<String>,
    pub dot: bool,
    pub verbose: bool,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref tool) = config.tool {
        if tool.trim().is_empty() {
            bail!(
                "Invalid config: tool must not be empty.\n\n\
                 💡 Hint: Remove the field to use the default ({}), or name a program such as \"/usr/bin/otool\".",
                DEFAULT_TOOL
            );
        }
    }
    if let Some(ref format) = config.format {
        if let Err(e) = format.parse::<OutputFormat>() {
            bail!("Invalid config: {}", e);
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
pub fn warn_unknown_fields(config: &ConfigFile, reporter: &dyn DiagnosticReporter) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        reporter.report_warning(&format!(
            "Unknown config field '{}' will be ignored.",
            key
        ));
    }
}

/// Merge CLI flags over the config file over defaults.
///
/// Boolean flags can only switch a feature on: a config file asking for
/// `dot` output cannot be turned back to text from the command line.
pub fn resolve_settings(cli: CliOverrides, config: Option<&ConfigFile>) -> Result<Settings> {
    let config_format = match config.and_then(|c| c.format.as_deref()) {
        Some(format) => format.parse::<OutputFormat>().map_err(anyhow::Error::msg)?,
        None => OutputFormat::default(),
    };

    let format = if cli.dot {
        OutputFormat::Dot
    } else {
        config_format
    };

    let tool = cli
        .tool
        .or_else(|| config.and_then(|c| c.tool.clone()))
        .unwrap_or_else(|| DEFAULT_TOOL.to_string());

    let verbose = cli.verbose || config.and_then(|c| c.verbose).unwrap_or(false);

    Ok(Settings {
        tool,
        format,
        verbose,
    })
}
