//! Configuration types for tenantline.
//!
//! [`Config::load`] layers a TOML, YAML or JSON file over the built-in
//! defaults. Without an explicit path it looks for
//! `~/.config/tenantline/config.toml` and falls back to the defaults if that
//! file is absent. [`Config::defaults`] never touches the filesystem.

use crate::error::PipelineError;
use crate::pipeline::{Pipeline, StageSpec};
use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[log]
debug = false
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,
    /// Stages in the order they run, e.g.
    ///
    /// ```toml
    /// [[pipeline_stages]]
    /// tenant = { source = "tenant_id" }
    /// ```
    #[serde(default)]
    pub pipeline_stages: Vec<StageSpec>,
}

/// `[log]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogConfig {
    /// Emit per-entry stage diagnostics at debug level.
    #[serde(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load `path` (or the per-user config file if `None`) layered on top of
    /// the built-in defaults. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let source = match path {
            Some(p) => config::File::from(p).required(true),
            None => config::File::from(user_config_path().as_path()).required(false),
        };
        Ok(Self::layered(layered_builder().add_source(source))?)
    }

    /// Parse configuration text in `format`, layered on the defaults.
    pub fn parse(text: &str, format: config::FileFormat) -> anyhow::Result<Self> {
        let source = config::File::from_str(text, format);
        Ok(Self::layered(layered_builder().add_source(source))?)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        Self::layered(layered_builder()).expect("built-in default config must deserialize")
    }

    /// Build the configured pipeline, validating every stage.
    pub fn pipeline(&self) -> Result<Pipeline, PipelineError> {
        Pipeline::new(&self.pipeline_stages)
    }

    fn layered(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, config::ConfigError> {
        builder.build()?.try_deserialize()
    }
}

/// A builder seeded with [`DEFAULT_CONFIG`]; later sources override it.
fn layered_builder() -> config::ConfigBuilder<config::builder::DefaultState> {
    config::Config::builder()
        .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn user_config_path() -> PathBuf {
    resolve_config_path(
        std::env::var_os("XDG_CONFIG_HOME"),
        std::env::var_os("HOME"),
    )
}

/// `$XDG_CONFIG_HOME/tenantline/config.toml`, else under `$HOME/.config`,
/// else relative to the working directory.
fn resolve_config_path(xdg: Option<OsString>, home: Option<OsString>) -> PathBuf {
    let base = match (xdg, home) {
        (Some(xdg), _) if !xdg.is_empty() => PathBuf::from(xdg),
        (_, Some(home)) => Path::new(&home).join(".config"),
        _ => PathBuf::from(".config"),
    };
    base.join("tenantline").join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
