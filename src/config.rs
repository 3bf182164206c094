//! Client configuration
//!
//! `defaults/policybot.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. [`ClientConfig::load`] layers
//! `./policybot.toml`, an explicit file, `POLICYBOT_*` environment variables
//! and command-line [`Overrides`] on top of it.

use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

pub use ::config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/policybot.default.toml");
const LOCAL_FILE: &str = "policybot.toml";
const ENV_PREFIX: &str = "POLICYBOT";

/// Settings consumed by the PolicyBot client
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Agent backend base URL; `None` means a relative `/agent`
    #[serde(default)]
    pub api_base: Option<String>,
    pub trace: bool,
    pub greeting: String,
    pub format: String,
}

impl ClientConfig {
    /// Where requests are posted
    pub fn agent_url(&self) -> String {
        match &self.api_base {
            Some(base) if !base.is_empty() => format!("{}/agent", base.trim_end_matches('/')),
            _ => "/agent".to_string(),
        }
    }
}

/// Settings given on the command line; they win over every file and variable.
///
/// `trace` can only switch tracing on, matching a `--trace` flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub trace: bool,
    pub format: Option<String>,
    pub api_base: Option<String>,
}

/// Layers configuration sources over the embedded defaults, lowest first.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a TOML file. A `required` file that is missing fails [`Loader::build`].
    pub fn with_file(mut self, path: impl AsRef<Path>, required: bool) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer `POLICYBOT_*` environment variables (e.g. `POLICYBOT_TRACE=true`).
    pub fn with_env(mut self) -> Self {
        self.builder = self
            .builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));
        self
    }

    /// Layer command-line settings; unset fields leave lower layers alone.
    pub fn with_overrides(mut self, overrides: &Overrides) -> Result<Self, ConfigError> {
        if overrides.trace {
            self.builder = self.builder.set_override("trace", true)?;
        }
        if let Some(format) = &overrides.format {
            self.builder = self.builder.set_override("format", format.clone())?;
        }
        if let Some(api_base) = &overrides.api_base {
            self.builder = self.builder.set_override("api_base", api_base.clone())?;
        }
        Ok(self)
    }

    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientConfig {
    /// Load the full stack: defaults, `./policybot.toml` if present, the
    /// explicit `file` (which must exist), environment, then `overrides`.
    pub fn load(file: Option<&Path>, overrides: &Overrides) -> Result<Self, ConfigError> {
        let mut loader = Loader::new().with_file(LOCAL_FILE, false);
        if let Some(path) = file {
            loader = loader.with_file(path, true);
        }
        loader.with_env().with_overrides(overrides)?.build()
    }
}
