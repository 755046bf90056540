//! Configuration
//!
//! `HalConfig` is the serialized form (YAML, camelCase keys, every member
//! optional). [`HalConfig::compile`] validates it and produces the option
//! structs each stage consumes.
//!
//! ```yaml
//! naming: camelCase
//! build:
//!   unresolvedVariables: fail
//!   maxDepth: 16
//! json:
//!   pretty: true
//! xml:
//!   allLinkValues: true
//!   indent: 2
//! ```

use halcyon_builder::{BuildOptions, UnresolvedVariablePolicy, DEFAULT_MAX_DEPTH};
use halcyon_format::{JsonOptions, XmlOptions};
use halcyon_models::NamingConvention;
use halcyon_openapi::SchemaOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("cannot read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HalConfig {
    /// Property naming shared by every section that does not override it
    pub naming: NamingConvention,
    pub build: BuildConfig,
    pub json: JsonConfig,
    pub xml: XmlConfig,
    pub schema: SchemaConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildConfig {
    pub unresolved_variables: UnresolvedVariablePolicy,
    pub max_depth: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            unresolved_variables: UnresolvedVariablePolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JsonConfig {
    pub naming: Option<NamingConvention>,
    pub pretty: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct XmlConfig {
    pub naming: Option<NamingConvention>,
    pub all_link_values: bool,
    pub indent: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchemaConfig {
    pub naming: Option<NamingConvention>,
    /// Defaults to `build.maxDepth`
    pub max_depth: Option<usize>,
}

/// Options for every stage, derived from a validated [`HalConfig`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledConfig {
    pub build: BuildOptions,
    pub json: JsonOptions,
    pub xml: XmlOptions,
    pub schema: SchemaOptions,
}

impl HalConfig {
    pub fn from_yaml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(input)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded configuration file");
        Self::from_yaml_str(&input)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn compile(&self) -> Result<CompiledConfig, ConfigError> {
        if self.build.max_depth == 0 {
            return Err(ConfigError::InvalidConfig(
                "build.maxDepth must be at least 1".into(),
            ));
        }
        if self.schema.max_depth == Some(0) {
            return Err(ConfigError::InvalidConfig(
                "schema.maxDepth must be at least 1".into(),
            ));
        }
        if self.xml.indent == Some(0) {
            return Err(ConfigError::InvalidConfig(
                "xml.indent must be at least 1; omit it for single-line output".into(),
            ));
        }

        Ok(CompiledConfig {
            build: BuildOptions::from(&self.build),
            json: JsonOptions::default()
                .with_naming(self.json.naming.unwrap_or(self.naming))
                .pretty(self.json.pretty),
            xml: XmlOptions {
                naming: self.xml.naming.unwrap_or(self.naming),
                all_link_values: self.xml.all_link_values,
                indent: self.xml.indent,
            },
            schema: SchemaOptions {
                naming: self.schema.naming.unwrap_or(self.naming),
                max_depth: self.schema.max_depth.unwrap_or(self.build.max_depth),
            },
        })
    }
}

impl From<&BuildConfig> for BuildOptions {
    fn from(cfg: &BuildConfig) -> Self {
        BuildOptions::default()
            .with_unresolved_variables(cfg.unresolved_variables)
            .with_max_depth(cfg.max_depth)
    }
}
