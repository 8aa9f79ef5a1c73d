//! Mapper configuration.
//!
//! Options can be embedded in an application's figment under the `automap` key
//! ([`AutoMapConfig::from_figment`]) or loaded standalone from an optional YAML file
//! plus `AUTOMAP_*` environment variables ([`AutoMapConfig::load`]).

use crate::error::ConfigError;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use heck::ToSnakeCase;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Section name inside an application figment.
pub const CONFIG_SECTION: &str = "automap";

/// Prefix of environment variables read by [`AutoMapConfig::load`].
pub const ENV_PREFIX: &str = "AUTOMAP_";

/// Keys read from `AUTOMAP_*` variables; other variables with the prefix are skipped.
const ENV_KEYS: [&str; 3] = ["table_naming", "schema_resolution", "default_schema"];

/// How the default table name is derived from the entity type name.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableNaming {
    /// Type name as is (`OrderLine` -> `OrderLine`).
    #[default]
    Verbatim,
    /// `OrderLine` -> `order_line`.
    SnakeCase,
}

impl TableNaming {
    #[must_use]
    pub fn apply(self, type_name: &str) -> String {
        match self {
            TableNaming::Verbatim => type_name.to_owned(),
            TableNaming::SnakeCase => type_name.to_snake_case(),
        }
    }
}

/// Where a resolved schema name is written.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaResolution {
    /// Into the schema identity of the mapping.
    #[default]
    Schema,
    /// Into the table identity, overwriting the table name. Kept for parity with
    /// mappers that relied on this behavior; schema annotations are then only
    /// honored through an explicit `schema` call.
    LegacyTable,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct AutoMapConfig {
    pub table_naming: TableNaming,
    pub schema_resolution: SchemaResolution,
    /// Schema applied to every mapping unless the entity names its own.
    ///
    /// Not applied with [`SchemaResolution::LegacyTable`]; a warning is logged for
    /// every mapping built with both set.
    pub default_schema: Option<String>,
}

impl AutoMapConfig {
    /// Extract the `automap` section of `figment`; a missing section yields defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::Extract`] if the section exists but is malformed.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        if !figment.contains(CONFIG_SECTION) {
            tracing::debug!("no '{CONFIG_SECTION}' section found; using default mapper configuration");
            return Ok(Self::default());
        }
        Ok(figment.extract_inner(CONFIG_SECTION)?)
    }

    /// Defaults, then `path` (YAML, if given), then `AUTOMAP_*` environment variables.
    ///
    /// # Errors
    /// Returns [`ConfigError::Extract`] if any source holds invalid values.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        let config: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).only(&ENV_KEYS))
            .extract()?;
        tracing::debug!(?config, "mapper configuration loaded");
        Ok(config)
    }

    /// Conventional table name for `type_name`.
    #[must_use]
    pub fn default_table_name(&self, type_name: &str) -> String {
        self.table_naming.apply(type_name)
    }
}
