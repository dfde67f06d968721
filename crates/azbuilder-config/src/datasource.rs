//! Datasource plugin configuration.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::error::{ConfigError, ConfigResult};
use crate::properties::PropertySet;

/// Property key selecting the active datasource backend.
pub const DATASOURCE_TYPE_KEY: &str = "org.azbuilder.api.plugin.datasource.type";

/// Supported datasource backend plugins.
///
/// The property literal form is uppercase (`SQL`, `MONGO`); parsing is
/// ASCII-case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(AsRefStr, Display, EnumIter, EnumString, IntoStaticStr)]
#[derive(Serialize, Deserialize)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataSourceType {
    /// Relational datasource backend.
    Sql,
    /// MongoDB datasource backend.
    Mongo,
}

impl DataSourceType {
    /// Returns the accepted literals, for error messages.
    fn supported() -> String {
        Self::iter()
            .map(|variant| <&'static str>::from(variant))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Datasource configuration holder.
///
/// Bound once at startup from the resolved property set; consumers read
/// [`DataSourceConfig::datasource_type`] to select which backend plugin
/// to instantiate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSourceConfig {
    /// Active datasource backend.
    #[serde(rename = "type")]
    pub datasource_type: DataSourceType,
}

impl DataSourceConfig {
    /// Creates a datasource configuration programmatically.
    #[must_use]
    pub fn new(datasource_type: DataSourceType) -> Self {
        Self { datasource_type }
    }

    /// Binds the datasource configuration from resolved properties.
    ///
    /// The `type` key is required: the process must not start without a
    /// recognized datasource selection, and an unknown literal is never
    /// silently replaced with a default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingKey`] if the key is absent and
    /// [`ConfigError::InvalidValue`] if the value is not a supported
    /// backend literal.
    pub fn from_properties(props: &PropertySet) -> ConfigResult<Self> {
        let raw = props.get_required(DATASOURCE_TYPE_KEY)?;
        let datasource_type = raw.parse::<DataSourceType>().map_err(|_| {
            ConfigError::invalid_value(
                DATASOURCE_TYPE_KEY,
                raw,
                format!("one of: {}", DataSourceType::supported()),
            )
        })?;

        Ok(Self { datasource_type })
    }
}
