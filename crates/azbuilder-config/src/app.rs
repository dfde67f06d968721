//! Aggregate application configuration.

use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET;
use crate::datasource::DataSourceConfig;
use crate::error::ConfigResult;
use crate::gcp::GcpStorageConfig;
use crate::source::{ActiveProfile, PropertySource};

/// The complete bound configuration for an azbuilder service.
///
/// Constructed once at startup and passed by shared reference to the
/// components that need it. All fields are plain owned data; after
/// binding nothing is mutated, so concurrent readers need no
/// synchronization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Datasource plugin selection.
    pub datasource: DataSourceConfig,
    /// GCP storage settings.
    pub gcp_storage: GcpStorageConfig,
}

impl AppConfig {
    /// Resolves property layers once and binds both holders.
    ///
    /// # Errors
    ///
    /// Returns any resolution error from the source and any binding error
    /// from the datasource holder. Binding failures are fatal to startup;
    /// callers must not continue with a partially bound configuration.
    pub fn load(source: &PropertySource, profile: &ActiveProfile) -> ConfigResult<Self> {
        let props = source.resolve(profile)?;

        let datasource = DataSourceConfig::from_properties(&props)?;
        let gcp_storage = GcpStorageConfig::from_properties(&props);

        Ok(Self {
            datasource,
            gcp_storage,
        })
    }

    /// Returns a copy safe for logging and display.
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            datasource: self.datasource,
            gcp_storage: self.gcp_storage.redacted(),
        }
    }

    /// Logs the resolved configuration (no sensitive information).
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET,
            datasource_type = %self.datasource.datasource_type,
            gcp_bucket = ?self.gcp_storage.bucket_name,
            gcp_project = ?self.gcp_storage.project_id,
            gcp_credentials_set = self.gcp_storage.credentials.is_some(),
            "configuration bound"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::{DATASOURCE_TYPE_KEY, DataSourceType};
    use crate::gcp::GCP_STORAGE_PREFIX;
    use crate::properties::PropertySet;

    fn write(dir: &std::path::Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn load_binds_both_holders() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "application.properties",
            "org.azbuilder.api.plugin.datasource.type=SQL\n\
             org.terrakube.registry.plugin.storage.gcp.bucketName=base-bucket\n",
        );

        let source = PropertySource::new(dir.path());
        let config = AppConfig::load(&source, &ActiveProfile::none()).unwrap();

        assert_eq!(config.datasource.datasource_type, DataSourceType::Sql);
        assert_eq!(config.gcp_storage.bucket_name.as_deref(), Some("base-bucket"));
        assert!(config.gcp_storage.credentials.is_none());
    }

    #[test]
    fn load_fails_without_datasource_type() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "application.properties", "unrelated=value\n");

        let source = PropertySource::new(dir.path());
        assert!(AppConfig::load(&source, &ActiveProfile::none()).is_err());
    }

    #[test]
    fn redacted_config_serializes_without_credentials() {
        let mut props = PropertySet::new();
        props.insert(DATASOURCE_TYPE_KEY, "MONGO");
        props.insert(format!("{GCP_STORAGE_PREFIX}.credentials"), "secret material");

        let config = AppConfig {
            datasource: DataSourceConfig::from_properties(&props).unwrap(),
            gcp_storage: GcpStorageConfig::from_properties(&props),
        };

        let json = serde_json::to_string(&config.redacted()).unwrap();
        assert!(json.contains("MONGO"));
        assert!(!json.contains("secret material"));
    }
}
