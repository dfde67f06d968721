//! Google Cloud Storage configuration.

use serde::{Deserialize, Serialize};

use crate::properties::PropertySet;

/// Key prefix for GCP storage properties.
pub const GCP_STORAGE_PREFIX: &str = "org.terrakube.registry.plugin.storage.gcp";

/// Placeholder shown in place of credential material.
const REDACTED: &str = "<redacted>";

/// Google Cloud Storage configuration holder.
///
/// All fields are free-form strings; no format validation happens at this
/// layer. Missing or empty values are accepted at bind time and surface
/// only when a consumer uses them against the storage API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcpStorageConfig {
    /// Credential material, either a file path or inline JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<String>,
    /// Target bucket name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_name: Option<String>,
    /// GCP project identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl GcpStorageConfig {
    /// Creates an empty GCP storage configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the credential material.
    #[must_use]
    pub fn with_credentials(mut self, credentials: impl Into<String>) -> Self {
        self.credentials = Some(credentials.into());
        self
    }

    /// Sets the bucket name.
    #[must_use]
    pub fn with_bucket_name(mut self, bucket_name: impl Into<String>) -> Self {
        self.bucket_name = Some(bucket_name.into());
        self
    }

    /// Sets the project identifier.
    #[must_use]
    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Binds the GCP storage configuration from resolved properties.
    ///
    /// Values are taken verbatim; absent keys bind to `None`. Both the
    /// camelCase key form (`bucketName`) and the kebab-case form
    /// (`bucket-name`) are accepted, camelCase winning when both appear.
    #[must_use]
    pub fn from_properties(props: &PropertySet) -> Self {
        Self {
            credentials: lookup(props, "credentials", "credentials"),
            bucket_name: lookup(props, "bucketName", "bucket-name"),
            project_id: lookup(props, "projectId", "project-id"),
        }
    }

    /// Returns a copy safe for logging and display: credential material is
    /// replaced with a placeholder.
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            credentials: self.credentials.as_ref().map(|_| REDACTED.to_string()),
            bucket_name: self.bucket_name.clone(),
            project_id: self.project_id.clone(),
        }
    }
}

fn lookup(props: &PropertySet, camel: &str, kebab: &str) -> Option<String> {
    props
        .get(&format!("{GCP_STORAGE_PREFIX}.{camel}"))
        .or_else(|| props.get(&format!("{GCP_STORAGE_PREFIX}.{kebab}")))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_all_three_fields_verbatim() {
        let mut props = PropertySet::new();
        props.insert(
            format!("{GCP_STORAGE_PREFIX}.credentials"),
            "/secrets/gcp.json",
        );
        props.insert(format!("{GCP_STORAGE_PREFIX}.bucketName"), "registry-bucket");
        props.insert(format!("{GCP_STORAGE_PREFIX}.projectId"), "my-project");

        let config = GcpStorageConfig::from_properties(&props);

        assert_eq!(config.credentials.as_deref(), Some("/secrets/gcp.json"));
        assert_eq!(config.bucket_name.as_deref(), Some("registry-bucket"));
        assert_eq!(config.project_id.as_deref(), Some("my-project"));
    }

    #[test]
    fn missing_keys_bind_to_none() {
        let config = GcpStorageConfig::from_properties(&PropertySet::new());
        assert_eq!(config, GcpStorageConfig::new());
        assert!(config.credentials.is_none());
        assert!(config.bucket_name.is_none());
        assert!(config.project_id.is_none());
    }

    #[test]
    fn kebab_case_keys_accepted() {
        let mut props = PropertySet::new();
        props.insert(format!("{GCP_STORAGE_PREFIX}.bucket-name"), "kebab-bucket");
        props.insert(format!("{GCP_STORAGE_PREFIX}.project-id"), "kebab-project");

        let config = GcpStorageConfig::from_properties(&props);

        assert_eq!(config.bucket_name.as_deref(), Some("kebab-bucket"));
        assert_eq!(config.project_id.as_deref(), Some("kebab-project"));
    }

    #[test]
    fn camel_case_wins_over_kebab_case() {
        let mut props = PropertySet::new();
        props.insert(format!("{GCP_STORAGE_PREFIX}.bucketName"), "camel");
        props.insert(format!("{GCP_STORAGE_PREFIX}.bucket-name"), "kebab");

        let config = GcpStorageConfig::from_properties(&props);
        assert_eq!(config.bucket_name.as_deref(), Some("camel"));
    }

    #[test]
    fn builder_round_trip() {
        let config = GcpStorageConfig::new()
            .with_credentials("/secrets/gcp.json")
            .with_bucket_name("bucket")
            .with_project_id("project");

        assert_eq!(config.credentials.as_deref(), Some("/secrets/gcp.json"));
        assert_eq!(config.bucket_name.as_deref(), Some("bucket"));
        assert_eq!(config.project_id.as_deref(), Some("project"));
    }

    #[test]
    fn redacted_hides_credentials_only() {
        let config = GcpStorageConfig::new()
            .with_credentials("top secret")
            .with_bucket_name("bucket");

        let redacted = config.redacted();

        assert_eq!(redacted.credentials.as_deref(), Some("<redacted>"));
        assert_eq!(redacted.bucket_name.as_deref(), Some("bucket"));

        let json = serde_json::to_string(&redacted).unwrap();
        assert!(!json.contains("top secret"));
    }

    #[test]
    fn redacted_keeps_absent_credentials_absent() {
        let redacted = GcpStorageConfig::new().redacted();
        assert!(redacted.credentials.is_none());
    }
}
