//! Prelude module for convenient imports.

pub use crate::app::AppConfig;
pub use crate::datasource::{DATASOURCE_TYPE_KEY, DataSourceConfig, DataSourceType};
pub use crate::error::{ConfigError, ConfigResult};
pub use crate::gcp::{GCP_STORAGE_PREFIX, GcpStorageConfig};
pub use crate::properties::PropertySet;
pub use crate::source::{ActiveProfile, PROFILE_ENV_VAR, PropertySource};
