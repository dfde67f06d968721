#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod app;
mod datasource;
mod error;
mod gcp;
mod properties;
mod source;

#[doc(hidden)]
pub mod prelude;

pub use app::AppConfig;
pub use datasource::{DATASOURCE_TYPE_KEY, DataSourceConfig, DataSourceType};
pub use error::{ConfigError, ConfigResult};
pub use gcp::{GCP_STORAGE_PREFIX, GcpStorageConfig};
pub use properties::PropertySet;
pub use source::{ActiveProfile, PROFILE_ENV_VAR, PropertySource};

/// Tracing target for configuration resolution and binding.
pub const TRACING_TARGET: &str = "azbuilder_config";
