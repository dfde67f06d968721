//! Layered property resolution.
//!
//! Properties are resolved from two layers: a base file
//! (`application.properties`) and, when a profile is active, a
//! profile-specific override file (`application-{profile}.properties`).
//! The override layer wins on conflicting keys. An absent file is not an
//! error; that layer is simply empty.

use std::io;
use std::path::{Path, PathBuf};

use crate::TRACING_TARGET;
use crate::error::{ConfigError, ConfigResult};
use crate::properties::PropertySet;

/// Environment variable naming the active configuration profile.
pub const PROFILE_ENV_VAR: &str = "AZBUILDER_PROFILES_ACTIVE";

/// The active configuration profile, if any.
///
/// A profile selects an override property file that is overlaid onto the
/// base file during resolution. No active profile means resolution uses
/// the base layer only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveProfile(Option<String>);

impl ActiveProfile {
    /// No active profile; resolution uses the base layer only.
    #[must_use]
    pub fn none() -> Self {
        Self(None)
    }

    /// An explicitly named profile.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self(Some(name.into()))
    }

    /// Reads the active profile from [`PROFILE_ENV_VAR`].
    ///
    /// An unset or blank variable yields no active profile.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(PROFILE_ENV_VAR) {
            Ok(name) if !name.trim().is_empty() => Self::named(name.trim()),
            _ => Self::none(),
        }
    }

    /// Returns the profile name, if one is active.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

/// A directory of property files resolved with profile overlay.
#[derive(Debug, Clone)]
#[must_use = "a property source does nothing until resolved"]
pub struct PropertySource {
    dir: PathBuf,
    base_name: String,
}

impl PropertySource {
    /// Default base file name (without the `.properties` extension).
    pub const DEFAULT_BASE_NAME: &'static str = "application";

    /// Creates a property source rooted at the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            base_name: Self::DEFAULT_BASE_NAME.to_string(),
        }
    }

    /// Sets the base file name (without the `.properties` extension).
    pub fn with_base_name(mut self, base_name: impl Into<String>) -> Self {
        self.base_name = base_name.into();
        self
    }

    /// Returns the directory this source reads from.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolves the layered property set for the given profile.
    ///
    /// The base layer is loaded first; if a profile is active, its
    /// override layer is merged on top (override wins). Absent files are
    /// skipped silently apart from a debug log line.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] for unreadable files and
    /// [`ConfigError::InvalidLine`] for malformed content. A file that
    /// does not exist is not an error.
    pub fn resolve(&self, profile: &ActiveProfile) -> ConfigResult<PropertySet> {
        let mut resolved = self.load_layer(&self.layer_path(None))?;

        if let Some(name) = profile.name() {
            let overrides = self.load_layer(&self.layer_path(Some(name)))?;
            resolved.merge(overrides);
        }

        tracing::debug!(
            target: TRACING_TARGET,
            dir = %self.dir.display(),
            profile = ?profile.name(),
            keys = resolved.len(),
            "resolved property layers"
        );

        Ok(resolved)
    }

    /// Path of the base layer or of a profile override layer.
    fn layer_path(&self, profile: Option<&str>) -> PathBuf {
        let file_name = match profile {
            Some(name) => format!("{}-{name}.properties", self.base_name),
            None => format!("{}.properties", self.base_name),
        };
        self.dir.join(file_name)
    }

    fn load_layer(&self, path: &Path) -> ConfigResult<PropertySet> {
        match PropertySet::from_file(path) {
            Err(ConfigError::Io { ref source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(
                    target: TRACING_TARGET,
                    path = %path.display(),
                    "property file absent, skipping layer"
                );
                Ok(PropertySet::new())
            }
            other => other,
        }
    }
}
