//! Command-line arguments.

use std::path::PathBuf;

use azbuilder_config::{ActiveProfile, PropertySource};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::TRACING_TARGET_CONFIG;

/// Configuration check tool for azbuilder services.
#[derive(Debug, Clone, Parser)]
#[command(name = "azbuilder")]
#[command(about = "Loads and validates azbuilder service configuration")]
#[command(version)]
pub struct Cli {
    /// Directory containing the property files.
    #[arg(long, env = "AZBUILDER_CONFIG_DIR", default_value = ".")]
    pub config_dir: PathBuf,

    /// Active configuration profile.
    ///
    /// Selects the override file `{base-name}-{profile}.properties`.
    /// When absent, resolution uses the base file only.
    #[arg(long, env = "AZBUILDER_PROFILES_ACTIVE")]
    pub profile: Option<String>,

    /// Base property file name, without the `.properties` extension.
    #[arg(long, default_value = "application")]
    pub base_name: String,

    /// Print the resolved configuration as JSON (credentials redacted).
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses CLI arguments.
    ///
    /// Ensures .env files are loaded before clap parses arguments, so
    /// environment variables from .env can serve as argument defaults.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    /// Loads environment variables from .env file if the dotenv feature is enabled.
    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    /// No-op when dotenv feature is disabled.
    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Initializes tracing with environment-based filtering.
    pub fn init_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    /// Returns the property source to resolve from.
    pub fn property_source(&self) -> PropertySource {
        PropertySource::new(&self.config_dir).with_base_name(&self.base_name)
    }

    /// Returns the active profile, if any.
    ///
    /// A blank or whitespace-only name (typically an empty
    /// `AZBUILDER_PROFILES_ACTIVE` variable picked up by clap) means no
    /// active profile, matching [`ActiveProfile::from_env`].
    pub fn active_profile(&self) -> ActiveProfile {
        match self.profile.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => ActiveProfile::named(name),
            _ => ActiveProfile::none(),
        }
    }

    /// Logs the resolution inputs at debug level.
    pub fn log(&self) {
        tracing::debug!(
            target: TRACING_TARGET_CONFIG,
            config_dir = %self.config_dir.display(),
            profile = ?self.profile,
            base_name = %self.base_name,
            "resolving configuration"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_explicit_arguments() {
        let cli = Cli::try_parse_from([
            "azbuilder",
            "--config-dir",
            "/etc/azbuilder",
            "--profile",
            "prod",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.config_dir, PathBuf::from("/etc/azbuilder"));
        assert_eq!(cli.active_profile().name(), Some("prod"));
        assert_eq!(cli.base_name, "application");
        assert!(cli.json);
    }

    #[test]
    fn profile_defaults_to_none() {
        let cli = Cli::try_parse_from(["azbuilder", "--config-dir", "/tmp"]).unwrap();
        assert_eq!(cli.active_profile(), ActiveProfile::none());
        assert!(!cli.json);
    }

    #[test]
    fn blank_profile_means_no_profile() {
        let cli = Cli::try_parse_from(["azbuilder", "--profile", ""]).unwrap();
        assert_eq!(cli.active_profile(), ActiveProfile::none());

        let cli = Cli::try_parse_from(["azbuilder", "--profile", "  "]).unwrap();
        assert_eq!(cli.active_profile(), ActiveProfile::none());

        let cli = Cli::try_parse_from(["azbuilder", "--profile", " prod "]).unwrap();
        assert_eq!(cli.active_profile(), ActiveProfile::named("prod"));
    }
}
