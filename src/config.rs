//! Shell configuration loaded from TOML with command-line overrides.

use std::path::{Path, PathBuf};
use std::time::Duration;

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::ConfigError;
use crate::navigation::{MenuPolicy, Screen};

/// Settings for the hosting shell.
///
/// Every field is optional in the file; missing fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Screen shown when the session starts.
    start_screen: Screen,

    /// Whether navigation closes open menus.
    menu_policy: MenuPolicy,

    /// How long the event loop waits for input before redrawing, in milliseconds.
    tick_rate_ms: u64,

    /// Wall-clock refresh period, in milliseconds.
    clock_refresh_ms: u64,

    /// File the TUI writes its logs to.
    log_file: PathBuf,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            start_screen: Screen::Welcome,
            menu_policy: MenuPolicy::Persist,
            tick_rate_ms: 100,
            clock_refresh_ms: 1000,
            log_file: PathBuf::from("resto_pager.log"),
        }
    }
}

impl ShellConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(start_screen = %config.start_screen, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    #[instrument(skip(self))]
    fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::new("tick_rate_ms must be greater than zero"));
        }
        if self.clock_refresh_ms == 0 {
            return Err(ConfigError::new("clock_refresh_ms must be greater than zero"));
        }
        Ok(())
    }

    /// Overrides the start screen from a kebab-case identifier.
    #[instrument(skip(self))]
    pub fn with_start_screen_named(mut self, name: &str) -> Result<Self, ConfigError> {
        self.start_screen = Screen::parse(name)?;
        Ok(self)
    }

    /// Overrides the menu policy.
    #[instrument(skip(self))]
    pub fn with_menu_policy(mut self, policy: MenuPolicy) -> Self {
        self.menu_policy = policy;
        self
    }

    /// Overrides the log file.
    #[instrument(skip(self))]
    pub fn with_log_file(mut self, path: PathBuf) -> Self {
        self.log_file = path;
        self
    }

    /// Event loop input timeout.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    /// Wall-clock refresh period.
    pub fn clock_refresh(&self) -> Duration {
        Duration::from_millis(self.clock_refresh_ms)
    }
}
