//! Application configuration.

use crate::consts::cli_consts::{CONFIG_DIR, CONFIG_FILE};
use crate::error::DashboardError;
use crate::ui::store::{Dashboard, Timeframe, ViewState};
use crate::ui::theme::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_dashboard() -> String {
    Dashboard::default().id().to_string()
}

fn default_exchange() -> String {
    ViewState::default().selected_exchange
}

fn default_pair() -> String {
    ViewState::default().selected_pair
}

fn default_true() -> bool {
    true
}

/// Persisted start-up preferences. Missing fields take their defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Dashboard id shown first. Unknown ids open the trading view.
    #[serde(default = "default_dashboard")]
    pub dashboard: String,

    #[serde(default)]
    pub theme: Theme,

    #[serde(default = "default_exchange")]
    pub exchange: String,

    #[serde(default = "default_pair")]
    pub pair: String,

    #[serde(default)]
    pub timeframe: Timeframe,

    /// Paint the palette background behind the shell.
    #[serde(default = "default_true")]
    pub with_background_color: bool,

    #[serde(default = "default_true")]
    pub show_splash: bool,

    /// Log file used by the interactive UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dashboard: default_dashboard(),
            theme: Theme::default(),
            exchange: default_exchange(),
            pair: default_pair(),
            timeframe: Timeframe::default(),
            with_background_color: true,
            show_splash: true,
            log_file: None,
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an error if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, DashboardError> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)?;
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns the defaults.
    ///
    /// # Errors
    /// Returns an error if an existing file cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self, DashboardError> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an error if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), DashboardError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// The view state the store starts from.
    pub fn initial_view_state(&self) -> ViewState {
        ViewState {
            current_dashboard: Dashboard::from_id(&self.dashboard),
            theme: self.theme,
            selected_exchange: self.exchange.clone(),
            selected_pair: self.pair.clone(),
            timeframe: self.timeframe,
        }
    }
}

/// Default configuration path, `~/.lyra/config.json`.
///
/// # Errors
/// Fails when the home directory cannot be determined.
pub fn get_config_path() -> Result<PathBuf, DashboardError> {
    let home = home::home_dir().ok_or(DashboardError::NoHomeDirectory)?;
    Ok(home.join(CONFIG_DIR).join(CONFIG_FILE))
}
