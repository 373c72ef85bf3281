use crate::core::runtime::Timing;
use crate::core::session::Features;
use crate::errors::{AppError, AppResult};
use crate::models::tab::Tab;
use crate::utils::path;
use crate::view::terminal::DEFAULT_NOTICE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// JSON document with the itinerary (relative paths live in the app dir)
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_flag_file")]
    pub flag_file: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default = "default_day_tabs")]
    pub day_tabs: Vec<i64>,
    #[serde(default = "default_initial_tab")]
    pub initial_tab: String,
    /// Show the "stations" tab next to the day tabs
    #[serde(default = "default_true")]
    pub alternate_view: bool,
    /// Show the one-time reminder notice
    #[serde(default = "default_true")]
    pub first_run_reminder: bool,
    #[serde(default = "default_reminder_delay")]
    pub reminder_delay_secs: u64,
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
    #[serde(default = "default_true")]
    pub colors: bool,
    #[serde(default = "default_reminder_text")]
    pub reminder_text: String,
}

fn default_data_file() -> String {
    "events.json".to_string()
}
fn default_flag_file() -> String {
    "state.yml".to_string()
}
fn default_log_file() -> String {
    "itinerary.log".to_string()
}
fn default_day_tabs() -> Vec<i64> {
    vec![1, 2]
}
fn default_initial_tab() -> String {
    "day1".to_string()
}
fn default_true() -> bool {
    true
}
fn default_reminder_delay() -> u64 {
    3
}
fn default_tick_millis() -> u64 {
    1000
}
fn default_wrap_width() -> usize {
    72
}
fn default_reminder_text() -> String {
    DEFAULT_NOTICE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            flag_file: default_flag_file(),
            log_file: default_log_file(),
            day_tabs: default_day_tabs(),
            initial_tab: default_initial_tab(),
            alternate_view: true,
            first_run_reminder: true,
            reminder_delay_secs: default_reminder_delay(),
            tick_millis: default_tick_millis(),
            wrap_width: default_wrap_width(),
            colors: true,
            reminder_text: default_reminder_text(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        path::app_dir()
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("itinerary.conf")
    }

    pub fn data_path(&self) -> PathBuf {
        path::resolve(&self.data_file, &Self::config_dir())
    }

    pub fn flag_path(&self) -> PathBuf {
        path::resolve(&self.flag_file, &Self::config_dir())
    }

    pub fn log_path(&self) -> PathBuf {
        path::resolve(&self.log_file, &Self::config_dir())
    }

    /// Tab shown first, falling back to the first day.
    pub fn initial(&self) -> Tab {
        Tab::parse(&self.initial_tab)
            .unwrap_or_else(|| Tab::Day(self.day_tabs.first().copied().unwrap_or(1)))
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let cfg: Config = serde_yaml::from_str(&content)?;
            cfg.validate()?;
            Ok(cfg)
        } else {
            Ok(Config::default())
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.day_tabs.is_empty() {
            return Err(AppError::Config("day_tabs must list at least one day".into()));
        }
        Timing::from_config(self)?;
        match Tab::parse(&self.initial_tab) {
            Some(tab) if Features::from_config(self).tabs().contains(&tab) => Ok(()),
            _ => Err(AppError::Config(format!(
                "initial_tab '{}' is not one of the configured tabs",
                self.initial_tab
            ))),
        }
    }

    /// Initialize the app directory and the configuration file
    pub fn init_all(is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        if !is_test && !path.exists() {
            let yaml = serde_yaml::to_string(&Config::default())?;
            let mut file = fs::File::create(&path)?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(path)
    }
}
