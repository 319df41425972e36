//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before use.
//!
//! ## Paste Toggles
//!
//! ```bash
//! export PASTER_CONVERT_VIDEO_URLS="true"
//! export PASTER_CONVERT_ON_DEFAULT_PASTE="true"
//! export PASTER_AUTO_LINK_SELECTION="true"
//! ```
//!
//! The same toggles can be kept in a JSON file pointed to by
//! `PASTER_SETTINGS_FILE`:
//!
//! ```json
//! { "convert_video_urls": true, "convert_on_default_paste": false }
//! ```
//!
//! Missing fields take their defaults. Environment variables override the file.
//!
//! ## Optional Variables
//!
//! - `PASTER_SETTINGS_FILE` - JSON settings file (default: none)
//! - `RUST_LOG` - Log filter (default: `warn`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use crate::error::AppError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// User-facing toggles that gate the paste behavior.
///
/// Passed explicitly into [`crate::application::services::PasteService`];
/// nothing reads these from global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasteSettings {
    /// Rewrite shorts/short-link/embed URLs to the canonical watch URL.
    pub convert_video_urls: bool,
    /// Also rewrite on the editor's ordinary paste, not only explicit commands.
    pub convert_on_default_paste: bool,
    /// Wrap a pasted URL around the selected text as `[selection](url)`.
    pub auto_link_selection: bool,
}

impl Default for PasteSettings {
    fn default() -> Self {
        Self {
            convert_video_urls: true,
            convert_on_default_paste: true,
            auto_link_selection: true,
        }
    }
}

impl PasteSettings {
    /// Whether the ordinary paste path should canonicalize.
    pub fn convert_on_default(&self) -> bool {
        self.convert_video_urls && self.convert_on_default_paste
    }

    /// Parses settings from JSON, filling absent fields with defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse paste settings")
    }

    /// Loads settings from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        Self::from_json(&raw)
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub paste: PasteSettings,
    pub settings_file: Option<PathBuf>,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be read or parsed, or if
    /// a toggle variable holds something other than a boolean.
    pub fn from_env() -> Result<Self> {
        let settings_file = env::var("PASTER_SETTINGS_FILE").ok().map(PathBuf::from);

        let mut paste = match settings_file.as_deref() {
            Some(path) => PasteSettings::from_file(path)?,
            None => PasteSettings::default(),
        };

        if let Some(value) = load_bool("PASTER_CONVERT_VIDEO_URLS")? {
            paste.convert_video_urls = value;
        }
        if let Some(value) = load_bool("PASTER_CONVERT_ON_DEFAULT_PASTE")? {
            paste.convert_on_default_paste = value;
        }
        if let Some(value) = load_bool("PASTER_AUTO_LINK_SELECTION")? {
            paste.auto_link_selection = value;
        }

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            paste,
            settings_file,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if `log_format` is not `text` or `json`.
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(AppError::config(format!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            )));
        }

        Ok(())
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        match &self.settings_file {
            Some(path) => tracing::info!("  Settings file: {}", path.display()),
            None => tracing::info!("  Settings file: none"),
        }
        tracing::info!("  Convert video URLs: {}", self.paste.convert_video_urls);
        tracing::info!(
            "  Convert on default paste: {}",
            self.paste.convert_on_default_paste
        );
        tracing::info!("  Auto-link selection: {}", self.paste.auto_link_selection);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Parses a boolean toggle.
///
/// Accepts `true/false`, `1/0`, `yes/no`, `on/off`, case-insensitive.
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Reads an optional boolean variable; unset yields `None`.
fn load_bool(name: &str) -> Result<Option<bool>> {
    match env::var(name) {
        Ok(raw) => parse_bool(&raw).map(Some).ok_or_else(|| {
            anyhow::Error::from(AppError::config(format!(
                "{name} must be a boolean, got '{raw}'"
            )))
        }),
        Err(_) => Ok(None),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if loading or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    const TOGGLES: [&str; 4] = [
        "PASTER_SETTINGS_FILE",
        "PASTER_CONVERT_VIDEO_URLS",
        "PASTER_CONVERT_ON_DEFAULT_PASTE",
        "PASTER_AUTO_LINK_SELECTION",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment run serially
        unsafe {
            for name in TOGGLES {
                env::remove_var(name);
            }
            env::remove_var("LOG_FORMAT");
        }
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" on "), Some(true));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("No"), Some(false));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
        assert_eq!(parse_bool(""), None);
    }

    #[test]
    fn test_settings_defaults() {
        let settings = PasteSettings::default();
        assert!(settings.convert_video_urls);
        assert!(settings.convert_on_default_paste);
        assert!(settings.auto_link_selection);
        assert!(settings.convert_on_default());
    }

    #[test]
    fn test_convert_on_default_needs_both_toggles() {
        let settings = PasteSettings {
            convert_video_urls: false,
            ..Default::default()
        };
        assert!(!settings.convert_on_default());

        let settings = PasteSettings {
            convert_on_default_paste: false,
            ..Default::default()
        };
        assert!(!settings.convert_on_default());
    }

    #[test]
    fn test_settings_from_partial_json() {
        let settings = PasteSettings::from_json(r#"{ "convert_on_default_paste": false }"#).unwrap();
        assert!(settings.convert_video_urls);
        assert!(!settings.convert_on_default_paste);
        assert!(settings.auto_link_selection);
    }

    #[test]
    fn test_settings_from_invalid_json() {
        assert!(PasteSettings::from_json("{ not json").is_err());
        assert!(PasteSettings::from_json(r#"{ "convert_video_urls": "yes" }"#).is_err());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config {
            paste: PasteSettings::default(),
            settings_file: None,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        };
        assert!(config.validate().is_ok());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.log_format = "xml".to_string();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::Config(_))
        ));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();
        assert_eq!(config.paste, PasteSettings::default());
        assert!(config.settings_file.is_none());
        assert_eq!(config.log_format, "text");
    }

    #[test]
    #[serial]
    fn test_from_env_toggles() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("PASTER_CONVERT_VIDEO_URLS", "false");
            env::set_var("PASTER_AUTO_LINK_SELECTION", "off");
        }

        let config = Config::from_env().unwrap();
        assert!(!config.paste.convert_video_urls);
        assert!(config.paste.convert_on_default_paste);
        assert!(!config.paste.auto_link_selection);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_bad_bool() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("PASTER_CONVERT_ON_DEFAULT_PASTE", "sometimes");
        }

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("PASTER_CONVERT_ON_DEFAULT_PASTE"));
        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::Config(_))
        ));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_env_overrides_settings_file() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "convert_video_urls": false, "auto_link_selection": false }}"#
        )
        .unwrap();

        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("PASTER_SETTINGS_FILE", file.path());
            env::set_var("PASTER_CONVERT_VIDEO_URLS", "true");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.settings_file.as_deref(), Some(file.path()));
        // File value overridden by the environment
        assert!(config.paste.convert_video_urls);
        // File value kept
        assert!(!config.paste.auto_link_selection);
        // Absent from both, default
        assert!(config.paste.convert_on_default_paste);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_missing_settings_file_is_an_error() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("PASTER_SETTINGS_FILE", "/nonexistent/paster-settings.json");
        }

        assert!(Config::from_env().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_from_env_validates() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LOG_FORMAT", "yaml");
        }

        assert!(load_from_env().is_err());

        clear_env();
    }
}
