// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[campaign]` - Fundraising figures shown on the page
//! - `[services]` - Hosted-service credentials (payment key, email ids)
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `CORNERSTONE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Credential Overrides
//!
//! Service credentials may also come from the process environment
//! (`CORNERSTONE_PAYMENT_PUBLIC_KEY`, `CORNERSTONE_EMAIL_SERVICE_ID`,
//! `CORNERSTONE_EMAIL_TEMPLATE_ID`, `CORNERSTONE_EMAIL_ACCOUNT_ID`), which
//! take precedence over the file. An absent credential stays an empty string;
//! the affected submission path reports a configuration error instead of
//! calling out.
//!
//! # Examples
//!
//! ```no_run
//! use cornerstone::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::services::email::EmailCredentials;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable overriding the payment gateway public key.
pub const ENV_PAYMENT_PUBLIC_KEY: &str = "CORNERSTONE_PAYMENT_PUBLIC_KEY";

/// Environment variable overriding the email service id.
pub const ENV_EMAIL_SERVICE_ID: &str = "CORNERSTONE_EMAIL_SERVICE_ID";

/// Environment variable overriding the email template id.
pub const ENV_EMAIL_TEMPLATE_ID: &str = "CORNERSTONE_EMAIL_TEMPLATE_ID";

/// Environment variable overriding the email account id.
pub const ENV_EMAIL_ACCOUNT_ID: &str = "CORNERSTONE_EMAIL_ACCOUNT_ID";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Fundraising figures shown in the hero and progress sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CampaignConfig {
    /// Fundraising target in naira.
    #[serde(default = "default_goal_naira", skip_serializing_if = "Option::is_none")]
    pub goal_naira: Option<u64>,

    /// Funds raised so far in naira.
    #[serde(
        default = "default_raised_naira",
        skip_serializing_if = "Option::is_none"
    )]
    pub raised_naira: Option<u64>,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            goal_naira: default_goal_naira(),
            raised_naira: default_raised_naira(),
        }
    }
}

impl CampaignConfig {
    /// Target goal, falling back to the built-in figure.
    pub fn goal(&self) -> u64 {
        self.goal_naira.unwrap_or(FUNDRAISING_GOAL_NAIRA)
    }

    /// Raised amount, falling back to the built-in figure.
    pub fn raised(&self) -> u64 {
        self.raised_naira.unwrap_or(FUNDS_RAISED_NAIRA)
    }

    /// Fraction of the goal raised, in `[0.0, 1.0]`.
    pub fn progress(&self) -> f32 {
        let goal = self.goal();
        if goal == 0 {
            return 0.0;
        }
        (self.raised() as f64 / goal as f64).clamp(0.0, 1.0) as f32
    }
}

/// Credentials for the hosted payment and email services.
///
/// Empty strings mean "not configured"; submission paths that need a missing
/// credential fail with a user-visible configuration error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ServicesConfig {
    /// Payment gateway public key.
    #[serde(default)]
    pub payment_public_key: String,

    /// Email delivery service id.
    #[serde(default)]
    pub email_service_id: String,

    /// Email delivery template id.
    #[serde(default)]
    pub email_template_id: String,

    /// Email delivery account id.
    #[serde(default)]
    pub email_account_id: String,
}

impl ServicesConfig {
    /// Bundles the email ids into the delivery client's credential type.
    pub fn email_credentials(&self) -> EmailCredentials {
        EmailCredentials {
            service_id: self.email_service_id.clone(),
            template_id: self.email_template_id.clone(),
            account_id: self.email_account_id.clone(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Fundraising figures.
    #[serde(default)]
    pub campaign: CampaignConfig,

    /// Hosted-service credentials.
    #[serde(default)]
    pub services: ServicesConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_goal_naira() -> Option<u64> {
    Some(FUNDRAISING_GOAL_NAIRA)
}

fn default_raised_naira() -> Option<u64> {
    Some(FUNDS_RAISED_NAIRA)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Environment Overrides
// =============================================================================

/// Applies credential overrides from the process environment.
///
/// A set, non-empty variable wins over the file value; anything else leaves
/// the file value in place.
pub fn apply_env_overrides(config: &mut Config) {
    apply_env_overrides_from(config, |name| std::env::var(name).ok());
}

fn apply_env_overrides_from(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    let overrides = [
        (ENV_PAYMENT_PUBLIC_KEY, &mut config.services.payment_public_key),
        (ENV_EMAIL_SERVICE_ID, &mut config.services.email_service_id),
        (ENV_EMAIL_TEMPLATE_ID, &mut config.services.email_template_id),
        (ENV_EMAIL_ACCOUNT_ID, &mut config.services.email_account_id),
    ];
    for (name, slot) in overrides {
        if let Some(value) = lookup(name) {
            if !value.is_empty() {
                *slot = value;
            }
        }
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
/// Environment credential overrides are applied in both cases.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let (mut config, warning) = read_config(base_dir);
    apply_env_overrides(&mut config);
    (config, warning)
}

fn read_config(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path. No environment overrides.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            campaign: CampaignConfig {
                goal_naira: Some(250_000_000),
                raised_naira: Some(1_000_000),
            },
            services: ServicesConfig {
                payment_public_key: "FLWPUBK-test".to_string(),
                email_service_id: "service_abc".to_string(),
                email_template_id: "template_xyz".to_string(),
                email_account_id: "user_123".to_string(),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("expected")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.campaign.goal(), FUNDRAISING_GOAL_NAIRA);
        assert_eq!(config.campaign.raised(), FUNDS_RAISED_NAIRA);
        assert!(config.services.payment_public_key.is_empty());
        assert!(config.services.email_service_id.is_empty());
        assert!(config.services.email_template_id.is_empty());
        assert!(config.services.email_account_id.is_empty());
    }

    #[test]
    fn progress_is_computed_from_figures() {
        let campaign = CampaignConfig {
            goal_naira: Some(200),
            raised_naira: Some(50),
        };
        assert!((campaign.progress() - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn progress_clamps_overfunded_campaign() {
        let campaign = CampaignConfig {
            goal_naira: Some(100),
            raised_naira: Some(150),
        };
        assert_eq!(campaign.progress(), 1.0);
    }

    #[test]
    fn progress_guards_zero_goal() {
        let campaign = CampaignConfig {
            goal_naira: Some(0),
            raised_naira: Some(50),
        };
        assert_eq!(campaign.progress(), 0.0);
    }

    #[test]
    fn sectioned_format_loads_correctly() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        let sectioned_content = r#"
[general]
language = "de"
theme_mode = "light"

[campaign]
goal_naira = 300000000
raised_naira = 2500000

[services]
payment_public_key = "FLWPUBK-live"
email_service_id = "service_live"
email_template_id = "template_live"
email_account_id = "user_live"
"#;
        fs::write(&config_path, sectioned_content).expect("write sectioned config");

        let loaded = load_from_path(&config_path).expect("should load sectioned config");

        assert_eq!(loaded.general.language, Some("de".to_string()));
        assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
        assert_eq!(loaded.campaign.goal(), 300_000_000);
        assert_eq!(loaded.campaign.raised(), 2_500_000);
        assert_eq!(loaded.services.payment_public_key, "FLWPUBK-live");
        assert_eq!(loaded.services.email_account_id, "user_live");
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"en-US\"\n").expect("write config");

        let loaded = load_from_path(&config_path).expect("should load partial config");
        assert_eq!(loaded.general.language, Some("en-US".to_string()));
        assert_eq!(loaded.campaign.goal(), FUNDRAISING_GOAL_NAIRA);
        assert!(loaded.services.payment_public_key.is_empty());
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save config");
        let content = fs::read_to_string(&config_path).expect("read config");

        assert!(
            content.contains("[general]"),
            "should have [general] section"
        );
        assert!(
            content.contains("[campaign]"),
            "should have [campaign] section"
        );
        assert!(
            content.contains("[services]"),
            "should have [services] section"
        );
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let (config, warning) = read_config(Some(base_dir));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config.general.language, Config::default().general.language);
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config_path = base_dir.join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("write file");

        let (config, warning) = read_config(Some(base_dir));
        assert!(warning.is_some(), "should warn about parse error");
        assert_eq!(
            warning.unwrap(),
            "notification-config-load-error".to_string()
        );
        assert_eq!(config.general.language, Config::default().general.language);
    }

    #[test]
    fn env_override_replaces_file_credential() {
        let mut config = Config {
            services: ServicesConfig {
                payment_public_key: "FLWPUBK-file".to_string(),
                ..ServicesConfig::default()
            },
            ..Config::default()
        };

        apply_env_overrides_from(&mut config, |name| {
            (name == ENV_PAYMENT_PUBLIC_KEY).then(|| "FLWPUBK-env".to_string())
        });

        assert_eq!(config.services.payment_public_key, "FLWPUBK-env");
        assert!(config.services.email_service_id.is_empty());
    }

    #[test]
    fn empty_env_value_keeps_file_credential() {
        let mut config = Config {
            services: ServicesConfig {
                email_service_id: "service_file".to_string(),
                ..ServicesConfig::default()
            },
            ..Config::default()
        };

        apply_env_overrides_from(&mut config, |_| Some(String::new()));

        assert_eq!(config.services.email_service_id, "service_file");
    }

    #[test]
    fn email_credentials_bundle_matches_sections() {
        let services = ServicesConfig {
            payment_public_key: String::new(),
            email_service_id: "s".to_string(),
            email_template_id: "t".to_string(),
            email_account_id: "a".to_string(),
        };
        let credentials = services.email_credentials();
        assert_eq!(credentials.service_id, "s");
        assert_eq!(credentials.template_id, "t");
        assert_eq!(credentials.account_id, "a");
        assert!(credentials.is_complete());
    }

    #[test]
    fn save_with_override_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("nested").join("deeply");

        save_with_override(&Config::default(), Some(nested_dir.clone()))
            .expect("save should succeed");
        assert!(nested_dir.join("settings.toml").exists());
    }
}
