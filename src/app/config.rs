use anyhow::{Context, Result};
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::calculator::CalcSettings;
use crate::utils::BenchtopError;
use crate::constants::{
    CALC_DECIMAL_PLACES, CALC_ERROR_CLEAR_MS, CALC_MAX_ENTRY_LEN, CONFIG_APP_NAME,
    CONFIG_ENV_PREFIX, GALLERY_CROSSFADE_MS, LOCAL_CONFIG_PATH, UI_DEFAULT_THEME,
    UI_REFRESH_INTERVAL_MS,
};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Calculator configuration
    #[serde(default)]
    pub calculator: CalculatorConfig,

    /// Gallery configuration
    #[serde(default)]
    pub gallery: GalleryConfig,

    /// UI configuration
    #[serde(default)]
    pub ui: UIConfig,
}

/// Most decimal places a result can be rounded to before scaling loses precision
const MAX_DECIMAL_PLACES: u32 = 15;

impl Config {
    /// Reject values the calculator or the terminal loop cannot run with
    pub fn validate(&self) -> Result<(), BenchtopError> {
        if self.calculator.max_entry_len == 0 {
            return Err(BenchtopError::ConfigError(
                "calculator.max_entry_len must be at least 1".to_string(),
            ));
        }
        if self.calculator.decimal_places > MAX_DECIMAL_PLACES {
            return Err(BenchtopError::ConfigError(format!(
                "calculator.decimal_places must be at most {}, got {}",
                MAX_DECIMAL_PLACES, self.calculator.decimal_places
            )));
        }
        if self.ui.tick_ms == 0 {
            return Err(BenchtopError::ConfigError(
                "ui.tick_ms must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Calculator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Longest entry digit input may grow to
    pub max_entry_len: usize,
    /// Decimal places results are rounded to
    pub decimal_places: u32,
    /// How long an error stays visible before the calculator resets
    pub error_clear_ms: u64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_entry_len: CALC_MAX_ENTRY_LEN,
            decimal_places: CALC_DECIMAL_PLACES,
            error_clear_ms: CALC_ERROR_CLEAR_MS,
        }
    }
}

impl CalculatorConfig {
    pub fn settings(&self) -> CalcSettings {
        CalcSettings {
            max_entry_len: self.max_entry_len,
            decimal_places: self.decimal_places,
            error_clear_delay: Duration::from_millis(self.error_clear_ms),
        }
    }
}

/// Gallery configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Crossfade length when the lightbox image changes
    pub crossfade_ms: u64,
    /// TOML manifest listing the gallery items (built-in samples when unset)
    pub manifest: Option<PathBuf>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            crossfade_ms: GALLERY_CROSSFADE_MS,
            manifest: None,
        }
    }
}

impl GalleryConfig {
    pub fn crossfade(&self) -> Duration {
        Duration::from_millis(self.crossfade_ms)
    }
}

/// UI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UIConfig {
    /// Input polling interval of the terminal loop
    pub tick_ms: u64,
    /// Color theme
    pub theme: String,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            tick_ms: UI_REFRESH_INTERVAL_MS,
            theme: UI_DEFAULT_THEME.to_string(),
        }
    }
}

/// Load configuration from multiple sources
pub fn load_config() -> Result<Config> {
    let global_config = get_config_dir()?.join("config.toml");
    let local_config = PathBuf::from(LOCAL_CONFIG_PATH);
    load_config_from(&[global_config, local_config])
}

/// Layer defaults, then each existing file in order, then `BENCHTOP_` env vars
pub fn load_config_from(files: &[PathBuf]) -> Result<Config> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    for file in files.iter().filter(|f| f.exists()) {
        figment = figment.merge(Toml::file(file));
    }

    // Nested keys use a double underscore, e.g. BENCHTOP_CALCULATOR__ERROR_CLEAR_MS
    figment = figment.merge(Env::prefixed(CONFIG_ENV_PREFIX).split("__"));

    let config: Config = figment
        .extract()
        .context("Failed to load configuration")?;
    config.validate()?;
    Ok(config)
}

/// Read a single configuration file on top of the defaults
pub fn load_config_file(path: &Path) -> Result<Config> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: Config = toml::from_str(&toml_str)
        .with_context(|| format!("Failed to parse config at {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config at {}", path.display()))?;
    Ok(config)
}

/// Get the configuration directory
pub fn get_config_dir() -> Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", CONFIG_APP_NAME) {
        let config_dir = proj_dirs.config_dir();
        std::fs::create_dir_all(config_dir)?;
        Ok(config_dir.to_path_buf())
    } else {
        // Fallback to home directory
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .context("Could not determine home directory")?;
        let config_dir = PathBuf::from(home).join(".config").join(CONFIG_APP_NAME);
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }
}

/// Save configuration to file
pub fn save_config(config: &Config, path: Option<PathBuf>) -> Result<()> {
    let path = if let Some(p) = path {
        p
    } else {
        get_config_dir()?.join("config.toml")
    };

    let toml_string = toml::to_string_pretty(config)?;
    std::fs::write(&path, toml_string)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
}

/// Create a default configuration file if it doesn't exist
pub fn init_config() -> Result<PathBuf> {
    let config_file = get_config_dir()?.join("config.toml");

    if !config_file.exists() {
        save_config(&Config::default(), Some(config_file.clone()))?;
    }

    Ok(config_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_constants() {
        let config = Config::default();
        assert_eq!(config.calculator.settings(), CalcSettings::default());
        assert_eq!(config.gallery.crossfade(), Duration::from_millis(100));
        assert_eq!(config.gallery.manifest, None);
        assert_eq!(config.ui.tick_ms, 50);
    }

    #[test]
    fn test_later_files_override_earlier() {
        let temp_dir = TempDir::new().unwrap();
        let global = temp_dir.path().join("global.toml");
        let local = temp_dir.path().join("local.toml");
        fs::write(&global, "[calculator]\nmax_entry_len = 10\nerror_clear_ms = 500\ndecimal_places = 4\n").unwrap();
        fs::write(&local, "[calculator]\nmax_entry_len = 16\n").unwrap();

        let config = load_config_from(&[global, local, temp_dir.path().join("missing.toml")]).unwrap();
        assert_eq!(config.calculator.max_entry_len, 16);
        assert_eq!(config.calculator.error_clear_ms, 500);
        assert_eq!(config.calculator.decimal_places, 4);
        assert_eq!(config.ui, UIConfig::default());
    }

    #[test]
    fn test_save_then_load_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let mut config = Config::default();
        config.gallery.manifest = Some(PathBuf::from("gallery.toml"));
        config.ui.theme = "light".to_string();

        save_config(&config, Some(path.clone())).unwrap();
        assert_eq!(load_config_file(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[ui]\ntick_ms = 20\ntheme = \"light\"\n").unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.ui.tick_ms, 20);
        assert_eq!(config.calculator, CalculatorConfig::default());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        fs::write(&path, "[calculator]\ndecimal_places = 40\n").unwrap();
        let err = load_config_file(&path).unwrap_err();
        let cause = err.downcast_ref::<BenchtopError>();
        assert!(matches!(cause, Some(BenchtopError::ConfigError(_))));

        fs::write(&path, "[calculator]\nmax_entry_len = 0\n").unwrap();
        assert!(load_config_file(&path).is_err());
        assert!(load_config_from(&[path.clone()]).is_err());

        fs::write(&path, "[ui]\ntick_ms = 0\n").unwrap();
        assert!(load_config_file(&path).is_err());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }
}
