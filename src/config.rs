// Global configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::{DEFAULT_PRESET_NAME, OutputFormat, Preset};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Name given to presets created without an explicit name
    #[serde(default = "default_preset_name")]
    pub preset_name: String,

    /// Output format for new presets (unset = no format, no seeded settings)
    #[serde(default)]
    pub output_format: Option<OutputFormat>,

    /// Input extensions accepted by new presets
    #[serde(default = "default_input_types")]
    pub input_types: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of: error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_preset_name() -> String {
    DEFAULT_PRESET_NAME.to_string()
}

fn default_input_types() -> Vec<String> {
    vec!["wav".to_string(), "flac".to_string()]
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            preset_name: default_preset_name(),
            output_format: None,
            input_types: default_input_types(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl DefaultsConfig {
    /// Preset built from these defaults, optionally renamed
    pub fn new_preset(&self, name: Option<&str>) -> Preset {
        let name = name.unwrap_or(&self.preset_name);
        match self.output_format {
            Some(format) => Preset::with_format(name, format, self.input_types.clone()),
            None => {
                let mut preset = Preset::new();
                preset.set_name(name);
                preset.set_input_types(self.input_types.clone());
                preset
            }
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "macos") {
            dirs::home_dir()
                .context("Could not determine home directory")?
                .join(".config")
                .join("convpreset")
        } else {
            dirs::config_dir()
                .context("Could not determine config directory")?
                .join("convpreset")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from disk, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Config::default();

            // Try to save the default config, but don't fail if we can't
            // (e.g., if the directory isn't writable)
            if let Err(e) = config.save() {
                eprintln!("Warning: Could not create default config file: {:#}", e);
            }

            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
