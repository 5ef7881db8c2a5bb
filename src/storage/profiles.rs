//! Configuration profile persistence
//!
//! Save/load/list/delete configuration profiles as JSON files in a
//! `configs/` directory under the application's data directory.

use std::path::{Path, PathBuf};

use crate::domain::{
    check_sample_rate, Configuration, OracleError, OracleResult, Theme, DEFAULT_PROFILE,
};

/// Profile names become file names, so they are limited to letters,
/// digits, spaces, `-` and `_`. Surrounding whitespace is dropped.
fn profile_file_stem(name: &str) -> OracleResult<String> {
    let stem = name.trim();
    if stem.is_empty() {
        return Err(OracleError::Config("Profile name is empty".into()));
    }
    match stem
        .chars()
        .find(|&c| !(c.is_alphanumeric() || c == ' ' || c == '-' || c == '_'))
    {
        Some(bad) => Err(OracleError::Config(format!(
            "Profile name '{stem}' may not contain {bad:?}"
        ))),
        None => Ok(stem.to_string()),
    }
}

/// Settings to change in a profile. `None` keeps what was saved.
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub theme: Option<Theme>,
    pub output_device: Option<String>,
    pub sample_rate: Option<u32>,
    pub audio_enabled: Option<bool>,
}

impl ProfileChanges {
    fn apply(self, config: &mut Configuration) {
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if self.output_device.is_some() {
            config.audio.output_device = self.output_device;
        }
        if let Some(rate) = self.sample_rate {
            config.audio.sample_rate = rate;
        }
        if let Some(enabled) = self.audio_enabled {
            config.audio.enabled = enabled;
        }
    }
}

/// Profiles stored under `<base>/configs/<name>.json`
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    pub fn new(base: &Path) -> Self {
        Self {
            dir: base.join("configs"),
        }
    }

    /// Store under the platform config directory (e.g. `~/.config/morse-oracle`)
    pub fn platform_default() -> OracleResult<Self> {
        let base = dirs::config_dir()
            .ok_or_else(|| OracleError::Config("No configuration directory on this system".into()))?;
        Ok(Self::new(&base.join("morse-oracle")))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the configs directory if needed
    fn ensure_dir(&self) -> OracleResult<()> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| OracleError::Config(format!("Failed to create configs dir: {e}")))
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }

    pub fn save(&self, config: &Configuration) -> OracleResult<()> {
        let name = profile_file_stem(&config.name)?;
        check_sample_rate(config.audio.sample_rate)?;
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(config)
            .map_err(|e| OracleError::Config(format!("Serialization error: {e}")))?;
        std::fs::write(self.path_for(&name), json)
            .map_err(|e| OracleError::Config(format!("Failed to write config: {e}")))?;
        log::debug!("Saved configuration '{name}'");
        Ok(())
    }

    pub fn load(&self, name: &str) -> OracleResult<Configuration> {
        self.find(name)?
            .ok_or_else(|| OracleError::Config(format!("Configuration '{}' not found", name.trim())))
    }

    /// Load a profile, or `None` when it was never saved. A profile file that
    /// cannot be read or parsed is an error.
    pub fn find(&self, name: &str) -> OracleResult<Option<Configuration>> {
        let name = profile_file_stem(name)?;
        let json = match std::fs::read_to_string(self.path_for(&name)) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(OracleError::Config(format!("Failed to read config '{name}': {e}")))
            }
        };
        let config: Configuration = serde_json::from_str(&json)
            .map_err(|e| OracleError::Config(format!("Failed to parse config '{name}': {e}")))?;
        check_sample_rate(config.audio.sample_rate)?;
        Ok(Some(config))
    }

    /// Load a profile, falling back to defaults when the Default profile
    /// has never been saved. Other names must exist.
    pub fn load_or_default(&self, name: &str) -> OracleResult<Configuration> {
        match self.find(name)? {
            Some(config) => Ok(config),
            None if name.trim() == DEFAULT_PROFILE => Ok(Configuration::default()),
            None => Err(OracleError::Config(format!(
                "Configuration '{}' not found",
                name.trim()
            ))),
        }
    }

    /// Apply `changes` to a profile and save it. A profile that was never
    /// saved starts from defaults; one that fails to load is left alone.
    pub fn update(&self, name: &str, changes: ProfileChanges) -> OracleResult<Configuration> {
        let mut config = self.find(name)?.unwrap_or_else(|| Configuration {
            name: name.trim().to_string(),
            ..Configuration::default()
        });
        changes.apply(&mut config);
        self.save(&config)?;
        Ok(config)
    }

    pub fn list(&self) -> OracleResult<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let mut names: Vec<String> = std::fs::read_dir(&self.dir)
            .map_err(|e| OracleError::Config(format!("Failed to read configs dir: {e}")))?
            .filter_map(|entry| {
                let entry = entry.ok()?;
                let path = entry.path();
                if path.extension()?.to_str()? == "json" {
                    path.file_stem()?.to_str().map(String::from)
                } else {
                    None
                }
            })
            .collect();
        names.sort();
        Ok(names)
    }

    pub fn delete(&self, name: &str) -> OracleResult<()> {
        let name = profile_file_stem(name)?;
        if name == DEFAULT_PROFILE {
            return Err(OracleError::Config(
                "Cannot delete the Default configuration".into(),
            ));
        }
        let path = self.path_for(&name);
        if !path.exists() {
            return Err(OracleError::Config(format!("Configuration '{name}' not found")));
        }
        std::fs::remove_file(&path)
            .map_err(|e| OracleError::Config(format!("Failed to delete config '{name}': {e}")))
    }
}
