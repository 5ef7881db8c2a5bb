//! Configuration profiles
//!
//! A Configuration is a saved profile holding the settings a UI layer is
//! handed at startup: the theme to draw with and how tone playback should
//! reach the speakers. Nothing here is global; callers pass it in.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::error::{OracleError, OracleResult};

/// Name of the profile that always exists and cannot be deleted
pub const DEFAULT_PROFILE: &str = "Default";

/// Named UI theme. Only the selection is stored, palettes belong to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    #[serde(rename = "Stone Tablet")]
    StoneTablet,
    #[serde(rename = "Papyrus Scroll")]
    PapyrusScroll,
    #[serde(rename = "Obsidian Mirror")]
    ObsidianMirror,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::StoneTablet, Theme::PapyrusScroll, Theme::ObsidianMirror];

    pub fn name(&self) -> &'static str {
        match self {
            Theme::StoneTablet => "Stone Tablet",
            Theme::PapyrusScroll => "Papyrus Scroll",
            Theme::ObsidianMirror => "Obsidian Mirror",
        }
    }

    /// Look a theme up by its display name, ignoring case
    pub fn from_name(name: &str) -> Option<Theme> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Sample rates tones can be rendered at, in Hz
pub const SAMPLE_RATES: RangeInclusive<u32> = 8_000..=192_000;

/// Reject sample rates outside [`SAMPLE_RATES`]
pub fn check_sample_rate(rate: u32) -> OracleResult<()> {
    if SAMPLE_RATES.contains(&rate) {
        Ok(())
    } else {
        Err(OracleError::Config(format!(
            "Sample rate {rate} Hz is outside {}..={} Hz",
            SAMPLE_RATES.start(),
            SAMPLE_RATES.end()
        )))
    }
}

fn default_sample_rate() -> u32 {
    44100
}

fn default_audio_enabled() -> bool {
    true
}

/// Tone playback settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioSettings {
    /// When false, playback requests are refused with a message
    #[serde(default = "default_audio_enabled")]
    pub enabled: bool,
    /// Output device name; `None` selects the system default
    #[serde(default)]
    pub output_device: Option<String>,
    /// Sample rate in Hz used to render tones
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            enabled: default_audio_enabled(),
            output_device: None,
            sample_rate: default_sample_rate(),
        }
    }
}

/// A saved configuration profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Profile name (e.g., "Default", "Headphones")
    pub name: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub audio: AudioSettings,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            name: DEFAULT_PROFILE.to_string(),
            theme: Theme::default(),
            audio: AudioSettings::default(),
        }
    }
}
