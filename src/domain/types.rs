//! Core domain types

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Audio sample type (32-bit float, range -1.0 to 1.0)
pub type AudioSample = f32;

/// Which way a translation goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Text to Morse
    #[default]
    Encode,
    /// Morse to text
    Decode,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Encode => "encode",
            Direction::Decode => "decode",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One completed translation, as kept in the session history.
///
/// Fields are private so a record cannot change after it is created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationRecord {
    direction: Direction,
    input: String,
    output: String,
    timestamp: DateTime<Local>,
}

impl TranslationRecord {
    pub fn new(direction: Direction, input: String, output: String) -> Self {
        Self {
            direction,
            input,
            output,
            timestamp: Local::now(),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }
}

/// Information about an audio output device
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioDeviceInfo {
    pub id: String,
    pub name: String,
    pub is_default: bool,
}
