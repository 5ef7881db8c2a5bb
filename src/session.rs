//! Translation session
//!
//! Everything a front end shows: direction, input and output text, the file
//! being edited, and the history of translations made. Operations that fail
//! leave the session exactly as it was.

use std::path::{Path, PathBuf};

use crate::codec;
use crate::domain::{Configuration, Direction, OracleError, OracleResult, TranslationRecord};
use crate::storage::{load_document, save_document, TranslationDocument};

pub struct Session {
    config: Configuration,
    mode: Direction,
    input: String,
    output: String,
    current_file: Option<PathBuf>,
    history: Vec<TranslationRecord>,
}

impl Session {
    pub fn new(config: Configuration) -> Self {
        Self {
            config,
            mode: Direction::default(),
            input: String::new(),
            output: String::new(),
            current_file: None,
            history: Vec::new(),
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn set_config(&mut self, config: Configuration) {
        self.config = config;
    }

    pub fn mode(&self) -> Direction {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Direction) {
        self.mode = mode;
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    /// Translations made in this session, oldest first
    pub fn history(&self) -> &[TranslationRecord] {
        &self.history
    }

    /// True when there is input or output that could be lost
    pub fn has_content(&self) -> bool {
        !self.input.trim().is_empty() || !self.output.trim().is_empty()
    }

    /// Translate the input in the current direction and record it
    pub fn translate(&mut self) -> OracleResult<&str> {
        let input = self.input.trim();
        if input.is_empty() {
            return Err(OracleError::Session("Nothing to translate".into()));
        }

        let output = match self.mode {
            Direction::Encode => codec::encode(input),
            Direction::Decode => codec::decode(input),
        };
        log::debug!("{} {} chars -> {} chars", self.mode, input.chars().count(), output.chars().count());

        self.history
            .push(TranslationRecord::new(self.mode, input.to_string(), output.clone()));
        self.output = output;
        Ok(&self.output)
    }

    /// Clear input and output, keeping the current file
    pub fn clear(&mut self) {
        self.input.clear();
        self.output.clear();
    }

    /// Start over with no text and no file
    pub fn new_document(&mut self) {
        self.clear();
        self.current_file = None;
    }

    /// Snapshot of the current state as a document
    pub fn document(&self) -> TranslationDocument {
        TranslationDocument::new(self.input.trim(), self.output.trim(), self.mode)
    }

    /// Replace the session text with a saved document
    pub fn open(&mut self, path: &Path) -> OracleResult<()> {
        let doc = load_document(path)?;
        self.input = doc.input;
        self.output = doc.output;
        self.mode = doc.mode;
        self.current_file = Some(path.to_path_buf());
        Ok(())
    }

    /// Save to the file last opened or saved
    pub fn save(&self) -> OracleResult<&Path> {
        let path = self
            .current_file
            .as_deref()
            .ok_or_else(|| OracleError::Session("No file to save to, choose a path first".into()))?;
        save_document(path, &self.document())?;
        Ok(path)
    }

    /// Save to `path`, which becomes the current file on success
    pub fn save_as(&mut self, path: &Path) -> OracleResult<()> {
        save_document(path, &self.document())?;
        self.current_file = Some(path.to_path_buf());
        Ok(())
    }

    /// The Morse output, if it may be played right now
    pub fn playable_morse(&self) -> OracleResult<&str> {
        if !self.config.audio.enabled {
            return Err(OracleError::Audio("Audio playback is disabled".into()));
        }
        if self.mode == Direction::Decode {
            return Err(OracleError::Session(
                "Encode text to Morse before playing".into(),
            ));
        }
        let morse = self.output.trim();
        if morse.is_empty() {
            return Err(OracleError::Session(
                "No Morse code to play, translate something first".into(),
            ));
        }
        Ok(morse)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}
