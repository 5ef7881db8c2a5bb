//! Tone sequencer: converts a Morse string into timed playback steps
//!
//! Each character of the Morse string is one step, consumed left to right:
//!
//! | char | step      | sounding | step length |
//! |------|-----------|----------|-------------|
//! | `.`  | Dot       | 100 ms   | 150 ms      |
//! | `-`  | Dash      | 300 ms   | 350 ms      |
//! | ` `  | LetterGap | silent   | 250 ms      |
//! | `/`  | WordGap   | silent   | 500 ms      |
//!
//! Anything else (including the unknown marker) yields no step.

use std::time::Duration;

/// Pitch shared by dots and dashes
pub const TONE_FREQUENCY_HZ: f64 = 800.0;

const DOT_TONE: Duration = Duration::from_millis(100);
const DOT_STEP: Duration = Duration::from_millis(150);
const DASH_TONE: Duration = Duration::from_millis(300);
const DASH_STEP: Duration = Duration::from_millis(350);
const LETTER_GAP: Duration = Duration::from_millis(250);
const WORD_GAP: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Dot,
    Dash,
    LetterGap,
    WordGap,
}

impl StepKind {
    /// Step for one Morse character, None for characters that are not played
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(StepKind::Dot),
            '-' => Some(StepKind::Dash),
            ' ' => Some(StepKind::LetterGap),
            '/' => Some(StepKind::WordGap),
            _ => None,
        }
    }
}

/// One timed unit of playback.
///
/// The tone sounds for `tone` from the start of the step; the rest of
/// `length` is silence. Gap steps have a zero tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneStep {
    pub kind: StepKind,
    pub tone: Duration,
    pub length: Duration,
}

impl ToneStep {
    pub fn new(kind: StepKind) -> Self {
        let (tone, length) = match kind {
            StepKind::Dot => (DOT_TONE, DOT_STEP),
            StepKind::Dash => (DASH_TONE, DASH_STEP),
            StepKind::LetterGap => (Duration::ZERO, LETTER_GAP),
            StepKind::WordGap => (Duration::ZERO, WORD_GAP),
        };
        Self { kind, tone, length }
    }

    pub fn is_sounding(&self) -> bool {
        !self.tone.is_zero()
    }
}

/// Iterator over the steps of a Morse string
pub struct ToneSequencer<'a> {
    chars: std::str::Chars<'a>,
}

impl<'a> ToneSequencer<'a> {
    pub fn new(morse: &'a str) -> Self {
        Self {
            chars: morse.chars(),
        }
    }
}

impl Iterator for ToneSequencer<'_> {
    type Item = ToneStep;

    fn next(&mut self) -> Option<ToneStep> {
        self.chars
            .by_ref()
            .find_map(StepKind::from_char)
            .map(ToneStep::new)
    }
}

/// Collect the full step sequence of a Morse string
pub fn sequence(morse: &str) -> Vec<ToneStep> {
    ToneSequencer::new(morse).collect()
}

/// Total playing time of a step sequence
pub fn total_duration(steps: &[ToneStep]) -> Duration {
    steps.iter().map(|s| s.length).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(morse: &str) -> Vec<StepKind> {
        ToneSequencer::new(morse).map(|s| s.kind).collect()
    }

    #[test]
    fn test_each_symbol_maps_to_one_step() {
        use StepKind::*;
        assert_eq!(kinds(".- / -"), vec![Dot, Dash, LetterGap, WordGap, LetterGap, Dash]);
    }

    #[test]
    fn test_dash_is_three_dots_long() {
        let dot = ToneStep::new(StepKind::Dot);
        let dash = ToneStep::new(StepKind::Dash);
        assert_eq!(dash.tone, dot.tone * 3);
        assert!(dot.is_sounding());
        assert!(dash.length > dot.length);
    }

    #[test]
    fn test_gaps_are_silent() {
        let letter = ToneStep::new(StepKind::LetterGap);
        let word = ToneStep::new(StepKind::WordGap);
        assert!(!letter.is_sounding());
        assert!(!word.is_sounding());
        assert!(word.length > letter.length);
    }

    #[test]
    fn test_unplayable_characters_are_skipped() {
        assert_eq!(kinds("\u{FFFD}.x-"), vec![StepKind::Dot, StepKind::Dash]);
        assert!(sequence("").is_empty());
    }

    #[test]
    fn test_sos_duration() {
        let steps = sequence("... --- ...");
        assert_eq!(steps.len(), 11);
        assert_eq!(total_duration(&steps), Duration::from_millis(3 * 150 + 250 + 3 * 350 + 250 + 3 * 150));
    }
}
