//! Tone playback timing and synthesis
//!
//! The sequencer turns a Morse string into timed steps; the synthesizer
//! turns steps into samples for an audio output.

pub mod sequencer;
pub mod synth;

pub use sequencer::{sequence, total_duration, StepKind, ToneSequencer, ToneStep, TONE_FREQUENCY_HZ};
pub use synth::ToneSynth;
