//! Tone synthesizer: renders playback steps to audio samples
//!
//! Pipeline: Morse string → steps → sine tone + trailing silence per step.
//! Every tone restarts the oscillator at zero phase, so dots and dashes
//! all begin the same way.

use crate::domain::AudioSample;
use crate::dsp::oscillator::Oscillator;
use crate::tone::sequencer::{ToneStep, TONE_FREQUENCY_HZ};

pub struct ToneSynth {
    sample_rate: u32,
    oscillator: Oscillator,
}

impl ToneSynth {
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            oscillator: Oscillator::new(TONE_FREQUENCY_HZ, sample_rate as f64),
        }
    }

    /// Number of samples covering `duration` at this sample rate
    fn samples_for(&self, duration: std::time::Duration) -> usize {
        (self.sample_rate as u128 * duration.as_millis() / 1000) as usize
    }

    /// Render one step: the tone part, then silence to the step length
    pub fn render_step(&mut self, step: &ToneStep) -> Vec<AudioSample> {
        let total = self.samples_for(step.length);
        let sounding = self.samples_for(step.tone).min(total);

        let mut samples = Vec::with_capacity(total);
        self.oscillator.reset();
        for _ in 0..sounding {
            samples.push(self.oscillator.next_sample());
        }
        samples.resize(total, 0.0);
        samples
    }

    /// Render a whole step sequence back to back
    pub fn render(&mut self, steps: &[ToneStep]) -> Vec<AudioSample> {
        let mut samples = Vec::new();
        for step in steps {
            samples.extend(self.render_step(step));
        }
        samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tone::sequencer::{sequence, StepKind};

    #[test]
    fn test_dot_length_in_samples() {
        let mut synth = ToneSynth::new(44100);
        let samples = synth.render_step(&ToneStep::new(StepKind::Dot));

        // 150 ms step, 100 ms of it sounding
        assert_eq!(samples.len(), 6615);
        assert!(samples[..4410].iter().any(|s| s.abs() > 0.9));
        assert!(samples[4410..].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_gap_is_silent() {
        let mut synth = ToneSynth::new(48000);
        let samples = synth.render_step(&ToneStep::new(StepKind::WordGap));
        assert_eq!(samples.len(), 24000);
        assert!(samples.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_render_concatenates_steps() {
        let mut synth = ToneSynth::new(8000);
        let steps = sequence(". -");
        let samples = synth.render(&steps);
        // 150 + 250 + 350 ms at 8 kHz
        assert_eq!(samples.len(), 1200 + 2000 + 2800);
    }

    #[test]
    fn test_samples_in_valid_range() {
        let mut synth = ToneSynth::new(44100);
        let samples = synth.render(&sequence("-.-. --.-"));
        for (i, &s) in samples.iter().enumerate() {
            assert!((-1.0..=1.0).contains(&s), "Sample {} out of range: {}", i, s);
        }
    }
}
