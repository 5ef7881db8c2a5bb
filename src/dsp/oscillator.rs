//! Sine oscillator for tone generation

use std::f64::consts::PI;

/// Phase-accumulating sine oscillator
pub struct Oscillator {
    phase: f64,
    phase_increment: f64,
}

impl Oscillator {
    /// Create a new oscillator with the given frequency and sample rate
    pub fn new(frequency: f64, sample_rate: f64) -> Self {
        Self {
            phase: 0.0,
            phase_increment: 2.0 * PI * frequency / sample_rate,
        }
    }

    /// Generate the next sample
    pub fn next_sample(&mut self) -> f32 {
        let sample = self.phase.sin() as f32;
        self.phase += self.phase_increment;
        self.wrap_phase();
        sample
    }

    /// Reset phase to zero, so the next tone starts from silence
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    fn wrap_phase(&mut self) {
        while self.phase >= 2.0 * PI {
            self.phase -= 2.0 * PI;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oscillator_frequency() {
        let mut osc = Oscillator::new(1000.0, 48000.0);

        // Two full cycles at 48 samples per cycle
        let samples: Vec<f32> = (0..96).map(|_| osc.next_sample()).collect();

        let zero_crossings: usize = samples
            .windows(2)
            .filter(|w| (w[0] > 0.0 && w[1] <= 0.0) || (w[0] < 0.0 && w[1] >= 0.0))
            .count();

        assert_eq!(zero_crossings, 3);
    }

    #[test]
    fn test_starts_at_zero_and_stays_in_range() {
        let mut osc = Oscillator::new(800.0, 44100.0);
        assert_eq!(osc.next_sample(), 0.0);
        for _ in 0..44100 {
            let s = osc.next_sample();
            assert!((-1.0..=1.0).contains(&s));
        }
        osc.reset();
        assert_eq!(osc.next_sample(), 0.0);
    }
}
