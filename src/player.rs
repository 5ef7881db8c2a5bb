//! Real-time Morse playback
//!
//! The player walks the step sequence of a Morse string in order. For each
//! step it pushes the rendered samples into a ring buffer that the audio
//! callback drains, then blocks for the step's length, so steps never
//! overlap. `play` returns only when the sequence is done or stopped.
//!
//! `cpal::Stream` is `!Send`, so a player (and its output) stays on the
//! thread that built it. What crosses threads is the [`PlaybackControl`]:
//! the play-in-progress flag and the abort flag.

use crossbeam_channel::Sender;
use ringbuf::traits::{Consumer, Producer, Split};
use ringbuf::HeapRb;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::domain::{check_sample_rate, AudioSettings, OracleResult};
use crate::ports::{AudioOutput, Pacer};
use crate::tone::{sequence, StepKind, ToneSynth};

/// Seconds of audio the ring buffer can hold ahead of the device
const RING_SECONDS: usize = 2;

/// Extra wait after the last step so the device plays out its buffer
pub const DRAIN_TAIL: Duration = Duration::from_millis(100);

/// Progress notifications, sent while `play` is blocking
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    Started { steps: usize },
    Step { index: usize, kind: StepKind },
    Finished,
    Stopped { steps_played: usize },
}

/// How a call to `play` ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    Completed,
    Stopped { steps_played: usize },
    /// Another playback held the flag; nothing was done
    AlreadyPlaying,
}

/// Shared playback flags. Clone it to stop playback from another thread,
/// or to make several players refuse to sound at the same time.
///
/// Both flags only change while `transition` is held, so a stop can never
/// land after one playback has released the flag and before the next one
/// takes it.
#[derive(Debug, Clone, Default)]
pub struct PlaybackControl {
    playing: Arc<AtomicBool>,
    abort: Arc<AtomicBool>,
    transition: Arc<Mutex<()>>,
}

impl PlaybackControl {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.transition.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Take the play-in-progress flag with a fresh abort flag.
    /// False when another playback holds it.
    fn acquire(&self) -> bool {
        let _transition = self.lock();
        if self.playing.load(Ordering::SeqCst) {
            return false;
        }
        self.abort.store(false, Ordering::SeqCst);
        self.playing.store(true, Ordering::SeqCst);
        true
    }

    fn release(&self) {
        let _transition = self.lock();
        self.playing.store(false, Ordering::SeqCst);
        self.abort.store(false, Ordering::SeqCst);
    }

    /// Halt playback at once. A no-op when nothing is playing.
    pub fn stop(&self) {
        let _transition = self.lock();
        if self.playing.load(Ordering::SeqCst) {
            log::debug!("Stop requested");
            self.abort.store(true, Ordering::SeqCst);
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }
}

/// Releases the play-in-progress flag on every exit path
struct PlayingGuard(PlaybackControl);

impl Drop for PlayingGuard {
    fn drop(&mut self) {
        self.0.release();
    }
}

pub struct MorsePlayer<O: AudioOutput, P: Pacer> {
    output: O,
    pacer: P,
    control: PlaybackControl,
    device: Option<String>,
    sample_rate: u32,
    events: Option<Sender<PlaybackEvent>>,
}

impl<O: AudioOutput, P: Pacer> MorsePlayer<O, P> {
    pub fn new(output: O, pacer: P, settings: &AudioSettings, control: PlaybackControl) -> Self {
        Self {
            output,
            pacer,
            control,
            device: settings.output_device.clone(),
            sample_rate: settings.sample_rate,
            events: None,
        }
    }

    /// Send progress events to `sender` during playback
    pub fn with_events(mut self, sender: Sender<PlaybackEvent>) -> Self {
        self.events = Some(sender);
        self
    }

    pub fn control(&self) -> &PlaybackControl {
        &self.control
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    fn emit(&self, event: PlaybackEvent) {
        if let Some(tx) = &self.events {
            // A dropped receiver just means nobody is watching
            let _ = tx.send(event);
        }
    }

    /// Play a Morse string, blocking until it finishes or is stopped.
    pub fn play(&mut self, morse: &str) -> OracleResult<PlaybackOutcome> {
        check_sample_rate(self.sample_rate)?;
        if !self.control.acquire() {
            log::debug!("Playback already in progress, ignoring request");
            return Ok(PlaybackOutcome::AlreadyPlaying);
        }
        let abort = self.control.abort.clone();
        let _guard = PlayingGuard(self.control.clone());

        let steps = sequence(morse);
        if steps.is_empty() {
            return Ok(PlaybackOutcome::Completed);
        }

        let rb = HeapRb::<f32>::new(self.sample_rate as usize * RING_SECONDS);
        let (mut producer, mut consumer) = rb.split();

        self.output.start(
            self.device.as_deref(),
            self.sample_rate,
            Box::new(move |buf: &mut [f32]| {
                for sample in buf.iter_mut() {
                    *sample = consumer.try_pop().unwrap_or(0.0);
                }
            }),
        )?;

        log::info!("Playing {} steps", steps.len());
        self.emit(PlaybackEvent::Started { steps: steps.len() });

        let mut synth = ToneSynth::new(self.sample_rate);
        let mut steps_played = 0;

        for (index, step) in steps.iter().enumerate() {
            if abort.load(Ordering::SeqCst) {
                break;
            }

            let samples = synth.render_step(step);
            let pushed = producer.push_slice(&samples);
            if pushed < samples.len() {
                log::warn!("Playback buffer full, dropped {} samples", samples.len() - pushed);
            }

            log::trace!("Step {index}: {:?} for {:?}", step.kind, step.length);
            self.emit(PlaybackEvent::Step {
                index,
                kind: step.kind,
            });

            if !self.pacer.wait(step.length, &abort) {
                break;
            }
            steps_played += 1;
        }

        let stopped = abort.load(Ordering::SeqCst);
        if !stopped {
            self.pacer.wait(DRAIN_TAIL, &abort);
        }

        self.output.stop()?;

        if stopped {
            log::info!("Playback stopped after {steps_played} steps");
            self.emit(PlaybackEvent::Stopped { steps_played });
            Ok(PlaybackOutcome::Stopped { steps_played })
        } else {
            self.emit(PlaybackEvent::Finished);
            Ok(PlaybackOutcome::Completed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock_audio::{MockAudioOutput, MockCall};
    use std::sync::Mutex;

    /// Pacer that returns at once and remembers what it was asked to wait
    #[derive(Default)]
    struct RecordingPacer {
        waits: Mutex<Vec<Duration>>,
    }

    impl Pacer for RecordingPacer {
        fn wait(&self, duration: Duration, abort: &AtomicBool) -> bool {
            self.waits.lock().unwrap().push(duration);
            !abort.load(Ordering::SeqCst)
        }
    }

    fn player(output: MockAudioOutput) -> MorsePlayer<MockAudioOutput, RecordingPacer> {
        MorsePlayer::new(
            output,
            RecordingPacer::default(),
            &AudioSettings::default(),
            PlaybackControl::new(),
        )
    }

    #[test]
    fn test_waits_each_step_in_order() {
        let mut player = player(MockAudioOutput::new());
        let outcome = player.play(".- /").unwrap();
        assert_eq!(outcome, PlaybackOutcome::Completed);

        let waits = player.pacer.waits.lock().unwrap().clone();
        let ms: Vec<u64> = waits.iter().map(|d| d.as_millis() as u64).collect();
        assert_eq!(ms, vec![150, 350, 250, 500, 100]);
    }

    #[test]
    fn test_flag_cleared_after_play() {
        let mut player = player(MockAudioOutput::new());
        player.play("...").unwrap();
        assert!(!player.control().is_playing());
        assert_eq!(player.output().calls().last(), Some(&MockCall::Stop));
    }

    #[test]
    fn test_empty_morse_never_opens_device() {
        let mut player = player(MockAudioOutput::new());
        assert_eq!(player.play("\u{FFFD}").unwrap(), PlaybackOutcome::Completed);
        assert!(player.output().calls().is_empty());
    }

    #[test]
    fn test_second_trigger_is_noop_while_playing() {
        let mut player = player(MockAudioOutput::new());
        player.control.playing.store(true, Ordering::SeqCst);
        assert_eq!(player.play("...").unwrap(), PlaybackOutcome::AlreadyPlaying);
        assert!(player.output().calls().is_empty());
        // The flag belongs to whoever set it
        assert!(player.control().is_playing());
    }

    #[test]
    fn test_device_error_leaves_player_idle() {
        let mut player = player(MockAudioOutput::failing());
        assert!(player.play("...").is_err());
        assert!(!player.control().is_playing());
    }

    #[test]
    fn test_samples_reach_the_device() {
        let mut player = player(MockAudioOutput::new().with_capture(6615));
        player.play(".").unwrap();

        let captured = player.output().captured();
        assert_eq!(captured.len(), 6615);
        assert!(captured[..4410].iter().any(|s| s.abs() > 0.9));
        assert!(captured[4410..].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_events_follow_the_steps() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut player = player(MockAudioOutput::new()).with_events(tx);
        player.play(". -").unwrap();

        let events: Vec<PlaybackEvent> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                PlaybackEvent::Started { steps: 3 },
                PlaybackEvent::Step { index: 0, kind: StepKind::Dot },
                PlaybackEvent::Step { index: 1, kind: StepKind::LetterGap },
                PlaybackEvent::Step { index: 2, kind: StepKind::Dash },
                PlaybackEvent::Finished,
            ]
        );
    }

    #[test]
    fn test_unusable_sample_rate_is_refused() {
        let settings = AudioSettings {
            sample_rate: 0,
            ..AudioSettings::default()
        };
        let mut player = MorsePlayer::new(
            MockAudioOutput::new(),
            RecordingPacer::default(),
            &settings,
            PlaybackControl::new(),
        );
        let err = player.play("...").unwrap_err();
        assert!(err.to_string().contains("Sample rate"));
        assert!(!player.control().is_playing());
        assert!(player.output().calls().is_empty());
    }

    #[test]
    fn test_stale_abort_cleared_on_acquire() {
        let mut player = player(MockAudioOutput::new());
        player.control.abort.store(true, Ordering::SeqCst);
        assert_eq!(player.play(".").unwrap(), PlaybackOutcome::Completed);
    }

    #[test]
    fn test_stop_when_idle_is_noop() {
        let control = PlaybackControl::new();
        control.stop();
        assert!(!control.abort.load(Ordering::SeqCst));
        assert!(!control.is_playing());
    }
}
