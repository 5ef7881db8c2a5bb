//! Audio port traits

use crate::domain::{AudioDeviceInfo, AudioSample, OracleResult};

/// Callback that fills a mono buffer with the next samples to play
pub type FillCallback = Box<dyn FnMut(&mut [AudioSample]) + Send + 'static>;

/// Trait for audio output (playback to speakers)
///
/// Note: No `Send` bound: cpal::Stream is !Send, so implementations
/// must live on the thread that created them.
pub trait AudioOutput {
    /// List available output devices
    fn list_devices(&self) -> OracleResult<Vec<AudioDeviceInfo>>;

    /// Start playback at `sample_rate`, calling the callback to get mono samples.
    /// `device_id` of `None` selects the system default device.
    fn start(
        &mut self,
        device_id: Option<&str>,
        sample_rate: u32,
        callback: FillCallback,
    ) -> OracleResult<()>;

    /// Stop playback immediately, dropping anything not yet heard
    fn stop(&mut self) -> OracleResult<()>;

    /// Check if currently playing
    fn is_running(&self) -> bool;
}
