//! Mock audio adapter for development and testing without a sound card.
//!
//! Activate from the CLI by setting MOCK_AUDIO=1 in the environment:
//!
//!   MOCK_AUDIO=1 RUST_LOG=morse_oracle_lib=info morse-oracle encode --play SOS
//!
//! Every AudioOutput call is logged at INFO level and recorded, so tests can
//! check what the player asked of the device.

use crate::domain::{AudioDeviceInfo, AudioSample, OracleError, OracleResult};
use crate::ports::{AudioOutput, FillCallback};

const MOCK_DEVICE: &str = "Mock Speaker";

/// A call made against the mock device
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    Start {
        device: Option<String>,
        sample_rate: u32,
    },
    Stop,
}

pub struct MockAudioOutput {
    callback: Option<FillCallback>,
    calls: Vec<MockCall>,
    captured: Vec<AudioSample>,
    capture_limit: usize,
    fail_start: bool,
}

impl MockAudioOutput {
    pub fn new() -> Self {
        log::info!("[MOCK AUDIO] Initialized, device={MOCK_DEVICE}");
        Self {
            callback: None,
            calls: Vec::new(),
            captured: Vec::new(),
            capture_limit: 0,
            fail_start: false,
        }
    }

    /// On stop, pull up to `limit` samples out of the playback callback
    /// before releasing it. They are available from [`Self::captured`].
    pub fn with_capture(mut self, limit: usize) -> Self {
        self.capture_limit = limit;
        self
    }

    /// Make every `start` fail, as a missing sound card would
    pub fn failing() -> Self {
        let mut mock = Self::new();
        mock.fail_start = true;
        mock
    }

    pub fn calls(&self) -> &[MockCall] {
        &self.calls
    }

    pub fn captured(&self) -> &[AudioSample] {
        &self.captured
    }
}

impl Default for MockAudioOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioOutput for MockAudioOutput {
    fn list_devices(&self) -> OracleResult<Vec<AudioDeviceInfo>> {
        Ok(vec![AudioDeviceInfo {
            id: MOCK_DEVICE.to_string(),
            name: MOCK_DEVICE.to_string(),
            is_default: true,
        }])
    }

    fn start(
        &mut self,
        device_id: Option<&str>,
        sample_rate: u32,
        callback: FillCallback,
    ) -> OracleResult<()> {
        if self.fail_start {
            log::info!("[MOCK AUDIO] START refused");
            return Err(OracleError::Audio("Mock device unavailable".into()));
        }
        if self.callback.is_some() {
            return Err(OracleError::Audio("Audio stream already running".into()));
        }
        log::info!(
            "[MOCK AUDIO] START device={} @ {sample_rate} Hz",
            device_id.unwrap_or(MOCK_DEVICE)
        );
        self.calls.push(MockCall::Start {
            device: device_id.map(str::to_string),
            sample_rate,
        });
        self.callback = Some(callback);
        Ok(())
    }

    fn stop(&mut self) -> OracleResult<()> {
        if let Some(mut callback) = self.callback.take() {
            if self.capture_limit > 0 {
                let mut buf = vec![0.0; self.capture_limit];
                callback(buf.as_mut_slice());
                self.captured = buf;
            }
            log::info!("[MOCK AUDIO] STOP");
            self.calls.push(MockCall::Stop);
        }
        Ok(())
    }

    fn is_running(&self) -> bool {
        self.callback.is_some()
    }
}
