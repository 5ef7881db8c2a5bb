//! CPAL audio adapter: implements AudioOutput using the cpal crate
//!
//! cpal talks to the OS audio system (CoreAudio on macOS, WASAPI on Windows,
//! ALSA on Linux) and asks us for samples through a callback on its own
//! real-time thread.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, Stream, StreamConfig};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::domain::{AudioDeviceInfo, AudioSample, OracleError, OracleResult};
use crate::ports::{AudioOutput, FillCallback};

/// Audio output adapter backed by cpal.
///
/// `cpal::Stream` is `!Send`, so this struct stays on the thread that
/// started playback. Dropping the stream silences the device at once.
pub struct CpalAudioOutput {
    stream: Option<Stream>,
    running: Arc<AtomicBool>,
}

impl CpalAudioOutput {
    pub fn new() -> Self {
        Self {
            stream: None,
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    fn find_device(device_id: Option<&str>) -> OracleResult<Device> {
        let host = cpal::default_host();

        match device_id {
            Some(id) => host
                .output_devices()
                .map_err(|e| OracleError::Audio(format!("Failed to enumerate devices: {e}")))?
                .find(|d| d.name().map(|n| n == id).unwrap_or(false))
                .ok_or_else(|| OracleError::Audio(format!("Audio device not found: {id}"))),
            None => host
                .default_output_device()
                .ok_or_else(|| OracleError::Audio("No default audio output device".into())),
        }
    }
}

impl Default for CpalAudioOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioOutput for CpalAudioOutput {
    fn list_devices(&self) -> OracleResult<Vec<AudioDeviceInfo>> {
        let host = cpal::default_host();

        let default_output = host.default_output_device();
        let default_output_name = default_output.as_ref().and_then(|d| d.name().ok());

        let mut devices = Vec::new();

        if let Ok(output_devices) = host.output_devices() {
            for device in output_devices {
                let name = device.name().unwrap_or_else(|_| "Unknown".to_string());
                let is_default = default_output_name
                    .as_ref()
                    .map(|dn| dn == &name)
                    .unwrap_or(false);

                devices.push(AudioDeviceInfo {
                    id: name.clone(),
                    name,
                    is_default,
                });
            }
        }

        Ok(devices)
    }

    fn start(
        &mut self,
        device_id: Option<&str>,
        sample_rate: u32,
        mut callback: FillCallback,
    ) -> OracleResult<()> {
        if self.running.load(Ordering::SeqCst) {
            return Err(OracleError::Audio("Audio stream already running".into()));
        }

        let device = Self::find_device(device_id)?;

        // Mono tones are copied to every channel the device wants
        let channels = device
            .default_output_config()
            .map(|c| c.channels())
            .unwrap_or(1)
            .max(1);

        let config = StreamConfig {
            channels,
            sample_rate: cpal::SampleRate(sample_rate),
            buffer_size: cpal::BufferSize::Default,
        };

        let channel_count = channels as usize;
        let mut mono: Vec<AudioSample> = Vec::new();
        let err_running = self.running.clone();

        let stream = device
            .build_output_stream(
                &config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    let frames = data.len() / channel_count;
                    mono.resize(frames, 0.0);
                    callback(mono.as_mut_slice());
                    for (frame, &sample) in data.chunks_mut(channel_count).zip(mono.iter()) {
                        frame.fill(sample);
                    }
                },
                move |err| {
                    log::error!("Audio stream error: {err}");
                    err_running.store(false, Ordering::SeqCst);
                },
                None, // No timeout
            )
            .map_err(|e| OracleError::Audio(format!("Failed to build stream: {e}")))?;

        stream
            .play()
            .map_err(|e| OracleError::Audio(format!("Failed to start stream: {e}")))?;

        log::debug!("Audio output started: {channels} ch @ {sample_rate} Hz");
        self.running.store(true, Ordering::SeqCst);
        self.stream = Some(stream);

        Ok(())
    }

    fn stop(&mut self) -> OracleResult<()> {
        self.running.store(false, Ordering::SeqCst);
        // Dropping the stream stops playback
        self.stream = None;
        Ok(())
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}
