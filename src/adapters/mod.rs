//! Adapters: implementations of the port traits

pub mod cpal_audio;
pub mod mock_audio;
pub mod thread_pacer;

pub use cpal_audio::CpalAudioOutput;
pub use mock_audio::MockAudioOutput;
pub use thread_pacer::ThreadPacer;
