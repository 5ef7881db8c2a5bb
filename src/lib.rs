//! Morse Oracle
//!
//! Translates text to and from Morse code and plays Morse as audio tones.
//!
//! ## Architecture (Hexagonal / Ports & Adapters)
//!
//! - `domain/` - Pure domain types, no I/O dependencies
//! - `codec/` - Symbol table and text ⇄ Morse translation
//! - `dsp/` - Signal generation (pure functions, no I/O)
//! - `tone/` - Step sequencing and tone synthesis
//! - `ports/` - Trait definitions (interfaces) for external dependencies
//! - `adapters/` - Implementations of ports (cpal audio, mock audio, pacing)
//! - `player` - Real-time playback over an audio output port
//! - `storage/` - JSON documents and configuration profiles
//! - `session` - Application state a front end drives

// Core domain (pure, no I/O)
pub mod codec;
pub mod domain;
pub mod dsp;
pub mod ports;
pub mod tone;

// Adapters (external I/O)
pub mod adapters;
pub mod storage;

// Application layer
pub mod player;
pub mod session;

pub use codec::{decode, encode};
pub use domain::{OracleError, OracleResult};
