//! Digital signal processing
//!
//! Pure sample generation, no I/O.

pub mod oscillator;
