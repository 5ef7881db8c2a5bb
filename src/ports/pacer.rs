//! Pacing port: how the player waits out each step

use std::sync::atomic::AtomicBool;
use std::time::Duration;

/// Blocks the player for the length of a step.
pub trait Pacer {
    /// Wait for `duration`, returning early when `abort` is raised.
    /// Returns false if the wait was cut short.
    fn wait(&self, duration: Duration, abort: &AtomicBool) -> bool;
}
