//! Wall-clock pacer backed by `std::thread::sleep`

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use crate::ports::Pacer;

/// Longest single sleep, bounds how late an abort is noticed
const POLL_INTERVAL: Duration = Duration::from_millis(5);

pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn wait(&self, duration: Duration, abort: &AtomicBool) -> bool {
        let deadline = Instant::now() + duration;
        loop {
            if abort.load(Ordering::SeqCst) {
                return false;
            }
            let now = Instant::now();
            if now >= deadline {
                return true;
            }
            thread::sleep((deadline - now).min(POLL_INTERVAL));
        }
    }
}
