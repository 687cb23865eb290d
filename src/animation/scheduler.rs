// src/animation/scheduler.rs
//
// Fixed-interval frame gate. The host offers ticks as often as it likes;
// a pass only runs once at least one frame interval has elapsed since the
// last pass.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::SchedulerConfig;

/// Supplies monotonically increasing timestamps in milliseconds.
/// `None` means the host has stopped offering ticks.
pub trait TickSource {
    fn next_tick(&mut self) -> Option<f64>;
}

impl<T> TickSource for T
where
    T: Iterator<Item = f64>,
{
    fn next_tick(&mut self) -> Option<f64> {
        self.next()
    }
}

/// Cooperative cancellation shared between the loop and whoever stops it.
#[derive(Debug, Clone, Default)]
pub struct StopToken {
    stopped: Arc<AtomicBool>,
}

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone)]
pub struct FrameScheduler {
    frame_interval_ms: f64,
    last_tick_ms: f64,
}

impl FrameScheduler {
    pub fn new(config: &SchedulerConfig) -> Self {
        Self {
            frame_interval_ms: config.frame_interval_ms(),
            last_tick_ms: 0.0,
        }
    }

    pub fn frame_interval_ms(&self) -> f64 {
        self.frame_interval_ms
    }

    pub fn last_tick_ms(&self) -> f64 {
        self.last_tick_ms
    }

    /// True when a pass is due at `now_ms`; the pass time is recorded.
    pub fn offer(&mut self, now_ms: f64) -> bool {
        if now_ms - self.last_tick_ms >= self.frame_interval_ms {
            self.last_tick_ms = now_ms;
            true
        } else {
            false
        }
    }

    /// Pulls ticks until the source runs dry or `stop` is raised, calling
    /// `pass` for every tick that clears the gate. Returns the pass count.
    pub fn run<T, F>(&mut self, ticks: &mut T, stop: &StopToken, mut pass: F) -> u64
    where
        T: TickSource + ?Sized,
        F: FnMut(f64),
    {
        let mut passes = 0;
        while !stop.is_stopped() {
            let now_ms = match ticks.next_tick() {
                Some(now_ms) => now_ms,
                None => break,
            };
            if self.offer(now_ms) {
                pass(now_ms);
                passes += 1;
            }
        }
        log::debug!("Scheduler loop ended after {} passes", passes);
        passes
    }
}
