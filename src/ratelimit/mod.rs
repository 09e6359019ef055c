//! Client-side rate limiting.
//!
//! A small sliding-window limiter guarding calls to external services. The
//! app never trusts server-side quotas alone; exceeding a local limit
//! degrades the operation instead of burning the remote quota.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Sliding-window rate limiter: at most `max_events` acquisitions per
/// `window`. A `max_events` of zero disables limiting entirely.
pub struct RateLimiter {
    max_events: u32,
    window: Duration,
    events: Mutex<VecDeque<Instant>>,
}

impl RateLimiter {
    pub fn new(max_events: u32, window: Duration) -> Self {
        Self {
            max_events,
            window,
            events: Mutex::new(VecDeque::new()),
        }
    }

    /// A limiter that always admits.
    pub fn unlimited() -> Self {
        Self::new(0, Duration::from_secs(60))
    }

    /// Try to record one event. Returns false when the window is full;
    /// the event is not recorded in that case.
    pub fn try_acquire(&self) -> bool {
        if self.max_events == 0 {
            return true;
        }

        let now = Instant::now();
        let mut events = self.events.lock();

        while events
            .front()
            .is_some_and(|t| now.duration_since(*t) >= self.window)
        {
            events.pop_front();
        }

        if events.len() < self.max_events as usize {
            events.push_back(now);
            true
        } else {
            false
        }
    }
}
