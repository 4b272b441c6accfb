//! Minimum-interval gate for raw input events.

use std::time::{Duration, Instant};

/// Gates how often placement input is accepted.
///
/// Terminals deliver key repeats and double-taps faster than a turn should
/// ever advance; the limiter swallows anything arriving within the minimum
/// interval of the last accepted event. Independent of the thinking guard,
/// which blocks input for a different reason.
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    last_accepted: Option<Instant>,
}

impl RateLimiter {
    /// Creates a limiter that accepts at most one event per `min_interval`.
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_accepted: None,
        }
    }

    /// Returns true and re-arms the interval when enough time has passed
    /// since the last accepted event. The first event is always accepted.
    pub fn accept(&mut self) -> bool {
        match self.last_accepted {
            Some(last) if last.elapsed() <= self.min_interval => false,
            _ => {
                self.last_accepted = Some(Instant::now());
                true
            }
        }
    }
}
