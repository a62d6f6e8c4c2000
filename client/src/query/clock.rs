//! Millisecond clock used for cache staleness and eviction.

#[cfg(test)]
use std::cell::Cell;

/// Source of the current time in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall clock: `Date.now()` in the browser, `SystemTime` on the server.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn now_ms(&self) -> u64 {
        #[cfg(feature = "hydrate")]
        {
            js_sys::Date::now() as u64
        }
        #[cfg(not(feature = "hydrate"))]
        {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map_or(0, |d| d.as_millis() as u64)
        }
    }
}

/// Hand-advanced clock for deterministic tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

#[cfg(test)]
impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self { now: Cell::new(start_ms) }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}
