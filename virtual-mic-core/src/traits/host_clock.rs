use std::time::Instant;

/// Monotonic time source used for timestamp anchoring.
///
/// Platform adapters supply the host's notion of time (Core Audio's
/// `mach_absolute_time`, QPC on Windows); tests inject a manual clock
/// to make anchor assertions exact.
pub trait HostClock: Send + Sync {
    /// Current host time in ticks. The default clock ticks in
    /// nanoseconds.
    fn now_ticks(&self) -> u64;
}

/// Default clock backed by `std::time::Instant`.
///
/// Ticks are nanoseconds elapsed since the clock was created, which
/// keeps the anchor small and strictly monotonic for the device's
/// lifetime.
#[derive(Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl HostClock for MonotonicClock {
    fn now_ticks(&self) -> u64 {
        self.origin.elapsed().as_nanos() as u64
    }
}
