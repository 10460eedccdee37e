/// Zero timestamp reported to the host so it can correlate sample time
/// with host time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZeroTimestamp {
    /// Sample time at the anchor. Always 0 for this device; see
    /// [`CaptureDevice::zero_timestamp`](crate::device::CaptureDevice::zero_timestamp).
    pub sample_time: f64,

    /// Host clock reading captured when IO last started, in ticks.
    pub host_time: u64,

    /// Timeline generation counter. Fixed at 1: the timeline never
    /// changes shape, only its anchor moves on start.
    pub seed: u64,
}

/// Host ticks spanned by a single frame at the given sample rate.
///
/// The default clock ticks in nanoseconds, so this is `1e9 / rate`
/// rounded down. Hosts use it to pace their IO cycles against the
/// anchor returned by `zero_timestamp`.
pub fn host_ticks_per_frame(sample_rate: f64) -> u64 {
    (1_000_000_000.0 / sample_rate) as u64
}
