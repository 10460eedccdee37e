use std::sync::Arc;

use parking_lot::Mutex;

use crate::models::config::DeviceConfig;
use crate::models::error::DeviceError;
use crate::models::timestamp::{self, ZeroTimestamp};
use crate::processing::ring_buffer::SampleRingBuffer;
use crate::traits::host_clock::{HostClock, MonotonicClock};

/// IO lifecycle state. Kept behind its own mutex so start/stop
/// bookkeeping never queues behind an in-flight buffer copy.
#[derive(Debug)]
struct IoState {
    is_running: bool,
    anchor_host_time: u64,
}

/// Virtual capture device controller.
///
/// Owns one sample ring buffer and the running/stopped state machine
/// driven by the host's IO lifecycle calls. A producer application
/// injects interleaved samples from any thread at any rate; the host's
/// real-time callback pulls one cycle of frames at a time and always
/// receives a full, well-defined buffer.
///
/// ```text
/// [producer app] → inject_samples → [SampleRingBuffer] → pull_cycle → [host IO callback]
/// ```
///
/// The device is shared across threads as `Arc<CaptureDevice>`; all
/// operations take `&self` and synchronize internally. Buffer contents
/// and IO state live in separate mutex domains.
pub struct CaptureDevice {
    config: DeviceConfig,
    buffer: Mutex<SampleRingBuffer>,
    state: Mutex<IoState>,
    clock: Arc<dyn HostClock>,
    host_ticks_per_frame: u64,
}

impl CaptureDevice {
    /// Create a device with the default monotonic clock.
    pub fn new(config: DeviceConfig) -> Result<Self, DeviceError> {
        Self::with_clock(config, Arc::new(MonotonicClock::new()))
    }

    /// Create a device reading host time from `clock`.
    pub fn with_clock(
        config: DeviceConfig,
        clock: Arc<dyn HostClock>,
    ) -> Result<Self, DeviceError> {
        config.validate()?;
        let buffer = SampleRingBuffer::new(config.ring_capacity)?;
        let host_ticks_per_frame = timestamp::host_ticks_per_frame(config.sample_rate);
        Ok(Self {
            config,
            buffer: Mutex::new(buffer),
            state: Mutex::new(IoState {
                is_running: false,
                anchor_host_time: 0,
            }),
            clock,
            host_ticks_per_frame,
        })
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Host ticks spanned by one frame at the configured sample rate.
    pub fn host_ticks_per_frame(&self) -> u64 {
        self.host_ticks_per_frame
    }

    pub fn is_running(&self) -> bool {
        self.state.lock().is_running
    }

    /// Start IO. Stopped → Running, stamping the timestamp anchor with
    /// the current host clock reading.
    ///
    /// Starting an already-running device is not an error: it simply
    /// re-stamps the anchor.
    pub fn start(&self) {
        {
            let mut state = self.state.lock();
            state.is_running = true;
            state.anchor_host_time = self.clock.now_ticks();
        }
        log::info!("{} started", self.config.device_name);
    }

    /// Stop IO. Running → Stopped.
    ///
    /// Buffered samples are not flushed; they remain queued and are
    /// delivered (or zero-padded) by pull cycles after a later start.
    pub fn stop(&self) {
        self.state.lock().is_running = false;
        log::info!("{} stopped", self.config.device_name);
    }

    /// Timestamp anchor for the host's sample-time/host-time mapping.
    ///
    /// Reports a fixed `sample_time` of 0 against the anchor captured
    /// by the most recent `start`; the device does not track elapsed
    /// sample count across IO cycles, so every query returns the same
    /// mapping until the next start re-stamps it.
    pub fn zero_timestamp(&self) -> ZeroTimestamp {
        let state = self.state.lock();
        ZeroTimestamp {
            sample_time: 0.0,
            host_time: state.anchor_host_time,
            seed: 1,
        }
    }

    /// Pull one IO cycle of `frame_count` frames into `out`.
    ///
    /// Fills the first `frame_count * channels` samples of `out`
    /// (capped at `out.len()`) from the ring buffer, zero-padding any
    /// shortfall, and returns how many samples came from real data.
    ///
    /// Safe to call while Stopped: the host may still issue cycles
    /// around teardown, and they read as silence once the buffer
    /// drains. No logging or allocation happens on this path.
    pub fn pull_cycle(&self, frame_count: usize, out: &mut [f32]) -> usize {
        let samples = (frame_count * self.config.channels as usize).min(out.len());
        self.buffer.lock().read(&mut out[..samples])
    }

    /// Producer entry point: queue interleaved samples for delivery.
    ///
    /// Callable from any thread, at any rate, in any device state —
    /// samples injected while Stopped are buffered ahead of the next
    /// start. Returns how many samples were accepted; the rest were
    /// dropped because the buffer was full. Pace against
    /// `available_to_write`, understanding it is advisory.
    pub fn inject_samples(&self, samples: &[f32]) -> usize {
        self.buffer.lock().write(samples)
    }

    /// Advisory snapshot of samples queued for the consumer.
    pub fn available_to_read(&self) -> usize {
        self.buffer.lock().available_to_read()
    }

    /// Advisory snapshot of free sample slots.
    pub fn available_to_write(&self) -> usize {
        self.buffer.lock().available_to_write()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU64, Ordering};

    use super::*;

    /// Clock whose reading is set explicitly by the test.
    struct ManualClock {
        ticks: AtomicU64,
    }

    impl ManualClock {
        fn new() -> Self {
            Self {
                ticks: AtomicU64::new(0),
            }
        }

        fn set(&self, ticks: u64) {
            self.ticks.store(ticks, Ordering::SeqCst);
        }
    }

    impl HostClock for ManualClock {
        fn now_ticks(&self) -> u64 {
            self.ticks.load(Ordering::SeqCst)
        }
    }

    fn small_device(clock: Arc<dyn HostClock>) -> CaptureDevice {
        let config = DeviceConfig {
            ring_capacity: 16,
            ..DeviceConfig::default()
        };
        CaptureDevice::with_clock(config, clock).unwrap()
    }

    #[test]
    fn starts_stopped() {
        let device = CaptureDevice::new(DeviceConfig::default()).unwrap();
        assert!(!device.is_running());
    }

    #[test]
    fn start_anchors_timestamp() {
        let clock = Arc::new(ManualClock::new());
        let device = small_device(clock.clone());

        clock.set(1_000);
        device.start();
        assert!(device.is_running());

        let ts = device.zero_timestamp();
        assert_eq!(ts.sample_time, 0.0);
        assert_eq!(ts.host_time, 1_000);
        assert_eq!(ts.seed, 1);

        // Anchor is stable across queries until the next start.
        clock.set(5_000);
        assert_eq!(device.zero_timestamp().host_time, 1_000);
    }

    #[test]
    fn restart_re_anchors() {
        let clock = Arc::new(ManualClock::new());
        let device = small_device(clock.clone());

        clock.set(100);
        device.start();
        clock.set(250);
        device.start(); // already running: re-stamp, not an error
        assert_eq!(device.zero_timestamp().host_time, 250);
    }

    #[test]
    fn stop_preserves_buffered_samples() {
        let device = small_device(Arc::new(ManualClock::new()));
        device.start();
        assert_eq!(device.inject_samples(&[1.0, 2.0, 3.0, 4.0]), 4);
        device.stop();

        assert_eq!(device.available_to_read(), 4);
        device.start();
        let mut out = [0.0; 4];
        assert_eq!(device.pull_cycle(2, &mut out), 4);
        assert_eq!(out, [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn pull_while_stopped_yields_silence() {
        let device = small_device(Arc::new(ManualClock::new()));
        let mut out = [7.0; 8];
        assert_eq!(device.pull_cycle(4, &mut out), 0);
        assert_eq!(out, [0.0; 8]);
    }

    #[test]
    fn inject_while_stopped_buffers_ahead_of_start() {
        let device = small_device(Arc::new(ManualClock::new()));
        assert_eq!(device.inject_samples(&[0.5, -0.5]), 2);

        device.start();
        let mut out = [0.0; 2];
        assert_eq!(device.pull_cycle(1, &mut out), 2);
        assert_eq!(out, [0.5, -0.5]);
    }

    #[test]
    fn pull_cycle_scales_frames_by_channel_count() {
        let device = small_device(Arc::new(ManualClock::new()));
        device.start();
        device.inject_samples(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        // Stereo device: 3 frames = 6 samples.
        let mut out = [0.0; 6];
        assert_eq!(device.pull_cycle(3, &mut out), 6);
        assert_eq!(out, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn underrun_pull_zero_pads_the_cycle() {
        let device = small_device(Arc::new(ManualClock::new()));
        device.start();
        device.inject_samples(&[1.0, 2.0, 3.0]);

        let mut out = [9.0; 8];
        assert_eq!(device.pull_cycle(4, &mut out), 3);
        assert_eq!(out, [1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn overrun_inject_reports_accepted_count() {
        let device = small_device(Arc::new(ManualClock::new()));
        // Capacity 16: 15 usable slots.
        assert_eq!(device.inject_samples(&[0.1; 12]), 12);
        assert_eq!(device.inject_samples(&[0.2; 8]), 3);
        assert_eq!(device.available_to_write(), 0);
    }

    #[test]
    fn rejects_invalid_config() {
        let config = DeviceConfig {
            channels: 0,
            ..DeviceConfig::default()
        };
        assert!(CaptureDevice::new(config).is_err());
    }

    #[test]
    fn host_ticks_per_frame_matches_rate() {
        let device = CaptureDevice::new(DeviceConfig::default()).unwrap();
        assert_eq!(device.host_ticks_per_frame(), 20833);
    }
}
