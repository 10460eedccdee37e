use serde::{Deserialize, Serialize};

use super::error::DeviceError;

/// Configuration for one virtual microphone device.
///
/// Fixed at construction and immutable for the device's lifetime. The
/// descriptor strings are what the host adapter serves from its
/// read-only property surface (device name, manufacturer, UID); the
/// core never consults them beyond logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Human-readable device name shown to audio clients.
    pub device_name: String,

    /// Manufacturer string shown to audio clients.
    pub manufacturer: String,

    /// Stable unique identifier for the device.
    pub device_uid: String,

    /// Nominal sample rate in Hz (default: 48000).
    pub sample_rate: f64,

    /// Number of interleaved channels (default: 2).
    pub channels: u16,

    /// Ring buffer capacity in samples, not frames (default: 65536).
    /// Usable capacity is one sample less.
    pub ring_capacity: usize,
}

impl DeviceConfig {
    pub fn validate(&self) -> Result<(), DeviceError> {
        if !(self.sample_rate > 0.0) {
            return Err(DeviceError::InvalidConfiguration(format!(
                "sample rate must be positive, got {}",
                self.sample_rate
            )));
        }
        if self.channels == 0 {
            return Err(DeviceError::InvalidConfiguration(
                "channel count must be at least 1".into(),
            ));
        }
        if self.ring_capacity < 2 {
            return Err(DeviceError::InvalidConfiguration(format!(
                "ring capacity must be at least 2 samples, got {}",
                self.ring_capacity
            )));
        }
        Ok(())
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            device_name: "Virtual Microphone".into(),
            manufacturer: "Virtual Audio".into(),
            device_uid: "com.virtualaudio.mic.device".into(),
            sample_rate: 48000.0,
            channels: 2,
            ring_capacity: 65536,
        }
    }
}
