//! # virtual-mic-core
//!
//! Platform-agnostic core of a virtual microphone device.
//!
//! An out-of-process producer injects interleaved f32 samples; whatever
//! the host audio server's real-time callback pulls comes out of the
//! same device, so calls and recording apps read the injected audio in
//! place of a physical microphone. Platform adapters (Core Audio
//! AudioServerPlugIn, etc.) translate host ceremony — registration,
//! property queries, IO operation dispatch — into the operations here.
//!
//! ## Architecture
//!
//! ```text
//! virtual-mic-core (this crate)
//! ├── models/       ← DeviceConfig, DeviceError, ZeroTimestamp
//! ├── processing/   ← SampleRingBuffer (SPSC, drop-on-overrun, zero-fill-on-underrun)
//! ├── device/       ← CaptureDevice (IO lifecycle + timestamp anchoring)
//! └── traits/       ← HostClock (monotonic time seam)
//! ```
//!
//! ## Real-time contract
//!
//! `pull_cycle` is meant to be called from a hard-real-time audio
//! callback: it never blocks beyond a bounded copy, never allocates,
//! and always fills the full output region (zero-padding on underrun).
//! `inject_samples` never blocks either; writes that do not fit are
//! dropped. There is no backpressure channel between the two by design.

pub mod device;
pub mod models;
pub mod processing;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use device::CaptureDevice;
pub use models::config::DeviceConfig;
pub use models::error::DeviceError;
pub use models::timestamp::ZeroTimestamp;
pub use processing::ring_buffer::SampleRingBuffer;
pub use traits::host_clock::{HostClock, MonotonicClock};
