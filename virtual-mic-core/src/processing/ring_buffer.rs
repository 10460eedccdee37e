use crate::models::error::DeviceError;

/// Fixed-capacity circular buffer for interleaved f32 samples.
///
/// Decouples an asynchronous producer from a real-time consumer:
/// `write` drops what does not fit and `read` zero-fills what is
/// missing, so neither side ever waits on the other. One slot is always
/// kept empty so the two cursors can distinguish full from empty;
/// usable capacity is `capacity - 1` samples.
///
/// Single-writer/single-reader. Wrap in `parking_lot::Mutex` for
/// cross-thread access; every method body is a bounded copy loop with
/// no allocation and no syscalls, safe to run under a lock shared with
/// a real-time audio callback.
#[derive(Debug)]
pub struct SampleRingBuffer {
    storage: Vec<f32>,
    write_index: usize,
    read_index: usize,
    capacity: usize,
}

impl SampleRingBuffer {
    /// Allocate a buffer with `capacity` sample slots, zero-initialized.
    ///
    /// Fails with `ResourceExhausted` if the storage cannot be
    /// allocated, and with `InvalidConfiguration` for capacities below
    /// 2 (which would leave zero usable slots).
    pub fn new(capacity: usize) -> Result<Self, DeviceError> {
        if capacity < 2 {
            return Err(DeviceError::InvalidConfiguration(format!(
                "ring capacity must be at least 2 samples, got {capacity}"
            )));
        }
        let mut storage = Vec::new();
        storage
            .try_reserve_exact(capacity)
            .map_err(|_| DeviceError::ResourceExhausted)?;
        storage.resize(capacity, 0.0);
        Ok(Self {
            storage,
            write_index: 0,
            read_index: 0,
            capacity,
        })
    }

    /// Samples currently available for reading.
    ///
    /// Advisory when observed across threads: the value may be stale by
    /// the time the caller acts on it. `write` and `read` recompute
    /// authoritatively under the lock.
    pub fn available_to_read(&self) -> usize {
        let w = self.write_index;
        let r = self.read_index;
        if w >= r {
            w - r
        } else {
            self.capacity - r + w
        }
    }

    /// Free slots currently available for writing. Advisory, same
    /// caveat as `available_to_read`.
    pub fn available_to_write(&self) -> usize {
        self.capacity - self.available_to_read() - 1
    }

    /// Write samples, returning how many were accepted.
    ///
    /// Never blocks waiting for space: anything beyond the free slots
    /// is silently dropped. Producer overruns are lossy by design so
    /// the consumer's cadence is never gated by producer backlog.
    pub fn write(&mut self, samples: &[f32]) -> usize {
        let free = self.available_to_write();
        let to_write = samples.len().min(free);
        for &sample in &samples[..to_write] {
            self.storage[self.write_index] = sample;
            self.write_index = (self.write_index + 1) % self.capacity;
        }
        to_write
    }

    /// Fill `out` from the buffer, returning how many samples came from
    /// real data.
    ///
    /// Any tail of `out` beyond what was available is zero-filled, so
    /// the caller always receives a fully defined buffer of
    /// `out.len()` samples regardless of underrun.
    pub fn read(&mut self, out: &mut [f32]) -> usize {
        let occupied = self.available_to_read();
        let to_read = out.len().min(occupied);
        for slot in &mut out[..to_read] {
            *slot = self.storage[self.read_index];
            self.read_index = (self.read_index + 1) % self.capacity;
        }
        for slot in &mut out[to_read..] {
            *slot = 0.0;
        }
        to_read
    }

    /// Total slot count. Usable capacity is one sample less.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
