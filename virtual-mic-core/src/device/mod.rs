pub mod capture;

pub use capture::CaptureDevice;
