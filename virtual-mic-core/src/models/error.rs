use thiserror::Error;

/// Errors surfaced by the virtual microphone core.
///
/// The steady-state IO path deliberately has no error returns: overrun
/// and underrun are normal conditions handled by dropping samples and
/// zero-filling, never by failing or blocking. These variants cover
/// device construction and the host adapter boundary only.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeviceError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("resource exhausted")]
    ResourceExhausted,

    #[error("property is not settable")]
    PropertyNotSettable,
}
