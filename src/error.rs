//! Error types for the WMA decoder

use thiserror::Error;

/// Result type alias for decoder operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the WMA decoder
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Required stream parameters are zero or absent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The decoder engine refused the format or codec parameters
    #[error("Engine rejected configuration: {0}")]
    EngineRejected(String),

    /// The packet could not be split into sub-frames
    #[error("Malformed superframe: {0}")]
    MalformedSuperframe(String),

    /// A single sub-frame failed to decode, aborting the packet
    #[error("Sub-frame {index} failed: {reason}")]
    SubframeFailed { index: usize, reason: String },

    /// Output buffer growth could not obtain the requested capacity
    #[error("Out of memory: failed to grow output buffer to {requested} bytes")]
    Oom { requested: usize },

    /// The caller-visible frame could not be allocated
    #[error("Frame allocation failed: {bytes} bytes")]
    FrameAllocFailed { bytes: usize },

    /// Operation is not valid in the decoder's current state
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl Error {
    /// Create an invalid configuration error
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Error::InvalidConfig(msg.into())
    }

    /// Create an engine rejection error
    pub fn engine_rejected<S: Into<String>>(msg: S) -> Self {
        Error::EngineRejected(msg.into())
    }

    /// Create a malformed superframe error
    pub fn malformed_superframe<S: Into<String>>(msg: S) -> Self {
        Error::MalformedSuperframe(msg.into())
    }

    /// Create a sub-frame failure for the sub-frame at `index`
    pub fn subframe_failed<S: Into<String>>(index: usize, reason: S) -> Self {
        Error::SubframeFailed {
            index,
            reason: reason.into(),
        }
    }

    /// Create an invalid state error
    pub fn invalid_state<S: Into<String>>(msg: S) -> Self {
        Error::InvalidState(msg.into())
    }

    /// Negative status code reported through the plugin interface
    pub const fn code(&self) -> i32 {
        match self {
            Error::InvalidConfig(_) => -1,
            Error::EngineRejected(_) => -2,
            Error::MalformedSuperframe(_) => -3,
            Error::SubframeFailed { .. } => -4,
            Error::Oom { .. } => -5,
            Error::FrameAllocFailed { .. } => -6,
            Error::InvalidState(_) => -7,
        }
    }
}
