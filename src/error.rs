//! Error definitions shared across the driver modules.
//! [`TwaiError`] is what callers see; [`PlatformIoError`] is what the
//! platform reports for a single transmit or receive attempt.
use thiserror_no_std::Error;

#[derive(Error, Debug, PartialEq, Eq)]
/// Failures surfaced by the TWAI driver. `E` is the platform error type.
pub enum TwaiError<E: core::fmt::Debug> {
    /// TX or RX pin outside the legal GPIO range.
    #[error("Invalid pin: GPIO{pin}")]
    InvalidPin { pin: i32 },

    /// Requested bus speed is not part of the timing table.
    #[error("Unsupported bitrate: {bitrate} bit/s")]
    UnsupportedBitrate { bitrate: u32 },

    /// Mode integer does not map to a controller mode.
    #[error("Invalid mode: {mode}")]
    InvalidMode { mode: u8 },

    /// Platform refused to install or start the controller.
    #[error("Driver unavailable: {0:?}")]
    DriverUnavailable(E),

    /// Framing operation attempted before the controller was started.
    #[error("Controller not started")]
    NotReady,

    /// Data frame payload exceeds the classic CAN limit.
    #[error("Frame too large: {len} bytes")]
    FrameTooLarge { len: usize },

    /// Identifier does not fit the requested frame format.
    #[error("Invalid identifier: {id:#x}")]
    InvalidIdentifier { id: u32 },

    /// No completion within the caller-supplied bound.
    #[error("Timed out")]
    Timeout,

    /// Transmission or reception fault reported by the platform.
    #[error("I/O error: {0:?}")]
    IoError(E),
}

#[derive(Error, Debug, PartialEq, Eq)]
/// Outcome of a failed platform transmit/receive.
pub enum PlatformIoError<E: core::fmt::Debug> {
    /// The bound elapsed before the bus accepted or delivered a frame.
    #[error("Timed out")]
    TimedOut,
    /// Any other fault on the transmit/receive path.
    #[error("Fault: {0:?}")]
    Fault(E),
}

impl<E: core::fmt::Debug> From<PlatformIoError<E>> for TwaiError<E> {
    fn from(err: PlatformIoError<E>) -> Self {
        match err {
            PlatformIoError::TimedOut => TwaiError::Timeout,
            PlatformIoError::Fault(e) => TwaiError::IoError(e),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Errors raised while building a [`TwaiFrame`](crate::frame::TwaiFrame) from raw parts.
pub enum FrameError {
    /// More than eight payload bytes (or DLC above eight).
    #[error("Frame too large: {len} bytes")]
    TooLarge { len: usize },
    /// Identifier out of range for the standard or extended format.
    #[error("Invalid identifier: {id:#x}")]
    InvalidIdentifier { id: u32 },
}

impl<E: core::fmt::Debug> From<FrameError> for TwaiError<E> {
    fn from(err: FrameError) -> Self {
        match err {
            FrameError::TooLarge { len } => TwaiError::FrameTooLarge { len },
            FrameError::InvalidIdentifier { id } => TwaiError::InvalidIdentifier { id },
        }
    }
}
