//! `twai-core` library: driver core for the single TWAI (CAN) controller of
//! the target MCU, in a `no_std` environment. The crate exposes the frame
//! type, the platform abstraction the driver runs on, and the driver itself
//! (bit timing, lifecycle, framing I/O, statistics).
#![no_std]
//==================================================================================
/// Constants shared by the driver modules (frame limits, GPIO range, defaults).
pub mod core;
/// Driver error taxonomy and platform-level I/O failures.
pub mod error;
/// Classic CAN frame as handed to and returned by the controller.
pub mod frame;
/// Opaque platform services consumed by the driver.
pub mod platform;
/// TWAI controller driver: timing resolver, lifecycle, framing I/O and statistics.
pub mod driver;
//==================================================================================
pub use driver::{
    config::{FilterConfig, Mode, SendOptions, TwaiConfig},
    shared::SharedTwai,
    stats::{DriverInfo, Stats},
    ControllerState, Twai,
};
pub use error::{PlatformIoError, TwaiError};
pub use frame::TwaiFrame;
pub use platform::TwaiPlatform;
