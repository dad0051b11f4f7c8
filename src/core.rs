//! Constants shared by the frame type, the driver, and the platform contract.
//!
//! Values mirror the reference board wiring (a TCAN332 transceiver on
//! GPIO4/GPIO5) and the limits of the TWAI peripheral.
use core::ops::RangeInclusive;

use embassy_time::Duration;

/// Maximum payload of a classic CAN frame.
pub const MAX_DATA_LEN: usize = 8;

/// Largest 11-bit standard identifier.
pub const MAX_STANDARD_ID: u32 = 0x7FF;
/// Largest 29-bit extended identifier.
pub const MAX_EXTENDED_ID: u32 = 0x1FFF_FFFF;

/// GPIO numbers accepted for the TX/RX pins on the reference MCU.
pub const GPIO_RANGE: RangeInclusive<i32> = 0..=39;

/// Depth of the driver transmit queue.
pub const TX_QUEUE_LEN: u32 = 10;
/// Depth of the driver receive queue.
pub const RX_QUEUE_LEN: u32 = 10;

/// APB clock feeding the TWAI prescaler.
pub const SOURCE_CLOCK_HZ: u32 = 80_000_000;

// Binding-layer defaults
/// Default TX pin.
pub const DEFAULT_TX_PIN: i32 = 4;
/// Default RX pin.
pub const DEFAULT_RX_PIN: i32 = 5;
/// Default bus speed (125 kbit/s).
pub const DEFAULT_BITRATE: u32 = 125_000;
/// Identifier used by `send` when the caller does not supply one.
pub const DEFAULT_SEND_ID: u32 = 0x123;
/// Bound applied to send/receive when the caller does not supply one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1000);

/// Exposed mode constants, matching [`Mode`](crate::driver::config::Mode) discriminants.
pub const NORMAL: u8 = 0;
pub const NO_ACK: u8 = 1;
pub const LISTEN_ONLY: u8 = 2;

/// Exposed acceptance filter kinds.
pub const FILTER_SINGLE: u8 = 0;
pub const FILTER_DUAL: u8 = 1;
