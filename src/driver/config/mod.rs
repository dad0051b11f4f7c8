//! Controller configuration: operating mode, alert flags, acceptance filter,
//! the general configuration handed to the platform on install, and the
//! caller-facing `TwaiConfig`/`SendOptions` carrying the binding defaults.
use embassy_time::Duration;

use crate::core::{
    DEFAULT_BITRATE, DEFAULT_RX_PIN, DEFAULT_SEND_ID, DEFAULT_TIMEOUT, DEFAULT_TX_PIN,
    FILTER_DUAL, FILTER_SINGLE, LISTEN_ONLY, NORMAL, NO_ACK, RX_QUEUE_LEN, TX_QUEUE_LEN,
};

//==================================================================================MODE
/// Operating mode of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Mode {
    /// Transmit, receive and acknowledge.
    #[default]
    Normal = NORMAL,
    /// Transmit without requiring an acknowledgement (self-test).
    NoAck = NO_ACK,
    /// Receive only; never drives the bus.
    ListenOnly = LISTEN_ONLY,
}

impl TryFrom<u8> for Mode {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            NORMAL => Ok(Mode::Normal),
            NO_ACK => Ok(Mode::NoAck),
            LISTEN_ONLY => Ok(Mode::ListenOnly),
            other => Err(other),
        }
    }
}

impl From<Mode> for u8 {
    fn from(mode: Mode) -> Self {
        mode as u8
    }
}

//==================================================================================ALERTS
/// Alert/event flags the platform should raise, using the TWAI alert bit layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Alerts(pub u32);

impl Alerts {
    pub const TX_SUCCESS: u32 = 0x0000_0002;
    pub const RX_DATA: u32 = 0x0000_0004;
    pub const BUS_ERROR: u32 = 0x0000_0200;
    pub const ERR_PASS: u32 = 0x0000_1000;
    pub const BUS_OFF: u32 = 0x0000_2000;

    /// The set the driver always enables: TX success, RX data, error passive, bus error.
    pub const fn driver_default() -> Self {
        Self(Self::TX_SUCCESS | Self::RX_DATA | Self::ERR_PASS | Self::BUS_ERROR)
    }

    pub const fn contains(&self, flag: u32) -> bool {
        self.0 & flag == flag
    }
}

impl From<Alerts> for u32 {
    fn from(val: Alerts) -> Self {
        val.0
    }
}

//==================================================================================FILTER
/// Acceptance filter layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum FilterKind {
    /// One filter over the full code/mask registers.
    Single = FILTER_SINGLE,
    /// Two independent filters sharing the registers.
    Dual = FILTER_DUAL,
}

/// Acceptance filter registers as programmed on install.
///
/// A set bit in `acceptance_mask` means "don't care".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FilterConfig {
    pub acceptance_code: u32,
    pub acceptance_mask: u32,
    pub single_filter: bool,
}

impl FilterConfig {
    /// Accept every frame.
    pub const fn accept_all() -> Self {
        Self {
            acceptance_code: 0,
            acceptance_mask: 0xFFFF_FFFF,
            single_filter: true,
        }
    }

    /// Single filter on an 11-bit identifier. Bits set in `mask` must match `id`.
    pub const fn single_standard(id: u16, mask: u16) -> Self {
        let id = (id as u32) & 0x7FF;
        let mask = (mask as u32) & 0x7FF;
        Self {
            acceptance_code: id << 21,
            acceptance_mask: !(mask << 21),
            single_filter: true,
        }
    }

    /// Single filter on a 29-bit identifier. Bits set in `mask` must match `id`.
    pub const fn single_extended(id: u32, mask: u32) -> Self {
        let id = id & 0x1FFF_FFFF;
        let mask = mask & 0x1FFF_FFFF;
        Self {
            acceptance_code: id << 3,
            acceptance_mask: !(mask << 3),
            single_filter: true,
        }
    }

    /// Two 11-bit filters sharing one mask.
    pub const fn dual_standard(id1: u16, id2: u16, mask: u16) -> Self {
        let id1 = (id1 as u32) & 0x7FF;
        let id2 = (id2 as u32) & 0x7FF;
        let mask = (mask as u32) & 0x7FF;
        Self {
            acceptance_code: (id1 << 21) | (id2 << 5),
            acceptance_mask: !((mask << 21) | (mask << 5)),
            single_filter: false,
        }
    }

    pub const fn kind(&self) -> FilterKind {
        if self.single_filter {
            FilterKind::Single
        } else {
            FilterKind::Dual
        }
    }

    /// Software model of the hardware check for a standard identifier.
    pub fn accepts_standard(&self, id: u16) -> bool {
        let id = (id as u32) & 0x7FF;
        let hit = |shift: u32| {
            let care = !self.acceptance_mask & (0x7FF << shift);
            (id << shift) & care == self.acceptance_code & care
        };
        if self.single_filter {
            hit(21)
        } else {
            hit(21) || hit(5)
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::accept_all()
    }
}

//==================================================================================GENERAL
/// General configuration handed to the platform on install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GeneralConfig {
    pub mode: Mode,
    pub tx_pin: i32,
    pub rx_pin: i32,
    pub tx_queue_len: u32,
    pub rx_queue_len: u32,
    pub alerts: Alerts,
}

impl GeneralConfig {
    /// Fixed queue depths and alert set for the given pins and mode.
    pub const fn new(mode: Mode, tx_pin: i32, rx_pin: i32) -> Self {
        Self {
            mode,
            tx_pin,
            rx_pin,
            tx_queue_len: TX_QUEUE_LEN,
            rx_queue_len: RX_QUEUE_LEN,
            alerts: Alerts::driver_default(),
        }
    }
}

//==================================================================================TWAI_CONFIG
/// Arguments of `initialize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TwaiConfig {
    pub tx_pin: i32,
    pub rx_pin: i32,
    /// Bus speed in bit/s.
    pub bitrate: u32,
    pub mode: Mode,
}

impl TwaiConfig {
    /// Default pins (4/5), 125 kbit/s, normal mode.
    pub const fn new() -> Self {
        Self {
            tx_pin: DEFAULT_TX_PIN,
            rx_pin: DEFAULT_RX_PIN,
            bitrate: DEFAULT_BITRATE,
            mode: Mode::Normal,
        }
    }

    #[must_use]
    pub const fn pins(mut self, tx_pin: i32, rx_pin: i32) -> Self {
        self.tx_pin = tx_pin;
        self.rx_pin = rx_pin;
        self
    }

    #[must_use]
    pub const fn bitrate(mut self, bitrate: u32) -> Self {
        self.bitrate = bitrate;
        self
    }

    #[must_use]
    pub const fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
}

impl Default for TwaiConfig {
    fn default() -> Self {
        Self::new()
    }
}

//==================================================================================SEND_OPTIONS
/// Optional arguments of `send_data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendOptions {
    /// Frame identifier (0x123 unless set).
    pub id: u32,
    /// Send a remote request instead of a data frame.
    pub remote: bool,
    /// Use the 29-bit identifier format.
    pub extended: bool,
    pub timeout: Duration,
}

impl SendOptions {
    pub const fn new() -> Self {
        Self {
            id: DEFAULT_SEND_ID,
            remote: false,
            extended: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub const fn id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub const fn remote(mut self, remote: bool) -> Self {
        self.remote = remote;
        self
    }

    #[must_use]
    pub const fn extended(mut self, extended: bool) -> Self {
        self.extended = extended;
        self
    }

    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for SendOptions {
    fn default() -> Self {
        Self::new()
    }
}
