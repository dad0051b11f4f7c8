//! Read-only snapshots of the controller: traffic counters and applied
//! configuration.
use crate::{
    driver::{
        config::{FilterConfig, Mode},
        timing::TimingConfig,
        ControllerState, Counters, Twai,
    },
    platform::TwaiPlatform,
};

/// Counter snapshot returned by [`Twai::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Stats {
    /// Frames accepted by the bus.
    pub tx_count: u32,
    /// Frames handed to the caller.
    pub rx_count: u32,
    /// Transmit/receive faults (timeouts excluded).
    pub error_count: u32,
    pub tx_pin: i32,
    pub rx_pin: i32,
}

impl Stats {
    /// Key/value view used by the binding layer.
    pub fn entries(&self) -> [(&'static str, i64); 5] {
        [
            ("tx_count", self.tx_count as i64),
            ("rx_count", self.rx_count as i64),
            ("error_count", self.error_count as i64),
            ("tx_pin", self.tx_pin as i64),
            ("rx_pin", self.rx_pin as i64),
        ]
    }
}

/// Configuration snapshot returned by [`Twai::info`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriverInfo {
    pub state: ControllerState,
    pub bitrate: u32,
    pub mode: Mode,
    pub tx_pin: i32,
    pub rx_pin: i32,
    /// Timing of the last accepted configuration, if any.
    pub timing: Option<TimingConfig>,
    /// Filter applied on the next install.
    pub filter: FilterConfig,
}

impl<P: TwaiPlatform> Twai<P> {
    /// Snapshot of the counters and pins. Never fails, no side effects.
    pub fn stats(&self) -> Stats {
        Stats {
            tx_count: self.counters.tx,
            rx_count: self.counters.rx,
            error_count: self.counters.errors,
            tx_pin: self.config.tx_pin,
            rx_pin: self.config.rx_pin,
        }
    }

    /// Snapshot of the lifecycle state and applied configuration.
    pub fn info(&self) -> DriverInfo {
        DriverInfo {
            state: self.state,
            bitrate: self.config.bitrate,
            mode: self.config.mode,
            tx_pin: self.config.tx_pin,
            rx_pin: self.config.rx_pin,
            timing: self.timing,
            filter: self.filter,
        }
    }

    /// Clear the counters. They otherwise persist across reconfiguration.
    pub fn reset_stats(&mut self) {
        self.counters = Counters::default();
    }
}
