//! TWAI controller driver.
//!
//! [`Twai`] owns the platform handle and every piece of controller state:
//! the applied configuration, the lifecycle state, and the traffic counters.
//! Its operations are split across submodules:
//!
//! * [`timing`] resolves a bitrate into bus-timing registers;
//! * [`lifecycle`] drives install → start → stop → uninstall;
//! * [`framing`] sends and receives frames against the running controller;
//! * [`stats`] exposes counters and configuration snapshots.
//!
//! The handle is the only way to reach the peripheral: constructing it
//! consumes the platform, and [`Twai::release`] hands it back once the
//! controller is torn down.
pub mod config;
pub mod framing;
pub mod lifecycle;
pub mod shared;
pub mod stats;
pub mod timing;

use crate::platform::TwaiPlatform;
use config::{FilterConfig, Mode, TwaiConfig};
use timing::TimingConfig;

/// Lifecycle state of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerState {
    /// No driver resources allocated.
    #[default]
    Uninitialized,
    /// Driver installed, not arbitrating on the bus.
    Installed,
    /// Installed and arbitrating.
    Started,
}

impl ControllerState {
    pub fn is_installed(&self) -> bool {
        !matches!(self, ControllerState::Uninitialized)
    }

    pub fn is_started(&self) -> bool {
        matches!(self, ControllerState::Started)
    }
}

/// Traffic counters, kept across reconfiguration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Counters {
    pub(crate) tx: u32,
    pub(crate) rx: u32,
    pub(crate) errors: u32,
}

/// Handle over the single TWAI controller.
pub struct Twai<P: TwaiPlatform> {
    /// Platform services (peripheral driver, GPIO matrix).
    platform: P,
    /// Pins, bitrate and mode of the last accepted `initialize`.
    config: TwaiConfig,
    /// Timing derived from `config.bitrate`; `None` until the first accepted `initialize`.
    timing: Option<TimingConfig>,
    /// Filter programmed on the next install.
    filter: FilterConfig,
    state: ControllerState,
    counters: Counters,
}

impl<P: TwaiPlatform> Twai<P> {
    /// Take ownership of the platform. The controller starts uninitialized
    /// with the default configuration and an accept-all filter.
    pub fn new(platform: P) -> Self {
        Self {
            platform,
            config: TwaiConfig::default(),
            timing: None,
            filter: FilterConfig::accept_all(),
            state: ControllerState::Uninitialized,
            counters: Counters::default(),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Configured operating mode.
    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    /// Shared access to the platform (diagnostics, board-specific queries).
    pub fn platform(&self) -> &P {
        &self.platform
    }
}
