//! Controller lifecycle: `Uninitialized → Installed → Started` and back.
//!
//! `initialize` is re-entrant. A request is validated (pins, bitrate) before
//! anything is torn down, so a rejected request leaves the running
//! configuration untouched. An accepted request tears the previous
//! configuration down, then installs and starts the new one; a failed install
//! or start always ends in `Uninitialized`, never half-installed.
use crate::{
    driver::{
        config::{FilterConfig, GeneralConfig, Mode, TwaiConfig},
        timing::resolve_timing,
        ControllerState, Twai,
    },
    error::TwaiError,
    platform::TwaiPlatform,
};

impl<P: TwaiPlatform> Twai<P> {
    /// Apply `config` and start arbitrating on the bus.
    ///
    /// # Errors
    ///
    /// - [`TwaiError::InvalidPin`] when a pin is not a legal GPIO (checked first,
    ///   before the hardware is touched);
    /// - [`TwaiError::UnsupportedBitrate`] when the bitrate has no timing entry;
    /// - [`TwaiError::DriverUnavailable`] when the platform refuses to install or
    ///   start; the controller is then `Uninitialized`.
    pub fn initialize(&mut self, config: TwaiConfig) -> Result<(), TwaiError<P::Error>> {
        // Step 1: validate the request while the previous configuration still runs.
        for pin in [config.tx_pin, config.rx_pin] {
            if !self.platform.is_valid_gpio(pin) {
                #[cfg(feature = "defmt")]
                defmt::warn!("Rejecting GPIO{} for TWAI", pin);
                return Err(TwaiError::InvalidPin { pin });
            }
        }
        let timing = resolve_timing(config.bitrate).map_err(|unsupported| {
            TwaiError::UnsupportedBitrate {
                bitrate: unsupported.0,
            }
        })?;

        // Step 2: release the previous configuration.
        self.teardown();

        // Step 3: build the install-time configuration.
        let general = GeneralConfig::new(config.mode, config.tx_pin, config.rx_pin);
        self.config = config;
        self.timing = Some(timing);

        #[cfg(feature = "defmt")]
        defmt::info!(
            "Installing TWAI: tx=GPIO{} rx=GPIO{} bitrate={} mode={}",
            config.tx_pin,
            config.rx_pin,
            config.bitrate,
            config.mode
        );

        // Step 4: install, then start.
        self.platform
            .install(&general, &timing, &self.filter)
            .map_err(TwaiError::DriverUnavailable)?;
        self.state = ControllerState::Installed;

        if let Err(err) = self.platform.start() {
            #[cfg(feature = "defmt")]
            defmt::warn!("TWAI start failed, uninstalling");
            // Roll back so no half-installed state is observable.
            if let Err(_err) = self.platform.uninstall() {
                #[cfg(feature = "defmt")]
                defmt::warn!("TWAI uninstall failed: {}", defmt::Debug2Format(&_err));
            }
            self.state = ControllerState::Uninitialized;
            return Err(TwaiError::DriverUnavailable(err));
        }
        self.state = ControllerState::Started;

        #[cfg(feature = "defmt")]
        defmt::debug!("TWAI started");
        Ok(())
    }

    /// Binding-layer form of [`initialize`](Self::initialize) taking the mode as
    /// its integer constant.
    pub fn initialize_with(
        &mut self,
        tx_pin: i32,
        rx_pin: i32,
        bitrate: u32,
        mode: u8,
    ) -> Result<(), TwaiError<P::Error>> {
        let mode = Mode::try_from(mode).map_err(|mode| TwaiError::InvalidMode { mode })?;
        self.initialize(
            TwaiConfig::new()
                .pins(tx_pin, rx_pin)
                .bitrate(bitrate)
                .mode(mode),
        )
    }

    /// Stop and uninstall. Idempotent and infallible: platform errors during
    /// tear-down are dropped.
    pub fn deinitialize(&mut self) {
        self.teardown();
    }

    /// Store the acceptance filter programmed on the next [`initialize`](Self::initialize).
    ///
    /// The TWAI filter is fixed while the driver is installed; a running
    /// controller keeps its current filter until reconfigured.
    pub fn set_filter(&mut self, filter: FilterConfig) {
        self.filter = filter;
    }

    /// Filter applied on the next install.
    pub fn filter(&self) -> FilterConfig {
        self.filter
    }

    /// Tear the controller down and give the platform back.
    pub fn release(mut self) -> P {
        self.teardown();
        self.platform
    }

    /// Best-effort stop then uninstall.
    fn teardown(&mut self) {
        if self.state.is_started() {
            if let Err(_err) = self.platform.stop() {
                #[cfg(feature = "defmt")]
                defmt::warn!("TWAI stop failed: {}", defmt::Debug2Format(&_err));
            }
            self.state = ControllerState::Installed;
        }
        if self.state.is_installed() {
            if let Err(_err) = self.platform.uninstall() {
                #[cfg(feature = "defmt")]
                defmt::warn!("TWAI uninstall failed: {}", defmt::Debug2Format(&_err));
            }
            self.state = ControllerState::Uninitialized;
        }
    }
}
