//! Minimal abstraction over the platform services the TWAI driver consumes:
//! GPIO validity, peripheral install/uninstall/start/stop, and frame
//! transmit/receive bounded by a timeout. Board support crates implement it
//! on top of the vendor driver; tests implement it in memory.
use embassy_time::Duration;
use futures_util::Future;

use crate::core::GPIO_RANGE;
use crate::driver::config::{FilterConfig, GeneralConfig};
use crate::driver::timing::TimingConfig;
use crate::error::PlatformIoError;
use crate::frame::TwaiFrame;

/// Contract between the driver core and the TWAI peripheral.
///
/// The driver owns its platform for its whole life, so an implementation
/// should only be constructible once per physical peripheral.
pub trait TwaiPlatform {
    type Error: core::fmt::Debug;

    /// Whether `pin` can be routed to the TWAI peripheral.
    fn is_valid_gpio(&self, pin: i32) -> bool {
        GPIO_RANGE.contains(&pin)
    }

    /// Allocate driver resources and program the configuration.
    fn install(
        &mut self,
        general: &GeneralConfig,
        timing: &TimingConfig,
        filter: &FilterConfig,
    ) -> Result<(), Self::Error>;

    /// Release the resources allocated by [`install`](Self::install).
    fn uninstall(&mut self) -> Result<(), Self::Error>;

    /// Enter bus arbitration.
    fn start(&mut self) -> Result<(), Self::Error>;

    /// Leave bus arbitration; the driver stays installed.
    fn stop(&mut self) -> Result<(), Self::Error>;

    /// Queue `frame` and wait until the bus accepts it or `timeout` elapses.
    /// A zero timeout must not wait.
    fn transmit<'a>(
        &'a mut self,
        frame: &'a TwaiFrame,
        timeout: Duration,
    ) -> impl Future<Output = Result<(), PlatformIoError<Self::Error>>> + 'a;

    /// Wait for the next received frame or until `timeout` elapses.
    /// A zero timeout must return at once when nothing is pending.
    fn receive<'a>(
        &'a mut self,
        timeout: Duration,
    ) -> impl Future<Output = Result<TwaiFrame, PlatformIoError<Self::Error>>> + 'a;
}
