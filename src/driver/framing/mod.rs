//! Frame transmission and reception against a started controller.
//!
//! Both directions are bounded by a caller-supplied timeout that is handed to
//! the platform; a zero timeout never waits. Platform timeouts become
//! [`TwaiError::Timeout`], any other fault [`TwaiError::IoError`]. Nothing is
//! retried here.
use embassy_time::Duration;

use crate::{
    driver::{config::SendOptions, Twai},
    error::TwaiError,
    frame::TwaiFrame,
    platform::TwaiPlatform,
};

impl<P: TwaiPlatform> Twai<P> {
    /// Transmit `frame`, waiting at most `timeout` for the bus to accept it.
    ///
    /// Returns [`TwaiError::NotReady`] unless the controller is started.
    pub async fn send(
        &mut self,
        frame: &TwaiFrame,
        timeout: Duration,
    ) -> Result<(), TwaiError<P::Error>> {
        self.ensure_started()?;

        match self.platform.transmit(frame, timeout).await {
            Ok(()) => {
                self.counters.tx = self.counters.tx.saturating_add(1);
                Ok(())
            }
            Err(err) => Err(self.record_failure(err.into())),
        }
    }

    /// Build a frame from raw parts and transmit it.
    ///
    /// Readiness is checked before the frame is built, so a stopped
    /// controller reports [`TwaiError::NotReady`] whatever the payload.
    /// Data frames longer than eight bytes fail with
    /// [`TwaiError::FrameTooLarge`]; for remote requests `data` is ignored.
    pub async fn send_data(
        &mut self,
        data: &[u8],
        options: SendOptions,
    ) -> Result<(), TwaiError<P::Error>> {
        self.ensure_started()?;

        let frame = if options.remote {
            TwaiFrame::remote_frame(options.id, options.extended)?
        } else {
            TwaiFrame::data_frame(options.id, options.extended, data)?
        };
        self.send(&frame, options.timeout).await
    }

    /// Wait at most `timeout` for the next frame.
    ///
    /// Returns [`TwaiError::NotReady`] unless the controller is started.
    pub async fn receive(&mut self, timeout: Duration) -> Result<TwaiFrame, TwaiError<P::Error>> {
        self.ensure_started()?;

        match self.platform.receive(timeout).await {
            Ok(frame) => {
                self.counters.rx = self.counters.rx.saturating_add(1);
                Ok(frame)
            }
            Err(err) => Err(self.record_failure(err.into())),
        }
    }

    fn ensure_started(&self) -> Result<(), TwaiError<P::Error>> {
        if self.state.is_started() {
            Ok(())
        } else {
            Err(TwaiError::NotReady)
        }
    }

    /// Count bus faults; timeouts are left out of the error counter.
    fn record_failure(&mut self, err: TwaiError<P::Error>) -> TwaiError<P::Error> {
        if let TwaiError::IoError(ref _fault) = err {
            self.counters.errors = self.counters.errors.saturating_add(1);
            #[cfg(feature = "defmt")]
            defmt::warn!("TWAI I/O fault: {}", defmt::Debug2Format(_fault));
        }
        err
    }
}
