//! Mutex-guarded handle for firmware that drives the controller from several
//! tasks.
//!
//! Every operation locks the inner [`Twai`] for its whole duration, so state
//! transitions and counter updates never interleave. A blocking send or
//! receive holds the lock until its timeout elapses.
use embassy_sync::{blocking_mutex::raw::RawMutex, mutex::Mutex};
use embassy_time::Duration;

use crate::{
    driver::{
        config::{FilterConfig, SendOptions, TwaiConfig},
        stats::{DriverInfo, Stats},
        ControllerState, Twai,
    },
    error::TwaiError,
    frame::TwaiFrame,
    platform::TwaiPlatform,
};

/// [`Twai`] behind an [`embassy_sync`] mutex.
pub struct SharedTwai<M: RawMutex, P: TwaiPlatform> {
    inner: Mutex<M, Twai<P>>,
}

impl<M: RawMutex, P: TwaiPlatform> SharedTwai<M, P> {
    pub fn new(twai: Twai<P>) -> Self {
        Self {
            inner: Mutex::new(twai),
        }
    }

    pub async fn initialize(&self, config: TwaiConfig) -> Result<(), TwaiError<P::Error>> {
        self.inner.lock().await.initialize(config)
    }

    pub async fn deinitialize(&self) {
        self.inner.lock().await.deinitialize();
    }

    pub async fn set_filter(&self, filter: FilterConfig) {
        self.inner.lock().await.set_filter(filter);
    }

    pub async fn send(
        &self,
        frame: &TwaiFrame,
        timeout: Duration,
    ) -> Result<(), TwaiError<P::Error>> {
        self.inner.lock().await.send(frame, timeout).await
    }

    pub async fn send_data(
        &self,
        data: &[u8],
        options: SendOptions,
    ) -> Result<(), TwaiError<P::Error>> {
        self.inner.lock().await.send_data(data, options).await
    }

    pub async fn receive(&self, timeout: Duration) -> Result<TwaiFrame, TwaiError<P::Error>> {
        self.inner.lock().await.receive(timeout).await
    }

    pub async fn stats(&self) -> Stats {
        self.inner.lock().await.stats()
    }

    pub async fn info(&self) -> DriverInfo {
        self.inner.lock().await.info()
    }

    pub async fn state(&self) -> ControllerState {
        self.inner.lock().await.state()
    }

    /// Unwrap the driver.
    pub fn into_inner(self) -> Twai<P> {
        self.inner.into_inner()
    }
}
