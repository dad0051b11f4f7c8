//! # Quickstart Demo
//!
//! Minimal tour of twai-core on the host:
//! - Plug a loopback platform under the driver
//! - Initialize in NO_ACK (self-test) mode
//! - Send, receive, and read the statistics
//!
//! The loopback platform echoes every transmitted frame back to the receive
//! queue, as the TWAI peripheral does in self-test mode.
//!
//! ```bash
//! cargo run --example quickstart
//! ```

use std::collections::VecDeque;

use embassy_time::Duration;
use twai_core::{
    core::RX_QUEUE_LEN,
    driver::{
        config::{FilterConfig, GeneralConfig},
        timing::TimingConfig,
    },
    Mode, PlatformIoError, SendOptions, Twai, TwaiConfig, TwaiError, TwaiFrame, TwaiPlatform,
};

/// Host-side stand-in for the peripheral.
#[derive(Default)]
struct LoopbackPlatform {
    queue: VecDeque<TwaiFrame>,
    running: bool,
}

impl TwaiPlatform for LoopbackPlatform {
    type Error = &'static str;

    fn install(
        &mut self,
        general: &GeneralConfig,
        timing: &TimingConfig,
        _filter: &FilterConfig,
    ) -> Result<(), Self::Error> {
        println!(
            "   [platform] install tx=GPIO{} rx=GPIO{} mode={:?} brp={}",
            general.tx_pin, general.rx_pin, general.mode, timing.prescaler
        );
        self.queue.clear();
        Ok(())
    }

    fn uninstall(&mut self) -> Result<(), Self::Error> {
        println!("   [platform] uninstall");
        Ok(())
    }

    fn start(&mut self) -> Result<(), Self::Error> {
        self.running = true;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), Self::Error> {
        self.running = false;
        Ok(())
    }

    async fn transmit<'a>(
        &'a mut self,
        frame: &'a TwaiFrame,
        _timeout: Duration,
    ) -> Result<(), PlatformIoError<Self::Error>> {
        if !self.running {
            return Err(PlatformIoError::Fault("bus stopped"));
        }
        // A full receive queue drops the echoed frame silently.
        if self.queue.len() < RX_QUEUE_LEN as usize {
            self.queue.push_back(frame.clone());
        }
        Ok(())
    }

    async fn receive<'a>(
        &'a mut self,
        _timeout: Duration,
    ) -> Result<TwaiFrame, PlatformIoError<Self::Error>> {
        self.queue.pop_front().ok_or(PlatformIoError::TimedOut)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), TwaiError<&'static str>> {
    println!("=== twai-core Quickstart ===\n");

    // ======================================================================
    // 1. Initialize the controller
    // ======================================================================
    println!("1. Initializing at 500 kbit/s, NO_ACK mode");
    let mut twai = Twai::new(LoopbackPlatform::default());
    twai.initialize(TwaiConfig::new().bitrate(500_000).mode(Mode::NoAck))?;
    println!("   State: {:?}\n", twai.state());

    // ======================================================================
    // 2. Send a data frame and a remote request
    // ======================================================================
    println!("2. Sending frames");
    twai.send_data(&[0x01, 0x02], SendOptions::default()).await?;
    twai.send_data(&[], SendOptions::new().id(0x7DF).remote(true))
        .await?;
    match twai.send_data(&[0u8; 9], SendOptions::default()).await {
        Err(e) => println!("   Oversized payload rejected: {}", e),
        Ok(()) => println!("   Oversized payload accepted?!"),
    }
    println!();

    // ======================================================================
    // 3. Receive the echoed frames
    // ======================================================================
    println!("3. Receiving");
    loop {
        match twai.receive(Duration::from_millis(0)).await {
            Ok(frame) => match frame.payload() {
                Some(data) => println!("   id=0x{:03X} data={:02X?}", frame.identifier(), data),
                None => println!("   id=0x{:03X} remote request", frame.identifier()),
            },
            Err(TwaiError::Timeout) => break,
            Err(e) => return Err(e),
        }
    }
    println!();

    // ======================================================================
    // 4. Statistics and tear-down
    // ======================================================================
    println!("4. Statistics");
    for (key, value) in twai.stats().entries() {
        println!("   {key}: {value}");
    }
    twai.deinitialize();
    println!("\n   Final state: {:?}", twai.state());

    Ok(())
}
