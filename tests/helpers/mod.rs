/// Test doubles simulating the TWAI platform during integration tests.
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tokio::time::Duration;
use twai_core::{
    driver::{
        config::{FilterConfig, GeneralConfig},
        timing::TimingConfig,
    },
    PlatformIoError, TwaiFrame, TwaiPlatform,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
/// Faults the mock platform can report.
pub enum MockFault {
    InstallRejected,
    StartRejected,
    Bus,
    Disconnected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
/// How the mock answers a transmit request.
pub enum TxBehavior {
    /// Hand the frame to the host side at once.
    #[default]
    Deliver,
    /// Never acknowledge: the transmit waits out its timeout.
    Stall,
    /// Report a bus fault.
    Fault,
}

#[derive(Debug, Default)]
#[allow(dead_code)]
/// Observable side of the mock, shared with the test body.
pub struct Probe {
    pub installed: bool,
    pub started: bool,
    pub installs: u32,
    pub uninstalls: u32,
    pub last_general: Option<GeneralConfig>,
    pub last_timing: Option<TimingConfig>,
    pub last_filter: Option<FilterConfig>,
    pub fail_install: bool,
    pub fail_start: bool,
    pub fail_uninstall: bool,
    pub fail_receive: bool,
    pub tx_behavior: TxBehavior,
}

pub type ProbeHandle = Arc<Mutex<Probe>>;

/// In-memory TWAI peripheral wired to a [`HostBus`].
pub struct MockPlatform {
    tx: mpsc::UnboundedSender<TwaiFrame>,
    rx: mpsc::UnboundedReceiver<TwaiFrame>,
    probe: ProbeHandle,
}

#[allow(dead_code)]
/// The other node on the simulated bus.
pub struct HostBus {
    tx: mpsc::UnboundedSender<TwaiFrame>,
    rx: mpsc::UnboundedReceiver<TwaiFrame>,
}

#[allow(dead_code)]
impl HostBus {
    /// Put a frame on the bus towards the device under test.
    pub fn inject(&self, frame: TwaiFrame) {
        self.tx.send(frame).expect("device side must be alive");
    }

    /// Next frame transmitted by the device, if any arrived already.
    pub fn try_take(&mut self) -> Option<TwaiFrame> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next frame transmitted by the device.
    pub async fn take(&mut self) -> Option<TwaiFrame> {
        self.rx.recv().await
    }
}

/// Build a platform, its host peer and the probe observing it.
pub fn create_platform() -> (MockPlatform, HostBus, ProbeHandle) {
    let (dut_tx, host_rx) = mpsc::unbounded_channel();
    let (host_tx, dut_rx) = mpsc::unbounded_channel();
    let probe = ProbeHandle::default();

    let platform = MockPlatform {
        tx: dut_tx,
        rx: dut_rx,
        probe: probe.clone(),
    };
    let host = HostBus {
        tx: host_tx,
        rx: host_rx,
    };

    (platform, host, probe)
}

/// Only standard identifiers are modelled; extended frames always pass.
fn accepts(filter: &FilterConfig, frame: &TwaiFrame) -> bool {
    use embedded_can::Frame;
    frame.is_extended() || filter.accepts_standard(frame.identifier() as u16)
}

fn to_tokio(timeout: embassy_time::Duration) -> Duration {
    Duration::from_millis(timeout.as_millis())
}

impl TwaiPlatform for MockPlatform {
    type Error = MockFault;

    fn install(
        &mut self,
        general: &GeneralConfig,
        timing: &TimingConfig,
        filter: &FilterConfig,
    ) -> Result<(), Self::Error> {
        let mut probe = self.probe.lock().unwrap();
        probe.installs += 1;
        if probe.fail_install {
            return Err(MockFault::InstallRejected);
        }
        probe.installed = true;
        probe.last_general = Some(*general);
        probe.last_timing = Some(*timing);
        probe.last_filter = Some(*filter);
        Ok(())
    }

    fn uninstall(&mut self) -> Result<(), Self::Error> {
        let mut probe = self.probe.lock().unwrap();
        probe.uninstalls += 1;
        probe.installed = false;
        if probe.fail_uninstall {
            return Err(MockFault::Bus);
        }
        Ok(())
    }

    fn start(&mut self) -> Result<(), Self::Error> {
        let mut probe = self.probe.lock().unwrap();
        if probe.fail_start {
            return Err(MockFault::StartRejected);
        }
        probe.started = true;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), Self::Error> {
        self.probe.lock().unwrap().started = false;
        Ok(())
    }

    async fn transmit<'a>(
        &'a mut self,
        frame: &'a TwaiFrame,
        timeout: embassy_time::Duration,
    ) -> Result<(), PlatformIoError<Self::Error>> {
        let behavior = self.probe.lock().unwrap().tx_behavior;
        match behavior {
            TxBehavior::Deliver => self
                .tx
                .send(frame.clone())
                .map_err(|_| PlatformIoError::Fault(MockFault::Disconnected)),
            TxBehavior::Stall => {
                let _ = tokio::time::timeout(to_tokio(timeout), std::future::pending::<()>()).await;
                Err(PlatformIoError::TimedOut)
            }
            TxBehavior::Fault => Err(PlatformIoError::Fault(MockFault::Bus)),
        }
    }

    async fn receive<'a>(
        &'a mut self,
        timeout: embassy_time::Duration,
    ) -> Result<TwaiFrame, PlatformIoError<Self::Error>> {
        let filter = {
            let probe = self.probe.lock().unwrap();
            if probe.fail_receive {
                return Err(PlatformIoError::Fault(MockFault::Bus));
            }
            probe.last_filter.unwrap_or_default()
        };
        // Rejected frames are dropped as the acceptance filter would.
        let next_accepted = async {
            loop {
                match self.rx.recv().await {
                    Some(frame) if accepts(&filter, &frame) => return Some(frame),
                    Some(_) => continue,
                    None => return None,
                }
            }
        };
        match tokio::time::timeout(to_tokio(timeout), next_accepted).await {
            Ok(Some(frame)) => Ok(frame),
            Ok(None) => Err(PlatformIoError::Fault(MockFault::Disconnected)),
            Err(_elapsed) => Err(PlatformIoError::TimedOut),
        }
    }
}
