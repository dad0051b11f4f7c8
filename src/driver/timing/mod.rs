//! Bitrate to bus-timing resolution.
//!
//! The table holds vetted register values for the 80 MHz APB clock of the
//! target silicon (the ESP-IDF `TWAI_TIMING_CONFIG_*` presets). Nothing is
//! computed at runtime: a bitrate either has an entry or is rejected.
use crate::core::SOURCE_CLOCK_HZ;

/// Bus-timing register values for one bitrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingConfig {
    /// Baud rate prescaler (BRP).
    pub prescaler: u32,
    /// Time quanta of phase segment 1 (propagation included).
    pub tseg_1: u8,
    /// Time quanta of phase segment 2.
    pub tseg_2: u8,
    /// Synchronization jump width.
    pub sjw: u8,
    /// Sample the bus three times per bit.
    pub triple_sampling: bool,
}

impl TimingConfig {
    const fn preset(prescaler: u32, tseg_1: u8, tseg_2: u8) -> Self {
        Self {
            prescaler,
            tseg_1,
            tseg_2,
            sjw: 3,
            triple_sampling: false,
        }
    }

    /// Time quanta per bit (sync segment + tseg_1 + tseg_2).
    pub const fn quanta_per_bit(&self) -> u32 {
        1 + self.tseg_1 as u32 + self.tseg_2 as u32
    }

    /// Effective bitrate produced by these values on a `source_clock_hz` clock.
    pub const fn bitrate(&self, source_clock_hz: u32) -> u32 {
        source_clock_hz / (self.prescaler * self.quanta_per_bit())
    }

    /// Sample point in per mille of the bit time.
    pub const fn sample_point_permille(&self) -> u32 {
        (1 + self.tseg_1 as u32) * 1000 / self.quanta_per_bit()
    }
}

/// Supported bitrates and their timing, in ascending order.
static TIMING_TABLE: [(u32, TimingConfig); 8] = [
    (25_000, TimingConfig::preset(128, 16, 8)),
    (50_000, TimingConfig::preset(80, 15, 4)),
    (100_000, TimingConfig::preset(40, 15, 4)),
    (125_000, TimingConfig::preset(32, 15, 4)),
    (250_000, TimingConfig::preset(16, 15, 4)),
    (500_000, TimingConfig::preset(8, 15, 4)),
    (800_000, TimingConfig::preset(5, 15, 4)),
    (1_000_000, TimingConfig::preset(4, 15, 4)),
];

/// Bitrates accepted by [`resolve_timing`].
pub const SUPPORTED_BITRATES: [u32; 8] = [
    25_000, 50_000, 100_000, 125_000, 250_000, 500_000, 800_000, 1_000_000,
];

/// Error returned for a bitrate missing from the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnsupportedBitrate(pub u32);

/// Look up the timing registers for `bitrate` (bit/s).
pub fn resolve_timing(bitrate: u32) -> Result<TimingConfig, UnsupportedBitrate> {
    TIMING_TABLE
        .iter()
        .find(|(rate, _)| *rate == bitrate)
        .map(|(_, timing)| *timing)
        .ok_or(UnsupportedBitrate(bitrate))
}

/// Whether `bitrate` has an entry in the table.
pub fn is_supported(bitrate: u32) -> bool {
    resolve_timing(bitrate).is_ok()
}

/// Effective bitrate of `timing` on the APB clock.
pub fn effective_bitrate(timing: &TimingConfig) -> u32 {
    timing.bitrate(SOURCE_CLOCK_HZ)
}

#[cfg(test)]
mod tests;
