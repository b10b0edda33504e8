//! Runtime settings of the clock loop
//!
//! The chain length and glyph table are compile-time; everything that can be
//! tuned per board lives here.

use crate::constants::{CYCLE_DELAY_MS, DEFAULT_INTENSITY, DWELL_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Brightness programmed at init and on every bus hand-back, `None` keeps the chip default
    pub intensity: Option<u8>,
    /// How long the glyphs stay up after motion is seen
    pub dwell_ms: u32,
    /// Pause at the end of every cycle
    pub cycle_delay_ms: u32,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            intensity: Some(DEFAULT_INTENSITY),
            dwell_ms: DWELL_MS,
            cycle_delay_ms: CYCLE_DELAY_MS,
        }
    }

    pub const fn with_intensity(mut self, intensity: Option<u8>) -> Self {
        self.intensity = intensity;
        self
    }

    pub const fn with_dwell_ms(mut self, dwell_ms: u32) -> Self {
        self.dwell_ms = dwell_ms;
        self
    }

    pub const fn with_cycle_delay_ms(mut self, cycle_delay_ms: u32) -> Self {
        self.cycle_delay_ms = cycle_delay_ms;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
