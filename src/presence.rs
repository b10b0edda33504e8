//! Motion-gated rendering of the glyph table
//!
//! Each poll is decided on its own: no debounce, no hysteresis, nothing is
//! remembered from the previous cycle.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::constants::Glyph;
use crate::error::Error;
use crate::matrix::MatrixChain;
use crate::transport::Transport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Presence {
    Idle,
    Active,
}

impl Presence {
    pub const fn from_level(high: bool) -> Self {
        if high {
            Presence::Active
        } else {
            Presence::Idle
        }
    }

    pub const fn is_active(self) -> bool {
        matches!(self, Presence::Active)
    }
}

/// Passive infrared sensor on a digital input, active high.
pub struct PresenceGate<P> {
    sensor: P,
}

impl<P> PresenceGate<P>
where
    P: InputPin,
{
    pub fn new(sensor: P) -> Self {
        Self { sensor }
    }

    pub fn destroy(self) -> P {
        self.sensor
    }

    pub fn sample(&mut self) -> Result<Presence, P::Error> {
        Ok(Presence::from_level(self.sensor.is_high()?))
    }
}

/// Render one decision: glyphs plus a blocking dwell when active, blank otherwise.
pub fn render<T, D, const N: usize>(
    matrix: &mut MatrixChain<T, N>,
    presence: Presence,
    glyphs: &[Glyph; N],
    delay: &mut D,
    dwell_ms: u32,
) -> Result<(), Error<T::Error>>
where
    T: Transport,
    D: DelayNs,
{
    match presence {
        Presence::Idle => matrix.clear_all(),
        Presence::Active => {
            let chips = matrix.chain_mut().chips();
            for (chip, glyph) in chips.zip(glyphs.iter()) {
                matrix.write_glyph(chip, glyph)?;
            }
            delay.delay_ms(dwell_ms);
            Ok(())
        }
    }
}
