//! Four seven-segment digits behind discrete latches
//!
//! The segment pattern is presented on a shared parallel data bus and then
//! captured by pulsing the latch line of one digit.

use embedded_hal::digital::OutputPin;
use num_traits::ToPrimitive;

use crate::constants::SEGMENTS;
use crate::error::Error;

/// Digit position, also the index of its latch line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Digit {
    HourTens = 0,
    HourUnits = 1,
    MinuteTens = 2,
    MinuteUnits = 3,
}

/// Order in which the latches are pulsed on every update.
pub const LATCH_ORDER: [Digit; 4] = [
    Digit::HourUnits,
    Digit::HourTens,
    Digit::MinuteUnits,
    Digit::MinuteTens,
];

pub fn segment_pattern(digit: u8) -> Option<u8> {
    SEGMENTS.get(digit as usize).copied()
}

/// Split a 24-hour time into `[hour tens, hour units, minute tens, minute units]`.
pub fn time_digits(hours: u8, minutes: u8) -> Option<[u8; 4]> {
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some([hours / 10, hours % 10, minutes / 10, minutes % 10])
}

/// Parallel data bus the segment pattern is presented on.
pub trait SegmentBus {
    type Error;

    fn present(&mut self, pattern: u8) -> Result<(), Self::Error>;
}

/// Data bus made of individual output pins, bit `i` drives `pins[i]`.
pub struct PinBus<P, const W: usize> {
    pins: [P; W],
}

impl<P, const W: usize> PinBus<P, W>
where
    P: OutputPin,
{
    pub fn new(pins: [P; W]) -> Self {
        Self { pins }
    }

    pub fn destroy(self) -> [P; W] {
        self.pins
    }
}

impl<P, const W: usize> SegmentBus for PinBus<P, W>
where
    P: OutputPin,
{
    type Error = P::Error;

    fn present(&mut self, pattern: u8) -> Result<(), Self::Error> {
        for (bit, pin) in self.pins.iter_mut().enumerate() {
            pin.set_state(((pattern >> bit) & 1 != 0).into())?;
        }
        Ok(())
    }
}

pub struct SevenSegment<B, L> {
    bus: B,
    latches: [L; 4],
}

impl<B, L, E> SevenSegment<B, L>
where
    B: SegmentBus<Error = E>,
    L: OutputPin<Error = E>,
{
    /// `latches` is indexed by [`Digit`].
    pub fn new(bus: B, latches: [L; 4]) -> Self {
        Self { bus, latches }
    }

    pub fn destroy(self) -> (B, [L; 4]) {
        (self.bus, self.latches)
    }

    /// Drive every latch line low.
    pub fn init(&mut self) -> Result<(), Error<E>> {
        for latch in self.latches.iter_mut() {
            latch.set_low()?;
        }
        Ok(())
    }

    pub fn set_digit(&mut self, digit: Digit, pattern: u8) -> Result<(), Error<E>> {
        self.bus.present(pattern)?;
        let latch = &mut self.latches[digit as usize];
        latch.set_high()?;
        latch.set_low()?;
        Ok(())
    }

    pub fn display_time(&mut self, hours: u8, minutes: u8) -> Result<(), Error<E>> {
        let digits = time_digits(hours, minutes).ok_or(Error::InvalidTime)?;
        self.latch_digits(&digits)
    }

    /// Show `number` (0-9999) with leading zeros.
    pub fn display_number<T>(&mut self, number: T) -> Result<(), Error<E>>
    where
        T: ToPrimitive,
    {
        let num = number.to_u16().ok_or(Error::InvalidValue)?;
        if num > 9999 {
            return Err(Error::InvalidValue);
        }
        let digits = [
            (num / 1000) as u8,
            (num / 100 % 10) as u8,
            (num / 10 % 10) as u8,
            (num % 10) as u8,
        ];
        self.latch_digits(&digits)
    }

    pub fn blank(&mut self) -> Result<(), Error<E>> {
        for digit in LATCH_ORDER {
            self.set_digit(digit, 0)?;
        }
        Ok(())
    }

    fn latch_digits(&mut self, digits: &[u8; 4]) -> Result<(), Error<E>> {
        for digit in LATCH_ORDER {
            let pattern = segment_pattern(digits[digit as usize]).ok_or(Error::InvalidValue)?;
            self.set_digit(digit, pattern)?;
        }
        Ok(())
    }
}
