//! Top-level clock cycle
//!
//! The seven-segment latches and the matrix chain may share physical lines,
//! so the matrix transport is suspended for the whole seven-segment update
//! and only resumed once the latches are done.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

use crate::config::Config;
use crate::constants::Glyph;
use crate::error::ClockError;
use crate::matrix::MatrixChain;
use crate::presence::{render, Presence, PresenceGate};
use crate::rtc::TimeSource;
use crate::segment::{SegmentBus, SevenSegment};
use crate::transport::Transport;

pub type CycleError<T, SE, R, P> =
    ClockError<<T as Transport>::Error, SE, <R as TimeSource>::Error, <P as ErrorType>::Error>;

pub struct Clock<T, B, L, R, P, D, const N: usize> {
    matrix: MatrixChain<T, N>,
    segments: SevenSegment<B, L>,
    rtc: R,
    gate: PresenceGate<P>,
    delay: D,
    glyphs: [Glyph; N],
    config: Config,
}

impl<T, B, L, R, P, D, SE, const N: usize> Clock<T, B, L, R, P, D, N>
where
    T: Transport,
    B: SegmentBus<Error = SE>,
    L: OutputPin<Error = SE>,
    R: TimeSource,
    P: InputPin,
    D: DelayNs,
{
    pub fn new(
        matrix: MatrixChain<T, N>,
        segments: SevenSegment<B, L>,
        rtc: R,
        gate: PresenceGate<P>,
        delay: D,
        glyphs: [Glyph; N],
        config: Config,
    ) -> Self {
        Self {
            matrix,
            segments,
            rtc,
            gate,
            delay,
            glyphs,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn matrix_mut(&mut self) -> &mut MatrixChain<T, N> {
        &mut self.matrix
    }

    pub fn segments_mut(&mut self) -> &mut SevenSegment<B, L> {
        &mut self.segments
    }

    /// Latches low, chips configured and blank.
    pub fn init(&mut self) -> Result<(), CycleError<T, SE, R, P>> {
        self.segments.init().map_err(ClockError::Segments)?;
        self.matrix
            .init(self.config.intensity)
            .map_err(ClockError::Matrix)?;
        self.matrix.clear_all().map_err(ClockError::Matrix)?;

        #[cfg(feature = "defmt")]
        defmt::info!("clock: {=usize} matrix chips ready", N);

        Ok(())
    }

    /// Run one full cycle and report what the presence gate decided.
    pub fn cycle(&mut self) -> Result<Presence, CycleError<T, SE, R, P>> {
        self.matrix.suspend().map_err(ClockError::Matrix)?;
        #[cfg(feature = "defmt")]
        defmt::trace!("clock: matrix bus suspended");

        let time = self.rtc.time().map_err(ClockError::Time)?;
        self.segments
            .display_time(time.hours, time.minutes)
            .map_err(ClockError::Segments)?;

        self.matrix.resume().map_err(ClockError::Matrix)?;
        #[cfg(feature = "defmt")]
        defmt::trace!("clock: matrix bus resumed");
        if let Some(intensity) = self.config.intensity {
            self.matrix
                .set_intensity_all(intensity)
                .map_err(ClockError::Matrix)?;
        }

        let presence = self.gate.sample().map_err(ClockError::Sensor)?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "clock: {=u8}:{=u8}:{=u8} {}",
            time.hours,
            time.minutes,
            time.seconds,
            presence
        );

        render(
            &mut self.matrix,
            presence,
            &self.glyphs,
            &mut self.delay,
            self.config.dwell_ms,
        )
        .map_err(ClockError::Matrix)?;

        self.delay.delay_ms(self.config.cycle_delay_ms);
        Ok(presence)
    }

    pub fn run(&mut self) -> Result<Infallible, CycleError<T, SE, R, P>> {
        loop {
            self.cycle()?;
        }
    }
}
