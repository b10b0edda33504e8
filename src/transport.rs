//! Raw byte transport shared by every chip in the chain
//!
//! A transport frames one transaction with `select`/`deselect` and shifts
//! bytes out in between. It never buffers: each call returns once the byte
//! has left the wire.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::error::TransportError;

pub trait Transport {
    type Error;

    /// Pull the shared chip-select/latch line active (low).
    fn select(&mut self) -> Result<(), Self::Error>;

    /// Release the chip-select/latch line; every chip latches on this edge.
    fn deselect(&mut self) -> Result<(), Self::Error>;

    /// Shift one byte out, blocking until the transfer has completed.
    fn transfer_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    fn write_pair(&mut self, register: u8, value: u8) -> Result<(), Self::Error> {
        self.transfer_byte(register)?;
        self.transfer_byte(value)
    }

    /// Hand the physical lines over to another driver.
    ///
    /// Nothing may be transferred until [`Transport::resume`] is called.
    fn suspend(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Take the lines back after [`Transport::suspend`].
    fn resume(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Transport over a hardware SPI peripheral with a discrete chip-select pin.
pub struct SpiTransport<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI, CS> SpiTransport<SPI, CS>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
{
    /// Take ownership of the bus and park chip-select high.
    pub fn new(spi: SPI, mut cs: CS) -> Result<Self, TransportError<SPI::Error, CS::Error>> {
        cs.set_high().map_err(TransportError::Pin)?;
        Ok(Self { spi, cs })
    }

    pub fn destroy(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI, CS> Transport for SpiTransport<SPI, CS>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
{
    type Error = TransportError<SPI::Error, CS::Error>;

    fn select(&mut self) -> Result<(), Self::Error> {
        self.cs.set_low().map_err(TransportError::Pin)
    }

    fn deselect(&mut self) -> Result<(), Self::Error> {
        self.cs.set_high().map_err(TransportError::Pin)
    }

    fn transfer_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.spi.write(&[byte]).map_err(TransportError::Spi)?;
        // wait for the shift register to drain before anything touches CS
        self.spi.flush().map_err(TransportError::Spi)
    }

    fn suspend(&mut self) -> Result<(), Self::Error> {
        self.spi.flush().map_err(TransportError::Spi)?;
        self.cs.set_high().map_err(TransportError::Pin)
    }

    fn resume(&mut self) -> Result<(), Self::Error> {
        self.cs.set_high().map_err(TransportError::Pin)
    }
}

/// Transport clocked out by hand on three plain output pins, MSB first.
///
/// For boards whose matrix lines are wired to plain GPIOs instead of the SPI
/// peripheral. The pins stay owned by the transport; [`Transport::suspend`]
/// only parks them at idle levels.
pub struct BitBangTransport<DATA, CLK, CS> {
    data: DATA,
    clk: CLK,
    cs: CS,
}

impl<DATA, CLK, CS, E> BitBangTransport<DATA, CLK, CS>
where
    DATA: OutputPin<Error = E>,
    CLK: OutputPin<Error = E>,
    CS: OutputPin<Error = E>,
{
    pub fn new(mut data: DATA, mut clk: CLK, mut cs: CS) -> Result<Self, E> {
        data.set_low()?;
        clk.set_low()?;
        cs.set_high()?;
        Ok(Self { data, clk, cs })
    }

    pub fn destroy(self) -> (DATA, CLK, CS) {
        (self.data, self.clk, self.cs)
    }
}

impl<DATA, CLK, CS, E> Transport for BitBangTransport<DATA, CLK, CS>
where
    DATA: OutputPin<Error = E>,
    CLK: OutputPin<Error = E>,
    CS: OutputPin<Error = E>,
{
    type Error = E;

    fn select(&mut self) -> Result<(), E> {
        self.cs.set_low()
    }

    fn deselect(&mut self) -> Result<(), E> {
        self.cs.set_high()
    }

    fn transfer_byte(&mut self, byte: u8) -> Result<(), E> {
        for bit in (0..8).rev() {
            self.data.set_state(((byte >> bit) & 1 != 0).into())?;
            self.clk.set_high()?;
            self.clk.set_low()?;
        }
        Ok(())
    }

    fn suspend(&mut self) -> Result<(), E> {
        self.cs.set_high()?;
        self.clk.set_low()?;
        self.data.set_low()
    }

    fn resume(&mut self) -> Result<(), E> {
        self.clk.set_low()?;
        self.cs.set_high()
    }
}
