//! Wall-clock time source
//!
//! The clock only needs hours and minutes once per cycle; any chip able to
//! produce a [`Time`] can stand in for the DS3231 through [`TimeSource`].

use embedded_hal::i2c::I2c;

use crate::error::Error;

pub const DS3231_ADDRESS: u8 = 0x68;

mod register {
    pub const SECONDS: u8 = 0x00;
}

const HOUR_12H_MODE: u8 = 0x40;
const HOUR_PM: u8 = 0x20;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Time {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl Time {
    /// `None` unless the fields form a valid 24-hour time.
    pub const fn new(hours: u8, minutes: u8, seconds: u8) -> Option<Self> {
        if hours > 23 || minutes > 59 || seconds > 59 {
            return None;
        }
        Some(Self {
            hours,
            minutes,
            seconds,
        })
    }
}

pub trait TimeSource {
    type Error;

    fn time(&mut self) -> Result<Time, Self::Error>;
}

pub struct Ds3231<I2C> {
    i2c: I2C,
}

impl<I2C, E> Ds3231<I2C>
where
    I2C: I2c<Error = E>,
{
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    pub fn destroy(self) -> I2C {
        self.i2c
    }

    /// Program the time, the chip is left in 24-hour mode.
    pub fn set_time(&mut self, time: Time) -> Result<(), Error<E>> {
        let Some(time) = Time::new(time.hours, time.minutes, time.seconds) else {
            return Err(Error::InvalidTime);
        };
        self.i2c.write(
            DS3231_ADDRESS,
            &[
                register::SECONDS,
                bcd_encode(time.seconds),
                bcd_encode(time.minutes),
                bcd_encode(time.hours),
            ],
        )?;
        Ok(())
    }

    fn read_time(&mut self) -> Result<Time, Error<E>> {
        let mut buffer = [0; 3];
        self.i2c
            .write_read(DS3231_ADDRESS, &[register::SECONDS], &mut buffer)?;

        let seconds = bcd_decode(buffer[0] & 0x7F);
        let minutes = bcd_decode(buffer[1] & 0x7F);
        let hours = if buffer[2] & HOUR_12H_MODE != 0 {
            let hour = bcd_decode(buffer[2] & 0x1F) % 12;
            if buffer[2] & HOUR_PM != 0 {
                hour + 12
            } else {
                hour
            }
        } else {
            bcd_decode(buffer[2] & 0x3F)
        };

        Time::new(hours, minutes, seconds).ok_or(Error::InvalidTime)
    }
}

impl<I2C, E> TimeSource for Ds3231<I2C>
where
    I2C: I2c<Error = E>,
{
    type Error = Error<E>;

    fn time(&mut self) -> Result<Time, Self::Error> {
        self.read_time()
    }
}

const fn bcd_decode(value: u8) -> u8 {
    (value >> 4) * 10 + (value & 0x0F)
}

const fn bcd_encode(value: u8) -> u8 {
    ((value / 10) << 4) | (value % 10)
}
