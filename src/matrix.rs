use crate::chain::Chain;
use crate::constants::{register, Glyph, MAX_INTENSITY, ROWS};
use crate::error::Error;
use crate::transport::Transport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeMode {
    /// Row registers hold raw 8-bit bitmaps.
    Raw,
    /// Row registers hold Code-B digits.
    Digits,
}

/// Register protocol of a chain of `N` 8x8 LED matrix driver chips.
pub struct MatrixChain<T, const N: usize> {
    chain: Chain<T, N>,
}

impl<T, const N: usize> MatrixChain<T, N>
where
    T: Transport,
{
    pub fn new(transport: T) -> Self {
        Self {
            chain: Chain::new(transport),
        }
    }

    pub fn destroy(self) -> T {
        self.chain.destroy()
    }

    pub fn chain_mut(&mut self) -> &mut Chain<T, N> {
        &mut self.chain
    }

    /// Bring every chip out of test mode and into normal operation.
    pub fn init(&mut self, intensity: Option<u8>) -> Result<(), Error<T::Error>> {
        if intensity.is_some_and(|i| i > MAX_INTENSITY) {
            return Err(Error::InvalidValue);
        }

        for chip in self.chain.chips() {
            self.set_display_test(chip, false)?;
            self.set_scan_limit(chip, ROWS)?;
            self.set_shutdown(chip, false)?;
            if let Some(intensity) = intensity {
                self.set_intensity(chip, intensity)?;
            }
        }

        Ok(())
    }

    pub fn set_decode_mode(&mut self, chip: u8, mode: DecodeMode) -> Result<(), Error<T::Error>> {
        let value = match mode {
            DecodeMode::Raw => register::decode_mode::NO_DECODE,
            DecodeMode::Digits => register::decode_mode::DECODE_ALL,
        };
        self.chain.send_command(chip, register::DECODE_MODE, value)
    }

    pub fn set_intensity(&mut self, chip: u8, intensity: u8) -> Result<(), Error<T::Error>> {
        if intensity > MAX_INTENSITY {
            return Err(Error::InvalidValue);
        }
        self.chain.send_command(chip, register::INTENSITY, intensity)
    }

    pub fn set_intensity_all(&mut self, intensity: u8) -> Result<(), Error<T::Error>> {
        for chip in self.chain.chips() {
            self.set_intensity(chip, intensity)?;
        }
        Ok(())
    }

    /// Limit scanning to the first `rows` rows (1-8).
    pub fn set_scan_limit(&mut self, chip: u8, rows: u8) -> Result<(), Error<T::Error>> {
        if rows == 0 || rows > ROWS {
            return Err(Error::InvalidValue);
        }
        self.chain.send_command(chip, register::SCAN_LIMIT, rows - 1)
    }

    pub fn set_shutdown(&mut self, chip: u8, shutdown: bool) -> Result<(), Error<T::Error>> {
        let value = if shutdown {
            register::shutdown::SHUTDOWN_MODE
        } else {
            register::shutdown::NORMAL_OPERATION
        };
        self.chain.send_command(chip, register::SHUTDOWN, value)
    }

    pub fn set_display_test(&mut self, chip: u8, enabled: bool) -> Result<(), Error<T::Error>> {
        let value = if enabled {
            register::display_test::DISPLAY_TEST_MODE
        } else {
            register::display_test::NORMAL_OPERATION
        };
        self.chain.send_command(chip, register::DISPLAY_TEST, value)
    }

    /// Write one row bitmap, rows are numbered 1-8.
    pub fn set_row(&mut self, chip: u8, row: u8, bits: u8) -> Result<(), Error<T::Error>> {
        if row == 0 || row > ROWS {
            return Err(Error::InvalidRow(row));
        }
        self.chain
            .send_command(chip, register::ROW_OFFSET + row - 1, bits)
    }

    pub fn write_glyph(&mut self, chip: u8, glyph: &Glyph) -> Result<(), Error<T::Error>> {
        for (row, bits) in (1..=ROWS).zip(glyph.iter()) {
            self.set_row(chip, row, *bits)?;
        }
        Ok(())
    }

    pub fn clear(&mut self, chip: u8) -> Result<(), Error<T::Error>> {
        for row in 1..=ROWS {
            self.set_row(chip, row, 0)?;
        }
        Ok(())
    }

    pub fn clear_all(&mut self) -> Result<(), Error<T::Error>> {
        for chip in self.chain.chips() {
            self.clear(chip)?;
        }
        Ok(())
    }

    pub fn suspend(&mut self) -> Result<(), Error<T::Error>> {
        self.chain.transport_mut().suspend()?;
        Ok(())
    }

    pub fn resume(&mut self) -> Result<(), Error<T::Error>> {
        self.chain.transport_mut().resume()?;
        Ok(())
    }
}
