//! Addressing of one chip among `N` chips wired in series
//!
//! Every chip shifts the previous byte pair out to its neighbour while a new
//! one comes in, and all of them latch together when chip-select rises. A
//! command for chip `i` is therefore framed by `i` leading no-op pairs and
//! `N - 1 - i` trailing ones: the pair written first ends up in the chip at
//! the far end of the chain.

use crate::constants::register;
use crate::error::Error;
use crate::transport::Transport;

pub struct Chain<T, const N: usize> {
    transport: T,
}

impl<T, const N: usize> Chain<T, N>
where
    T: Transport,
{
    // chip indices travel as u8
    const FITS_U8_INDEX: () = assert!(N <= 256, "chain longer than 256 chips");

    pub fn new(transport: T) -> Self {
        let () = Self::FITS_U8_INDEX;
        Self { transport }
    }

    pub fn destroy(self) -> T {
        self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Every chip index of the chain, head first.
    pub fn chips(&self) -> impl Iterator<Item = u8> {
        (0..N).map(|chip| chip as u8)
    }

    /// Write `value` into `register` of chip `chip`, leaving every other chip untouched.
    ///
    /// Always shifts exactly `N` byte pairs.
    pub fn send_command(&mut self, chip: u8, register: u8, value: u8) -> Result<(), Error<T::Error>> {
        if chip as usize >= N {
            return Err(Error::InvalidChip(chip));
        }

        self.transport.select()?;
        for _ in 0..chip {
            self.transport.write_pair(register::NO_OP, 0)?;
        }
        self.transport.write_pair(register, value)?;
        for _ in (chip as usize)..(N - 1) {
            self.transport.write_pair(register::NO_OP, 0)?;
        }
        self.transport.deselect()?;

        Ok(())
    }
}
