#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    Bus(E),
    InvalidChip(u8),
    InvalidRow(u8),
    InvalidValue,
    InvalidTime,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Error::Bus(error)
    }
}

/// Failure of a transport built from a bus peripheral plus discrete pins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError<S, P> {
    Spi(S),
    Pin(P),
}

/// Failure of one clock cycle, tagged with the peripheral that caused it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError<M, S, T, P> {
    Matrix(Error<M>),
    Segments(Error<S>),
    Time(T),
    Sensor(P),
}
