#![no_std]

mod constants;

pub mod chain;
pub mod clock;
pub mod config;
pub mod error;
pub mod matrix;
pub mod presence;
pub mod rtc;
pub mod segment;
pub mod transport;

pub use chain::Chain;
pub use clock::Clock;
pub use config::Config;
pub use constants::*;
pub use error::{ClockError, Error, TransportError};
pub use matrix::{DecodeMode, MatrixChain};
pub use presence::{render, Presence, PresenceGate};
pub use rtc::{Ds3231, Time, TimeSource};
pub use segment::{segment_pattern, time_digits, Digit, PinBus, SegmentBus, SevenSegment};
pub use transport::{BitBangTransport, SpiTransport, Transport};
