#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use dotclock::{SegmentBus, Time, TimeSource, Transport};

/// Everything the fakes below observe, in the order it happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Select,
    Deselect,
    Byte(u8),
    Suspend,
    Resume,
    Segment(u8),
    LatchHigh(usize),
    LatchLow(usize),
    Sense(bool),
    TimeRead,
    DelayNs(u64),
}

pub type Log = Rc<RefCell<Vec<Event>>>;

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

pub struct RecordingTransport {
    log: Log,
}

impl RecordingTransport {
    pub fn new(log: &Log) -> Self {
        Self { log: log.clone() }
    }
}

impl Transport for RecordingTransport {
    type Error = Infallible;

    fn select(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Select);
        Ok(())
    }

    fn deselect(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Deselect);
        Ok(())
    }

    fn transfer_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Byte(byte));
        Ok(())
    }

    fn suspend(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Suspend);
        Ok(())
    }

    fn resume(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Resume);
        Ok(())
    }
}

pub struct RecordingBus {
    log: Log,
}

impl RecordingBus {
    pub fn new(log: &Log) -> Self {
        Self { log: log.clone() }
    }
}

impl SegmentBus for RecordingBus {
    type Error = Infallible;

    fn present(&mut self, pattern: u8) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Segment(pattern));
        Ok(())
    }
}

pub struct RecordingLatch {
    index: usize,
    log: Log,
}

pub fn latches(log: &Log) -> [RecordingLatch; 4] {
    core::array::from_fn(|index| RecordingLatch {
        index,
        log: log.clone(),
    })
}

impl embedded_hal::digital::ErrorType for RecordingLatch {
    type Error = Infallible;
}

impl embedded_hal::digital::OutputPin for RecordingLatch {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::LatchLow(self.index));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::LatchHigh(self.index));
        Ok(())
    }
}

/// Motion sensor replaying a fixed list of levels, low once exhausted.
pub struct FakeSensor {
    levels: VecDeque<bool>,
    log: Log,
}

impl FakeSensor {
    pub fn new(log: &Log, levels: &[bool]) -> Self {
        Self {
            levels: levels.iter().copied().collect(),
            log: log.clone(),
        }
    }
}

impl embedded_hal::digital::ErrorType for FakeSensor {
    type Error = Infallible;
}

impl embedded_hal::digital::InputPin for FakeSensor {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        let level = self.levels.pop_front().unwrap_or(false);
        self.log.borrow_mut().push(Event::Sense(level));
        Ok(level)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|level| !level)
    }
}

/// Virtual clock: records requested delays instead of sleeping.
pub struct RecordingDelay {
    log: Log,
}

impl RecordingDelay {
    pub fn new(log: &Log) -> Self {
        Self { log: log.clone() }
    }
}

impl embedded_hal::delay::DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::DelayNs(ns as u64));
    }

    fn delay_us(&mut self, us: u32) {
        self.log.borrow_mut().push(Event::DelayNs(us as u64 * 1_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::DelayNs(ms as u64 * 1_000_000));
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct TimeUnavailable;

pub struct FakeTime {
    times: VecDeque<Time>,
    log: Log,
}

impl FakeTime {
    pub fn new(log: &Log, times: &[Time]) -> Self {
        Self {
            times: times.iter().copied().collect(),
            log: log.clone(),
        }
    }
}

impl TimeSource for FakeTime {
    type Error = TimeUnavailable;

    fn time(&mut self) -> Result<Time, Self::Error> {
        self.log.borrow_mut().push(Event::TimeRead);
        self.times.pop_front().ok_or(TimeUnavailable)
    }
}

/// Byte pairs of every select/deselect transaction.
pub fn frames(events: &[Event]) -> Vec<Vec<(u8, u8)>> {
    let mut frames = Vec::new();
    let mut bytes: Option<Vec<u8>> = None;
    for event in events {
        match event {
            Event::Select => bytes = Some(Vec::new()),
            Event::Byte(b) => bytes
                .as_mut()
                .expect("byte transferred outside of a transaction")
                .push(*b),
            Event::Deselect => {
                let bytes = bytes.take().expect("deselect without select");
                assert_eq!(bytes.len() % 2, 0, "odd number of bytes in a transaction");
                frames.push(bytes.chunks(2).map(|p| (p[0], p[1])).collect());
            }
            _ => {}
        }
    }
    assert!(bytes.is_none(), "transaction left open");
    frames
}

/// Decode every transaction into `(chip, register, value)`, one real command per frame.
pub fn commands(events: &[Event]) -> Vec<(u8, u8, u8)> {
    frames(events)
        .iter()
        .map(|frame| {
            let real: Vec<_> = frame
                .iter()
                .enumerate()
                .filter(|(_, (register, _))| *register != 0)
                .collect();
            assert_eq!(real.len(), 1, "expected one addressed command in {:?}", frame);
            let (chip, (register, value)) = real[0];
            (chip as u8, *register, *value)
        })
        .collect()
}

/// Register file of every chip after latching all transactions in `events`.
///
/// The pair shifted in at position `p` of a transaction is what chip `p`
/// latches on deselect.
pub fn chip_registers<const N: usize>(events: &[Event], mut registers: [[u8; 16]; N]) -> [[u8; 16]; N] {
    for frame in frames(events) {
        assert_eq!(frame.len(), N);
        for (chip, (register, value)) in frame.into_iter().enumerate() {
            if register != 0 {
                registers[chip][register as usize] = value;
            }
        }
    }
    registers
}

pub fn total_delay_ns(events: &[Event]) -> u64 {
    events
        .iter()
        .map(|e| match e {
            Event::DelayNs(ns) => *ns,
            _ => 0,
        })
        .sum()
}
