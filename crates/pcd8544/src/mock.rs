//! Test doubles for the bus, pins, delay and interface

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::{self, SpiBus};

use crate::interface::DisplayInterface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockError;

impl spi::Error for MockError {
    fn kind(&self) -> spi::ErrorKind {
        spi::ErrorKind::Other
    }
}

impl digital::Error for MockError {
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    Reset,
    ChipEnable,
    DataCommand,
    Backlight,
}

/// Something observable on the wires, in order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Line(Line, bool),
    Write(u8),
    Flush,
    Delay(u64),
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

pub fn event_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub struct MockBus {
    log: EventLog,
    fail_next: bool,
}

impl MockBus {
    pub fn new(log: &EventLog) -> Self {
        Self {
            log: log.clone(),
            fail_next: false,
        }
    }

    pub fn fail_next(&mut self) {
        self.fail_next = true;
    }
}

impl spi::ErrorType for MockBus {
    type Error = MockError;
}

impl SpiBus for MockBus {
    fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        if core::mem::take(&mut self.fail_next) {
            return Err(MockError);
        }
        let mut log = self.log.borrow_mut();
        log.extend(words.iter().map(|&byte| Event::Write(byte)));
        Ok(())
    }

    fn transfer(&mut self, _read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        self.write(write)
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        self.write(words)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Flush);
        Ok(())
    }
}

pub struct MockPin {
    line: Line,
    log: EventLog,
}

impl MockPin {
    pub fn new(line: Line, log: &EventLog) -> Self {
        Self {
            line,
            log: log.clone(),
        }
    }
}

impl digital::ErrorType for MockPin {
    type Error = MockError;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Line(self.line, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Line(self.line, true));
        Ok(())
    }
}

pub struct MockDelay {
    log: EventLog,
}

impl MockDelay {
    pub fn new(log: &EventLog) -> Self {
        Self { log: log.clone() }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::Delay(u64::from(ns)));
    }

    fn delay_us(&mut self, us: u32) {
        self.log.borrow_mut().push(Event::Delay(u64::from(us) * 1_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::Delay(u64::from(ms) * 1_000_000));
    }
}

/// Delay that does nothing
pub struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// One interface call as seen by the controller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transfer {
    Command(u8),
    Data(u8),
    Reset,
    Backlight(bool),
}

/// Interface recording every call, optionally failing a byte transfer
#[derive(Debug, Default)]
pub struct RecordingInterface {
    pub transfers: Vec<Transfer>,
    /// Zero-based index of the byte transfer that fails
    fail_at: Option<usize>,
    bytes: usize,
}

impl RecordingInterface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(index: usize) -> Self {
        Self {
            fail_at: Some(index),
            ..Self::default()
        }
    }

    /// Fail the byte transfer `ahead` transfers from now, once
    pub fn fail_after(&mut self, ahead: usize) {
        self.fail_at = Some(self.bytes + ahead);
    }

    pub fn commands(&self) -> Vec<u8> {
        self.transfers
            .iter()
            .filter_map(|transfer| match transfer {
                Transfer::Command(byte) => Some(*byte),
                _ => None,
            })
            .collect()
    }

    pub fn data(&self) -> Vec<u8> {
        self.transfers
            .iter()
            .filter_map(|transfer| match transfer {
                Transfer::Data(byte) => Some(*byte),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.transfers.clear();
    }

    fn byte(&mut self, transfer: Transfer) -> Result<(), MockError> {
        let index = self.bytes;
        self.bytes += 1;
        if self.fail_at == Some(index) {
            return Err(MockError);
        }
        self.transfers.push(transfer);
        Ok(())
    }
}

impl DisplayInterface for RecordingInterface {
    type Error = MockError;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.byte(Transfer::Command(command))
    }

    fn send_data(&mut self, data: u8) -> Result<(), Self::Error> {
        self.byte(Transfer::Data(data))
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Self::Error> {
        delay.delay_ms(crate::interface::RESET_PULSE_MS);
        self.transfers.push(Transfer::Reset);
        Ok(())
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), Self::Error> {
        self.transfers.push(Transfer::Backlight(on));
        Ok(())
    }
}
