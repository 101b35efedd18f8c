// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Recording fakes for the embedded-hal traits.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::{self, SpiBus};
use sevenseg_common::Clock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Clock,
    Data,
    Latch,
    Led,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Pin(Line, bool),
    DelayNs(u32),
    SpiWrite(u8),
    SpiFlush,
}

pub type Log = Rc<RefCell<Vec<Event>>>;

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

#[derive(Debug)]
pub struct FakeError;

impl digital::Error for FakeError {
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}

impl spi::Error for FakeError {
    fn kind(&self) -> spi::ErrorKind {
        spi::ErrorKind::Other
    }
}

pub struct FakePin {
    line: Line,
    log: Log,
    pub level: bool,
    /// Number of successful writes before every write fails.
    pub fail_after: Option<usize>,
    writes: usize,
}

impl FakePin {
    pub fn new(line: Line, log: &Log) -> Self {
        Self::with_level(line, log, false)
    }

    pub fn with_level(line: Line, log: &Log, level: bool) -> Self {
        Self {
            line,
            log: Rc::clone(log),
            level,
            fail_after: None,
            writes: 0,
        }
    }

    fn set(&mut self, level: bool) -> Result<(), FakeError> {
        if self.fail_after.is_some_and(|n| self.writes >= n) {
            return Err(FakeError);
        }
        self.writes += 1;
        self.level = level;
        self.log.borrow_mut().push(Event::Pin(self.line, level));
        Ok(())
    }
}

impl digital::ErrorType for FakePin {
    type Error = FakeError;
}

impl OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set(true)
    }
}

pub struct FakeDelay {
    log: Log,
}

impl FakeDelay {
    pub fn new(log: &Log) -> Self {
        Self { log: Rc::clone(log) }
    }
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::DelayNs(ns));
    }
}

pub struct FakeSpi {
    log: Log,
    pub fail_writes: bool,
}

impl FakeSpi {
    pub fn new(log: &Log) -> Self {
        Self {
            log: Rc::clone(log),
            fail_writes: false,
        }
    }
}

impl spi::ErrorType for FakeSpi {
    type Error = FakeError;
}

impl SpiBus<u8> for FakeSpi {
    fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        words.fill(0);
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        if self.fail_writes {
            return Err(FakeError);
        }
        let mut log = self.log.borrow_mut();
        log.extend(words.iter().map(|&w| Event::SpiWrite(w)));
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        self.write(write)?;
        read.fill(0);
        Ok(())
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        self.write(&words.to_vec())?;
        words.fill(0);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::SpiFlush);
        Ok(())
    }
}

/// Clock advanced by hand.
#[derive(Default)]
pub struct ManualClock {
    now_us: Cell<u64>,
}

impl ManualClock {
    pub fn advance(&self, us: u64) {
        self.now_us.set(self.now_us.get() + us);
    }
}

impl Clock for ManualClock {
    fn now_us(&self) -> u64 {
        self.now_us.get()
    }
}

/// Count latch pulses (rising edges on the latch line).
pub fn latch_pulses(log: &Log) -> usize {
    log.borrow()
        .iter()
        .filter(|e| matches!(e, Event::Pin(Line::Latch, true)))
        .count()
}

/// Bytes seen on the data line, sampled on every rising clock edge, MSB first.
pub fn bitbanged_bytes(log: &Log) -> Vec<u8> {
    let mut data = false;
    let mut bits = Vec::new();
    for event in log.borrow().iter() {
        match *event {
            Event::Pin(Line::Data, level) => data = level,
            Event::Pin(Line::Clock, true) => bits.push(data),
            _ => {}
        }
    }
    bits.chunks(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &b| (acc << 1) | b as u8))
        .collect()
}

pub fn spi_bytes(log: &Log) -> Vec<u8> {
    log.borrow()
        .iter()
        .filter_map(|e| match *e {
            Event::SpiWrite(b) => Some(b),
            _ => None,
        })
        .collect()
}
