// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Main display loop: push the counter, advance it, wait.

use crate::config::REFRESH_INTERVAL_MS;
use crate::counter::Counter;
use crate::segments;
use crate::shift::ShiftOut;
use crate::Result;
use embedded_hal::delay::DelayNs;

/// Owns the shift register chain and the counter it displays.
pub struct DisplayDriver<S, C> {
    shifter: S,
    counter: C,
    steps: u32,
    interval_ms: u32,
}

impl<S: ShiftOut, C: Counter> DisplayDriver<S, C> {
    pub fn new(shifter: S, counter: C) -> Self {
        Self {
            shifter,
            counter,
            steps: 0,
            interval_ms: REFRESH_INTERVAL_MS,
        }
    }

    /// Override the pause between two steps.
    pub fn with_interval_ms(mut self, interval_ms: u32) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    pub fn counter(&self) -> &C {
        &self.counter
    }

    pub fn shifter(&self) -> &S {
        &self.shifter
    }

    /// Number of steps taken so far (wraps).
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Send the current value as one latched frame.
    ///
    /// The most significant digit is shifted first so that digit 0 lands in
    /// the register closest to the MCU.
    pub fn refresh(&mut self) -> Result<()> {
        let frame = self.counter.digits().iter().rev().map(|&d| segments::encode(d));
        self.shifter.write_frame(frame)
    }

    /// Refresh, then advance the counter. The counter advances even when the
    /// refresh failed.
    pub fn step(&mut self) -> Result<()> {
        let result = self.refresh();
        self.counter.increment();
        self.steps = self.steps.wrapping_add(1);
        result
    }

    /// One pass of the main loop: step, then pause for the interval.
    ///
    /// A failed refresh is logged and otherwise ignored.
    pub fn tick(&mut self, delay: &mut impl DelayNs) {
        if let Err(_e) = self.step() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Display: refresh failed: {}", _e);
        }

        #[cfg(feature = "defmt")]
        if self.steps % crate::config::HEARTBEAT_STEPS == 0 {
            defmt::debug!("Display: {} steps", self.steps);
        }

        delay.delay_ms(self.interval_ms);
    }

    /// Drive the display forever.
    pub fn run(&mut self, delay: &mut impl DelayNs) -> ! {
        loop {
            self.tick(delay);
        }
    }
}
