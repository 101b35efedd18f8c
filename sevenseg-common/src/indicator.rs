// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Status LED services.

use crate::config::{BLINK_HALF_PERIOD_US, PPS_OFF_US};
use crate::service::{Service, ServiceContext};
use crate::time::Clock;
use crate::{Error, Result};
use core::cell::Cell;
use embedded_hal::digital::OutputPin;

/// Hardware owned by the indicator task.
pub struct IndicatorPeripherals<L, C> {
    pub led: L,
    pub clock: C,
}

impl<L: OutputPin, C> IndicatorPeripherals<L, C> {
    /// Light the LED before the first poll.
    ///
    /// This is the one step of the indicator that can fail. On error the
    /// indicator task is expected to give up without touching the display.
    pub fn bring_up(&mut self) -> Result<()> {
        self.led.set_high().map_err(|_| Error::Pin)
    }
}

/// LED state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkState {
    /// Not yet driven.
    Idle,
    On { since_us: u64 },
    Off { since_us: u64 },
}

/// Service that blinks the LED with equal on and off times
pub struct BlinkService {
    state: Cell<BlinkState>,
    half_period_us: u64,
}

impl BlinkService {
    pub fn new() -> Self {
        Self::with_half_period(BLINK_HALF_PERIOD_US)
    }

    pub fn with_half_period(half_period_us: u64) -> Self {
        Self {
            state: Cell::new(BlinkState::Idle),
            half_period_us,
        }
    }

    pub fn state(&self) -> BlinkState {
        self.state.get()
    }
}

impl Default for BlinkService {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, C> Service<IndicatorPeripherals<L, C>> for BlinkService
where
    L: OutputPin,
    C: Clock,
{
    fn process(&self, ctx: &mut ServiceContext<IndicatorPeripherals<L, C>>) {
        let now = ctx.peripherals.clock.now_us();

        match self.state.get() {
            BlinkState::Idle => {
                ctx.peripherals.led.set_high().ok();
                self.state.set(BlinkState::On { since_us: now });
            }
            BlinkState::On { since_us } => {
                if now.wrapping_sub(since_us) >= self.half_period_us {
                    ctx.peripherals.led.set_low().ok();
                    self.state.set(BlinkState::Off { since_us: now });
                }
            }
            BlinkState::Off { since_us } => {
                if now.wrapping_sub(since_us) >= self.half_period_us {
                    ctx.peripherals.led.set_high().ok();
                    self.state.set(BlinkState::On { since_us: now });
                }
            }
        }
    }
}

/// PPS indicator state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PulseState {
    On,
    OffPulse { since_us: u64 },
}

/// Normally-lit LED that goes dark briefly for every PPS edge.
///
/// The LED is expected to start lit. Edges that arrive while the LED is dark
/// are drained, so a burst yields one pulse and nothing is replayed later.
pub struct PpsPulseService {
    state: Cell<PulseState>,
    off_us: u64,
}

impl PpsPulseService {
    pub fn new() -> Self {
        Self::with_off_time(PPS_OFF_US)
    }

    pub fn with_off_time(off_us: u64) -> Self {
        Self {
            state: Cell::new(PulseState::On),
            off_us,
        }
    }

    pub fn state(&self) -> PulseState {
        self.state.get()
    }
}

impl Default for PpsPulseService {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, C> Service<IndicatorPeripherals<L, C>> for PpsPulseService
where
    L: OutputPin,
    C: Clock,
{
    fn process(&self, ctx: &mut ServiceContext<IndicatorPeripherals<L, C>>) {
        match self.state.get() {
            PulseState::On => {
                if ctx.pulses.take() {
                    let now = ctx.peripherals.clock.now_us();
                    ctx.peripherals.led.set_low().ok();
                    self.state.set(PulseState::OffPulse { since_us: now });
                    #[cfg(feature = "defmt")]
                    defmt::trace!("PPS: edge at {=u64} us", now);
                }
            }
            PulseState::OffPulse { since_us } => {
                if ctx.pulses.take() {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("PPS: edge during pulse, coalesced");
                }
                let now = ctx.peripherals.clock.now_us();
                if now.wrapping_sub(since_us) >= self.off_us {
                    ctx.peripherals.led.set_high().ok();
                    self.state.set(PulseState::On);
                }
            }
        }
    }
}
