// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Glue shared by the sevenseg firmware binaries.

#![no_std]

use rp2040_hal::gpio::{bank0::Gpio25, FunctionSioOutput, Pin, PullDown};
use rp2040_hal::Timer;
use sevenseg_common::board::Core1;
use sevenseg_common::{IndicatorPeripherals, PulseSignal, Service, ServiceContext};

pub const VERSION: &str = env!("SEVENSEG_VERSION");

/// On-board LED of the Raspberry Pi Pico.
///
/// Not usable on a Pico W, where GP25 is the chip select of the wireless chip
/// and the LED hangs off that chip instead.
pub type StatusLed = Pin<Gpio25, FunctionSioOutput, PullDown>;

pub type StatusPeripherals = IndicatorPeripherals<StatusLed, Timer>;

/// Log the wiring once at startup.
pub fn log_pin_map(serial: &str) {
    defmt::println!("Pins:");
    defmt::println!("  Clock (SRCLK): GP2 [{=str}]", serial);
    defmt::println!("  Data (SER):    GP3 [{=str}]", serial);
    defmt::println!("  Latch (RCLK):  GP6");
    defmt::println!("  Status LED:    GP25");
}

/// Poll an indicator service forever on the calling core.
///
/// Returns only if the LED cannot be brought up; the display loop on the
/// other core is not affected.
pub fn run_indicator<S>(service: S, led: StatusLed, timer: Timer, pulses: &PulseSignal)
where
    S: Service<StatusPeripherals>,
{
    let mut peripherals = IndicatorPeripherals { led, clock: timer };
    if let Err(e) = peripherals.bring_up() {
        defmt::warn!("Indicator: LED bring-up failed: {}", e);
        return;
    }
    let mut ctx = ServiceContext::new(&mut peripherals, pulses);
    loop {
        service.process(&mut ctx);
    }
}

/// Run the indicator on core 1.
///
/// The display never depends on the indicator: if core 1 cannot be started
/// the failure is logged and the caller carries on without it. A failed LED
/// bring-up ends the task on core 1 in the same quiet way.
pub fn start_indicator<S>(
    core1: &mut Core1,
    service: S,
    led: StatusLed,
    timer: Timer,
    pulses: &'static PulseSignal,
) where
    S: Service<StatusPeripherals> + Send + 'static,
{
    match core1.spawn(move || {
        run_indicator(service, led, timer, pulses);
    }) {
        Ok(()) => defmt::println!("Indicator running on core 1"),
        Err(e) => defmt::warn!("Indicator disabled: {}", e),
    }
}

/// Microseconds since boot, low 32 bits, for log timestamps.
pub fn timestamp_us() -> u32 {
    // SAFETY: read-only access to the free-running raw counter register
    let timer = unsafe { &*rp2040_hal::pac::TIMER::ptr() };
    timer.timerawl().read().bits()
}
