// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! 20-digit BCD counter on SPI0. The LED on core 1 stays lit and goes dark
//! briefly on every rising edge of the PPS input (GP7).

#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;

use core::cell::RefCell;
use cortex_m_rt::entry;
use critical_section::Mutex;
use rp2040_hal::gpio::{
    bank0::Gpio7, FunctionSioInput, FunctionSpi, Interrupt, Pin, PinState, PullDown, PullNone,
};
use rp2040_hal::pac::{self, interrupt};
use sevenseg_common::config::NUM_BCD_DIGITS;
use sevenseg_common::{
    board, BcdCounter, BitOrder, DisplayDriver, PpsPulseService, PulseSignal, SpiShifter,
};

defmt::timestamp!("{=u32:us}", sevenseg_fw::timestamp_us());

#[unsafe(link_section = ".boot2")]
#[used]
pub static BOOT2_FIRMWARE: [u8; 256] = rp2040_boot2::BOOT_LOADER_GENERIC_03H;

type PpsPin = Pin<Gpio7, FunctionSioInput, PullDown>;

/// Owned by the IO_IRQ_BANK0 handler once interrupts are unmasked.
static PPS_PIN: Mutex<RefCell<Option<PpsPin>>> = Mutex::new(RefCell::new(None));

/// Raised by the edge interrupt on core 0, consumed by the indicator on core 1.
static PULSES: PulseSignal = PulseSignal::new();

#[entry]
fn main() -> ! {
    defmt::println!("sevenseg pps_counter v{=str}", sevenseg_fw::VERSION);

    let mut board = defmt::unwrap!(board::init_board());
    sevenseg_fw::log_pin_map("SPI0");
    defmt::println!("  PPS input:     GP7 (rising edge)");

    // normally lit
    let led = board.pins.gpio25.into_push_pull_output_in_state(PinState::High);
    sevenseg_fw::start_indicator(
        &mut board.core1,
        PpsPulseService::new(),
        led,
        board.timer,
        &PULSES,
    );

    let pps: PpsPin = board.pins.gpio7.into_pull_down_input();
    pps.set_interrupt_enabled(Interrupt::EdgeHigh, true);
    critical_section::with(|cs| {
        PPS_PIN.borrow(cs).replace(Some(pps));
    });
    // SAFETY: the handler only touches PPS_PIN and PULSES, both behind critical sections
    unsafe {
        cortex_m::peripheral::NVIC::unmask(pac::Interrupt::IO_IRQ_BANK0);
    }

    let sck: Pin<_, FunctionSpi, PullNone> = board.pins.gpio2.reconfigure();
    let tx: Pin<_, FunctionSpi, PullNone> = board.pins.gpio3.reconfigure();
    let spi = board::display_spi(board.spi0, sck, tx, &mut board.resets, board.peripheral_freq);
    let latch = board.pins.gpio6.into_push_pull_output_in_state(PinState::Low);

    let shifter = defmt::unwrap!(SpiShifter::new(spi, latch, board.timer, BitOrder::MsbFirst));
    let mut display = DisplayDriver::new(shifter, BcdCounter::<NUM_BCD_DIGITS>::new());

    let mut delay = board.timer;
    display.run(&mut delay)
}

#[interrupt]
fn IO_IRQ_BANK0() {
    let edge = critical_section::with(|cs| {
        let mut pin = PPS_PIN.borrow(cs).borrow_mut();
        match pin.as_mut() {
            Some(pin) if pin.interrupt_status(Interrupt::EdgeHigh) => {
                pin.clear_interrupt(Interrupt::EdgeHigh);
                true
            }
            _ => false,
        }
    });

    if edge {
        PULSES.signal();
    }
}
