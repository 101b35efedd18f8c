// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! 20-digit BCD counter on SPI0, LED blinking on core 1.

#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;

use cortex_m_rt::entry;
use rp2040_hal::gpio::{FunctionSpi, Pin, PinState, PullNone};
use sevenseg_common::config::NUM_BCD_DIGITS;
use sevenseg_common::{
    board, BcdCounter, BitOrder, BlinkService, DisplayDriver, PulseSignal, SpiShifter,
};

defmt::timestamp!("{=u32:us}", sevenseg_fw::timestamp_us());

#[unsafe(link_section = ".boot2")]
#[used]
pub static BOOT2_FIRMWARE: [u8; 256] = rp2040_boot2::BOOT_LOADER_GENERIC_03H;

// Never raised in this variant; the service context still needs one.
static PULSES: PulseSignal = PulseSignal::new();

#[entry]
fn main() -> ! {
    defmt::println!("sevenseg bcd_counter v{=str}", sevenseg_fw::VERSION);

    let mut board = defmt::unwrap!(board::init_board());
    sevenseg_fw::log_pin_map("SPI0");

    let led = board.pins.gpio25.into_push_pull_output();
    sevenseg_fw::start_indicator(
        &mut board.core1,
        BlinkService::new(),
        led,
        board.timer,
        &PULSES,
    );

    let sck: Pin<_, FunctionSpi, PullNone> = board.pins.gpio2.reconfigure();
    let tx: Pin<_, FunctionSpi, PullNone> = board.pins.gpio3.reconfigure();
    let spi = board::display_spi(board.spi0, sck, tx, &mut board.resets, board.peripheral_freq);
    let latch = board.pins.gpio6.into_push_pull_output_in_state(PinState::Low);

    let shifter = defmt::unwrap!(SpiShifter::new(spi, latch, board.timer, BitOrder::MsbFirst));
    let mut display = DisplayDriver::new(shifter, BcdCounter::<NUM_BCD_DIGITS>::new());

    defmt::println!("Display: {} digits, counting", NUM_BCD_DIGITS);
    let mut delay = board.timer;
    display.run(&mut delay)
}
