// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Single digit stepping 0..9 over bit-banged GPIO, LED blinking on core 1.

#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;

use cortex_m_rt::entry;
use rp2040_hal::gpio::PinState;
use sevenseg_common::config::DIGIT_CYCLE_INTERVAL_MS;
use sevenseg_common::{
    board, BitBangShifter, BitOrder, BlinkService, DigitCycle, DisplayDriver, PulseSignal,
};

defmt::timestamp!("{=u32:us}", sevenseg_fw::timestamp_us());

#[unsafe(link_section = ".boot2")]
#[used]
pub static BOOT2_FIRMWARE: [u8; 256] = rp2040_boot2::BOOT_LOADER_GENERIC_03H;

static PULSES: PulseSignal = PulseSignal::new();

#[entry]
fn main() -> ! {
    defmt::println!("sevenseg digit_cycle v{=str}", sevenseg_fw::VERSION);

    let mut board = defmt::unwrap!(board::init_board());
    sevenseg_fw::log_pin_map("GPIO");

    let led = board.pins.gpio25.into_push_pull_output();
    sevenseg_fw::start_indicator(
        &mut board.core1,
        BlinkService::new(),
        led,
        board.timer,
        &PULSES,
    );

    let clock = board.pins.gpio2.into_push_pull_output_in_state(PinState::Low);
    let data = board.pins.gpio3.into_push_pull_output_in_state(PinState::Low);
    let latch = board.pins.gpio6.into_push_pull_output_in_state(PinState::Low);

    let shifter = defmt::unwrap!(BitBangShifter::new(
        clock,
        data,
        latch,
        board.timer,
        BitOrder::MsbFirst,
    ));
    let mut display =
        DisplayDriver::new(shifter, DigitCycle::new()).with_interval_ms(DIGIT_CYCLE_INTERVAL_MS);

    let mut delay = board.timer;
    display.run(&mut delay)
}
