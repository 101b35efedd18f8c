// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Unit tests for the bit-banged and SPI shift register outputs.

mod common;

use common::{
    bitbanged_bytes, latch_pulses, new_log, spi_bytes, Event, FakeDelay, FakePin, FakeSpi, Line,
    Log,
};
use sevenseg_common::{BitBangShifter, BitOrder, Error, ShiftOut, SpiShifter};

fn bitbang(log: &Log, order: BitOrder) -> BitBangShifter<FakePin, FakePin, FakePin, FakeDelay> {
    BitBangShifter::new(
        FakePin::new(Line::Clock, log),
        FakePin::new(Line::Data, log),
        FakePin::new(Line::Latch, log),
        FakeDelay::new(log),
        order,
    )
    .unwrap()
}

fn spi(log: &Log, order: BitOrder) -> SpiShifter<FakeSpi, FakePin, FakeDelay> {
    SpiShifter::new(
        FakeSpi::new(log),
        FakePin::new(Line::Latch, log),
        FakeDelay::new(log),
        order,
    )
    .unwrap()
}

#[test]
fn test_bitbang_msb_first() {
    let log = new_log();
    let mut shifter = bitbang(&log, BitOrder::MsbFirst);

    shifter.shift(0b1011_0010).unwrap();

    assert_eq!(bitbanged_bytes(&log), [0b1011_0010]);
}

#[test]
fn test_bitbang_lsb_first() {
    let log = new_log();
    let mut shifter = bitbang(&log, BitOrder::LsbFirst);

    shifter.shift(0b1011_0010).unwrap();

    // first bit on the wire is bit 0
    assert_eq!(bitbanged_bytes(&log), [0b0100_1101]);
}

#[test]
fn test_bitbang_clock_idles_low() {
    let log = new_log();
    let mut shifter = bitbang(&log, BitOrder::MsbFirst);
    shifter.write_frame([0xFF, 0x00]).unwrap();

    let (clock, _, latch, _) = shifter.release();
    assert!(!clock.level);
    assert!(!latch.level);
}

#[test]
fn test_frame_latches_once_for_any_chain_length() {
    for len in [1usize, 2, 8, 20] {
        let log = new_log();
        let mut shifter = bitbang(&log, BitOrder::MsbFirst);
        let frame: Vec<u8> = (0..len as u8).collect();

        shifter.write_frame(frame.iter().copied()).unwrap();

        assert_eq!(latch_pulses(&log), 1, "chain of {len}");
        assert_eq!(bitbanged_bytes(&log), frame);
    }
}

#[test]
fn test_latch_comes_after_last_bit() {
    let log = new_log();
    let mut shifter = bitbang(&log, BitOrder::MsbFirst);
    shifter.write_frame([0x12, 0x34]).unwrap();

    let events = log.borrow();
    let latch_at = events
        .iter()
        .position(|e| *e == Event::Pin(Line::Latch, true))
        .unwrap();
    let last_clock = events
        .iter()
        .rposition(|e| *e == Event::Pin(Line::Clock, true))
        .unwrap();
    assert!(latch_at > last_clock);
}

#[test]
fn test_latch_is_held_high() {
    let log = new_log();
    let mut shifter = spi(&log, BitOrder::MsbFirst);
    shifter.latch().unwrap();

    let events = log.borrow();
    let high = events
        .iter()
        .position(|e| *e == Event::Pin(Line::Latch, true))
        .unwrap();
    let low = high
        + events[high..]
            .iter()
            .position(|e| *e == Event::Pin(Line::Latch, false))
            .unwrap();
    let held_ns: u32 = events[high..low]
        .iter()
        .map(|e| match *e {
            Event::DelayNs(ns) => ns,
            _ => 0,
        })
        .sum();
    assert!(held_ns >= 1_000, "latch held {held_ns} ns");
}

#[test]
fn test_spi_writes_frame_then_flushes_before_latch() {
    let log = new_log();
    let mut shifter = spi(&log, BitOrder::MsbFirst);

    shifter.write_frame([0x7E, 0x12, 0xE6]).unwrap();

    assert_eq!(spi_bytes(&log), [0x7E, 0x12, 0xE6]);
    assert_eq!(latch_pulses(&log), 1);

    let events = log.borrow();
    let flush = events.iter().position(|e| *e == Event::SpiFlush).unwrap();
    let latch = events
        .iter()
        .position(|e| *e == Event::Pin(Line::Latch, true))
        .unwrap();
    assert!(flush < latch);
}

#[test]
fn test_spi_lsb_first_reverses_bits() {
    let log = new_log();
    let mut shifter = spi(&log, BitOrder::LsbFirst);

    shifter.shift(0b0000_0001).unwrap();
    shifter.shift(0b1110_0110).unwrap();

    assert_eq!(spi_bytes(&log), [0b1000_0000, 0b0110_0111]);
}

#[test]
fn test_failed_shift_skips_latch() {
    let log = new_log();
    let mut bus = FakeSpi::new(&log);
    bus.fail_writes = true;
    let mut shifter = SpiShifter::new(
        bus,
        FakePin::new(Line::Latch, &log),
        FakeDelay::new(&log),
        BitOrder::MsbFirst,
    )
    .unwrap();

    assert_eq!(shifter.write_frame([1, 2, 3]), Err(Error::Bus));
    assert_eq!(latch_pulses(&log), 0);
}

#[test]
fn test_pin_failure_maps_to_pin_error() {
    let log = new_log();
    let mut data = FakePin::new(Line::Data, &log);
    data.fail_after = Some(3);
    let mut shifter = BitBangShifter::new(
        FakePin::new(Line::Clock, &log),
        data,
        FakePin::new(Line::Latch, &log),
        FakeDelay::new(&log),
        BitOrder::MsbFirst,
    )
    .unwrap();

    assert_eq!(shifter.write_frame([0xAA]), Err(Error::Pin));
    assert_eq!(latch_pulses(&log), 0);
}
