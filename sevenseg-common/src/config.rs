// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Compile-time configuration shared by all firmware variants.
//!
//! Pin assignments (Raspberry Pi Pico):
//!
//! | Signal        | Pin  |
//! |---------------|------|
//! | Clock (SRCLK) | GP2  |
//! | Data (SER)    | GP3  |
//! | Latch (RCLK)  | GP6  |
//! | PPS input     | GP7  |
//! | Status LED    | GP25 |

/// Number of daisy-chained digits driven by the BCD counter variants.
pub const NUM_BCD_DIGITS: usize = 20;

/// External crystal frequency of the Pico board.
pub const XTAL_FREQ_HZ: u32 = 12_000_000;

/// SPI0 bit rate towards the shift register chain.
pub const SPI_BAUD_HZ: u32 = 1_000_000;

/// Latch high time. The 74HC595 needs far less; 1us keeps margin on long chains.
pub const LATCH_HOLD_US: u32 = 1;

/// Pause between two display refreshes in the main loop.
pub const REFRESH_INTERVAL_MS: u32 = 1;

/// On time and off time of the fixed-interval blink.
pub const BLINK_HALF_PERIOD_US: u64 = 500_000;

/// How long the PPS indicator stays dark after an edge.
pub const PPS_OFF_US: u64 = 100_000;

/// Number of display steps between two heartbeat log lines.
pub const HEARTBEAT_STEPS: u32 = 1_000;

/// Pause between two digits of the single-digit cycle.
pub const DIGIT_CYCLE_INTERVAL_MS: u32 = 1_000;
