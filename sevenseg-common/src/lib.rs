// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Common types and drivers for the sevenseg firmware.
//!
//! This crate supports both `no_std` (embedded) and `std` (host) environments:
//! - Default: `no_std` mode for embedded targets
//! - `std` feature: Enables `std` support (host tests and tools)
//! - `embedded` feature: Enables RP2040 board support (rp2040-hal)

#![cfg_attr(not(feature = "std"), no_std)]

pub mod config;
pub mod counter;
pub mod display;
pub mod error;
pub mod indicator;
pub mod pulse;
pub mod segments;
pub mod service;
pub mod shift;
pub mod time;

// Board bring-up for the Raspberry Pi Pico (requires embedded feature)
#[cfg(feature = "embedded")]
pub mod board;

// Re-export commonly used types
pub use counter::{BcdCounter, Counter, DigitCycle};
pub use display::DisplayDriver;
pub use error::{Error, Result};
pub use indicator::{BlinkService, IndicatorPeripherals, PpsPulseService};
pub use pulse::PulseSignal;
pub use segments::{Segments, DIGIT_MAP};
pub use service::{Service, ServiceContext};
pub use shift::{BitBangShifter, BitOrder, ShiftOut, SpiShifter};
pub use time::Clock;
