// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

use core::fmt;

/// A `Result` using this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised while driving the display hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A GPIO write was rejected by the HAL.
    Pin,
    /// An SPI write or flush failed.
    Bus,
    /// Board peripherals were already taken or clocks failed to start.
    Board,
    /// The second core could not be started.
    Core1,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pin => f.write_str("GPIO write failed"),
            Self::Bus => f.write_str("SPI transfer failed"),
            Self::Board => f.write_str("board initialization failed"),
            Self::Core1 => f.write_str("failed to start core 1"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
