// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Digit to segment mapping for the 74HC595 wiring.
//!
//! Q_A (bit 0) is unused, Q_H' chains into the next digit. Q_H is the MSB,
//! i.e. the first bit shifted in when sending MSB first.
//!
//! ```text
//!    aaaa
//!   f    b        shift register => segment
//!   f    b        QB/1 => b   QF/5 => d
//!    gggg         QC/2 => a   QG/6 => e
//!   e    c        QD/3 => f   QH/7 => g
//!   e    c        QE/4 => c
//!    dddd
//!
//!   7 6 5 4 3 2 1 0
//!   g e d c f a b _
//! ```

/// Lit-segment pattern for one digit, using the bit positions below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Segments(pub u8);

impl Segments {
    /// Segment A (top horizontal)
    pub const A: u8 = 0b0000_0100;
    /// Segment B (top right vertical)
    pub const B: u8 = 0b0000_0010;
    /// Segment C (bottom right vertical)
    pub const C: u8 = 0b0001_0000;
    /// Segment D (bottom horizontal)
    pub const D: u8 = 0b0010_0000;
    /// Segment E (bottom left vertical)
    pub const E: u8 = 0b0100_0000;
    /// Segment F (top left vertical)
    pub const F: u8 = 0b0000_1000;
    /// Segment G (middle horizontal)
    pub const G: u8 = 0b1000_0000;

    /// All segments dark.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Pattern for a decimal digit, `None` outside 0..=9.
    pub const fn from_digit(digit: u8) -> Option<Self> {
        if digit as usize >= DIGIT_MAP.len() {
            return None;
        }
        Some(Self(DIGIT_MAP[digit as usize]))
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check if the given segment is lit.
    pub const fn contains(self, segment: u8) -> bool {
        (self.0 & segment) != 0
    }
}

impl core::ops::BitOr for Segments {
    type Output = Segments;
    fn bitor(self, rhs: Segments) -> Self::Output {
        Segments(self.0 | rhs.0)
    }
}

impl core::ops::BitOr<u8> for Segments {
    type Output = Segments;
    fn bitor(self, rhs: u8) -> Self::Output {
        Segments(self.0 | rhs)
    }
}

const A: u8 = Segments::A;
const B: u8 = Segments::B;
const C: u8 = Segments::C;
const D: u8 = Segments::D;
const E: u8 = Segments::E;
const F: u8 = Segments::F;
const G: u8 = Segments::G;

/// Segment pattern for each decimal digit (common cathode, lit = 1).
pub const DIGIT_MAP: [u8; 10] = [
    A | B | C | D | E | F,     // 0
    B | C,                     // 1
    A | B | D | E | G,         // 2
    A | B | C | D | G,         // 3
    B | C | F | G,             // 4
    A | C | D | F | G,         // 5
    A | C | D | E | F | G,     // 6
    A | B | C | F,             // 7, the board uses the serif form
    A | B | C | D | E | F | G, // 8
    A | B | C | D | F | G,     // 9
];

/// Pattern for a digit the caller already guarantees to be in 0..=9.
///
/// Out-of-range input renders blank instead of panicking.
pub fn encode(digit: u8) -> u8 {
    DIGIT_MAP.get(digit as usize).copied().unwrap_or(0)
}
