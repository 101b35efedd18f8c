// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Counter state shown on the display.

/// A value that can be rendered digit by digit and advanced by one.
pub trait Counter {
    /// Decimal digits, least-significant first, each in 0..=9.
    fn digits(&self) -> &[u8];

    /// Advance the value by one unit.
    fn increment(&mut self);
}

/// Fixed-width BCD counter, one decimal digit per element.
///
/// Index 0 holds the least-significant digit. Incrementing past
/// `10^N - 1` wraps to zero without reporting overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BcdCounter<const N: usize> {
    digits: [u8; N],
}

impl<const N: usize> BcdCounter<N> {
    pub const fn new() -> Self {
        Self { digits: [0; N] }
    }

    /// Counter holding `value` modulo `10^N`.
    pub fn from_value(mut value: u64) -> Self {
        let mut counter = Self::new();
        for digit in counter.digits.iter_mut() {
            if value == 0 {
                break;
            }
            *digit = (value % 10) as u8;
            value /= 10;
        }
        counter
    }

    /// Counter from explicit digits, least-significant first.
    ///
    /// Returns `None` if any digit is above 9.
    pub fn from_digits(digits: [u8; N]) -> Option<Self> {
        if digits.iter().any(|&d| d > 9) {
            return None;
        }
        Some(Self { digits })
    }

    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }
}

impl<const N: usize> Default for BcdCounter<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Counter for BcdCounter<N> {
    fn digits(&self) -> &[u8] {
        &self.digits
    }

    fn increment(&mut self) {
        for digit in self.digits.iter_mut() {
            if *digit < 9 {
                *digit += 1;
                return;
            }
            // carry into the next digit; falling off the end wraps to zero
            *digit = 0;
        }
    }
}

/// Single digit stepping through the segment table, 9 wraps to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigitCycle {
    digit: [u8; 1],
}

impl DigitCycle {
    pub const fn new() -> Self {
        Self { digit: [0] }
    }

    pub fn digit(&self) -> u8 {
        self.digit[0]
    }
}

impl Counter for DigitCycle {
    fn digits(&self) -> &[u8] {
        &self.digit
    }

    fn increment(&mut self) {
        self.digit[0] = (self.digit[0] + 1) % 10;
    }
}
