// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Single-slot event flag between an interrupt handler and a polling task.

use core::cell::Cell;
use critical_section::Mutex;

/// Capacity-one, overwrite-on-full signal.
///
/// [`signal`](Self::signal) never blocks; raising it again before the
/// consumer calls [`take`](Self::take) is a no-op, so bursts coalesce into a
/// single pending event. Access goes through a critical section, which the
/// RP2040 HAL implements with a hardware spinlock shared by both cores.
pub struct PulseSignal {
    pending: Mutex<Cell<bool>>,
}

impl PulseSignal {
    pub const fn new() -> Self {
        Self {
            pending: Mutex::new(Cell::new(false)),
        }
    }

    /// Mark an event as pending. Safe to call from interrupt context.
    pub fn signal(&self) {
        critical_section::with(|cs| self.pending.borrow(cs).set(true));
    }

    /// Consume the pending event, if any.
    pub fn take(&self) -> bool {
        critical_section::with(|cs| self.pending.borrow(cs).replace(false))
    }

    /// Check for a pending event without consuming it.
    pub fn is_pending(&self) -> bool {
        critical_section::with(|cs| self.pending.borrow(cs).get())
    }
}

impl Default for PulseSignal {
    fn default() -> Self {
        Self::new()
    }
}
