// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

/// Monotonic microsecond time source used by the indicator services.
pub trait Clock {
    fn now_us(&self) -> u64;
}

#[cfg(feature = "embedded")]
impl Clock for rp2040_hal::Timer {
    fn now_us(&self) -> u64 {
        self.get_counter().ticks()
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_us(&self) -> u64 {
        (**self).now_us()
    }
}
