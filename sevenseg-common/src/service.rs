// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Cooperative services polled from a superloop.

use crate::pulse::PulseSignal;

/// Shared context passed to all services
pub struct ServiceContext<'a, P> {
    pub peripherals: &'a mut P,
    /// Edge events raised from interrupt context
    pub pulses: &'a PulseSignal,
}

impl<'a, P> ServiceContext<'a, P> {
    pub fn new(peripherals: &'a mut P, pulses: &'a PulseSignal) -> Self {
        Self {
            peripherals,
            pulses,
        }
    }
}

/// Trait for services that run in a polling loop
pub trait Service<P> {
    /// Process this service's logic. Must not block.
    /// Uses interior mutability (Cell/RefCell) for state changes
    fn process(&self, ctx: &mut ServiceContext<P>);
}

/// Poll every service once, in order.
pub fn process_all<P>(services: &[&dyn Service<P>], ctx: &mut ServiceContext<P>) {
    for service in services {
        service.process(ctx);
    }
}
