// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Serial output into a 74HC595 chain.
//!
//! Every frame is shifted completely before a single latch pulse, so the
//! chain updates all digits at once. Clock idles low and the register samples
//! data on the rising edge (SPI mode 0).

use crate::{config::LATCH_HOLD_US, Error, Result};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

/// Order in which the bits of a byte leave the MCU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    /// Bit 7 first, so it ends up on Q_H.
    MsbFirst,
    /// Bit 0 first, so it ends up on Q_H.
    LsbFirst,
}

impl BitOrder {
    /// Byte as an MSB-first shifter has to send it.
    fn as_msb_first(self, byte: u8) -> u8 {
        match self {
            Self::MsbFirst => byte,
            Self::LsbFirst => byte.reverse_bits(),
        }
    }
}

/// A shift register chain with a latch.
pub trait ShiftOut {
    /// Shift one byte into the chain without touching the outputs.
    fn shift(&mut self, byte: u8) -> Result<()>;

    /// Pulse the latch, copying the shifted bits to the outputs.
    fn latch(&mut self) -> Result<()>;

    /// Shift a whole frame, then latch once.
    ///
    /// The first byte ends up in the register farthest from the MCU. If a
    /// byte fails to shift, the latch is skipped and the outputs keep the
    /// previous frame.
    fn write_frame<I>(&mut self, frame: I) -> Result<()>
    where
        I: IntoIterator<Item = u8>,
    {
        for byte in frame {
            self.shift(byte)?;
        }
        self.latch()
    }
}

fn pulse_latch(latch: &mut impl OutputPin, delay: &mut impl DelayNs) -> Result<()> {
    latch.set_high().map_err(|_| Error::Pin)?;
    delay.delay_us(LATCH_HOLD_US);
    latch.set_low().map_err(|_| Error::Pin)
}

/// Bit-banged clock/data/latch on three GPIOs.
pub struct BitBangShifter<CLK, DATA, LATCH, D> {
    clock: CLK,
    data: DATA,
    latch: LATCH,
    delay: D,
    order: BitOrder,
}

impl<CLK, DATA, LATCH, D> BitBangShifter<CLK, DATA, LATCH, D>
where
    CLK: OutputPin,
    DATA: OutputPin,
    LATCH: OutputPin,
    D: DelayNs,
{
    /// Take ownership of the pins and drive clock and latch to idle (low).
    pub fn new(
        mut clock: CLK,
        data: DATA,
        mut latch: LATCH,
        delay: D,
        order: BitOrder,
    ) -> Result<Self> {
        clock.set_low().map_err(|_| Error::Pin)?;
        latch.set_low().map_err(|_| Error::Pin)?;
        Ok(Self {
            clock,
            data,
            latch,
            delay,
            order,
        })
    }

    pub fn release(self) -> (CLK, DATA, LATCH, D) {
        (self.clock, self.data, self.latch, self.delay)
    }
}

impl<CLK, DATA, LATCH, D> ShiftOut for BitBangShifter<CLK, DATA, LATCH, D>
where
    CLK: OutputPin,
    DATA: OutputPin,
    LATCH: OutputPin,
    D: DelayNs,
{
    fn shift(&mut self, byte: u8) -> Result<()> {
        let bits = self.order.as_msb_first(byte);
        for i in (0..8).rev() {
            let level = bits & (1 << i) != 0;
            self.data.set_state(level.into()).map_err(|_| Error::Pin)?;
            self.clock.set_high().map_err(|_| Error::Pin)?;
            self.clock.set_low().map_err(|_| Error::Pin)?;
        }
        Ok(())
    }

    fn latch(&mut self) -> Result<()> {
        pulse_latch(&mut self.latch, &mut self.delay)
    }
}

/// Hardware SPI for clock/data plus a GPIO latch.
///
/// The bus must already be set up for 8-bit mode 0 transfers. The RP2040 SPI
/// block only shifts MSB first, so [`BitOrder::LsbFirst`] is handled by
/// reversing the byte before it is written.
pub struct SpiShifter<SPI, LATCH, D> {
    spi: SPI,
    latch: LATCH,
    delay: D,
    order: BitOrder,
}

impl<SPI, LATCH, D> SpiShifter<SPI, LATCH, D>
where
    SPI: SpiBus<u8>,
    LATCH: OutputPin,
    D: DelayNs,
{
    pub fn new(spi: SPI, mut latch: LATCH, delay: D, order: BitOrder) -> Result<Self> {
        latch.set_low().map_err(|_| Error::Pin)?;
        Ok(Self {
            spi,
            latch,
            delay,
            order,
        })
    }

    pub fn release(self) -> (SPI, LATCH, D) {
        (self.spi, self.latch, self.delay)
    }
}

impl<SPI, LATCH, D> ShiftOut for SpiShifter<SPI, LATCH, D>
where
    SPI: SpiBus<u8>,
    LATCH: OutputPin,
    D: DelayNs,
{
    fn shift(&mut self, byte: u8) -> Result<()> {
        let word = [self.order.as_msb_first(byte)];
        self.spi.write(&word).map_err(|_| Error::Bus)
    }

    fn latch(&mut self) -> Result<()> {
        // The last byte may still sit in the TX FIFO.
        self.spi.flush().map_err(|_| Error::Bus)?;
        pulse_latch(&mut self.latch, &mut self.delay)
    }
}
