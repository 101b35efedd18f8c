// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Raspberry Pi Pico bring-up shared by the firmware variants.

use crate::config::{SPI_BAUD_HZ, XTAL_FREQ_HZ};
use crate::{Error, Result};
use rp2040_hal::clocks::init_clocks_and_plls;
use rp2040_hal::fugit::{HertzU32, RateExtU32};
use rp2040_hal::gpio::{
    bank0::{Gpio2, Gpio3},
    FunctionSpi, Pin, Pins, PullNone,
};
use rp2040_hal::multicore::{Multicore, Stack};
use rp2040_hal::sio::{Sio, SioFifo};
use rp2040_hal::spi::{Enabled, Spi};
use rp2040_hal::{pac, watchdog::Watchdog, Clock, Timer};

/// SPI0 with TX on GP3 and SCK on GP2, 8-bit frames.
pub type DisplaySpi = Spi<
    Enabled,
    pac::SPI0,
    (
        Pin<Gpio3, FunctionSpi, PullNone>,
        Pin<Gpio2, FunctionSpi, PullNone>,
    ),
    8,
>;

static CORE1_STACK: Stack<4096> = Stack::new();

/// Peripherals left over after clocks, GPIO bank and timer are set up.
pub struct Board {
    pub timer: Timer,
    pub pins: Pins,
    pub spi0: pac::SPI0,
    pub resets: pac::RESETS,
    pub peripheral_freq: HertzU32,
    pub core1: Core1,
}

/// What it takes to start the second core.
pub struct Core1 {
    psm: pac::PSM,
    ppb: pac::PPB,
    fifo: SioFifo,
}

impl Core1 {
    /// Start `entry` on core 1 with a statically allocated stack.
    ///
    /// Fails if core 1 was already started or does not come up.
    pub fn spawn<F>(&mut self, entry: F) -> Result<()>
    where
        F: FnOnce() + Send + 'static,
    {
        let stack = CORE1_STACK.take().ok_or(Error::Core1)?;
        let mut mc = Multicore::new(&mut self.psm, &mut self.ppb, &mut self.fifo);
        let cores = mc.cores();
        cores[1].spawn(stack, entry).map_err(|_| Error::Core1)
    }
}

/// Take the peripherals and start the clocks from the 12 MHz crystal.
pub fn init_board() -> Result<Board> {
    let mut pac = pac::Peripherals::take().ok_or(Error::Board)?;
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    let clocks = init_clocks_and_plls(
        XTAL_FREQ_HZ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .map_err(|_| Error::Board)?;

    let sio = Sio::new(pac.SIO);
    let pins = Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );
    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

    Ok(Board {
        timer,
        pins,
        spi0: pac.SPI0,
        resets: pac.RESETS,
        peripheral_freq: clocks.peripheral_clock.freq(),
        core1: Core1 {
            psm: pac.PSM,
            ppb: pac.PPB,
            fifo: sio.fifo,
        },
    })
}

/// Configure SPI0 for the shift register chain: 1 MHz, mode 0 (clock idle
/// low, sample on rising edge).
pub fn display_spi(
    spi0: pac::SPI0,
    sck: Pin<Gpio2, FunctionSpi, PullNone>,
    tx: Pin<Gpio3, FunctionSpi, PullNone>,
    resets: &mut pac::RESETS,
    peripheral_freq: HertzU32,
) -> DisplaySpi {
    Spi::<_, _, _, 8>::new(spi0, (tx, sck)).init(
        resets,
        peripheral_freq,
        SPI_BAUD_HZ.Hz(),
        embedded_hal::spi::MODE_0,
    )
}
