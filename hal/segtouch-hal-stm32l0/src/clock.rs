//! System clock bring-up
//!
//! The I2C timing presets assume a 32 MHz peripheral clock, so the core
//! runs from HSI16 through the PLL (x4, /2).

use embassy_stm32::rcc::{Pll, PllDiv, PllMul, PllSource, Sysclk};
use embassy_stm32::{Config, Peripherals};

/// System and APB clock frequency after [`init`]
pub const SYSCLK_HZ: u32 = 32_000_000;

/// Configure the clock tree and take the chip singletons
///
/// Peripheral registers are driven through [`crate::Mmio`]; the returned
/// singletons only mark the peripherals as claimed.
pub fn init() -> Peripherals {
    let mut config = Config::default();
    config.rcc.hsi = true;
    config.rcc.pll = Some(Pll {
        source: PllSource::HSI,
        mul: PllMul::MUL4,
        div: PllDiv::DIV2,
    });
    config.rcc.sys = Sysclk::PLL1_R;
    embassy_stm32::init(config)
}
