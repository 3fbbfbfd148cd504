// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Named constants for the Nano100 NVIC interrupt lines.
//!
//! The Nano100 series routes 32 peripheral interrupt sources to the
//! Cortex-M0 NVIC. The per-line request status is mirrored in the
//! interrupt multiplexer block (see [`crate::int`]).

pub const BOD: u32 = 0;
/// Shared by WDT and WWDT; `WDT_ISR`/`WWDT_STS` disambiguate.
pub const WDT: u32 = 1;
pub const EINT0: u32 = 2;
pub const EINT1: u32 = 3;
/// GPIO ports A, B and C.
pub const GPABC: u32 = 4;
/// GPIO ports D, E and F.
pub const GPDEF: u32 = 5;
pub const PWM0: u32 = 6;
pub const PWM1: u32 = 7;
pub const TMR0: u32 = 8;
pub const TMR1: u32 = 9;
pub const TMR2: u32 = 10;
pub const TMR3: u32 = 11;
pub const UART0: u32 = 12;
pub const UART1: u32 = 13;
pub const SPI0: u32 = 14;
pub const SPI1: u32 = 15;
pub const SPI2: u32 = 16;
pub const HIRC: u32 = 17;
pub const I2C0: u32 = 18;
pub const I2C1: u32 = 19;
pub const SC0: u32 = 20;
pub const SC1: u32 = 21;
pub const SC2: u32 = 22;
pub const USBD: u32 = 23;
/// Touch key controller (not present on all part numbers).
pub const TK: u32 = 24;
pub const LCD: u32 = 25;
pub const PDMA: u32 = 26;
pub const I2S: u32 = 27;
/// Power-down wake-up.
pub const PDWU: u32 = 28;
pub const ADC: u32 = 29;
pub const DAC: u32 = 30;
pub const RTC: u32 = 31;

/// Number of external interrupt lines on the Nano100 NVIC.
pub const NUM_IRQS: usize = 32;
