// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Peripheral register definitions for the Nuvoton Nano100 series MCU.
//!
//! Nano100 series: <https://www.nuvoton.com/products/microcontrollers/arm-cortex-m0-mcus/>
//!
//! This crate contains only the memory-mapped register layout of the chip:
//! one module per peripheral block, each with its `register_structs!` layout,
//! `register_bitfields!` field definitions, and `StaticRef` base addresses
//! for every hardware instance. Driver logic lives out of tree.
//!
//! The memory map is split across three buses:
//! - AHB (`0x5000_0000`): system controller, clock controller, interrupt
//!   multiplexer, GPIO, DMA, flash controller, external bus interface
//! - APB1 (`0x4000_0000`): WDT, WWDT, RTC, TMR0/1, I2C0, SPI0/2, PWM0,
//!   UART0, USBD, DAC, LCD, ADC
//! - APB2 (`0x4010_0000`): TMR2/3, I2C1, SPI1, PWM1, UART1, SC0-2, I2S

#![no_std]

pub mod adc;
pub mod clk;
pub mod dac;
pub mod ebi;
pub mod fmc;
pub mod gpio;
pub mod i2c;
pub mod i2s;
pub mod int;
pub mod lcd;
pub mod pdma;
pub mod peripheral_interrupts;
pub mod pwm;
pub mod rtc;
pub mod sc;
pub mod spi;
pub mod sys;
pub mod timer;
pub mod uart;
pub mod usbd;
pub mod wdt;
pub mod wwdt;

mod static_ref;
pub use static_ref::StaticRef;
