// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! General-purpose I/O.
//!
//! Six 16-pin ports (A-F, port F exposes 6 pins) at a 0x40 stride, a shared
//! debounce clock control register, and the bit-addressable pin-data region
//! that aliases single pins of `DOUT`/`PIN` onto whole words.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

register_structs! {
    pub GpioRegisters {
        /// Pin mode control, 2 bits per pin
        (0x00 => pub pmd: ReadWrite<u32, PMD::Register>),
        /// Digital input path disable, one bit per pin in [31:16]
        (0x04 => pub offd: ReadWrite<u32, OFFD::Register>),
        /// Data output value
        (0x08 => pub dout: ReadWrite<u32, PINS::Register>),
        /// Write mask for DOUT, 1 = masked (bit unchanged by writes)
        (0x0C => pub dmask: ReadWrite<u32, PINS::Register>),
        /// Pin input value
        (0x10 => pub pin: ReadOnly<u32, PINS::Register>),
        /// Debounce enable per pin
        (0x14 => pub dben: ReadWrite<u32, PINS::Register>),
        /// Interrupt mode: edge or level, per pin
        (0x18 => pub imd: ReadWrite<u32, IMD::Register>),
        /// Interrupt enable, split falling/low and rising/high halves
        (0x1C => pub ier: ReadWrite<u32, IER::Register>),
        /// Interrupt trigger source flags, write 1 to clear
        (0x20 => pub isr: ReadWrite<u32, PINS::Register>),
        /// Pull-up resistor enable per pin
        (0x24 => pub puen: ReadWrite<u32, PINS::Register>),
        (0x28 => _reserved0),
        (0x40 => @END),
    },

    pub GpioDebounceRegisters {
        /// Debounce sampling clock control, shared by all ports
        (0x00 => pub dbncecon: ReadWrite<u32, DBNCECON::Register>),
        (0x04 => @END),
    },

    pub GpioPinDataRegisters {
        /// One word per pin: bit 0 aliases DOUT/PIN for that pin.
        /// Ordered PA.0-PA.15, PB.0-PB.15, ... PF.0-PF.15.
        (0x000 => pub pdio: [ReadWrite<u32>; 96]),
        (0x180 => @END),
    }
}

register_bitfields![u32,
    pub PMD [
        PMD0 OFFSET(0) NUMBITS(2) [
            Input = 0,
            Output = 1,
            OpenDrain = 2
        ],
        PMD1 OFFSET(2) NUMBITS(2) [],
        PMD2 OFFSET(4) NUMBITS(2) [],
        PMD3 OFFSET(6) NUMBITS(2) [],
        PMD4 OFFSET(8) NUMBITS(2) [],
        PMD5 OFFSET(10) NUMBITS(2) [],
        PMD6 OFFSET(12) NUMBITS(2) [],
        PMD7 OFFSET(14) NUMBITS(2) [],
        PMD8 OFFSET(16) NUMBITS(2) [],
        PMD9 OFFSET(18) NUMBITS(2) [],
        PMD10 OFFSET(20) NUMBITS(2) [],
        PMD11 OFFSET(22) NUMBITS(2) [],
        PMD12 OFFSET(24) NUMBITS(2) [],
        PMD13 OFFSET(26) NUMBITS(2) [],
        PMD14 OFFSET(28) NUMBITS(2) [],
        PMD15 OFFSET(30) NUMBITS(2) []
    ],
    pub OFFD [
        /// One bit per pin; a set bit powers off the input Schmitt trigger
        OFFD OFFSET(16) NUMBITS(16) []
    ],
    /// Plain one-bit-per-pin registers (DOUT, PIN, DMASK, DBEN, ISR, PUEN)
    pub PINS [
        PINS OFFSET(0) NUMBITS(16) []
    ],
    pub IMD [
        /// 0 = edge triggered, 1 = level triggered, per pin
        IMD OFFSET(0) NUMBITS(16) []
    ],
    pub IER [
        /// Falling-edge / low-level enable, per pin
        FALLING OFFSET(0) NUMBITS(16) [],
        /// Rising-edge / high-level enable, per pin
        RISING OFFSET(16) NUMBITS(16) []
    ],
    pub DBNCECON [
        /// Debounce sample cycle = 2^DBCLKSEL clocks
        DBCLKSEL OFFSET(0) NUMBITS(4) [],
        /// Debounce counter clock source
        DBCLKSRC OFFSET(4) NUMBITS(1) [
            Hclk = 0,
            Lirc = 1
        ],
        /// Keep the debounce clock running in power-down for wake-up pins
        ICLK_ON OFFSET(5) NUMBITS(1) []
    ]
];

pub const GPIOA_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(0x5000_4000 as *const GpioRegisters) };
pub const GPIOB_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(0x5000_4040 as *const GpioRegisters) };
pub const GPIOC_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(0x5000_4080 as *const GpioRegisters) };
pub const GPIOD_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(0x5000_40C0 as *const GpioRegisters) };
pub const GPIOE_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(0x5000_4100 as *const GpioRegisters) };
pub const GPIOF_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(0x5000_4140 as *const GpioRegisters) };

pub const GPIO_DBNCE_BASE: StaticRef<GpioDebounceRegisters> =
    unsafe { StaticRef::new(0x5000_4180 as *const GpioDebounceRegisters) };

pub const GPIO_PIN_DATA_BASE: StaticRef<GpioPinDataRegisters> =
    unsafe { StaticRef::new(0x5000_4200 as *const GpioPinDataRegisters) };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_sizes() {
        // Port stride is 0x40, pin-data region is 96 words.
        assert_eq!(core::mem::size_of::<GpioRegisters>(), 0x40);
        assert_eq!(core::mem::size_of::<GpioPinDataRegisters>(), 0x180);
    }

    #[test]
    fn pmd_masks() {
        assert_eq!(PMD::PMD0.mask << PMD::PMD0.shift, 0x0000_0003);
        assert_eq!(PMD::PMD15.mask << PMD::PMD15.shift, 0xC000_0000);
    }

    #[test]
    fn ier_halves() {
        assert_eq!(IER::FALLING.mask << IER::FALLING.shift, 0x0000_FFFF);
        assert_eq!(IER::RISING.mask << IER::RISING.shift, 0xFFFF_0000);
    }
}
