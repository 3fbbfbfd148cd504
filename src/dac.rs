// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! 12-bit digital-to-analog converter.
//!
//! Two channels with independent control/data/status frames and a shared
//! common control word. Loads can be immediate or deferred to a timer or
//! PDMA event selected in `CTL.LOAD_SEL`.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

register_structs! {
    pub DacRegisters {
        (0x00 => pub ctl0: ReadWrite<u32, CTL::Register>),
        (0x04 => pub data0: ReadWrite<u32, DATA::Register>),
        /// Status, write 1 to clear the interrupt flag
        (0x08 => pub sts0: ReadWrite<u32, STS::Register>),
        (0x0C => _reserved0),
        (0x10 => pub ctl1: ReadWrite<u32, CTL::Register>),
        (0x14 => pub data1: ReadWrite<u32, DATA::Register>),
        (0x18 => pub sts1: ReadWrite<u32, STS::Register>),
        (0x1C => _reserved1),
        /// Shared reference and power-up timing control
        (0x20 => pub comctl: ReadWrite<u32, COMCTL::Register>),
        (0x24 => @END),
    }
}

register_bitfields![u32,
    pub CTL [
        EN OFFSET(0) NUMBITS(1) [],
        /// Conversion-done interrupt enable
        IE OFFSET(1) NUMBITS(1) [],
        /// What moves DATA into the converter
        LOAD_SEL OFFSET(2) NUMBITS(2) [
            WriteDat = 0,
            Timer = 1,
            Pdma = 2
        ],
        /// Settling counter after power-up, in PCLK cycles
        PWONSTBCNT OFFSET(8) NUMBITS(8) []
    ],
    pub DATA [
        DATA OFFSET(0) NUMBITS(12) []
    ],
    pub STS [
        /// Conversion-done flag
        IFG OFFSET(0) NUMBITS(1) [],
        /// Converter busy settling
        BUSY OFFSET(1) NUMBITS(1) []
    ],
    pub COMCTL [
        /// Hold conversions until the reference is stable
        WAIT_REF_RDY OFFSET(0) NUMBITS(1) [],
        REF_SEL OFFSET(1) NUMBITS(2) [
            AVdd = 0,
            IntVref = 1,
            Vref = 2
        ]
    ]
];

pub const DAC_BASE: StaticRef<DacRegisters> =
    unsafe { StaticRef::new(0x400A_0000 as *const DacRegisters) };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<DacRegisters>(), 0x24);
    }

    #[test]
    fn data_mask() {
        assert_eq!(DATA::DATA.mask, 0xFFF);
        assert_eq!(CTL::PWONSTBCNT.mask << CTL::PWONSTBCNT.shift, 0x0000_FF00);
    }
}
