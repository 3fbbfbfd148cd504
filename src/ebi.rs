// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! External bus interface.
//!
//! Maps external SRAM-style devices into the address window at
//! 0x6000_0000. Two registers: bus enable/width/clock and the access
//! timing profile.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

register_structs! {
    pub EbiRegisters {
        /// Bus control
        (0x00 => pub ebicon: ReadWrite<u32, EBICON::Register>),
        /// Extended timing control
        (0x04 => pub extime: ReadWrite<u32, EXTIME::Register>),
        (0x08 => @END),
    }
}

register_bitfields![u32,
    pub EBICON [
        /// EBI function enable; claims the shared data/address pins
        EXTEN OFFSET(0) NUMBITS(1) [],
        /// External bus data width
        EXTBW16 OFFSET(1) NUMBITS(1) [
            Bits8 = 0,
            Bits16 = 1
        ],
        /// MCLK = HCLK / 2^MCLKDIV (div-by-1 at 0)
        MCLKDIV OFFSET(8) NUMBITS(3) [],
        /// Address latch hold time in MCLK cycles
        EXTTALE OFFSET(16) NUMBITS(3) []
    ],
    pub EXTIME [
        /// Data access time in MCLK cycles
        EXTTACC OFFSET(3) NUMBITS(5) [],
        /// Data hold time after nRD/nWR deassert
        EXTTAHD OFFSET(8) NUMBITS(3) [],
        /// Idle cycles between consecutive writes
        EXTIW2X OFFSET(12) NUMBITS(4) [],
        /// Idle cycles between consecutive reads
        EXTIR2R OFFSET(24) NUMBITS(4) []
    ]
];

pub const EBI_BASE: StaticRef<EbiRegisters> =
    unsafe { StaticRef::new(0x5001_0000 as *const EbiRegisters) };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<EbiRegisters>(), 0x08);
    }

    #[test]
    fn timing_masks() {
        assert_eq!(EXTIME::EXTTACC.mask << EXTIME::EXTTACC.shift, 0x0000_00F8);
        assert_eq!(EXTIME::EXTIR2R.mask << EXTIME::EXTIR2R.shift, 0x0F00_0000);
    }
}
