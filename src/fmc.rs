// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Flash memory controller (ISP).
//!
//! Word-granular in-system programming of APROM, LDROM, the data flash and
//! the user configuration words. A command is issued by loading `ISPCMD`,
//! `ISPADR` (and `ISPDAT` for programs), then setting `ISPTRG.ISPGO`; the
//! CPU stalls on instruction fetch until the operation finishes. Failures
//! latch `ISPSTA.ISPFF`, which must be cleared by software.
//!
//! `ISPCON` is write-protected behind `SYS.REGWRPROT`.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

register_structs! {
    pub FmcRegisters {
        /// ISP enable and boot select
        (0x00 => pub ispcon: ReadWrite<u32, ISPCON::Register>),
        /// Flash byte address of the operation
        (0x04 => pub ispadr: ReadWrite<u32>),
        /// Program data in, read data out
        (0x08 => pub ispdat: ReadWrite<u32>),
        /// Operation code
        (0x0C => pub ispcmd: ReadWrite<u32, ISPCMD::Register>),
        /// Operation trigger
        (0x10 => pub isptrg: ReadWrite<u32, ISPTRG::Register>),
        /// Data flash base address as set in the config words
        (0x14 => pub dfbadr: ReadOnly<u32>),
        /// Flash access cycle tuning
        (0x18 => pub fatcon: ReadWrite<u32, FATCON::Register>),
        (0x1C => _reserved0),
        /// ISP status
        (0x40 => pub ispsta: ReadWrite<u32, ISPSTA::Register>),
        (0x44 => @END),
    }
}

register_bitfields![u32,
    pub ISPCON [
        ISPEN OFFSET(0) NUMBITS(1) [],
        /// Boot select reflected from CONFIG0.CBS at reset
        BS OFFSET(1) NUMBITS(1) [
            Aprom = 0,
            Ldrom = 1
        ],
        /// Allow program/erase of APROM from LDROM code
        APUEN OFFSET(3) NUMBITS(1) [],
        /// Allow update of the user configuration words
        CFGUEN OFFSET(4) NUMBITS(1) [],
        /// Allow program/erase of LDROM from APROM code
        LDUEN OFFSET(5) NUMBITS(1) [],
        /// ISP fail flag, write 1 to clear
        ISPFF OFFSET(6) NUMBITS(1) []
    ],
    pub ISPCMD [
        CMD OFFSET(0) NUMBITS(6) [
            Read = 0x00,
            ReadUid = 0x04,
            ReadCid = 0x0B,
            ReadDid = 0x0C,
            Program = 0x21,
            PageErase = 0x22,
            VectorRemap = 0x2E
        ]
    ],
    pub ISPTRG [
        /// Starts the loaded command; hardware clears it on completion
        ISPGO OFFSET(0) NUMBITS(1) []
    ],
    pub FATCON [
        /// Low-frequency optimization mode, HCLK below 24 MHz
        LFOM OFFSET(0) NUMBITS(1) [],
        /// Cache disable
        CACHE_DIS OFFSET(1) NUMBITS(1) [],
        /// Frequency optimization mode select
        FOM_SEL OFFSET(4) NUMBITS(2) []
    ],
    pub ISPSTA [
        /// Mirrors ISPTRG.ISPGO
        ISPGO OFFSET(0) NUMBITS(1) [],
        /// Current boot source
        CBS OFFSET(1) NUMBITS(2) [],
        /// ISP fail flag, aliases ISPCON.ISPFF, write 1 to clear.
        /// Set on illegal address, write-protected target or erase verify
        /// failure.
        ISPFF OFFSET(6) NUMBITS(1) [],
        /// Page offset the vector remap currently maps to address 0
        VECMAP OFFSET(9) NUMBITS(12) []
    ]
];

pub const FMC_BASE: StaticRef<FmcRegisters> =
    unsafe { StaticRef::new(0x5000_C000 as *const FmcRegisters) };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<FmcRegisters>(), 0x44);
    }

    #[test]
    fn status_masks() {
        assert_eq!(ISPSTA::ISPFF.mask << ISPSTA::ISPFF.shift, 0x0000_0040);
        assert_eq!(ISPSTA::VECMAP.mask << ISPSTA::VECMAP.shift, 0x001F_FE00);
    }
}
