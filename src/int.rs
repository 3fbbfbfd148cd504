// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Interrupt source multiplexer.
//!
//! One read-only source-identification word per NVIC line, plus NMI source
//! routing and a software view of the raw request lines. Several NVIC lines
//! on the Nano100 aggregate more than one peripheral request (e.g. the three
//! GPIO ports behind `GPABC`); `IRQSRC[n]` tells the handler which of the
//! aggregated sources fired.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

register_structs! {
    pub IntRegisters {
        /// Source identification for NVIC lines 0-31
        (0x00 => pub irqsrc: [ReadOnly<u32, IRQSRC::Register>; 32]),
        /// NMI source routing
        (0x80 => pub nmi_sel: ReadWrite<u32, NMISEL::Register>),
        /// Raw interrupt request lines, one bit per NVIC line
        (0x84 => pub mcu_irq: ReadWrite<u32>),
        (0x88 => @END),
    }
}

register_bitfields![u32,
    pub IRQSRC [
        /// Which of the requests aggregated on this line is pending
        INT_SRC OFFSET(0) NUMBITS(4) []
    ],
    pub NMISEL [
        /// NVIC line routed to the NMI input
        NMI_SEL OFFSET(0) NUMBITS(5) [],
        /// Route the selected line to NMI instead of the NVIC.
        /// Write-protected behind `SYS.REGWRPROT`.
        NMI_EN OFFSET(8) NUMBITS(1) []
    ]
];

pub const INT_BASE: StaticRef<IntRegisters> =
    unsafe { StaticRef::new(0x5000_0300 as *const IntRegisters) };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<IntRegisters>(), 0x88);
    }

    #[test]
    fn nmi_masks() {
        assert_eq!(NMISEL::NMI_SEL.mask << NMISEL::NMI_SEL.shift, 0x0000_001F);
        assert_eq!(NMISEL::NMI_EN.mask << NMISEL::NMI_EN.shift, 0x0000_0100);
    }
}
