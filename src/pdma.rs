// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! DMA controller.
//!
//! Channel 0 is the VDMA, a memory-to-memory engine with optional stride
//! addressing. Channels 1-6 are PDMA channels servicing peripheral requests;
//! the request-to-channel routing lives in the global control block
//! (`DSSR0`/`DSSR1`). Channel register frames sit at a 0x100 stride from
//! the VDMA base.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

register_structs! {
    pub VdmaRegisters {
        /// Control and status
        (0x00 => pub csr: ReadWrite<u32, VDMA_CSR::Register>),
        /// Source address
        (0x04 => pub sar: ReadWrite<u32>),
        /// Destination address
        (0x08 => pub dar: ReadWrite<u32>),
        /// Transfer byte count
        (0x0C => pub bcr: ReadWrite<u32, BCR::Register>),
        (0x10 => _reserved0),
        /// Internal buffer pointer
        (0x14 => pub point: ReadOnly<u32, POINT::Register>),
        /// Current source address
        (0x18 => pub csar: ReadOnly<u32>),
        /// Current destination address
        (0x1C => pub cdar: ReadOnly<u32>),
        /// Remaining byte count
        (0x20 => pub cbcr: ReadOnly<u32, BCR::Register>),
        /// Interrupt enable
        (0x24 => pub ier: ReadWrite<u32, IER::Register>),
        /// Interrupt status, write 1 to clear
        (0x28 => pub isr: ReadWrite<u32, ISR::Register>),
        /// Source stride offset
        (0x2C => pub sasocr: ReadWrite<u32, SOCR::Register>),
        /// Destination stride offset
        (0x30 => pub dasocr: ReadWrite<u32, SOCR::Register>),
        (0x34 => _reserved1),
        /// Shared internal buffer word
        (0x80 => pub sbuf: ReadOnly<u32>),
        (0x84 => @END),
    },

    pub PdmaRegisters {
        /// Control and status
        (0x00 => pub csr: ReadWrite<u32, PDMA_CSR::Register>),
        /// Source address
        (0x04 => pub sar: ReadWrite<u32>),
        /// Destination address
        (0x08 => pub dar: ReadWrite<u32>),
        /// Transfer byte count
        (0x0C => pub bcr: ReadWrite<u32, BCR::Register>),
        (0x10 => _reserved0),
        /// Internal buffer pointer
        (0x14 => pub point: ReadOnly<u32, POINT::Register>),
        /// Current source address
        (0x18 => pub csar: ReadOnly<u32>),
        /// Current destination address
        (0x1C => pub cdar: ReadOnly<u32>),
        /// Remaining byte count
        (0x20 => pub cbcr: ReadOnly<u32, BCR::Register>),
        /// Interrupt enable
        (0x24 => pub ier: ReadWrite<u32, IER::Register>),
        /// Interrupt status, write 1 to clear
        (0x28 => pub isr: ReadWrite<u32, ISR::Register>),
        /// Request time-out prescaler and counter
        (0x2C => pub tcr: ReadWrite<u32, TCR::Register>),
        (0x30 => _reserved1),
        /// Shared internal buffer word
        (0x80 => pub sbuf: ReadOnly<u32>),
        (0x84 => @END),
    },

    pub PdmaGcrRegisters {
        /// Per-channel engine clock enables
        (0x00 => pub gcrcsr: ReadWrite<u32, GCRCSR::Register>),
        /// Peripheral request routing for channels 1-3
        (0x04 => pub dssr0: ReadWrite<u32, DSSR0::Register>),
        /// Peripheral request routing for channels 4-6
        (0x08 => pub dssr1: ReadWrite<u32, DSSR1::Register>),
        /// Combined channel interrupt status
        (0x0C => pub gcrisr: ReadOnly<u32, GCRISR::Register>),
        (0x10 => @END),
    }
}

register_bitfields![u32,
    pub VDMA_CSR [
        VDMACEN OFFSET(0) NUMBITS(1) [],
        /// Reset the channel state machine and FIFO pointers
        SW_RST OFFSET(1) NUMBITS(1) [],
        /// Apply SASOCR/DASOCR stride offsets at each row boundary
        STRIDE_EN OFFSET(5) NUMBITS(1) [],
        /// Walk addresses downward from SAR/DAR
        DIR_SEL OFFSET(6) NUMBITS(1) [],
        /// Start the transfer. Self-clearing.
        TRIG_EN OFFSET(23) NUMBITS(1) []
    ],
    pub PDMA_CSR [
        PDMACEN OFFSET(0) NUMBITS(1) [],
        SW_RST OFFSET(1) NUMBITS(1) [],
        MODE_SEL OFFSET(2) NUMBITS(2) [
            MemToMem = 0,
            PeriphToMem = 1,
            MemToPeriph = 2
        ],
        SAD_SEL OFFSET(4) NUMBITS(2) [
            Increment = 0,
            Fixed = 2,
            Wraparound = 3
        ],
        DAD_SEL OFFSET(6) NUMBITS(2) [
            Increment = 0,
            Fixed = 2,
            Wraparound = 3
        ],
        /// Abort the transfer when the request times out (see TCR)
        TO_EN OFFSET(12) NUMBITS(1) [],
        /// Peripheral-side transfer width
        APB_TWS OFFSET(19) NUMBITS(2) [
            Word = 0,
            Byte = 1,
            Half = 2
        ],
        /// Start the transfer. Self-clearing.
        TRIG_EN OFFSET(23) NUMBITS(1) []
    ],
    pub BCR [
        BCR OFFSET(0) NUMBITS(24) []
    ],
    pub POINT [
        POINT OFFSET(0) NUMBITS(4) []
    ],
    pub IER [
        /// Target abort (bus error) interrupt enable
        TABORT_IE OFFSET(0) NUMBITS(1) [],
        /// Block transfer done interrupt enable
        BLKD_IE OFFSET(1) NUMBITS(1) [],
        /// Request time-out interrupt enable (peripheral channels)
        TO_IE OFFSET(2) NUMBITS(1) []
    ],
    pub ISR [
        TABORT_IF OFFSET(0) NUMBITS(1) [],
        BLKD_IF OFFSET(1) NUMBITS(1) [],
        TO_IF OFFSET(2) NUMBITS(1) []
    ],
    pub TCR [
        /// Time-out counter, clocked at HCLK / 2^(PRESCALE + 8)
        TCR OFFSET(0) NUMBITS(16) [],
        PRESCALE OFFSET(16) NUMBITS(3) []
    ],
    pub SOCR [
        /// Byte offset added at each stride boundary
        STOBL OFFSET(0) NUMBITS(16) []
    ],
    pub GCRCSR [
        /// Engine clock enable, one bit per channel (bit 8 = channel 0)
        CH_CLK_EN OFFSET(8) NUMBITS(7) []
    ],
    pub DSSR0 [
        /// Request source id serviced by channel 1
        CH1_SEL OFFSET(8) NUMBITS(5) [],
        CH2_SEL OFFSET(16) NUMBITS(5) [],
        CH3_SEL OFFSET(24) NUMBITS(5) []
    ],
    pub DSSR1 [
        CH4_SEL OFFSET(0) NUMBITS(5) [],
        CH5_SEL OFFSET(8) NUMBITS(5) [],
        CH6_SEL OFFSET(16) NUMBITS(5) []
    ],
    pub GCRISR [
        /// Per-channel interrupt pending, bit n = channel n
        INTR OFFSET(0) NUMBITS(7) []
    ]
];

pub const VDMA_BASE: StaticRef<VdmaRegisters> =
    unsafe { StaticRef::new(0x5000_8000 as *const VdmaRegisters) };

pub const PDMA1_BASE: StaticRef<PdmaRegisters> =
    unsafe { StaticRef::new(0x5000_8100 as *const PdmaRegisters) };
pub const PDMA2_BASE: StaticRef<PdmaRegisters> =
    unsafe { StaticRef::new(0x5000_8200 as *const PdmaRegisters) };
pub const PDMA3_BASE: StaticRef<PdmaRegisters> =
    unsafe { StaticRef::new(0x5000_8300 as *const PdmaRegisters) };
pub const PDMA4_BASE: StaticRef<PdmaRegisters> =
    unsafe { StaticRef::new(0x5000_8400 as *const PdmaRegisters) };
pub const PDMA5_BASE: StaticRef<PdmaRegisters> =
    unsafe { StaticRef::new(0x5000_8500 as *const PdmaRegisters) };
pub const PDMA6_BASE: StaticRef<PdmaRegisters> =
    unsafe { StaticRef::new(0x5000_8600 as *const PdmaRegisters) };

pub const PDMA_GCR_BASE: StaticRef<PdmaGcrRegisters> =
    unsafe { StaticRef::new(0x5000_8F00 as *const PdmaGcrRegisters) };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_sizes() {
        assert_eq!(core::mem::size_of::<VdmaRegisters>(), 0x84);
        assert_eq!(core::mem::size_of::<PdmaRegisters>(), 0x84);
        assert_eq!(core::mem::size_of::<PdmaGcrRegisters>(), 0x10);
    }

    #[test]
    fn csr_masks() {
        assert_eq!(PDMA_CSR::APB_TWS.mask << PDMA_CSR::APB_TWS.shift, 0x0018_0000);
        assert_eq!(PDMA_CSR::TRIG_EN.mask << PDMA_CSR::TRIG_EN.shift, 0x0080_0000);
        assert_eq!(BCR::BCR.mask, 0x00FF_FFFF);
    }

    #[test]
    fn routing_masks() {
        assert_eq!(DSSR0::CH3_SEL.mask << DSSR0::CH3_SEL.shift, 0x1F00_0000);
        assert_eq!(DSSR1::CH4_SEL.mask << DSSR1::CH4_SEL.shift, 0x0000_001F);
    }
}
