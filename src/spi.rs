// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! SPI master/slave controller.
//!
//! Three instances with two-word transmit and receive buffers, optional
//! FIFO mode, byte reordering, a variable-rate clock pattern, and PDMA
//! handshake. Transfers of 8 to 32 bits are configured in `CTL`.

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

register_structs! {
    pub SpiRegisters {
        (0x00 => pub ctl: ReadWrite<u32, CTL::Register>),
        /// Status flags, interrupt bits write 1 to clear
        (0x04 => pub status: ReadWrite<u32, STATUS::Register>),
        (0x08 => pub clkdiv: ReadWrite<u32, CLKDIV::Register>),
        /// Slave select control
        (0x0C => pub ssr: ReadWrite<u32, SSR::Register>),
        /// Receive buffer words
        (0x10 => pub rx0: ReadOnly<u32>),
        (0x14 => pub rx1: ReadOnly<u32>),
        (0x18 => _reserved0),
        /// Transmit buffer words
        (0x20 => pub tx0: WriteOnly<u32>),
        (0x24 => pub tx1: WriteOnly<u32>),
        (0x28 => _reserved1),
        /// Bit pattern for the variable clock function
        (0x34 => pub varclk: ReadWrite<u32>),
        /// PDMA handshake control
        (0x38 => pub dma: ReadWrite<u32, DMA::Register>),
        /// FIFO clear strobes
        (0x3C => pub ffclr: ReadWrite<u32, FFCLR::Register>),
        (0x40 => @END),
    }
}

register_bitfields![u32,
    pub CTL [
        /// Transfer in progress (master starts one by setting it)
        GO_BUSY OFFSET(0) NUMBITS(1) [],
        /// Latch receive data on the falling SCLK edge
        RX_NEG OFFSET(1) NUMBITS(1) [],
        /// Drive transmit data on the falling SCLK edge
        TX_NEG OFFSET(2) NUMBITS(1) [],
        /// Bits per transfer word; 0 encodes 32
        TX_BIT_LEN OFFSET(3) NUMBITS(5) [],
        /// Words per transfer minus one (burst of 1 or 2)
        TX_NUM OFFSET(8) NUMBITS(2) [],
        /// Shift LSB first
        LSB OFFSET(10) NUMBITS(1) [],
        /// SCLK idle polarity high
        CLKP OFFSET(11) NUMBITS(1) [],
        /// Suspend interval between words, in SCLK cycles
        SP_CYCLE OFFSET(12) NUMBITS(4) [],
        /// Unit transfer interrupt enable
        IE OFFSET(17) NUMBITS(1) [],
        /// Slave mode
        SLAVE OFFSET(18) NUMBITS(1) [],
        /// Byte order within a word
        REORDER OFFSET(19) NUMBITS(2) [
            Off = 0,
            ByteReverse = 1,
            ByteSuspend = 2
        ],
        /// Use the TX/RX buffers as a FIFO pair
        FIFO OFFSET(21) NUMBITS(1) [],
        /// Two-bit serial mode (dual data pins)
        TWOB OFFSET(22) NUMBITS(1) [],
        /// Pattern-controlled clock from VARCLK
        VARCLK_EN OFFSET(23) NUMBITS(1) []
    ],
    pub STATUS [
        RX_EMPTY OFFSET(0) NUMBITS(1) [],
        RX_FULL OFFSET(1) NUMBITS(1) [],
        TX_EMPTY OFFSET(2) NUMBITS(1) [],
        TX_FULL OFFSET(3) NUMBITS(1) [],
        /// Slave saw select assert while unprepared
        SLV_START_INTSTS OFFSET(11) NUMBITS(1) [],
        /// Unit transfer complete, write 1 to clear
        INTSTS OFFSET(16) NUMBITS(1) []
    ],
    pub CLKDIV [
        /// SCLK = PCLK / (2 * (DIVIDER1 + 1))
        DIVIDER1 OFFSET(0) NUMBITS(16) [],
        /// Second divider, used while VARCLK selects it
        DIVIDER2 OFFSET(16) NUMBITS(16) []
    ],
    pub SSR [
        /// Select line assert, one bit per SPISSx pin
        SSR OFFSET(0) NUMBITS(2) [],
        /// Select active level/edge
        SS_LVL OFFSET(2) NUMBITS(1) [],
        /// Hardware asserts select around each transfer
        AUTOSS OFFSET(3) NUMBITS(1) [],
        /// Level-trigger slave select (byte-count integrity checked)
        SS_LTRIG OFFSET(4) NUMBITS(1) [],
        /// Level-trigger transfer completed cleanly
        LTRIG_FLAG OFFSET(5) NUMBITS(1) []
    ],
    pub DMA [
        TX_DMA_GO OFFSET(0) NUMBITS(1) [],
        RX_DMA_GO OFFSET(1) NUMBITS(1) [],
        /// Reset the PDMA handshake state
        PDMA_RST OFFSET(2) NUMBITS(1) []
    ],
    pub FFCLR [
        /// Clear the receive FIFO. Self-clearing.
        RX_CLR OFFSET(0) NUMBITS(1) [],
        TX_CLR OFFSET(1) NUMBITS(1) []
    ]
];

pub const SPI0_BASE: StaticRef<SpiRegisters> =
    unsafe { StaticRef::new(0x4003_0000 as *const SpiRegisters) };
pub const SPI1_BASE: StaticRef<SpiRegisters> =
    unsafe { StaticRef::new(0x4013_0000 as *const SpiRegisters) };
pub const SPI2_BASE: StaticRef<SpiRegisters> =
    unsafe { StaticRef::new(0x400D_0000 as *const SpiRegisters) };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<SpiRegisters>(), 0x40);
    }

    #[test]
    fn ctl_masks() {
        assert_eq!(CTL::TX_BIT_LEN.mask << CTL::TX_BIT_LEN.shift, 0x0000_00F8);
        assert_eq!(CTL::VARCLK_EN.mask << CTL::VARCLK_EN.shift, 0x0080_0000);
    }

    #[test]
    fn clkdiv_halves() {
        assert_eq!(CLKDIV::DIVIDER1.mask, 0xFFFF);
        assert_eq!(CLKDIV::DIVIDER2.shift, 16);
    }
}
