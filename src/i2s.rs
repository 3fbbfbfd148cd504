// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! I2S audio interface.
//!
//! Master or slave serial audio with eight-word TX and RX FIFOs, optional
//! MCLK output, zero-cross detection per channel, and PDMA handshake.

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

register_structs! {
    pub I2sRegisters {
        (0x00 => pub ctrl: ReadWrite<u32, CTRL::Register>),
        (0x04 => pub clkdiv: ReadWrite<u32, CLKDIV::Register>),
        (0x08 => pub ie: ReadWrite<u32, IE::Register>),
        /// Status; interrupt flags write 1 to clear
        (0x0C => pub status: ReadWrite<u32, STATUS::Register>),
        /// TX FIFO write port
        (0x10 => pub txfifo: WriteOnly<u32>),
        /// RX FIFO read port
        (0x14 => pub rxfifo: ReadOnly<u32>),
        (0x18 => @END),
    }
}

register_bitfields![u32,
    pub CTRL [
        I2SEN OFFSET(0) NUMBITS(1) [],
        TXEN OFFSET(1) NUMBITS(1) [],
        RXEN OFFSET(2) NUMBITS(1) [],
        /// Transmit zeros in place of FIFO data
        MUTE OFFSET(3) NUMBITS(1) [],
        WORDWIDTH OFFSET(4) NUMBITS(2) [
            Bits8 = 0,
            Bits16 = 1,
            Bits24 = 2,
            Bits32 = 3
        ],
        /// Mono: left channel data only
        MONO OFFSET(6) NUMBITS(1) [],
        FORMAT OFFSET(7) NUMBITS(1) [
            I2s = 0,
            Msb = 1
        ],
        /// BCLK/WS driven by the far end
        SLAVE OFFSET(8) NUMBITS(1) [],
        /// TX FIFO interrupt threshold, words
        TXTH OFFSET(9) NUMBITS(3) [],
        /// RX FIFO interrupt threshold, words
        RXTH OFFSET(12) NUMBITS(3) [],
        /// MCLK output enable
        MCLKEN OFFSET(15) NUMBITS(1) [],
        /// Right channel zero-cross detect
        RCHZCEN OFFSET(16) NUMBITS(1) [],
        LCHZCEN OFFSET(17) NUMBITS(1) [],
        /// Flush the TX FIFO. Self-clearing.
        CLR_TXFIFO OFFSET(18) NUMBITS(1) [],
        CLR_RXFIFO OFFSET(19) NUMBITS(1) [],
        TXDMA OFFSET(20) NUMBITS(1) [],
        RXDMA OFFSET(21) NUMBITS(1) []
    ],
    pub CLKDIV [
        /// MCLK = source / (2 * MCLK_DIV), source passthrough at 0
        MCLK_DIV OFFSET(0) NUMBITS(3) [],
        /// BCLK = source / (2 * (BCLK_DIV + 1))
        BCLK_DIV OFFSET(8) NUMBITS(8) []
    ],
    pub IE [
        RXUDFIE OFFSET(0) NUMBITS(1) [],
        RXOVFIE OFFSET(1) NUMBITS(1) [],
        /// RX FIFO reached its threshold
        RXTHIE OFFSET(2) NUMBITS(1) [],
        TXUDFIE OFFSET(8) NUMBITS(1) [],
        TXOVFIE OFFSET(9) NUMBITS(1) [],
        TXTHIE OFFSET(10) NUMBITS(1) [],
        /// Right channel zero-cross
        RZCIE OFFSET(16) NUMBITS(1) [],
        LZCIE OFFSET(17) NUMBITS(1) []
    ],
    pub STATUS [
        /// Any enabled interrupt pending
        I2SINT OFFSET(0) NUMBITS(1) [],
        I2SRXINT OFFSET(1) NUMBITS(1) [],
        I2STXINT OFFSET(2) NUMBITS(1) [],
        /// Word select currently addresses the right channel
        RIGHT OFFSET(3) NUMBITS(1) [],
        RXUDF OFFSET(8) NUMBITS(1) [],
        RXOVF OFFSET(9) NUMBITS(1) [],
        RXTHF OFFSET(10) NUMBITS(1) [],
        RXFULL OFFSET(11) NUMBITS(1) [],
        RXEMPTY OFFSET(12) NUMBITS(1) [],
        TXUDF OFFSET(16) NUMBITS(1) [],
        TXOVF OFFSET(17) NUMBITS(1) [],
        TXTHF OFFSET(18) NUMBITS(1) [],
        TXFULL OFFSET(19) NUMBITS(1) [],
        TXEMPTY OFFSET(20) NUMBITS(1) [],
        /// Shifter still draining after TXEN clear
        TXBUSY OFFSET(21) NUMBITS(1) [],
        RZCF OFFSET(22) NUMBITS(1) [],
        LZCF OFFSET(23) NUMBITS(1) [],
        /// Words in the RX FIFO
        RX_LEVEL OFFSET(24) NUMBITS(4) [],
        TX_LEVEL OFFSET(28) NUMBITS(4) []
    ]
];

pub const I2S_BASE: StaticRef<I2sRegisters> =
    unsafe { StaticRef::new(0x401A_0000 as *const I2sRegisters) };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<I2sRegisters>(), 0x18);
    }

    #[test]
    fn fifo_level_masks() {
        assert_eq!(STATUS::RX_LEVEL.mask << STATUS::RX_LEVEL.shift, 0x0F00_0000);
        assert_eq!(STATUS::TX_LEVEL.mask << STATUS::TX_LEVEL.shift, 0xF000_0000);
    }
}
