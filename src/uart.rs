// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! UART serial controller.
//!
//! Two instances with 16-byte FIFOs. Besides plain async serial the block
//! runs IrDA, LIN and RS-485 framing, selected through `FUN_SEL`; UART0
//! additionally bonds out nCTS/nRTS flow control.

use tock_registers::registers::{Aliased, ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

register_structs! {
    pub UartRegisters {
        /// Receive buffer on read, transmit holding on write
        (0x00 => pub data: Aliased<u32, RBR::Register, THR::Register>),
        (0x04 => pub ctl: ReadWrite<u32, CTL::Register>),
        /// Line control and FIFO trigger levels
        (0x08 => pub tlctl: ReadWrite<u32, TLCTL::Register>),
        (0x0C => pub ier: ReadWrite<u32, IER::Register>),
        /// Interrupt flags, write 1 to clear
        (0x10 => pub isr: ReadWrite<u32, ISR::Register>),
        /// Transfer status: break, LIN and RS-485 events, write 1 to clear
        (0x14 => pub trsr: ReadWrite<u32, TRSR::Register>),
        /// FIFO status
        (0x18 => pub fsr: ReadOnly<u32, FSR::Register>),
        /// Modem flow control and status
        (0x1C => pub mcsr: ReadWrite<u32, MCSR::Register>),
        /// Receive time-out counter
        (0x20 => pub tmctl: ReadWrite<u32, TMCTL::Register>),
        (0x24 => pub baud: ReadWrite<u32, BAUD::Register>),
        (0x28 => _reserved0),
        /// IrDA control
        (0x30 => pub ircr: ReadWrite<u32, IRCR::Register>),
        /// LIN and RS-485 control
        (0x34 => pub alt_ctl: ReadWrite<u32, ALTCTL::Register>),
        (0x38 => pub fun_sel: ReadWrite<u32, FUNSEL::Register>),
        (0x3C => @END),
    }
}

register_bitfields![u32,
    pub RBR [
        RBR OFFSET(0) NUMBITS(8) []
    ],
    pub THR [
        THR OFFSET(0) NUMBITS(8) []
    ],
    pub CTL [
        /// Gate the receiver
        RX_DIS OFFSET(0) NUMBITS(1) [],
        /// nRTS driven from the RX FIFO trigger level
        AUTO_RTS_EN OFFSET(4) NUMBITS(1) [],
        /// Transmitter obeys nCTS
        AUTO_CTS_EN OFFSET(5) NUMBITS(1) [],
        /// PDMA request on TX FIFO space
        DMA_TX_EN OFFSET(6) NUMBITS(1) [],
        /// PDMA request on RX data
        DMA_RX_EN OFFSET(7) NUMBITS(1) [],
        /// Incoming-data wake-up in power-down
        WAKE_CTS_EN OFFSET(8) NUMBITS(1) [],
        /// Baud rate auto-detect enable
        ABAUD_EN OFFSET(12) NUMBITS(1) []
    ],
    pub TLCTL [
        DATA_LEN OFFSET(0) NUMBITS(2) [
            Bits5 = 0,
            Bits6 = 1,
            Bits7 = 2,
            Bits8 = 3
        ],
        /// Two stop bits
        NSB OFFSET(2) NUMBITS(1) [],
        /// Parity enable
        PBE OFFSET(3) NUMBITS(1) [],
        /// Even parity (when PBE)
        EPE OFFSET(4) NUMBITS(1) [],
        /// Stick parity
        SPE OFFSET(5) NUMBITS(1) [],
        /// Drive a break condition on TX
        BCB OFFSET(6) NUMBITS(1) [],
        /// RX FIFO interrupt trigger level
        RFITL OFFSET(8) NUMBITS(2) [
            Bytes1 = 0,
            Bytes4 = 1,
            Bytes8 = 2,
            Bytes14 = 3
        ],
        /// RX FIFO level that deasserts nRTS
        RTS_TRI_LEV OFFSET(12) NUMBITS(2) [
            Bytes1 = 0,
            Bytes4 = 1,
            Bytes8 = 2,
            Bytes14 = 3
        ]
    ],
    pub IER [
        /// Received data available
        RDA_IE OFFSET(0) NUMBITS(1) [],
        /// TX holding register empty
        THRE_IE OFFSET(1) NUMBITS(1) [],
        /// Receive line status (parity/frame/break errors)
        RLS_IE OFFSET(2) NUMBITS(1) [],
        /// Modem status change
        MODEM_IE OFFSET(3) NUMBITS(1) [],
        /// Receive FIFO time-out
        RTO_IE OFFSET(4) NUMBITS(1) [],
        /// TX/RX FIFO overflow
        BUF_ERR_IE OFFSET(5) NUMBITS(1) [],
        /// Wake-up event
        WAKE_IE OFFSET(6) NUMBITS(1) [],
        /// LIN break/header events
        LIN_IE OFFSET(8) NUMBITS(1) [],
        /// Auto-baud completion/failure
        ABAUD_IE OFFSET(9) NUMBITS(1) []
    ],
    pub ISR [
        RDA_IS OFFSET(0) NUMBITS(1) [],
        THRE_IS OFFSET(1) NUMBITS(1) [],
        RLS_IS OFFSET(2) NUMBITS(1) [],
        MODEM_IS OFFSET(3) NUMBITS(1) [],
        RTO_IS OFFSET(4) NUMBITS(1) [],
        BUF_ERR_IS OFFSET(5) NUMBITS(1) [],
        WAKE_IS OFFSET(6) NUMBITS(1) [],
        LIN_IS OFFSET(8) NUMBITS(1) [],
        ABAUD_IS OFFSET(9) NUMBITS(1) []
    ],
    pub TRSR [
        /// RS-485 address byte detected
        RS485_ADDET_F OFFSET(0) NUMBITS(1) [],
        /// Auto-baud measurement finished
        ABAUD_F OFFSET(1) NUMBITS(1) [],
        /// Auto-baud counter overflowed
        ABAUD_TOUT_F OFFSET(2) NUMBITS(1) [],
        /// LIN TX break/header done
        LIN_TX_F OFFSET(3) NUMBITS(1) [],
        /// LIN RX break detected
        LIN_RX_F OFFSET(4) NUMBITS(1) [],
        /// Received break condition
        BIT_ERR_F OFFSET(5) NUMBITS(1) []
    ],
    pub FSR [
        /// RX FIFO overwritten
        RX_OVER_F OFFSET(0) NUMBITS(1) [],
        /// Parity error at FIFO head
        PE_F OFFSET(4) NUMBITS(1) [],
        /// Framing error at FIFO head
        FE_F OFFSET(5) NUMBITS(1) [],
        /// Break at FIFO head
        BI_F OFFSET(6) NUMBITS(1) [],
        /// Bytes in the RX FIFO
        RX_POINTER OFFSET(8) NUMBITS(5) [],
        RX_EMPTY_F OFFSET(14) NUMBITS(1) [],
        RX_FULL_F OFFSET(15) NUMBITS(1) [],
        /// Bytes in the TX FIFO
        TX_POINTER OFFSET(16) NUMBITS(5) [],
        TX_EMPTY_F OFFSET(22) NUMBITS(1) [],
        TX_FULL_F OFFSET(23) NUMBITS(1) [],
        /// TX FIFO overwritten
        TX_OVER_F OFFSET(24) NUMBITS(1) [],
        /// Transmitter idle and FIFO drained
        TE_F OFFSET(28) NUMBITS(1) []
    ],
    pub MCSR [
        /// nRTS output level (when not automatic)
        LEV_RTS OFFSET(0) NUMBITS(1) [],
        /// nRTS pin state
        RTS_ST OFFSET(1) NUMBITS(1) [],
        /// nCTS trigger level select
        LEV_CTS OFFSET(16) NUMBITS(1) [],
        /// nCTS pin state
        CTS_ST OFFSET(17) NUMBITS(1) [],
        /// nCTS changed state, write 1 to clear
        DCT_F OFFSET(18) NUMBITS(1) []
    ],
    pub TMCTL [
        /// Time-out interval in bit times
        TOIC OFFSET(0) NUMBITS(9) [],
        /// Minimum idle bits between transmitted bytes
        DLY OFFSET(16) NUMBITS(8) []
    ],
    pub BAUD [
        /// Baud rate divider
        BRD OFFSET(0) NUMBITS(16) [],
        /// Extra fractional divider (mode 2)
        DIVIDER_X OFFSET(24) NUMBITS(4) [],
        /// Divider X minus-one compensation
        DIV_X_ONE OFFSET(28) NUMBITS(1) [],
        /// Divider X mode enable
        DIV_X_EN OFFSET(29) NUMBITS(1) []
    ],
    pub IRCR [
        /// 0 = receive path, 1 = transmit path
        TX_SELECT OFFSET(1) NUMBITS(1) [],
        /// Invert TX pulses
        INV_TX OFFSET(5) NUMBITS(1) [],
        /// Invert RX pulses
        INV_RX OFFSET(6) NUMBITS(1) []
    ],
    pub ALTCTL [
        /// LIN break field length minus one, in bits
        LIN_TX_BCNT OFFSET(0) NUMBITS(4) [],
        /// LIN header transmit content select
        LIN_HEAD_SEL OFFSET(4) NUMBITS(2) [
            BreakOnly = 0,
            BreakSync = 1,
            BreakSyncId = 2
        ],
        LIN_RX_EN OFFSET(6) NUMBITS(1) [],
        /// Start the LIN header transmission. Self-clearing.
        LIN_TX_EN OFFSET(7) NUMBITS(1) [],
        /// RS-485 normal multi-drop mode
        RS485_NMM OFFSET(8) NUMBITS(1) [],
        /// RS-485 auto address detection
        RS485_AAD OFFSET(9) NUMBITS(1) [],
        /// RS-485 auto direction (nRTS drives the transceiver)
        RS485_AUD OFFSET(10) NUMBITS(1) [],
        /// Byte with parity bit set is an address byte
        RS485_ADD_EN OFFSET(15) NUMBITS(1) [],
        /// Match value for auto address detection
        ADDR_MATCH OFFSET(24) NUMBITS(8) []
    ],
    pub FUNSEL [
        FUN_SEL OFFSET(0) NUMBITS(2) [
            Uart = 0,
            Lin = 1,
            Irda = 2,
            Rs485 = 3
        ]
    ]
];

pub const UART0_BASE: StaticRef<UartRegisters> =
    unsafe { StaticRef::new(0x4005_0000 as *const UartRegisters) };
pub const UART1_BASE: StaticRef<UartRegisters> =
    unsafe { StaticRef::new(0x4015_0000 as *const UartRegisters) };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<UartRegisters>(), 0x3C);
    }

    #[test]
    fn fifo_status_masks() {
        assert_eq!(FSR::RX_POINTER.mask << FSR::RX_POINTER.shift, 0x0000_1F00);
        assert_eq!(FSR::TX_FULL_F.mask << FSR::TX_FULL_F.shift, 0x0080_0000);
    }

    #[test]
    fn baud_masks() {
        assert_eq!(BAUD::BRD.mask, 0xFFFF);
        assert_eq!(BAUD::DIVIDER_X.mask << BAUD::DIVIDER_X.shift, 0x0F00_0000);
    }
}
