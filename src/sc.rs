// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! ISO 7816-3 smartcard interface.
//!
//! Three instances handling card activation sequencing, ETU-based timing,
//! automatic error retransmission, and three 24-bit protocol timers for
//! waiting-time supervision. `UACTL` repurposes the block as a plain UART.

use tock_registers::registers::{Aliased, ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

register_structs! {
    pub ScRegisters {
        /// Receive buffer on read, transmit holding on write
        (0x00 => pub data: Aliased<u32, RBR::Register, THR::Register>),
        (0x04 => pub ctl: ReadWrite<u32, CTL::Register>),
        /// Activation/deactivation sequencer and timer strobes
        (0x08 => pub altctl: ReadWrite<u32, ALTCTL::Register>),
        /// Extra guard time between transmitted bytes
        (0x0C => pub egtr: ReadWrite<u32, EGTR::Register>),
        /// Receive buffer time-out
        (0x10 => pub rftmr: ReadWrite<u32, RFTMR::Register>),
        /// Elementary time unit divider
        (0x14 => pub etucr: ReadWrite<u32, ETUCR::Register>),
        (0x18 => pub ier: ReadWrite<u32, IER::Register>),
        /// Interrupt flags, write 1 to clear
        (0x1C => pub isr: ReadWrite<u32, ISR::Register>),
        /// Transfer error status, write 1 to clear
        (0x20 => pub trsr: ReadWrite<u32, TRSR::Register>),
        /// Card pins: power, reset, clock, data, card-detect
        (0x24 => pub pincsr: ReadWrite<u32, PINCSR::Register>),
        /// Protocol timer 0
        (0x28 => pub tmr0: ReadWrite<u32, TMR::Register>),
        (0x2C => pub tmr1: ReadWrite<u32, TMR::Register>),
        (0x30 => pub tmr2: ReadWrite<u32, TMR::Register>),
        /// UART emulation mode control
        (0x34 => pub uactl: ReadWrite<u32, UACTL::Register>),
        /// Current value of protocol timer 0 (and 1/2 packed in TDRB)
        (0x38 => pub tdra: ReadOnly<u32, TDRA::Register>),
        (0x3C => pub tdrb: ReadOnly<u32, TDRB::Register>),
        (0x40 => @END),
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
        /// Controller enable
        SC_CEN OFFSET(0) NUMBITS(1) [],
        DIS_RX OFFSET(1) NUMBITS(1) [],
        DIS_TX OFFSET(2) NUMBITS(1) [],
        /// Hardware runs the full activation sequence on card insert
        AUTO_CON_EN OFFSET(3) NUMBITS(1) [],
        /// Convention (direct/inverse) select, or auto from ATR
        CON_SEL OFFSET(4) NUMBITS(2) [],
        /// RX FIFO interrupt trigger level
        RX_FTRI_LEV OFFSET(6) NUMBITS(2) [
            Bytes1 = 0,
            Bytes2 = 1,
            Bytes3 = 2
        ],
        /// Block guard time in ETUs
        BGT OFFSET(8) NUMBITS(5) [],
        /// Which protocol timer supervises character waiting time
        TMR_SEL OFFSET(13) NUMBITS(2) [],
        /// Stop bit length: 0 = 2 ETUs, 1 = 1 ETU
        SLEN OFFSET(15) NUMBITS(1) [],
        /// Receiver parity-error retries, minus one
        RX_ERETRY OFFSET(16) NUMBITS(3) [],
        RX_ERETRY_EN OFFSET(19) NUMBITS(1) [],
        TX_ERETRY OFFSET(20) NUMBITS(3) [],
        TX_ERETRY_EN OFFSET(23) NUMBITS(1) [],
        /// Card-detect debounce sample select
        CD_DEB_SEL OFFSET(24) NUMBITS(2) []
    ],
    pub ALTCTL [
        /// Flush the TX FIFO. Self-clearing.
        TX_RST OFFSET(0) NUMBITS(1) [],
        RX_RST OFFSET(1) NUMBITS(1) [],
        /// Start the deactivation sequence
        DACT_EN OFFSET(2) NUMBITS(1) [],
        /// Start the activation sequence
        ACT_EN OFFSET(3) NUMBITS(1) [],
        /// Warm-reset the card
        WARST_EN OFFSET(4) NUMBITS(1) [],
        /// Start protocol timer n
        TMR0_SEN OFFSET(5) NUMBITS(1) [],
        TMR1_SEN OFFSET(6) NUMBITS(1) [],
        TMR2_SEN OFFSET(7) NUMBITS(1) [],
        /// Initial waiting-time counter source
        INIT_SEL OFFSET(8) NUMBITS(2) [],
        /// Block guard time also checked on receive
        RX_BGT_EN OFFSET(12) NUMBITS(1) [],
        /// Timer n keeps counting in power-down
        TMR0_ATV OFFSET(13) NUMBITS(1) [],
        TMR1_ATV OFFSET(14) NUMBITS(1) [],
        TMR2_ATV OFFSET(15) NUMBITS(1) []
    ],
    pub EGTR [
        /// Extra guard time in ETUs
        EGT OFFSET(0) NUMBITS(8) []
    ],
    pub RFTMR [
        /// Receive FIFO time-out in ETUs
        RFTM OFFSET(0) NUMBITS(9) []
    ],
    pub ETUCR [
        /// ETU = card clock * (ETU_RDIV + 1)
        ETU_RDIV OFFSET(0) NUMBITS(12) [],
        /// Compensate the divider by 1/2 clock
        COMPEN_EN OFFSET(15) NUMBITS(1) []
    ],
    pub IER [
        RDA_IE OFFSET(0) NUMBITS(1) [],
        TBE_IE OFFSET(1) NUMBITS(1) [],
        /// Transfer error (parity, frame, retry exhausted)
        TERR_IE OFFSET(2) NUMBITS(1) [],
        /// Protocol timer expiry
        TMR0_IE OFFSET(3) NUMBITS(1) [],
        TMR1_IE OFFSET(4) NUMBITS(1) [],
        TMR2_IE OFFSET(5) NUMBITS(1) [],
        /// Block guard time violation
        BGT_IE OFFSET(6) NUMBITS(1) [],
        /// Card detect state change
        CD_IE OFFSET(7) NUMBITS(1) [],
        /// Initial waiting time expired without ATR
        INIT_IE OFFSET(8) NUMBITS(1) [],
        /// Receive time-out
        RTMR_IE OFFSET(9) NUMBITS(1) [],
        /// Activation/deactivation sequence error
        ACERR_IE OFFSET(10) NUMBITS(1) []
    ],
    pub ISR [
        RDA_IS OFFSET(0) NUMBITS(1) [],
        TBE_IS OFFSET(1) NUMBITS(1) [],
        TERR_IS OFFSET(2) NUMBITS(1) [],
        TMR0_IS OFFSET(3) NUMBITS(1) [],
        TMR1_IS OFFSET(4) NUMBITS(1) [],
        TMR2_IS OFFSET(5) NUMBITS(1) [],
        BGT_IS OFFSET(6) NUMBITS(1) [],
        CD_IS OFFSET(7) NUMBITS(1) [],
        INIT_IS OFFSET(8) NUMBITS(1) [],
        RTMR_IS OFFSET(9) NUMBITS(1) [],
        ACERR_IS OFFSET(10) NUMBITS(1) []
    ],
    pub TRSR [
        /// RX FIFO overwritten
        RX_OVER_F OFFSET(0) NUMBITS(1) [],
        /// Parity error at FIFO head
        RX_EPA_F OFFSET(4) NUMBITS(1) [],
        /// Framing error at FIFO head
        RX_EFR_F OFFSET(5) NUMBITS(1) [],
        /// Break at FIFO head
        RX_EBR_F OFFSET(6) NUMBITS(1) [],
        /// Receiver retries exhausted
        RX_OVER_RETRY OFFSET(8) NUMBITS(1) [],
        /// Bytes in the RX FIFO
        RX_POINT_F OFFSET(12) NUMBITS(3) [],
        RX_EMPTY_F OFFSET(15) NUMBITS(1) [],
        RX_FULL_F OFFSET(16) NUMBITS(1) [],
        /// Transmitter retries exhausted
        TX_OVER_RETRY OFFSET(20) NUMBITS(1) [],
        TX_POINT_F OFFSET(24) NUMBITS(3) [],
        TX_EMPTY_F OFFSET(27) NUMBITS(1) [],
        TX_FULL_F OFFSET(28) NUMBITS(1) []
    ],
    pub PINCSR [
        /// Drive the card VCC switch
        POW_EN OFFSET(0) NUMBITS(1) [],
        /// Drive the card reset pin
        SC_RST OFFSET(1) NUMBITS(1) [],
        /// Card removed since last clear, write 1 to clear
        CD_REM_F OFFSET(2) NUMBITS(1) [],
        /// Card inserted since last clear, write 1 to clear
        CD_INS_F OFFSET(3) NUMBITS(1) [],
        /// Raw card-detect pin state
        CD_PIN_ST OFFSET(4) NUMBITS(1) [],
        /// Keep the card clock running between transfers
        CLK_KEEP OFFSET(6) NUMBITS(1) [],
        /// Card-detect polarity
        CD_LEV OFFSET(10) NUMBITS(1) [],
        /// VCC switch polarity
        POW_INV OFFSET(11) NUMBITS(1) [],
        /// Raw data line state
        SC_DATA_I_ST OFFSET(16) NUMBITS(1) []
    ],
    pub TMR [
        /// Count in ETUs
        CNT OFFSET(0) NUMBITS(24) [],
        /// Operation mode: down-count once, auto-reload, count until RX
        /// start bit, and combinations; see the timing chapter
        MODE OFFSET(24) NUMBITS(4) []
    ],
    pub UACTL [
        /// UART emulation enable; ETUCR then sets the baud rate
        UA_MODE_EN OFFSET(0) NUMBITS(1) [],
        /// Character length
        DATA_LEN OFFSET(4) NUMBITS(2) [
            Bits8 = 0,
            Bits7 = 1,
            Bits6 = 2,
            Bits5 = 3
        ],
        /// Disable parity generation/checking
        PBDIS OFFSET(6) NUMBITS(1) [],
        /// Odd parity
        OPE OFFSET(7) NUMBITS(1) []
    ],
    pub TDRA [
        TDR0 OFFSET(0) NUMBITS(24) []
    ],
    pub TDRB [
        TDR1 OFFSET(0) NUMBITS(8) [],
        TDR2 OFFSET(8) NUMBITS(8) []
    ]
];

pub const SC0_BASE: StaticRef<ScRegisters> =
    unsafe { StaticRef::new(0x4019_0000 as *const ScRegisters) };
pub const SC1_BASE: StaticRef<ScRegisters> =
    unsafe { StaticRef::new(0x4019_4000 as *const ScRegisters) };
pub const SC2_BASE: StaticRef<ScRegisters> =
    unsafe { StaticRef::new(0x4019_8000 as *const ScRegisters) };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<ScRegisters>(), 0x40);
    }

    #[test]
    fn etu_masks() {
        assert_eq!(ETUCR::ETU_RDIV.mask, 0xFFF);
        assert_eq!(TMR::MODE.mask << TMR::MODE.shift, 0x0F00_0000);
    }

    #[test]
    fn retry_masks() {
        assert_eq!(CTL::RX_ERETRY.mask << CTL::RX_ERETRY.shift, 0x0007_0000);
        assert_eq!(CTL::TX_ERETRY_EN.mask << CTL::TX_ERETRY_EN.shift, 0x0080_0000);
    }
}
