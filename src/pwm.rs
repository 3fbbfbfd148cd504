// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! PWM generator and capture timer.
//!
//! Two instances of four 16-bit channels each. Channels share prescalers in
//! pairs (0/1 and 2/3), carry a period/duty register pair, and can run the
//! pins in reverse as input capture with rising/falling latch registers.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

register_structs! {
    pub PwmRegisters {
        /// Clock prescalers and dead-zone lengths, one byte per pair
        (0x00 => pub pres: ReadWrite<u32, PRES::Register>),
        /// Per-channel clock divider select
        (0x04 => pub clksel: ReadWrite<u32, CLKSEL::Register>),
        /// Channel enables, inverters, auto-reload and dead-zone control
        (0x08 => pub ctl: ReadWrite<u32, CTL::Register>),
        /// Period interrupt enables
        (0x0C => pub inten: ReadWrite<u32, INTEN::Register>),
        /// Period interrupt flags, write 1 to clear
        (0x10 => pub intsts: ReadWrite<u32, INTSTS::Register>),
        /// Pin output enables
        (0x14 => pub oe: ReadWrite<u32, OE::Register>),
        (0x18 => _reserved0),
        /// Per-channel period/duty and current count
        (0x1C => pub ch: [PwmChannelRegisters; 4]),
        /// Capture edge control
        (0x4C => pub capctl: ReadWrite<u32, CAPCTL::Register>),
        /// Capture interrupt enables
        (0x50 => pub capinten: ReadWrite<u32, CAPINTEN::Register>),
        /// Capture interrupt flags, write 1 to clear
        (0x54 => pub capintsts: ReadWrite<u32, CAPINTSTS::Register>),
        /// Capture latches
        (0x58 => pub cap: [PwmCaptureRegisters; 4]),
        /// PDMA drain of the capture latches, even channels only
        (0x78 => pub cappdmactl: ReadWrite<u32, CAPPDMACTL::Register>),
        /// Channel 0 capture data as seen by the PDMA
        (0x7C => pub cappdmac0: ReadOnly<u32, CAPPDMABUF::Register>),
        /// Channel 2 capture data as seen by the PDMA
        (0x80 => pub cappdmac2: ReadOnly<u32, CAPPDMABUF::Register>),
        (0x84 => @END),
    },

    pub PwmChannelRegisters {
        /// CN = period - 1, CM = high duration - 1
        (0x00 => pub duty: ReadWrite<u32, DUTY::Register>),
        /// Current down-counter value
        (0x04 => pub data: ReadOnly<u32, DUTY::Register>),
        (0x08 => _reserved0),
        (0x0C => @END),
    },

    pub PwmCaptureRegisters {
        /// Counter latched on the rising input edge
        (0x00 => pub crl: ReadOnly<u32, CAPLATCH::Register>),
        /// Counter latched on the falling input edge
        (0x04 => pub cfl: ReadOnly<u32, CAPLATCH::Register>),
        (0x08 => @END),
    }
}

register_bitfields![u32,
    pub PRES [
        /// Prescaler for channels 0 and 1; 0 stops them
        CP01 OFFSET(0) NUMBITS(8) [],
        /// Prescaler for channels 2 and 3
        CP23 OFFSET(8) NUMBITS(8) [],
        /// Dead-zone length for the 0/1 complementary pair
        DZ01 OFFSET(16) NUMBITS(8) [],
        DZ23 OFFSET(24) NUMBITS(8) []
    ],
    pub CLKSEL [
        CSR0 OFFSET(0) NUMBITS(3) [
            Div2 = 0,
            Div4 = 1,
            Div8 = 2,
            Div16 = 3,
            Div1 = 4
        ],
        CSR1 OFFSET(4) NUMBITS(3) [],
        CSR2 OFFSET(8) NUMBITS(3) [],
        CSR3 OFFSET(12) NUMBITS(3) []
    ],
    pub CTL [
        CH0_EN OFFSET(0) NUMBITS(1) [],
        /// Invert the channel 0 output
        CH0_INV OFFSET(2) NUMBITS(1) [],
        /// 0 = one-shot, 1 = auto-reload
        CH0_MOD OFFSET(3) NUMBITS(1) [],
        /// Pair channels 0/1 as complementary outputs with dead zone
        DZ0_EN OFFSET(4) NUMBITS(1) [],
        DZ1_EN OFFSET(5) NUMBITS(1) [],
        CH1_EN OFFSET(8) NUMBITS(1) [],
        CH1_INV OFFSET(10) NUMBITS(1) [],
        CH1_MOD OFFSET(11) NUMBITS(1) [],
        CH2_EN OFFSET(16) NUMBITS(1) [],
        CH2_INV OFFSET(18) NUMBITS(1) [],
        CH2_MOD OFFSET(19) NUMBITS(1) [],
        CH3_EN OFFSET(24) NUMBITS(1) [],
        CH3_INV OFFSET(26) NUMBITS(1) [],
        CH3_MOD OFFSET(27) NUMBITS(1) []
    ],
    pub INTEN [
        TMIE0 OFFSET(0) NUMBITS(1) [],
        TMIE1 OFFSET(1) NUMBITS(1) [],
        TMIE2 OFFSET(2) NUMBITS(1) [],
        TMIE3 OFFSET(3) NUMBITS(1) []
    ],
    pub INTSTS [
        TMINT0 OFFSET(0) NUMBITS(1) [],
        TMINT1 OFFSET(1) NUMBITS(1) [],
        TMINT2 OFFSET(2) NUMBITS(1) [],
        TMINT3 OFFSET(3) NUMBITS(1) []
    ],
    pub OE [
        CH0 OFFSET(0) NUMBITS(1) [],
        CH1 OFFSET(1) NUMBITS(1) [],
        CH2 OFFSET(2) NUMBITS(1) [],
        CH3 OFFSET(3) NUMBITS(1) []
    ],
    pub DUTY [
        /// Period register; counter reloads at CN + 1 counts
        CN OFFSET(0) NUMBITS(16) [],
        /// Comparator; output goes high for CM + 1 counts
        CM OFFSET(16) NUMBITS(16) []
    ],
    pub CAPCTL [
        /// Invert the channel 0 capture input
        INV0 OFFSET(0) NUMBITS(1) [],
        /// Capture function enable; disables the PWM output for channel 0
        CAPCH0_EN OFFSET(3) NUMBITS(1) [],
        INV1 OFFSET(8) NUMBITS(1) [],
        CAPCH1_EN OFFSET(11) NUMBITS(1) [],
        INV2 OFFSET(16) NUMBITS(1) [],
        CAPCH2_EN OFFSET(19) NUMBITS(1) [],
        INV3 OFFSET(24) NUMBITS(1) [],
        CAPCH3_EN OFFSET(27) NUMBITS(1) []
    ],
    pub CAPINTEN [
        CRL_IE0 OFFSET(1) NUMBITS(1) [],
        CFL_IE0 OFFSET(2) NUMBITS(1) [],
        CRL_IE1 OFFSET(9) NUMBITS(1) [],
        CFL_IE1 OFFSET(10) NUMBITS(1) [],
        CRL_IE2 OFFSET(17) NUMBITS(1) [],
        CFL_IE2 OFFSET(18) NUMBITS(1) [],
        CRL_IE3 OFFSET(25) NUMBITS(1) [],
        CFL_IE3 OFFSET(26) NUMBITS(1) []
    ],
    pub CAPINTSTS [
        CAPIF0 OFFSET(0) NUMBITS(1) [],
        CRLI0 OFFSET(1) NUMBITS(1) [],
        CFLI0 OFFSET(2) NUMBITS(1) [],
        CAPIF1 OFFSET(8) NUMBITS(1) [],
        CRLI1 OFFSET(9) NUMBITS(1) [],
        CFLI1 OFFSET(10) NUMBITS(1) [],
        CAPIF2 OFFSET(16) NUMBITS(1) [],
        CRLI2 OFFSET(17) NUMBITS(1) [],
        CFLI2 OFFSET(18) NUMBITS(1) [],
        CAPIF3 OFFSET(24) NUMBITS(1) [],
        CRLI3 OFFSET(25) NUMBITS(1) [],
        CFLI3 OFFSET(26) NUMBITS(1) []
    ],
    pub CAPLATCH [
        CAP OFFSET(0) NUMBITS(16) []
    ],
    pub CAPPDMACTL [
        CAP0PDMAEN OFFSET(0) NUMBITS(1) [],
        /// Which channel 0 latches the PDMA drains
        CAP0PDMAMODE OFFSET(1) NUMBITS(2) [
            Rising = 1,
            Falling = 2,
            Both = 3
        ],
        /// Rising latch transferred first when draining both
        CAP0RFORDER OFFSET(3) NUMBITS(1) [],
        CAP2PDMAEN OFFSET(8) NUMBITS(1) [],
        CAP2PDMAMODE OFFSET(9) NUMBITS(2) [
            Rising = 1,
            Falling = 2,
            Both = 3
        ],
        CAP2RFORDER OFFSET(11) NUMBITS(1) []
    ],
    pub CAPPDMABUF [
        CAPBUF OFFSET(0) NUMBITS(16) []
    ]
];

pub const PWM0_BASE: StaticRef<PwmRegisters> =
    unsafe { StaticRef::new(0x4004_0000 as *const PwmRegisters) };
pub const PWM1_BASE: StaticRef<PwmRegisters> =
    unsafe { StaticRef::new(0x4014_0000 as *const PwmRegisters) };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_sizes() {
        assert_eq!(core::mem::size_of::<PwmChannelRegisters>(), 0x0C);
        assert_eq!(core::mem::size_of::<PwmCaptureRegisters>(), 0x08);
        assert_eq!(core::mem::size_of::<PwmRegisters>(), 0x84);
    }

    #[test]
    fn prescaler_masks() {
        assert_eq!(PRES::CP23.mask << PRES::CP23.shift, 0x0000_FF00);
        assert_eq!(PRES::DZ23.mask << PRES::DZ23.shift, 0xFF00_0000);
    }

    #[test]
    fn duty_halves() {
        assert_eq!(DUTY::CN.mask, 0xFFFF);
        assert_eq!(DUTY::CM.shift, 16);
    }

    #[test]
    fn capture_pdma_masks() {
        assert_eq!(
            CAPPDMACTL::CAP0PDMAMODE.mask << CAPPDMACTL::CAP0PDMAMODE.shift,
            0x0000_0006
        );
        assert_eq!(
            CAPPDMACTL::CAP2PDMAEN.mask << CAPPDMACTL::CAP2PDMAEN.shift,
            0x0000_0100
        );
        assert_eq!(CAPPDMABUF::CAPBUF.mask, 0xFFFF);
    }
}
