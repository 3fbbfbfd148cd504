// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Real-time clock.
//!
//! BCD calendar and time-of-day counters off the 32.768 kHz crystal, with
//! frequency compensation, alarm and periodic tick interrupts, and 24 spare
//! words that survive power-down.
//!
//! After reset the block ignores writes until the init key 0xA5EB1357 lands
//! in `INIR`; time/calendar/alarm registers additionally require the access
//! key 0xA965 in `AER`, which expires about a second after it is written.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

register_structs! {
    pub RtcRegisters {
        /// Init key port; reads 1 once the block is active
        (0x00 => pub inir: ReadWrite<u32, INIR::Register>),
        /// Access key port
        (0x04 => pub aer: ReadWrite<u32, AER::Register>),
        /// 32.768 kHz frequency compensation
        (0x08 => pub fcr: ReadWrite<u32, FCR::Register>),
        /// Time of day, BCD
        (0x0C => pub tlr: ReadWrite<u32, TLR::Register>),
        /// Calendar date, BCD
        (0x10 => pub clr: ReadWrite<u32, CLR::Register>),
        /// 12/24 hour format select
        (0x14 => pub tssr: ReadWrite<u32, TSSR::Register>),
        /// Day of week
        (0x18 => pub dwr: ReadWrite<u32, DWR::Register>),
        /// Time alarm, BCD
        (0x1C => pub tar: ReadWrite<u32, TLR::Register>),
        /// Calendar alarm, BCD
        (0x20 => pub car: ReadWrite<u32, CLR::Register>),
        /// Leap year indicator
        (0x24 => pub lir: ReadOnly<u32, LIR::Register>),
        /// Interrupt enables
        (0x28 => pub rier: ReadWrite<u32, RIER::Register>),
        /// Interrupt flags, write 1 to clear
        (0x2C => pub riir: ReadWrite<u32, RIIR::Register>),
        /// Periodic tick rate
        (0x30 => pub ttr: ReadWrite<u32, TTR::Register>),
        (0x34 => _reserved0),
        /// Spare register access control
        (0x3C => pub sprctl: ReadWrite<u32, SPRCTL::Register>),
        /// Battery-backed spare words
        (0x40 => pub spr: [ReadWrite<u32>; 24]),
        (0xA0 => @END),
    }
}

register_bitfields![u32,
    pub INIR [
        /// Write 0xA5EB1357 to activate; bit 0 reads back active state
        INIR OFFSET(0) NUMBITS(32) []
    ],
    pub AER [
        /// Write 0xA965 to open register access for ~1 second
        AER OFFSET(0) NUMBITS(16) [],
        /// Access window currently open
        ENF OFFSET(16) NUMBITS(1) []
    ],
    pub FCR [
        /// Fractional compensation, 1/60 second units
        FRACTION OFFSET(0) NUMBITS(6) [],
        /// Integer compensation, offset from 32761 Hz
        INTEGER OFFSET(8) NUMBITS(4) []
    ],
    pub TLR [
        SEC1 OFFSET(0) NUMBITS(4) [],
        SEC10 OFFSET(4) NUMBITS(3) [],
        MIN1 OFFSET(8) NUMBITS(4) [],
        MIN10 OFFSET(12) NUMBITS(3) [],
        HR1 OFFSET(16) NUMBITS(4) [],
        HR10 OFFSET(20) NUMBITS(2) []
    ],
    pub CLR [
        DAY1 OFFSET(0) NUMBITS(4) [],
        DAY10 OFFSET(4) NUMBITS(2) [],
        MON1 OFFSET(8) NUMBITS(4) [],
        MON10 OFFSET(12) NUMBITS(1) [],
        YEAR1 OFFSET(16) NUMBITS(4) [],
        YEAR10 OFFSET(20) NUMBITS(4) []
    ],
    pub TSSR [
        HR24 OFFSET(0) NUMBITS(1) [
            Hours12 = 0,
            Hours24 = 1
        ]
    ],
    pub DWR [
        /// 0 = Sunday
        DWR OFFSET(0) NUMBITS(3) []
    ],
    pub LIR [
        /// Current year is a leap year
        LIR OFFSET(0) NUMBITS(1) []
    ],
    pub RIER [
        /// Alarm interrupt enable
        AIER OFFSET(0) NUMBITS(1) [],
        /// Tick interrupt enable
        TIER OFFSET(1) NUMBITS(1) [],
        /// Snoop (tamper pin) detection interrupt enable
        SIER OFFSET(2) NUMBITS(1) []
    ],
    pub RIIR [
        AI OFFSET(0) NUMBITS(1) [],
        TI OFFSET(1) NUMBITS(1) [],
        SI OFFSET(2) NUMBITS(1) []
    ],
    pub TTR [
        /// Tick rate = 1/2^TTR seconds
        TTR OFFSET(0) NUMBITS(3) [],
        /// Tick wakes the chip from power-down
        TWKE OFFSET(3) NUMBITS(1) []
    ],
    pub SPRCTL [
        /// Snoop detection enable; a tamper event clears the spare words
        SNOOPEN OFFSET(0) NUMBITS(1) [],
        /// Snoop pin active edge
        SNOOPEDGE OFFSET(1) NUMBITS(1) [
            Rising = 0,
            Falling = 1
        ],
        /// Spare registers ready for access
        SPRRDY OFFSET(7) NUMBITS(1) []
    ]
];

pub const RTC_BASE: StaticRef<RtcRegisters> =
    unsafe { StaticRef::new(0x4000_8000 as *const RtcRegisters) };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<RtcRegisters>(), 0xA0);
    }

    #[test]
    fn bcd_field_masks() {
        assert_eq!(TLR::SEC10.mask << TLR::SEC10.shift, 0x0000_0070);
        assert_eq!(TLR::HR10.mask << TLR::HR10.shift, 0x0030_0000);
        assert_eq!(CLR::YEAR10.mask << CLR::YEAR10.shift, 0x00F0_0000);
    }
}
