// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! I2C serial interface.
//!
//! Two master/slave controllers. The protocol engine advances on the
//! `INTSTS` flag: hardware sets it at every bus event, publishes a status
//! code in `STATUS`, and stretches SCL until software clears the flag.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

register_structs! {
    pub I2cRegisters {
        /// Control: bus signals and engine enable
        (0x00 => pub con: ReadWrite<u32, CON::Register>),
        /// Event flag, write 1 to clear
        (0x04 => pub intsts: ReadWrite<u32, INTSTS::Register>),
        /// Bus status code
        (0x08 => pub status: ReadOnly<u32, STATUS::Register>),
        /// SCL divider: SCL = PCLK / (4 * (DIV + 1))
        (0x0C => pub div: ReadWrite<u32, DIV::Register>),
        /// SCL low time-out detector
        (0x10 => pub tout: ReadWrite<u32, TOUT::Register>),
        /// Transmit/receive data byte
        (0x14 => pub data: ReadWrite<u32, DATA::Register>),
        /// Slave address 0
        (0x18 => pub saddr0: ReadWrite<u32, SADDR::Register>),
        /// Slave address 1
        (0x1C => pub saddr1: ReadWrite<u32, SADDR::Register>),
        /// Slave address 0 compare mask
        (0x20 => pub samask0: ReadWrite<u32, SAMASK::Register>),
        /// Slave address 1 compare mask
        (0x24 => pub samask1: ReadWrite<u32, SAMASK::Register>),
        (0x28 => _reserved0),
        /// Wake-up on address match in power-down
        (0x3C => pub wkupcon: ReadWrite<u32, WKUPCON::Register>),
        /// Wake-up status, write 1 to clear
        (0x40 => pub wkupsts: ReadWrite<u32, WKUPSTS::Register>),
        (0x44 => @END),
    }
}

register_bitfields![u32,
    pub CON [
        /// Engine enable
        IPEN OFFSET(0) NUMBITS(1) [],
        /// ACK the next received byte
        ACK OFFSET(1) NUMBITS(1) [],
        /// Issue STOP. Hardware clears it once the bus is released.
        STOP OFFSET(2) NUMBITS(1) [],
        /// Issue START (or repeated START) when the bus allows
        START OFFSET(3) NUMBITS(1) [],
        /// Event interrupt enable
        INTEN OFFSET(7) NUMBITS(1) []
    ],
    pub INTSTS [
        /// Bus event pending; SCL is held low until cleared
        INTSTS OFFSET(0) NUMBITS(1) [],
        /// SCL low time-out fired
        TIF OFFSET(2) NUMBITS(1) []
    ],
    pub STATUS [
        /// Event status code, e.g. 0x08 START sent, 0x18 SLA+W ACKed,
        /// 0x50 data received, 0xF8 idle
        STATUS OFFSET(0) NUMBITS(8) []
    ],
    pub DIV [
        CLK_DIV OFFSET(0) NUMBITS(8) []
    ],
    pub TOUT [
        /// Time-out counter enable
        TOUTEN OFFSET(0) NUMBITS(1) [],
        /// Prescale the time-out counter input by 4
        DIV4 OFFSET(1) NUMBITS(1) []
    ],
    pub DATA [
        DATA OFFSET(0) NUMBITS(8) []
    ],
    pub SADDR [
        /// Respond to the general call address
        GCALL OFFSET(0) NUMBITS(1) [],
        SADDR OFFSET(1) NUMBITS(7) []
    ],
    pub SAMASK [
        /// A set bit makes that address bit a don't-care in the compare
        SAMASK OFFSET(1) NUMBITS(7) []
    ],
    pub WKUPCON [
        WKUPEN OFFSET(0) NUMBITS(1) []
    ],
    pub WKUPSTS [
        WKUPIF OFFSET(0) NUMBITS(1) []
    ]
];

pub const I2C0_BASE: StaticRef<I2cRegisters> =
    unsafe { StaticRef::new(0x4002_0000 as *const I2cRegisters) };
pub const I2C1_BASE: StaticRef<I2cRegisters> =
    unsafe { StaticRef::new(0x4012_0000 as *const I2cRegisters) };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<I2cRegisters>(), 0x44);
    }

    #[test]
    fn address_masks() {
        assert_eq!(SADDR::SADDR.mask << SADDR::SADDR.shift, 0x0000_00FE);
        assert_eq!(SADDR::GCALL.mask << SADDR::GCALL.shift, 0x0000_0001);
    }
}
