// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Window watchdog timer.
//!
//! Down-counter that must be reloaded inside the comparator window: a reload
//! while the counter is above `CMPDAT` resets the chip, as does reaching
//! zero. Reload happens by writing the key 0x00005AA5 to `RLD`.

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

register_structs! {
    pub WwdtRegisters {
        /// Reload key port (0x00005AA5)
        (0x00 => pub rld: WriteOnly<u32, RLD::Register>),
        (0x04 => pub cr: ReadWrite<u32, CR::Register>),
        (0x08 => pub ier: ReadWrite<u32, IER::Register>),
        /// Status flags, write 1 to clear
        (0x0C => pub sts: ReadWrite<u32, STS::Register>),
        /// Current counter value
        (0x10 => pub val: ReadOnly<u32, VAL::Register>),
        (0x14 => @END),
    }
}

register_bitfields![u32,
    pub RLD [
        RLD OFFSET(0) NUMBITS(32) []
    ],
    pub CR [
        /// Counter enable. Once set, CR writes are ignored until reset.
        WWDTEN OFFSET(0) NUMBITS(1) [],
        /// Counter clock = WWDT clock / 2^PERIODSEL
        PERIODSEL OFFSET(8) NUMBITS(4) [],
        /// Window comparator; reloads are legal only at or below this value
        CMPDAT OFFSET(16) NUMBITS(6) []
    ],
    pub IER [
        /// Interrupt when the counter crosses CMPDAT
        WWDTIE OFFSET(0) NUMBITS(1) []
    ],
    pub STS [
        /// Compare-match interrupt flag
        IF OFFSET(0) NUMBITS(1) [],
        /// The WWDT caused the last reset
        RF OFFSET(1) NUMBITS(1) []
    ],
    pub VAL [
        VAL OFFSET(0) NUMBITS(6) []
    ]
];

pub const WWDT_BASE: StaticRef<WwdtRegisters> =
    unsafe { StaticRef::new(0x4000_4100 as *const WwdtRegisters) };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<WwdtRegisters>(), 0x14);
    }

    #[test]
    fn window_masks() {
        assert_eq!(CR::CMPDAT.mask << CR::CMPDAT.shift, 0x003F_0000);
        assert_eq!(VAL::VAL.mask, 0x3F);
    }
}
