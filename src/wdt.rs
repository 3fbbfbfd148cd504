// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Watchdog timer.
//!
//! Free-running counter with eight interval selections; expiry can raise an
//! interrupt, wake the chip from power-down, and (after an additional delay
//! without a counter reset) reset the chip. All three registers are
//! write-protected behind `SYS.REGWRPROT`.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

register_structs! {
    pub WdtRegisters {
        (0x00 => pub ctl: ReadWrite<u32, CTL::Register>),
        (0x04 => pub ier: ReadWrite<u32, IER::Register>),
        /// Status flags, write 1 to clear
        (0x08 => pub isr: ReadWrite<u32, ISR::Register>),
        (0x0C => @END),
    }
}

register_bitfields![u32,
    pub CTL [
        /// Restart the counter. Self-clearing.
        WTR OFFSET(0) NUMBITS(1) [],
        /// Reset the chip when the time-out is not serviced
        WTRE OFFSET(1) NUMBITS(1) [],
        /// Wake from power-down on time-out
        WTWKE OFFSET(4) NUMBITS(1) [],
        /// Counter enable
        WTE OFFSET(7) NUMBITS(1) [],
        /// Time-out interval = 2^(4 + 2*WTIS) watchdog clocks
        WTIS OFFSET(8) NUMBITS(3) []
    ],
    pub IER [
        WDT_IE OFFSET(0) NUMBITS(1) []
    ],
    pub ISR [
        /// Time-out interrupt flag
        WDT_IS OFFSET(0) NUMBITS(1) [],
        /// Time-out caused a chip reset
        WDT_RST_IS OFFSET(1) NUMBITS(1) [],
        /// Time-out woke the chip from power-down
        WDT_WAKE_IS OFFSET(2) NUMBITS(1) []
    ]
];

pub const WDT_BASE: StaticRef<WdtRegisters> =
    unsafe { StaticRef::new(0x4000_4000 as *const WdtRegisters) };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<WdtRegisters>(), 0x0C);
    }

    #[test]
    fn ctl_masks() {
        assert_eq!(CTL::WTE.mask << CTL::WTE.shift, 0x0000_0080);
        assert_eq!(CTL::WTIS.mask << CTL::WTIS.shift, 0x0000_0700);
    }
}
