// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! General-purpose 24-bit timers.
//!
//! Four identical channels: TMR0/TMR1 on APB1, TMR2/TMR3 on APB2, paired at
//! a 0x20 stride. Each counts a prescaled peripheral clock up to `CMPR` in
//! one-shot, periodic, toggle-output or continuous mode, with an external
//! event counter input and a capture pin that can latch or reset the
//! counter.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

register_structs! {
    pub TimerRegisters {
        (0x00 => pub ctl: ReadWrite<u32, CTL::Register>),
        /// 8-bit prescale; counter clock = source / (PRESCALE + 1)
        (0x04 => pub precnt: ReadWrite<u32, PRECNT::Register>),
        /// Compare (time-out) value, must be >= 2
        (0x08 => pub cmpr: ReadWrite<u32, CMPR::Register>),
        (0x0C => pub ier: ReadWrite<u32, IER::Register>),
        /// Interrupt flags, write 1 to clear
        (0x10 => pub isr: ReadWrite<u32, ISR::Register>),
        /// Current counter value
        (0x14 => pub dr: ReadOnly<u32, DR::Register>),
        /// Capture latch
        (0x18 => pub tcap: ReadOnly<u32, DR::Register>),
        /// External pin control
        (0x1C => pub ectl: ReadWrite<u32, ECTL::Register>),
        (0x20 => @END),
    }
}

register_bitfields![u32,
    pub CTL [
        /// Counter enable
        TMR_EN OFFSET(0) NUMBITS(1) [],
        /// Reset counter, prescale counter and mode state. Self-clearing.
        SW_RST OFFSET(1) NUMBITS(1) [],
        /// Time-out wakes the chip from idle/power-down
        WAKE_EN OFFSET(2) NUMBITS(1) [],
        /// Halt the counter while the core is halted by the debugger
        DBGACK_EN OFFSET(3) NUMBITS(1) [],
        MODE_SEL OFFSET(4) NUMBITS(2) [
            Oneshot = 0,
            Periodic = 1,
            Toggle = 2,
            Continuous = 3
        ],
        /// Counter is running (synchronized to the timer clock domain)
        TMR_ACT OFFSET(25) NUMBITS(1) []
    ],
    pub PRECNT [
        PRESCALE OFFSET(0) NUMBITS(8) []
    ],
    pub CMPR [
        TCMP OFFSET(0) NUMBITS(24) []
    ],
    pub IER [
        /// Time-out interrupt enable
        TMR_IE OFFSET(0) NUMBITS(1) [],
        /// Capture interrupt enable
        TCAP_IE OFFSET(1) NUMBITS(1) []
    ],
    pub ISR [
        TMR_IS OFFSET(0) NUMBITS(1) [],
        TCAP_IS OFFSET(1) NUMBITS(1) [],
        /// The time-out woke the chip
        TMR_WAKE_STS OFFSET(4) NUMBITS(1) []
    ],
    pub DR [
        TDR OFFSET(0) NUMBITS(24) []
    ],
    pub ECTL [
        /// Count transitions on the TMx pin instead of the clock
        EVNT_EN OFFSET(0) NUMBITS(1) [],
        EVNT_EDGE OFFSET(1) NUMBITS(1) [
            Falling = 0,
            Rising = 1
        ],
        /// Capture pin function enable
        TCAP_EN OFFSET(4) NUMBITS(1) [],
        /// 0 = capture the counter, 1 = reset it
        TCAP_MODE OFFSET(5) NUMBITS(1) [],
        TCAP_EDGE OFFSET(6) NUMBITS(2) [
            Falling = 0,
            Rising = 1,
            Both = 2
        ],
        /// Debounce the capture/event inputs
        TCAP_DEB_EN OFFSET(8) NUMBITS(1) []
    ]
];

pub const TMR0_BASE: StaticRef<TimerRegisters> =
    unsafe { StaticRef::new(0x4001_0000 as *const TimerRegisters) };
pub const TMR1_BASE: StaticRef<TimerRegisters> =
    unsafe { StaticRef::new(0x4001_0020 as *const TimerRegisters) };
pub const TMR2_BASE: StaticRef<TimerRegisters> =
    unsafe { StaticRef::new(0x4011_0000 as *const TimerRegisters) };
pub const TMR3_BASE: StaticRef<TimerRegisters> =
    unsafe { StaticRef::new(0x4011_0020 as *const TimerRegisters) };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_size() {
        // Two channels pack back to back at the 0x20 stride.
        assert_eq!(core::mem::size_of::<TimerRegisters>(), 0x20);
    }

    #[test]
    fn ctl_masks() {
        assert_eq!(CTL::MODE_SEL.mask << CTL::MODE_SEL.shift, 0x0000_0030);
        assert_eq!(CTL::TMR_ACT.mask << CTL::TMR_ACT.shift, 0x0200_0000);
        assert_eq!(CMPR::TCMP.mask, 0x00FF_FFFF);
    }
}
