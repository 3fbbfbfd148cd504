// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Segment LCD controller.
//!
//! Drives up to 4 COM x 40 SEG off the 32 kHz clock domain, with an internal
//! charge pump. Segment state lives in ten display memory words; the frame
//! counter can raise a periodic interrupt for blinking.

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

register_structs! {
    pub LcdRegisters {
        (0x00 => pub ctl: ReadWrite<u32, CTL::Register>),
        /// Drive waveform, bias and charge pump control
        (0x04 => pub dispctl: ReadWrite<u32, DISPCTL::Register>),
        /// Segment pattern memory, one word per pair of SEG outputs
        (0x08 => pub mem: [ReadWrite<u32>; 10]),
        /// Frame count interrupt control
        (0x30 => pub fcr: ReadWrite<u32, FCR::Register>),
        /// Frame count status, write 1 to clear
        (0x34 => pub fcsts: ReadWrite<u32, FCSTS::Register>),
        /// Power-down display control
        (0x38 => pub ostc: ReadWrite<u32, OSTC::Register>),
        (0x3C => @END),
    }
}

register_bitfields![u32,
    pub CTL [
        EN OFFSET(0) NUMBITS(1) [],
        /// COM multiplex
        MUX OFFSET(1) NUMBITS(3) [
            Static = 0,
            Duty1_2 = 1,
            Duty1_3 = 2,
            Duty1_4 = 3
        ],
        /// Frame frequency divider from the 32 kHz source
        FREQ OFFSET(4) NUMBITS(3) [
            Div32 = 0,
            Div64 = 1,
            Div96 = 2,
            Div128 = 3,
            Div192 = 4,
            Div256 = 5,
            Div384 = 6,
            Div512 = 7
        ],
        /// All segments forced on (lamp test)
        SEG_ON OFFSET(8) NUMBITS(1) [],
        /// Display blanked without clearing memory
        BLANK OFFSET(9) NUMBITS(1) []
    ],
    pub DISPCTL [
        /// Segment/common drive waveform
        WAVEFORM OFFSET(0) NUMBITS(1) [
            TypeA = 0,
            TypeB = 1
        ],
        BIAS_SEL OFFSET(1) NUMBITS(2) [
            Static = 0,
            Bias1_2 = 1,
            Bias1_3 = 2
        ],
        /// Internal charge pump enable
        CPUMP_EN OFFSET(4) NUMBITS(1) [],
        /// Charge pump output voltage select
        CPUMP_VOL OFFSET(5) NUMBITS(3) [],
        /// Charge pump clock divider
        CPUMP_FREQ OFFSET(8) NUMBITS(3) []
    ],
    pub FCR [
        /// Frame count interrupt enable
        FCINTEN OFFSET(0) NUMBITS(1) [],
        /// Frames between interrupts, minus one
        FCV OFFSET(4) NUMBITS(6) []
    ],
    pub FCSTS [
        FCSTS OFFSET(0) NUMBITS(1) []
    ],
    pub OSTC [
        /// Keep the display running in power-down
        PD_DISP_ON OFFSET(0) NUMBITS(1) []
    ]
];

pub const LCD_BASE: StaticRef<LcdRegisters> =
    unsafe { StaticRef::new(0x400B_0000 as *const LcdRegisters) };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<LcdRegisters>(), 0x3C);
    }

    #[test]
    fn ctl_masks() {
        assert_eq!(CTL::MUX.mask << CTL::MUX.shift, 0x0000_000E);
        assert_eq!(FCR::FCV.mask << FCR::FCV.shift, 0x0000_03F0);
    }
}
