// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! 12-bit SAR analog-to-digital converter.
//!
//! 18 input channels: 16 external pins plus the internal band-gap and
//! temperature sensor taps. Scans run single, single-cycle or continuous
//! over the channels enabled in `CHER`, with two window comparators, PDMA
//! transfer of results, and hardware self-calibration.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

register_structs! {
    pub AdcRegisters {
        /// Conversion results, one per channel
        (0x00 => pub result: [ReadOnly<u32, RESULT::Register>; 18]),
        (0x48 => pub cr: ReadWrite<u32, CR::Register>),
        /// Channel enable mask
        (0x4C => pub cher: ReadWrite<u32, CHER::Register>),
        /// Window comparator 0
        (0x50 => pub cmp0: ReadWrite<u32, CMP::Register>),
        /// Window comparator 1
        (0x54 => pub cmp1: ReadWrite<u32, CMP::Register>),
        /// Status flags, write 1 to clear
        (0x58 => pub sr: ReadWrite<u32, SR::Register>),
        (0x5C => _reserved0),
        /// Current result word for PDMA transfers
        (0x60 => pub pdmadata: ReadOnly<u32, RESULT::Register>),
        (0x64 => _reserved1),
        /// Power management
        (0x74 => pub pwrctl: ReadWrite<u32, PWRCTL::Register>),
        /// Calibration control
        (0x78 => pub calctl: ReadWrite<u32, CALCTL::Register>),
        /// Calibration word load port
        (0x7C => pub calword: ReadWrite<u32, CALWORD::Register>),
        /// Per-channel sampling time, channels 0-7
        (0x80 => pub smplcnt0: ReadWrite<u32, SMPLCNT::Register>),
        /// Per-channel sampling time, channels 8-15
        (0x84 => pub smplcnt1: ReadWrite<u32, SMPLCNT::Register>),
        (0x88 => @END),
    }
}

register_bitfields![u32,
    pub RESULT [
        RSLT OFFSET(0) NUMBITS(12) [],
        /// A later result arrived before this one was read
        OVERRUN OFFSET(16) NUMBITS(1) [],
        /// Result not yet read
        VALID OFFSET(17) NUMBITS(1) []
    ],
    pub CR [
        ADEN OFFSET(0) NUMBITS(1) [],
        /// End-of-scan interrupt enable
        ADIE OFFSET(1) NUMBITS(1) [],
        ADMD OFFSET(2) NUMBITS(2) [
            Single = 0,
            SingleCycle = 2,
            Continuous = 3
        ],
        /// Hardware trigger source (when TRGEN)
        TRGS OFFSET(4) NUMBITS(2) [
            Stadc = 0,
            Pwm = 3
        ],
        /// Trigger condition for the STADC pin
        TRGCOND OFFSET(6) NUMBITS(2) [
            LowLevel = 0,
            HighLevel = 1,
            FallingEdge = 2,
            RisingEdge = 3
        ],
        TRGEN OFFSET(8) NUMBITS(1) [],
        /// PDMA request on each result
        PTEN OFFSET(9) NUMBITS(1) [],
        /// Converter resolution
        RESSEL OFFSET(12) NUMBITS(2) [
            Bits12 = 0,
            Bits10 = 1,
            Bits8 = 2
        ]
    ],
    pub CHER [
        /// One bit per channel; 16/17 select band-gap and temperature
        CHEN OFFSET(0) NUMBITS(18) []
    ],
    pub CMP [
        CMPEN OFFSET(0) NUMBITS(1) [],
        CMPIE OFFSET(1) NUMBITS(1) [],
        CMPCOND OFFSET(2) NUMBITS(1) [
            LessThan = 0,
            GreaterOrEqual = 1
        ],
        /// Channel the comparator watches
        CMPCH OFFSET(3) NUMBITS(5) [],
        /// Consecutive matches before the flag raises, minus one
        CMPMATCNT OFFSET(8) NUMBITS(4) [],
        /// 12-bit compare threshold
        CMPD OFFSET(16) NUMBITS(12) []
    ],
    pub SR [
        /// End of scan
        ADF OFFSET(0) NUMBITS(1) [],
        CMPF0 OFFSET(1) NUMBITS(1) [],
        CMPF1 OFFSET(2) NUMBITS(1) [],
        /// Conversion in progress
        BUSY OFFSET(3) NUMBITS(1) [],
        /// Channel currently converting
        CHANNEL OFFSET(4) NUMBITS(5) [],
        /// Power-up and calibration sequencing finished
        INITRDY OFFSET(24) NUMBITS(1) []
    ],
    pub PWRCTL [
        /// Converter analog power state
        PWUPRDY OFFSET(0) NUMBITS(1) [],
        /// Recalibrate automatically after each power-up
        PWDCALEN OFFSET(1) NUMBITS(1) [],
        /// Behavior of the analog block in chip power-down
        PWDMOD OFFSET(2) NUMBITS(2) [
            Deep = 0,
            Standby = 2
        ]
    ],
    pub CALCTL [
        /// Calibration machine enable
        CALEN OFFSET(0) NUMBITS(1) [],
        /// Start a calibration run. Self-clearing.
        CALSTART OFFSET(1) NUMBITS(1) [],
        /// Calibration finished
        CALDONE OFFSET(2) NUMBITS(1) [],
        /// Load CALWORD instead of measuring
        CALLOAD OFFSET(3) NUMBITS(1) []
    ],
    pub CALWORD [
        CALWORD OFFSET(0) NUMBITS(7) []
    ],
    /// Sampling cycles per channel, 4 bits each; extend for high source
    /// impedance
    pub SMPLCNT [
        CH0 OFFSET(0) NUMBITS(4) [],
        CH1 OFFSET(4) NUMBITS(4) [],
        CH2 OFFSET(8) NUMBITS(4) [],
        CH3 OFFSET(12) NUMBITS(4) [],
        CH4 OFFSET(16) NUMBITS(4) [],
        CH5 OFFSET(20) NUMBITS(4) [],
        CH6 OFFSET(24) NUMBITS(4) [],
        CH7 OFFSET(28) NUMBITS(4) []
    ]
];

pub const ADC_BASE: StaticRef<AdcRegisters> =
    unsafe { StaticRef::new(0x400E_0000 as *const AdcRegisters) };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<AdcRegisters>(), 0x88);
    }

    #[test]
    fn result_masks() {
        assert_eq!(RESULT::RSLT.mask, 0xFFF);
        assert_eq!(RESULT::VALID.mask << RESULT::VALID.shift, 0x0002_0000);
    }

    #[test]
    fn cmp_masks() {
        assert_eq!(CMP::CMPCH.mask << CMP::CMPCH.shift, 0x0000_00F8);
        assert_eq!(CMP::CMPD.mask << CMP::CMPD.shift, 0x0FFF_0000);
    }

    #[test]
    fn channel_enable_width() {
        assert_eq!(CHER::CHEN.mask, 0x3_FFFF);
    }
}
