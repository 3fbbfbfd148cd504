// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! System controller (GCR).
//!
//! Part identification, reset source tracking, peripheral reset strobes,
//! brown-out detection, multi-function pin selection and the register
//! write-protection lock.
//!
//! Several registers in this block (`PORCTL`, `BODCTL`, the IP reset
//! strobes) only accept writes while the lock in `REGWRPROT` is open.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

register_structs! {
    pub SysRegisters {
        /// Part device identification number
        (0x000 => pub pdid: ReadOnly<u32>),
        /// Reset source active flags, write 1 to clear
        (0x004 => pub rst_src: ReadWrite<u32, RSTSRC::Register>),
        /// AHB peripheral reset control
        (0x008 => pub iprst_ctl1: ReadWrite<u32, IPRSTC1::Register>),
        /// APB peripheral reset control
        (0x00C => pub iprst_ctl2: ReadWrite<u32, IPRSTC2::Register>),
        (0x010 => _reserved0),
        /// Factory test controller
        (0x014 => pub itest: ReadWrite<u32, ITEST::Register>),
        (0x018 => _reserved1),
        /// Temperature sensor control
        (0x020 => pub tempctl: ReadWrite<u32, TEMPCTL::Register>),
        (0x024 => _reserved2),
        /// Port A low byte multi-function pin select (PA.0-PA.7)
        (0x030 => pub pa_l_mfp: ReadWrite<u32, MFP::Register>),
        /// Port A high byte multi-function pin select (PA.8-PA.15)
        (0x034 => pub pa_h_mfp: ReadWrite<u32, MFP::Register>),
        /// Port B low byte multi-function pin select
        (0x038 => pub pb_l_mfp: ReadWrite<u32, MFP::Register>),
        /// Port B high byte multi-function pin select
        (0x03C => pub pb_h_mfp: ReadWrite<u32, MFP::Register>),
        /// Port C low byte multi-function pin select
        (0x040 => pub pc_l_mfp: ReadWrite<u32, MFP::Register>),
        /// Port C high byte multi-function pin select
        (0x044 => pub pc_h_mfp: ReadWrite<u32, MFP::Register>),
        /// Port D low byte multi-function pin select
        (0x048 => pub pd_l_mfp: ReadWrite<u32, MFP::Register>),
        /// Port D high byte multi-function pin select
        (0x04C => pub pd_h_mfp: ReadWrite<u32, MFP::Register>),
        /// Port E low byte multi-function pin select
        (0x050 => pub pe_l_mfp: ReadWrite<u32, MFP::Register>),
        /// Port E high byte multi-function pin select
        (0x054 => pub pe_h_mfp: ReadWrite<u32, MFP::Register>),
        /// Port F multi-function pin select (PF.0-PF.5)
        (0x058 => pub pf_l_mfp: ReadWrite<u32, MFP::Register>),
        (0x05C => _reserved3),
        /// Power-on reset control
        (0x100 => pub porctl: ReadWrite<u32, PORCTL::Register>),
        /// Brown-out detector control
        (0x104 => pub bodctl: ReadWrite<u32, BODCTL::Register>),
        /// Brown-out detector status, write 1 to clear
        (0x108 => pub bodsts: ReadWrite<u32, BODSTS::Register>),
        /// Voltage reference control
        (0x10C => pub vrefctl: ReadWrite<u32, VREFCTL::Register>),
        (0x110 => _reserved4),
        /// HIRC trim control
        (0x140 => pub irctrimctl: ReadWrite<u32, IRCTRIMCTL::Register>),
        /// HIRC trim interrupt enable
        (0x144 => pub irctrimien: ReadWrite<u32, IRCTRIMIEN::Register>),
        /// HIRC trim interrupt status, write 1 to clear
        (0x148 => pub irctrimists: ReadWrite<u32, IRCTRIMISTS::Register>),
        (0x14C => _reserved5),
        /// Register write-protection lock. Unlock by writing 0x59, 0x16,
        /// 0x88 in sequence; any other value re-locks.
        (0x1FC => pub regwrprot: ReadWrite<u32, REGWRPROT::Register>),
        (0x200 => @END),
    }
}

register_bitfields![u32,
    pub RSTSRC [
        /// Power-on reset
        POR OFFSET(0) NUMBITS(1) [],
        /// nRESET pin reset
        PAD OFFSET(1) NUMBITS(1) [],
        /// Watchdog time-out reset
        WDT OFFSET(2) NUMBITS(1) [],
        /// Low-voltage reset
        LVR OFFSET(3) NUMBITS(1) [],
        /// Brown-out detector reset
        BOD OFFSET(4) NUMBITS(1) [],
        /// System reset request (AIRCR.SYSRESETREQ)
        SYS OFFSET(5) NUMBITS(1) [],
        /// CPU core reset via IPRSTC1.CPU_RST
        CPU OFFSET(7) NUMBITS(1) []
    ],
    pub IPRSTC1 [
        /// Chip one-shot reset, equivalent to a POR except RSTSRC
        CHIP_RST OFFSET(0) NUMBITS(1) [],
        /// CPU core and flash controller reset
        CPU_RST OFFSET(1) NUMBITS(1) [],
        /// DMA controller reset
        DMA_RST OFFSET(2) NUMBITS(1) [],
        /// External bus interface reset
        EBI_RST OFFSET(3) NUMBITS(1) []
    ],
    pub IPRSTC2 [
        GPIO_RST OFFSET(1) NUMBITS(1) [],
        TMR0_RST OFFSET(2) NUMBITS(1) [],
        TMR1_RST OFFSET(3) NUMBITS(1) [],
        TMR2_RST OFFSET(4) NUMBITS(1) [],
        TMR3_RST OFFSET(5) NUMBITS(1) [],
        SC2_RST OFFSET(6) NUMBITS(1) [],
        I2C0_RST OFFSET(8) NUMBITS(1) [],
        I2C1_RST OFFSET(9) NUMBITS(1) [],
        SPI0_RST OFFSET(12) NUMBITS(1) [],
        SPI1_RST OFFSET(13) NUMBITS(1) [],
        SPI2_RST OFFSET(14) NUMBITS(1) [],
        UART0_RST OFFSET(16) NUMBITS(1) [],
        UART1_RST OFFSET(17) NUMBITS(1) [],
        PWM0_RST OFFSET(20) NUMBITS(1) [],
        PWM1_RST OFFSET(21) NUMBITS(1) [],
        USBD_RST OFFSET(24) NUMBITS(1) [],
        DAC_RST OFFSET(25) NUMBITS(1) [],
        LCD_RST OFFSET(26) NUMBITS(1) [],
        ADC_RST OFFSET(28) NUMBITS(1) [],
        I2S_RST OFFSET(29) NUMBITS(1) [],
        SC0_RST OFFSET(30) NUMBITS(1) [],
        SC1_RST OFFSET(31) NUMBITS(1) []
    ],
    pub ITEST [
        /// Factory scan test mode entry key; leave at reset value
        ITESTEN OFFSET(0) NUMBITS(4) [],
        /// Analog block test bus select, factory use only
        TESTSEL OFFSET(4) NUMBITS(4) []
    ],
    pub TEMPCTL [
        /// Temperature sensor enable; output is routed to an ADC channel
        VTEMP_EN OFFSET(0) NUMBITS(1) []
    ],
    /// One multi-function select per pin, eight pins per register.
    /// The alternate function behind each encoding differs per pin; see
    /// the pin description table of the datasheet.
    pub MFP [
        PIN0 OFFSET(0) NUMBITS(4) [],
        PIN1 OFFSET(4) NUMBITS(4) [],
        PIN2 OFFSET(8) NUMBITS(4) [],
        PIN3 OFFSET(12) NUMBITS(4) [],
        PIN4 OFFSET(16) NUMBITS(4) [],
        PIN5 OFFSET(20) NUMBITS(4) [],
        PIN6 OFFSET(24) NUMBITS(4) [],
        PIN7 OFFSET(28) NUMBITS(4) []
    ],
    pub PORCTL [
        /// Writing 0x5AA5 disables the power-on reset circuit; any other
        /// value re-enables it
        POROFF OFFSET(0) NUMBITS(16) []
    ],
    pub BODCTL [
        /// 2.5V detector enable
        BOD25_EN OFFSET(0) NUMBITS(1) [],
        /// 2.0V detector enable
        BOD20_EN OFFSET(1) NUMBITS(1) [],
        /// 1.7V detector enable
        BOD17_EN OFFSET(2) NUMBITS(1) [],
        /// Reset the chip when the selected threshold trips (otherwise
        /// interrupt only)
        BOD_RST_EN OFFSET(4) NUMBITS(1) [],
        /// Glitch filter on the detector output
        BOD_FILTER_EN OFFSET(5) NUMBITS(1) [],
        /// Low-voltage reset circuit enable
        LVR_EN OFFSET(7) NUMBITS(1) []
    ],
    pub BODSTS [
        /// Any enabled detector crossed its threshold
        BOD_INT OFFSET(0) NUMBITS(1) [],
        /// AVDD dropped below 2.5V
        BOD25_DROP OFFSET(1) NUMBITS(1) [],
        BOD20_DROP OFFSET(2) NUMBITS(1) [],
        BOD17_DROP OFFSET(3) NUMBITS(1) [],
        /// AVDD rose back above 2.5V
        BOD25_RISE OFFSET(4) NUMBITS(1) [],
        BOD20_RISE OFFSET(5) NUMBITS(1) [],
        BOD17_RISE OFFSET(6) NUMBITS(1) []
    ],
    pub VREFCTL [
        /// Band-gap reference enable
        BGP_EN OFFSET(0) NUMBITS(1) [],
        /// Internal voltage regulator enable
        REG_EN OFFSET(1) NUMBITS(1) [],
        /// Reference pin voltage select
        VREF_SEL OFFSET(2) NUMBITS(2) [
            AVDD = 0,
            V1_8 = 1,
            V2_5 = 2
        ]
    ],
    pub IRCTRIMCTL [
        /// Target frequency the hardware trims the HIRC towards
        TRIM_SEL OFFSET(0) NUMBITS(2) [
            Disable = 0,
            M12 = 1,
            M11_0592 = 2
        ],
        /// Consecutive 32.768 kHz reference periods per trim comparison
        TRIM_LOOP OFFSET(4) NUMBITS(2) [
            Loop4 = 0,
            Loop8 = 1,
            Loop16 = 2,
            Loop32 = 3
        ],
        /// Retries before declaring trim failure
        TRIM_RETRY_CNT OFFSET(6) NUMBITS(2) [
            Count64 = 0,
            Count128 = 1,
            Count256 = 2,
            Count512 = 3
        ],
        /// Stop trimming when a clock error is flagged
        CLKERR_STOP_EN OFFSET(8) NUMBITS(1) []
    ],
    pub IRCTRIMIEN [
        TRIM_FAIL_IEN OFFSET(1) NUMBITS(1) [],
        CLKERR_IEN OFFSET(2) NUMBITS(1) []
    ],
    pub IRCTRIMISTS [
        /// HIRC output locked to the target frequency
        FREQ_LOCK OFFSET(0) NUMBITS(1) [],
        TRIM_FAIL_INT OFFSET(1) NUMBITS(1) [],
        CLKERR_INT OFFSET(2) NUMBITS(1) []
    ],
    pub REGWRPROT [
        /// Reads 1 while the protected registers are unlocked
        REGPROTDIS OFFSET(0) NUMBITS(1) [],
        /// Unlock key sequence port
        REGWRPROT OFFSET(0) NUMBITS(8) []
    ]
];

pub const SYS_BASE: StaticRef<SysRegisters> =
    unsafe { StaticRef::new(0x5000_0000 as *const SysRegisters) };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<SysRegisters>(), 0x200);
    }

    #[test]
    fn itest_masks() {
        assert_eq!(ITEST::ITESTEN.mask << ITEST::ITESTEN.shift, 0x0000_000F);
        assert_eq!(ITEST::TESTSEL.mask << ITEST::TESTSEL.shift, 0x0000_00F0);
    }

    #[test]
    fn bod_masks() {
        assert_eq!(RSTSRC::BOD.shift, 4);
        assert_eq!(RSTSRC::BOD.mask << RSTSRC::BOD.shift, 0x0000_0010);
        assert_eq!(BODCTL::LVR_EN.mask << BODCTL::LVR_EN.shift, 0x0000_0080);
    }

    #[test]
    fn mfp_field_masks() {
        assert_eq!(MFP::PIN0.mask << MFP::PIN0.shift, 0x0000_000F);
        assert_eq!(MFP::PIN7.mask << MFP::PIN7.shift, 0xF000_0000);
    }
}
