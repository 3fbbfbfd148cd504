// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! Clock controller.
//!
//! Oscillator power control, AHB/APB clock gating, clock source multiplexers,
//! clock dividers, the PLL, and the frequency-divider output.
//!
//! `PWRCTL`, `CLKSEL0`, `PLLCTL` and the power-down bits are write-protected
//! behind `SYS.REGWRPROT`.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

register_structs! {
    pub ClkRegisters {
        /// Oscillator enables and power-down control
        (0x00 => pub pwrctl: ReadWrite<u32, PWRCTL::Register>),
        /// AHB device clock gates
        (0x04 => pub ahbclk: ReadWrite<u32, AHBCLK::Register>),
        /// APB device clock gates
        (0x08 => pub apbclk: ReadWrite<u32, APBCLK::Register>),
        /// Oscillator and PLL stable flags
        (0x0C => pub clkstatus: ReadOnly<u32, CLKSTATUS::Register>),
        /// Core clock source select
        (0x10 => pub clksel0: ReadWrite<u32, CLKSEL0::Register>),
        /// Peripheral clock source select
        (0x14 => pub clksel1: ReadWrite<u32, CLKSEL1::Register>),
        /// Peripheral clock source select
        (0x18 => pub clksel2: ReadWrite<u32, CLKSEL2::Register>),
        /// Clock dividers
        (0x1C => pub clkdiv0: ReadWrite<u32, CLKDIV0::Register>),
        /// Smartcard clock dividers
        (0x20 => pub clkdiv1: ReadWrite<u32, CLKDIV1::Register>),
        /// PLL control
        (0x24 => pub pllctl: ReadWrite<u32, PLLCTL::Register>),
        /// Frequency divider output control
        (0x28 => pub frqdiv: ReadWrite<u32, FRQDIV::Register>),
        /// Power-down wake-up interrupt status, write 1 to clear
        (0x2C => pub wkintsts: ReadWrite<u32, WKINTSTS::Register>),
        (0x30 => @END),
    }
}

register_bitfields![u32,
    pub PWRCTL [
        /// 4-24 MHz external crystal enable
        HXT_EN OFFSET(0) NUMBITS(1) [],
        /// 32.768 kHz external crystal enable
        LXT_EN OFFSET(1) NUMBITS(1) [],
        /// 12 MHz internal oscillator enable
        HIRC_EN OFFSET(2) NUMBITS(1) [],
        /// 10 kHz internal oscillator enable
        LIRC_EN OFFSET(3) NUMBITS(1) [],
        /// Wake-up delay counter enable
        WK_DLY OFFSET(4) NUMBITS(1) [],
        /// Interrupt on power-down wake-up
        PD_WK_IE OFFSET(5) NUMBITS(1) [],
        /// Enter power-down on WFI. Self-clearing, write-protected.
        PD_EN OFFSET(6) NUMBITS(1) [],
        /// Keep the HXT/HIRC running in power-down
        PD_32K_EN OFFSET(8) NUMBITS(1) []
    ],
    pub AHBCLK [
        GPIO_EN OFFSET(0) NUMBITS(1) [],
        DMA_EN OFFSET(1) NUMBITS(1) [],
        ISP_EN OFFSET(2) NUMBITS(1) [],
        EBI_EN OFFSET(3) NUMBITS(1) [],
        SRAM_EN OFFSET(4) NUMBITS(1) [],
        TICK_EN OFFSET(5) NUMBITS(1) []
    ],
    pub APBCLK [
        WDT_EN OFFSET(0) NUMBITS(1) [],
        RTC_EN OFFSET(1) NUMBITS(1) [],
        TMR0_EN OFFSET(2) NUMBITS(1) [],
        TMR1_EN OFFSET(3) NUMBITS(1) [],
        TMR2_EN OFFSET(4) NUMBITS(1) [],
        TMR3_EN OFFSET(5) NUMBITS(1) [],
        /// FDIV output pin clock
        FDIV_EN OFFSET(6) NUMBITS(1) [],
        SC2_EN OFFSET(7) NUMBITS(1) [],
        I2C0_EN OFFSET(8) NUMBITS(1) [],
        I2C1_EN OFFSET(9) NUMBITS(1) [],
        SPI0_EN OFFSET(12) NUMBITS(1) [],
        SPI1_EN OFFSET(13) NUMBITS(1) [],
        SPI2_EN OFFSET(14) NUMBITS(1) [],
        UART0_EN OFFSET(16) NUMBITS(1) [],
        UART1_EN OFFSET(17) NUMBITS(1) [],
        PWM0_CH01_EN OFFSET(20) NUMBITS(1) [],
        PWM0_CH23_EN OFFSET(21) NUMBITS(1) [],
        PWM1_CH01_EN OFFSET(22) NUMBITS(1) [],
        PWM1_CH23_EN OFFSET(23) NUMBITS(1) [],
        DAC_EN OFFSET(24) NUMBITS(1) [],
        LCD_EN OFFSET(25) NUMBITS(1) [],
        USBD_EN OFFSET(27) NUMBITS(1) [],
        ADC_EN OFFSET(28) NUMBITS(1) [],
        I2S_EN OFFSET(29) NUMBITS(1) [],
        SC0_EN OFFSET(30) NUMBITS(1) [],
        SC1_EN OFFSET(31) NUMBITS(1) []
    ],
    pub CLKSTATUS [
        /// HXT stable
        HXT_STB OFFSET(0) NUMBITS(1) [],
        /// LXT stable
        LXT_STB OFFSET(1) NUMBITS(1) [],
        /// PLL locked
        PLL_STB OFFSET(2) NUMBITS(1) [],
        /// LIRC stable
        LIRC_STB OFFSET(3) NUMBITS(1) [],
        /// HIRC stable
        HIRC_STB OFFSET(4) NUMBITS(1) [],
        /// The last HCLK mux switch referenced a stopped clock and fell
        /// back to HIRC. Write 1 to clear.
        CLK_SW_FAIL OFFSET(7) NUMBITS(1) []
    ],
    pub CLKSEL0 [
        /// HCLK source. Write-protected.
        HCLK_S OFFSET(0) NUMBITS(3) [
            HXT = 0,
            LXT = 1,
            PLL = 2,
            LIRC = 3,
            HIRC = 7
        ],
        /// Cortex-M0 SysTick reference
        STCLK_S OFFSET(3) NUMBITS(3) [
            HXT = 0,
            LXT = 1,
            HXTdiv2 = 2,
            HCLKdiv2 = 3,
            HIRCdiv2 = 7
        ]
    ],
    pub CLKSEL1 [
        UART_S OFFSET(0) NUMBITS(2) [
            HXT = 0,
            LXT = 1,
            PLL = 2,
            HIRC = 3
        ],
        ADC_S OFFSET(2) NUMBITS(2) [
            HXT = 0,
            LXT = 1,
            PLL = 2,
            HIRC = 3
        ],
        PWM0_CH01_S OFFSET(4) NUMBITS(2) [
            HXT = 0,
            LXT = 1,
            HCLK = 2,
            HIRC = 3
        ],
        PWM0_CH23_S OFFSET(6) NUMBITS(2) [
            HXT = 0,
            LXT = 1,
            HCLK = 2,
            HIRC = 3
        ],
        TMR0_S OFFSET(8) NUMBITS(3) [
            HXT = 0,
            LXT = 1,
            LIRC = 2,
            External = 3,
            HIRC = 7
        ],
        TMR1_S OFFSET(12) NUMBITS(3) [
            HXT = 0,
            LXT = 1,
            LIRC = 2,
            External = 3,
            HIRC = 7
        ],
        LCD_S OFFSET(18) NUMBITS(1) [
            LXT = 0,
            LIRC = 1
        ]
    ],
    pub CLKSEL2 [
        FRQDIV_S OFFSET(2) NUMBITS(2) [
            HXT = 0,
            LXT = 1,
            HCLK = 2,
            HIRC = 3
        ],
        PWM1_CH01_S OFFSET(4) NUMBITS(2) [
            HXT = 0,
            LXT = 1,
            HCLK = 2,
            HIRC = 3
        ],
        PWM1_CH23_S OFFSET(6) NUMBITS(2) [
            HXT = 0,
            LXT = 1,
            HCLK = 2,
            HIRC = 3
        ],
        TMR2_S OFFSET(8) NUMBITS(3) [
            HXT = 0,
            LXT = 1,
            LIRC = 2,
            External = 3,
            HIRC = 7
        ],
        TMR3_S OFFSET(12) NUMBITS(3) [
            HXT = 0,
            LXT = 1,
            LIRC = 2,
            External = 3,
            HIRC = 7
        ],
        I2S_S OFFSET(16) NUMBITS(2) [
            HXT = 0,
            PLL = 1,
            HIRC = 2,
            HCLK = 3
        ],
        SC_S OFFSET(18) NUMBITS(2) [
            HXT = 0,
            PLL = 1,
            HIRC = 2,
            HCLK = 3
        ],
        WDT_S OFFSET(20) NUMBITS(2) [
            LXT = 1,
            HCLKdiv2048 = 2,
            LIRC = 3
        ]
    ],
    pub CLKDIV0 [
        /// HCLK = source / (HCLK_N + 1)
        HCLK_N OFFSET(0) NUMBITS(4) [],
        /// USB 48 MHz reference divider
        USB_N OFFSET(4) NUMBITS(4) [],
        UART_N OFFSET(8) NUMBITS(4) [],
        I2S_N OFFSET(12) NUMBITS(4) [],
        ADC_N OFFSET(16) NUMBITS(8) []
    ],
    pub CLKDIV1 [
        SC0_N OFFSET(0) NUMBITS(4) [],
        SC1_N OFFSET(4) NUMBITS(4) [],
        SC2_N OFFSET(8) NUMBITS(4) []
    ],
    pub PLLCTL [
        /// Feedback divider
        FB_DV OFFSET(0) NUMBITS(9) [],
        /// Input reference divider
        IN_DV OFFSET(9) NUMBITS(5) [],
        /// Output divider
        OUT_DV OFFSET(14) NUMBITS(2) [],
        /// Power down the PLL
        PD OFFSET(16) NUMBITS(1) [],
        /// Bypass: FOUT = FIN
        BP OFFSET(17) NUMBITS(1) [],
        /// Gate the PLL output
        OE OFFSET(18) NUMBITS(1) [],
        /// Reference clock select
        PLL_SRC OFFSET(19) NUMBITS(1) [
            HXT = 0,
            HIRC = 1
        ]
    ],
    pub FRQDIV [
        /// Output frequency = source / 2^(FSEL + 1)
        FSEL OFFSET(0) NUMBITS(4) [],
        FDIV_EN OFFSET(4) NUMBITS(1) []
    ],
    pub WKINTSTS [
        /// Chip woke from power-down
        PD_WK_IS OFFSET(0) NUMBITS(1) []
    ]
];

pub const CLK_BASE: StaticRef<ClkRegisters> =
    unsafe { StaticRef::new(0x5000_0200 as *const ClkRegisters) };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_size() {
        assert_eq!(core::mem::size_of::<ClkRegisters>(), 0x30);
    }

    #[test]
    fn gate_masks() {
        assert_eq!(APBCLK::SC1_EN.mask << APBCLK::SC1_EN.shift, 0x8000_0000);
        assert_eq!(APBCLK::UART0_EN.mask << APBCLK::UART0_EN.shift, 0x0001_0000);
        assert_eq!(AHBCLK::EBI_EN.mask << AHBCLK::EBI_EN.shift, 0x0000_0008);
    }

    #[test]
    fn pll_field_widths() {
        assert_eq!(PLLCTL::FB_DV.mask, 0x1FF);
        assert_eq!(PLLCTL::IN_DV.shift, 9);
        assert_eq!(PLLCTL::OUT_DV.mask << PLLCTL::OUT_DV.shift, 0x0000_C000);
    }
}
