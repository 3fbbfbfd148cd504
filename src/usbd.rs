// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2024.

//! USB 2.0 full-speed device controller.
//!
//! Eight configurable endpoint buffers carved out of a 512-byte SRAM that
//! starts at `USBD_BASE + 0x100`; `BUFSEG` registers place each endpoint's
//! buffer inside it. Endpoint 0 convention pairs two hardware endpoints for
//! control IN/OUT on the same address.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

register_structs! {
    pub UsbdRegisters {
        /// Interrupt enables
        (0x00 => pub inten: ReadWrite<u32, INTEN::Register>),
        /// Interrupt flags, write 1 to clear
        (0x04 => pub intsts: ReadWrite<u32, INTSTS::Register>),
        /// Function address assigned by SET_ADDRESS
        (0x08 => pub faddr: ReadWrite<u32, FADDR::Register>),
        /// Per-endpoint transaction status
        (0x0C => pub epsts: ReadOnly<u32, EPSTS::Register>),
        /// Bus attach, PHY and transceiver control
        (0x10 => pub attr: ReadWrite<u32, ATTR::Register>),
        /// VBUS detection state
        (0x14 => pub flodet: ReadOnly<u32, FLODET::Register>),
        /// SETUP packet buffer offset
        (0x18 => pub stbufseg: ReadWrite<u32, BUFSEG::Register>),
        (0x1C => _reserved0),
        /// Endpoint configuration blocks
        (0x20 => pub ep: [UsbdEndpointRegisters; 8]),
        /// Force SE0 (software disconnect)
        (0xA0 => pub drvse0: ReadWrite<u32, DRVSE0::Register>),
        /// PDMA handshake between the endpoint SRAM and system memory
        (0xA4 => pub pdma: ReadWrite<u32, PDMA::Register>),
        (0xA8 => @END),
    },

    pub UsbdEndpointRegisters {
        /// Buffer offset inside the endpoint SRAM
        (0x00 => pub bufseg: ReadWrite<u32, BUFSEG::Register>),
        /// Maximal payload; writing arms the endpoint
        (0x04 => pub mxpld: ReadWrite<u32, MXPLD::Register>),
        /// Endpoint number, direction and stall state
        (0x08 => pub cfg: ReadWrite<u32, CFG::Register>),
        /// In-flight control: clear-ready and stall strobes
        (0x0C => pub cfgp: ReadWrite<u32, CFGP::Register>),
        (0x10 => @END),
    }
}

register_bitfields![u32,
    pub INTEN [
        /// Bus events: reset, suspend, resume
        BUS_IE OFFSET(0) NUMBITS(1) [],
        /// Endpoint transaction events
        USB_IE OFFSET(1) NUMBITS(1) [],
        /// VBUS attach/detach
        FLDET_IE OFFSET(2) NUMBITS(1) [],
        /// Remote wake-up source events
        WAKEUP_IE OFFSET(3) NUMBITS(1) [],
        /// Wake-up function enable
        WAKEUP_EN OFFSET(8) NUMBITS(1) [],
        /// Raise USB_STS on IN NAKs as well
        INNAK_EN OFFSET(15) NUMBITS(1) []
    ],
    pub INTSTS [
        BUS_STS OFFSET(0) NUMBITS(1) [],
        USB_STS OFFSET(1) NUMBITS(1) [],
        FLDET_STS OFFSET(2) NUMBITS(1) [],
        WAKEUP_STS OFFSET(3) NUMBITS(1) [],
        /// Completion flags, one bit per endpoint
        EPEVT OFFSET(16) NUMBITS(8) [],
        /// SETUP token received
        SETUP OFFSET(31) NUMBITS(1) []
    ],
    pub FADDR [
        FADDR OFFSET(0) NUMBITS(7) []
    ],
    pub EPSTS [
        /// A write outran the armed payload
        OVERRUN OFFSET(7) NUMBITS(1) [],
        /// Last transaction result per endpoint (IN ACK, OUT ACK, NAK,
        /// STALL, ...); 3 bits each for endpoints 0-5
        EPSTS0 OFFSET(8) NUMBITS(3) [],
        EPSTS1 OFFSET(11) NUMBITS(3) [],
        EPSTS2 OFFSET(14) NUMBITS(3) [],
        EPSTS3 OFFSET(17) NUMBITS(3) [],
        EPSTS4 OFFSET(20) NUMBITS(3) [],
        EPSTS5 OFFSET(23) NUMBITS(3) []
    ],
    pub ATTR [
        /// USB bus reset seen
        USB_RST OFFSET(0) NUMBITS(1) [],
        /// Bus suspended
        SUSPEND OFFSET(1) NUMBITS(1) [],
        /// Resume signalling seen (or driven, as remote wake-up)
        RESUME OFFSET(2) NUMBITS(1) [],
        /// Bus time-out
        TIMEOUT OFFSET(3) NUMBITS(1) [],
        /// PHY transceiver enable
        PHY_EN OFFSET(4) NUMBITS(1) [],
        /// Drive remote wake-up
        RWAKEUP OFFSET(5) NUMBITS(1) [],
        /// Controller enable
        USB_EN OFFSET(7) NUMBITS(1) [],
        /// D+ pull-up enable (attach to host)
        DPPU_EN OFFSET(8) NUMBITS(1) [],
        /// Power down the transceiver
        PWRDN OFFSET(9) NUMBITS(1) [],
        /// Byte-mode access to the endpoint SRAM
        BYTEM OFFSET(10) NUMBITS(1) []
    ],
    pub FLODET [
        /// VBUS present
        FLODET OFFSET(0) NUMBITS(1) []
    ],
    pub BUFSEG [
        /// Buffer offset in 8-byte units
        BUFSEG OFFSET(3) NUMBITS(6) []
    ],
    pub MXPLD [
        MXPLD OFFSET(0) NUMBITS(9) []
    ],
    pub CFG [
        /// Endpoint address the buffer responds to
        EP_NUM OFFSET(0) NUMBITS(4) [],
        /// Isochronous transfer type
        ISOCH OFFSET(4) NUMBITS(1) [],
        STATE OFFSET(5) NUMBITS(2) [
            Disabled = 0,
            Out = 1,
            In = 2
        ],
        /// Expected data toggle for the next transaction
        DSQ_SYNC OFFSET(7) NUMBITS(1) [],
        /// STALL the next SETUP-adjacent transaction
        CSTALL OFFSET(9) NUMBITS(1) []
    ],
    pub CFGP [
        /// Disarm the endpoint (drop the pending MXPLD). Self-clearing.
        CLRRDY OFFSET(0) NUMBITS(1) [],
        /// STALL all transactions to this endpoint
        SSTALL OFFSET(1) NUMBITS(1) []
    ],
    pub DRVSE0 [
        /// Drive single-ended zero on D+/D-
        DRVSE0 OFFSET(0) NUMBITS(1) []
    ],
    pub PDMA [
        /// Transfer direction
        PDMA_RW OFFSET(0) NUMBITS(1) [
            SramToMemory = 0,
            MemoryToSram = 1
        ],
        /// Start the transfer. Cleared by hardware on completion.
        PDMA_EN OFFSET(1) NUMBITS(1) [],
        /// Byte-wide SRAM port access during the transfer
        BYTEM OFFSET(2) NUMBITS(1) []
    ]
];

pub const USBD_BASE: StaticRef<UsbdRegisters> =
    unsafe { StaticRef::new(0x4006_0000 as *const UsbdRegisters) };

/// Start of the 512-byte endpoint buffer SRAM.
pub const USBD_SRAM_BASE: u32 = 0x4006_0100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_sizes() {
        assert_eq!(core::mem::size_of::<UsbdEndpointRegisters>(), 0x10);
        assert_eq!(core::mem::size_of::<UsbdRegisters>(), 0xA8);
    }

    #[test]
    fn intsts_masks() {
        assert_eq!(INTSTS::EPEVT.mask << INTSTS::EPEVT.shift, 0x00FF_0000);
        assert_eq!(INTSTS::SETUP.mask << INTSTS::SETUP.shift, 0x8000_0000);
    }

    #[test]
    fn cfg_masks() {
        assert_eq!(CFG::STATE.mask << CFG::STATE.shift, 0x0000_0060);
        assert_eq!(MXPLD::MXPLD.mask, 0x1FF);
    }

    #[test]
    fn pdma_masks() {
        assert_eq!(PDMA::PDMA_RW.mask, 0x1);
        assert_eq!(PDMA::PDMA_EN.mask << PDMA::PDMA_EN.shift, 0x0000_0002);
        assert_eq!(PDMA::BYTEM.mask << PDMA::BYTEM.shift, 0x0000_0004);
    }
}
