//! USB string descriptors for the MTP-25K board, for use with
//! [usb-device](https://crates.io/crates/usb-device) or a C USB stack linked into the same
//! firmware.
//!
//! The board reports itself as manufacturer `TEENSY-4.1`, product `MTP-25K`, serial number
//! `MTP001`. Each name is a [`StringDescriptor`] built at compile time: the `bLength` field
//! is derived from the string, so the length and the characters can't disagree.
//!
//! Example
//! =======
//!
//! A full example requires the use of a hardware-driver, but the hardware independent part is as
//! follows:
//!
//! ```no_run
//! # use usb_device::class_prelude::*;
//! # fn dummy(usb_bus: UsbBusAllocator<impl UsbBus>) {
//! use usb_device::prelude::*;
//!
//! let usb_dev = usbd_mtp_strings::configure(UsbDeviceBuilder::new(&usb_bus, UsbVidPid(0x16c0, 0x0476)))
//!     .expect("Failed to set strings")
//!     .build();
//! # }
//! ```
//!
//! Stacks that answer GET_DESCRIPTOR themselves can take the raw bytes:
//!
//! ```
//! use usbd_mtp_strings::{string_descriptor, PRODUCT_INDEX};
//!
//! let bytes = string_descriptor(PRODUCT_INDEX).unwrap();
//! assert_eq!(bytes[..4], [0x10, 0x03, b'M', 0]);
//! ```

#![no_std]

mod descriptor;
mod names;
mod table;

pub use crate::descriptor::*;
pub use crate::names::*;
pub use crate::table::*;
pub use usb_device::{Result, UsbError};
