//! The board's identity strings.
//!
//! With the `export-symbols` feature the three name descriptors are exported under the
//! symbol names the Teensy core's USB stack looks up (`usb_string_manufacturer_name`,
//! `usb_string_product_name`, `usb_string_serial_number`), replacing its weak defaults.

use crate::descriptor::StringDescriptor;
use usb_device::prelude::LangID;

pub const MANUFACTURER: &str = "TEENSY-4.1";

pub const PRODUCT: &str = "MTP-25K";

pub const SERIAL_NUMBER: &str = "MTP001";

/// Language the names are reported in.
pub const LANG_ID: LangID = LangID::EN_US;

/// Raw code of [`LANG_ID`]. `LangID` has no const conversion to `u16`.
pub const LANG_ID_CODE: u16 = 0x0409;

crate::static_string_descriptor! {
    #[cfg_attr(feature = "export-symbols", export_name = "usb_string_manufacturer_name")]
    pub static MANUFACTURER_DESCRIPTOR = MANUFACTURER;
}

crate::static_string_descriptor! {
    #[cfg_attr(feature = "export-symbols", export_name = "usb_string_product_name")]
    pub static PRODUCT_DESCRIPTOR = PRODUCT;
}

crate::static_string_descriptor! {
    #[cfg_attr(feature = "export-symbols", export_name = "usb_string_serial_number")]
    pub static SERIAL_NUMBER_DESCRIPTOR = SERIAL_NUMBER;
}

/// String index 0: the supported LANGIDs.
pub static LANGUAGES: StringDescriptor<1> = StringDescriptor::from_code_units([LANG_ID_CODE]);

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::descriptor::STRING_DESCRIPTOR_TYPE;
    use std::string::String;

    #[test]
    fn manufacturer() {
        assert_eq!(MANUFACTURER_DESCRIPTOR.length(), 2 + 2 * 10);
        assert_eq!(
            MANUFACTURER_DESCRIPTOR.as_bytes(),
            &[
                0x16, 0x03, 0x54, 0x00, 0x45, 0x00, 0x45, 0x00, 0x4E, 0x00, 0x53, 0x00, 0x59, 0x00,
                0x2D, 0x00, 0x34, 0x00, 0x2E, 0x00, 0x31, 0x00,
            ]
        );
    }

    #[test]
    fn product() {
        assert_eq!(PRODUCT_DESCRIPTOR.length(), 2 + 2 * 7);
        assert_eq!(
            PRODUCT_DESCRIPTOR.as_bytes(),
            &[
                0x10, 0x03, 0x4D, 0x00, 0x54, 0x00, 0x50, 0x00, 0x2D, 0x00, 0x32, 0x00, 0x35, 0x00,
                0x4B, 0x00,
            ]
        );
    }

    #[test]
    fn serial_number() {
        assert_eq!(SERIAL_NUMBER_DESCRIPTOR.length(), 2 + 2 * 6);
        assert_eq!(
            SERIAL_NUMBER_DESCRIPTOR.as_bytes(),
            &[0x0E, 0x03, 0x4D, 0x00, 0x54, 0x00, 0x50, 0x00, 0x30, 0x00, 0x30, 0x00, 0x31, 0x00]
        );
    }

    #[test]
    fn header() {
        for (d, s) in [
            (MANUFACTURER_DESCRIPTOR.as_bytes(), MANUFACTURER),
            (PRODUCT_DESCRIPTOR.as_bytes(), PRODUCT),
            (SERIAL_NUMBER_DESCRIPTOR.as_bytes(), SERIAL_NUMBER),
        ] {
            assert_eq!(d[0] as usize, 2 + 2 * s.chars().count());
            assert_eq!(d[0] as usize, d.len());
            assert_eq!(d[1], STRING_DESCRIPTOR_TYPE);
        }
    }

    #[test]
    fn decodes_to_source() {
        assert_eq!(MANUFACTURER_DESCRIPTOR.chars().collect::<String>(), "TEENSY-4.1");
        assert_eq!(PRODUCT_DESCRIPTOR.chars().collect::<String>(), "MTP-25K");
        assert_eq!(SERIAL_NUMBER_DESCRIPTOR.chars().collect::<String>(), "MTP001");
    }

    #[test]
    fn reads_are_stable() {
        let first = PRODUCT_DESCRIPTOR.as_bytes();
        let second = PRODUCT_DESCRIPTOR.as_bytes();

        assert_eq!(first, second);
        assert_eq!(first.as_ptr(), second.as_ptr());
    }

    #[test]
    fn languages() {
        assert_eq!(LANGUAGES.as_bytes(), &[0x04, 0x03, 0x09, 0x04]);
        assert_eq!(u16::from(LANG_ID), LANG_ID_CODE);
    }
}
