use crate::names::*;
use usb_device::bus::UsbBus;
use usb_device::prelude::{BuilderError, StringDescriptors, UsbDeviceBuilder};

/// Index of the LANGID table.
pub const LANGUAGES_INDEX: u8 = 0;

/// `iManufacturer` in the device descriptor.
pub const MANUFACTURER_INDEX: u8 = 1;

/// `iProduct` in the device descriptor.
pub const PRODUCT_INDEX: u8 = 2;

/// `iSerialNumber` in the device descriptor.
pub const SERIAL_NUMBER_INDEX: u8 = 3;

/// Returns the descriptor for a GET_DESCRIPTOR(STRING) request, or `None` for an index the
/// board doesn't define (the request should then be stalled).
pub fn string_descriptor(index: u8) -> Option<&'static [u8]> {
    match index {
        LANGUAGES_INDEX => Some(LANGUAGES.as_bytes()),
        MANUFACTURER_INDEX => Some(MANUFACTURER_DESCRIPTOR.as_bytes()),
        PRODUCT_INDEX => Some(PRODUCT_DESCRIPTOR.as_bytes()),
        SERIAL_NUMBER_INDEX => Some(SERIAL_NUMBER_DESCRIPTOR.as_bytes()),
        _ => None,
    }
}

/// The board's strings in the form [`UsbDeviceBuilder::strings`] takes.
pub fn string_descriptors() -> StringDescriptors<'static> {
    StringDescriptors::new(LANG_ID)
        .manufacturer(MANUFACTURER)
        .product(PRODUCT)
        .serial_number(SERIAL_NUMBER)
}

/// Sets the board's manufacturer, product and serial number strings on `builder`.
pub fn configure<'a, B: UsbBus>(
    builder: UsbDeviceBuilder<'a, B>,
) -> Result<UsbDeviceBuilder<'a, B>, BuilderError> {
    builder.strings(&[string_descriptors()])
}
