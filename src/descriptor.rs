use core::char::{decode_utf16, REPLACEMENT_CHARACTER};
use core::{mem, slice};
use usb_device::{Result, UsbError};

/// `bDescriptorType` of a STRING descriptor.
pub const STRING_DESCRIPTOR_TYPE: u8 = 3;

/// Largest payload, in UTF-16 code units, whose total length still fits in `bLength`.
pub const MAX_CODE_UNITS: usize = (u8::MAX as usize - 2) / 2;

/// A USB STRING descriptor holding `N` UTF-16LE code units.
///
/// The record only contains bytes, so its memory image is exactly what goes on the wire:
/// `bLength`, `bDescriptorType`, then the code units in little-endian order.
///
/// Aligned to 2 like the C `usb_string_descriptor_struct` it stands in for.
///
/// invariants: length == 2 + 2 * N, descriptor_type == 3, N <= MAX_CODE_UNITS
#[repr(C, align(2))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StringDescriptor<const N: usize> {
    length: u8,
    descriptor_type: u8,
    payload: [[u8; 2]; N],
}

impl<const N: usize> StringDescriptor<N> {
    /// Encodes `s` as UTF-16LE.
    ///
    /// `N` must be `utf16_len(s)`. In a `const` or `static` initializer a mismatch fails the
    /// build; the [`string_descriptor!`](crate::string_descriptor) and
    /// [`static_string_descriptor!`](crate::static_string_descriptor) macros compute `N` from
    /// the string so it can't go wrong.
    pub const fn new(s: &str) -> Self {
        assert!(utf16_len(s) == N, "descriptor size does not match the string");

        let bytes = s.as_bytes();
        let mut payload = [[0u8; 2]; N];
        let mut i = 0;
        let mut j = 0;

        while i < bytes.len() {
            let (ch, width) = decode_utf8(bytes, i);

            if ch >= 0x1_0000 {
                let c = ch - 0x1_0000;
                payload[j] = ((0xD800 | (c >> 10)) as u16).to_le_bytes();
                payload[j + 1] = ((0xDC00 | (c & 0x3FF)) as u16).to_le_bytes();
                j += 2;
            } else {
                payload[j] = (ch as u16).to_le_bytes();
                j += 1;
            }

            i += width;
        }

        Self::from_le_payload(payload)
    }

    /// Builds a descriptor from raw code units, e.g. the LANGID list of string index 0.
    pub const fn from_code_units(units: [u16; N]) -> Self {
        let mut payload = [[0u8; 2]; N];
        let mut i = 0;

        while i < N {
            payload[i] = units[i].to_le_bytes();
            i += 1;
        }

        Self::from_le_payload(payload)
    }

    const fn from_le_payload(payload: [[u8; 2]; N]) -> Self {
        assert!(N <= MAX_CODE_UNITS, "string too long for a USB descriptor");

        StringDescriptor {
            length: (2 + 2 * N) as u8,
            descriptor_type: STRING_DESCRIPTOR_TYPE,
            payload,
        }
    }

    /// Total length of the descriptor in bytes (`bLength`).
    pub const fn length(&self) -> u8 {
        self.length
    }

    /// Always [`STRING_DESCRIPTOR_TYPE`].
    pub const fn descriptor_type(&self) -> u8 {
        self.descriptor_type
    }

    /// Number of UTF-16 code units in the payload.
    pub const fn len(&self) -> usize {
        N
    }

    /// True when the payload has no code units.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// The descriptor exactly as it is sent to the host.
    pub fn as_bytes(&self) -> &[u8] {
        // u8 fields only and 2 + 2 * N is even, so align(2) adds no padding.
        unsafe { slice::from_raw_parts(self as *const Self as *const u8, mem::size_of::<Self>()) }
    }

    /// The payload as native `u16` code units.
    pub fn code_units(&self) -> impl Iterator<Item = u16> + '_ {
        self.payload.iter().map(|unit| u16::from_le_bytes(*unit))
    }

    /// Decodes the payload back into characters. Unpaired surrogates come out as U+FFFD.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        decode_utf16(self.code_units()).map(|c| c.unwrap_or(REPLACEMENT_CHARACTER))
    }

    /// Copies the descriptor into `buf` and returns the number of bytes written.
    pub fn write_to(&self, buf: &mut [u8]) -> Result<usize> {
        let data = self.as_bytes();

        if buf.len() < data.len() {
            return Err(UsbError::BufferOverflow);
        }

        buf[..data.len()].copy_from_slice(data);
        Ok(data.len())
    }
}

/// Number of UTF-16 code units needed to encode `s`.
pub const fn utf16_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    let mut count = 0;

    while i < bytes.len() {
        let (ch, width) = decode_utf8(bytes, i);
        count += if ch >= 0x1_0000 { 2 } else { 1 };
        i += width;
    }

    count
}

// Decodes the scalar value starting at bytes[i]. The input comes from a &str, so it is
// well-formed UTF-8.
const fn decode_utf8(bytes: &[u8], i: usize) -> (u32, usize) {
    let b0 = bytes[i] as u32;

    if b0 < 0x80 {
        (b0, 1)
    } else if b0 < 0xE0 {
        (((b0 & 0x1F) << 6) | cont(bytes, i + 1, 0), 2)
    } else if b0 < 0xF0 {
        (((b0 & 0x0F) << 12) | cont(bytes, i + 1, 6) | cont(bytes, i + 2, 0), 3)
    } else {
        (
            ((b0 & 0x07) << 18)
                | cont(bytes, i + 1, 12)
                | cont(bytes, i + 2, 6)
                | cont(bytes, i + 3, 0),
            4,
        )
    }
}

const fn cont(bytes: &[u8], i: usize, shift: u32) -> u32 {
    ((bytes[i] & 0x3F) as u32) << shift
}

/// Builds a [`StringDescriptor`] sized from the string itself.
///
/// ```
/// use usbd_mtp_strings::string_descriptor;
///
/// let d = string_descriptor!("MTP");
/// assert_eq!(d.as_bytes(), &[8, 3, b'M', 0, b'T', 0, b'P', 0]);
/// ```
#[macro_export]
macro_rules! string_descriptor {
    ($s:expr) => {
        $crate::StringDescriptor::<{ $crate::utf16_len($s) }>::new($s)
    };
}

/// Declares a `static` [`StringDescriptor`] whose type is derived from the string.
///
/// ```
/// usbd_mtp_strings::static_string_descriptor! {
///     /// Interface name.
///     pub static INTERFACE = "MTP";
/// }
///
/// assert_eq!(INTERFACE.length(), 8);
/// ```
#[macro_export]
macro_rules! static_string_descriptor {
    ($(#[$attr:meta])* $vis:vis static $name:ident = $s:expr;) => {
        $(#[$attr])*
        $vis static $name: $crate::StringDescriptor<{ $crate::utf16_len($s) }> =
            $crate::StringDescriptor::new($s);
    };
}
