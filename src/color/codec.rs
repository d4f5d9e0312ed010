//! Packed color codec
//!
//! Colors travel through the driver as `0xRRGGBB` integers. Bits above the
//! low 24 are ignored on the way in.

use super::Rgb;

/// Pack three channels into a `0xRRGGBB` color
#[inline]
pub const fn pack_rgb(red: u8, green: u8, blue: u8) -> u32 {
    ((red as u32) << 16) | ((green as u32) << 8) | blue as u32
}

/// Red channel of a packed color
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn unpack_red(packed: u32) -> u8 {
    ((packed >> 16) & 0xFF) as u8
}

/// Green channel of a packed color
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn unpack_green(packed: u32) -> u8 {
    ((packed >> 8) & 0xFF) as u8
}

/// Blue channel of a packed color
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn unpack_blue(packed: u32) -> u8 {
    (packed & 0xFF) as u8
}

/// Create an RGB color from a packed value (0xRRGGBB format)
pub const fn rgb_from_packed(packed: u32) -> Rgb {
    Rgb {
        r: unpack_red(packed),
        g: unpack_green(packed),
        b: unpack_blue(packed),
    }
}

/// Pack an RGB color into 0xRRGGBB format
pub const fn packed_from_rgb(color: Rgb) -> u32 {
    pack_rgb(color.r, color.g, color.b)
}
