//! Fixed-point HSL to RGB conversion
//!
//! Chroma is computed in base 256 and the hue wheel is walked sector by
//! sector without trigonometry. The arithmetic is integer-only and must stay
//! bit-exact, so every division truncates toward zero.

use super::pack_rgb;

/// Convert hue (degrees), saturation and luminance (percent) to a packed color
///
/// Hue may be any integer and is reduced onto `[0, 360)`. Saturation and
/// luminance are clamped to `[0, 99]`. Channels are not clamped after the
/// lightness offset is added; they are masked to 8 bits when packed.
#[allow(clippy::many_single_char_names)]
pub fn hsl(hue: i32, saturation: i32, luminance: i32) -> u32 {
    let h = hue.rem_euclid(360);
    let s = saturation.clamp(0, 99);
    let l = luminance.clamp(0, 99);

    // chroma, [0, 255]
    let c = (((100 - (2 * l - 100).abs()) * s) << 8) / 10_000;
    // sector [0, 6) and position inside it [0, 255]
    let h1 = h / 60;
    let h2 = (h - h1 * 60) * 256 / 60;
    let temp = (((h1 % 2) << 8) + h2 - 256).abs();
    // second largest component
    let x = (c * (256 - temp)) >> 8;

    let (r, g, b) = match h1 {
        0 => (c, x, 0),
        1 => (x, c, 0),
        2 => (0, c, x),
        3 => (0, x, c),
        4 => (x, 0, c),
        _ => (c, 0, x),
    };

    let m = ((((l * 2) << 8) / 100) - c) / 2;

    pack_rgb(channel(r + m), channel(g + m), channel(b + m))
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn channel(value: i32) -> u8 {
    (value & 0xFF) as u8
}
