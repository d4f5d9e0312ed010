mod codec;
mod hsl;

use smart_leds::RGB8;

pub use codec::{pack_rgb, packed_from_rgb, rgb_from_packed, unpack_blue, unpack_green, unpack_red};
pub use hsl::hsl;

pub type Rgb = RGB8;
