//! Channel layouts of supported LED chips
//!
//! A layout fixes how many bytes a pixel occupies and in which order the red
//! and green channels are stored. Blue always follows them.

use crate::color::Rgb;

/// Per-layout parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutParams {
    /// Bytes per pixel
    pub stride: usize,
    /// Red is stored before green
    pub red_first: bool,
}

const LAYOUT_GRB: LayoutParams = LayoutParams {
    stride: 3,
    red_first: false,
};
const LAYOUT_GRBW: LayoutParams = LayoutParams {
    stride: 4,
    red_first: false,
};
const LAYOUT_RGB: LayoutParams = LayoutParams {
    stride: 3,
    red_first: true,
};

/// Byte layout of a pixel in the strip buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelLayout {
    /// Green, red, blue. The common WS2812 order.
    #[default]
    Grb,
    /// Green, red, blue and a dedicated white channel.
    Grbw,
    /// Red, green, blue.
    Rgb,
}

impl ChannelLayout {
    pub const fn params(self) -> LayoutParams {
        match self {
            Self::Grb => LAYOUT_GRB,
            Self::Grbw => LAYOUT_GRBW,
            Self::Rgb => LAYOUT_RGB,
        }
    }

    /// Bytes per pixel
    pub const fn stride(self) -> usize {
        self.params().stride
    }

    /// Whether the layout carries a white channel at offset 3
    pub const fn has_white(self) -> bool {
        self.params().stride == 4
    }

    /// Write color channels into a pixel slot
    ///
    /// The slot must be at least three bytes long. The white byte of
    /// four-channel layouts is not touched.
    pub fn encode(self, pixel: &mut [u8], red: u8, green: u8, blue: u8) {
        if self.params().red_first {
            pixel[0] = red;
            pixel[1] = green;
        } else {
            pixel[0] = green;
            pixel[1] = red;
        }
        pixel[2] = blue;
    }

    /// Read color channels back from a pixel slot
    pub fn decode(self, pixel: &[u8]) -> Rgb {
        let (r, g) = if self.params().red_first {
            (pixel[0], pixel[1])
        } else {
            (pixel[1], pixel[0])
        };
        Rgb { r, g, b: pixel[2] }
    }
}
