//! Pixel buffer model
//!
//! The buffer holds the raw bytes handed to the transport, laid out pixel by
//! pixel according to a [`ChannelLayout`]. Writes are addressed through a
//! window (`start`, `length`) inside the physical buffer and are scaled by the
//! current brightness at write time.

use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    color::{packed_from_rgb, unpack_blue, unpack_green, unpack_red},
    error::StripError,
    layout::ChannelLayout,
};

/// Brightness value that leaves colors unscaled
pub const FULL_BRIGHTNESS: u8 = 255;

/// Byte buffer of a LED string with a fixed capacity of `N` bytes
#[derive(Debug, Clone)]
pub struct PixelBuffer<const N: usize> {
    bytes: Vec<u8, N>,
    layout: ChannelLayout,
    start: usize,
    length: usize,
    brightness: u8,
}

impl<const N: usize> PixelBuffer<N> {
    /// Create a zeroed buffer addressing all of its pixels
    pub fn new(pixel_count: usize, layout: ChannelLayout) -> Result<Self, StripError> {
        Self::with_window(pixel_count, 0, pixel_count, layout)
    }

    /// Create a zeroed buffer of `pixel_count` pixels addressing only
    /// `length` pixels from `start` on
    pub fn with_window(
        pixel_count: usize,
        start: usize,
        length: usize,
        layout: ChannelLayout,
    ) -> Result<Self, StripError> {
        let invalid_window = StripError::InvalidWindow {
            start,
            length,
            pixels: pixel_count,
        };
        match start.checked_add(length) {
            Some(end) if end <= pixel_count => {}
            _ => {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[PixelBuffer.with_window] rejected window {}+{} of {} pixels",
                    start, length, pixel_count
                );
                return Err(invalid_window);
            }
        }

        let out_of_memory = StripError::OutOfMemory {
            requested: pixel_count.saturating_mul(layout.stride()),
            capacity: N,
        };
        let size = pixel_count
            .checked_mul(layout.stride())
            .ok_or(out_of_memory)?;
        let mut bytes = Vec::new();
        bytes.resize(size, 0).map_err(|()| out_of_memory)?;

        Ok(Self {
            bytes,
            layout,
            start,
            length,
            brightness: FULL_BRIGHTNESS,
        })
    }

    pub const fn layout(&self) -> ChannelLayout {
        self.layout
    }

    /// First addressable pixel
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Number of addressable pixels
    pub const fn len(&self) -> usize {
        self.length
    }

    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Raw bytes of the whole physical buffer
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Set the brightness applied to subsequent writes
    ///
    /// Pixels already in the buffer keep their values.
    pub const fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Set the brightness from a percentage
    ///
    /// The percentage is mapped with `round(percent * 2.55)` and wrapped to a
    /// byte, so values above 100 wrap around.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_brightness_percent(&mut self, percent: i32) {
        let value = libm::round(f64::from(percent) * 2.55) as i64;
        self.brightness = (value & 0xFF) as u8;
    }

    /// Write a packed color to a pixel
    ///
    /// Indices outside the window are ignored.
    pub fn set_pixel(&mut self, index: usize, rgb: u32) {
        if index >= self.length {
            return;
        }
        let (red, green, blue) = self.scaled(rgb);
        let offset = (index + self.start) * self.stride();
        self.layout.encode(&mut self.bytes[offset..], red, green, blue);
    }

    /// Write the white channel of a pixel
    ///
    /// Only four-channel layouts have a white channel; other layouts ignore
    /// the call, as do indices outside the window.
    pub fn set_white(&mut self, index: usize, white: u8) {
        if !self.layout.has_white() || index >= self.length {
            return;
        }
        let offset = (index + self.start) * self.stride();
        self.bytes[offset + 3] = self.scale(white);
    }

    /// Read back the stored color of a pixel
    ///
    /// The value is what was written, after brightness scaling.
    pub fn pixel(&self, index: usize) -> Option<u32> {
        if index >= self.length {
            return None;
        }
        let offset = (index + self.start) * self.stride();
        Some(packed_from_rgb(self.layout.decode(&self.bytes[offset..])))
    }

    /// Write one color to every pixel of the window
    pub fn fill(&mut self, rgb: u32) {
        let (red, green, blue) = self.scaled(rgb);
        let stride = self.stride();
        let begin = self.start * stride;
        let end = (self.start + self.length) * stride;
        for pixel in self.bytes[begin..end].chunks_exact_mut(stride) {
            self.layout.encode(pixel, red, green, blue);
        }
    }

    /// Zero the buffer from the window start up to `length` pixels from the
    /// buffer origin
    ///
    /// The end of the range is not shifted by `start`. With a non-zero start
    /// the tail of the window stays untouched.
    pub fn clear(&mut self) {
        let stride = self.stride();
        let begin = self.start * stride;
        let end = self.length * stride;
        if begin < end {
            self.bytes[begin..end].fill(0);
        }
    }

    /// Rotate the window forward by `offset` pixels, wrapping around
    ///
    /// Pixel `i` moves to `i + offset`. Negative offsets rotate backwards.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn rotate(&mut self, offset: isize) {
        if self.length == 0 {
            return;
        }
        let stride = self.stride();
        let begin = self.start * stride;
        let end = (self.start + self.length) * stride;
        let shift = offset.rem_euclid(self.length as isize) as usize * stride;
        self.bytes[begin..end].rotate_right(shift);
    }

    const fn stride(&self) -> usize {
        self.layout.stride()
    }

    #[allow(clippy::cast_possible_truncation)]
    const fn scale(&self, channel: u8) -> u8 {
        if self.brightness < FULL_BRIGHTNESS {
            ((channel as u16 * self.brightness as u16) >> 8) as u8
        } else {
            channel
        }
    }

    const fn scaled(&self, rgb: u32) -> (u8, u8, u8) {
        (
            self.scale(unpack_red(rgb)),
            self.scale(unpack_green(rgb)),
            self.scale(unpack_blue(rgb)),
        )
    }
}
