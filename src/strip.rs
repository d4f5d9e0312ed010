//! ZIP LED string controller
//!
//! Owns the pixel buffer and the transport. Mutating operations write into
//! the buffer; only the operations documented as transmitting hand the
//! buffer to the transport.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    Transport,
    buffer::PixelBuffer,
    config::{Brightness, StripConfig},
    error::StripError,
    pins::{DigitalOutput, Pin},
    rainbow::HueRamp,
};

/// Addressable LED string bound to an output pin
///
/// `N` is the byte capacity of the pixel buffer.
#[derive(Debug)]
pub struct ZipStrip<T: Transport, const N: usize> {
    buffer: PixelBuffer<N>,
    transport: T,
    pin: Pin,
}

impl<T: Transport, const N: usize> ZipStrip<T, N> {
    /// Create a string of `pixel_count` pixels with factory defaults
    ///
    /// Fails when the buffer capacity cannot hold the pixels or the transport
    /// cannot carry the default layout.
    pub fn create<P: DigitalOutput>(
        pixel_count: usize,
        transport: T,
        pins: &mut P,
    ) -> Result<Self, StripError> {
        Self::with_config(&StripConfig::new(pixel_count), transport, pins)
    }

    /// Create a string from a configuration
    pub fn with_config<P: DigitalOutput>(
        config: &StripConfig,
        transport: T,
        pins: &mut P,
    ) -> Result<Self, StripError> {
        let mut buffer = PixelBuffer::new(config.pixel_count, config.layout)?;
        buffer.set_brightness(config.brightness);
        Self::with_buffer(buffer, transport, config.pin, pins)
    }

    /// Bind an existing buffer to a pin
    ///
    /// Fails when the transport cannot carry the buffer's layout. On success
    /// the pin is driven low once.
    pub fn with_buffer<P: DigitalOutput>(
        buffer: PixelBuffer<N>,
        mut transport: T,
        pin: Pin,
        pins: &mut P,
    ) -> Result<Self, StripError> {
        transport.bind(pin, buffer.layout())?;
        pins.write_digital(pin, false);
        #[cfg(feature = "esp32-log")]
        println!(
            "[ZipStrip.with_buffer] bound {} pixels ({:?}) to pin {}",
            buffer.len(),
            buffer.layout(),
            pin.number()
        );
        Ok(Self {
            buffer,
            transport,
            pin,
        })
    }

    /// Fill every pixel with one color and transmit
    pub fn show_color(&mut self, rgb: u32) {
        self.buffer.fill(rgb);
        self.show();
    }

    /// Set one pixel without transmitting
    ///
    /// Out-of-range indices are ignored. Call [`Self::show`] to push the
    /// change to the LEDs.
    pub fn set_zip_led_color(&mut self, index: usize, rgb: u32) {
        self.buffer.set_pixel(index, rgb);
    }

    /// Transmit the whole buffer
    pub fn show(&mut self) {
        self.transport.send(self.buffer.as_bytes(), self.pin);
    }

    /// Turn all pixels off and transmit
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.show();
    }

    /// Shift pixels forward by `offset` positions with wraparound and transmit
    pub fn rotate(&mut self, offset: isize) {
        self.buffer.rotate(offset);
        self.show();
    }

    /// Shift pixels forward by one position and transmit
    pub fn rotate_once(&mut self) {
        self.rotate(1);
    }

    /// Set brightness (0-255) for subsequent writes
    pub const fn set_brightness(&mut self, brightness: u8) {
        self.buffer.set_brightness(brightness);
    }

    /// Set brightness as a percentage for subsequent writes
    pub fn set_brightness_percent(&mut self, percent: i32) {
        self.buffer.set_brightness_percent(percent);
    }

    pub const fn set_brightness_preset(&mut self, preset: Brightness) {
        self.set_brightness(preset.value());
    }

    /// Show a full clockwise rainbow across the string
    pub fn show_rainbow(&mut self) {
        self.show_hue_ramp(&HueRamp::default());
    }

    /// Write a hue ramp across the string and transmit
    pub fn show_hue_ramp(&mut self, ramp: &HueRamp) {
        if self.buffer.is_empty() {
            return;
        }
        ramp.render(&mut self.buffer);
        self.show();
    }

    pub const fn buffer(&self) -> &PixelBuffer<N> {
        &self.buffer
    }

    pub const fn pin(&self) -> Pin {
        self.pin
    }

    /// Number of addressable pixels
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    pub const fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }
}
