//! Transport adapter for `smart-leds` drivers
//!
//! WS2812-style drivers take colors and emit them green first (GRB, or GRBW
//! for four-channel chips). The adapter builds each color so that the driver
//! puts the strip buffer's bytes on the wire unchanged, whatever the layout.

use core::marker::PhantomData;

use smart_leds::{RGBW, SmartLedsWrite, White};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{Transport, color::Rgb, error::StripError, layout::ChannelLayout, pins::Pin};

/// Color with a dedicated white channel
pub type Rgbw = RGBW<u8>;

/// Color a driver emits in green-first order
pub trait WirePixel {
    /// Bytes one color occupies on the wire
    const STRIDE: usize;

    /// Build the color the driver emits as exactly `bytes`
    fn from_wire(bytes: &[u8]) -> Self;
}

impl WirePixel for Rgb {
    const STRIDE: usize = 3;

    fn from_wire(bytes: &[u8]) -> Self {
        Rgb {
            r: bytes[1],
            g: bytes[0],
            b: bytes[2],
        }
    }
}

impl WirePixel for Rgbw {
    const STRIDE: usize = 4;

    fn from_wire(bytes: &[u8]) -> Self {
        Rgbw {
            r: bytes[1],
            g: bytes[0],
            b: bytes[2],
            a: White(bytes[3]),
        }
    }
}

/// Sends strip buffers through a `smart-leds` writer.
///
/// `C` is the color type handed to the writer: [`Rgb`] for three-channel
/// layouts, [`Rgbw`] for [`ChannelLayout::Grbw`]. Binding a strip whose
/// layout has a different stride fails.
#[derive(Debug)]
pub struct SmartLedsTransport<W, C = Rgb> {
    writer: W,
    color: PhantomData<C>,
}

impl<W> SmartLedsTransport<W, Rgb> {
    /// Adapter for three-channel strips
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            color: PhantomData,
        }
    }
}

impl<W> SmartLedsTransport<W, Rgbw> {
    /// Adapter for strips with a white channel
    pub const fn new_rgbw(writer: W) -> Self {
        Self {
            writer,
            color: PhantomData,
        }
    }
}

impl<W, C> SmartLedsTransport<W, C> {
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W, C> Transport for SmartLedsTransport<W, C>
where
    W: SmartLedsWrite,
    W::Color: From<C>,
    C: WirePixel,
{
    fn bind(&mut self, _pin: Pin, layout: ChannelLayout) -> Result<(), StripError> {
        if layout.stride() == C::STRIDE {
            Ok(())
        } else {
            #[cfg(feature = "esp32-log")]
            println!(
                "[SmartLedsTransport.bind] {:?} needs {} bytes per pixel, writer takes {}",
                layout,
                layout.stride(),
                C::STRIDE
            );
            Err(StripError::UnsupportedLayout { layout })
        }
    }

    fn send(&mut self, buffer: &[u8], _pin: Pin) {
        let colors = buffer.chunks_exact(C::STRIDE).map(C::from_wire);
        if self.writer.write(colors).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[SmartLedsTransport.send] driver write failed");
        }
    }
}
