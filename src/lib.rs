#![no_std]

pub mod buffer;
pub mod color;
pub mod config;
pub mod driver;
pub mod error;
pub mod layout;
pub mod motor;
pub mod pins;
pub mod rainbow;
pub mod scheduler;
pub mod shared;
pub mod strip;

pub use buffer::PixelBuffer;
pub use config::{Brightness, DEFAULT_PIN, StripConfig};
pub use driver::{Rgbw, SmartLedsTransport, WirePixel};
pub use error::StripError;
pub use layout::ChannelLayout;
pub use motor::{Motor, MotorBoard, MotorDirection, Servo};
pub use pins::{DigitalOutput, Pin, PwmOutput};
pub use rainbow::{HueDirection, HueRamp};
pub use scheduler::RotationScheduler;
pub use shared::SharedStrip;
pub use strip::ZipStrip;

pub use color::{Rgb, hsl, pack_rgb, unpack_blue, unpack_green, unpack_red};
pub use embassy_time::{Duration, Instant};

/// Abstract strip transport trait
///
/// Implement this trait to serialize the raw buffer onto the data line of
/// the LED string. The strip is generic over this trait.
pub trait Transport {
    /// Check that the transport can carry `layout` on `pin`
    ///
    /// Called once when a strip is bound, before the pin is touched.
    fn bind(&mut self, _pin: Pin, _layout: ChannelLayout) -> Result<(), StripError> {
        Ok(())
    }

    /// Send the full buffer to the LEDs on `pin`
    fn send(&mut self, buffer: &[u8], pin: Pin);
}
