use crate::{buffer::FULL_BRIGHTNESS, layout::ChannelLayout, pins::Pin};

/// Pin the on-board ZIP LEDs are wired to
pub const DEFAULT_PIN: Pin = Pin::P8;

/// Named brightness levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Brightness {
    Dim = 64,
    Normal = 128,
    Bright = 255,
}

impl Brightness {
    pub const fn value(self) -> u8 {
        self as u8
    }
}

/// Configuration for a ZIP LED string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripConfig {
    pub pixel_count: usize,
    pub layout: ChannelLayout,
    pub pin: Pin,
    pub brightness: u8,
}

impl StripConfig {
    /// Factory defaults: GRB layout on the ZIP pin at full brightness
    pub const fn new(pixel_count: usize) -> Self {
        Self {
            pixel_count,
            layout: ChannelLayout::Grb,
            pin: DEFAULT_PIN,
            brightness: FULL_BRIGHTNESS,
        }
    }

    #[must_use]
    pub const fn with_layout(mut self, layout: ChannelLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub const fn with_pin(mut self, pin: Pin) -> Self {
        self.pin = pin;
        self
    }

    #[must_use]
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }
}
