//! Hue ramp sequencer
//!
//! Interpolates hue, saturation and luminance across the pixels of a buffer
//! and writes every pixel through [`hsl`]. Hue is interpolated in hundredths
//! of a degree.

use crate::{buffer::PixelBuffer, color::hsl};

const RAINBOW_START_HUE: i32 = 1;
const RAINBOW_END_HUE: i32 = 360;
const RAINBOW_SATURATION: i32 = 100;
const RAINBOW_LUMINANCE: i32 = 50;

/// Hue wheel direction used to travel from the start to the end hue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HueDirection {
    #[default]
    Clockwise,
    CounterClockwise,
    /// Whichever way covers fewer degrees, clockwise on a tie
    Shortest,
}

/// Ramp of HSL colors spread over a pixel range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HueRamp {
    start_hue: i32,
    end_hue: i32,
    start_saturation: i32,
    end_saturation: i32,
    start_luminance: i32,
    end_luminance: i32,
    direction: HueDirection,
}

impl Default for HueRamp {
    /// Full clockwise rainbow, hue 1 to 360 at full saturation
    fn default() -> Self {
        Self::new(RAINBOW_START_HUE, RAINBOW_END_HUE)
    }
}

/// Saturation and luminance are percentages; anything outside is clamped
const fn percent(value: i32) -> i32 {
    if value < 0 {
        0
    } else if value > 100 {
        100
    } else {
        value
    }
}

impl HueRamp {
    /// Ramp between two hues in degrees
    ///
    /// Hues are reduced onto `[0, 360)`, so any integer is accepted.
    pub const fn new(start_hue: i32, end_hue: i32) -> Self {
        Self {
            start_hue: start_hue.rem_euclid(360),
            end_hue: end_hue.rem_euclid(360),
            start_saturation: RAINBOW_SATURATION,
            end_saturation: RAINBOW_SATURATION,
            start_luminance: RAINBOW_LUMINANCE,
            end_luminance: RAINBOW_LUMINANCE,
            direction: HueDirection::Clockwise,
        }
    }

    #[must_use]
    pub const fn with_direction(mut self, direction: HueDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Use one saturation for the whole ramp
    #[must_use]
    pub const fn with_saturation(self, saturation: i32) -> Self {
        self.with_saturation_range(saturation, saturation)
    }

    #[must_use]
    pub const fn with_saturation_range(mut self, start: i32, end: i32) -> Self {
        self.start_saturation = percent(start);
        self.end_saturation = percent(end);
        self
    }

    /// Use one luminance for the whole ramp
    #[must_use]
    pub const fn with_luminance(self, luminance: i32) -> Self {
        self.with_luminance_range(luminance, luminance)
    }

    #[must_use]
    pub const fn with_luminance_range(mut self, start: i32, end: i32) -> Self {
        self.start_luminance = percent(start);
        self.end_luminance = percent(end);
        self
    }

    /// Hue increment per pixel in hundredths of a degree
    const fn hue_step(&self, steps: i32) -> i32 {
        let clockwise_distance = ((self.end_hue + 360) - self.start_hue) % 360;
        let counter_distance = ((self.start_hue + 360) - self.end_hue) % 360;
        let clockwise_step = (clockwise_distance * 100) / steps;
        let counter_step = -(counter_distance * 100) / steps;

        match self.direction {
            HueDirection::Clockwise => clockwise_step,
            HueDirection::CounterClockwise => counter_step,
            HueDirection::Shortest => {
                if clockwise_distance <= counter_distance {
                    clockwise_step
                } else {
                    counter_step
                }
            }
        }
    }

    /// Write the ramp over every addressable pixel of the buffer
    ///
    /// The first pixel gets the start color and the last the end color. A
    /// single-pixel buffer gets the start color advanced by one step.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn render<const N: usize>(&self, buffer: &mut PixelBuffer<N>) {
        let steps = buffer.len();
        if steps == 0 {
            return;
        }
        let steps_i = steps as i32;

        let h_step = self.hue_step(steps_i);
        let s_step = (self.end_saturation - self.start_saturation) / steps_i;
        let l_step = (self.end_luminance - self.start_luminance) / steps_i;

        if steps == 1 {
            buffer.set_pixel(
                0,
                hsl(
                    self.start_hue + h_step,
                    self.start_saturation + s_step,
                    self.start_luminance + l_step,
                ),
            );
            return;
        }

        buffer.set_pixel(
            0,
            hsl(self.start_hue, self.start_saturation, self.start_luminance),
        );
        for index in 1..steps - 1 {
            let i = index as i32;
            // +360 keeps counter-clockwise ramps non-negative before reduction
            let h = (self.start_hue * 100 + i * h_step) / 100 + 360;
            let s = (self.start_saturation * 100 + i * s_step) / 100;
            let l = (self.start_luminance * 100 + i * l_step) / 100;
            buffer.set_pixel(index, hsl(h, s, l));
        }
        buffer.set_pixel(
            steps - 1,
            hsl(self.end_hue, self.end_saturation, self.end_luminance),
        );
    }
}
