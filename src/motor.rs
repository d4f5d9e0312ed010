//! Motor and servo outputs of the board
//!
//! Each motor is driven by a pin pair: the forward pin carries PWM and the
//! other side is held low digitally, so the third PWM channel stays free for
//! other uses.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::pins::{Pin, PwmOutput};

const MAX_SPEED: u8 = 100;
/// Maps a 0-100 speed onto the ~0-1023 PWM range
const SPEED_SCALE: u16 = 10;

/// Motor outputs available on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motor {
    Motor1,
    Motor2,
    /// Accepted for compatibility with the board's block API; drives nothing
    Both,
}

/// Direction a motor turns. Which way is "forward" depends on the wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorDirection {
    Forward,
    Reverse,
}

/// Servo connection options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Servo {
    Pin0,
    Pin1,
    Pin2,
    ZipPin,
}

impl Servo {
    pub const fn pin(self) -> Pin {
        match self {
            Self::Pin0 => Pin::P0,
            Self::Pin1 => Pin::P1,
            Self::Pin2 => Pin::P2,
            Self::ZipPin => Pin::P8,
        }
    }
}

/// Pin pair of a single motor as (forward, reverse)
const fn motor_pins(motor: Motor) -> &'static [(Pin, Pin)] {
    match motor {
        Motor::Motor1 => &[(Pin::P15, Pin::P16)],
        Motor::Motor2 => &[(Pin::P13, Pin::P14)],
        Motor::Both => &[],
    }
}

/// Motor and servo driver over a pin writer
#[derive(Debug)]
pub struct MotorBoard<P: PwmOutput> {
    pins: P,
}

impl<P: PwmOutput> MotorBoard<P> {
    pub const fn new(pins: P) -> Self {
        Self { pins }
    }

    /// Turn a motor on at `speed` percent (clamped to 0-100)
    pub fn motor_on(&mut self, motor: Motor, direction: MotorDirection, speed: u8) {
        let value = u16::from(speed.min(MAX_SPEED)) * SPEED_SCALE;
        #[cfg(feature = "esp32-log")]
        println!(
            "[MotorBoard.motor_on] {:?} {:?} at {}",
            motor, direction, value
        );
        for &(forward, reverse) in motor_pins(motor) {
            let (driven, low) = match direction {
                MotorDirection::Forward => (forward, reverse),
                MotorDirection::Reverse => (reverse, forward),
            };
            self.pins.write_analog(driven, value);
            self.pins.write_digital(low, false);
        }
    }

    /// Turn a motor off by pulling both of its pins low
    pub fn motor_off(&mut self, motor: Motor) {
        for &(forward, reverse) in motor_pins(motor) {
            self.pins.write_digital(forward, false);
            self.pins.write_digital(reverse, false);
        }
    }

    /// Move a servo to an angle (180° servos) or set its speed (360° servos)
    pub fn servo_turn(&mut self, servo: Servo, angle: u16) {
        self.pins.write_servo(servo.pin(), angle);
    }

    /// Stop driving a servo
    pub fn servo_off(&mut self, servo: Servo) {
        self.pins.write_digital(servo.pin(), false);
    }

    pub const fn pins(&self) -> &P {
        &self.pins
    }

    pub fn into_inner(self) -> P {
        self.pins
    }
}
