//! Edge connector pins and the pin write primitives the drivers rely on

/// Edge connector pins used by the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pin {
    P0,
    P1,
    P2,
    /// Data line of the on-board ZIP LEDs
    P8,
    P13,
    P14,
    P15,
    P16,
}

impl Pin {
    /// Pin number on the edge connector
    pub const fn number(self) -> u8 {
        match self {
            Self::P0 => 0,
            Self::P1 => 1,
            Self::P2 => 2,
            Self::P8 => 8,
            Self::P13 => 13,
            Self::P14 => 14,
            Self::P15 => 15,
            Self::P16 => 16,
        }
    }
}

/// Digital pin writes
///
/// Implement this trait to support different hardware platforms.
pub trait DigitalOutput {
    /// Drive a pin high (`true`) or low (`false`)
    fn write_digital(&mut self, pin: Pin, high: bool);
}

/// PWM pin writes used by motors and servos
pub trait PwmOutput: DigitalOutput {
    /// Write an analog (PWM) value in `0..=1023`
    fn write_analog(&mut self, pin: Pin, value: u16);

    /// Drive a servo to an angle in degrees
    fn write_servo(&mut self, pin: Pin, angle: u16);
}
