#![allow(dead_code)]

use zip_strip::{DigitalOutput, Pin, PwmOutput, Transport};

/// Transport that keeps every transmitted frame
#[derive(Debug, Default)]
pub struct RecordingTransport {
    pub frames: Vec<(Vec<u8>, Pin)>,
}

impl RecordingTransport {
    pub fn send_count(&self) -> usize {
        self.frames.len()
    }

    pub fn last_frame(&self) -> Option<&[u8]> {
        self.frames.last().map(|(bytes, _)| bytes.as_slice())
    }
}

impl Transport for RecordingTransport {
    fn send(&mut self, buffer: &[u8], pin: Pin) {
        self.frames.push((buffer.to_vec(), pin));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinWrite {
    Digital(Pin, bool),
    Analog(Pin, u16),
    Servo(Pin, u16),
}

/// Pin writer that records every write in order
#[derive(Debug, Default)]
pub struct RecordingPins {
    pub writes: Vec<PinWrite>,
}

impl DigitalOutput for RecordingPins {
    fn write_digital(&mut self, pin: Pin, high: bool) {
        self.writes.push(PinWrite::Digital(pin, high));
    }
}

impl PwmOutput for RecordingPins {
    fn write_analog(&mut self, pin: Pin, value: u16) {
        self.writes.push(PinWrite::Analog(pin, value));
    }

    fn write_servo(&mut self, pin: Pin, angle: u16) {
        self.writes.push(PinWrite::Servo(pin, angle));
    }
}
