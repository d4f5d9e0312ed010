use core::fmt;

use crate::layout::ChannelLayout;

/// Errors raised while building a strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripError {
    /// The buffer would need more bytes than its fixed capacity
    OutOfMemory { requested: usize, capacity: usize },
    /// The addressable window does not fit into the buffer
    InvalidWindow {
        start: usize,
        length: usize,
        pixels: usize,
    },
    /// The transport cannot put this layout on the wire
    UnsupportedLayout { layout: ChannelLayout },
}

impl fmt::Display for StripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory {
                requested,
                capacity,
            } => write!(
                f,
                "strip buffer needs {requested} bytes, capacity is {capacity}"
            ),
            Self::InvalidWindow {
                start,
                length,
                pixels,
            } => write!(
                f,
                "window {start}..{} exceeds {pixels} pixels",
                start.saturating_add(*length)
            ),
            Self::UnsupportedLayout { layout } => {
                write!(f, "transport cannot carry {layout:?} pixels")
            }
        }
    }
}

impl core::error::Error for StripError {}
