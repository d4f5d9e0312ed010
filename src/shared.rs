//! Interrupt-safe ownership cell for a strip
//!
//! Lets button or timer handlers borrow the one strip a program owns. Access
//! goes through critical sections, so it is safe from interrupt context.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::{Transport, strip::ZipStrip};

/// Holds at most one strip, shared between handlers.
pub struct SharedStrip<T: Transport, const N: usize> {
    inner: Mutex<RefCell<Option<ZipStrip<T, N>>>>,
}

impl<T: Transport, const N: usize> SharedStrip<T, N> {
    /// Create an empty cell.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Store a strip, returning the one previously held.
    pub fn install(&self, strip: ZipStrip<T, N>) -> Option<ZipStrip<T, N>> {
        critical_section::with(|cs| self.inner.borrow(cs).replace(Some(strip)))
    }

    /// Remove and return the held strip.
    pub fn take(&self) -> Option<ZipStrip<T, N>> {
        critical_section::with(|cs| self.inner.borrow(cs).take())
    }

    /// Run `f` with exclusive access to the strip.
    ///
    /// Returns `None` when no strip is installed.
    pub fn with<R>(&self, f: impl FnOnce(&mut ZipStrip<T, N>) -> R) -> Option<R> {
        critical_section::with(|cs| {
            let mut slot = self.inner.borrow(cs).borrow_mut();
            slot.as_mut().map(f)
        })
    }
}

impl<T: Transport, const N: usize> Default for SharedStrip<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
