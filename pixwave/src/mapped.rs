//! Framebuffer living at a fixed address, e.g. video memory scanned by hardware.

use core::ptr::{read_volatile, write_volatile};

use crate::surface::{dimension, Surface};

/// A `W` x `H` row-major byte grid at a fixed base address
///
/// Every access is volatile, so writes reach the display memory immediately
/// and in program order.
#[derive(Debug)]
pub struct MappedFramebuffer<const W: usize, const H: usize> {
    base: *mut u8,
}

impl<const W: usize, const H: usize> MappedFramebuffer<W, H> {
    /// Bind to the display memory at `base`
    ///
    /// # Safety
    ///
    /// `base .. base + W * H` must be valid for reads and writes of `u8` for as
    /// long as the returned value is used, and nothing else may access that
    /// region through a Rust reference in the meantime.
    pub unsafe fn new(base: usize) -> Self {
        Self {
            base: base as *mut u8,
        }
    }

    #[inline]
    fn offset(x: u16, y: u16) -> usize {
        y as usize * W + x as usize
    }
}

impl<const W: usize, const H: usize> Surface for MappedFramebuffer<W, H> {
    #[inline]
    fn width(&self) -> u16 {
        dimension(W)
    }

    #[inline]
    fn height(&self) -> u16 {
        dimension(H)
    }

    #[inline]
    fn put(&mut self, x: u16, y: u16, color: u8) {
        // SAFETY: callers bounds-check through `Surface`, and `new` requires
        // the whole `W * H` region to be writable
        unsafe { write_volatile(self.base.add(Self::offset(x, y)), color) }
    }

    #[inline]
    fn get_unchecked(&self, x: u16, y: u16) -> u8 {
        // SAFETY: see `put`
        unsafe { read_volatile(self.base.add(Self::offset(x, y))) }
    }
}
