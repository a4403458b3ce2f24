//! Bounds-checked pixel access shared by every rendering routine.
//!
//! Rasterizers never index memory themselves, they go through `Surface`,
//! which clips anything outside of `width() x height()`.

use core::convert::TryFrom;

/// A row-major grid of 8-bit color cells
pub trait Surface {
    fn width(&self) -> u16;

    fn height(&self) -> u16;

    /// Write a cell without bounds validation
    ///
    /// Callers must guarantee `x < width()` and `y < height()`.
    /// Only the provided methods of this trait call it.
    fn put(&mut self, x: u16, y: u16, color: u8);

    /// Read a cell without bounds validation, see [`Surface::put`]
    fn get_unchecked(&self, x: u16, y: u16) -> u8;

    #[inline]
    fn contains(&self, x: u16, y: u16) -> bool {
        x < self.width() && y < self.height()
    }

    /// Write `color` at column `x`, row `y`, or do nothing when out of range
    #[inline]
    fn set_pixel(&mut self, x: u16, y: u16, color: u8) {
        if self.contains(x, y) {
            self.put(x, y, color);
        }
    }

    /// Read a cell, `None` when out of range
    #[inline]
    fn pixel(&self, x: u16, y: u16) -> Option<u8> {
        if self.contains(x, y) {
            Some(self.get_unchecked(x, y))
        } else {
            None
        }
    }

    /// Fill the whole grid, row after row
    fn clear(&mut self, color: u8) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                self.put(x, y, color);
            }
        }
    }
}

/// Grid dimension as seen through `Surface`
///
/// Anything wider or taller than `u16::MAX` is addressable only up to it.
#[inline]
pub(crate) fn dimension(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Plot a point given in signed coordinates
///
/// Negative components are clipped just like coordinates past the far edge.
#[inline]
pub fn plot<S: Surface + ?Sized>(surface: &mut S, x: i32, y: i32, color: u8) {
    if let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) {
        surface.set_pixel(x, y, color);
    }
}
