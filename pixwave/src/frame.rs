use crate::surface::{dimension, Surface};

/// An owned `W` x `H` grid of 8-bit color cells
///
/// Rows are stored top to bottom, each row left to right, with no padding
/// between them, which is the layout display hardware expects to scan.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Framebuffer<const W: usize, const H: usize>([[u8; W]; H]);

/// A shared view over a `Framebuffer`
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct FrameView<'a, const W: usize, const H: usize>(&'a [[u8; W]; H]);

impl<'a, const W: usize, const H: usize> FrameView<'a, W, H> {
    /// View the raw memory of a frame
    pub fn as_raw(&self) -> &'a [u8] {
        flatten(self.0)
    }

    /// Access a cell by its column and row
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        self.0.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Get iterator over rows, top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &'a [u8; W]> {
        self.0.iter()
    }
}

impl<const W: usize, const H: usize> Framebuffer<W, H> {
    pub fn new(color: u8) -> Self {
        Self([[color; W]; H])
    }

    /// Get view over frame
    pub fn view(&self) -> FrameView<'_, W, H> {
        FrameView(&self.0)
    }

    pub fn as_raw(&self) -> &[u8] {
        flatten(&self.0)
    }

    pub fn fill(&mut self, color: u8) {
        self.0.iter_mut().for_each(|row| *row = [color; W]);
    }
}

fn flatten<const W: usize, const H: usize>(cells: &[[u8; W]; H]) -> &[u8] {
    // SAFETY: nested arrays are laid out contiguously with no padding, so the
    // grid is exactly `W * H` initialized bytes living as long as `cells`
    unsafe { core::slice::from_raw_parts(cells.as_ptr() as *const u8, W * H) }
}

impl<const W: usize, const H: usize> Surface for Framebuffer<W, H> {
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
        self.0[y as usize][x as usize] = color;
    }

    #[inline]
    fn get_unchecked(&self, x: u16, y: u16) -> u8 {
        self.0[y as usize][x as usize]
    }

    fn clear(&mut self, color: u8) {
        self.fill(color);
    }
}
