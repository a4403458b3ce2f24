//! Sine wave sampling and the erase-by-redraw line renderer.

use core::convert::TryFrom;

use crate::surface::Surface;

/// Vertical position of a curve for every column of a `W` wide display
pub type HeightCache<const W: usize> = [u8; W];

/// Column index is divided by this before being scaled by the frequency
pub const COLUMN_DIVISOR: f32 = 10.0;

/// Sample `amplitude * sin(x * frequency / 10)` around the middle row for every column
///
/// Results are rounded to the nearest row; anything outside `0..=255` saturates.
pub fn calc_wave<const W: usize>(
    amplitude: u8,
    frequency: f32,
    height: u16,
    cache: &mut HeightCache<W>,
) {
    let baseline = f32::from(height / 2);
    let amplitude = f32::from(amplitude);

    for (x, y) in cache.iter_mut().enumerate() {
        let angle = x as f32 * frequency / COLUMN_DIVISOR;
        *y = libm::roundf(amplitude * libm::sinf(angle) + baseline) as u8;
    }
}

/// Plot a height cache as a connected line
///
/// Column `x` is filled from the lower of its own and its right neighbour's row up
/// to (not including) the higher one, then its own row is plotted.
pub fn draw_wave<S, const W: usize>(surface: &mut S, cache: &HeightCache<W>, color: u8)
where
    S: Surface + ?Sized,
{
    for (x, &y) in cache.iter().enumerate() {
        let column = match u16::try_from(x) {
            Ok(column) => column,
            Err(_) => break,
        };
        let y = u16::from(y);

        if let Some(&next) = cache.get(x + 1) {
            let next = u16::from(next);
            for row in y.min(next)..y.max(next) {
                surface.set_pixel(column, row, color);
            }
        }
        surface.set_pixel(column, y, color);
    }
}

/// Two height caches whose current and previous roles alternate every frame
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaveBuffers<const W: usize> {
    caches: [HeightCache<W>; 2],
    current: usize,
}

impl<const W: usize> WaveBuffers<W> {
    /// Both caches start flat on `baseline`, so the first erase is harmless
    pub fn new(baseline: u8) -> Self {
        Self {
            caches: [[baseline; W]; 2],
            current: 0,
        }
    }

    pub fn current(&self) -> &HeightCache<W> {
        &self.caches[self.current]
    }

    pub fn previous(&self) -> &HeightCache<W> {
        &self.caches[self.current ^ 1]
    }

    /// Mutable current cache alongside the previous one
    pub fn split(&mut self) -> (&mut HeightCache<W>, &HeightCache<W>) {
        let (first, second) = self.caches.split_at_mut(1);
        if self.current == 0 {
            (&mut first[0], &second[0])
        } else {
            (&mut second[0], &first[0])
        }
    }

    /// Hand the current role over to the other cache, nothing is copied
    pub fn swap(&mut self) {
        self.current ^= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Framebuffer;

    #[test]
    fn flat_wave_without_amplitude() {
        let mut cache = [0u8; 192];
        calc_wave(0, 1.0, 128, &mut cache);
        assert!(cache.iter().all(|&y| y == 64));

        let mut cache = [0u8; 256];
        calc_wave(0, 7.3, 192, &mut cache);
        assert!(cache.iter().all(|&y| y == 96));
    }

    #[test]
    fn wave_samples() {
        let mut cache = [0u8; 64];
        calc_wave(20, 1.0, 128, &mut cache);

        assert_eq!(cache[0], 64);
        for (x, &y) in cache.iter().enumerate() {
            let expected = libm::roundf(20.0 * libm::sinf(x as f32 / 10.0) + 64.0) as u8;
            assert_eq!(y, expected, "column {}", x);
            assert!((44..=84).contains(&y));
        }
        // sin(1.6) is close to its maximum
        assert_eq!(cache[16], 84);
    }

    #[test]
    fn wave_saturates() {
        let mut cache = [0u8; 40];
        calc_wave(255, 1.0, 8, &mut cache);
        assert!(cache.iter().any(|&y| y == 0));
        assert!(cache.iter().any(|&y| y == 255));
    }

    #[test]
    fn connected_line() {
        let mut fb = Framebuffer::<8, 6>::new(0);
        draw_wave(&mut fb, &[1, 1, 3, 2, 2, 0, 0, 5], 1);

        crate::assert_eq_2d!(fb, 1; "
            ....###.
            ##..#.#.
            .####.#.
            ..#...#.
            ......#.
            .......#
        ");
    }

    #[test]
    fn line_clips_below_display() {
        let mut fb = Framebuffer::<3, 4>::new(0);
        draw_wave(&mut fb, &[2, 200, 3], 1);

        crate::assert_eq_2d!(fb, 1; "
            ...
            ...
            #..
            ###
        ");
    }

    #[test]
    fn columns_past_u16_are_dropped() {
        let mut cache = [3u8; 70_000];
        cache[65_535..].iter_mut().for_each(|y| *y = 0);

        let mut fb = Framebuffer::<4, 4>::new(0);
        draw_wave(&mut fb, &cache, 1);

        crate::assert_eq_2d!(fb, 1; "
            ....
            ....
            ....
            ####
        ");
    }

    #[test]
    fn swap_exchanges_roles() {
        let mut buffers = WaveBuffers::<4>::new(2);
        {
            let (current, previous) = buffers.split();
            *current = [1, 2, 3, 4];
            assert_eq!(previous, &[2; 4]);
        }
        buffers.swap();
        assert_eq!(buffers.previous(), &[1, 2, 3, 4]);
        assert_eq!(buffers.current(), &[2; 4]);

        buffers.split().0[0] = 9;
        buffers.swap();
        assert_eq!(buffers.current(), &[1, 2, 3, 4]);
        assert_eq!(buffers.previous(), &[9, 2, 2, 2]);
    }
}
