//! The animations, each one a self-contained program for the driver to run.

use embedded_graphics::geometry::Point;

use crate::circle::{draw_circle_filled, draw_circle_outline};
use crate::color::{BACKGROUND, FOREGROUND, RAINBOW_SEED, RAINBOW_STEP, SCATTER_BACKGROUND};
use crate::context::FrameDelay;
use crate::pulse::Pulse;
use crate::surface::Surface;
use crate::wave::{calc_wave, draw_wave, WaveBuffers};

/// An animation drawn one frame at a time
pub trait Demo {
    /// Color the whole display is cleared to before the first frame
    fn background(&self) -> u8;

    /// Draw the next frame over whatever the previous one left behind
    fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S);

    /// Pause requested after each frame
    fn frame_delay(&self) -> FrameDelay {
        FrameDelay::NONE
    }
}

fn center<S: Surface + ?Sized>(surface: &S) -> Point {
    Point::new(
        i32::from(surface.width() / 2),
        i32::from(surface.height() / 2),
    )
}

/// A sine wave across the display whose frequency keeps rising
///
/// Only the previous line is erased each frame, by drawing it again in the
/// background color, instead of clearing the whole display.
#[derive(Clone, Debug)]
pub struct SineWave<const W: usize> {
    amplitude: u8,
    frequency: f32,
    buffers: WaveBuffers<W>,
}

impl<const W: usize> SineWave<W> {
    pub const AMPLITUDE: u8 = 20;
    pub const START_FREQUENCY: f32 = 1.0;
    pub const FREQUENCY_STEP: f32 = 0.2;

    pub fn new(amplitude: u8, frequency: f32) -> Self {
        Self {
            amplitude,
            frequency,
            buffers: WaveBuffers::new(0),
        }
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn buffers(&self) -> &WaveBuffers<W> {
        &self.buffers
    }
}

impl<const W: usize> Default for SineWave<W> {
    fn default() -> Self {
        Self::new(Self::AMPLITUDE, Self::START_FREQUENCY)
    }
}

impl<const W: usize> Demo for SineWave<W> {
    fn background(&self) -> u8 {
        BACKGROUND
    }

    fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let (current, previous) = self.buffers.split();
        calc_wave(self.amplitude, self.frequency, surface.height(), current);
        draw_wave(surface, previous, BACKGROUND);
        draw_wave(surface, current, FOREGROUND);

        self.buffers.swap();
        self.frequency += Self::FREQUENCY_STEP;
    }
}

/// How a pulsating circle is drawn
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Midpoint outline
    Outline,
    /// Every point within the radius
    Disk,
}

impl Shape {
    pub fn draw<S>(self, surface: &mut S, center: Point, radius: u16, color: u8)
    where
        S: Surface + ?Sized,
    {
        match self {
            Shape::Outline => draw_circle_outline(surface, center, radius, color),
            Shape::Disk => draw_circle_filled(surface, center, radius, color),
        }
    }
}

/// A circle in the middle of the display whose radius follows a sine
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pulsating {
    shape: Shape,
    pulse: Pulse,
    delay: FrameDelay,
}

impl Pulsating {
    pub const DELAY: FrameDelay = FrameDelay::cycles(5000);

    pub fn new(shape: Shape, pulse: Pulse) -> Self {
        Self {
            shape,
            pulse,
            delay: Self::DELAY,
        }
    }

    /// Outline swinging between radius 5 and 45
    pub fn circle() -> Self {
        Self::new(Shape::Outline, Pulse::new(5.0, 40.0, 0.3))
    }

    /// Filled disk swinging between radius 20 and 30
    pub fn disk() -> Self {
        Self::new(Shape::Disk, Pulse::new(20.0, 10.0, 0.1))
    }

    pub fn with_delay(mut self, delay: FrameDelay) -> Self {
        self.delay = delay;
        self
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn pulse(&self) -> &Pulse {
        &self.pulse
    }
}

impl Demo for Pulsating {
    fn background(&self) -> u8 {
        BACKGROUND
    }

    fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let center = center(surface);
        let radius = self.pulse.radius();

        self.shape
            .draw(surface, center, self.pulse.previous(), BACKGROUND);
        self.shape.draw(surface, center, radius, FOREGROUND);

        self.pulse.commit(radius);
    }

    fn frame_delay(&self) -> FrameDelay {
        self.delay
    }
}

/// Fills the whole display with a color that shifts every frame
///
/// The seed is painted by the initial clear, so the first frame already moves
/// on to the next color and every color is shown exactly once.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RainbowClear {
    color: u8,
}

impl RainbowClear {
    pub fn new(seed: u8) -> Self {
        Self { color: seed }
    }

    /// Color of the last fill, the seed before any frame
    pub fn color(&self) -> u8 {
        self.color
    }
}

impl Default for RainbowClear {
    fn default() -> Self {
        Self::new(RAINBOW_SEED)
    }
}

impl Demo for RainbowClear {
    fn background(&self) -> u8 {
        self.color
    }

    fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.color = self.color.wrapping_add(RAINBOW_STEP);
        surface.clear(self.color);
    }
}

/// Circle outlines scattered over the display, never erased
///
/// Position, color and radius all derive from two counters walking the display
/// with different strides, so the pattern keeps shifting.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScatterCircles {
    x: u16,
    y: u16,
    z: u8,
}

impl ScatterCircles {
    pub const X_STRIDE: u16 = 5;
    pub const Y_STRIDE: u16 = 7;
    pub const Z_STEP: u8 = 3;

    pub fn new() -> Self {
        Self { x: 0, y: 0, z: 3 }
    }

    /// Position of the next circle
    pub fn position(&self) -> (u16, u16) {
        (self.x, self.y)
    }

    /// Color of the next circle, its radius is half of it
    pub fn color(&self) -> u8 {
        (((self.x as u8) & 0xF0) | ((self.y as u8) >> 4)).wrapping_add(self.z)
    }
}

impl Default for ScatterCircles {
    fn default() -> Self {
        Self::new()
    }
}

fn stride(value: u16, step: u16, modulus: u16) -> u16 {
    ((u32::from(value) + u32::from(step)) % u32::from(modulus.max(1))) as u16
}

impl Demo for ScatterCircles {
    fn background(&self) -> u8 {
        SCATTER_BACKGROUND
    }

    fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let color = self.color();
        let center = Point::new(i32::from(self.x), i32::from(self.y));
        draw_circle_outline(surface, center, u16::from(color >> 1), color);

        self.x = stride(self.x, Self::X_STRIDE, surface.width());
        self.y = stride(self.y, Self::Y_STRIDE, surface.height());
        self.z = self.z.wrapping_add(Self::Z_STEP);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Framebuffer;
    use crate::utils::testing::ImageMask;

    #[test]
    fn wave_erases_previous_line() {
        let mut fb = Framebuffer::<64, 32>::new(BACKGROUND);
        let mut wave = SineWave::<64>::new(10, 1.0);

        for frame in 0..6 {
            let before = ImageMask::<64, 32>::of_color(&fb, FOREGROUND);
            wave.frame(&mut fb);
            let after = ImageMask::<64, 32>::of_color(&fb, FOREGROUND);

            let mut expected = Framebuffer::<64, 32>::new(BACKGROUND);
            draw_wave(&mut expected, wave.buffers().previous(), FOREGROUND);
            assert_eq!(fb, expected, "frame {}", frame);

            let erased = before.difference(&after);
            for y in 0..32 {
                for x in 0..64 {
                    if erased.get(x, y) {
                        assert_eq!(fb.view().get(x, y), Some(BACKGROUND));
                    }
                }
            }
        }
    }

    #[test]
    fn wave_frequency_rises() {
        let mut fb = Framebuffer::<16, 16>::new(BACKGROUND);
        let mut wave = SineWave::<16>::default();
        wave.frame(&mut fb);
        wave.frame(&mut fb);
        assert!(libm::fabsf(wave.frequency() - 1.4) < 1e-6);
    }

    #[test]
    fn wave_wider_than_display_clips() {
        let mut fb = Framebuffer::<8, 16>::new(BACKGROUND);
        let mut wave = SineWave::<32>::default();
        wave.frame(&mut fb);
        assert!(ImageMask::<8, 16>::of_color(&fb, FOREGROUND).count() > 0);
    }

    #[test]
    fn pulsating_outline_keeps_single_ring() {
        let mut fb = Framebuffer::<96, 96>::new(BACKGROUND);
        let mut demo = Pulsating::circle();

        for _ in 0..40 {
            demo.frame(&mut fb);

            let mut expected = Framebuffer::<96, 96>::new(BACKGROUND);
            draw_circle_outline(&mut expected, Point::new(48, 48), demo.pulse().previous(), FOREGROUND);
            assert_eq!(fb, expected);
        }
    }

    #[test]
    fn pulsating_disk_keeps_single_disk() {
        let mut fb = Framebuffer::<64, 64>::new(BACKGROUND);
        let mut demo = Pulsating::disk();
        assert_eq!(demo.frame_delay(), FrameDelay::cycles(5000));

        for _ in 0..70 {
            demo.frame(&mut fb);

            let mut expected = Framebuffer::<64, 64>::new(BACKGROUND);
            draw_circle_filled(&mut expected, Point::new(32, 32), demo.pulse().previous(), FOREGROUND);
            assert_eq!(fb, expected);
            assert!((20..=30).contains(&demo.pulse().previous()));
        }
    }

    #[test]
    fn rainbow_fills_everything() {
        let mut fb = Framebuffer::<12, 8>::new(0);
        let mut demo = RainbowClear::default();
        assert_eq!(demo.color(), RAINBOW_SEED);

        for n in 1..=100u8 {
            demo.frame(&mut fb);
            let color = RAINBOW_SEED.wrapping_add(n.wrapping_mul(3));
            assert_eq!(demo.color(), color);
            assert!(fb.as_raw().iter().all(|&c| c == color));
        }
    }

    #[test]
    fn scatter_first_circle() {
        let mut fb = Framebuffer::<16, 16>::new(SCATTER_BACKGROUND);
        let mut demo = ScatterCircles::new();
        assert_eq!(demo.color(), 3);

        demo.frame(&mut fb);
        // radius 1 around the corner, only two points land on the display
        assert_eq!(fb.view().get(1, 0), Some(3));
        assert_eq!(fb.view().get(0, 1), Some(3));
        assert_eq!(ImageMask::<16, 16>::of_color(&fb, 3).count(), 2);
        assert_eq!(demo.position(), (5, 7));
    }

    #[test]
    fn scatter_color_and_strides() {
        let demo = ScatterCircles {
            x: 0x35,
            y: 0x47,
            z: 0xFE,
        };
        assert_eq!(demo.color(), (0x30 | 0x04u8).wrapping_add(0xFE));

        let mut fb = Framebuffer::<256, 192>::new(SCATTER_BACKGROUND);
        let mut demo = ScatterCircles::new();
        for _ in 0..52 {
            demo.frame(&mut fb);
        }
        assert_eq!(demo.position(), ((52 * 5) % 256, (52 * 7) % 192));
    }
}
