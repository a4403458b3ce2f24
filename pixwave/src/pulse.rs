use core::f32::consts::PI;

use log::debug;

/// One full turn, the period of `sin`
pub const TAU: f32 = 2.0 * PI;

/// A phase angle advanced by a fixed step and kept inside `[0, 2π)`
///
/// Letting the phase grow without bound would slowly eat into the precision
/// of `sin`, so it is folded back whenever it leaves the range.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Oscillator {
    phase: f32,
    step: f32,
}

impl Oscillator {
    pub const fn new(step: f32) -> Self {
        Self { phase: 0.0, step }
    }

    #[inline]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// `sin` of the phase mapped from `[-1, 1]` onto `[0, 1]`
    #[inline]
    pub fn level(&self) -> f32 {
        (libm::sinf(self.phase) + 1.0) * 0.5
    }

    /// Move the phase by one step, returns whether it had to be wrapped
    pub fn advance(&mut self) -> bool {
        self.phase += self.step;
        if (0.0..TAU).contains(&self.phase) {
            return false;
        }
        self.phase = wrap(self.phase);
        debug!("phase wrapped to {}", self.phase);
        true
    }
}

fn wrap(phase: f32) -> f32 {
    let mut wrapped = libm::fmodf(phase, TAU);
    if wrapped < 0.0 {
        wrapped += TAU;
    }
    // adding TAU to a tiny negative remainder can round up to TAU itself
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// A radius swinging between `base_radius` and `base_radius + radius_range`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pulse {
    base_radius: f32,
    radius_range: f32,
    oscillator: Oscillator,
    previous: u16,
}

impl Pulse {
    pub fn new(base_radius: f32, radius_range: f32, step: f32) -> Self {
        Self {
            base_radius,
            radius_range,
            oscillator: Oscillator::new(step),
            previous: base_radius as u16,
        }
    }

    /// Radius for the current phase, truncated to whole pixels
    pub fn radius(&self) -> u16 {
        (self.base_radius + self.oscillator.level() * self.radius_range) as u16
    }

    /// Radius drawn by the last frame
    pub fn previous(&self) -> u16 {
        self.previous
    }

    pub fn oscillator(&self) -> &Oscillator {
        &self.oscillator
    }

    /// Record `radius` as drawn and move on to the next phase
    pub fn commit(&mut self, radius: u16) {
        self.previous = radius;
        self.oscillator.advance();
    }
}
