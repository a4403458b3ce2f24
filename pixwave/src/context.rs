//! Context for accessing functionalities of the platform a demo is
//! rendered on.
//!
//! The core never talks to hardware directly: presenting a finished frame and
//! waiting out the frame period are both delegated to a `Context`.

use core::convert::Infallible;

use crate::surface::Surface;

/// How long to wait between two frames, in busy-wait cycles
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameDelay(u32);

impl FrameDelay {
    /// Start the next frame right away
    pub const NONE: FrameDelay = FrameDelay(0);

    pub const fn cycles(cycles: u32) -> Self {
        FrameDelay(cycles)
    }

    pub const fn as_cycles(self) -> u32 {
        self.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

/// Trait aggregating platform functionalities
pub trait Context {
    /// Show a finished frame
    ///
    /// Called by the driver after the initial clear and after each frame. Targets
    /// whose display scans the framebuffer memory directly have nothing to do here.
    fn on_frame<S: Surface + ?Sized>(&mut self, _surface: &S) {}

    /// Wait out the frame period
    ///
    /// Returning `WouldBlock` makes the driver poll again, so both blocking delays
    /// and polled timers fit behind this call.
    fn pace(&mut self, delay: FrameDelay) -> nb::Result<(), Infallible>;
}

/// Paces frames by spinning the CPU, with no display to present to
#[derive(Copy, Clone, Debug, Default)]
pub struct SpinContext;

impl Context for SpinContext {
    fn pace(&mut self, delay: FrameDelay) -> nb::Result<(), Infallible> {
        for _ in 0..delay.as_cycles() {
            core::hint::spin_loop();
        }
        Ok(())
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Records what the driver asked of the platform
    #[derive(Debug, Default)]
    pub struct TestingContext {
        presented: u32,
        paced: u32,
        last_delay: Option<FrameDelay>,
        polls_per_frame: u32,
        pending: u32,
    }

    impl TestingContext {
        pub fn new() -> Self {
            Self::default()
        }

        /// Report `WouldBlock` `polls` times before every frame deadline is met
        pub fn with_polls(polls: u32) -> Self {
            Self {
                polls_per_frame: polls,
                pending: polls,
                ..Self::default()
            }
        }

        pub fn presented(&self) -> u32 {
            self.presented
        }

        pub fn paced(&self) -> u32 {
            self.paced
        }

        pub fn last_delay(&self) -> Option<FrameDelay> {
            self.last_delay
        }
    }

    impl Context for TestingContext {
        fn on_frame<S: Surface + ?Sized>(&mut self, _surface: &S) {
            self.presented += 1;
        }

        fn pace(&mut self, delay: FrameDelay) -> nb::Result<(), Infallible> {
            self.last_delay = Some(delay);
            if self.pending > 0 {
                self.pending -= 1;
                return Err(nb::Error::WouldBlock);
            }
            self.pending = self.polls_per_frame;
            self.paced += 1;
            Ok(())
        }
    }

    #[test]
    fn testing_context() {
        let mut ctx = TestingContext::with_polls(2);
        let delay = FrameDelay::cycles(10);

        assert_eq!(ctx.pace(delay), Err(nb::Error::WouldBlock));
        assert_eq!(ctx.pace(delay), Err(nb::Error::WouldBlock));
        assert_eq!(ctx.pace(delay), Ok(()));
        assert_eq!(ctx.pace(delay), Err(nb::Error::WouldBlock));
        assert_eq!(ctx.paced(), 1);
        assert_eq!(ctx.last_delay(), Some(delay));
    }

    #[test]
    fn spin_context_returns() {
        let mut ctx = SpinContext;
        assert_eq!(ctx.pace(FrameDelay::cycles(5000)), Ok(()));
        assert_eq!(ctx.pace(FrameDelay::NONE), Ok(()));
        assert!(FrameDelay::NONE.is_none());
        assert_eq!(FrameDelay::cycles(5000).as_cycles(), 5000);
    }
}
