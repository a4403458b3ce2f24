use log::{info, trace};

use crate::context::Context;
use crate::demo::Demo;
use crate::surface::Surface;

/// Where the driver is in a demo's life
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    /// The display has not been cleared yet
    Initializing,
    /// Drawing frames, never left once entered
    Running,
}

/// Runs a `Demo` on a `Surface`, presenting and pacing through a `Context`
pub struct Driver<S: Surface, C: Context, D: Demo> {
    pub surface: S,
    pub ctx: C,
    demo: D,
    state: State,
    frames: u32,
}

impl<S: Surface, C: Context, D: Demo> Driver<S, C, D> {
    pub fn new(surface: S, ctx: C, demo: D) -> Self {
        Self {
            surface,
            ctx,
            demo,
            state: State::Initializing,
            frames: 0,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Frames drawn since initialization, wrapping
    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn demo(&self) -> &D {
        &self.demo
    }

    /// Advance by one step
    ///
    /// The first call clears the display to the demo's background. Every later
    /// call draws one frame, presents it and waits out the frame delay.
    pub fn tick(&mut self) {
        match self.state {
            State::Initializing => {
                let background = self.demo.background();
                info!(
                    "clearing {}x{} display to {:#04x}",
                    self.surface.width(),
                    self.surface.height(),
                    background
                );
                self.surface.clear(background);
                self.ctx.on_frame(&self.surface);
                self.state = State::Running;
            }
            State::Running => {
                self.demo.frame(&mut self.surface);
                self.frames = self.frames.wrapping_add(1);
                trace!("frame {} drawn", self.frames);
                self.ctx.on_frame(&self.surface);
                if let Err(never) = nb::block!(self.ctx.pace(self.demo.frame_delay())) {
                    match never {}
                }
            }
        }
    }

    /// Run the demo until the target is reset
    pub fn run(mut self) -> ! {
        loop {
            self.tick();
        }
    }
}
