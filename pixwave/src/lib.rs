#![no_std]

pub mod builder;
pub mod circle;
pub mod color;
pub mod context;
pub mod demo;
pub mod driver;
pub mod frame;
pub mod mapped;
pub mod pulse;
pub mod surface;
pub mod wave;

pub use builder::Builder;
pub use context::{Context, FrameDelay, SpinContext};
pub use demo::{Demo, Pulsating, RainbowClear, ScatterCircles, Shape, SineWave};
pub use driver::{Driver, State};
pub use frame::{FrameView, Framebuffer};
pub use mapped::MappedFramebuffer;
pub use surface::Surface;

pub use embedded_graphics;
pub use nb;
