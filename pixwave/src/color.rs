//! Color bytes shared by the demos.
//!
//! A byte is written to the framebuffer as is; which hue it ends up as is
//! decided by the palette of the display.

pub const BACKGROUND: u8 = 0x4F;
pub const FOREGROUND: u8 = 0xAF;

/// Cleared to by the scattered circles demo
pub const SCATTER_BACKGROUND: u8 = 0x74;

/// First fill of the rainbow demo, bumped by `RAINBOW_STEP` every frame
pub const RAINBOW_SEED: u8 = 0b0100_1010;
pub const RAINBOW_STEP: u8 = 3;
