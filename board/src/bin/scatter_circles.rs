//! Circles of shifting size and color left all over the display.

#![no_main]
#![no_std]

// sets default panic handler
#[allow(unused_imports)]
use panic_itm;

use cortex_m_rt::entry;

use pixwave::ScatterCircles;

#[entry]
fn main() -> ! {
    board::run(ScatterCircles::new())
}
