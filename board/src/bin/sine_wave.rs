//! Sine wave with a rising frequency, erased and redrawn every frame.

#![no_main]
#![no_std]

// sets default panic handler
#[allow(unused_imports)]
use panic_itm;

use cortex_m_rt::entry;

use pixwave::SineWave;

#[entry]
fn main() -> ! {
    board::run(SineWave::<{ board::WIDTH }>::default())
}
