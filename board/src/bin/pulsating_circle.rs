//! Circle outline breathing in and out around the middle of the display.

#![no_main]
#![no_std]

// sets default panic handler
#[allow(unused_imports)]
use panic_itm;

use cortex_m_rt::entry;

use pixwave::Pulsating;

#[entry]
fn main() -> ! {
    board::run(Pulsating::circle())
}
