use core::convert::Infallible;

use peripherals::display::Panel;
use pixwave::{nb, Context, FrameDelay, Surface};
use ssd1306::prelude::*;

pub struct DiscoveryContext<T: WriteOnlyDataCommand> {
    pub panel: Panel<T>,
}

impl<T: WriteOnlyDataCommand> Context for DiscoveryContext<T> {
    fn on_frame<S: Surface + ?Sized>(&mut self, surface: &S) {
        let rows = (0..surface.height()).map(move |y| {
            (0..surface.width()).map(move |x| surface.pixel(x, y).unwrap_or_default())
        });
        self.panel.show(rows);
    }

    /// busy-wait, the demos have nothing else to do in the meantime
    fn pace(&mut self, delay: FrameDelay) -> nb::Result<(), Infallible> {
        if !delay.is_none() {
            cortex_m::asm::delay(delay.as_cycles());
        }
        Ok(())
    }
}
