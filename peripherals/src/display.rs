//! The SSD1306 panel demos are shown on.
//!
//! The panel is 128x64 monochrome, driven over SPI2 in graphics mode, which keeps
//! a copy of the whole panel in RAM until [`Panel::show`] flushes it. Demos draw
//! 8-bit colors, so every frame is thresholded on its way out.

use stm32f3xx_hal as stm32f303;

use cortex_m::peripheral::SYST;
use embedded_graphics::{drawable::Pixel, geometry::Point, pixelcolor::BinaryColor, DrawTarget};
use ssd1306::{prelude::*, Builder};
use stm32f303::{
    delay::Delay,
    hal::digital::v2::OutputPin,
    rcc,
    spi::{MisoPin, Mode, MosiPin, Phase, Polarity, SckPin, Spi},
    stm32::SPI2,
    time::Hertz,
};

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

pub const WIDTH: usize = 128;
pub const HEIGHT: usize = 64;

/// Colors from this byte up light a pixel, anything below stays dark
///
/// Puts the demos' foreground (`0xAF`) on and their backgrounds (`0x4F`, `0x74`) off.
pub const LIT_THRESHOLD: u8 = 0x80;

/// Monochrome rendition of an 8-bit color
#[inline]
pub fn lit(color: u8) -> BinaryColor {
    if color >= LIT_THRESHOLD {
        BinaryColor::On
    } else {
        BinaryColor::Off
    }
}

/// A connected and initialized panel
pub struct Panel<DI: WriteOnlyDataCommand> {
    display: GraphicsMode<DI>,
}

impl<DI: WriteOnlyDataCommand> Panel<DI> {
    /// Draw a frame given as rows of 8-bit colors and push it to the panel
    ///
    /// Rows and columns past the panel's edge are dropped. Cells the frame
    /// does not cover keep whatever the previous frame left there.
    pub fn show<F, R>(&mut self, frame: F)
    where
        F: IntoIterator<Item = R>,
        R: IntoIterator<Item = u8>,
    {
        let pixels = frame
            .into_iter()
            .zip(0..HEIGHT as i32)
            .flat_map(|(row, y)| {
                row.into_iter()
                    .zip(0..WIDTH as i32)
                    .map(move |(color, x)| Pixel(Point::new(x, y), lit(color)))
            });

        if let Err(e) = self.display.draw_iter(pixels) {
            warn!("drawing to ssd1306 failed: {:?}", e);
        }
        if let Err(e) = self.display.flush() {
            warn!("ssd1306 flush failed: {:?}", e);
        }
    }
}

/// Connect the panel on SPI2 (mode 0), reset it and blank it
pub fn init_ssd1306_on_spi2<H, SCK, MISO, MOSI, CS, DC, RST>(
    freq: H,
    spi2: SPI2,
    pins: (SCK, MISO, MOSI),
    (cs, dc, mut rst): (CS, DC, RST),
    apb1: &mut rcc::APB1,
    syst: SYST,
    clocks: rcc::Clocks,
) -> Panel<impl WriteOnlyDataCommand>
where
    H: Into<Hertz>,
    SCK: SckPin<SPI2>,
    MISO: MisoPin<SPI2>,
    MOSI: MosiPin<SPI2>,
    CS: OutputPin,
    DC: OutputPin,
    RST: OutputPin,
{
    let freq = freq.into();
    let mode = Mode {
        polarity: Polarity::IdleLow,
        phase: Phase::CaptureOnFirstTransition,
    };
    debug!("spi2 at {}hz, mode 0", freq.0);
    let spi = Spi::spi2(spi2, pins, mode, freq, clocks, apb1);

    let mut delay = Delay::new(syst, clocks);
    let mut display: GraphicsMode<_> = Builder::new()
        .connect(SPIInterface::new(spi, dc, cs))
        .into();

    if display.reset(&mut rst, &mut delay).is_err() {
        warn!("ssd1306 reset line could not be driven");
    }
    display.init().expect("ssd1306 did not accept init sequence");
    display.clear();
    info!("ssd1306 ready, {}x{}, lit from {:#04x}", WIDTH, HEIGHT, LIT_THRESHOLD);

    Panel { display }
}
