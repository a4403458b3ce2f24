//! Runs pixwave demos on an STM32F3 Discovery with an SSD1306 OLED on SPI2.
//!
//! Every binary under `src/bin` is one demo program; this crate holds the
//! bring-up they share.

#![no_std]

use stm32f3xx_hal as stm32f303;

use stm32f303::{pac, prelude::*};

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};
use peripherals::{display, freeze_clocks, logger::*};

use pixwave::{Builder, Demo, Framebuffer};

mod context;
pub use context::DiscoveryContext;

pub const WIDTH: usize = display::WIDTH;
pub const HEIGHT: usize = display::HEIGHT;

/// Bring the board up and draw `demo` until reset
pub fn run<D: Demo>(demo: D) -> ! {
    let cp = cortex_m::Peripherals::take().expect("Failed requesting peripherals");
    let dp = pac::Peripherals::take().expect("Failed requesting peripherals");

    let logger = create_itm_logger(DEFAULT_LEVEL, cp.ITM);
    unsafe { init(&logger) }
    info!("init process started");

    info!("configuring clocks");
    let mut flash = dp.FLASH.constrain();
    let mut rcc = dp.RCC.constrain();

    let sysclk_freq = 36.mhz();
    let clocks = freeze_clocks(sysclk_freq, rcc.cfgr, &mut flash);

    let mut gpiob = dp.GPIOB.split(&mut rcc.ahb);

    info!("configuring ssd1306 display via spi2");
    let rst = gpiob
        .pb0
        .into_push_pull_output(&mut gpiob.moder, &mut gpiob.otyper);
    let dc = gpiob
        .pb1
        .into_push_pull_output(&mut gpiob.moder, &mut gpiob.otyper);
    let cs = gpiob
        .pb11
        .into_push_pull_output(&mut gpiob.moder, &mut gpiob.otyper);

    let sck = gpiob.pb13.into_af5(&mut gpiob.moder, &mut gpiob.afrh);
    let miso = gpiob.pb14.into_af5(&mut gpiob.moder, &mut gpiob.afrh);
    let mosi = gpiob.pb15.into_af5(&mut gpiob.moder, &mut gpiob.afrh);

    let panel = display::init_ssd1306_on_spi2(
        8.mhz(),
        dp.SPI2,
        (sck, miso, mosi),
        (cs, dc, rst),
        &mut rcc.apb1,
        cp.SYST,
        clocks,
    );

    let ctx = DiscoveryContext { panel };
    let driver = Builder::new()
        .with_surface(Framebuffer::<WIDTH, HEIGHT>::new(0))
        .with_context(ctx)
        .with_demo(demo)
        .build()
        .expect("Driver is missing a part");

    info!("starting demo");
    driver.run()
}
