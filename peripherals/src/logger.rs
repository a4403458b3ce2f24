//! ITM backed `log` sink for the demo firmware.
//!
//! Frames are drawn in a tight loop, so logging goes through the Instrumentation
//! Trace Macrocell: a line costs a few stimulus port writes instead of halting
//! the core the way semihosting does.
//!
//! ```no_run
//! # use peripherals::logger::*;
//! # use log::info;
//! let p = cortex_m::Peripherals::take().unwrap();
//!
//! let logger = create_itm_logger(DEFAULT_LEVEL, p.ITM);
//! unsafe {
//!     init(&logger);
//! }
//!
//! info!("display cleared");
//! ```

use cortex_m::peripheral::ITM;
use cortex_m_log::{
    destination,
    log::{trick_init, Logger},
    modes::InterruptFree,
    printer::itm::ItmSync,
};

pub use log::LevelFilter;

/// Per-frame `trace!` output would swamp the trace port, so stop at `info!`
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Logger writing to ITM stimulus port 0, each line in an interrupt free section
pub type ItmLogger = Logger<ItmSync<InterruptFree>>;

/// Create a logger on ITM stimulus port 0
///
/// The TPIU has to be configured for the clocks set by `freeze_clocks`, e.g.
/// from gdb:
///
/// ```gdb
/// monitor tpiu config internal itm.out uart off 36000000
/// monitor itm port 0 on
/// ```
///
/// and `itmdump -F -f itm.out` on the host.
pub fn create_itm_logger(level: LevelFilter, itm: ITM) -> ItmLogger {
    Logger {
        level,
        inner: ItmSync::<InterruptFree>::new(destination::Itm::new(itm)),
    }
}

/// Install `logger` behind the log facade.
///
/// # Safety
///
/// Must be called at most once.
///
/// The logger's lifetime is extended to `'static` behind the compiler's back. It
/// is UB to drop it while logging is still in use, so it should live in a
/// function that never returns, like `board::run`.
pub unsafe fn init(logger: &ItmLogger) {
    if trick_init(logger).is_err() {
        // goes to whichever logger got installed first
        log::warn!("logger already installed, ITM logger not used");
    }
}
