//! CLI helpers.

mod error;
mod output;
mod stdout_logger;

use core::fmt;

use anyhow::{anyhow, Result};

use crate::input::IStr;

pub use self::error::LineCol;
pub(self) use self::output::Output;
use self::stdout_logger::StdoutLogger;

static STDOUT_LOGGER: StdoutLogger = StdoutLogger::new(log::LevelFilter::Info);

/// Install the stdout logger.
fn install_logger() -> Result<()> {
    log::set_max_level(STDOUT_LOGGER.level());
    log::set_logger(&STDOUT_LOGGER).map_err(|error| anyhow!("failed to set log: {error}"))
}

/// Run a solver over everything on standard input and print both of its
/// totals.
///
/// Command line arguments are ignored. Errors raised by the input parser are
/// decorated with the position in the input where they happened.
pub fn entry<F, A, B>(solve: F) -> Result<()>
where
    F: FnOnce(IStr) -> Result<(A, B)>,
    A: fmt::Display,
    B: fmt::Display,
{
    install_logger()?;

    let input = crate::input()?;
    let (a, b) = solve(input).map_err(|e| error::context(input, e))?;

    let stdout = std::io::stdout();
    let mut o = Output::new(stdout.lock());
    o.answer(&a, &b)?;
    Ok(())
}
