//! Shared support for the daily puzzle solvers.

pub mod cli;
pub mod grid;
pub mod input;

use std::io::{self, Read};

use anyhow::Context;

use crate::input::IStr;

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::grid::{Cell, CellId, Direction, Grid};
    pub use crate::input::{IStr, Split};
    pub use anyhow::{anyhow, bail, ensure, Context, Error, Result};
    pub type ArrayVec<T, const N: usize = 16> = arrayvec::ArrayVec<T, N>;
    pub use bittle::{Bits, BitsMut};
    pub use bstr::ByteSlice;
}

/// Read all of standard input.
///
/// The buffer is leaked since it's much easier to deal with than lifetimes,
/// and it would be freed once the process exits *anyway*.
pub fn input() -> anyhow::Result<IStr> {
    return inner().context("<stdin>");

    fn inner() -> io::Result<IStr> {
        let mut buf = Vec::with_capacity(4096);
        io::stdin().lock().read_to_end(&mut buf)?;
        Ok(IStr::new(buf.leak(), 0))
    }
}
