use core::fmt;
use std::io::{self, Write};

pub(crate) struct Output<O> {
    out: O,
}

impl<O> Output<O>
where
    O: Write,
{
    pub(crate) fn new(out: O) -> Self {
        Self { out }
    }

    /// Write the totals of both parts.
    pub(crate) fn answer<A, B>(&mut self, part1: &A, part2: &B) -> io::Result<()>
    where
        A: fmt::Display,
        B: fmt::Display,
    {
        writeln!(self.out)?;
        writeln!(self.out, "Total (Part 1):")?;
        writeln!(self.out, "{part1}")?;
        writeln!(self.out)?;
        writeln!(self.out, "Total (Part 2):")?;
        writeln!(self.out, "{part2}")?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::Output;

    #[test]
    fn answer() {
        let mut o = Output::new(Vec::new());
        o.answer(&41u32, &6u32).unwrap();

        let out = String::from_utf8(o.out).unwrap();
        assert_eq!(out, "\nTotal (Part 1):\n41\n\nTotal (Part 2):\n6\n");
    }
}
