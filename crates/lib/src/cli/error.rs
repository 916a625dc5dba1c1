use core::fmt;

use crate::input::{IStr, IStrError, NL};

/// Name used for the input in error messages.
const STDIN: &str = "<stdin>";

/// Associate the position of an input error with `error`.
///
/// Errors which didn't originate in the input parser are returned as-is.
pub(crate) fn context(input: IStr, error: anyhow::Error) -> anyhow::Error {
    let Some(span) = error
        .chain()
        .find_map(|e| e.downcast_ref::<IStrError>())
        .map(IStrError::span)
    else {
        return error;
    };

    let pos = LineCol::find(input.as_data(), span.start.saturating_sub(input.index()));
    error.context(ErrorContext { path: STDIN, pos })
}

/// A one-based line and column combination.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    column: usize,
}

impl LineCol {
    /// Find the line and column of the byte at `offset` in `data`.
    pub fn find(data: &[u8], offset: usize) -> Self {
        let d = &data[..offset.min(data.len())];

        let (line, start) = match memchr::memrchr(NL, d) {
            Some(n) => (memchr::memchr_iter(NL, d).count(), n + 1),
            None => (0, 0),
        };

        Self {
            line: line + 1,
            column: d.len() - start + 1,
        }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug)]
struct ErrorContext {
    path: &'static str,
    pos: LineCol,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{path}:{pos}", path = self.path, pos = self.pos)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Context;

    use super::{context, LineCol};
    use crate::input::IStr;

    #[test]
    fn line_col() {
        let data = b"ab\ncd\n\nef";
        assert_eq!(LineCol::find(data, 0), LineCol { line: 1, column: 1 });
        assert_eq!(LineCol::find(data, 4), LineCol { line: 2, column: 2 });
        assert_eq!(LineCol::find(data, 7), LineCol { line: 4, column: 1 });
        assert_eq!(LineCol::find(data, 100), LineCol { line: 4, column: 3 });
    }

    #[test]
    fn input_error_position() {
        let input = IStr::new(b"1 2\n3 x\n", 0);

        let mut it = input;
        it.line::<(u32, u32)>().unwrap();

        let error = it
            .line::<(u32, u32)>()
            .context("reading pairs")
            .unwrap_err();

        let error = context(input, error);
        assert_eq!(error.to_string(), "<stdin>:2:3");
        assert_eq!(error.chain().count(), 3);
    }
}
