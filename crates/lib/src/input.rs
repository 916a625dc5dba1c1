//! Input parser.

mod error;
mod iter;

use core::mem;
use core::ops;
use std::str::from_utf8;


pub use self::error::{ErrorKind, IStrError};
pub use self::iter::{InputIterator, Iter};

pub(self) type Result<T> = std::result::Result<T, IStrError>;

pub(crate) const NL: u8 = b'\n';

/// Helper to parse input.
///
/// Wraps a `'static` byte string together with the offset of that string
/// into the full input, so that errors can point back at where they
/// happened.
#[derive(Debug, Clone, Copy)]
pub struct IStr {
    data: &'static [u8],
    index: usize,
}

impl IStr {
    /// Construct a new input processor.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::input::IStr;
    ///
    /// let mut input = IStr::new(b"1 2\n3 4\n", 0);
    /// assert_eq!(input.line::<(u32, u32)>()?, (1, 2));
    /// assert_eq!(input.line::<(u32, u32)>()?, (3, 4));
    /// assert!(input.try_line::<(u32, u32)>()?.is_none());
    /// # Ok::<_, lib::input::IStrError>(())
    /// ```
    #[inline]
    pub const fn new(data: &'static [u8], index: usize) -> Self {
        Self { data, index }
    }

    /// Offset of the remaining input into the full input.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Test if input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the length of the current input.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Get input being processed.
    #[inline]
    pub fn as_data(&self) -> &'static [u8] {
        self.data
    }

    /// Construct an iterator over the current input.
    #[inline]
    pub fn iter<T>(&mut self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Parse the next value as T.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        T::from_input(self)
    }

    /// Try parse the next value as `T`, returns `None` if there is no more
    /// non-whitespace data to process.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        T::try_from_input(self)
    }

    /// Parse the next line as `T`, errors with `Err(IStrError)` if there are
    /// no more lines or the line is not a valid value of type `T`.
    #[inline]
    pub fn line<T>(&mut self) -> Result<T>
    where
        T: FromInput,
    {
        let index = self.index;

        let Some(line) = self.try_line()? else {
            return Err(IStrError::new(index..self.index, ErrorKind::ExpectedLine));
        };

        Ok(line)
    }

    /// Parse the next line as `T`, returns `Ok(None)` if there is no more
    /// data to process.
    #[inline]
    pub fn try_line<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput,
    {
        let Some(mut line) = self.split_once(NL) else {
            return Ok(None);
        };

        line.trim_cr();
        line.try_next()
    }

    /// Iterate over the chunks of input separated by `byte`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::input::IStr;
    ///
    /// let mut input = IStr::new(b"75,47,61", 0);
    /// let values = input.split(b',').map(|mut s| s.next::<u32>()).collect::<Result<Vec<_>, _>>()?;
    /// assert_eq!(values, [75, 47, 61]);
    /// # Ok::<_, lib::input::IStrError>(())
    /// ```
    #[inline]
    pub fn split(&mut self, byte: u8) -> impl Iterator<Item = IStr> + '_ {
        core::iter::from_fn(move || self.split_once(byte))
    }

    /// Split `N` times.
    #[inline]
    pub fn splitn(&mut self, byte: u8) -> impl InputIterator + '_ {
        return Splitter { input: self, byte };

        struct Splitter<'a> {
            input: &'a mut IStr,
            byte: u8,
        }

        impl InputIterator for Splitter<'_> {
            #[inline]
            fn index(&self) -> usize {
                self.input.index
            }

            #[inline]
            fn next(&mut self) -> Option<IStr> {
                self.input.split_once(self.byte)
            }
        }
    }

    /// Consume `prefix` if the input starts with it.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::input::IStr;
    ///
    /// let mut input = IStr::new(b"mul(2,4)", 0);
    /// assert!(!input.eat(b"do()"));
    /// assert!(input.eat(b"mul("));
    /// assert_eq!(input.as_data(), b"2,4)");
    /// ```
    #[inline]
    pub fn eat(&mut self, prefix: &[u8]) -> bool {
        if !self.data.starts_with(prefix) {
            return false;
        }

        self.advance(prefix.len());
        true
    }

    /// Consume a run of between one and `max` ascii digits, returning their
    /// value.
    ///
    /// Nothing is consumed unless the run is within bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::input::IStr;
    ///
    /// let mut input = IStr::new(b"123,4567", 0);
    /// assert_eq!(input.digits(3), Some(123));
    /// assert!(input.eat(b","));
    /// assert_eq!(input.digits(3), None);
    /// assert_eq!(input.as_data(), b"4567");
    /// ```
    pub fn digits(&mut self, max: usize) -> Option<u32> {
        let n = self.find(0, |b| !b.is_ascii_digit());

        if n == 0 || n > max {
            return None;
        }

        let value = self.data[..n]
            .iter()
            .fold(0u32, |acc, &d| {
                acc.saturating_mul(10).saturating_add(u32::from(d - b'0'))
            });

        self.advance(n);
        Some(value)
    }

    /// Advance the input by `n` bytes.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        let n = n.min(self.data.len());
        self.data = &self.data[n..];
        self.index = self.index.saturating_add(n);
    }

    /// Try to parse the next whitespace-delimited word.
    pub fn try_next_word<T>(&mut self) -> Result<Option<(usize, T)>>
    where
        T: FromInput,
    {
        let s = self.find(0, |b| !u8::is_ascii_whitespace(b));
        let n = self.find(s, u8::is_ascii_whitespace);

        if s == n {
            return Ok(None);
        }

        let Some(mut input) = self.slice(s..n) else {
            return Ok(None);
        };

        let Some(value) = T::try_from_input(&mut input)? else {
            return Ok(None);
        };

        self.advance(n);
        Ok(Some((s, value)))
    }

    /// Split once at the given byte or until the end of string.
    fn split_once(&mut self, b: u8) -> Option<IStr> {
        if self.data.is_empty() {
            return None;
        }

        let index = self.index;

        let Some(at) = memchr::memchr(b, self.data) else {
            self.index = self.index.saturating_add(self.data.len());
            let data = mem::take(&mut self.data);
            return Some(IStr::new(data, index));
        };

        let data = &self.data[..at];
        self.advance(at + 1);
        Some(IStr::new(data, index))
    }

    /// Strip a trailing carriage return.
    fn trim_cr(&mut self) {
        if let [rest @ .., b'\r'] = self.data {
            self.data = rest;
        }
    }

    /// Find by predicate.
    fn find(&self, mut n: usize, p: fn(&u8) -> bool) -> usize {
        while let Some(c) = self.data.get(n) {
            if p(c) {
                break;
            }

            n += 1;
        }

        n
    }

    /// Construct a sub-range.
    #[inline]
    fn slice(&self, range: ops::Range<usize>) -> Option<IStr> {
        let index = self.index.checked_add(range.start)?;

        Some(Self {
            data: self.data.get(range)?,
            index,
        })
    }
}

/// A value that can be parsed from input.
pub trait FromInput: Sized {
    /// Custom error kind to use.
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::UnexpectedEof
    }

    /// Try to parse a value, returning `None` if there is no more input.
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>>;

    /// Parse a value from a given input.
    #[inline]
    fn from_input(p: &mut IStr) -> Result<Self> {
        let index = p.index;

        let Some(value) = Self::try_from_input(p)? else {
            return Err(IStrError::new(index..p.index, Self::error_kind()));
        };

        Ok(value)
    }
}

/// Parse something from a sequence of inputs.
pub trait FromInputIter: Sized {
    /// Parse from the chunks produced by `inputs`.
    fn from_input_iter<I>(inputs: I) -> Result<Option<Self>>
    where
        I: InputIterator;
}

macro_rules! tuple {
    ($num:literal => $first:ident $first_id:ident $(, $rest:ident $rest_id:ident)* $(,)?) => {
        impl<$first, $($rest,)*> FromInput for ($first, $($rest, )*)
        where
            $first: FromInput,
            $($rest: FromInput,)*
        {
            #[inline]
            fn error_kind() -> ErrorKind {
                ErrorKind::ExpectedTuple($num)
            }

            #[inline]
            fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                let Some($first_id) = p.try_next()? else {
                    return Ok(None);
                };

                $(
                    let Some($rest_id) = p.try_next()? else {
                        return Ok(None);
                    };
                )*

                Ok(Some(($first_id, $($rest_id,)*)))
            }
        }

        impl<$first, $($rest,)*> FromInputIter for ($first, $($rest,)*)
        where
            $first: FromInput,
            $($rest: FromInput,)*
        {
            #[inline]
            fn from_input_iter<I>(mut inputs: I) -> Result<Option<Self>>
            where
                I: InputIterator
            {
                let Some(mut $first_id) = inputs.next() else {
                    return Ok(None);
                };

                $(
                    let Some(mut $rest_id) = inputs.next() else {
                        return Ok(None);
                    };
                )*

                let Some($first_id) = <$first>::try_from_input(&mut $first_id)? else {
                    return Ok(None);
                };

                $(
                    let Some($rest_id) = <$rest>::try_from_input(&mut $rest_id)? else {
                        return Ok(None);
                    };
                )*

                Ok(Some(($first_id, $($rest_id,)*)))
            }
        }
    }
}

macro_rules! integer {
    ($ty:ty) => {
        impl FromInput for $ty {
            #[inline]
            fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
                let index = p.index;

                let Some((n, string)) = p.try_next_word::<&'static str>()? else {
                    return Ok(None);
                };

                let Ok(value) = str::parse(string) else {
                    return Err(IStrError::new(
                        index.saturating_add(n)..p.index,
                        ErrorKind::NotInteger(string),
                    ));
                };

                Ok(Some(value))
            }
        }
    };
}

tuple!(1 => A a);
tuple!(2 => A a, B b);
tuple!(3 => A a, B b, C c);
tuple!(4 => A a, B b, C c, D d);

integer!(usize);
integer!(isize);
integer!(u8);
integer!(u16);
integer!(u32);
integer!(u64);
integer!(i32);
integer!(i64);

impl FromInput for IStr {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let out = *p;
        p.advance(p.len());
        Ok(Some(out))
    }
}

impl FromInput for &'static [u8] {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        p.index = p.index.saturating_add(p.data.len());
        Ok(Some(mem::take(&mut p.data)))
    }
}

impl FromInput for &'static str {
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let index = p.index;

        let Some(data) = <&[u8]>::try_from_input(p)? else {
            return Ok(None);
        };

        let Ok(data) = from_utf8(data) else {
            return Err(IStrError::new(index..p.index, ErrorKind::NotUtf8));
        };

        Ok(Some(data))
    }
}

/// Split on byte `D`, parsing each chunk as one element of `T`.
///
/// # Examples
///
/// ```
/// use lib::input::{IStr, Split};
///
/// let mut input = IStr::new(b"47|53", 0);
/// let Split((a, b)) = input.next::<Split<'|', (u32, u32)>>()?;
/// assert_eq!((a, b), (47, 53));
/// # Ok::<_, lib::input::IStrError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Split<const D: char, T>(pub T);

impl<const D: char, T> FromInput for Split<D, T>
where
    T: FromInputIter,
{
    #[inline]
    fn try_from_input(p: &mut IStr) -> Result<Option<Self>> {
        let it = p.splitn(D as u8);

        let Some(out) = T::from_input_iter(it)? else {
            return Ok(None);
        };

        Ok(Some(Self(out)))
    }
}
