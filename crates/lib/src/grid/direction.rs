use core::fmt;

/// One of the eight compass directions.
///
/// Variants are declared in clockwise order starting from north, which is
/// what [Direction::ALL] iterates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    /// All directions in clockwise order starting with [Direction::N].
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// The four directions which are derived from two orthogonal links.
    pub const DIAGONAL: [Direction; 4] =
        [Direction::NE, Direction::SE, Direction::SW, Direction::NW];

    /// The direction pointing the other way, four steps away in [Direction::ALL].
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::grid::Direction;
    ///
    /// assert_eq!(Direction::N.opposite(), Direction::S);
    /// assert_eq!(Direction::SW.opposite(), Direction::NE);
    ///
    /// for d in Direction::ALL {
    ///     assert_eq!(d.opposite().opposite(), d);
    /// }
    /// ```
    #[inline]
    pub const fn opposite(self) -> Self {
        Self::ALL[(self as usize + 4) % 8]
    }

    /// Rotate 90 degrees clockwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::grid::Direction;
    ///
    /// assert_eq!(Direction::N.turn_right(), Direction::E);
    /// assert_eq!(Direction::W.turn_right(), Direction::N);
    /// assert_eq!(Direction::NW.turn_right(), Direction::NE);
    /// ```
    #[inline]
    pub const fn turn_right(self) -> Self {
        Self::ALL[(self as usize + 2) % 8]
    }

    /// Test if the direction is a diagonal.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self as u8 % 2 == 1
    }

    /// Short compass label, like `"NE"`.
    pub const fn label(self) -> &'static str {
        match self {
            Direction::N => "N",
            Direction::NE => "NE",
            Direction::E => "E",
            Direction::SE => "SE",
            Direction::S => "S",
            Direction::SW => "SW",
            Direction::W => "W",
            Direction::NW => "NW",
        }
    }

    /// The orthogonal hops that make up this direction.
    ///
    /// Diagonals are a vertical hop followed by a horizontal one.
    #[inline]
    pub(super) const fn legs(self) -> (Direction, Option<Direction>) {
        match self {
            Direction::NE => (Direction::N, Some(Direction::E)),
            Direction::SE => (Direction::S, Some(Direction::E)),
            Direction::SW => (Direction::S, Some(Direction::W)),
            Direction::NW => (Direction::N, Some(Direction::W)),
            d => (d, None),
        }
    }

    /// Slot of an orthogonal direction in a cell's link table.
    #[inline]
    pub(super) const fn slot(self) -> usize {
        self as usize / 2
    }
}

impl fmt::Display for Direction {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
