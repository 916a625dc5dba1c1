//! A doubly linked grid of character cells.
//!
//! Cells live in an arena owned by the [Grid] and link to their orthogonal
//! neighbours through [CellId]s. Diagonal neighbours are never stored, they
//! are derived by taking a vertical hop followed by a horizontal one.

mod direction;

#[cfg(test)]
mod tests;

use core::fmt::{self, Write};
use core::ops::{Index, IndexMut};
use core::str::FromStr;

use thiserror::Error;

pub use self::direction::Direction;

/// Characters which end a row.
const LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

/// Error raised when building a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GridError {
    #[error("grid is empty")]
    Empty,
    #[error("row {row} has {actual} columns, but expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("grid has more than {max} cells")]
    TooLarge { max: usize },
}

/// Stable identifier of a cell in a [Grid].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct CellId(u32);

impl CellId {
    /// Largest number of cells a grid can hold.
    pub const MAX_CELLS: usize = u32::MAX as usize;

    /// Identifier of an index which is known to be in a built grid.
    #[inline]
    fn new(index: usize) -> Self {
        debug_assert!(index < Self::MAX_CELLS);
        Self(index as u32)
    }

    #[inline]
    fn try_new(index: usize) -> Option<Self> {
        u32::try_from(index).ok().filter(|&n| n != u32::MAX).map(Self)
    }

    /// Position of the cell in reading order.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Position of the cell in reading order as a `u32`.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CellId {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single grid position.
///
/// The flags are scratch state written by the traversals running over the
/// grid. They only feed diagnostic rendering.
#[derive(Debug, Clone)]
pub struct Cell {
    /// Current value of the cell.
    pub value: char,
    /// Number of times the cell has been entered.
    pub visits: u32,
    /// Part of a matched pattern.
    pub in_match: bool,
    /// Where a simulation was found to be looping.
    pub in_loop: bool,
    /// Confirmed position for an obstacle.
    pub candidate: bool,
    original: char,
    links: [Option<CellId>; 4],
}

impl Cell {
    #[inline]
    fn new(value: char) -> Self {
        Self {
            value,
            visits: 0,
            in_match: false,
            in_loop: false,
            candidate: false,
            original: value,
            links: [None; 4],
        }
    }

    /// The value the cell was built with.
    #[inline]
    pub fn original(&self) -> char {
        self.original
    }

    /// Restore the cell as it was built, except for the candidate marker.
    #[inline]
    fn reset(&mut self) {
        self.value = self.original;
        self.visits = 0;
        self.in_match = false;
        self.in_loop = false;
    }
}

/// A rectangular grid of cells.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    columns: usize,
}

impl Grid {
    /// Build a grid from a stream of characters.
    ///
    /// Any run of line terminators starts a new row. Cells are linked as they
    /// are read: west to the previous cell in the row and north to the cell
    /// diagonally up and to the right of that previous cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::grid::{Grid, GridError};
    ///
    /// let grid = Grid::from_chars("ab\r\ncd\u{2028}ef".chars())?;
    /// assert_eq!(grid.rows_len(), 3);
    /// assert_eq!(grid.columns_len(), 2);
    ///
    /// assert_eq!(Grid::from_chars("\n\n".chars()).unwrap_err(), GridError::Empty);
    /// assert!(matches!(Grid::from_chars("ab\nc".chars()), Err(GridError::Ragged { row: 1, .. })));
    /// # Ok::<_, GridError>(())
    /// ```
    pub fn from_chars<I>(chars: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = char>,
    {
        let mut b = Builder::default();

        for c in chars {
            if LINE_TERMINATORS.contains(&c) {
                b.end_row()?;
            } else {
                b.push(c)?;
            }
        }

        b.end_row()?;

        if b.cells.is_empty() {
            return Err(GridError::Empty);
        }

        Ok(Self {
            cells: b.cells,
            rows: b.rows,
            columns: b.columns,
        })
    }

    /// The top-left cell.
    #[inline]
    pub fn first(&self) -> CellId {
        CellId::new(0)
    }

    /// Number of cells in the grid.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// A built grid always has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get number of rows in the grid.
    #[inline]
    pub fn rows_len(&self) -> usize {
        self.rows
    }

    /// Get number of columns in the grid.
    #[inline]
    pub fn columns_len(&self) -> usize {
        self.columns
    }

    /// Identifiers of all cells in reading order.
    ///
    /// This doesn't borrow the grid, so it can be modified while iterating.
    #[inline]
    pub fn ids(&self) -> impl DoubleEndedIterator<Item = CellId> {
        (0..self.cells.len()).map(CellId::new)
    }

    /// Get the cell with the given identifier.
    #[inline]
    pub fn get(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.index())
    }

    /// Get the cell with the given identifier mutably.
    #[inline]
    pub fn get_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        self.cells.get_mut(id.index())
    }

    /// Find the first cell in reading order matching the predicate.
    pub fn find<P>(&self, mut predicate: P) -> Option<CellId>
    where
        P: FnMut(&Cell) -> bool,
    {
        let index = self.cells.iter().position(|cell| predicate(cell))?;
        Some(CellId::new(index))
    }

    /// Look up the neighbour of `id` in the given direction.
    ///
    /// Returns `None` at the edge of the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::grid::{Direction, Grid};
    ///
    /// let grid: Grid = "abc\ndef\n".parse()?;
    /// let a = grid.first();
    ///
    /// let value = |d| grid.neighbor(a, d).map(|id| grid[id].value);
    /// assert_eq!(value(Direction::E), Some('b'));
    /// assert_eq!(value(Direction::SE), Some('e'));
    /// assert_eq!(value(Direction::S), Some('d'));
    /// assert_eq!(value(Direction::N), None);
    /// assert_eq!(value(Direction::SW), None);
    /// # Ok::<_, lib::grid::GridError>(())
    /// ```
    #[inline]
    pub fn neighbor(&self, id: CellId, dir: Direction) -> Option<CellId> {
        step(&self.cells, id, dir)
    }

    /// Look up the neighbour of `id` in the direction opposite of `dir`.
    #[inline]
    pub fn opposite(&self, id: CellId, dir: Direction) -> Option<CellId> {
        self.neighbor(id, dir.opposite())
    }

    /// Iterate over the cells following `id` in the given direction, not
    /// including `id` itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::grid::{Direction, Grid};
    ///
    /// let grid: Grid = "abc\ndef\nghi".parse()?;
    /// let values = grid.walk(grid.first(), Direction::SE).map(|id| grid[id].value);
    /// assert!(values.eq(['e', 'i']));
    /// # Ok::<_, lib::grid::GridError>(())
    /// ```
    #[inline]
    pub fn walk(&self, id: CellId, dir: Direction) -> Walk<'_> {
        Walk {
            grid: self,
            next: self.neighbor(id, dir),
            dir,
        }
    }

    /// Like [Grid::walk], but starting with `id`.
    #[inline]
    pub fn ray(&self, id: CellId, dir: Direction) -> Walk<'_> {
        Walk {
            grid: self,
            next: Some(id),
            dir,
        }
    }

    /// Iterate over rows, each being a [Walk] from west to east.
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = Walk<'_>> + '_ {
        self.ray(self.first(), Direction::S)
            .map(move |start| self.ray(start, Direction::E))
    }

    /// Restore the state of a cell to how it was built.
    ///
    /// This keeps the [Cell::candidate] marker.
    #[inline]
    pub fn reset(&mut self, id: CellId) {
        self[id].reset();
    }

    /// Render the grid through the given function.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::grid::Grid;
    ///
    /// let grid: Grid = "ab\ncd".parse()?;
    /// let out = grid.render(|cell| cell.value.to_ascii_uppercase()).to_string();
    /// assert_eq!(out, "AB\nCD\n");
    /// # Ok::<_, lib::grid::GridError>(())
    /// ```
    #[inline]
    pub fn render<F>(&self, f: F) -> Render<'_, F>
    where
        F: Fn(&Cell) -> char,
    {
        Render { grid: self, f }
    }
}

impl FromStr for Grid {
    type Err = GridError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_chars(s.chars())
    }
}

impl Index<CellId> for Grid {
    type Output = Cell;

    #[inline]
    fn index(&self, id: CellId) -> &Self::Output {
        &self.cells[id.index()]
    }
}

impl IndexMut<CellId> for Grid {
    #[inline]
    fn index_mut(&mut self, id: CellId) -> &mut Self::Output {
        &mut self.cells[id.index()]
    }
}

/// Iterator produced by [Grid::walk] and [Grid::ray].
pub struct Walk<'a> {
    grid: &'a Grid,
    next: Option<CellId>,
    dir: Direction,
}

impl Iterator for Walk<'_> {
    type Item = CellId;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.grid.neighbor(id, self.dir);
        Some(id)
    }
}

/// Display adapter produced by [Grid::render].
pub struct Render<'a, F> {
    grid: &'a Grid,
    f: F,
}

impl<F> fmt::Display for Render<'_, F>
where
    F: Fn(&Cell) -> char,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.rows() {
            for id in row {
                f.write_char((self.f)(&self.grid[id]))?;
            }

            f.write_char('\n')?;
        }

        Ok(())
    }
}

/// Follow the links of `id` in direction `dir`.
fn step(cells: &[Cell], id: CellId, dir: Direction) -> Option<CellId> {
    let (first, second) = dir.legs();
    let id = cells.get(id.index())?.links[first.slot()]?;

    match second {
        Some(second) => cells.get(id.index())?.links[second.slot()],
        None => Some(id),
    }
}

/// Incremental state used while building a grid.
#[derive(Default)]
struct Builder {
    cells: Vec<Cell>,
    /// First cell of the row being built, or of the last completed row.
    row_start: Option<CellId>,
    /// Previous cell in the row being built.
    prev: Option<CellId>,
    width: usize,
    rows: usize,
    columns: usize,
}

impl Builder {
    fn push(&mut self, value: char) -> Result<(), GridError> {
        let Some(id) = CellId::try_new(self.cells.len()) else {
            return Err(GridError::TooLarge {
                max: CellId::MAX_CELLS,
            });
        };

        let mut cell = Cell::new(value);

        let north = match self.prev {
            None => {
                let north = self.row_start;
                self.row_start = Some(id);
                north
            }
            Some(west) => {
                cell.links[Direction::W.slot()] = Some(west);
                self.cells[west.index()].links[Direction::E.slot()] = Some(id);
                step(&self.cells, west, Direction::NE)
            }
        };

        if let Some(north) = north {
            cell.links[Direction::N.slot()] = Some(north);
            self.cells[north.index()].links[Direction::S.slot()] = Some(id);
        }

        self.cells.push(cell);
        self.prev = Some(id);
        self.width += 1;
        Ok(())
    }

    fn end_row(&mut self) -> Result<(), GridError> {
        if self.prev.take().is_none() {
            return Ok(());
        }

        let width = core::mem::take(&mut self.width);

        if self.rows == 0 {
            self.columns = width;
        } else if width != self.columns {
            return Err(GridError::Ragged {
                row: self.rows,
                expected: self.columns,
                actual: width,
            });
        }

        self.rows += 1;
        Ok(())
    }
}
