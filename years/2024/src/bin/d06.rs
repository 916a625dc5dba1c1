use lib::prelude::*;

use thiserror::Error;

/// Trail left behind by the guard.
const TRAIL: char = 'X';

/// Obstacle placed when looking for loops.
const OBSTACLE: char = 'O';

fn main() -> Result<()> {
    lib::cli::entry(solve)
}

fn solve(mut input: IStr) -> Result<(u32, u32)> {
    let grid = input.next::<&str>()?.parse::<Grid>()?;
    let mut lab = Lab::new(grid)?;

    let o1 = lab.part1()?;
    log::info!("part 1 grid:\n{}", lab.grid.render(|cell| cell.value));

    let o2 = lab.part2()?;
    lab.reset();

    let candidates = lab.grid.render(|cell| {
        if cell.candidate {
            OBSTACLE
        } else {
            cell.value
        }
    });

    log::info!("part 2 grid:\n{candidates}");
    Ok((o1, o2))
}

#[derive(Debug, Error)]
enum PatrolError {
    #[error("grid does not have a guard")]
    MissingGuard,
    #[error("cell {0} is not a guard")]
    NotGuard(CellId),
    #[error("grid of {cells} cells has too many states to track")]
    TooLarge { cells: usize },
}

/// The outcome of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// The guard moved or turned.
    Continue,
    /// The guard walked off the grid.
    Exited,
    /// The guard is back in a position and heading it has been in before.
    Loop,
}

/// A grid being patrolled by a guard.
struct Lab {
    grid: Grid,
    /// Where the guard currently is.
    guard: CellId,
    /// Where the guard started.
    start: CellId,
    /// Distinct cells visited in the current patrol, in order of first visit.
    visited: Vec<CellId>,
    /// Bitset of `(cell, heading)` states which have been seen.
    seen: Vec<u128>,
    /// Synthetic obstacle placed for the current patrol.
    obstacle: Option<CellId>,
}

impl Lab {
    fn new(grid: Grid) -> Result<Self, PatrolError> {
        let start = grid
            .find(|cell| heading(cell.value).is_some())
            .ok_or(PatrolError::MissingGuard)?;

        let mut lab = Self {
            seen: vec![0; seen_len(grid.len())?],
            grid,
            guard: start,
            start,
            visited: Vec::new(),
            obstacle: None,
        };

        lab.reset();
        Ok(lab)
    }

    /// Restore every cell touched by the last patrol and put the guard back
    /// where it started.
    fn reset(&mut self) {
        for id in self.visited.drain(..).chain(self.obstacle.take()) {
            self.grid.reset(id);
        }

        self.seen.clear_bits();
        self.guard = self.start;
        self.grid.reset(self.start);
        self.grid[self.start].visits = 1;
        self.visited.push(self.start);

        if let Some(h) = heading(self.grid[self.start].value) {
            self.seen.set_bit(state(self.start, h));
        }
    }

    /// Advance the guard by one step.
    fn step(&mut self) -> Result<Step, PatrolError> {
        let current = self.guard;
        let h = heading(self.grid[current].value).ok_or(PatrolError::NotGuard(current))?;

        let Some(next) = self.grid.neighbor(current, h) else {
            self.grid[current].value = TRAIL;
            return Ok(Step::Exited);
        };

        let (cell, h) = if is_obstacle(self.grid[next].value) {
            let h = h.turn_right();
            self.grid[current].value = glyph(h);
            (current, h)
        } else {
            self.grid[current].value = TRAIL;

            let cell = &mut self.grid[next];
            cell.value = glyph(h);
            cell.visits += 1;

            if cell.visits == 1 {
                self.visited.push(next);
            }

            self.guard = next;
            (next, h)
        };

        let state = state(cell, h);

        if self.seen.test_bit(state) {
            self.grid[cell].in_loop = true;
            return Ok(Step::Loop);
        }

        self.seen.set_bit(state);
        Ok(Step::Continue)
    }

    /// Walk the guard until it either exits the grid or starts looping.
    fn patrol(&mut self) -> Result<Step, PatrolError> {
        loop {
            match self.step()? {
                Step::Continue => {}
                step => return Ok(step),
            }
        }
    }

    /// Count the distinct cells visited before the guard leaves.
    fn part1(&mut self) -> Result<u32> {
        self.reset();

        if self.patrol()? == Step::Loop {
            bail!("guard never leaves the grid");
        }

        Ok(self.visited.len() as u32)
    }

    /// Count the cells along the original patrol where placing an obstacle
    /// traps the guard in a loop.
    ///
    /// Must be called after [Lab::part1].
    fn part2(&mut self) -> Result<u32> {
        let path = self.visited.iter().skip(1).copied().collect::<Vec<_>>();
        let mut total = 0;

        for id in path {
            self.reset();
            self.grid[id].value = OBSTACLE;
            self.obstacle = Some(id);

            if self.patrol()? == Step::Loop {
                self.grid[id].candidate = true;
                total += 1;
            }
        }

        Ok(total)
    }
}

/// Heading of a guard glyph.
fn heading(c: char) -> Option<Direction> {
    match c {
        '^' => Some(Direction::N),
        '>' => Some(Direction::E),
        'v' => Some(Direction::S),
        '<' => Some(Direction::W),
        _ => None,
    }
}

/// Glyph of a guard with the given heading.
///
/// Headings are only ever produced by [heading] and [Direction::turn_right],
/// so they are never diagonal.
fn glyph(h: Direction) -> char {
    match h {
        Direction::N => '^',
        Direction::E => '>',
        Direction::S => 'v',
        Direction::W => '<',
        h => unreachable!("diagonal heading {h}"),
    }
}

#[inline]
fn is_obstacle(c: char) -> bool {
    matches!(c, '#' | OBSTACLE)
}

/// Number of `u128` words needed to track every `(cell, heading)` state of a
/// grid with `cells` cells.
fn seen_len(cells: usize) -> Result<usize, PatrolError> {
    let states = cells
        .checked_mul(4)
        .filter(|&n| u32::try_from(n).is_ok())
        .ok_or(PatrolError::TooLarge { cells })?;

    Ok(states.div_ceil(128))
}

/// Index of a `(cell, heading)` state in the seen bitset.
///
/// Cannot overflow for grids accepted by [seen_len].
#[inline]
fn state(id: CellId, h: Direction) -> u32 {
    id.as_u32() * 4 + h as u32 / 2
}
