use lib::prelude::*;

/// The word searched for in straight lines.
const WORD: [char; 4] = ['X', 'M', 'A', 'S'];

fn main() -> Result<()> {
    lib::cli::entry(solve)
}

fn solve(mut input: IStr) -> Result<(u32, u32)> {
    let mut grid = input.next::<&str>()?.parse::<Grid>()?;

    let o1 = count_words(&mut grid);
    log::info!("part 1 grid:\n{}", render_matches(&grid));

    for id in grid.ids() {
        grid.reset(id);
    }

    let o2 = count_crosses(&mut grid);
    log::info!("part 2 grid:\n{}", render_matches(&grid));

    Ok((o1, o2))
}

/// Count every straight line spelling out [WORD] in any of the eight
/// directions, marking the cells which are part of a match.
fn count_words(grid: &mut Grid) -> u32 {
    let mut total = 0;

    for id in grid.ids() {
        if grid[id].value != WORD[0] {
            continue;
        }

        for d in Direction::ALL {
            let mut chain = ArrayVec::<CellId, 4>::new();
            chain.push(id);

            for (next, &c) in grid.walk(id, d).zip(&WORD[1..]) {
                if grid[next].value != c {
                    break;
                }

                chain.push(next);
            }

            if !chain.is_full() {
                continue;
            }

            for &id in &chain {
                grid[id].in_match = true;
            }

            total += 1;
        }
    }

    total
}

/// Count every `A` which has `M` and `S` at opposite ends of both of its
/// diagonals.
fn count_crosses(grid: &mut Grid) -> u32 {
    let mut total = 0;

    for id in grid.ids() {
        if grid[id].value != 'A' {
            continue;
        }

        let mut corners = ArrayVec::<CellId, 4>::new();

        for d in [Direction::NE, Direction::SE] {
            let (Some(a), Some(b)) = (grid.neighbor(id, d), grid.opposite(id, d)) else {
                break;
            };

            if !matches!((grid[a].value, grid[b].value), ('M', 'S') | ('S', 'M')) {
                break;
            }

            corners.extend([a, b]);
        }

        if !corners.is_full() {
            continue;
        }

        grid[id].in_match = true;

        for &c in &corners {
            grid[c].in_match = true;
        }

        total += 1;
    }

    total
}

fn render_matches(grid: &Grid) -> impl core::fmt::Display + '_ {
    grid.render(|cell| if cell.in_match { cell.value } else { '.' })
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    const SAMPLE: &[u8] = b"\
MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX
";

    #[test]
    fn sample() {
        assert_eq!(super::solve(IStr::new(SAMPLE, 0)).unwrap(), (18, 9));
    }

    #[test]
    fn small_sample() {
        let mut grid: Grid = "..X...\n.SAMX.\n.A..A.\nXMAS.S\n.X....\n".parse().unwrap();
        assert_eq!(super::count_words(&mut grid), 4);

        let out = super::render_matches(&grid).to_string();
        assert_eq!(out, "..X...\n.SAMX.\n.A..A.\nXMAS.S\n.X....\n");
    }

    #[test]
    fn marks_crosses() {
        let mut grid: Grid = "M.S\n.A.\nM.S\n".parse().unwrap();
        assert_eq!(super::count_crosses(&mut grid), 1);
        assert_eq!(super::render_matches(&grid).to_string(), "M.S\n.A.\nM.S\n");

        let mut grid: Grid = "M.M\n.A.\nM.S\n".parse().unwrap();
        assert_eq!(super::count_crosses(&mut grid), 0);
        assert_eq!(super::render_matches(&grid).to_string(), "...\n...\n...\n");
    }

    #[test]
    fn one_start_many_words() {
        let mut grid: Grid = "\
S..S..S
.A.A.A.
..MMM..
SAMXMAS
..MMM..
.A.A.A.
S..S..S
"
        .parse()
        .unwrap();

        assert_eq!(super::count_words(&mut grid), 8);
    }

    #[test]
    fn deterministic() {
        let a = super::solve(IStr::new(SAMPLE, 0)).unwrap();
        let b = super::solve(IStr::new(SAMPLE, 0)).unwrap();
        assert_eq!(a, b);
    }
}
