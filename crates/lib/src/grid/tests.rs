use super::{CellId, Direction, Grid, GridError};

const SAMPLE: &str = "abcde\nfghij\nklmno\npqrst\n";

/// Position of a cell as `(x, y)`.
fn pos(grid: &Grid, id: CellId) -> (isize, isize) {
    let columns = grid.columns_len();
    ((id.index() % columns) as isize, (id.index() / columns) as isize)
}

fn offset(d: Direction) -> (isize, isize) {
    match d {
        Direction::N => (0, -1),
        Direction::NE => (1, -1),
        Direction::E => (1, 0),
        Direction::SE => (1, 1),
        Direction::S => (0, 1),
        Direction::SW => (-1, 1),
        Direction::W => (-1, 0),
        Direction::NW => (-1, -1),
    }
}

#[test]
fn neighbours_match_coordinates() {
    let grid: Grid = SAMPLE.parse().unwrap();
    assert_eq!(grid.len(), 20);
    assert_eq!(grid.rows_len(), 4);
    assert_eq!(grid.columns_len(), 5);

    for id in grid.ids() {
        let (x, y) = pos(&grid, id);

        for d in Direction::ALL {
            let (dx, dy) = offset(d);
            let (nx, ny) = (x + dx, y + dy);

            let inside = (0..5).contains(&nx) && (0..4).contains(&ny);
            let actual = grid.neighbor(id, d).map(|n| pos(&grid, n));

            assert_eq!(actual, inside.then_some((nx, ny)), "{id} {d}");
        }
    }
}

#[test]
fn diagonals_compose_orthogonal_links() {
    let grid: Grid = SAMPLE.parse().unwrap();

    for id in grid.ids() {
        for d in Direction::DIAGONAL {
            let (vertical, horizontal) = d.legs();
            let horizontal = horizontal.unwrap();

            let composed = grid
                .neighbor(id, vertical)
                .and_then(|n| grid.neighbor(n, horizontal));

            assert_eq!(grid.neighbor(id, d), composed, "{id} {d}");
        }
    }
}

#[test]
fn links_are_mutual() {
    let grid: Grid = SAMPLE.parse().unwrap();

    for id in grid.ids() {
        for d in Direction::ALL {
            if let Some(n) = grid.neighbor(id, d) {
                assert_eq!(grid.opposite(n, d), Some(id), "{id} {d}");
            }
        }
    }
}

#[test]
fn opposite_is_involutive() {
    for d in Direction::ALL {
        assert_ne!(d.opposite(), d);
        assert_eq!(d.opposite().opposite(), d);
        assert_eq!(d.opposite().is_diagonal(), d.is_diagonal());
    }
}

#[test]
fn line_terminators() {
    for input in [
        "ab\ncd",
        "ab\rcd",
        "ab\r\ncd\r\n",
        "ab\u{2028}cd",
        "ab\u{2029}cd\u{2029}",
        "\n\nab\n\n\ncd\n\n",
    ] {
        let grid: Grid = input.parse().unwrap();
        let out = grid.render(|c| c.value).to_string();
        assert_eq!(out, "ab\ncd\n", "{input:?}");
    }
}

#[test]
fn unicode_values() {
    let grid: Grid = "äö\nüß".parse().unwrap();
    let last = grid.ids().last().unwrap();
    assert_eq!(grid[last].value, 'ß');
    assert_eq!(grid.neighbor(grid.first(), Direction::SE), Some(last));
}

#[test]
fn rejects_bad_shapes() {
    assert_eq!("".parse::<Grid>().unwrap_err(), GridError::Empty);
    assert_eq!("\r\n\u{2028}".parse::<Grid>().unwrap_err(), GridError::Empty);

    assert_eq!(
        "abc\nab\n".parse::<Grid>().unwrap_err(),
        GridError::Ragged {
            row: 1,
            expected: 3,
            actual: 2
        }
    );

    assert_eq!(
        "ab\nab\nabc".parse::<Grid>().unwrap_err(),
        GridError::Ragged {
            row: 2,
            expected: 2,
            actual: 3
        }
    );
}

#[test]
fn rows_and_walks() {
    let grid: Grid = SAMPLE.parse().unwrap();

    let rows = grid
        .rows()
        .map(|row| row.map(|id| grid[id].value).collect::<String>())
        .collect::<Vec<_>>();

    assert_eq!(rows, ["abcde", "fghij", "klmno", "pqrst"]);

    let m = grid.find(|c| c.value == 'm').unwrap();
    let west = grid.walk(m, Direction::W).map(|id| grid[id].value);
    assert!(west.eq(['l', 'k']));
    let ray = grid.ray(m, Direction::NE).map(|id| grid[id].value);
    assert!(ray.eq(['m', 'i', 'e']));
}

#[test]
fn reset_keeps_candidates() {
    let mut grid: Grid = SAMPLE.parse().unwrap();
    let id = grid.find(|c| c.value == 'g').unwrap();

    let cell = &mut grid[id];
    cell.value = 'X';
    cell.visits = 3;
    cell.in_loop = true;
    cell.in_match = true;
    cell.candidate = true;

    grid.reset(id);
    grid.reset(id);

    let cell = &grid[id];
    assert_eq!(cell.value, 'g');
    assert_eq!(cell.original(), 'g');
    assert_eq!(cell.visits, 0);
    assert!(!cell.in_loop);
    assert!(!cell.in_match);
    assert!(cell.candidate);
}

#[test]
fn cell_ids_fit_u32() {
    assert_eq!(CellId::try_new(0), Some(CellId::new(0)));
    assert_eq!(CellId::try_new(CellId::MAX_CELLS - 1).map(CellId::as_u32), Some(u32::MAX - 1));
    assert_eq!(CellId::try_new(CellId::MAX_CELLS), None);
    assert_eq!(CellId::try_new(usize::MAX), None);
}
