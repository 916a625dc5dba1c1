use lib::prelude::*;

fn main() -> Result<()> {
    lib::cli::entry(solve)
}

fn solve(mut input: IStr) -> Result<(u32, u32)> {
    let mut o1 = 0;
    let mut o2 = 0;
    let mut levels = Vec::new();

    for (n, mut line) in input.split(b'\n').enumerate() {
        levels.clear();

        for value in line.iter::<u32>() {
            match value {
                Ok(value) => levels.push(value),
                Err(error) => {
                    log::warn!("line {}: skipping: {error}", n + 1);
                    levels.clear();
                    break;
                }
            }
        }

        if levels.is_empty() {
            continue;
        }

        let safe = is_safe(levels.iter().copied());
        let dampened = safe || (0..levels.len()).any(|i| is_safe(skip(&levels, i)));

        log::info!("{levels:?}: safe: {safe}, dampened: {dampened}");

        o1 += u32::from(safe);
        o2 += u32::from(dampened);
    }

    Ok((o1, o2))
}

/// Test that levels are strictly monotonic with steps of one to three.
fn is_safe(levels: impl IntoIterator<Item = u32>) -> bool {
    let mut it = levels.into_iter();

    let Some(mut last) = it.next() else {
        return true;
    };

    let mut sign = None;

    for level in it {
        let ordering = level.cmp(&last);

        if !matches!(level.abs_diff(last), 1..=3) || *sign.get_or_insert(ordering) != ordering {
            return false;
        }

        last = level;
    }

    true
}

/// Iterate over `levels` with the level at `index` removed.
#[inline]
fn skip(levels: &[u32], index: usize) -> impl Iterator<Item = u32> + '_ {
    levels
        .iter()
        .enumerate()
        .filter(move |&(i, _)| i != index)
        .map(|(_, &v)| v)
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    const SAMPLE: &[u8] = b"\
7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

    #[test]
    fn sample() {
        assert_eq!(super::solve(IStr::new(SAMPLE, 0)).unwrap(), (2, 4));
    }

    #[test]
    fn safety() {
        assert!(super::is_safe([1, 2, 5]));
        assert!(super::is_safe([5]));
        assert!(!super::is_safe([1, 2, 2]));
        assert!(!super::is_safe([1, 3, 2]));
        assert!(!super::is_safe([1, 5]));
        assert!(super::is_safe(super::skip(&[9, 1, 2, 3], 0)));
    }

    #[test]
    fn skips_bad_lines() {
        let input = b"7 6 4 2 1\n1 x 3\n\n1 3 6 7 9\r\n";
        assert_eq!(super::solve(IStr::new(input, 0)).unwrap(), (2, 2));
    }
}
