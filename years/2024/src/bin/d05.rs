use lib::prelude::*;

/// Upper bound on supported page numbers.
const PAGES: u32 = 128;

fn main() -> Result<()> {
    lib::cli::entry(solve)
}

fn solve(mut input: IStr) -> Result<(u32, u32)> {
    let mut lines = input.split(b'\n');

    // rules[a] has bit b set if page a must be printed before page b.
    let mut rules = [0u128; PAGES as usize];

    for mut line in lines.by_ref() {
        if line.as_data().trim().is_empty() {
            break;
        }

        let Split((a, b)) = line.next::<Split<'|', (u32, u32)>>()?;
        ensure!(a < PAGES && b < PAGES, "page out of range in rule {a}|{b}");
        rules[a as usize].set_bit(b);
    }

    let mut o1 = 0;
    let mut o2 = 0;
    let mut pages = Vec::new();

    for mut line in lines {
        if line.as_data().trim().is_empty() {
            continue;
        }

        pages.clear();

        for mut page in line.split(b',') {
            let page = page.next::<u32>()?;
            ensure!(page < PAGES, "page {page} out of range");
            pages.push(page);
        }

        let middle = pages.len() / 2;

        if first_violation(&rules, &pages).is_none() {
            o1 += pages[middle];
            continue;
        }

        fix(&rules, &mut pages)?;
        log::info!("fixed: {pages:?}");
        o2 += pages[middle];
    }

    Ok((o1, o2))
}

/// Find the first page which is printed after a page it must precede.
///
/// Returns the index of the offending page and the index of the earliest
/// page it must be moved in front of.
fn first_violation(rules: &[u128], pages: &[u32]) -> Option<(usize, usize)> {
    for (i, &page) in pages.iter().enumerate() {
        let before = rules[page as usize];

        if let Some(j) = pages[..i].iter().position(|&p| before.test_bit(p)) {
            return Some((i, j));
        }
    }

    None
}

/// Reorder pages by moving offending pages in front of the earliest page
/// they must precede until no rule is violated.
fn fix(rules: &[u128], pages: &mut [u32]) -> Result<()> {
    let limit = pages.len() * pages.len();

    for _ in 0..=limit {
        let Some((i, j)) = first_violation(rules, pages) else {
            return Ok(());
        };

        pages[j..=i].rotate_right(1);
    }

    bail!("update {pages:?} could not be ordered in {limit} moves")
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    const SAMPLE: &[u8] = b"\
47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47
";

    #[test]
    fn sample() {
        assert_eq!(super::solve(IStr::new(SAMPLE, 0)).unwrap(), (143, 123));
    }

    #[test]
    fn moves_in_front_of_earliest() {
        let mut rules = [0u128; super::PAGES as usize];
        rules[47].set_bit(13);
        rules[47].set_bit(29);

        let mut pages = [97, 75, 29, 13, 47];
        assert_eq!(super::first_violation(&rules, &pages), Some((4, 2)));
        super::fix(&rules, &mut pages).unwrap();
        assert_eq!(pages, [97, 75, 47, 29, 13]);
    }

    #[test]
    fn unorderable_update() {
        let input = b"1|2\n2|1\n\n3,1,2\n";
        let error = super::solve(IStr::new(input, 0)).unwrap_err();
        assert!(error.to_string().contains("could not be ordered"));
    }

    #[test]
    fn pages_out_of_range() {
        assert!(super::solve(IStr::new(b"1|200\n\n1,200\n", 0)).is_err());
        assert!(super::solve(IStr::new(b"1|2\n\n1,128,2\n", 0)).is_err());
        assert!(super::solve(IStr::new(b"1|x\n\n1,2\n", 0)).is_err());
    }
}
