use lib::prelude::*;

fn main() -> Result<()> {
    lib::cli::entry(solve)
}

fn solve(mut input: IStr) -> Result<(u32, u32)> {
    let mut a = Vec::new();
    let mut b = Vec::new();

    for (n, mut line) in input.split(b'\n').enumerate() {
        if line.as_data().trim().is_empty() {
            continue;
        }

        match line.next::<(u32, u32)>() {
            Ok((left, right)) => {
                a.push(left);
                b.push(right);
            }
            Err(error) => {
                log::warn!("line {}: skipping: {error}", n + 1);
            }
        }
    }

    a.sort();
    b.sort();

    let mut o1 = 0;
    let mut o2 = 0;

    for (l, r) in a.iter().zip(&b) {
        o1 += l.abs_diff(*r);
    }

    for l in &a {
        let start = b.partition_point(|r| r < l);
        let end = b.partition_point(|r| r <= l);
        o2 += l * (end - start) as u32;
    }

    Ok((o1, o2))
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    const SAMPLE: &[u8] = b"\
3   4
4   3
2   5
1   3
3   9
3   3
";

    #[test]
    fn sample() {
        assert_eq!(super::solve(IStr::new(SAMPLE, 0)).unwrap(), (11, 31));
    }

    #[test]
    fn skips_bad_lines() {
        let input = b"3   4\r\nfour 3\n\n2   5\n7\n1   3\n3   9\n3   3\n4   3\n";
        assert_eq!(super::solve(IStr::new(input, 0)).unwrap(), (11, 31));
    }
}
