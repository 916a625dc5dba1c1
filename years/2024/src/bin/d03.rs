use lib::prelude::*;

fn main() -> Result<()> {
    lib::cli::entry(solve)
}

fn solve(mut input: IStr) -> Result<(u32, u32)> {
    let mut o1 = 0;
    let mut o2 = 0;

    let mut enabled = true;

    while !input.is_empty() {
        if input.eat(b"do()") {
            enabled = true;
            continue;
        }

        if input.eat(b"don't()") {
            enabled = false;
            continue;
        }

        if input.eat(b"mul(") {
            if let Some((a, b)) = mul(&mut input) {
                o1 += a * b;

                if enabled {
                    o2 += a * b;
                }
            }

            continue;
        }

        input.advance(1);
    }

    Ok((o1, o2))
}

/// Parse the arguments of a `mul(` instruction up to and including the
/// closing parenthesis.
///
/// On failure the input is left at the first byte which didn't match, so that
/// it can be scanned for the next instruction.
fn mul(input: &mut IStr) -> Option<(u32, u32)> {
    let a = input.digits(3)?;

    if !input.eat(b",") {
        return None;
    }

    let b = input.digits(3)?;

    if !input.eat(b")") {
        return None;
    }

    Some((a, b))
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    #[test]
    fn sample() {
        let input = b"xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";
        assert_eq!(super::solve(IStr::new(input, 0)).unwrap(), (161, 48));
    }

    #[test]
    fn nested_instructions() {
        let input = b"mul(1,mul(2,3))mul(1000,2)mul(4,5 )mul( 6,7)do()mul(999,1)";
        assert_eq!(super::solve(IStr::new(input, 0)).unwrap(), (1005, 1005));

        let input = b"don't()mul(2,2)don't()do()mul(3,3)";
        assert_eq!(super::solve(IStr::new(input, 0)).unwrap(), (13, 9));
    }
}
