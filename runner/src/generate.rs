use crate::error::RunnerError;
use nanorand::{Rng, WyRand};
use std::io::Write;

/// Writes `count` points: `0 0`, random ones with coordinates in `1..count`, then `count count`.
pub fn write_random_points(
    out: &mut impl Write,
    count: usize,
    seed: Option<u64>,
) -> Result<(), RunnerError> {
    if count < 2 {
        return Err(RunnerError::TooFewPoints(count));
    }
    let mut rng = match seed {
        Some(seed) => WyRand::new_seed(seed),
        None => WyRand::new(),
    };

    writeln!(out, "{}", count)?;
    writeln!(out, "0 0")?;
    for _ in 0..count - 2 {
        let x = rng.generate_range(1..count);
        let y = rng.generate_range(1..count);
        writeln!(out, "{} {}", x, y)?;
    }
    writeln!(out, "{} {}", count, count)?;
    Ok(())
}
