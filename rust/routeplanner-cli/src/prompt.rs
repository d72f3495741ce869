use std::io::{BufRead, Write};

use anyhow::{bail, Result};

pub const MIN_COORD: f64 = 0.0;
pub const MAX_COORD: f64 = 100.0;

/// Accepts a coordinate in the 0-100 input range.
pub fn validate_coordinate(value: f64) -> Result<f64> {
    if !(MIN_COORD..=MAX_COORD).contains(&value) {
        bail!("coordinate {value} is outside {MIN_COORD}-{MAX_COORD}");
    }
    Ok(value)
}

/// Prompts until a valid coordinate is entered. Fails only when input ends.
pub fn read_coordinate<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<f64> {
    let mut line = String::new();
    loop {
        write!(out, "Enter {label} ({MIN_COORD}-{MAX_COORD}): ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed while reading {label}");
        }
        match line.trim().parse::<f64>().ok().map(validate_coordinate) {
            Some(Ok(v)) => return Ok(v),
            _ => writeln!(out, "Invalid input, expected a number between {MIN_COORD} and {MAX_COORD}.")?,
        }
    }
}

/// Returns `(x, y)` from flag values when given, otherwise prompts for both.
pub fn resolve_point<R: BufRead, W: Write>(
    given: Option<&[f64]>,
    name: &str,
    input: &mut R,
    out: &mut W,
) -> Result<(f64, f64)> {
    match given {
        Some([x, y]) => Ok((validate_coordinate(*x)?, validate_coordinate(*y)?)),
        Some(other) => bail!("{name} needs exactly two values, got {}", other.len()),
        None => {
            let x = read_coordinate(input, out, &format!("{name} x"))?;
            let y = read_coordinate(input, out, &format!("{name} y"))?;
            Ok((x, y))
        }
    }
}
