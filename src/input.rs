use crate::Point;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

/// Errors from reading a Point sequence.
///
/// Any of these aborts the program before a search is started.
#[derive(Error, Debug)]
pub enum InputError {
    /// the underlying reader failed
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    /// the input did not contain a count line
    #[error("input is empty, expected the number of points")]
    MissingCount,
    /// the first line is not a non-negative integer
    #[error("line {line}: invalid number of points {text:?}")]
    InvalidCount {
        /// 1-based line number
        line: usize,
        /// the offending line
        text: String,
    },
    /// a line does not consist of exactly two numbers
    #[error("line {line}: invalid point {text:?}")]
    InvalidPoint {
        /// 1-based line number
        line: usize,
        /// the offending line
        text: String,
    },
    /// a coordinate is infinite or NaN
    #[error("line {line}: coordinates must be finite")]
    NonFinite {
        /// 1-based line number
        line: usize,
    },
    /// the number of points read differs from the announced count
    #[error("expected {expected} points, got {found}")]
    CountMismatch {
        /// the count from the first line
        expected: usize,
        /// the number of point lines actually read
        found: usize,
    },
}

/// Reads a Point sequence and sorts it by X, then Y.
///
/// The first line holds the number of Points, every following non-empty line a single Point as
/// two whitespace separated numbers.
///
/// ## Examples
/// ```
/// # use route_coverage::{load_points, Point};
/// let points = load_points("3\n5 1\n0 0\n\n2 2\n".as_bytes()).unwrap();
///
/// assert_eq!(points, [Point::new(0.0, 0.0), Point::new(2.0, 2.0), Point::new(5.0, 1.0)]);
/// ```
///
/// A count that does not match the Points is an error:
/// ```
/// # use route_coverage::{load_points, InputError};
/// let result = load_points("3\n5 1\n0 0\n".as_bytes());
///
/// assert!(matches!(result, Err(InputError::CountMismatch { expected: 3, found: 2 })));
/// ```
pub fn load_points(reader: impl BufRead) -> Result<Vec<Point>, InputError> {
    let mut lines = reader.lines().enumerate();

    let expected = match lines.next() {
        Some((_, line)) => {
            let line = line?;
            line.trim()
                .parse::<usize>()
                .map_err(|_| InputError::InvalidCount { line: 1, text: line })?
        }
        None => return Err(InputError::MissingCount),
    };

    let mut points = Vec::with_capacity(expected);
    for (number, line) in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        points.push(parse_point(&line, number + 1)?);
    }

    if points.len() != expected {
        return Err(InputError::CountMismatch {
            expected,
            found: points.len(),
        });
    }

    Point::sort(&mut points);
    search_log!(debug, "loaded {} points", points.len());
    Ok(points)
}

/// Opens `path` and reads a Point sequence from it. See [`load_points`].
pub fn load_points_from_file(path: impl AsRef<Path>) -> Result<Vec<Point>, InputError> {
    let file = File::open(path)?;
    load_points(BufReader::new(file))
}

fn parse_point(text: &str, line: usize) -> Result<Point, InputError> {
    let invalid = || InputError::InvalidPoint {
        line,
        text: text.to_owned(),
    };

    let mut coords = text.split_whitespace().map(str::parse::<f64>);
    let (x, y) = match (coords.next(), coords.next(), coords.next()) {
        (Some(Ok(x)), Some(Ok(y)), None) => (x, y),
        _ => return Err(invalid()),
    };
    if !x.is_finite() || !y.is_finite() {
        return Err(InputError::NonFinite { line });
    }
    Ok(Point::new(x, y))
}
