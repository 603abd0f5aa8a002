//! Bezier-curve (`.bcv`) and subdivision-polygon (`.data`) readers.

use super::{IoError, Tokens, split_header};
use crate::PointN;
use crate::polygon::ControlPolygon;
use std::path::Path;

/// Read Bezier control points: line 1 is the integer degree, followed by
/// `2·(degree+1)` floats as `(x, y)` pairs.
pub fn read_bezier_curve(text: &str) -> Result<Vec<PointN<2>>, IoError> {
    let mut tokens = Tokens::new(text);
    let degree = tokens.next_int()?;
    tokens.points::<2>(degree + 1)
}

/// Read a subdivision polygon: line 1 is `count closed` (TP-style files
/// sometimes omit the flag, which means closed), followed by `2·count`
/// floats as `(x, y)` pairs.
pub fn read_polygon(text: &str) -> Result<ControlPolygon<2>, IoError> {
    let (header, payload) = split_header(text);
    let header: Vec<usize> =
        header.split_whitespace().map(str::parse).collect::<Result<_, _>>()?;
    let (count, closed) = match header[..] {
        [count] => (count, true),
        [count, flag] => (count, flag == 1),
        _ => {
            return Err(IoError::MalformedInput(
                "polygon header must be 'count' or 'count closed'".into(),
            ));
        },
    };
    if count == 0 {
        return Err(IoError::MalformedInput("polygon has no points".into()));
    }

    let points = Tokens::new(payload).points::<2>(count)?;
    Ok(ControlPolygon::new(points, closed))
}

/// [`read_bezier_curve`] over a file.
pub fn load_bezier_curve(path: impl AsRef<Path>) -> Result<Vec<PointN<2>>, IoError> {
    read_bezier_curve(&std::fs::read_to_string(path)?)
}

/// [`read_polygon`] over a file.
pub fn load_polygon(path: impl AsRef<Path>) -> Result<ControlPolygon<2>, IoError> {
    read_polygon(&std::fs::read_to_string(path)?)
}
