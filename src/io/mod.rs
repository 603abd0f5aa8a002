//! Readers and writers for the plain-text control-structure formats.
//!
//! Every format is whitespace-separated: a small integer header line followed
//! by a stream of floats. Parsing happens on `&str`; the `load_*` functions
//! are thin `std::fs` wrappers. Nothing in here reaches back into the
//! evaluation or refinement kernel.

mod curve;
mod net;
mod surface;

pub use curve::{load_bezier_curve, load_polygon, read_bezier_curve, read_polygon};
pub use net::{load_control_net, read_control_net, write_control_net};
pub use surface::{
    load_bspline_surface, load_nurbs_surface, read_bspline_surface, read_nurbs_surface,
};

use crate::PointN;
use crate::float_types::Real;

/// I/O and format-conversion errors.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),
    ParseInt(std::num::ParseIntError),
    ParseFloat(std::num::ParseFloatError),

    MalformedInput(String),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),
            ParseInt(error) => write!(f, "Could not parse integer: {error}"),
            ParseFloat(error) => write!(f, "Could not parse float: {error}"),

            MalformedInput(msg) => write!(f, "Input is malformed: {msg}"),
        }
    }
}

impl std::error::Error for IoError {}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}

impl From<std::num::ParseIntError> for IoError {
    fn from(value: std::num::ParseIntError) -> Self {
        Self::ParseInt(value)
    }
}

impl From<std::num::ParseFloatError> for IoError {
    fn from(value: std::num::ParseFloatError) -> Self {
        Self::ParseFloat(value)
    }
}

/// Whitespace token stream over a text payload.
struct Tokens<'a> {
    iter: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Tokens { iter: text.split_whitespace() }
    }

    fn next_token(&mut self) -> Result<&'a str, IoError> {
        self.iter
            .next()
            .ok_or_else(|| IoError::MalformedInput("unexpected end of input".into()))
    }

    fn next_int(&mut self) -> Result<usize, IoError> {
        Ok(self.next_token()?.parse()?)
    }

    fn next_real(&mut self) -> Result<Real, IoError> {
        Ok(self.next_token()?.parse()?)
    }

    fn next_point<const D: usize>(&mut self) -> Result<PointN<D>, IoError> {
        let mut p = PointN::<D>::zeros();
        for c in 0..D {
            p[c] = self.next_real()?;
        }
        Ok(p)
    }

    fn points<const D: usize>(&mut self, count: usize) -> Result<Vec<PointN<D>>, IoError> {
        (0..count).map(|_| self.next_point()).collect()
    }

    fn reals(&mut self, count: usize) -> Result<Vec<Real>, IoError> {
        (0..count).map(|_| self.next_real()).collect()
    }
}

/// Split off the header line; the payload is everything after it.
fn split_header(text: &str) -> (&str, &str) {
    match text.split_once('\n') {
        Some((header, rest)) => (header, rest),
        None => (text, ""),
    }
}
