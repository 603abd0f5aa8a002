//! Subdivision control-net (`.net`) reader and writer.

use super::{IoError, Tokens, split_header};
use crate::net::ControlNet;
use std::fmt::Write as _;
use std::path::Path;

/// Read a subdivision net: line 1 is `m n u_closed v_closed`, followed by
/// `3·m·n` floats as the flattened row-major net.
pub fn read_control_net(text: &str) -> Result<ControlNet<3>, IoError> {
    let (header, payload) = split_header(text);
    let header: Vec<usize> =
        header.split_whitespace().map(str::parse).collect::<Result<_, _>>()?;
    let [m, n, u_closed, v_closed] = header[..] else {
        return Err(IoError::MalformedInput(
            "net header must be 'm n u_closed v_closed'".into(),
        ));
    };
    if m == 0 || n == 0 {
        return Err(IoError::MalformedInput("net has a zero extent".into()));
    }

    let points = Tokens::new(payload).points::<3>(m * n)?;
    Ok(ControlNet::from_points(points, m, n, u_closed == 1, v_closed == 1))
}

/// Write a net in the layout [`read_control_net`] accepts, coordinates with
/// four decimal places.
pub fn write_control_net(net: &ControlNet<3>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} {} {}",
        net.rows(),
        net.cols(),
        net.u_closed() as u8,
        net.v_closed() as u8
    );
    for p in net.points() {
        let _ = writeln!(out, "{:.4} {:.4} {:.4}", p[0], p[1], p[2]);
    }
    out
}

/// [`read_control_net`] over a file.
pub fn load_control_net(path: impl AsRef<Path>) -> Result<ControlNet<3>, IoError> {
    read_control_net(&std::fs::read_to_string(path)?)
}
