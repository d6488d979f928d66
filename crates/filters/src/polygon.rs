//! Polygon area via the shoelace formula

use crate::{Error, Result};

/// Smallest ring that still encloses an area: three `x, y` pairs
pub const MIN_RING_LEN: usize = 6;

/// Area enclosed by a single flat `x0, y0, x1, y1, ...` ring.
///
/// The vertex preceding index 0 is the last vertex, so the ring is closed
/// implicitly. The result is non-negative regardless of winding direction.
pub fn ring_area(ring: &[f64]) -> Result<f64> {
    if ring.len() % 2 != 0 {
        return Err(Error::MalformedMask(format!(
            "odd number of coordinates ({})",
            ring.len()
        )));
    }
    if ring.len() < MIN_RING_LEN {
        return Err(Error::MalformedMask(format!(
            "{} vertices, need at least 3",
            ring.len() / 2
        )));
    }

    let n = ring.len() / 2;
    let mut forward = 0.0;
    let mut backward = 0.0;

    for i in 0..n {
        let prev = (i + n - 1) % n;
        let (x, y) = (ring[2 * i], ring[2 * i + 1]);
        let (px, py) = (ring[2 * prev], ring[2 * prev + 1]);
        forward += x * py;
        backward += y * px;
    }

    Ok(0.5 * (forward - backward).abs())
}

/// Area of a segmentation mask.
///
/// Only the first ring is measured. Holes and additional parts of a
/// multi-part mask are ignored.
pub fn polygon_area(mask: &[Vec<f64>]) -> Result<f64> {
    // TODO: sum every ring once downstream consumers agree on multi-part semantics
    let first = mask.first().ok_or(Error::EmptyMask)?;
    ring_area(first)
}
