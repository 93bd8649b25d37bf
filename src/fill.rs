// Column-by-column fill of the wedge between the two extended tangents.

use crate::error::GeometryError;
use crate::raster::{fill_column, pixel_coord};
use crate::tangent::{EPSILON, Tangent};
use crate::types::{FrameBuffer, Point};

/// y = slope * x + intercept
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineEq {
    pub slope: f64,
    pub intercept: f64,
}

impl LineEq {
    /// Line through `a` and `b`. Vertical lines have no slope and are rejected.
    pub fn through(a: Point, b: Point) -> Result<Self, GeometryError> {
        let dx = b.x - a.x;
        if !(dx.abs() > EPSILON) {
            return Err(GeometryError::VerticalTangent);
        }
        let slope = (b.y - a.y) / dx;
        Ok(Self { slope, intercept: a.y - slope * a.x })
    }

    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Inclusive vertical span filled in one column. Not clipped to the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    pub x: i32,
    pub top: i32,
    pub bottom: i32,
}

/// Spans between the two tangents for every column from `start_x` to the
/// right edge of a frame `width` pixels wide.
pub fn column_spans(pair: &[Tangent; 2], start_x: i32, width: usize) -> Result<Vec<ColumnSpan>, GeometryError> {
    let a = LineEq::through(pair[0].near, pair[0].contact)?;
    let b = LineEq::through(pair[1].near, pair[1].contact)?;

    let spans = (start_x.max(0)..width as i32)
        .map(|x| {
            let ya = pixel_coord(a.y_at(x as f64));
            let yb = pixel_coord(b.y_at(x as f64));
            ColumnSpan { x, top: ya.min(yb), bottom: ya.max(yb) }
        })
        .collect();
    Ok(spans)
}

/// Fill the wedge; returns how many columns were scanned.
pub fn fill_between(fb: &mut FrameBuffer, pair: &[Tangent; 2], start_x: i32, color: u32) -> Result<usize, GeometryError> {
    let spans = column_spans(pair, start_x, fb.width)?;
    for s in &spans {
        fill_column(fb, s.x, s.top, s.bottom, color);
    }
    Ok(spans.len())
}
