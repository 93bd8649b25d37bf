// External tangents of two circles, extended as rays to the frame edge.

use std::f64::consts::FRAC_PI_2;

use crate::error::GeometryError;
use crate::types::{Circle, FrameBuffer, Point};

/// Distances at or below this are treated as zero.
pub const EPSILON: f64 = 1e-9;

/// The visible rectangle [0,width] x [0,height] that rays are clipped to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn of(fb: &FrameBuffer) -> Self {
        Self { width: fb.width as f64, height: fb.height as f64 }
    }
}

/// One external tangent: touches the first circle at `near`, the second at
/// `contact`, and continues past `contact` to `far` on the frame boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tangent {
    pub near: Point,
    pub contact: Point,
    pub far: Point,
}

impl Tangent {
    /// Unit vector from `near` towards `contact`.
    pub fn direction(&self) -> (f64, f64) {
        let len = self.near.distance_to(self.contact);
        ((self.contact.x - self.near.x) / len, (self.contact.y - self.near.y) / len)
    }
}

/// Compute both external tangents of `c1` and `c2`.
///
/// Fails instead of producing NaNs when the centers coincide, when one
/// circle lies inside the other, or when the circles touch from inside
/// (both contact points collapse to one).
pub fn external_tangents(c1: &Circle, c2: &Circle, bounds: Bounds) -> Result<[Tangent; 2], GeometryError> {
    let (dx, dy) = (c2.x - c1.x, c2.y - c1.y);
    let d = c1.center().distance_to(c2.center());
    // `!(d > EPSILON)` also catches NaN
    if !(d > EPSILON) {
        return Err(GeometryError::Coincident);
    }
    let radius_gap = (c1.r - c2.r).abs();
    if d < radius_gap {
        return Err(GeometryError::Contained { distance: d, radius_gap });
    }

    let theta = dy.atan2(dx);
    let alpha = ((c2.r - c1.r) / d).clamp(-1.0, 1.0).asin();

    let tangent = |side: f64| -> Result<Tangent, GeometryError> {
        let beta = theta + side * alpha + side * FRAC_PI_2;
        let (sin, cos) = beta.sin_cos();
        let near = Point { x: c1.x + c1.r * cos, y: c1.y + c1.r * sin };
        let contact = Point { x: c2.x + c2.r * cos, y: c2.y + c2.r * sin };

        if !(near.distance_to(contact) > EPSILON) {
            return Err(GeometryError::Degenerate);
        }
        let mut t = Tangent { near, contact, far: contact };
        t.far = extend_to_bounds(contact, t.direction(), bounds);
        Ok(t)
    };

    Ok([tangent(-1.0)?, tangent(1.0)?])
}

/// Where the ray from `origin` along `unit` leaves `bounds`.
///
/// Slab intersection against the rectangle. A ray that never passes
/// through the rectangle ahead of `origin` stops at `origin`.
pub fn extend_to_bounds(origin: Point, unit: (f64, f64), bounds: Bounds) -> Point {
    let mut t_enter = f64::NEG_INFINITY;
    let mut t_exit = f64::INFINITY;

    for (p, u, max) in [(origin.x, unit.0, bounds.width), (origin.y, unit.1, bounds.height)] {
        if u.abs() > EPSILON {
            let t0 = (0.0 - p) / u;
            let t1 = (max - p) / u;
            t_enter = t_enter.max(t0.min(t1));
            t_exit = t_exit.min(t0.max(t1));
        } else if p < 0.0 || p > max {
            // parallel to this slab and outside it
            return origin;
        }
    }

    if !t_exit.is_finite() || t_exit <= 0.0 || t_enter > t_exit {
        return origin;
    }
    Point { x: origin.x + unit.0 * t_exit, y: origin.y + unit.1 * t_exit }
}
