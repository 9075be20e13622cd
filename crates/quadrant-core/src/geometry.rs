// File: crates/quadrant-core/src/geometry.rs
// Summary: Data-space points and arrowhead math in figure points.

use skia_safe as skia;

/// A position in data units (x = will, y = skill).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for DataPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Side length of a square with area `area`.
#[inline]
pub fn square_side(area: f32) -> f32 {
    area.max(0.0).sqrt()
}

/// Radius of a circle with area `area`.
#[inline]
pub fn circle_radius(area: f32) -> f32 {
    (area.max(0.0) / std::f32::consts::PI).sqrt()
}

/// The two barb endpoints of an open "->" arrowhead at `tip`, pointing away from `tail`.
/// Returns `None` when tail and tip coincide.
pub fn arrowhead(
    tail: skia::Point,
    tip: skia::Point,
    length: f32,
    half_angle_deg: f32,
) -> Option<(skia::Point, skia::Point)> {
    let dx = tip.x - tail.x;
    let dy = tip.y - tail.y;
    let len = (dx * dx + dy * dy).sqrt();
    if len < 1e-6 {
        return None;
    }
    let (ux, uy) = (dx / len, dy / len);
    let (s, c) = half_angle_deg.to_radians().sin_cos();
    // rotate the reversed direction by ±half_angle
    let (bx, by) = (-ux, -uy);
    let left = skia::Point::new(
        tip.x + length * (bx * c - by * s),
        tip.y + length * (bx * s + by * c),
    );
    let right = skia::Point::new(
        tip.x + length * (bx * c + by * s),
        tip.y + length * (-bx * s + by * c),
    );
    Some((left, right))
}
