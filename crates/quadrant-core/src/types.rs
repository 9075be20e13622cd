// File: crates/quadrant-core/src/types.rs
// Summary: Shared constants (figure size, axis extents, marker and text sizes) and plot margins.

/// Figure edge length in points (10 in at 72 pt/in). The figure is square.
pub const FIGURE_PT: f32 = 720.0;
/// Points per inch; PDF user space is 1 pt per unit.
pub const POINTS_PER_INCH: f32 = 72.0;
/// Default raster resolution.
pub const DEFAULT_DPI: u32 = 300;

/// Lower bound of both axes, in data units.
pub const AXIS_MIN: f64 = -100.0;
/// Upper bound of both axes, in data units.
pub const AXIS_MAX: f64 = 100.0;
/// Spacing of the dashed background grid, in data units.
pub const GRID_STEP: f64 = 25.0;

/// Marker area in pt² (square side 10 pt; circles get the same area).
pub const MARKER_AREA: f32 = 100.0;
pub const ARROW_WIDTH: f32 = 1.5;
pub const ARROW_ALPHA: f32 = 0.7;
/// Name label offset from its marker, in points (right, up).
pub const LABEL_OFFSET: (f32, f32) = (5.0, 5.0);

pub const TITLE_SIZE: f32 = 16.0;
pub const AXIS_LABEL_SIZE: f32 = 14.0;
pub const CALLOUT_SIZE: f32 = 12.0;
pub const NAME_SIZE: f32 = 10.0;
pub const LEGEND_SIZE: f32 = 10.0;

/// Figure margins around the plot square, in points.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    /// Room for the rotated y label on the left, title on top, x label below.
    fn default() -> Self {
        Self::new(48.0, 24.0, 44.0, 44.0)
    }
}
