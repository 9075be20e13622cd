// File: crates/quadrant-core/src/scale.rs
// Summary: Linear data -> figure-point transforms for the fixed quadrant axes.

use crate::axis::Axis;

/// Maps an axis' data range onto a pixel/point span.
/// `start_px` corresponds to `axis.min`, `end_px` to `axis.max`; for the
/// vertical axis pass bottom as start and top as end so larger values go up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub vmin: f64,
    pub vmax: f64,
    pub start_px: f32,
    pub end_px: f32,
}

impl LinearScale {
    pub fn new(vmin: f64, vmax: f64, start_px: f32, end_px: f32) -> Self {
        let mut s = Self { vmin, vmax, start_px, end_px };
        if (s.vmax - s.vmin).abs() < 1e-12 {
            s.vmax = s.vmin + 1.0;
        }
        s
    }

    pub fn for_axis(axis: &Axis, start_px: f32, end_px: f32) -> Self {
        Self::new(axis.min, axis.max, start_px, end_px)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.vmin) / (self.vmax - self.vmin);
        self.start_px + t as f32 * (self.end_px - self.start_px)
    }

    /// Evenly spaced data values from `vmin` to `vmax` inclusive, `step` apart.
    pub fn ticks(&self, step: f64) -> Vec<f64> {
        if step <= 0.0 {
            return vec![self.vmin, self.vmax];
        }
        let n = ((self.vmax - self.vmin) / step).round() as usize;
        (0..=n).map(|i| self.vmin + step * i as f64).collect()
    }
}
