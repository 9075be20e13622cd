// File: crates/quadrant-core/src/axis.rs
// Summary: Axis model with labels and fixed ranges.

use crate::types::{AXIS_MAX, AXIS_MIN};

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    /// Horizontal axis: will, fixed to [-100, 100].
    pub fn will() -> Self {
        Self::new("Will", AXIS_MIN, AXIS_MAX)
    }

    /// Vertical axis: skill, fixed to [-100, 100].
    pub fn skill() -> Self {
        Self::new("Skill", AXIS_MIN, AXIS_MAX)
    }
}
