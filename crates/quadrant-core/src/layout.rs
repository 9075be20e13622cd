// File: crates/quadrant-core/src/layout.rs
// Summary: Turns entries into a renderer-agnostic `Scene` (ordered draw primitives in data and
// figure space).
// Notes:
// - Horizontal axis is will, vertical axis is skill; both fixed to [-100, 100].
// - Painting lives in `chart.rs`; tests inspect the scene rather than pixels.

use skia_safe as skia;

use crate::axis::Axis;
use crate::entry::{Entry, Quadrant};
use crate::geometry::DataPoint;
use crate::scale::LinearScale;
use crate::theme::Theme;
use crate::types::{
    Insets, ARROW_ALPHA, ARROW_WIDTH, AXIS_LABEL_SIZE, CALLOUT_SIZE, FIGURE_PT, GRID_STEP,
    LABEL_OFFSET, LEGEND_SIZE, MARKER_AREA, NAME_SIZE, TITLE_SIZE,
};

pub const DEFAULT_TITLE: &str = "Skill/Will Quadrant";
const GRID_ALPHA: f32 = 0.3;
const CENTER_ALPHA: f32 = 0.5;
const CALLOUT_ALPHA: f32 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    Square,
}

impl MarkerShape {
    /// Circle for internal, square for external.
    pub fn for_internal(internal: bool) -> Self {
        if internal { MarkerShape::Circle } else { MarkerShape::Square }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSide {
    Horizontal,
    Vertical,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    pub label: String,
    pub shape: MarkerShape,
    pub color: skia::Color,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Dashed background grid line.
    GridLine { from: DataPoint, to: DataPoint, color: skia::Color, alpha: f32 },
    /// Solid line through the origin.
    CenterLine { from: DataPoint, to: DataPoint, color: skia::Color, alpha: f32 },
    /// Movement from previous to current scores.
    Arrow { from: DataPoint, to: DataPoint, color: skia::Color, alpha: f32, width: f32 },
    /// `area` is in pt².
    Marker { at: DataPoint, shape: MarkerShape, color: skia::Color, area: f32 },
    /// `offset` is in points (right, up) from `at`.
    NameLabel { text: String, at: DataPoint, offset: (f32, f32), size: f32, color: skia::Color },
    Callout {
        quadrant: Quadrant,
        text: String,
        at: DataPoint,
        fill: skia::Color,
        alpha: f32,
        size: f32,
        color: skia::Color,
    },
    Title { text: String, size: f32, color: skia::Color },
    AxisLabel { side: AxisSide, text: String, size: f32, color: skia::Color },
    /// Anchored to the lower-left corner of the plot.
    Legend { items: Vec<LegendItem>, size: f32, color: skia::Color },
}

#[derive(Clone, Debug)]
pub struct LayoutOptions {
    pub show_names: bool,
    pub title: String,
    pub theme: Theme,
    pub insets: Insets,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            show_names: true,
            title: DEFAULT_TITLE.to_string(),
            theme: Theme::default(),
            insets: Insets::default(),
        }
    }
}

/// A laid-out figure: sizes in points, plot square, scales and ordered primitives.
#[derive(Clone, Debug)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub plot: skia::Rect,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    pub background: skia::Color,
    pub frame: skia::Color,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    /// Data position to figure points.
    pub fn to_point(&self, p: DataPoint) -> skia::Point {
        skia::Point::new(self.x_scale.to_px(p.x), self.y_scale.to_px(p.y))
    }

    /// Whether `p` lies inside both axis extents (edges included).
    pub fn contains(&self, p: DataPoint) -> bool {
        let inside = |v: f64, axis: &Axis| v >= axis.min && v <= axis.max;
        inside(p.x, &self.x_axis) && inside(p.y, &self.y_axis)
    }

    pub fn markers(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(|p| matches!(p, Primitive::Marker { .. }))
    }

    pub fn arrows(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(|p| matches!(p, Primitive::Arrow { .. }))
    }

    pub fn name_labels(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(|p| matches!(p, Primitive::NameLabel { .. }))
    }

    pub fn callouts(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(|p| matches!(p, Primitive::Callout { .. }))
    }
}

/// Lay out one chart for `entries`.
pub fn build_scene(entries: &[Entry], opts: &LayoutOptions) -> Scene {
    let theme = &opts.theme;
    let x_axis = Axis::will();
    let y_axis = Axis::skill();

    // Largest square that fits inside the insets, centred horizontally.
    let ins = opts.insets;
    let side = (FIGURE_PT - ins.left - ins.right).min(FIGURE_PT - ins.top - ins.bottom).max(1.0);
    let left = ins.left + ((FIGURE_PT - ins.left - ins.right) - side) * 0.5;
    let plot = skia::Rect::from_xywh(left, ins.top, side, side);

    let x_scale = LinearScale::for_axis(&x_axis, plot.left, plot.right);
    let y_scale = LinearScale::for_axis(&y_axis, plot.bottom, plot.top);

    let mut prims = Vec::new();

    // grid
    for v in x_scale.ticks(GRID_STEP) {
        prims.push(Primitive::GridLine {
            from: DataPoint::new(v, y_axis.min),
            to: DataPoint::new(v, y_axis.max),
            color: theme.grid,
            alpha: GRID_ALPHA,
        });
    }
    for v in y_scale.ticks(GRID_STEP) {
        prims.push(Primitive::GridLine {
            from: DataPoint::new(x_axis.min, v),
            to: DataPoint::new(x_axis.max, v),
            color: theme.grid,
            alpha: GRID_ALPHA,
        });
    }
    prims.push(Primitive::CenterLine {
        from: DataPoint::new(x_axis.min, 0.0),
        to: DataPoint::new(x_axis.max, 0.0),
        color: theme.center_line,
        alpha: CENTER_ALPHA,
    });
    prims.push(Primitive::CenterLine {
        from: DataPoint::new(0.0, y_axis.min),
        to: DataPoint::new(0.0, y_axis.max),
        color: theme.center_line,
        alpha: CENTER_ALPHA,
    });

    // arrows under markers
    for e in entries.iter().filter(|e| e.has_moved()) {
        prims.push(Primitive::Arrow {
            from: DataPoint::new(e.prev_will, e.prev_skill),
            to: DataPoint::new(e.will, e.skill),
            color: theme.arrow_color(e.is_internal),
            alpha: ARROW_ALPHA,
            width: ARROW_WIDTH,
        });
    }
    for e in entries {
        prims.push(Primitive::Marker {
            at: DataPoint::new(e.will, e.skill),
            shape: MarkerShape::for_internal(e.is_internal),
            color: theme.marker_color(e.is_internal),
            area: MARKER_AREA,
        });
    }
    if opts.show_names {
        for e in entries {
            prims.push(Primitive::NameLabel {
                text: e.name.clone(),
                at: DataPoint::new(e.will, e.skill),
                offset: LABEL_OFFSET,
                size: NAME_SIZE,
                color: theme.text,
            });
        }
    }

    for q in Quadrant::ALL {
        let fill = match q {
            Quadrant::HighWillHighSkill => theme.quadrant_good,
            Quadrant::LowWillHighSkill | Quadrant::HighWillLowSkill => theme.quadrant_mixed,
            Quadrant::LowWillLowSkill => theme.quadrant_poor,
        };
        prims.push(Primitive::Callout {
            quadrant: q,
            text: q.caption().to_string(),
            at: q.anchor().into(),
            fill,
            alpha: CALLOUT_ALPHA,
            size: CALLOUT_SIZE,
            color: theme.text,
        });
    }

    prims.push(Primitive::Title { text: opts.title.clone(), size: TITLE_SIZE, color: theme.text });
    prims.push(Primitive::AxisLabel {
        side: AxisSide::Horizontal,
        text: x_axis.label.clone(),
        size: AXIS_LABEL_SIZE,
        color: theme.text,
    });
    prims.push(Primitive::AxisLabel {
        side: AxisSide::Vertical,
        text: y_axis.label.clone(),
        size: AXIS_LABEL_SIZE,
        color: theme.text,
    });
    prims.push(Primitive::Legend {
        items: vec![
            LegendItem {
                label: "Internal".into(),
                shape: MarkerShape::Circle,
                color: theme.internal,
            },
            LegendItem {
                label: "External".into(),
                shape: MarkerShape::Square,
                color: theme.external,
            },
        ],
        size: LEGEND_SIZE,
        color: theme.text,
    });

    Scene {
        width: FIGURE_PT,
        height: FIGURE_PT,
        plot,
        x_axis,
        y_axis,
        x_scale,
        y_scale,
        background: theme.background,
        frame: theme.frame,
        primitives: prims,
    }
}
