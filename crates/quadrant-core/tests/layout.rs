// File: crates/quadrant-core/tests/layout.rs
// Purpose: Inspect the laid-out scene (markers, arrows, callouts, labels) instead of pixels.

use quadrant_core::geometry::DataPoint;
use quadrant_core::layout::AxisSide;
use quadrant_core::{
    build_scene, sample_entries, Entry, LayoutOptions, MarkerShape, Primitive, Quadrant, Theme,
};

#[test]
fn marker_shape_and_color_follow_internal_flag() {
    let theme = Theme::default();
    let entries = vec![Entry::new("In", 10.0, 20.0, true), Entry::new("Out", -10.0, -20.0, false)];
    let scene = build_scene(&entries, &LayoutOptions::default());

    let markers: Vec<_> = scene.markers().collect();
    assert_eq!(markers.len(), 2);
    match markers[0] {
        Primitive::Marker { at, shape, color, .. } => {
            assert_eq!(*at, DataPoint::new(20.0, 10.0), "x is will, y is skill");
            assert_eq!(*shape, MarkerShape::Circle);
            assert_eq!(*color, theme.internal);
        }
        other => panic!("unexpected {other:?}"),
    }
    match markers[1] {
        Primitive::Marker { shape, color, .. } => {
            assert_eq!(*shape, MarkerShape::Square);
            assert_eq!(*color, theme.external);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn arrows_only_for_moved_entries() {
    let theme = Theme::default();
    let entries = vec![
        Entry::new("Still", 5.0, 5.0, true),
        Entry::new("Moved", 30.0, 40.0, false).with_previous(10.0, 20.0),
        Entry::new("Climbed", -20.0, 60.0, true).with_previous(-40.0, 50.0),
    ];
    let scene = build_scene(&entries, &LayoutOptions::default());
    let arrows: Vec<_> = scene
        .arrows()
        .map(|p| match p {
            Primitive::Arrow { from, to, color, alpha, .. } => (*from, *to, *color, *alpha),
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(arrows.len(), 2);

    let (from, to, color, alpha) = arrows[0];
    assert_eq!(from, DataPoint::new(20.0, 10.0));
    assert_eq!(to, DataPoint::new(40.0, 30.0));
    assert_eq!(color, theme.arrow_external);
    assert!(alpha < 1.0, "arrows are semi-transparent");

    let (from, to, color, _) = arrows[1];
    assert_eq!(from, DataPoint::new(50.0, -40.0));
    assert_eq!(to, DataPoint::new(60.0, -20.0));
    assert_eq!(color, theme.arrow_internal);
    assert_ne!(theme.arrow_internal, theme.arrow_external);
}

#[test]
fn label_anchor_range_includes_edges() {
    let scene = build_scene(&[], &LayoutOptions::default());
    assert!(scene.contains(DataPoint::new(100.0, 0.0)));
    assert!(scene.contains(DataPoint::new(-100.0, 100.0)));
    assert!(!scene.contains(DataPoint::new(100.5, 0.0)));
    assert!(!scene.contains(DataPoint::new(0.0, -101.0)));
}

#[test]
fn sample_data_draws_one_arrow_per_entry() {
    let scene = build_scene(&sample_entries(), &LayoutOptions::default());
    assert_eq!(scene.markers().count(), 6);
    assert_eq!(scene.arrows().count(), 6);
}

#[test]
fn arrows_are_painted_beneath_markers() {
    let scene = build_scene(&sample_entries(), &LayoutOptions::default());
    let prims = &scene.primitives;
    let last_arrow = prims.iter().rposition(|p| matches!(p, Primitive::Arrow { .. })).unwrap();
    let first_marker = prims.iter().position(|p| matches!(p, Primitive::Marker { .. })).unwrap();
    assert!(last_arrow < first_marker);
}

#[test]
fn four_fixed_quadrant_callouts() {
    let theme = Theme::default();
    let scene = build_scene(&[], &LayoutOptions::default());
    let callouts: Vec<_> = scene
        .callouts()
        .map(|p| match p {
            Primitive::Callout { quadrant, at, fill, .. } => (*quadrant, *at, *fill),
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(
        callouts,
        vec![
            (Quadrant::HighWillHighSkill, DataPoint::new(50.0, 50.0), theme.quadrant_good),
            (Quadrant::LowWillHighSkill, DataPoint::new(-50.0, 50.0), theme.quadrant_mixed),
            (Quadrant::HighWillLowSkill, DataPoint::new(50.0, -50.0), theme.quadrant_mixed),
            (Quadrant::LowWillLowSkill, DataPoint::new(-50.0, -50.0), theme.quadrant_poor),
        ]
    );
}

#[test]
fn name_labels_toggle() {
    let entries = sample_entries();
    let with = build_scene(&entries, &LayoutOptions::default());
    let names: Vec<_> = with
        .name_labels()
        .map(|p| match p {
            Primitive::NameLabel { text, .. } => text.as_str(),
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(names, ["Alice", "Bob", "Charlie", "Diana", "Eve", "Frank"]);

    let opts = LayoutOptions { show_names: false, ..LayoutOptions::default() };
    let without = build_scene(&entries, &opts);
    assert_eq!(without.name_labels().count(), 0);
    assert_eq!(without.markers().count(), 6);
}

#[test]
fn fixed_axes_square_plot_and_chrome() {
    // points far outside the nominal range are still laid out (and later clipped)
    let scene = build_scene(&[Entry::new("Far", 500.0, -500.0, true)], &LayoutOptions::default());
    assert_eq!((scene.x_axis.min, scene.x_axis.max), (-100.0, 100.0));
    assert_eq!((scene.y_axis.min, scene.y_axis.max), (-100.0, 100.0));
    assert!((scene.plot.width() - scene.plot.height()).abs() < 1e-3);

    let origin = scene.to_point(DataPoint::new(0.0, 0.0));
    assert!((origin.x - scene.plot.center_x()).abs() < 1e-3);
    assert!((origin.y - scene.plot.center_y()).abs() < 1e-3);
    let top_right = scene.to_point(DataPoint::new(100.0, 100.0));
    assert!((top_right.x - scene.plot.right).abs() < 1e-3);
    assert!((top_right.y - scene.plot.top).abs() < 1e-3);

    let prims = &scene.primitives;
    let centre_lines = prims.iter().filter(|p| matches!(p, Primitive::CenterLine { .. })).count();
    assert_eq!(centre_lines, 2);
    let grid = prims.iter().filter(|p| matches!(p, Primitive::GridLine { .. })).count();
    assert_eq!(grid, 18);

    let mut sides = Vec::new();
    let mut title = None;
    let mut legend = None;
    for p in &scene.primitives {
        match p {
            Primitive::AxisLabel { side, text, .. } => sides.push((*side, text.clone())),
            Primitive::Title { text, .. } => title = Some(text.clone()),
            Primitive::Legend { items, .. } => {
                legend = Some(items.iter().map(|i| (i.label.clone(), i.shape)).collect::<Vec<_>>())
            }
            _ => {}
        }
    }
    assert_eq!(
        sides,
        vec![(AxisSide::Horizontal, "Will".to_string()), (AxisSide::Vertical, "Skill".to_string())]
    );
    assert_eq!(title.as_deref(), Some("Skill/Will Quadrant"));
    assert_eq!(
        legend,
        Some(vec![
            ("Internal".to_string(), MarkerShape::Circle),
            ("External".to_string(), MarkerShape::Square),
        ])
    );
}
