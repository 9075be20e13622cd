// File: crates/quadrant-core/src/chart.rs
// Summary: Paints a `Scene` onto a Skia canvas; PNG via CPU raster surface, PDF via Skia's PDF
// backend.

use anyhow::{anyhow, Result};
use skia_safe as skia;

use crate::geometry::{arrowhead, circle_radius, square_side, DataPoint};
use crate::layout::{AxisSide, LegendItem, MarkerShape, Primitive, Scene};
use crate::text::{Anchor, TextShaper};
use crate::types::{DEFAULT_DPI, POINTS_PER_INCH};

const ARROW_HEAD_LEN: f32 = 6.0;
const ARROW_HEAD_HALF_ANGLE: f32 = 25.0;
const GRID_DASH: [f32; 2] = [4.0, 2.0];
const CALLOUT_PAD: f32 = 4.0;

pub struct RenderOptions {
    /// Raster resolution; the figure is `FIGURE_PT / 72` inches square.
    pub dpi: u32,
    /// Skip text (title, labels, callout text, legend text). Used for deterministic snapshots.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { dpi: DEFAULT_DPI, draw_labels: true }
    }
}

impl RenderOptions {
    /// Raster pixels per figure point.
    pub fn pixel_scale(&self) -> f32 {
        self.dpi.max(1) as f32 / POINTS_PER_INCH
    }
}

/// Render `scene` to PNG bytes using a CPU raster surface.
/// The surface lives only for this call.
pub fn render_png_bytes(scene: &Scene, opts: &RenderOptions) -> Result<Vec<u8>> {
    let scale = opts.pixel_scale();
    let width = (scene.width * scale).round() as i32;
    let height = (scene.height * scale).round() as i32;

    let mut surface = skia::surfaces::raster_n32_premul((width, height))
        .ok_or_else(|| anyhow!("failed to create {width}x{height} raster surface"))?;
    let canvas = surface.canvas();
    canvas.scale((scale, scale));
    paint_scene(canvas, scene, opts);

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render `scene` as a single-page PDF, 1 unit = 1 pt.
pub fn render_pdf_bytes(scene: &Scene, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    {
        let document = skia::pdf::new_document(&mut out, None);
        let mut page = document.begin_page((scene.width, scene.height), None);
        paint_scene(page.canvas(), scene, opts);
        page.end_page().close();
    }
    if out.is_empty() {
        return Err(anyhow!("PDF backend produced no output"));
    }
    Ok(out)
}

/// Paint every primitive in order, in figure points.
pub fn paint_scene(canvas: &skia::Canvas, scene: &Scene, opts: &RenderOptions) {
    let text = TextShaper::new();
    canvas.clear(scene.background);

    for prim in &scene.primitives {
        match prim {
            Primitive::GridLine { from, to, color, alpha } => {
                let mut paint = stroke(*color, *alpha, 0.8);
                paint.set_path_effect(skia::PathEffect::dash(&GRID_DASH, 0.0));
                canvas.draw_line(scene.to_point(*from), scene.to_point(*to), &paint);
            }
            Primitive::CenterLine { from, to, color, alpha } => {
                let paint = stroke(*color, *alpha, 1.0);
                canvas.draw_line(scene.to_point(*from), scene.to_point(*to), &paint);
            }
            Primitive::Arrow { from, to, color, alpha, width } => {
                with_plot_clip(canvas, scene, |c| {
                    draw_arrow(c, scene, *from, *to, *color, *alpha, *width)
                });
            }
            Primitive::Marker { at, shape, color, area } => {
                with_plot_clip(canvas, scene, |c| {
                    draw_marker(c, scene.to_point(*at), *shape, *color, *area)
                });
            }
            Primitive::NameLabel { text: name, at, offset, size, color } => {
                // Only the anchor is clipped: a label whose point is in range is drawn
                // in full, even where it runs past the plot edge.
                if opts.draw_labels && scene.contains(*at) {
                    let p = scene.to_point(*at);
                    // offset is "up" in figure terms, so subtract on the y-down canvas
                    let anchor = skia::Point::new(p.x + offset.0, p.y - offset.1);
                    text.draw(canvas, name, anchor, Anchor::BottomLeft, *size, *color);
                }
            }
            Primitive::Callout { text: caption, at, fill: bg, alpha, size, color, .. } => {
                let at = scene.to_point(*at);
                let labels = opts.draw_labels;
                draw_callout(canvas, &text, at, caption, *bg, *alpha, *size, *color, labels);
            }
            Primitive::Title { text: title, size, color } => {
                if opts.draw_labels {
                    let at = skia::Point::new(scene.plot.center_x(), scene.plot.top * 0.5);
                    text.draw(canvas, title, at, Anchor::Center, *size, *color);
                }
            }
            Primitive::AxisLabel { side, text: label, size, color } => {
                if opts.draw_labels {
                    draw_axis_label(canvas, &text, scene, *side, label, *size, *color);
                }
            }
            Primitive::Legend { items, size, color } => {
                draw_legend(canvas, &text, scene, items, *size, *color, opts.draw_labels);
            }
        }
    }

    draw_frame(canvas, scene);
}

// ---- helpers ----------------------------------------------------------------

fn stroke(color: skia::Color, alpha: f32, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint.set_alpha_f(alpha);
    paint
}

fn fill(color: skia::Color, alpha: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint.set_alpha_f(alpha);
    paint
}

fn with_plot_clip(canvas: &skia::Canvas, scene: &Scene, draw: impl FnOnce(&skia::Canvas)) {
    canvas.save();
    canvas.clip_rect(scene.plot, skia::ClipOp::Intersect, true);
    draw(canvas);
    canvas.restore();
}

fn draw_frame(canvas: &skia::Canvas, scene: &Scene) {
    canvas.draw_rect(scene.plot, &stroke(scene.frame, 1.0, 0.8));
}

fn draw_marker(
    canvas: &skia::Canvas,
    at: skia::Point,
    shape: MarkerShape,
    color: skia::Color,
    area: f32,
) {
    let paint = fill(color, 1.0);
    match shape {
        MarkerShape::Circle => {
            canvas.draw_circle(at, circle_radius(area), &paint);
        }
        MarkerShape::Square => {
            let side = square_side(area);
            let rect = skia::Rect::from_xywh(at.x - side * 0.5, at.y - side * 0.5, side, side);
            canvas.draw_rect(rect, &paint);
        }
    }
}

fn draw_arrow(
    canvas: &skia::Canvas,
    scene: &Scene,
    from: DataPoint,
    to: DataPoint,
    color: skia::Color,
    alpha: f32,
    width: f32,
) {
    let tail = scene.to_point(from);
    let tip = scene.to_point(to);
    let mut path = skia::PathBuilder::new();
    path.move_to(tail);
    path.line_to(tip);
    if let Some((l, r)) = arrowhead(tail, tip, ARROW_HEAD_LEN, ARROW_HEAD_HALF_ANGLE) {
        path.move_to(l);
        path.line_to(tip);
        path.line_to(r);
    }
    let mut paint = stroke(color, alpha, width);
    paint.set_stroke_cap(skia::paint::Cap::Round);
    paint.set_stroke_join(skia::paint::Join::Round);
    canvas.draw_path(&path.detach(), &paint);
}

#[allow(clippy::too_many_arguments)]
fn draw_callout(
    canvas: &skia::Canvas,
    text: &TextShaper,
    at: skia::Point,
    caption: &str,
    fill_color: skia::Color,
    alpha: f32,
    size: f32,
    color: skia::Color,
    draw_labels: bool,
) {
    let (w, h) = text.measure(caption, size);
    let bounds =
        TextShaper::place(at, Anchor::Center, w, h).with_outset((CALLOUT_PAD, CALLOUT_PAD));
    canvas.draw_rect(bounds, &fill(fill_color, alpha));
    canvas.draw_rect(bounds, &stroke(skia::Color::BLACK, alpha, 1.0));
    if draw_labels {
        text.draw(canvas, caption, at, Anchor::Center, size, color);
    }
}

fn draw_axis_label(
    canvas: &skia::Canvas,
    text: &TextShaper,
    scene: &Scene,
    side: AxisSide,
    label: &str,
    size: f32,
    color: skia::Color,
) {
    match side {
        AxisSide::Horizontal => {
            let below = (scene.plot.bottom + scene.height) * 0.5;
            let at = skia::Point::new(scene.plot.center_x(), below);
            text.draw(canvas, label, at, Anchor::Center, size, color);
        }
        AxisSide::Vertical => {
            canvas.save();
            canvas.translate((scene.plot.left * 0.5, scene.plot.center_y()));
            canvas.rotate(-90.0, None);
            text.draw(canvas, label, skia::Point::new(0.0, 0.0), Anchor::Center, size, color);
            canvas.restore();
        }
    }
}

fn draw_legend(
    canvas: &skia::Canvas,
    text: &TextShaper,
    scene: &Scene,
    items: &[LegendItem],
    size: f32,
    color: skia::Color,
    draw_labels: bool,
) {
    if items.is_empty() {
        return;
    }
    let row_h = size * 1.8;
    let swatch = size * 1.2;
    let pad = size * 0.6;
    let label_w = items
        .iter()
        .map(|it| text.measure(&it.label, size).0)
        .fold(0.0_f32, f32::max);
    let box_w = pad * 3.0 + swatch + label_w;
    let box_h = pad * 2.0 + row_h * items.len() as f32;

    let left = scene.plot.left + pad;
    let bottom = scene.plot.bottom - pad;
    let frame = skia::Rect::from_ltrb(left, bottom - box_h, left + box_w, bottom);
    canvas.draw_round_rect(frame, 3.0, 3.0, &fill(scene.background, 0.8));
    let edge = skia::Color::from_argb(255, 204, 204, 204);
    canvas.draw_round_rect(frame, 3.0, 3.0, &stroke(edge, 0.8, 0.8));

    for (i, it) in items.iter().enumerate() {
        let cy = frame.top + pad + row_h * (i as f32 + 0.5);
        let cx = frame.left + pad + swatch * 0.5;
        draw_marker(canvas, skia::Point::new(cx, cy), it.shape, it.color, swatch * swatch);
        if draw_labels {
            let at = skia::Point::new(frame.left + pad * 2.0 + swatch, cy);
            text.draw(canvas, &it.label, at, Anchor::MiddleLeft, size, color);
        }
    }
}
