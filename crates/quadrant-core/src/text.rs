// File: crates/quadrant-core/src/text.rs
// Summary: Paragraph-based text layout (multi-line, anchored) using Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{
    FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle,
};

/// Where a text block sits relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Anchor is the block centre.
    Center,
    /// Anchor is the bottom-left corner (text grows right and up).
    BottomLeft,
    /// Anchor is the left edge, vertically centred.
    MiddleLeft,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&[
            "DejaVu Sans", "Arial", "Helvetica", "Segoe UI", "Roboto", "sans-serif",
        ]);
        ts
    }

    /// Lay out `text` (newlines allowed) centred within its own widest line.
    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Center);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        // Re-layout at the intrinsic width so centre alignment is per block, not per 10k pt line.
        let width = paragraph.max_intrinsic_width().ceil() + 1.0;
        paragraph.layout(width);
        paragraph
    }

    /// Width and height of the laid-out block.
    pub fn measure(&self, text: &str, size: f32) -> (f32, f32) {
        let p = self.layout(text, size, skia::Color::TRANSPARENT);
        (p.max_width(), p.height())
    }

    /// Draw `text` relative to `at` and return the block's bounds.
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        at: skia::Point,
        anchor: Anchor,
        size: f32,
        color: skia::Color,
    ) -> skia::Rect {
        let p = self.layout(text, size, color);
        let rect = Self::place(at, anchor, p.max_width(), p.height());
        p.paint(canvas, (rect.left, rect.top));
        rect
    }

    /// Bounds of a `w` x `h` block anchored at `at`.
    pub fn place(at: skia::Point, anchor: Anchor, w: f32, h: f32) -> skia::Rect {
        match anchor {
            Anchor::Center => skia::Rect::from_xywh(at.x - w * 0.5, at.y - h * 0.5, w, h),
            Anchor::BottomLeft => skia::Rect::from_xywh(at.x, at.y - h, w, h),
            Anchor::MiddleLeft => skia::Rect::from_xywh(at.x, at.y - h * 0.5, w, h),
        }
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
