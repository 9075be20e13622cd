// File: crates/quadrant-core/src/theme.rs
// Summary: Colour palette for the quadrant chart (markers, arrows, callouts, grid).

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub background: skia::Color,
    pub grid: skia::Color,
    pub center_line: skia::Color,
    pub frame: skia::Color,
    pub text: skia::Color,
    pub internal: skia::Color,
    pub external: skia::Color,
    pub arrow_internal: skia::Color,
    pub arrow_external: skia::Color,
    pub quadrant_good: skia::Color,
    pub quadrant_mixed: skia::Color,
    pub quadrant_poor: skia::Color,
}

impl Theme {
    /// White figure with the classic named colours (blue/red markers, gray/darkred arrows).
    pub fn light() -> Self {
        Self {
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 176, 176, 176),
            center_line: skia::Color::from_argb(255, 0, 0, 0),
            frame: skia::Color::from_argb(255, 0, 0, 0),
            text: skia::Color::from_argb(255, 0, 0, 0),
            internal: skia::Color::from_argb(255, 0, 0, 255),         // blue
            external: skia::Color::from_argb(255, 255, 0, 0),         // red
            arrow_internal: skia::Color::from_argb(255, 128, 128, 128), // gray
            arrow_external: skia::Color::from_argb(255, 139, 0, 0),   // darkred
            quadrant_good: skia::Color::from_argb(255, 144, 238, 144), // lightgreen
            quadrant_mixed: skia::Color::from_argb(255, 255, 255, 224), // lightyellow
            quadrant_poor: skia::Color::from_argb(255, 240, 128, 128), // lightcoral
        }
    }

    pub fn marker_color(&self, internal: bool) -> skia::Color {
        if internal { self.internal } else { self.external }
    }

    pub fn arrow_color(&self, internal: bool) -> skia::Color {
        if internal { self.arrow_internal } else { self.arrow_external }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
