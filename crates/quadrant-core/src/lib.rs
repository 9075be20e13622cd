// File: crates/quadrant-core/src/lib.rs
// Summary: Core library entry point; exports loading, layout and rendering for the Skill/Will
// quadrant chart.

pub mod axis;
pub mod chart;
pub mod entry;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod layout;
pub mod loader;
pub mod scale;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::Axis;
pub use chart::{render_pdf_bytes, render_png_bytes, RenderOptions};
pub use entry::{parse_internal_flag, sample_entries, Entry, Quadrant};
pub use error::LoadError;
pub use generator::{ChartFiles, ChartGenerator, NameLabels, DEFAULT_PREFIX};
pub use layout::{build_scene, LayoutOptions, MarkerShape, Primitive, Scene};
pub use loader::{load_entries, read_entries, LoadPolicy};
pub use theme::Theme;
pub use text::TextShaper;
