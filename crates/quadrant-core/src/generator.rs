// File: crates/quadrant-core/src/generator.rs
// Summary: End-to-end pipeline: entries -> scene -> `{prefix}.png` + `{prefix}.pdf`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::chart::{render_pdf_bytes, render_png_bytes, RenderOptions};
use crate::entry::Entry;
use crate::layout::{build_scene, LayoutOptions};

/// Default output prefix (no extension).
pub const DEFAULT_PREFIX: &str = "/app/output/skill_will_quadrant";

/// Which name-label variants to write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NameLabels {
    /// One chart with labels at `{prefix}`.
    #[default]
    With,
    /// One chart without labels at `{prefix}`.
    Without,
    /// `{prefix}_with_names` and `{prefix}_without_names`.
    Both,
}

/// The two files written for one chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartFiles {
    pub png: PathBuf,
    pub pdf: PathBuf,
}

#[derive(Default)]
pub struct ChartGenerator {
    pub layout: LayoutOptions,
    pub render: RenderOptions,
}

impl ChartGenerator {
    pub fn new(layout: LayoutOptions, render: RenderOptions) -> Self {
        Self { layout, render }
    }

    /// Write every chart `names` asks for and return the files in write order.
    pub fn generate(
        &self,
        entries: &[Entry],
        prefix: &Path,
        names: NameLabels,
    ) -> Result<Vec<ChartFiles>> {
        match names {
            NameLabels::With => Ok(vec![self.write_chart(entries, prefix, true)?]),
            NameLabels::Without => Ok(vec![self.write_chart(entries, prefix, false)?]),
            NameLabels::Both => Ok(vec![
                self.write_chart(entries, &suffixed(prefix, "_with_names"), true)?,
                self.write_chart(entries, &suffixed(prefix, "_without_names"), false)?,
            ]),
        }
    }

    /// Lay out and write one PNG/PDF pair at `prefix`.
    pub fn write_chart(
        &self,
        entries: &[Entry],
        prefix: &Path,
        show_names: bool,
    ) -> Result<ChartFiles> {
        let layout = LayoutOptions { show_names, ..self.layout.clone() };
        let scene = build_scene(entries, &layout);
        debug!(primitives = scene.primitives.len(), show_names, "scene built");

        let files = ChartFiles { png: suffixed(prefix, ".png"), pdf: suffixed(prefix, ".pdf") };
        if let Some(parent) = prefix.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }

        let png = render_png_bytes(&scene, &self.render).context("rendering PNG")?;
        std::fs::write(&files.png, &png)
            .with_context(|| format!("writing {}", files.png.display()))?;
        let pdf = render_pdf_bytes(&scene, &self.render).context("rendering PDF")?;
        std::fs::write(&files.pdf, &pdf)
            .with_context(|| format!("writing {}", files.pdf.display()))?;

        info!(
            png = %files.png.display(),
            pdf = %files.pdf.display(),
            png_bytes = png.len(),
            pdf_bytes = pdf.len(),
            "chart written"
        );
        Ok(files)
    }
}

/// Append `suffix` to the final path component without touching existing dots.
pub fn suffixed(prefix: &Path, suffix: &str) -> PathBuf {
    let mut s = OsString::from(prefix.as_os_str());
    s.push(suffix);
    PathBuf::from(s)
}
