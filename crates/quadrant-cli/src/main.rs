// File: crates/quadrant-cli/src/main.rs
// Summary: CLI entry; parses flags, loads entries (CSV or sample), writes the chart files.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum, ValueHint};
use quadrant_core::types::DEFAULT_DPI;
use quadrant_core::{
    load_entries, ChartGenerator, LayoutOptions, LoadPolicy, NameLabels, RenderOptions,
    DEFAULT_PREFIX,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a Skill/Will Quadrant Chart", long_about = None)]
struct Cli {
    /// CSV with a header row, then `name,skill,will[,prev_skill,prev_will],internal`
    #[arg(long, value_hint = ValueHint::FilePath)]
    csv: Option<PathBuf>,

    /// Output path prefix; `.png` and `.pdf` are appended
    #[arg(short, long, default_value = DEFAULT_PREFIX, value_hint = ValueHint::FilePath)]
    output: PathBuf,

    /// Raster resolution of the PNG
    #[arg(long, default_value_t = DEFAULT_DPI)]
    dpi: u32,

    /// Which name-label variants to write
    #[arg(long, value_enum, default_value_t = NamesArg::With)]
    names: NamesArg,

    /// Fail on a missing file, malformed number or empty CSV instead of using sample data
    #[arg(long, action = ArgAction::SetTrue)]
    strict: bool,

    /// Debug-level logging (RUST_LOG takes precedence)
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum NamesArg {
    With,
    Without,
    Both,
}

impl From<NamesArg> for NameLabels {
    fn from(v: NamesArg) -> Self {
        match v {
            NamesArg::With => NameLabels::With,
            NamesArg::Without => NameLabels::Without,
            NamesArg::Both => NameLabels::Both,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    run(&cli, &mut io::stdout().lock())
}

/// Load, render, and write one confirmation line per PNG/PDF pair to `out`.
fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let policy = if cli.strict { LoadPolicy::Strict } else { LoadPolicy::Lenient };
    let entries = load_entries(cli.csv.as_deref(), policy)?;
    info!(count = entries.len(), "plotting entries");

    let render = RenderOptions { dpi: cli.dpi, ..RenderOptions::default() };
    let generator = ChartGenerator::new(LayoutOptions::default(), render);
    for files in generator.generate(&entries, &cli.output, cli.names.into())? {
        writeln!(out, "Chart saved as {} and {}", files.png.display(), files.pdf.display())?;
    }
    Ok(())
}
