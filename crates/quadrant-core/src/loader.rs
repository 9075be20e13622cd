// File: crates/quadrant-core/src/loader.rs
// Summary: CSV ingestion into `Entry` values, with fallback to the sample dataset.
// Notes:
// - Rows with >= 6 fields: name, skill, will, prev_skill, prev_will, flag.
// - Rows with 4 or 5 fields: name, skill, will, flag (no history).
// - Shorter rows are skipped; the first row is always a header.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::entry::{parse_internal_flag, sample_entries, Entry, Quadrant};
use crate::error::{LoadError, LoadResult};

/// Minimum field count for a usable row.
pub const MIN_FIELDS: usize = 4;
/// Field count of rows that carry previous scores.
pub const HISTORY_FIELDS: usize = 6;

/// How load problems are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Any problem is logged and the sample dataset is used instead.
    #[default]
    Lenient,
    /// Problems are returned to the caller.
    Strict,
}

/// Produce the entries for one run.
/// `None` yields the sample dataset; a path is parsed under `policy`.
pub fn load_entries(path: Option<&Path>, policy: LoadPolicy) -> LoadResult<Vec<Entry>> {
    let Some(path) = path else {
        info!("no CSV given, using sample data");
        return Ok(sample_entries());
    };

    match read_entries(path) {
        Ok(entries) => {
            info!(path = %path.display(), count = entries.len(), "loaded entries");
            log_quadrant_summary(&entries);
            Ok(entries)
        }
        Err(err) if policy == LoadPolicy::Lenient => {
            warn!(error = %err, "using sample data instead");
            Ok(sample_entries())
        }
        Err(err) => Err(err),
    }
}

/// Strictly parse `path`. A malformed number anywhere aborts the whole read;
/// zero usable rows is reported as `LoadError::Empty`.
pub fn read_entries(path: &Path) -> LoadResult<Vec<Entry>> {
    let read_err = |source| LoadError::Read { path: path.to_path_buf(), source };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(read_err)?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec.map_err(read_err)?;
        let line = rec.position().map(|p| p.line()).unwrap_or(0);
        if rec.len() < MIN_FIELDS {
            debug!(line, fields = rec.len(), "skipping short row");
            continue;
        }

        let field = |i: usize| rec.get(i).unwrap_or_default();
        let number = |i: usize, column: &'static str| -> LoadResult<f64> {
            field(i).parse::<f64>().map_err(|_| LoadError::InvalidNumber {
                path: path.to_path_buf(),
                line,
                column,
                value: field(i).to_string(),
            })
        };

        let skill = number(1, "skill")?;
        let will = number(2, "will")?;
        let entry = if rec.len() >= HISTORY_FIELDS {
            let prev_skill = number(3, "prev_skill")?;
            let prev_will = number(4, "prev_will")?;
            Entry::new(field(0), skill, will, parse_internal_flag(field(5)))
                .with_previous(prev_skill, prev_will)
        } else {
            Entry::new(field(0), skill, will, parse_internal_flag(field(3)))
        };
        out.push(entry);
    }

    if out.is_empty() {
        return Err(LoadError::Empty { path: PathBuf::from(path) });
    }
    Ok(out)
}

fn log_quadrant_summary(entries: &[Entry]) {
    for q in Quadrant::ALL {
        let names: Vec<&str> = entries
            .iter()
            .filter(|e| e.quadrant() == q)
            .map(|e| e.name.as_str())
            .collect();
        debug!(quadrant = %q, count = names.len(), ?names, "quadrant summary");
    }
}
