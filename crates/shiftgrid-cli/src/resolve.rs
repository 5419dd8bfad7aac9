//! Month resolution from the roster image filename convention.
//!
//! Deployments drop photographed rosters into a watch directory as
//! `dienstplan_MM.YYYY.jpg`; the newest file is the current month.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use shiftgrid::Month;

/// Parse an `MM.YYYY` month spec.
pub fn parse_month_spec(spec: &str) -> Option<Month> {
    let (month, year) = spec.split_once('.')?;
    if month.len() != 2 || year.len() != 4 {
        return None;
    }
    let month: u32 = month.parse().ok()?;
    let year: i32 = year.parse().ok()?;
    Month::new(year, month)
}

/// Extract the month from a `dienstplan_MM.YYYY.jpg` filename.
pub fn month_from_filename(name: &str) -> Option<Month> {
    let spec = name.strip_prefix("dienstplan_")?.strip_suffix(".jpg")?;
    parse_month_spec(spec)
}

/// Newest roster image in `dir` by modification time, if any.
///
/// Only files matching the `dienstplan_MM.YYYY.jpg` convention count;
/// unreadable entries are skipped.
pub fn newest_roster_image(dir: &Path) -> io::Result<Option<PathBuf>> {
    let mut newest: Option<(std::time::SystemTime, PathBuf)> = None;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if month_from_filename(name).is_none() {
            continue;
        }
        let Ok(modified) = entry.metadata().and_then(|m| m.modified()) else {
            continue;
        };
        if newest.as_ref().is_none_or(|(t, _)| modified > *t) {
            newest = Some((modified, entry.path()));
        }
    }
    Ok(newest.map(|(_, path)| path))
}
