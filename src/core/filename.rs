// src/core/filename.rs
//! Path + filename conventions of the dataset.
//!
//! ```text
//! <location_id>/<species_id>/<year>-<location_slug>-<species_slug>.json
//! ```
//!
//! Only the 4-digit year prefix is validated. Anything after it is taken
//! apart best-effort and never rejected.

use crate::config::consts::{DATA_EXT, UNKNOWN};

/// One data file, as understood from its relative path alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    /// Relative path, `/`-separated, exactly as written into the manifest.
    pub path: String,
    pub location_id: String,
    pub species_id: String,
    pub year: u16,
    pub location_slug: String,
    pub species_slug: String,
}

/// Parse a root-relative path. `None` when the filename has no 4-digit year prefix.
pub fn parse_source_path(rel_path: &str) -> Option<SourceFile> {
    let mut segments = rel_path.split('/');
    let location_id = segments.next().unwrap_or_default();
    let species_id = segments.next().unwrap_or(UNKNOWN);

    let filename = rel_path.rsplit('/').next().unwrap_or(rel_path);
    let stem = file_stem(filename);
    let (year, rest) = split_year(stem)?;
    let (location_slug, species_slug) = split_slugs(rest);

    Some(SourceFile {
        path: s!(rel_path),
        location_id: s!(location_id),
        species_id: s!(species_id),
        year,
        location_slug: s!(location_slug),
        species_slug: s!(species_slug),
    })
}

fn file_stem(filename: &str) -> &str {
    filename
        .strip_suffix(DATA_EXT)
        .and_then(|s| s.strip_suffix('.'))
        .unwrap_or(filename)
}

/// `"2005-bear-creek-sockeye"` → `(2005, "bear-creek-sockeye")`.
/// The character right after the year is dropped whatever it is.
pub fn split_year(stem: &str) -> Option<(u16, &str)> {
    let prefix = stem.get(..4)?;
    if !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = prefix.parse().ok()?;
    let mut rest = stem[4..].chars();
    rest.next();
    Some((year, rest.as_str()))
}

/// Last dash segment is the species; everything before it the location.
/// Without a dash the species is `"unknown"`.
pub fn split_slugs(rest: &str) -> (&str, &str) {
    match rest.rsplit_once('-') {
        Some((location, species)) => (location, species),
        None => (rest, UNKNOWN),
    }
}
