// src/manifest/mod.rs
//! # Manifest
//!
//! The manifest is the single JSON index of the dataset. It is rebuilt from a
//! full directory scan on every run and overwrites the previous one.
//!
//! ## Shape
//! ```text
//! version
//! metadata    generation stamps, totals, year_range
//! index       location id → slug, species id → slug
//! organized   location id → { name, slug, region, total_files,
//!                species: species id → { name, slug, files: year → path,
//!                                        years, latest_year, file_count } }
//! patterns    naming conventions (static)
//! statistics  totals, distinct years, earliest/latest year
//! ```
//!
//! ## Invariants
//! - `organized` and `index.locations` hold the same location ids.
//! - every species id under any location is in `index.species`.
//! - `years` is the ascending list of `files` keys; `latest_year` its max.
//! - `Location::total_files` is the sum of its species' `file_count`;
//!   `statistics.total_files` the sum over locations.
//!
//! ## Ordering
//! Paths are aggregated in lexicographic order, so object keys appear in
//! first-seen path order (`"10"` before `"2"`). Display metadata for an id
//! comes from the first file seen for it. Numeric ordering is only applied
//! by the README table.
pub mod builder;
pub mod model;

pub use builder::{build_manifest, ManifestBuilder};
pub use model::*;
