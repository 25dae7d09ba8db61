// src/manifest/builder.rs
use std::collections::BTreeSet;

use chrono::{DateTime, Local, Utc};
use indexmap::IndexMap;

use crate::config::consts::*;
use crate::core::sanitize::display_name;
use crate::core::parse_source_path;
use crate::progress::Progress;

use super::model::*;

/// Display metadata captured from the first file seen for an id.
#[derive(Clone, Debug)]
struct Meta {
    name: String,
    slug: String,
}

impl Meta {
    fn from_slug(slug: &str) -> Self {
        Self { name: display_name(slug), slug: s!(slug) }
    }
}

struct SpeciesAcc {
    meta: Meta,
    files: IndexMap<u16, String>,
}

struct LocationAcc {
    meta: Meta,
    species: IdMap<SpeciesAcc>,
}

/// Single-pass aggregation state. Feed paths in order with [`add`](Self::add),
/// then [`finish`](Self::finish) into a [`Manifest`].
pub struct ManifestBuilder {
    region: String,
    locations: IdMap<LocationAcc>,
    // Species metadata is first-seen-wins across all locations.
    species: IdMap<Meta>,
    skipped: usize,
}

impl ManifestBuilder {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            locations: IdMap::new(),
            species: IdMap::new(),
            skipped: 0,
        }
    }

    /// Fold one relative path in. Returns `false` (and counts a skip) when
    /// the filename carries no year prefix.
    pub fn add(&mut self, rel_path: &str) -> bool {
        let Some(src) = parse_source_path(rel_path) else {
            self.skipped += 1;
            return false;
        };

        let species_meta = self
            .species
            .entry(src.species_id.clone())
            .or_insert_with(|| Meta::from_slug(&src.species_slug))
            .clone();

        let location = self
            .locations
            .entry(src.location_id)
            .or_insert_with(|| LocationAcc {
                meta: Meta::from_slug(&src.location_slug),
                species: IdMap::new(),
            });

        // Same year twice: last path wins, key keeps its position.
        location
            .species
            .entry(src.species_id)
            .or_insert_with(|| SpeciesAcc { meta: species_meta, files: IndexMap::new() })
            .files
            .insert(src.year, src.path);
        true
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn finish(self, generated_at: DateTime<Local>) -> Manifest {
        let mut organized = IdMap::new();
        let mut index = Index::default();
        let mut all_years = BTreeSet::new();

        for (location_id, acc) in self.locations {
            index.locations.insert(location_id.clone(), acc.meta.slug.clone());

            let mut location = Location {
                name: acc.meta.name,
                slug: acc.meta.slug,
                region: self.region.clone(),
                total_files: 0,
                species: IdMap::new(),
            };

            for (species_id, sp) in acc.species {
                index
                    .species
                    .entry(species_id.clone())
                    .or_insert_with(|| sp.meta.slug.clone());

                let mut years: Vec<u16> = sp.files.keys().copied().collect();
                years.sort_unstable();
                all_years.extend(years.iter().copied());

                let file_count = sp.files.len();
                location.total_files += file_count;
                location.species.insert(species_id, Species {
                    name: sp.meta.name,
                    slug: sp.meta.slug,
                    files: sp.files.into_iter().map(|(y, p)| (y.to_string(), p)).collect(),
                    latest_year: years.last().copied(),
                    years,
                    file_count,
                });
            }

            organized.insert(location_id, location);
        }

        let total_files = organized.values().map(|l| l.total_files).sum();
        let year_range = YearRange {
            min: all_years.first().copied(),
            max: all_years.last().copied(),
        };

        let statistics = Statistics {
            total_files,
            total_locations: organized.len(),
            total_species: index.species.len(),
            years_covered: all_years.len(),
            earliest_year: year_range.min,
            latest_year: year_range.max,
        };

        let metadata = Metadata {
            generated: generated_at
                .with_timezone(&Utc)
                .format("%Y-%m-%dT%H:%M:%S%.6fZ")
                .to_string(),
            generation_timestamp: generated_at.naive_local().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
            total_files,
            format: s!(MANIFEST_FORMAT),
            repository: s!(REPOSITORY),
            description: s!(DESCRIPTION),
            source: s!(SOURCE),
            years_covered: statistics.years_covered,
            locations_with_data: statistics.total_locations,
            species_covered: statistics.total_species,
            year_range,
        };

        Manifest {
            version: s!(MANIFEST_VERSION),
            metadata,
            index,
            organized,
            patterns: Patterns::default(),
            statistics,
        }
    }
}

impl Default for Patterns {
    fn default() -> Self {
        Self {
            file_naming: s!(FILE_NAMING),
            directory_structure: s!(DIRECTORY_STRUCTURE),
            location_id_format: s!(ID_FORMAT),
            species_id_format: s!(ID_FORMAT),
        }
    }
}

/// Aggregate already-sorted relative paths into a manifest.
/// Returns the manifest and how many paths were skipped.
pub fn build_manifest(
    paths: &[String],
    region: &str,
    generated_at: DateTime<Local>,
    progress: &mut dyn Progress,
) -> (Manifest, usize) {
    progress.begin(paths.len());
    let mut builder = ManifestBuilder::new(region);
    for path in paths {
        if builder.add(path) {
            progress.item_done(path);
        } else {
            logd!("skip (no year prefix): {path}");
            progress.skipped(path);
        }
    }
    progress.finish();

    let skipped = builder.skipped();
    (builder.finish(generated_at), skipped)
}
