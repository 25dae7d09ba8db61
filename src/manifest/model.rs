// src/manifest/model.rs
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered id → value mapping. Output key order is insertion order.
pub type IdMap<V> = IndexMap<String, V>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub version: String,
    pub metadata: Metadata,
    pub index: Index,
    pub organized: IdMap<Location>,
    pub patterns: Patterns,
    pub statistics: Statistics,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub generated: String,
    pub generation_timestamp: String,
    pub total_files: usize,
    pub format: String,
    pub repository: String,
    pub description: String,
    pub source: String,
    pub years_covered: usize,
    pub locations_with_data: usize,
    pub species_covered: usize,
    pub year_range: YearRange,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub min: Option<u16>,
    pub max: Option<u16>,
}

/// Id → slug lookups.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    pub locations: IdMap<String>,
    pub species: IdMap<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub slug: String,
    pub region: String,
    pub total_files: usize,
    pub species: IdMap<Species>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    pub name: String,
    pub slug: String,
    /// Year (as string key) → relative file path.
    pub files: IdMap<String>,
    pub years: Vec<u16>,
    pub latest_year: Option<u16>,
    pub file_count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patterns {
    pub file_naming: String,
    pub directory_structure: String,
    pub location_id_format: String,
    pub species_id_format: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_files: usize,
    pub total_locations: usize,
    pub total_species: usize,
    pub years_covered: usize,
    pub earliest_year: Option<u16>,
    pub latest_year: Option<u16>,
}
