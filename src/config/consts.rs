// src/config/consts.rs

// Dataset
pub const MANIFEST_VERSION: &str = "3.0.0";
pub const MANIFEST_FORMAT: &str = "organized_by_location_year_species";
pub const REPOSITORY: &str = "alaskafishcounts/adfg-sasap-dataset";
pub const DESCRIPTION: &str = "SASAP Historical Fish Count Dataset";
pub const SOURCE: &str = "SASAP (Statewide Alaska Salmon Assessment Program)";
pub const DEFAULT_REGION: &str = "Alaska";

// Naming conventions written into `patterns`
pub const FILE_NAMING: &str = "[YEAR]-[LOCATION]-[SPECIES].json";
pub const DIRECTORY_STRUCTURE: &str = "[LOCATION_ID]/[SPECIES_ID]/[FILENAME]";
pub const ID_FORMAT: &str = "numeric";

// Scan
pub const DATA_EXT: &str = "json";
pub const UNKNOWN: &str = "unknown";

// Output files (relative to the working directory)
pub const MANIFEST_FILE: &str = "manifest.json";
pub const TABLE_FILE: &str = "location_table.md";

// Table
pub const TREE_URL: &str = "https://github.com/alaskafishcounts/adfg-sasap-dataset/tree/master";
pub const PREVIEW_CHARS: usize = 2000;

/// Species id → short name used for README links.
/// Independent of the names stored in the manifest.
pub const SPECIES_NAMES: &[(&str, &str)] = &[
    ("410", "sockeye"),
    ("420", "pink"),
    ("430", "coho"),
    ("440", "chinook"),
    ("450", "chum"),
    ("460", "steelhead-up"),
    ("470", "steelhead-down"),
    ("480", "whitefish"),
    ("490", "sheefish"),
    ("500", "mixed"),
    ("999", "non-target"),
];

// Local log
pub const LOG_FILE: &str = ".store/debug.log";
