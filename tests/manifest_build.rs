// tests/manifest_build.rs
//
// Manifest builds over synthetic dataset trees.
//
use std::fs;
use std::path::Path;

use fishcount_index::config::BuildOptions;
use fishcount_index::manifest::Manifest;
use fishcount_index::runner;
use serde_json::Value;
use tempfile::tempdir;

fn touch(root: &Path, rel: &str) {
    let p = root.join(rel);
    fs::create_dir_all(p.parent().unwrap()).unwrap();
    fs::write(p, r#"{"counts": []}"#).unwrap();
}

fn build_in(root: &Path) -> Manifest {
    let opts = BuildOptions::default()
        .with_root(root)
        .with_out(root.join("manifest.json"));
    runner::build(&opts, None).unwrap().manifest
}

fn sample_tree(root: &Path) {
    touch(root, "1/410/2005-bear-creek-sockeye.json");
    touch(root, "1/420/2010-bear-creek-pink.json");
    touch(root, "1/420/2008-bear-creek-pink.json");
    touch(root, "2/440/1999-kenai-river-chinook.json");
    touch(root, "10/450/2001-nushagak-chum.json");
    touch(root, "10/450/README.json");
}

#[test]
fn bear_creek_scenario() {
    let temp = tempdir().unwrap();
    let root = temp.path();
    touch(root, "1/410/2005-bear-creek-sockeye.json");
    touch(root, "1/420/2010-bear-creek-pink.json");

    let m = build_in(root);
    let loc = &m.organized["1"];
    assert_eq!(loc.species.keys().collect::<Vec<_>>(), vec!["410", "420"]);
    assert_eq!(m.index.locations["1"], "bear-creek");
    assert_eq!(loc.name, "Bear Creek");
    assert_eq!(loc.region, "Alaska");
    assert_eq!(m.metadata.year_range.min, Some(2005));
    assert_eq!(m.metadata.year_range.max, Some(2010));
    assert_eq!(loc.species["410"].name, "Sockeye");
    assert_eq!(m.index.species["420"], "pink");
}

#[test]
fn totals_are_consistent() {
    let temp = tempdir().unwrap();
    sample_tree(temp.path());
    let m = build_in(temp.path());

    let mut grand = 0;
    for loc in m.organized.values() {
        let sum: usize = loc.species.values().map(|s| s.file_count).sum();
        assert_eq!(loc.total_files, sum);
        grand += loc.total_files;
        for sp in loc.species.values() {
            assert_eq!(sp.file_count, sp.files.len());
            let mut years: Vec<u16> = sp.files.keys().map(|k| k.parse().unwrap()).collect();
            years.sort();
            assert_eq!(sp.years, years);
            assert_eq!(sp.latest_year, years.last().copied());
        }
    }
    assert_eq!(m.statistics.total_files, grand);
    assert_eq!(m.metadata.total_files, grand);
    assert_eq!(grand, 5);

    assert_eq!(m.statistics.total_locations, 3);
    assert_eq!(m.statistics.total_species, 4);
    assert_eq!(m.statistics.years_covered, 5);
    assert_eq!(m.statistics.earliest_year, Some(1999));
    assert_eq!(m.statistics.latest_year, Some(2010));
}

#[test]
fn index_mirrors_organized() {
    let temp = tempdir().unwrap();
    sample_tree(temp.path());
    let m = build_in(temp.path());

    assert_eq!(
        m.organized.keys().collect::<Vec<_>>(),
        m.index.locations.keys().collect::<Vec<_>>()
    );
    for loc in m.organized.values() {
        for id in loc.species.keys() {
            assert!(m.index.species.contains_key(id));
        }
    }
}

#[test]
fn location_keys_follow_lexicographic_path_order() {
    let temp = tempdir().unwrap();
    sample_tree(temp.path());
    let m = build_in(temp.path());
    assert_eq!(m.organized.keys().collect::<Vec<_>>(), vec!["1", "10", "2"]);
}

#[test]
fn files_without_year_prefix_change_nothing() {
    let with = tempdir().unwrap();
    let without = tempdir().unwrap();
    sample_tree(with.path());
    sample_tree(without.path());
    touch(with.path(), "1/410/bear-creek-sockeye.json");
    touch(with.path(), "3/460/notes.json");

    let a = build_in(with.path());
    let b = build_in(without.path());
    assert_eq!(a.organized, b.organized);
    assert_eq!(a.index, b.index);
    assert_eq!(a.statistics, b.statistics);
}

#[test]
fn rebuild_is_stable_apart_from_timestamps() {
    let temp = tempdir().unwrap();
    sample_tree(temp.path());
    let first = build_in(temp.path());
    // The first manifest now sits in the root and must not be picked up.
    let second = build_in(temp.path());

    assert_eq!(first.organized, second.organized);
    assert_eq!(first.index, second.index);
    assert_eq!(first.patterns, second.patterns);
    assert_eq!(first.statistics, second.statistics);
}

#[test]
fn empty_tree_yields_empty_manifest() {
    let temp = tempdir().unwrap();
    let m = build_in(temp.path());

    assert!(m.organized.is_empty());
    assert!(m.index.locations.is_empty());
    assert!(m.index.species.is_empty());
    assert_eq!(m.statistics.total_files, 0);
    assert_eq!(m.statistics.years_covered, 0);
    assert_eq!(m.metadata.year_range.min, None);
    assert_eq!(m.metadata.year_range.max, None);

    let written: Value =
        serde_json::from_str(&fs::read_to_string(temp.path().join("manifest.json")).unwrap()).unwrap();
    assert_eq!(written["metadata"]["year_range"]["min"], Value::Null);
    assert_eq!(written["statistics"]["earliest_year"], Value::Null);
    assert_eq!(written["organized"], serde_json::json!({}));
}

#[test]
fn written_document_has_expected_layout() {
    let temp = tempdir().unwrap();
    sample_tree(temp.path());
    build_in(temp.path());

    let text = fs::read_to_string(temp.path().join("manifest.json")).unwrap();
    assert!(text.starts_with("{\n  \"version\": \"3.0.0\",\n  \"metadata\": {"));

    let doc: Value = serde_json::from_str(&text).unwrap();
    let keys: Vec<&str> = doc.as_object().unwrap().keys().map(|k| k.as_str()).collect();
    for key in ["version", "metadata", "index", "organized", "patterns", "statistics"] {
        assert!(keys.contains(&key), "missing {key}");
    }
    assert_eq!(doc["organized"]["1"]["species"]["420"]["files"]["2010"], "1/420/2010-bear-creek-pink.json");
    assert_eq!(doc["organized"]["1"]["species"]["420"]["years"], serde_json::json!([2008, 2010]));
    assert_eq!(doc["patterns"]["file_naming"], "[YEAR]-[LOCATION]-[SPECIES].json");
    assert_eq!(doc["metadata"]["format"], "organized_by_location_year_species");

    // Round-trips into the typed model.
    let typed: Manifest = serde_json::from_str(&text).unwrap();
    assert_eq!(typed.statistics.total_files, 5);
}

#[test]
fn existing_manifest_is_overwritten() {
    let temp = tempdir().unwrap();
    let out = temp.path().join("manifest.json");
    fs::write(&out, "stale").unwrap();
    touch(temp.path(), "4/410/2003-ugashik-sockeye.json");
    build_in(temp.path());

    let text = fs::read_to_string(&out).unwrap();
    assert!(!text.contains("stale"));
    assert!(text.contains("ugashik"));
}
