// benches/manifest.rs
use chrono::Local;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fishcount_index::core::parse_source_path;
use fishcount_index::manifest::build_manifest;
use fishcount_index::progress::NullProgress;

const SPECIES: &[(&str, &str)] = &[
    ("410", "sockeye"),
    ("420", "pink"),
    ("430", "coho"),
    ("440", "chinook"),
    ("450", "chum"),
];

/// Synthetic dataset: 200 locations x 5 species x 40 years, sorted like a scan.
fn synthetic_paths() -> Vec<String> {
    let mut paths = Vec::new();
    for loc in 1..=200u32 {
        for (sid, slug) in SPECIES {
            for year in 1980..2020u16 {
                paths.push(format!("{loc}/{sid}/{year}-site-number-{loc}-{slug}.json"));
            }
        }
        paths.push(format!("{loc}/notes.json"));
    }
    paths.sort();
    paths
}

fn bench_manifest(c: &mut Criterion) {
    let paths = synthetic_paths();

    c.bench_function("parse_source_path", |b| {
        b.iter(|| {
            let parsed = paths.iter().filter_map(|p| parse_source_path(black_box(p))).count();
            black_box(parsed)
        })
    });

    c.bench_function("build_manifest", |b| {
        b.iter(|| {
            let (m, skipped) = build_manifest(black_box(&paths), "Alaska", Local::now(), &mut NullProgress);
            black_box((m.statistics.total_files, skipped))
        })
    });
}

criterion_group!(benches, bench_manifest);
criterion_main!(benches);
