// src/runner.rs
use std::path::PathBuf;

use chrono::Local;

use crate::{
    config::{BuildOptions, RenderOptions},
    error::Result,
    file::{read_json, write_document, write_json},
    manifest::{build_manifest, Manifest},
    progress::{NullProgress, Progress},
    scan::collect_sources,
    table::{render_table, TableSource},
};

/// What a manifest build produced.
pub struct BuildSummary {
    pub path: PathBuf,
    pub candidates: usize,
    pub skipped: usize,
    pub manifest: Manifest,
}

/// What a table render produced.
pub struct RenderSummary {
    pub path: PathBuf,
    pub rows: usize,
    pub table: String,
}

/// Scan `opts.root`, aggregate, and write the manifest to `opts.out`.
/// `progress` can be None (no status output) or Some(&mut impl Progress).
pub fn build(opts: &BuildOptions, progress: Option<&mut dyn Progress>) -> Result<BuildSummary> {
    logf!("build: scanning {}", opts.root.display());
    let paths = collect_sources(&opts.root, &opts.excluded_path())?;

    let (manifest, skipped) = match progress {
        Some(p) => build_manifest(&paths, &opts.region, Local::now(), p),
        None => build_manifest(&paths, &opts.region, Local::now(), &mut NullProgress),
    };

    write_json(&opts.out, &manifest)?;
    logf!(
        "build: {} files, {} skipped, wrote {}",
        manifest.statistics.total_files,
        skipped,
        opts.out.display()
    );

    Ok(BuildSummary {
        path: opts.out.clone(),
        candidates: paths.len(),
        skipped,
        manifest,
    })
}

/// Read the manifest, render the location table and write it to `opts.out`.
pub fn render(opts: &RenderOptions) -> Result<RenderSummary> {
    let source: TableSource = read_json(&opts.manifest).inspect_err(|e| loge!("render: {e}"))?;
    let table = render_table(&source, &opts.tree_url)?;
    write_document(&opts.out, &table)?;
    logf!("render: {} rows, wrote {}", source.organized.len(), opts.out.display());

    Ok(RenderSummary {
        path: opts.out.clone(),
        rows: source.organized.len(),
        table,
    })
}
