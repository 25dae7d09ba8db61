// src/scan.rs
use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::config::consts::DATA_EXT;
use crate::error::Result;

/// Collect every `*.json` file under `root` as a `/`-separated relative path,
/// sorted lexicographically. Hidden entries are not descended into.
/// Symlinked files count; symlinked directories are not followed.
/// `exclude` (a relative path) is dropped from the result.
pub fn collect_sources(root: &Path, exclude: &str) -> Result<Vec<String>> {
    let mut found = Vec::new();
    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walker {
        let entry = entry?;
        if !is_data_file(&entry) {
            continue;
        }
        let Some(rel) = relative_path(root, entry.path()) else { continue };
        if entry.file_name().to_str().is_none() {
            logd!("scan: non-UTF-8 path {}, kept as {rel}", entry.path().display());
        }
        if rel == exclude {
            logd!("scan: excluding {rel}");
            continue;
        }
        found.push(rel);
    }

    found.sort();
    Ok(found)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn is_data_file(entry: &DirEntry) -> bool {
    let ft = entry.file_type();
    let file = ft.is_file() || (ft.is_symlink() && entry.path().is_file());
    file && has_data_ext(entry.path())
}

fn has_data_ext(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == DATA_EXT)
}

/// Non-UTF-8 components are converted lossily (U+FFFD), not dropped.
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}
