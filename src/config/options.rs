// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

/// Options for one manifest build.
/// `Default` reproduces the fixed behavior: scan `.`, write `manifest.json`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildOptions {
    pub root: PathBuf,
    pub out: PathBuf,
    pub region: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            out: PathBuf::from(MANIFEST_FILE),
            region: s!(DEFAULT_REGION),
        }
    }
}

impl BuildOptions {
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_out(mut self, out: impl Into<PathBuf>) -> Self {
        self.out = out.into();
        self
    }

    /// Relative (`/`-separated) path of the output inside the scan root,
    /// i.e. the one candidate the scan must not pick up.
    ///
    /// Falls back to the bare manifest filename when the output lies elsewhere.
    pub fn excluded_path(&self) -> String {
        relative_to(&self.out, &self.root).unwrap_or_else(|| s!(MANIFEST_FILE))
    }
}

fn relative_to(path: &Path, root: &Path) -> Option<String> {
    let rel = if path.is_relative() && (root == Path::new(".") || root.as_os_str().is_empty()) {
        path.strip_prefix(".").unwrap_or(path)
    } else {
        path.strip_prefix(root).ok()?
    };
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() { None } else { Some(parts.join("/")) }
}

/// Options for rendering the README location table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub manifest: PathBuf,
    pub out: PathBuf,
    pub tree_url: String,
    pub preview: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from(MANIFEST_FILE),
            out: PathBuf::from(TABLE_FILE),
            tree_url: s!(TREE_URL),
            preview: true,
        }
    }
}
