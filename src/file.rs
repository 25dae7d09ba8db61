// src/file.rs

use std::{
    fs, io,
    path::Path,
};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Error, Result};

/// Write `contents` to `path`, creating parent directories as needed.
/// Truncates/overwrites; no temp-file swap.
pub fn write_document(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents).map_err(|e| Error::io(path, e))
}

/// Serialize as 2-space indented JSON and write it out.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    write_document(path, &text)
}

/// Read and deserialize a JSON document. Missing file and bad JSON both fail.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&text).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        let e = io::Error::other("path exists but is not a directory");
        return Err(Error::io(dir, e));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}
