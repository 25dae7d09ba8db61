// src/core/mod.rs

pub mod filename;
pub mod sanitize;

pub use filename::{parse_source_path, SourceFile};
