// src/table.rs
//! README location table.
//!
//! Reads only `organized.<id>.name` and the species ids under each location;
//! everything else in the manifest is ignored. Rows are ordered by the numeric
//! value of the location id (signed, surrounding whitespace allowed); an id
//! that does not parse as an integer is an error. Species link text comes from the fixed lookup in
//! `config::consts::SPECIES_NAMES`, not from the manifest.
//!
//! No escaping is applied: ids and names are emitted as-is.

use std::borrow::Cow;

use serde::de::IgnoredAny;
use serde::Deserialize;

use crate::config::consts::{PREVIEW_CHARS, SPECIES_NAMES};
use crate::error::{Error, Result};
use crate::manifest::{IdMap, Manifest};

pub const HEADER: &str = "| Location ID | Location Name | Species Available |";
pub const SEPARATOR: &str = "|-------------|---------------|-------------------|";

/// The slice of the manifest the table needs.
#[derive(Debug, Deserialize)]
pub struct TableSource {
    pub organized: IdMap<LocationView>,
}

#[derive(Debug, Deserialize)]
pub struct LocationView {
    pub name: String,
    pub species: IdMap<IgnoredAny>,
}

impl From<&Manifest> for TableSource {
    fn from(m: &Manifest) -> Self {
        let organized = m
            .organized
            .iter()
            .map(|(id, loc)| {
                let species = loc.species.keys().map(|k| (k.clone(), IgnoredAny)).collect();
                (id.clone(), LocationView { name: loc.name.clone(), species })
            })
            .collect();
        Self { organized }
    }
}

/// Short species name for README links; `species-<id>` when unlisted.
pub fn species_label(id: &str) -> Cow<'static, str> {
    SPECIES_NAMES
        .iter()
        .find(|(k, _)| *k == id)
        .map(|(_, name)| Cow::Borrowed(*name))
        .unwrap_or_else(|| Cow::Owned(format!("species-{id}")))
}

fn link(href: &str, text: &str) -> String {
    join!("<a href=\"", href, "\">", text, "</a>")
}

/// Render header, separator and one row per location, newline-joined
/// (no trailing newline).
pub fn render_table(source: &TableSource, tree_url: &str) -> Result<String> {
    let mut locations = Vec::with_capacity(source.organized.len());
    for (id, loc) in &source.organized {
        let key: i64 = id
            .trim()
            .parse()
            .map_err(|_| Error::NonNumericLocation(id.clone()))?;
        locations.push((key, id, loc));
    }
    // Stable: equal numeric values keep manifest order.
    locations.sort_by_key(|(key, _, _)| *key);

    let mut lines = Vec::with_capacity(locations.len() + 2);
    lines.push(s!(HEADER));
    lines.push(s!(SEPARATOR));

    for (_, id, loc) in locations {
        let location_url = join!(tree_url, "/", id);
        let species: Vec<String> = loc
            .species
            .keys()
            .map(|sid| link(&join!(&location_url, "/", sid), &species_label(sid)))
            .collect();
        let species_text = if species.is_empty() { s!("-") } else { species.join(", ") };

        lines.push(format!(
            "| {id} | {} | {species_text} |",
            link(&location_url, &loc.name)
        ));
    }

    Ok(lines.join("\n"))
}

/// First `PREVIEW_CHARS` characters, with `...` appended when cut.
pub fn preview(table: &str) -> Cow<'_, str> {
    match table.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => Cow::Owned(join!(&table[..cut], "...")),
        None => Cow::Borrowed(table),
    }
}
