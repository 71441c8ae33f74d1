//! Cargo manifest I/O (spec §6 "serialization"). A straightforward
//! `serde_json` deserialization of the interchange format produced by
//! the (out-of-scope) importer — no fenced-block scanning, no
//! bracket-matching fallback; that leniency belongs to the importer,
//! not the core.

use serde::Deserialize;
use std::path::Path;

use crate::container::CargoSpec;
use crate::error::PackError;

/// One manifest entry as written by the importer: `{name, qty, l, w,
/// h, weight, unstackable}`. Translated into a `CargoSpec` with a
/// sequential id assigned by read order.
#[derive(Debug, Deserialize)]
struct ManifestEntry {
    name: String,
    qty: u32,
    l: i64,
    w: i64,
    h: i64,
    weight: i64,
    #[serde(default)]
    unstackable: bool,
}

/// Parses a manifest JSON array into validated [`CargoSpec`]s.
pub fn parse_manifest(json: &str) -> Result<Vec<CargoSpec>, PackError> {
    let entries: Vec<ManifestEntry> = serde_json::from_str(json)?;
    if entries.is_empty() {
        return Err(PackError::EmptyManifest);
    }
    entries
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| {
            let spec = CargoSpec {
                id: idx as u32 + 1,
                name: entry.name,
                length: entry.l,
                width: entry.w,
                height: entry.h,
                weight: entry.weight,
                quantity: entry.qty,
                unstackable: entry.unstackable,
                tag: None,
            };
            spec.validate()?;
            Ok(spec)
        })
        .collect()
}

/// Reads and parses a manifest file from disk.
pub fn load_manifest(path: &Path) -> Result<Vec<CargoSpec>, PackError> {
    let contents = std::fs::read_to_string(path)?;
    parse_manifest(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_minimal_manifest() {
        let json = r#"[{"name":"pallet","qty":3,"l":120,"w":100,"h":100,"weight":50}]"#;
        let specs = parse_manifest(json).unwrap();
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].quantity, 3);
        assert!(!specs[0].unstackable);
    }

    #[test]
    fn rejects_an_empty_manifest() {
        assert!(matches!(parse_manifest("[]"), Err(PackError::EmptyManifest)));
    }

    #[test]
    fn rejects_a_manifest_entry_with_zero_dimension() {
        let json = r#"[{"name":"bad","qty":1,"l":0,"w":100,"h":100,"weight":50}]"#;
        assert!(matches!(parse_manifest(json), Err(PackError::InvalidCargoSpec(_))));
    }
}
