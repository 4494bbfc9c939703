//! Item catalog loading
//!
//! Builds an `ItemRegistry` from a JSON document of the form:
//!
//! ```json
//! { "items": [ { "id": "apple", "name": "Apple", "color": "#C0392B",
//!                "stackable": true, "maxStack": 16 } ] }
//! ```
//!
//! Bad data is downgraded, never fatal: records with a blank id or a
//! wrongly typed field are skipped, blank names fall back to the id,
//! malformed colors become white, and `maxStack` is coerced into a valid
//! stack size.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use super::color::Color;
use super::definition::ItemDefinition;
use super::error::CatalogError;
use super::registry::ItemRegistry;

const DEFAULT_MAX_STACK: i64 = 99;

fn default_max_stack() -> i64 {
    DEFAULT_MAX_STACK
}

/// One item as written in the catalog file
#[derive(Debug, Clone, Deserialize)]
pub struct ItemRecord {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    /// Hex color, `#RRGGBB` or `RRGGBB`
    #[serde(default)]
    pub color: Option<String>,

    #[serde(default)]
    pub stackable: bool,

    #[serde(default = "default_max_stack", rename = "maxStack", alias = "max_stack")]
    pub max_stack: i64,
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    items: Vec<Value>,
}

impl ItemRecord {
    /// Converts the record into a definition
    ///
    /// Returns None when the id is missing or blank.
    pub fn into_definition(self) -> Option<ItemDefinition> {
        let id = self.id.filter(|id| !id.trim().is_empty())?;
        let name = self
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| id.clone());
        let color = Color::from_catalog_field(self.color.as_deref());
        let max_stack = if self.stackable {
            self.max_stack.clamp(1, u32::MAX as i64) as u32
        } else {
            1
        };

        Some(ItemDefinition::new(id, name, color, self.stackable, max_stack))
    }
}

/// Parses the catalog document into its records
///
/// Only a document that isn't a catalog at all is an error. Null entries
/// in the `items` array are dropped, and entries that don't fit the record
/// shape are logged and skipped so the rest of the catalog still loads.
pub fn parse_catalog(json: &str) -> Result<Vec<ItemRecord>, CatalogError> {
    let document: CatalogDocument = serde_json::from_str(json)?;

    let records = document
        .items
        .into_iter()
        .enumerate()
        .filter(|(_, entry)| !entry.is_null())
        .filter_map(|(position, entry)| match serde_json::from_value::<ItemRecord>(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("Skipping catalog entry {}: {}", position, e);
                None
            }
        })
        .collect();

    Ok(records)
}

/// Adds every valid record in `json` to the registry
///
/// Returns how many definitions were registered. Empty or unparseable
/// documents are logged and add nothing.
pub fn fill_registry(registry: &mut ItemRegistry, json: &str) -> usize {
    if json.trim().is_empty() {
        log::error!("Item catalog JSON is empty");
        return 0;
    }

    let records = match parse_catalog(json) {
        Ok(records) => records,
        Err(e) => {
            log::error!("{}", e);
            return 0;
        }
    };

    if records.is_empty() {
        log::error!("Item catalog JSON has no items");
        return 0;
    }

    let mut added = 0;
    for record in records {
        let Some(definition) = record.into_definition() else {
            log::debug!("Skipping catalog record with blank id");
            continue;
        };

        match registry.add(definition) {
            Ok(()) => added += 1,
            Err(e) => log::warn!("Skipping catalog record: {}", e),
        }
    }

    added
}

/// Loads a registry from a catalog file
///
/// A missing or unreadable file yields an empty registry and an error
/// log; the caller keeps running with no items defined.
pub fn load_registry(path: impl AsRef<Path>) -> ItemRegistry {
    let path = path.as_ref();
    let mut registry = ItemRegistry::new();

    if !path.exists() {
        log::error!("Item catalog not found: {}", path.display());
        return registry;
    }

    match fs::read_to_string(path) {
        Ok(json) => {
            let added = fill_registry(&mut registry, &json);
            log::info!("Loaded {} item definitions from {}", added, path.display());
        }
        Err(e) => log::error!("{}", CatalogError::Io(e)),
    }

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CATALOG: &str = r##"{
        "items": [
            { "id": "apple", "name": "Apple", "color": "#C0392B", "stackable": true, "maxStack": 3 },
            { "id": "sword", "name": "", "color": "purple", "stackable": false, "maxStack": 50 },
            { "id": "   ", "name": "Ghost", "stackable": true },
            null,
            { "id": "dust", "stackable": true, "maxStack": -4 },
            { "id": "gem", "color": "00ff00", "stackable": true }
        ]
    }"##;

    #[test]
    fn test_fill_registry_applies_load_rules() {
        let mut registry = ItemRegistry::new();
        let added = fill_registry(&mut registry, CATALOG);

        assert_eq!(added, 4);
        assert!(!registry.exists("   "));

        let apple = registry.get("apple").unwrap();
        assert_eq!(apple.max_stack(), 3);
        assert_eq!(apple.color(), Color::rgb(0xC0, 0x39, 0x2B));

        let sword = registry.get("sword").unwrap();
        assert_eq!(sword.name(), "sword");
        assert_eq!(sword.max_stack(), 1);
        assert_eq!(sword.color(), Color::WHITE);

        assert_eq!(registry.get("dust").unwrap().max_stack(), 1);

        let gem = registry.get("gem").unwrap();
        assert_eq!(gem.max_stack(), 99);
        assert_eq!(gem.color(), Color::rgb(0, 255, 0));
    }

    #[test]
    fn test_empty_and_malformed_documents_add_nothing() {
        let mut registry = ItemRegistry::new();

        assert_eq!(fill_registry(&mut registry, "   "), 0);
        assert_eq!(fill_registry(&mut registry, "{ \"items\": [] }"), 0);
        assert_eq!(fill_registry(&mut registry, "{ not json"), 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_parse_catalog_surfaces_errors() {
        assert!(matches!(parse_catalog("[1, 2]"), Err(CatalogError::Parse(_))));
        assert_eq!(parse_catalog("{}").unwrap().len(), 0);
    }

    #[test]
    fn test_mistyped_record_does_not_sink_the_catalog() {
        let json = r#"{ "items": [
            { "id": "apple", "stackable": true, "maxStack": 3 },
            { "id": "pear", "stackable": null },
            { "id": "plum", "stackable": true, "maxStack": "ten" },
            7
        ] }"#;

        let mut registry = ItemRegistry::new();
        assert_eq!(fill_registry(&mut registry, json), 1);
        assert_eq!(registry.get("apple").unwrap().max_stack(), 3);
        assert!(!registry.exists("pear"));
        assert!(!registry.exists("plum"));
    }

    #[test]
    fn test_snake_case_max_stack_alias() {
        let records = parse_catalog(r#"{ "items": [ { "id": "a", "stackable": true, "max_stack": 7 } ] }"#).unwrap();
        assert_eq!(records[0].max_stack, 7);
    }

    #[test]
    fn test_load_registry_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();

        let registry = load_registry(file.path());
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_missing_file_gives_empty_registry() {
        let dir = tempfile::tempdir().unwrap();
        let registry = load_registry(dir.path().join("items.json"));
        assert!(registry.is_empty());
    }
}
