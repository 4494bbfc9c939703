use std::collections::HashMap;
use super::definition::ItemDefinition;
use super::error::CatalogError;

/// Central registry of all item definitions
///
/// This is the single source of truth for what items exist. It is built
/// once at startup and only read afterwards: inventories borrow
/// definitions from it, so it must outlive every inventory that holds
/// its items.
#[derive(Debug, Default)]
pub struct ItemRegistry {
    items: HashMap<String, ItemDefinition>,
}

impl ItemRegistry {
    /// Creates a new empty registry
    pub fn new() -> Self {
        ItemRegistry {
            items: HashMap::new(),
        }
    }

    /// Registers an item definition
    ///
    /// An existing definition with the same id is replaced (last write
    /// wins). Returns an error if the id is blank.
    pub fn add(&mut self, item: ItemDefinition) -> Result<(), CatalogError> {
        if item.id().trim().is_empty() {
            return Err(CatalogError::InvalidEntry);
        }

        if let Some(previous) = self.items.insert(item.id().to_string(), item) {
            log::debug!("Item '{}' redefined, previous definition replaced", previous.id());
        }
        Ok(())
    }

    /// Gets an item definition by ID
    ///
    /// Returns None if no item with this ID exists.
    pub fn try_get(&self, id: &str) -> Option<&ItemDefinition> {
        self.items.get(id)
    }

    /// Gets an item definition that is known to exist
    ///
    /// Use `try_get` when absence is a normal outcome (e.g. ids coming
    /// from world data).
    pub fn get(&self, id: &str) -> Result<&ItemDefinition, CatalogError> {
        self.items
            .get(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Returns true if an item with this ID exists
    pub fn exists(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns all item definitions, in no particular order
    pub fn all_items(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.values()
    }
}
