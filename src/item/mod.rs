// Item system module
//
// This module provides the item catalog, including:
// - Item definitions and their display colors
// - Item registry for centralized lookup by id
// - JSON catalog loading

pub mod color;
pub mod definition;
pub mod error;
pub mod loader;
pub mod registry;

// Re-export main types for convenient access
pub use color::Color;
pub use definition::ItemDefinition;
pub use error::CatalogError;
pub use loader::{fill_registry, load_registry, ItemRecord};
pub use registry::ItemRegistry;
