//! Runtime configuration
//!
//! Read from a JSON file. Every field has a default, so a partial file
//! (or no file at all) is valid:
//!
//! ```json
//! {
//!     "slot_count": 12,
//!     "columns": 4,
//!     "catalog_path": "assets/items.json",
//!     "world_items": [ { "item_id": "apple", "quantity": 5 } ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::world::WorldItem;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Number of inventory slots
    pub slot_count: usize,

    /// Slots per row when the grid is laid out
    pub columns: usize,

    /// Item catalog JSON file
    pub catalog_path: PathBuf,

    /// Items placed in the world at startup
    pub world_items: Vec<WorldItem>,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        InventoryConfig {
            slot_count: 12,
            columns: 4,
            catalog_path: PathBuf::from("assets/items.json"),
            world_items: Vec::new(),
        }
    }
}

impl InventoryConfig {
    /// Default config location: `~/.slot_inventory/config.json`
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|p| p.join(".slot_inventory/config.json"))
            .unwrap_or_else(|| PathBuf::from("./config.json"))
    }

    /// Loads the config at `path`
    ///
    /// A missing file yields the defaults. A file that exists but can't be
    /// read or parsed is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(InventoryConfig::default());
        }

        let json = fs::read_to_string(path)?;
        let mut config: InventoryConfig = serde_json::from_str(&json)?;
        config.columns = config.columns.max(1);

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
