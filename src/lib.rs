//! Slot-based inventory engine
//!
//! A fixed number of slots, each holding one stack of an item from a
//! shared `ItemRegistry`. Items are added and removed with stack-filling
//! rules, moved between slots by drag/drop, and dropped into or picked up
//! from the world. Every slot change is reported to subscribed observers.
//!
//! # Architecture
//!
//! - `item`: item definitions, the registry, JSON catalog loading
//! - `inventory`: slots, the inventory container, transfers, drag state
//! - `world`: stacks lying outside the inventory (pickups and drops)
//! - `config`: runtime configuration
//!
//! # Example Usage
//!
//! ```
//! use slot_inventory::inventory::Inventory;
//! use slot_inventory::item::{Color, ItemDefinition, ItemRegistry};
//!
//! let mut registry = ItemRegistry::new();
//! registry.add(ItemDefinition::new("apple", "Apple", Color::WHITE, true, 3)).unwrap();
//! let apple = registry.get("apple").unwrap();
//!
//! let mut inventory = Inventory::new(2);
//! inventory.try_add(apple, 5).unwrap();
//! assert_eq!(inventory.slot(0).unwrap().quantity(), 3);
//! assert_eq!(inventory.slot(1).unwrap().quantity(), 2);
//! ```

pub mod config;
pub mod inventory;
pub mod item;
pub mod world;
