//! Items lying in the world
//!
//! The world side of pickup and drop: stacks that exist outside any
//! inventory, identified by item id. Picking one up is a plain
//! `Inventory::try_add`; dropping one goes through `WorldDropTarget`.

use serde::{Deserialize, Serialize};

use crate::inventory::{Inventory, InventoryError, WorldDropTarget};
use crate::item::{ItemDefinition, ItemRegistry};

/// A stack of items lying in the world
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldItem {
    pub item_id: String,
    pub quantity: u32,
}

impl WorldItem {
    pub fn new(item_id: impl Into<String>, quantity: u32) -> Self {
        WorldItem {
            item_id: item_id.into(),
            quantity,
        }
    }
}

/// What happened when the player tried to pick an item up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupOutcome {
    /// Everything fit; the world item is gone
    Collected { quantity: u32 },

    /// The inventory filled up; the world item keeps the remainder
    ///
    /// `collected` is always at least 1.
    Partial { collected: u32, remaining: u32 },

    /// Nothing fit; the world item is untouched
    InventoryFull { remaining: u32 },

    /// The item id isn't in the registry; the world item stays
    UnknownItem,

    /// No world item at that index
    NothingThere,
}

/// All item stacks currently lying in the world
///
/// An optional limit caps how many stacks may exist at once, after which
/// spawns and drops are refused.
#[derive(Debug, Default)]
pub struct ItemWorld {
    items: Vec<WorldItem>,
    limit: Option<usize>,
}

impl ItemWorld {
    pub fn new() -> Self {
        ItemWorld::default()
    }

    /// Creates a world that holds at most `limit` stacks
    pub fn with_limit(limit: usize) -> Self {
        ItemWorld {
            items: Vec::new(),
            limit: Some(limit),
        }
    }

    pub fn items(&self) -> &[WorldItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn is_full(&self) -> bool {
        self.limit.is_some_and(|limit| self.items.len() >= limit)
    }

    /// Spawns a stack of a known item
    ///
    /// Quantity is raised to at least 1. Returns the new item's index, or
    /// None if the id is blank, unknown, or the world is full.
    pub fn spawn(&mut self, registry: &ItemRegistry, item_id: &str, quantity: u32) -> Option<usize> {
        if item_id.trim().is_empty() {
            log::error!("Cannot spawn world item: item id is blank");
            return None;
        }

        if !registry.exists(item_id) {
            log::error!("Cannot spawn world item: unknown item id '{}'", item_id);
            return None;
        }

        if self.is_full() {
            log::warn!("Cannot spawn '{}': world item limit reached", item_id);
            return None;
        }

        self.items.push(WorldItem::new(item_id, quantity.max(1)));
        Some(self.items.len() - 1)
    }

    /// Spawns every item in `items`, skipping the invalid ones
    ///
    /// Returns how many were spawned.
    pub fn populate(&mut self, registry: &ItemRegistry, items: &[WorldItem]) -> usize {
        items
            .iter()
            .filter_map(|item| self.spawn(registry, &item.item_id, item.quantity))
            .count()
    }

    /// Moves the world item at `index` into the inventory
    ///
    /// The world item is removed only when all of it fit. Otherwise it
    /// stays, holding whatever the inventory couldn't take.
    pub fn pick_up<'a>(
        &mut self,
        index: usize,
        inventory: &mut Inventory<'a>,
        registry: &'a ItemRegistry,
    ) -> Result<PickupOutcome, InventoryError> {
        let Some(world_item) = self.items.get_mut(index) else {
            return Ok(PickupOutcome::NothingThere);
        };

        let Some(definition) = registry.try_get(&world_item.item_id) else {
            log::warn!("Cannot pick up unknown item '{}'", world_item.item_id);
            return Ok(PickupOutcome::UnknownItem);
        };

        let quantity = world_item.quantity;
        match inventory.try_add(definition, quantity) {
            Ok(()) => {
                self.items.remove(index);
                Ok(PickupOutcome::Collected { quantity })
            }
            Err(InventoryError::InventoryFull { unplaced, .. }) => {
                log::info!("Inventory full! {} '{}' couldn't fit", unplaced, definition.id());
                if unplaced == quantity {
                    return Ok(PickupOutcome::InventoryFull { remaining: unplaced });
                }

                world_item.quantity = unplaced;
                Ok(PickupOutcome::Partial {
                    collected: quantity - unplaced,
                    remaining: unplaced,
                })
            }
            Err(e) => Err(e),
        }
    }
}

impl WorldDropTarget for ItemWorld {
    fn place(&mut self, item: &ItemDefinition, quantity: u32) -> bool {
        if self.is_full() {
            return false;
        }

        self.items.push(WorldItem::new(item.id(), quantity));
        true
    }
}
