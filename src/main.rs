//! Headless inventory demo
//!
//! Loads the config and item catalog, scatters the configured items in
//! the world, picks them all up, then drags and drops a couple of stacks
//! and prints the grid after each step.
//!
//! Usage: `slot_inventory [config.json]` (defaults to
//! `~/.slot_inventory/config.json`). Set `RUST_LOG=debug` for detail.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::env;
use std::path::PathBuf;
use std::rc::Rc;

use slot_inventory::config::InventoryConfig;
use slot_inventory::inventory::{DragController, Inventory};
use slot_inventory::item::load_registry;
use slot_inventory::world::{ItemWorld, PickupOutcome};

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(InventoryConfig::default_path);
    let config = InventoryConfig::load(&config_path)
        .map_err(|e| format!("Failed to load config: {}", e))?;

    let registry = load_registry(&config.catalog_path);
    for item in registry.all_items() {
        log::debug!("{} '{}' {} (max stack {})", item.id(), item.name(), item.color(), item.max_stack());
    }
    let mut inventory = Inventory::new(config.slot_count);

    // Slots that changed since the last redraw
    let dirty = Rc::new(RefCell::new(BTreeSet::new()));
    let subscriptions = inventory.subscribe_all(|index| {
        let dirty = Rc::clone(&dirty);
        Box::new(move || {
            dirty.borrow_mut().insert(index);
        })
    });

    let mut world = ItemWorld::new();
    let spawned = world.populate(&registry, &config.world_items);
    log::info!("Spawned {} world items", spawned);

    // Walk backwards so collected items don't shift the ones still to visit
    for index in (0..world.len()).rev() {
        let item_id = world.items()[index].item_id.clone();
        match world.pick_up(index, &mut inventory, &registry) {
            Ok(PickupOutcome::Collected { quantity }) => {
                log::info!("Picked up {} x{}", item_id, quantity)
            }
            Ok(PickupOutcome::Partial { collected, remaining }) => {
                log::info!("Picked up {} x{}, {} left on the ground", item_id, collected, remaining)
            }
            Ok(PickupOutcome::InventoryFull { remaining }) => {
                log::info!("No room for {} x{}", item_id, remaining)
            }
            Ok(other) => log::warn!("Couldn't pick up {}: {:?}", item_id, other),
            Err(e) => log::error!("Failed to pick up {}: {}", item_id, e),
        }
    }
    render(&inventory, config.columns, &dirty);

    // Drag the first stack onto the last slot
    let mut drag = DragController::new();
    let first = inventory.slots().iter().position(|slot| !slot.is_empty());
    if let Some(from) = first {
        let to = inventory.capacity() - 1;
        if drag.begin(&inventory, from) {
            match drag.drop_on_slot(&mut inventory, to) {
                Ok(outcome) => log::info!("Dragged slot {} onto slot {}: {:?}", from, to, outcome),
                Err(e) => log::error!("Drag failed: {}", e),
            }
        }
        render(&inventory, config.columns, &dirty);
    }

    // Throw the last stack back into the world
    let last = inventory.slots().iter().rposition(|slot| !slot.is_empty());
    if let Some(from) = last {
        if drag.begin(&inventory, from) {
            match drag.drop_outside(&mut inventory, &mut world) {
                Ok(outcome) => log::info!("Dropped slot {} outside: {:?}", from, outcome),
                Err(e) => log::error!("Drop failed: {}", e),
            }
        }
        render(&inventory, config.columns, &dirty);
    }

    log::info!("{} stacks lying in the world", world.len());
    inventory.unsubscribe_all(subscriptions);
    Ok(())
}

/// Prints the grid, marking slots redrawn since the previous call with `*`
fn render(inventory: &Inventory<'_>, columns: usize, dirty: &RefCell<BTreeSet<usize>>) {
    let changed = std::mem::take(&mut *dirty.borrow_mut());

    for row in inventory.slots().chunks(columns.max(1)) {
        let cells: Vec<String> = row
            .iter()
            .map(|slot| {
                let marker = if changed.contains(&slot.index()) { "*" } else { " " };
                match slot.item() {
                    Some(item) => format!("{}{:>12} x{:<3}", marker, item.name(), slot.quantity()),
                    None => format!("{}{:>12}     ", marker, "-"),
                }
            })
            .collect();
        println!("{}", cells.join(" |"));
    }
    println!();
}
