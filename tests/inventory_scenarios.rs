// tests/inventory_scenarios.rs

use std::cell::Cell;
use std::rc::Rc;

use slot_inventory::inventory::{
    DragController, DropOutcome, Inventory, InventoryError, Slot, TransferOutcome,
};
use slot_inventory::item::{fill_registry, Color, ItemDefinition, ItemRegistry};
use slot_inventory::world::{ItemWorld, PickupOutcome};

const CATALOG: &str = r##"{
    "items": [
        { "id": "apple", "name": "Apple", "stackable": true, "maxStack": 3 },
        { "id": "stone", "name": "Stone", "color": "#777777", "stackable": true, "maxStack": 10 },
        { "id": "sword", "name": "Sword", "color": "#C0C0C0", "stackable": false }
    ]
}"##;

fn registry() -> ItemRegistry {
    let mut registry = ItemRegistry::new();
    assert_eq!(fill_registry(&mut registry, CATALOG), 3);
    registry
}

fn quantities(inventory: &Inventory<'_>) -> Vec<u32> {
    inventory.slots().iter().map(Slot::quantity).collect()
}

#[test]
fn add_within_capacity_succeeds() {
    let registry = registry();
    let apple = registry.get("apple").unwrap();
    let stone = registry.get("stone").unwrap();

    for existing in 0..=3 {
        for extra in 1..=9 {
            let mut inventory = Inventory::new(4);
            inventory.try_add(stone, 10).unwrap();
            if existing > 0 {
                inventory.try_add(apple, existing).unwrap();
            }

            // one slot of stone, the rest free for apples
            let free = 3 * 3 - existing;
            let result = inventory.try_add(apple, extra);
            if extra <= free {
                assert!(result.is_ok());
                assert!(inventory.contains_at_least(apple, existing + extra));
            } else {
                assert!(matches!(
                    result,
                    Err(InventoryError::InventoryFull { unplaced, .. }) if unplaced == extra - free
                ));
                assert_eq!(inventory.count("apple"), 9);
            }
        }
    }
}

#[test]
fn concrete_two_slot_scenarios() {
    let registry = registry();
    let apple = registry.get("apple").unwrap();
    assert_eq!(apple.color(), Color::WHITE);

    let mut inventory = Inventory::new(2);
    assert!(inventory.try_add(apple, 5).is_ok());
    assert_eq!(quantities(&inventory), vec![3, 2]);

    let mut fresh = Inventory::new(2);
    match fresh.try_add(apple, 10) {
        Err(InventoryError::InventoryFull { unplaced, .. }) => assert_eq!(unplaced, 4),
        other => panic!("expected InventoryFull, got {:?}", other),
    }
    assert_eq!(quantities(&fresh), vec![3, 3]);
}

#[test]
fn drag_scenarios() {
    let registry = registry();
    let apple = registry.get("apple").unwrap();
    let mut drag = DragController::new();

    let mut moving = Inventory::new(2);
    moving.set_slot(0, Some(apple), 2).unwrap();
    assert!(drag.begin(&moving, 0));
    assert_eq!(drag.drop_on_slot(&mut moving, 1), Ok(TransferOutcome::Moved));
    assert_eq!(quantities(&moving), vec![0, 2]);

    let mut merging = Inventory::new(2);
    merging.set_slot(0, Some(apple), 2).unwrap();
    merging.set_slot(1, Some(apple), 2).unwrap();
    assert!(drag.begin(&merging, 0));
    assert_eq!(drag.drop_on_slot(&mut merging, 1), Ok(TransferOutcome::Merged { moved: 1 }));
    assert_eq!(quantities(&merging), vec![1, 3]);
}

#[test]
fn add_then_remove_round_trip() {
    let registry = registry();
    let stone = registry.get("stone").unwrap();
    let sword = registry.get("sword").unwrap();
    let mut inventory = Inventory::new(5);
    inventory.try_add(stone, 14).unwrap();
    inventory.try_add(sword, 1).unwrap();

    inventory.try_add(stone, 17).unwrap();
    inventory.try_remove(stone, 17).unwrap();

    assert_eq!(inventory.count("stone"), 14);
    assert_eq!(inventory.count("sword"), 1);
}

#[test]
fn merge_never_loses_items() {
    let registry = registry();
    let stone = registry.get("stone").unwrap();
    let mut inventory = Inventory::new(3);
    inventory.set_slot(0, Some(stone), 7).unwrap();
    inventory.set_slot(2, Some(stone), 6).unwrap();

    assert_eq!(inventory.transfer(0, 2), Ok(TransferOutcome::Merged { moved: 4 }));
    assert_eq!(quantities(&inventory), vec![3, 0, 10]);
    assert_eq!(inventory.count("stone"), 13);
}

#[test]
fn notifications_follow_successful_mutations_only() {
    let registry = registry();
    let stone = registry.get("stone").unwrap();
    let mut inventory = Inventory::new(1);
    inventory.set_slot(0, Some(stone), 4).unwrap();

    let notified = Rc::new(Cell::new(0));
    let observed = Rc::clone(&notified);
    inventory.subscribe(0, move || observed.set(observed.get() + 1)).unwrap();

    assert!(inventory.try_remove(stone, 5).is_err());
    // the partial removal still drained the slot
    assert!(inventory.is_empty());
    assert_eq!(notified.get(), 1);

    inventory.set_slot(0, Some(stone), 4).unwrap();
    assert_eq!(notified.get(), 2);
    let mut world = ItemWorld::with_limit(0);
    assert_eq!(inventory.drop_to_world(0, &mut world), Ok(DropOutcome::Rejected));
    assert_eq!(inventory.slot(0).unwrap().quantity(), 4);
    assert_eq!(notified.get(), 2);
}

#[test]
fn pickup_and_drop_cycle() {
    let registry = registry();
    let mut inventory = Inventory::new(2);
    let mut world = ItemWorld::new();
    world.spawn(&registry, "sword", 1);
    world.spawn(&registry, "apple", 4);

    assert_eq!(
        world.pick_up(1, &mut inventory, &registry),
        Ok(PickupOutcome::Collected { quantity: 4 })
    );
    assert_eq!(
        world.pick_up(0, &mut inventory, &registry),
        Ok(PickupOutcome::InventoryFull { remaining: 1 })
    );
    assert_eq!(world.len(), 1);

    let mut drag = DragController::new();
    assert!(drag.begin(&inventory, 1));
    assert_eq!(
        drag.drop_outside(&mut inventory, &mut world),
        Ok(DropOutcome::Dropped { quantity: 1 })
    );
    assert_eq!(world.len(), 2);

    assert_eq!(
        world.pick_up(0, &mut inventory, &registry),
        Ok(PickupOutcome::Collected { quantity: 1 })
    );
    assert!(inventory.slot(1).unwrap().holds("sword"));
}

#[test]
fn registry_entries_are_shared_between_inventories() {
    let registry = registry();
    let apple = registry.get("apple").unwrap();
    let mut bag = Inventory::new(1);
    let mut chest = Inventory::new(1);

    bag.try_add(apple, 2).unwrap();
    chest.try_add(apple, 3).unwrap();

    let in_bag: &ItemDefinition = bag.slot(0).unwrap().item().unwrap();
    let in_chest: &ItemDefinition = chest.slot(0).unwrap().item().unwrap();
    assert!(std::ptr::eq(in_bag, in_chest));
}
