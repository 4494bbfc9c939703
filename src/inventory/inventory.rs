use crate::item::ItemDefinition;
use super::error::InventoryError;
use super::slot::Slot;

/// Fixed-size inventory container
///
/// Slots are stored in grid order; indices never change and the number
/// of slots is fixed at construction. Items are borrowed from the
/// `ItemRegistry`, which must outlive the inventory.
///
/// Mutations go through this type only: callers get shared references to
/// slots for reading and subscribe to them for change notifications.
#[derive(Debug)]
pub struct Inventory<'a> {
    slots: Vec<Slot<'a>>,
}

impl<'a> Inventory<'a> {
    /// Creates a new empty inventory with the specified number of slots
    pub fn new(capacity: usize) -> Self {
        Inventory {
            slots: (0..capacity).map(Slot::new).collect(),
        }
    }

    /// Number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the inventory has no items
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Slot::is_empty)
    }

    pub fn slot(&self, index: usize) -> Option<&Slot<'a>> {
        self.slots.get(index)
    }

    /// All slots in display order
    pub fn slots(&self) -> &[Slot<'a>] {
        &self.slots
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> Result<&mut Slot<'a>, InventoryError> {
        self.slots
            .get_mut(index)
            .ok_or(InventoryError::InvalidSlot(index))
    }

    /// Counts how many of a specific item are in the inventory
    pub fn count(&self, item_id: &str) -> u32 {
        self.slots
            .iter()
            .filter(|slot| slot.holds(item_id))
            .map(Slot::quantity)
            .sum()
    }

    /// Returns true once at least `quantity` of the item is held
    ///
    /// Stops scanning as soon as the running total is high enough.
    pub fn contains_at_least(&self, item: &ItemDefinition, quantity: u32) -> bool {
        let mut total: u32 = 0;

        for slot in self.slots.iter().filter(|slot| slot.holds(item.id())) {
            total = total.saturating_add(slot.quantity());
            if total >= quantity {
                return true;
            }
        }

        total >= quantity
    }

    /// Adds items to the inventory
    ///
    /// # Strategy
    /// 1. Top up existing stacks of the item, in slot order
    /// 2. Start new stacks in empty slots, in slot order
    /// 3. Report whatever didn't fit
    ///
    /// Partial adds are kept: on `InventoryFull` the inventory holds
    /// everything that fit, and the error says how much didn't.
    pub fn try_add(&mut self, item: &'a ItemDefinition, quantity: u32) -> Result<(), InventoryError> {
        if quantity == 0 {
            return Err(InventoryError::ZeroQuantity);
        }

        let mut remaining = quantity;

        // Phase 1: Top up existing stacks
        for slot in self.slots.iter_mut() {
            if remaining == 0 {
                break;
            }

            if slot.holds(item.id()) {
                let amount = remaining.min(slot.room());
                if amount > 0 {
                    slot.try_add_quantity(amount)?;
                    remaining -= amount;
                }
            }
        }

        // Phase 2: Start new stacks in empty slots
        for slot in self.slots.iter_mut() {
            if remaining == 0 {
                break;
            }

            if slot.is_empty() {
                let amount = remaining.min(item.max_stack());
                slot.try_set(Some(item), amount)?;
                remaining -= amount;
            }
        }

        if remaining > 0 {
            log::debug!(
                "Added {} of {} '{}', inventory full",
                quantity - remaining,
                quantity,
                item.id()
            );
            return Err(InventoryError::InventoryFull {
                item_id: item.id().to_string(),
                requested: quantity,
                unplaced: remaining,
            });
        }

        Ok(())
    }

    /// Removes items from the inventory
    ///
    /// Slots are drained from the last index backwards, so the most
    /// recently filled stacks go first. Partial removals are kept: on
    /// `InsufficientItems` everything that was present has been removed.
    pub fn try_remove(&mut self, item: &ItemDefinition, quantity: u32) -> Result<(), InventoryError> {
        if quantity == 0 {
            return Err(InventoryError::ZeroQuantity);
        }

        let mut remaining = quantity;

        for slot in self.slots.iter_mut().rev() {
            if remaining == 0 {
                break;
            }

            if slot.holds(item.id()) {
                let amount = remaining.min(slot.quantity());
                slot.try_remove_quantity(amount)?;
                remaining -= amount;
            }
        }

        if remaining > 0 {
            log::debug!(
                "Removed {} of {} '{}', ran out",
                quantity - remaining,
                quantity,
                item.id()
            );
            return Err(InventoryError::InsufficientItems {
                item_id: item.id().to_string(),
                requested: quantity,
                missing: remaining,
            });
        }

        Ok(())
    }

    /// Swaps the contents of two slots
    ///
    /// Both slots hold their new contents before any observer runs;
    /// observers of slot `a` fire first, then those of slot `b`.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), InventoryError> {
        if a >= self.capacity() {
            return Err(InventoryError::InvalidSlot(a));
        }
        if b >= self.capacity() {
            return Err(InventoryError::InvalidSlot(b));
        }
        if a == b {
            return Err(InventoryError::SameSlot(a));
        }

        let (low, high) = (a.min(b), a.max(b));
        let (head, tail) = self.slots.split_at_mut(high);
        head[low].exchange_contents(&mut tail[0]);

        self.slots[a].notify();
        self.slots[b].notify();
        Ok(())
    }

    /// Sets a slot's contents directly (`None` clears it)
    pub fn set_slot(
        &mut self,
        index: usize,
        item: Option<&'a ItemDefinition>,
        quantity: u32,
    ) -> Result<(), InventoryError> {
        self.slot_mut(index)?.try_set(item, quantity)
    }

    /// Empties a slot
    pub fn clear_slot(&mut self, index: usize) -> Result<(), InventoryError> {
        self.slot_mut(index)?.remove_all();
        Ok(())
    }
}
