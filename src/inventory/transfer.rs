use super::error::InventoryError;
use super::inventory::Inventory;

/// What a slot-to-slot transfer did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferOutcome {
    /// Source and destination were the same slot, nothing happened
    Cancelled,

    /// Destination was empty, the whole stack moved
    Moved,

    /// Units were merged into a matching stack; the rest stayed behind
    Merged { moved: u32 },

    /// Destination stack of the same item was already full
    DestinationFull,

    /// Different items (or non-stackable ones): contents exchanged
    Swapped,
}

impl<'a> Inventory<'a> {
    /// Moves the contents of slot `from` onto slot `to`
    ///
    /// # Rules
    /// - empty destination: the source stack moves over
    /// - same stackable item: merge as much as fits; any overflow stays
    ///   in the source slot, a merge never falls back to a swap
    /// - anything else: the two slots swap contents
    pub fn transfer(&mut self, from: usize, to: usize) -> Result<TransferOutcome, InventoryError> {
        let source = self.slot(from).ok_or(InventoryError::InvalidSlot(from))?;
        let destination = self.slot(to).ok_or(InventoryError::InvalidSlot(to))?;

        if from == to {
            return Ok(TransferOutcome::Cancelled);
        }

        let Some(item) = source.item() else {
            return Err(InventoryError::SlotEmpty(from));
        };

        if destination.is_empty() {
            self.swap(from, to)?;
            return Ok(TransferOutcome::Moved);
        }

        let mergeable = destination.item().is_some_and(|other| item.can_stack_with(other));
        if !mergeable {
            self.swap(from, to)?;
            return Ok(TransferOutcome::Swapped);
        }

        let moved = destination.room().min(source.quantity());
        if moved == 0 {
            return Ok(TransferOutcome::DestinationFull);
        }

        self.slot_mut(to)?.try_add_quantity(moved)?;
        self.slot_mut(from)?.try_remove_quantity(moved)?;
        log::debug!("Merged {} '{}' from slot {} into slot {}", moved, item.id(), from, to);

        Ok(TransferOutcome::Merged { moved })
    }
}
