//! Drag and drop between slots
//!
//! `DragController` tracks a single pointer gesture. Nothing in the
//! inventory changes until the drop resolves, so a drag can be cancelled
//! at any point (e.g. when the inventory view closes) with no effect.

use crate::item::ItemDefinition;
use super::error::InventoryError;
use super::inventory::Inventory;
use super::transfer::TransferOutcome;

/// Something outside the inventory that can take a dropped stack
///
/// Implemented by whatever spawns world pickups. Returning false means
/// the stack couldn't be placed and must stay in its slot.
pub trait WorldDropTarget {
    fn place(&mut self, item: &ItemDefinition, quantity: u32) -> bool;
}

/// Result of dropping a stack outside the inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The world took the stack and the slot was cleared
    Dropped { quantity: u32 },

    /// The world refused the stack; the slot is unchanged
    Rejected,

    /// No drag was in progress
    NotDragging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { from: usize },
}

/// Pointer gesture state for one inventory view
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        DragController::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Slot the current drag started from
    pub fn dragging_from(&self) -> Option<usize> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging { from } => Some(from),
        }
    }

    /// Starts dragging from `index`
    ///
    /// Returns false (and stays idle) if the slot is empty or doesn't exist.
    pub fn begin(&mut self, inventory: &Inventory<'_>, index: usize) -> bool {
        match inventory.slot(index) {
            Some(slot) if !slot.is_empty() => {
                self.state = DragState::Dragging { from: index };
                true
            }
            _ => false,
        }
    }

    /// Abandons the current drag without touching the inventory
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Releases the drag over slot `to`
    ///
    /// The gesture ends whatever the outcome. Releasing with no drag in
    /// progress reports `Cancelled`.
    pub fn drop_on_slot(
        &mut self,
        inventory: &mut Inventory<'_>,
        to: usize,
    ) -> Result<TransferOutcome, InventoryError> {
        match std::mem::take(&mut self.state) {
            DragState::Idle => Ok(TransferOutcome::Cancelled),
            DragState::Dragging { from } => inventory.transfer(from, to),
        }
    }

    /// Releases the drag outside every slot
    ///
    /// The dragged stack is offered to `target`; see
    /// `Inventory::drop_to_world`.
    pub fn drop_outside(
        &mut self,
        inventory: &mut Inventory<'_>,
        target: &mut impl WorldDropTarget,
    ) -> Result<DropOutcome, InventoryError> {
        match std::mem::take(&mut self.state) {
            DragState::Idle => Ok(DropOutcome::NotDragging),
            DragState::Dragging { from } => inventory.drop_to_world(from, target),
        }
    }

    /// Drops the stack in slot `index` straight into the world (right-click)
    ///
    /// No drag is needed. A drag that started from the same slot is
    /// abandoned once the stack has left; a drag from any other slot
    /// carries on.
    pub fn drop_slot(
        &mut self,
        inventory: &mut Inventory<'_>,
        index: usize,
        target: &mut impl WorldDropTarget,
    ) -> Result<DropOutcome, InventoryError> {
        let outcome = inventory.drop_to_world(index, target)?;
        if matches!(outcome, DropOutcome::Dropped { .. }) && self.dragging_from() == Some(index) {
            self.cancel();
        }
        Ok(outcome)
    }
}

impl<'a> Inventory<'a> {
    /// Hands the whole stack in slot `index` to the world
    ///
    /// The slot is cleared only after `target` accepts the stack; a
    /// refused drop leaves it untouched.
    pub fn drop_to_world(
        &mut self,
        index: usize,
        target: &mut impl WorldDropTarget,
    ) -> Result<DropOutcome, InventoryError> {
        let slot = self.slot(index).ok_or(InventoryError::InvalidSlot(index))?;
        let (Some(item), quantity) = (slot.item(), slot.quantity()) else {
            return Err(InventoryError::SlotEmpty(index));
        };

        if !target.place(item, quantity) {
            log::warn!("World refused {} '{}' from slot {}", quantity, item.id(), index);
            return Ok(DropOutcome::Rejected);
        }

        self.clear_slot(index)?;
        Ok(DropOutcome::Dropped { quantity })
    }
}
