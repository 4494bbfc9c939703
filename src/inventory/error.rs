use thiserror::Error;

/// Errors that can occur during inventory operations
///
/// Capacity errors (`InventoryFull`, `InsufficientItems`) describe a
/// partial result: whatever could be moved has been moved, and the error
/// carries the unfulfilled remainder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// Slot index out of bounds
    #[error("Invalid slot index: {0}")]
    InvalidSlot(usize),

    /// Source and destination are the same slot
    #[error("Cannot swap slot {0} with itself")]
    SameSlot(usize),

    /// Quantities must be at least 1
    #[error("Quantity must be at least 1")]
    ZeroQuantity,

    /// Operation needs an occupied slot
    #[error("Slot {0} is empty")]
    SlotEmpty(usize),

    /// Slot would exceed the item's stack limit
    #[error("Cannot hold {requested} of '{item_id}' (max stack: {max_stack})")]
    ExceedsMaxStack {
        item_id: String,
        requested: u32,
        max_stack: u32,
    },

    /// Tried to take more from one slot than it holds
    #[error("Insufficient quantity in slot (requested: {requested}, available: {available})")]
    InsufficientQuantity {
        requested: u32,
        available: u32,
    },

    /// Inventory filled up before the whole amount was placed
    #[error("Inventory is full: {unplaced} of {requested} '{item_id}' couldn't fit")]
    InventoryFull {
        item_id: String,
        requested: u32,
        unplaced: u32,
    },

    /// Inventory ran out of the item before the whole amount was removed
    #[error("Insufficient items: {missing} of {requested} '{item_id}' couldn't be removed")]
    InsufficientItems {
        item_id: String,
        requested: u32,
        missing: u32,
    },
}
