// Inventory system module
//
// This module provides slot-based inventory management, including:
// - Slots holding one stack each, with change observers
// - Fixed-size inventory container (add/remove/query/swap)
// - Slot-to-slot transfers and drag/drop gestures

pub mod drag;
pub mod error;
pub mod inventory;
pub mod slot;
pub mod subscription;
pub mod transfer;

// Re-export main types
pub use drag::{DragController, DragState, DropOutcome, WorldDropTarget};
pub use error::InventoryError;
pub use inventory::Inventory;
pub use slot::{Slot, SlotContents, SlotObserver};
pub use subscription::{SlotSubscriptions, SubscriptionId};
pub use transfer::TransferOutcome;
