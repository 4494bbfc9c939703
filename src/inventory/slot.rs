use std::fmt;

use crate::item::ItemDefinition;
use super::error::InventoryError;
use super::subscription::SubscriptionId;

/// Callback fired after a slot changes
///
/// Carries no payload: observers re-read the slot they subscribed to.
pub type SlotObserver<'a> = Box<dyn FnMut() + 'a>;

/// What a slot currently holds
///
/// An occupied slot always has `1 <= quantity <= item.max_stack()`, an
/// empty slot has no item and therefore no quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotContents<'a> {
    Empty,
    Occupied {
        item: &'a ItemDefinition,
        quantity: u32,
    },
}

/// A single inventory container holding zero or one item kind
///
/// Every successful mutation fires the slot's observers exactly once,
/// after the new contents are in place. Failed calls leave the slot
/// untouched and fire nothing.
pub struct Slot<'a> {
    index: usize,
    contents: SlotContents<'a>,
    observers: Vec<(SubscriptionId, SlotObserver<'a>)>,
}

impl<'a> Slot<'a> {
    /// Creates an empty slot at grid position `index`
    pub fn new(index: usize) -> Self {
        Slot {
            index,
            contents: SlotContents::Empty,
            observers: Vec::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn contents(&self) -> SlotContents<'a> {
        self.contents
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.contents, SlotContents::Empty)
    }

    /// Returns true if the slot is occupied by the item with this id
    pub fn holds(&self, item_id: &str) -> bool {
        self.item().is_some_and(|item| item.id() == item_id)
    }

    pub fn item(&self) -> Option<&'a ItemDefinition> {
        match self.contents {
            SlotContents::Empty => None,
            SlotContents::Occupied { item, .. } => Some(item),
        }
    }

    /// Quantity held (0 when empty)
    pub fn quantity(&self) -> u32 {
        match self.contents {
            SlotContents::Empty => 0,
            SlotContents::Occupied { quantity, .. } => quantity,
        }
    }

    /// Stack limit of the held item, 1 for an empty slot
    pub fn max_stack(&self) -> u32 {
        self.item().map_or(1, ItemDefinition::max_stack)
    }

    /// How many more units of the held item fit (0 when empty)
    pub fn room(&self) -> u32 {
        match self.contents {
            SlotContents::Empty => 0,
            SlotContents::Occupied { item, quantity } => item.max_stack() - quantity,
        }
    }

    /// Sets the slot contents directly
    ///
    /// Passing `None` clears the slot regardless of `quantity`. Fails if
    /// `quantity` is 0 or above the item's stack limit.
    pub fn try_set(
        &mut self,
        item: Option<&'a ItemDefinition>,
        quantity: u32,
    ) -> Result<(), InventoryError> {
        self.contents = match item {
            None => SlotContents::Empty,
            Some(item) => {
                if quantity == 0 {
                    return Err(InventoryError::ZeroQuantity);
                }
                if quantity > item.max_stack() {
                    return Err(InventoryError::ExceedsMaxStack {
                        item_id: item.id().to_string(),
                        requested: quantity,
                        max_stack: item.max_stack(),
                    });
                }
                SlotContents::Occupied { item, quantity }
            }
        };

        self.notify();
        Ok(())
    }

    /// Adds `amount` to the held stack without changing the item
    pub fn try_add_quantity(&mut self, amount: u32) -> Result<(), InventoryError> {
        let SlotContents::Occupied { item, quantity } = self.contents else {
            return Err(InventoryError::SlotEmpty(self.index));
        };
        if amount == 0 {
            return Err(InventoryError::ZeroQuantity);
        }

        let total = quantity.saturating_add(amount);
        if total > item.max_stack() {
            return Err(InventoryError::ExceedsMaxStack {
                item_id: item.id().to_string(),
                requested: total,
                max_stack: item.max_stack(),
            });
        }

        self.contents = SlotContents::Occupied { item, quantity: total };
        self.notify();
        Ok(())
    }

    /// Removes `amount` from the held stack
    ///
    /// The slot becomes empty when its quantity reaches 0.
    pub fn try_remove_quantity(&mut self, amount: u32) -> Result<(), InventoryError> {
        let SlotContents::Occupied { item, quantity } = self.contents else {
            return Err(InventoryError::SlotEmpty(self.index));
        };
        if amount == 0 {
            return Err(InventoryError::ZeroQuantity);
        }
        if amount > quantity {
            return Err(InventoryError::InsufficientQuantity {
                requested: amount,
                available: quantity,
            });
        }

        self.contents = if amount == quantity {
            SlotContents::Empty
        } else {
            SlotContents::Occupied { item, quantity: quantity - amount }
        };
        self.notify();
        Ok(())
    }

    /// Clears the slot
    pub fn remove_all(&mut self) {
        self.contents = SlotContents::Empty;
        self.notify();
    }

    /// Registers an observer fired after every successful mutation
    pub fn subscribe(&mut self, observer: impl FnMut() + 'a) -> SubscriptionId {
        let id = SubscriptionId::new(self.index);
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer; returns false if it wasn't registered here
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Exchanges contents with `other` without notifying anyone
    ///
    /// Callers notify both slots once the exchange is complete.
    pub(crate) fn exchange_contents(&mut self, other: &mut Slot<'a>) {
        std::mem::swap(&mut self.contents, &mut other.contents);
    }

    pub(crate) fn notify(&mut self) {
        for (_, observer) in self.observers.iter_mut() {
            observer();
        }
    }
}

impl fmt::Debug for Slot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("index", &self.index)
            .field("contents", &self.contents)
            .field("observers", &self.observers.len())
            .finish()
    }
}
