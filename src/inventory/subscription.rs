use std::sync::atomic::{AtomicU64, Ordering};

use super::inventory::Inventory;
use super::error::InventoryError;
use super::slot::SlotObserver;

// Shared by every inventory so a handle only ever matches the observer
// it was issued for
static NEXT_SERIAL: AtomicU64 = AtomicU64::new(0);

/// Opaque handle returned when subscribing to a slot
///
/// Pass it back to `Inventory::unsubscribe` to detach the observer. A
/// handle issued by one inventory never detaches anything in another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId {
    slot: usize,
    serial: u64,
}

impl SubscriptionId {
    pub(crate) fn new(slot: usize) -> Self {
        SubscriptionId {
            slot,
            serial: NEXT_SERIAL.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Index of the slot this subscription observes
    pub fn slot(&self) -> usize {
        self.slot
    }
}

/// One subscription per slot, created and released together
///
/// A presentation layer that binds to an inventory holds one of these
/// and hands it back through `Inventory::unsubscribe_all` before binding
/// again, so no observer outlives the view that registered it.
#[derive(Debug, Default)]
#[must_use = "dropping the handles leaves the observers attached"]
pub struct SlotSubscriptions {
    ids: Vec<SubscriptionId>,
}

impl SlotSubscriptions {
    pub fn ids(&self) -> &[SubscriptionId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<'a> Inventory<'a> {
    /// Registers an observer on one slot
    pub fn subscribe(
        &mut self,
        index: usize,
        observer: impl FnMut() + 'a,
    ) -> Result<SubscriptionId, InventoryError> {
        Ok(self.slot_mut(index)?.subscribe(observer))
    }

    /// Detaches an observer; returns false if it was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.slot_mut(id.slot())
            .map(|slot| slot.unsubscribe(id))
            .unwrap_or(false)
    }

    /// Registers one observer per slot
    ///
    /// `make_observer` receives the slot index, so observers can capture
    /// which slot they redraw.
    pub fn subscribe_all(
        &mut self,
        mut make_observer: impl FnMut(usize) -> SlotObserver<'a>,
    ) -> SlotSubscriptions {
        let ids = (0..self.capacity())
            .filter_map(|index| {
                let observer = make_observer(index);
                self.slot_mut(index).ok().map(|slot| slot.subscribe(observer))
            })
            .collect();

        SlotSubscriptions { ids }
    }

    /// Releases every subscription made by `subscribe_all`
    ///
    /// Returns how many observers were actually detached.
    pub fn unsubscribe_all(&mut self, subscriptions: SlotSubscriptions) -> usize {
        subscriptions
            .ids
            .into_iter()
            .filter(|id| self.unsubscribe(*id))
            .count()
    }
}
