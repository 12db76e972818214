// ============================================================================
// COLLECTION STORE - last fetched snapshot of a remote collection
// ============================================================================

use super::{ReactiveState, SubscriptionId};
use crate::models::{EntityId, Identified, Timesheet, User};

pub type UserStore = CollectionStore<User>;
pub type TimesheetStore = CollectionStore<Timesheet>;

/// Ordered list, replaced wholesale by `set`. No dedup.
pub struct CollectionStore<T> {
    items: ReactiveState<Vec<T>>,
}

impl<T: Clone + Identified> CollectionStore<T> {
    pub fn new() -> Self {
        Self {
            items: ReactiveState::new(Vec::new()),
        }
    }

    pub fn set(&self, items: Vec<T>) {
        self.items.set(items);
    }

    pub fn add(&self, item: T) {
        self.items.update(|items| items.push(item));
    }

    /// Drops every item carrying `id`
    pub fn remove(&self, id: &EntityId) {
        self.items.update(|items| items.retain(|item| item.id() != Some(id)));
    }

    pub fn items(&self) -> Vec<T> {
        self.items.snapshot()
    }

    pub fn find(&self, id: &EntityId) -> Option<T> {
        self.items
            .with(|items| items.iter().find(|item| item.id() == Some(id)).cloned())
    }

    pub fn len(&self) -> usize {
        self.items.with(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Vec<T>) + 'static,
    {
        self.items.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.items.unsubscribe(id)
    }
}

impl<T: Clone + Identified> Default for CollectionStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for CollectionStore<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}
