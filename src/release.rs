//! Bookkeeping for freeing a detached model's GPU resources.

use fnv::FnvHashSet;

/// Resources queued for disposal, each uuid at most once.
///
/// Meshes of one part group share a material, so walking a model reaches
/// the same material many times.
pub struct ReleaseList<T> {
    seen: FnvHashSet<String>,
    items: Vec<T>,
}

impl<T> Default for ReleaseList<T> {
    fn default() -> Self {
        Self {
            seen: FnvHashSet::default(),
            items: Vec::new(),
        }
    }
}

impl<T> ReleaseList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `item` under `uuid`. Returns false if the uuid was already queued.
    pub fn push(&mut self, uuid: String, item: T) -> bool {
        if !self.seen.insert(uuid) {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Queued items in first-seen order.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}
