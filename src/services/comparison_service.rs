use crate::errors::CapacityExceeded;

pub const DEFAULT_COMPARISON_CAPACITY: usize = 3;

/// Ordered, duplicate-free selection of listing ids for side-by-side comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonSet {
    capacity: usize,
    ids: Vec<i64>,
}

impl Default for ComparisonSet {
    fn default() -> Self {
        Self::new(DEFAULT_COMPARISON_CAPACITY)
    }
}

impl ComparisonSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ids: Vec::with_capacity(capacity),
        }
    }

    /// Restore a stored selection. Duplicates are skipped and anything past
    /// `capacity` is dropped, keeping input order.
    pub fn from_ids(capacity: usize, ids: impl IntoIterator<Item = i64>) -> Self {
        let mut set = Self::new(capacity);
        for id in ids {
            if set.is_full() {
                break;
            }
            if !set.is_member(id) {
                set.ids.push(id);
            }
        }
        set
    }

    /// Adding an id that is already present succeeds without changes.
    pub fn add(&mut self, id: i64) -> Result<(), CapacityExceeded> {
        if self.is_member(id) {
            return Ok(());
        }
        if self.is_full() {
            return Err(CapacityExceeded {
                capacity: self.capacity,
                listing_id: id,
            });
        }
        self.ids.push(id);
        Ok(())
    }

    pub fn remove(&mut self, id: i64) {
        self.ids.retain(|existing| *existing != id);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn is_member(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    pub fn to_vec(&self) -> Vec<i64> {
        self.ids.clone()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
