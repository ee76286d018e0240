//! Arena-backed indexed binary min-heap for Fast Marching.
//!
//! [`IndexedHeap`] stores `(key, cell)` entries in a flat `Vec` laid out as
//! an implicit binary tree, plus a dense `cell -> slot` position map so a
//! cell already in the heap can have its key decreased in place instead of
//! being re-inserted. Both arrays are allocated once per transform.
//!
//! Ordering is by key, then by lowest flat cell index. Ties are therefore
//! resolved independently of insertion history, which keeps plateau
//! regions deterministic.

use std::cmp::Ordering;
use std::collections::TryReserveError;

/// Sentinel in the position map for cells not currently in the heap.
const ABSENT: usize = usize::MAX;

#[derive(Clone, Copy, Debug)]
struct Entry {
    key: f32,
    cell: usize,
}

impl Entry {
    #[inline]
    fn precedes(&self, other: &Entry) -> bool {
        match self.key.total_cmp(&other.key) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => self.cell < other.cell,
        }
    }
}

/// Result of [`IndexedHeap::push_or_decrease`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeapUpdate {
    /// The cell was not in the heap and has been inserted.
    Inserted,
    /// The cell was in the heap and its key was lowered.
    Decreased,
    /// The cell was in the heap with a key no larger than the new one.
    Unchanged,
}

/// Binary min-heap over cell indices `0..cells` with decrease-key.
#[derive(Debug)]
pub struct IndexedHeap {
    entries: Vec<Entry>,
    position: Vec<usize>,
}

impl IndexedHeap {
    /// Allocate a heap able to hold every cell of a `cells`-cell grid.
    ///
    /// A cell occupies at most one entry, so both arrays are reserved at
    /// full size here and [`push_or_decrease`](Self::push_or_decrease)
    /// never reallocates. Reports allocation failure instead of aborting.
    pub fn try_with_cells(cells: usize) -> Result<Self, TryReserveError> {
        let mut position = Vec::new();
        position.try_reserve_exact(cells)?;
        position.resize(cells, ABSENT);
        let mut entries = Vec::new();
        entries.try_reserve_exact(cells)?;
        Ok(Self { entries, position })
    }

    /// Number of cells currently in the heap.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `cell` is currently in the heap.
    pub fn contains(&self, cell: usize) -> bool {
        self.position.get(cell).is_some_and(|&p| p != ABSENT)
    }

    /// Current key of `cell`, if it is in the heap.
    pub fn key_of(&self, cell: usize) -> Option<f32> {
        match self.position.get(cell) {
            Some(&p) if p != ABSENT => Some(self.entries[p].key),
            _ => None,
        }
    }

    /// Smallest entry without removing it.
    pub fn peek_min(&self) -> Option<(usize, f32)> {
        self.entries.first().map(|e| (e.cell, e.key))
    }

    /// Insert `cell` with `key`, or lower its key if it is already present.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside the range the heap was allocated for.
    pub fn push_or_decrease(&mut self, cell: usize, key: f32) -> HeapUpdate {
        let slot = self.position[cell];
        if slot == ABSENT {
            let slot = self.entries.len();
            self.entries.push(Entry { key, cell });
            self.position[cell] = slot;
            self.sift_up(slot);
            return HeapUpdate::Inserted;
        }
        if key < self.entries[slot].key {
            self.entries[slot].key = key;
            self.sift_up(slot);
            HeapUpdate::Decreased
        } else {
            HeapUpdate::Unchanged
        }
    }

    /// Remove and return the entry with the smallest key.
    pub fn pop_min(&mut self) -> Option<(usize, f32)> {
        let last = self.entries.len().checked_sub(1)?;
        self.swap(0, last);
        let top = self.entries.pop()?;
        self.position[top.cell] = ABSENT;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some((top.cell, top.key))
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.entries[slot].precedes(&self.entries[parent]) {
                self.swap(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut child = left;
            if right < len && self.entries[right].precedes(&self.entries[left]) {
                child = right;
            }
            if self.entries[child].precedes(&self.entries[slot]) {
                self.swap(slot, child);
                slot = child;
            } else {
                break;
            }
        }
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.entries.swap(a, b);
        self.position[self.entries[a].cell] = a;
        self.position[self.entries[b].cell] = b;
    }
}
