//! Reusable-object pool with generational handles.
//!
//! Entries are recycled before new ones are allocated. The working set grows
//! by exactly one entry when an acquire finds nothing free and never shrinks.
//! Releasing an entry bumps its generation, so stale handles (double release,
//! handles from a previous occupant) are recognized and ignored.

use serde::{Deserialize, Serialize};

/// Stable reference to a pool entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Handle {
    pub index: u32,
    pub generation: u32,
}

impl Handle {
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}

impl std::fmt::Display for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "E{}g{}", self.index, self.generation)
    }
}

#[derive(Debug)]
struct PoolEntry<T> {
    value: T,
    in_use: bool,
    generation: u32,
}

#[derive(Debug)]
pub struct EntityPool<T> {
    entries: Vec<PoolEntry<T>>,
    /// Indices of entries not in use. Popped from the back.
    free: Vec<u32>,
}

impl<T: Default> EntityPool<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Pool prewarmed with `capacity` free entries.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut pool = Self {
            entries: Vec::with_capacity(capacity),
            free: Vec::with_capacity(capacity),
        };
        for _ in 0..capacity {
            pool.entries.push(PoolEntry {
                value: T::default(),
                in_use: false,
                generation: 0,
            });
        }
        // Lowest index is handed out first.
        pool.free.extend((0..capacity as u32).rev());
        pool
    }

    /// Hand out a free entry, constructing exactly one new entry when none is
    /// free. The value keeps whatever state its previous occupant left; callers
    /// re-initialize it through `get_mut`.
    pub fn acquire(&mut self) -> Handle {
        if let Some(index) = self.free.pop() {
            let entry = &mut self.entries[index as usize];
            debug_assert!(!entry.in_use, "free list held an in-use entry");
            entry.in_use = true;
            return Handle::new(index, entry.generation);
        }

        let index = self.entries.len() as u32;
        self.entries.push(PoolEntry {
            value: T::default(),
            in_use: true,
            generation: 0,
        });
        Handle::new(index, 0)
    }
}

impl<T: Default> Default for EntityPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EntityPool<T> {
    /// Return an entry to the free list. Returns `false` (and does nothing)
    /// for a stale, already released or unknown handle.
    pub fn release(&mut self, handle: Handle) -> bool {
        match self.entries.get_mut(handle.index as usize) {
            Some(entry) if entry.in_use && entry.generation == handle.generation => {
                entry.in_use = false;
                entry.generation = entry.generation.wrapping_add(1);
                self.free.push(handle.index);
                true
            }
            _ => false,
        }
    }

    /// Release every in-use entry.
    pub fn release_all(&mut self) {
        for handle in self.handles() {
            self.release(handle);
        }
    }

    pub fn is_active(&self, handle: Handle) -> bool {
        self.entries
            .get(handle.index as usize)
            .is_some_and(|e| e.in_use && e.generation == handle.generation)
    }

    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.entries
            .get(handle.index as usize)
            .filter(|e| e.in_use && e.generation == handle.generation)
            .map(|e| &e.value)
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        self.entries
            .get_mut(handle.index as usize)
            .filter(|e| e.in_use && e.generation == handle.generation)
            .map(|e| &mut e.value)
    }

    pub fn active_count(&self) -> usize {
        self.entries.len() - self.free.len()
    }

    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    /// Entries ever created. Always `active_count() + free_count()`.
    pub fn total_count(&self) -> usize {
        self.entries.len()
    }

    /// Handles of all in-use entries, in index order.
    pub fn handles(&self) -> Vec<Handle> {
        self.iter().map(|(handle, _)| handle).collect()
    }

    /// In-use entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle, &T)> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.in_use)
            .map(|(i, e)| (Handle::new(i as u32, e.generation), &e.value))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Handle, &mut T)> {
        self.entries
            .iter_mut()
            .enumerate()
            .filter(|(_, e)| e.in_use)
            .map(|(i, e)| (Handle::new(i as u32, e.generation), &mut e.value))
    }
}
