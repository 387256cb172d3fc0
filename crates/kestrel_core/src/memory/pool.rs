//! # Slot Pool
//!
//! Growable block pool for values that are frequently inserted and released.

/// A recycling pool of same-typed values.
///
/// Values are stored in slots addressed by [`SlotId`]. Releasing a value
/// returns its slot to a free list; the next insert reuses that slot in
/// place instead of growing the storage. Storage only grows when every
/// slot is live, so a steady producer/consumer pair settles at a fixed
/// footprint.
///
/// # Thread Safety
///
/// This pool is NOT thread-safe. Use one pool per thread or wrap in a mutex.
///
/// # Example
///
/// ```rust
/// use kestrel_core::SlotPool;
///
/// let mut pool: SlotPool<(i32, i32)> = SlotPool::new();
///
/// let first = pool.insert((1, 2));
/// pool.release(first);
///
/// // Reuses the released slot - no growth
/// let second = pool.insert((3, 4));
/// assert_eq!(pool.capacity(), 1);
/// assert_eq!(pool.get(second), Some(&(3, 4)));
/// ```
#[derive(Debug)]
pub struct SlotPool<T> {
    /// Slot storage; `None` marks a free slot.
    storage: Vec<Option<T>>,
    /// Indices of free slots, most recently released last.
    free_list: Vec<usize>,
    /// Number of live values.
    live_count: usize,
}

/// Handle to a live value in a [`SlotPool`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlotId {
    /// Index into the pool.
    index: usize,
}

impl SlotId {
    /// Returns the raw slot index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }
}

impl<T> SlotPool<T> {
    /// Creates an empty pool. The first insert allocates.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
            free_list: Vec::new(),
            live_count: 0,
        }
    }

    /// Creates a pool with `capacity` pre-allocated free slots.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut storage = Vec::with_capacity(capacity);
        storage.resize_with(capacity, || None);

        // Lowest index is handed out first
        let free_list: Vec<usize> = (0..capacity).rev().collect();

        Self {
            storage,
            free_list,
            live_count: 0,
        }
    }

    /// Returns the number of slots, live or free.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns the number of live values.
    #[inline]
    #[must_use]
    pub const fn live_count(&self) -> usize {
        self.live_count
    }

    /// Returns the number of free slots waiting for reuse.
    #[inline]
    #[must_use]
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    /// Returns true if no value is live.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.live_count == 0
    }

    /// Stores a value, reusing a free slot when one exists.
    ///
    /// This is a **O(1)** operation. It only allocates when every slot
    /// is live.
    pub fn insert(&mut self, value: T) -> SlotId {
        let index = if let Some(index) = self.free_list.pop() {
            self.storage[index] = Some(value);
            index
        } else {
            self.storage.push(Some(value));
            // Keep the free list able to hold every slot so release never allocates
            let needed = self.storage.len();
            if self.free_list.capacity() < needed {
                self.free_list.reserve(needed - self.free_list.len());
            }
            needed - 1
        };

        self.live_count += 1;
        SlotId { index }
    }

    /// Releases a live value and returns it.
    ///
    /// This is a **O(1)** operation with **zero heap deallocations**: the
    /// slot stays allocated for the next insert.
    ///
    /// # Returns
    ///
    /// The released value, or None if the handle was stale or out of range.
    pub fn release(&mut self, id: SlotId) -> Option<T> {
        let value = self.storage.get_mut(id.index)?.take()?;
        self.free_list.push(id.index);
        self.live_count -= 1;
        Some(value)
    }

    /// Gets a reference to a live value.
    #[inline]
    #[must_use]
    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.storage.get(id.index)?.as_ref()
    }

    /// Releases every live value. Slots are kept for reuse.
    pub fn clear(&mut self) {
        for slot in &mut self.storage {
            *slot = None;
        }
        self.free_list.clear();
        self.free_list.extend((0..self.storage.len()).rev());
        self.live_count = 0;
    }
}

impl<T> Default for SlotPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_insert_release() {
        let mut pool: SlotPool<u32> = SlotPool::new();

        let h1 = pool.insert(42);
        assert_eq!(pool.get(h1), Some(&42));
        assert_eq!(pool.live_count(), 1);

        assert_eq!(pool.release(h1), Some(42));
        assert_eq!(pool.live_count(), 0);
        assert_eq!(pool.free_count(), 1);
    }

    #[test]
    fn test_pool_reuse() {
        let mut pool: SlotPool<u32> = SlotPool::new();

        let h1 = pool.insert(1);
        pool.release(h1);

        let h2 = pool.insert(2);
        assert_eq!(h1.index(), h2.index()); // Same slot reused
        assert_eq!(pool.get(h2), Some(&2));
        assert_eq!(pool.capacity(), 1);
    }

    #[test]
    fn test_pool_grows_only_when_full() {
        let mut pool: SlotPool<u8> = SlotPool::with_capacity(2);
        assert_eq!(pool.capacity(), 2);

        let a = pool.insert(1);
        let _b = pool.insert(2);
        assert_eq!(pool.capacity(), 2);

        let _c = pool.insert(3);
        assert_eq!(pool.capacity(), 3);

        pool.release(a);
        let _d = pool.insert(4);
        assert_eq!(pool.capacity(), 3);
    }

    #[test]
    fn test_double_release_is_rejected() {
        let mut pool: SlotPool<u8> = SlotPool::new();
        let h = pool.insert(9);

        assert_eq!(pool.release(h), Some(9));
        assert_eq!(pool.release(h), None);
        assert_eq!(pool.free_count(), 1);
    }

    #[test]
    fn test_clear_keeps_slots() {
        let mut pool: SlotPool<u8> = SlotPool::new();
        let ids: Vec<SlotId> = (0..5).map(|i| pool.insert(i)).collect();
        pool.clear();

        assert!(pool.is_empty());
        assert_eq!(pool.capacity(), 5);
        assert_eq!(pool.free_count(), 5);
        assert!(ids.iter().all(|&id| pool.get(id).is_none()));
    }
}
