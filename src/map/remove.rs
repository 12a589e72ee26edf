use super::FlatMap;
use crate::{polyfill::*, LookupKey, TotalOrder};
use core::ops::{Bound, RangeBounds};

impl<K, V, O, A: Allocator + Clone> FlatMap<K, V, O, A> {
    /// Removes and returns the entry at position `index`, shifting every later entry one
    /// slot to the left.
    ///
    /// The entry that followed the removed one, if any, is now at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let mut map = FlatMap::from([(1, "a"), (2, "b"), (3, "c")]);
    /// assert_eq!(map.remove_index(1), (2, "b"));
    /// assert_eq!(map.get_index(1), Some((&3, &"c")));
    /// ```
    pub fn remove_index(&mut self, index: usize) -> (K, V) {
        self.data.remove(index)
    }

    /// Removes the entries at the positions in `range`, returning the position of the
    /// first entry that followed them (which is the start of `range`).
    ///
    /// # Panics
    ///
    /// Panics if the start of `range` is greater than its end, or if its end is greater
    /// than the length of the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let mut map: FlatMap<_, _> = (0..6).map(|i| (i, i * 10)).collect();
    /// assert_eq!(map.remove_range(1..4), 1);
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [0, 4, 5]);
    /// assert_eq!(map.remove_range(..), 0);
    /// assert!(map.is_empty());
    /// ```
    pub fn remove_range<R>(&mut self, range: R) -> usize
    where
        R: RangeBounds<usize>,
    {
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        self.data.drain(range);
        start
    }

    /// Clears the map, removing all entries. The capacity of the map is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let mut a = FlatMap::with_capacity(4);
    /// a.insert(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// assert!(a.capacity() >= 4);
    /// ```
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Retains only the entries specified by the predicate.
    ///
    /// In other words, remove all pairs `(k, v)` for which `f(&k, &mut v)` returns `false`.
    /// The entries are visited in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let mut map: FlatMap<i32, i32> = (0..8).map(|x| (x, x*10)).collect();
    /// // Keep only the elements with even-numbered keys.
    /// map.retain(|&k, _| k % 2 == 0);
    /// assert!(map.into_iter().eq(vec![(0, 0), (2, 20), (4, 40), (6, 60)]));
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.data.retain_mut(|(k, v)| f(k, v));
    }

    /// Removes and returns the first entry in the map.
    /// The key of this entry is the minimum key that was in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let mut map = FlatMap::new();
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    /// while let Some((key, _val)) = map.pop_first() {
    ///     assert!(map.iter().all(|(k, _v)| *k > key));
    /// }
    /// assert!(map.is_empty());
    /// ```
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        if self.data.is_empty() {
            None
        } else {
            Some(self.data.remove(0))
        }
    }

    /// Removes and returns the last entry in the map.
    /// The key of this entry is the maximum key that was in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let mut map = FlatMap::new();
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    /// while let Some((key, _val)) = map.pop_last() {
    ///     assert!(map.iter().all(|(k, _v)| *k < key));
    /// }
    /// assert!(map.is_empty());
    /// ```
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        self.data.pop()
    }
}

impl<K, V, O, A: Allocator + Clone> FlatMap<K, V, O, A>
where
    K: LookupKey<O>,
    O: TotalOrder,
{
    /// Removes a key from the map, returning the value at the key if the key
    /// was previously in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let mut map = FlatMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        Q: ?Sized + LookupKey<O>,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes a key from the map, returning the stored key and value if the key
    /// was previously in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let mut map = FlatMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove_entry(&1), Some((1, "a")));
    /// assert_eq!(map.remove_entry(&1), None);
    /// ```
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        Q: ?Sized + LookupKey<O>,
    {
        let index = self.find(key)?;
        Some(self.data.remove(index))
    }
}
