use super::{FlatMap, KeyOrEntry};
use crate::{polyfill::*, LookupKey, TotalOrder};

impl<K, V, O, A: Allocator + Clone> FlatMap<K, V, O, A>
where
    K: LookupKey<O>,
    O: TotalOrder,
{
    /// Inserts a key-value pair into the map, unless the map already holds an equivalent
    /// key.
    ///
    /// Returns the index of the entry with the given key, and whether the insertion took
    /// place. If the key was already present, the existing entry is left untouched and
    /// the supplied key and value are dropped.
    ///
    /// All entries at or after the returned index shift one slot to the right.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let mut map = FlatMap::new();
    /// assert_eq!(map.insert(37, "a"), (0, true));
    /// assert_eq!(map.insert(37, "b"), (0, false));
    /// assert_eq!(map.insert(12, "c"), (0, true));
    /// assert_eq!(map[&37], "a");
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> (usize, bool) {
        self.emplace(key, || value)
    }

    /// Inserts a key-value tuple into the map, unless the map already holds an equivalent
    /// key. See [`insert`](FlatMap::insert).
    pub fn insert_entry(&mut self, entry: (K, V)) -> (usize, bool) {
        let (key, value) = entry;
        self.insert(key, value)
    }

    /// Inserts `key` with the value produced by `value`, unless the map already holds an
    /// equivalent key, in which case `value` is never called.
    ///
    /// Returns the index of the entry with the given key, and whether the insertion took
    /// place. Should `value` panic, the map is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let mut map = FlatMap::new();
    /// assert_eq!(map.emplace("a", || vec![1, 2]), (0, true));
    /// assert_eq!(map.emplace("a", || unreachable!()), (0, false));
    /// assert_eq!(map["a"], [1, 2]);
    /// ```
    pub fn emplace<F>(&mut self, key: K, value: F) -> (usize, bool)
    where
        F: FnOnce() -> V,
    {
        let index = self.lower_bound(&key);
        if self.is_vacant_at(index, &key) {
            let value = value();
            self.data.insert(index, (key, value));
            (index, true)
        } else {
            (index, false)
        }
    }

    /// Inserts `key` with the value produced by `value`, using `hint` as the index at which
    /// the caller believes the key belongs.
    ///
    /// If the hint is right (every entry before `hint` is ordered before `key`, and every
    /// entry from `hint` onward is ordered after it), the entry is placed without a search.
    /// If the entry at `hint` already has an equivalent key, its index is returned and
    /// nothing is inserted. Any other hint, including one past the end, falls back to
    /// [`emplace`](FlatMap::emplace): only performance depends on the hint, never the
    /// outcome.
    ///
    /// Returns the index of the entry with the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let mut map = FlatMap::new();
    /// let mut hint = 0;
    /// for key in 0..4 {
    ///     hint = map.emplace_hint(hint, key, || key * 10) + 1;
    /// }
    /// assert_eq!(map.emplace_hint(0, 2, || 0), 2);
    /// assert_eq!(map.values().copied().collect::<Vec<_>>(), [0, 10, 20, 30]);
    /// ```
    pub fn emplace_hint<F>(&mut self, hint: usize, key: K, value: F) -> usize
    where
        F: FnOnce() -> V,
    {
        let cmp = KeyOrEntry::new(&self.order);
        let len = self.data.len();

        let before_hint =
            hint == len || (hint < len && cmp.key_before_entry(&key, &self.data[hint]));
        if before_hint {
            if hint == 0 || cmp.entry_before_key(&self.data[hint - 1], &key) {
                let value = value();
                self.data.insert(hint, (key, value));
                return hint;
            }
        } else if hint < len && !cmp.entry_before_key(&self.data[hint], &key) {
            return hint;
        }

        self.emplace(key, value).0
    }

    /// Inserts a key-value pair using `hint` as the expected index of the key. See
    /// [`emplace_hint`](FlatMap::emplace_hint).
    pub fn insert_hint(&mut self, hint: usize, key: K, value: V) -> usize {
        self.emplace_hint(hint, key, || value)
    }

    /// Returns a mutable reference to the value for `key`, first inserting the value
    /// produced by `default` if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let mut map = FlatMap::new();
    /// map.get_or_insert_with("poneyland", Vec::new).push(3);
    /// map.get_or_insert_with("poneyland", || unreachable!()).push(4);
    /// assert_eq!(map["poneyland"], [3, 4]);
    /// ```
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let (index, _) = self.emplace(key, default);
        &mut self.data[index].1
    }

    /// Returns a mutable reference to the value for `key`, first inserting
    /// `V::default()` if the key is absent.
    ///
    /// The returned reference lives until the map is next mutated.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let mut counts: FlatMap<&str, u32> = FlatMap::new();
    /// for word in ["a", "b", "a", "c", "a"] {
    ///     *counts.get_or_insert_default(word) += 1;
    /// }
    /// assert_eq!(counts["a"], 3);
    /// assert_eq!(counts.len(), 3);
    /// ```
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.get_or_insert_with(key, V::default)
    }

    fn is_vacant_at(&self, index: usize, key: &K) -> bool {
        match self.data.get(index) {
            Some(entry) => KeyOrEntry::new(&self.order).key_before_entry(key, entry),
            None => true,
        }
    }
}
