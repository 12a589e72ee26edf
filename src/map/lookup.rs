use super::{FlatMap, Iter, IterMut, KeyOrEntry};
use crate::{polyfill::*, KeyNotFound, LookupKey, TotalOrder};
use core::ops::{Bound, Range, RangeBounds};

impl<K, V, O, A: Allocator + Clone> FlatMap<K, V, O, A>
where
    K: LookupKey<O>,
    O: TotalOrder,
{
    /// Returns the index of the first entry whose key is not ordered before `key`, or
    /// [`len`] if there is no such entry.
    ///
    /// [`len`]: FlatMap::len
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let map = FlatMap::from([(1, "a"), (3, "c"), (5, "e")]);
    /// assert_eq!(map.lower_bound(&0), 0);
    /// assert_eq!(map.lower_bound(&3), 1);
    /// assert_eq!(map.lower_bound(&4), 2);
    /// assert_eq!(map.lower_bound(&6), 3);
    /// ```
    pub fn lower_bound<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized + LookupKey<O>,
    {
        let cmp = KeyOrEntry::new(&self.order);
        self.data.partition_point(|entry| cmp.entry_before_key(entry, key))
    }

    /// Returns the index of the first entry whose key is ordered after `key`, or
    /// [`len`] if there is no such entry.
    ///
    /// [`len`]: FlatMap::len
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let map = FlatMap::from([(1, "a"), (3, "c"), (5, "e")]);
    /// assert_eq!(map.upper_bound(&0), 0);
    /// assert_eq!(map.upper_bound(&3), 2);
    /// assert_eq!(map.upper_bound(&5), 3);
    /// ```
    pub fn upper_bound<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized + LookupKey<O>,
    {
        let cmp = KeyOrEntry::new(&self.order);
        self.data.partition_point(|entry| !cmp.key_before_entry(key, entry))
    }

    /// Returns the range of indices whose keys are equivalent to `key`, that is
    /// `lower_bound(key)..upper_bound(key)`.
    ///
    /// Keys are unique, so the range is either empty or holds a single index.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let map = FlatMap::from([(1, "a"), (3, "c")]);
    /// assert_eq!(map.equal_range(&3), 1..2);
    /// assert_eq!(map.equal_range(&2), 1..1);
    /// ```
    pub fn equal_range<Q>(&self, key: &Q) -> Range<usize>
    where
        Q: ?Sized + LookupKey<O>,
    {
        let lower = self.lower_bound(key);
        match self.find_from(lower, key) {
            Some(_) => lower..lower + 1,
            None => lower..lower,
        }
    }

    /// Returns the index of the entry whose key is equivalent to `key`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let map = FlatMap::from([("b", 2), ("a", 1)]);
    /// assert_eq!(map.find("b"), Some(1));
    /// assert_eq!(map.find("c"), None);
    /// ```
    pub fn find<Q>(&self, key: &Q) -> Option<usize>
    where
        Q: ?Sized + LookupKey<O>,
    {
        self.find_from(self.lower_bound(key), key)
    }

    // `lower` must be the lower bound of `key`.
    fn find_from<Q>(&self, lower: usize, key: &Q) -> Option<usize>
    where
        Q: ?Sized + LookupKey<O>,
    {
        let entry = self.data.get(lower)?;
        KeyOrEntry::new(&self.order).key_entry(key, entry).is_eq().then_some(lower)
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let map = FlatMap::from([(1, "a")]);
    /// assert_eq!(map.contains_key(&1), true);
    /// assert_eq!(map.contains_key(&2), false);
    /// ```
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + LookupKey<O>,
    {
        self.find(key).is_some()
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let map = FlatMap::from([(1, "a")]);
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: ?Sized + LookupKey<O>,
    {
        self.find(key).map(|index| &self.data[index].1)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let mut map = FlatMap::from([(1, "a")]);
    /// if let Some(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map[&1], "b");
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: ?Sized + LookupKey<O>,
    {
        let index = self.find(key)?;
        Some(&mut self.data[index].1)
    }

    /// Returns the key-value pair corresponding to the supplied key.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let map = FlatMap::from([(String::from("a"), 1)]);
    /// assert_eq!(map.get_key_value("a"), Some((&String::from("a"), &1)));
    /// assert_eq!(map.get_key_value("b"), None);
    /// ```
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        Q: ?Sized + LookupKey<O>,
    {
        self.find(key).map(|index| {
            let (k, v) = &self.data[index];
            (k, v)
        })
    }

    /// Returns a reference to the value corresponding to the key, or [`KeyNotFound`] if
    /// the map holds no such key.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::{FlatMap, KeyNotFound};
    ///
    /// let map = FlatMap::from([(1, "a")]);
    /// assert_eq!(map.at(&1), Ok(&"a"));
    /// assert_eq!(map.at(&2), Err(KeyNotFound));
    /// ```
    pub fn at<Q>(&self, key: &Q) -> Result<&V, KeyNotFound>
    where
        Q: ?Sized + LookupKey<O>,
    {
        self.get(key).ok_or(KeyNotFound)
    }

    /// Returns a mutable reference to the value corresponding to the key, or
    /// [`KeyNotFound`] if the map holds no such key.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::{FlatMap, KeyNotFound};
    ///
    /// let mut map = FlatMap::from([(1, 10)]);
    /// *map.at_mut(&1)? += 1;
    /// assert_eq!(map[&1], 11);
    /// assert!(map.at_mut(&2).is_err());
    /// # Ok::<(), KeyNotFound>(())
    /// ```
    pub fn at_mut<Q>(&mut self, key: &Q) -> Result<&mut V, KeyNotFound>
    where
        Q: ?Sized + LookupKey<O>,
    {
        self.get_mut(key).ok_or(KeyNotFound)
    }

    /// Returns the range of indices whose keys lie within `range`.
    ///
    /// # Panics
    ///
    /// Panics if range `start > end`.
    /// Panics if range `start == end` and both bounds are `Excluded`.
    pub fn range_indices<Q, R>(&self, range: R) -> Range<usize>
    where
        Q: ?Sized + LookupKey<O>,
        R: RangeBounds<Q>,
    {
        let cmp = KeyOrEntry::new(&self.order);
        match (range.start_bound(), range.end_bound()) {
            (Bound::Excluded(s), Bound::Excluded(e)) if cmp.keys(s, e).is_eq() => {
                panic!("range start and end are equal and excluded in FlatMap")
            }
            (Bound::Included(s) | Bound::Excluded(s), Bound::Included(e) | Bound::Excluded(e))
                if cmp.keys(s, e).is_gt() =>
            {
                panic!("range start is greater than range end in FlatMap")
            }
            _ => {}
        }

        let start = match range.start_bound() {
            Bound::Included(key) => self.lower_bound(key),
            Bound::Excluded(key) => self.upper_bound(key),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(key) => self.upper_bound(key),
            Bound::Excluded(key) => self.lower_bound(key),
            Bound::Unbounded => self.data.len(),
        };
        start..end
    }

    /// Constructs a double-ended iterator over a sub-range of entries in the map.
    /// The simplest way is to use the range syntax `min..max`, thus `range(min..max)` will
    /// yield entries from min (inclusive) to max (exclusive).
    /// The range may also be entered as `(Bound<T>, Bound<T>)`, so for example
    /// `range((Excluded(4), Included(10)))` will yield a left-exclusive, right-inclusive
    /// range from 4 to 10.
    ///
    /// # Panics
    ///
    /// Panics if range `start > end`.
    /// Panics if range `start == end` and both bounds are `Excluded`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    /// use std::ops::Bound::Included;
    ///
    /// let map = FlatMap::from([(3, "a"), (5, "b"), (8, "c")]);
    /// for (&key, &value) in map.range::<i32, _>((Included(&4), Included(&8))) {
    ///     println!("{key}: {value}");
    /// }
    /// assert_eq!(Some((&5, &"b")), map.range(4..).next());
    /// ```
    pub fn range<Q, R>(&self, range: R) -> Iter<'_, K, V>
    where
        Q: ?Sized + LookupKey<O>,
        R: RangeBounds<Q>,
    {
        let indices = self.range_indices(range);
        Iter::new(&self.data[indices])
    }

    /// Constructs a mutable double-ended iterator over a sub-range of entries in the map.
    ///
    /// # Panics
    ///
    /// Panics if range `start > end`.
    /// Panics if range `start == end` and both bounds are `Excluded`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let mut map: FlatMap<&str, i32> =
    ///     [("Alice", 0), ("Bob", 0), ("Carol", 0), ("Cheryl", 0)].into();
    /// for (_, balance) in map.range_mut("B".."Cheryl") {
    ///     *balance += 100;
    /// }
    /// for (name, balance) in &map {
    ///     println!("{name} => {balance}");
    /// }
    /// assert_eq!(map["Bob"], 100);
    /// assert_eq!(map["Cheryl"], 0);
    /// ```
    pub fn range_mut<Q, R>(&mut self, range: R) -> IterMut<'_, K, V>
    where
        Q: ?Sized + LookupKey<O>,
        R: RangeBounds<Q>,
    {
        let indices = self.range_indices(range);
        IterMut::new(&mut self.data[indices])
    }
}
