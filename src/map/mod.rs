//! A map backed by a sorted vector.
//!
//! See [`FlatMap`] for details.

use crate::{polyfill::*, LookupKey, OrdStoredKey, OrdTotalOrder, TotalOrder};
use alloc::collections::TryReserveError;
use core::{
    cmp::Ordering,
    fmt::{self, Debug},
    hash::{Hash, Hasher},
    mem,
    ops::Index,
};

mod bulk;
mod compare;
mod insert;
mod iter;
mod lookup;
mod merge;
mod remove;

#[cfg(test)]
mod tests;

use self::compare::KeyOrEntry;
pub use self::iter::{IntoIter, IntoKeys, IntoValues, Iter, IterMut, Keys, Values, ValuesMut};

/// An ordered map that stores its entries in a single contiguous vector, sorted by key
/// under a specified total order.
///
/// Keys are unique: no two entries of the map have keys that the total order deems
/// equivalent. Lookups are binary searches over the vector, iteration walks it in order,
/// and an entry's position in the map is just its index, so the `n`th smallest entry can
/// be reached in O(1) with [`get_index`].
///
/// Inserting or removing a single entry shifts every entry that follows it, and so costs
/// O(n). Where many entries are to be inserted at once, prefer [`extend`], [`try_extend`]
/// or collecting from an iterator: these sort and merge a whole batch of entries at a time.
///
/// It is a logic error for a key to be modified in such a way that its ordering relative
/// to any other key, as determined by the map's total order, changes while it is in the
/// map. This is normally only possible through [`Cell`], [`RefCell`], global state, I/O,
/// or unsafe code. The behavior resulting from such a logic error is not specified, but
/// will be encapsulated to the `FlatMap` that observed the logic error and not result in
/// undefined behavior. This could include panics, incorrect results, aborts, memory
/// leaks, and non-termination.
///
/// [`get_index`]: FlatMap::get_index
/// [`extend`]: Extend::extend
/// [`try_extend`]: FlatMap::try_extend
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
///
/// # Examples
///
/// ```
/// use flat_map::FlatMap;
///
/// // type inference lets us omit an explicit type signature (which
/// // would be `FlatMap<&str, &str>` in this example).
/// let mut movie_reviews = FlatMap::new();
///
/// // review some movies.
/// movie_reviews.insert("Office Space", "Deals with real issues in the workplace.");
/// movie_reviews.insert("Pulp Fiction", "Masterpiece.");
/// movie_reviews.insert("The Godfather", "Very enjoyable.");
/// movie_reviews.insert("The Blues Brothers", "Eye lyked it a lot.");
///
/// // check for a specific one.
/// if !movie_reviews.contains_key("Les Misérables") {
///     println!("We've got {} reviews, but Les Misérables ain't one.",
///              movie_reviews.len());
/// }
///
/// // oops, this review has a lot of spelling mistakes, let's delete it.
/// movie_reviews.remove("The Blues Brothers");
///
/// // look up the values associated with some keys.
/// let to_find = ["Up!", "Office Space"];
/// for movie in &to_find {
///     match movie_reviews.get(movie) {
///        Some(review) => println!("{movie}: {review}"),
///        None => println!("{movie} is unreviewed.")
///     }
/// }
///
/// // Look up the value for a key (will panic if the key is not found).
/// println!("Movie review: {}", movie_reviews["Office Space"]);
///
/// // iterate over everything, in key order.
/// for (movie, review) in &movie_reviews {
///     println!("{movie}: \"{review}\"");
/// }
/// ```
///
/// A `FlatMap` with a known list of items can be initialized from an array:
///
/// ```
/// use flat_map::FlatMap;
///
/// let solar_distance = FlatMap::from([
///     ("Mercury", 0.4),
///     ("Venus", 0.7),
///     ("Earth", 1.0),
///     ("Mars", 1.5),
/// ]);
/// assert_eq!(solar_distance.keys().next(), Some(&"Earth"));
/// ```
pub struct FlatMap<
    K,
    V,
    O = OrdTotalOrder<<K as OrdStoredKey>::DefaultComparisonKey>,
    A: Allocator + Clone = Global,
> {
    data: A!(Vec<(K, V), A>),
    order: O,
    alloc: A,
}

impl<K: OrdStoredKey, V> FlatMap<K, V> {
    /// Makes a new, empty `FlatMap` ordered by the keys' [`Ord`] implementation.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let mut map = FlatMap::new();
    ///
    /// // entries can now be inserted into the empty map
    /// map.insert(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> FlatMap<K, V> {
        FlatMap { data: alloc::vec::Vec::new(), order: OrdTotalOrder::new(), alloc: Global }
    }

    /// Makes a new, empty `FlatMap` ordered by the keys' [`Ord`] implementation, with room
    /// for at least `capacity` entries before reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let mut map = FlatMap::with_capacity(10);
    /// assert!(map.capacity() >= 10);
    /// map.insert("a", 1);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> FlatMap<K, V> {
        FlatMap::with_capacity_and_order(capacity, OrdTotalOrder::new())
    }
}

impl<K, V, O> FlatMap<K, V, O> {
    /// Makes a new, empty `FlatMap` ordered by the given `order`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::{FlatMap, OrdTotalOrder};
    ///
    /// let mut map = FlatMap::with_order(OrdTotalOrder::<str>::new());
    /// map.insert("b".to_string(), 2);
    /// map.insert("a".to_string(), 1);
    /// assert_eq!(map.keys().next().map(String::as_str), Some("a"));
    /// ```
    #[must_use]
    pub const fn with_order(order: O) -> FlatMap<K, V, O> {
        FlatMap { data: alloc::vec::Vec::new(), order, alloc: Global }
    }

    /// Makes a new, empty `FlatMap` ordered by the given `order`, with room for at least
    /// `capacity` entries before reallocating.
    #[must_use]
    pub fn with_capacity_and_order(capacity: usize, order: O) -> FlatMap<K, V, O> {
        FlatMap::with_capacity_in(capacity, order, Global)
    }
}

impl<K, V, O, A: Allocator + Clone> FlatMap<K, V, O, A> {
    decorate_if! {
        /// Makes a new, empty `FlatMap` ordered by the given `order`, whose storage will
        /// be allocated by `alloc`.
        ///
        /// Does not allocate anything on its own.
        if #[cfg(feature = "allocator_api")] { pub }
        fn new_in(order: O, alloc: A) -> FlatMap<K, V, O, A> {
            let data = <A!(Vec<(K, V), A>) as VecNewIn<A>>::new_in(alloc.clone());
            FlatMap { data, order, alloc }
        }
    }

    decorate_if! {
        /// Makes a new, empty `FlatMap` ordered by the given `order`, whose storage will
        /// be allocated by `alloc` with room for at least `capacity` entries.
        if #[cfg(feature = "allocator_api")] { pub }
        fn with_capacity_in(capacity: usize, order: O, alloc: A) -> FlatMap<K, V, O, A> {
            let data =
                <A!(Vec<(K, V), A>) as VecNewIn<A>>::with_capacity_in(capacity, alloc.clone());
            FlatMap { data, order, alloc }
        }
    }

    decorate_if! {
        /// Returns a reference to the allocator of the map's storage.
        if #[cfg(feature = "allocator_api")] { pub }
        fn allocator(&self) -> &A {
            &self.alloc
        }
    }

    /// Returns a reference to the total order by which the map is sorted.
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let mut a = FlatMap::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the map contains no entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let mut a = FlatMap::new();
    /// assert!(a.is_empty());
    /// a.insert(1, "a");
    /// assert!(!a.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of entries the map can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the greatest number of entries that the map could ever hold.
    #[must_use]
    pub fn max_size(&self) -> usize {
        match mem::size_of::<(K, V)>() {
            0 => usize::MAX,
            size => isize::MAX as usize / size,
        }
    }

    /// Reserves capacity for at least `additional` more entries.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` bytes.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Reserves capacity for exactly `additional` more entries, as far as the allocator
    /// allows.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` bytes.
    pub fn reserve_exact(&mut self, additional: usize) {
        self.data.reserve_exact(additional);
    }

    /// Tries to reserve capacity for at least `additional` more entries.
    ///
    /// # Errors
    ///
    /// If the capacity overflows, or the allocator reports a failure, then an error
    /// is returned and the map is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let mut map = FlatMap::<u8, u8>::new();
    /// assert!(map.try_reserve(16).is_ok());
    /// assert!(map.capacity() >= 16);
    /// assert!(map.try_reserve(usize::MAX).is_err());
    /// ```
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.data.try_reserve(additional)
    }

    /// Shrinks the capacity of the map as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Returns the entries of the map as a slice, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let map = FlatMap::from([(2, 'b'), (1, 'a')]);
    /// assert_eq!(map.as_slice(), [(1, 'a'), (2, 'b')]);
    /// ```
    #[must_use]
    pub fn as_slice(&self) -> &[(K, V)] {
        &self.data
    }

    /// Swaps the entries, total order and allocator of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let mut a = FlatMap::from([(1, "a")]);
    /// let mut b = FlatMap::from([(2, "b"), (3, "c")]);
    /// a.swap(&mut b);
    /// assert_eq!(a.len(), 2);
    /// assert_eq!(b[&1], "a");
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Returns the entry at position `index` in key order, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let map = FlatMap::from([(3, "c"), (1, "a"), (2, "b")]);
    /// assert_eq!(map.get_index(1), Some((&2, &"b")));
    /// assert_eq!(map.get_index(3), None);
    /// ```
    pub fn get_index(&self, index: usize) -> Option<(&K, &V)> {
        self.data.get(index).map(|(k, v)| (k, v))
    }

    /// Returns the entry at position `index` in key order, if any, with a mutable
    /// reference to its value.
    pub fn get_index_mut(&mut self, index: usize) -> Option<(&K, &mut V)> {
        self.data.get_mut(index).map(|(k, v)| (&*k, v))
    }

    /// Returns the first key-value pair in the map.
    /// The key in this pair is the minimum key in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let mut map = FlatMap::new();
    /// assert_eq!(map.first_key_value(), None);
    /// map.insert(1, "b");
    /// map.insert(2, "a");
    /// assert_eq!(map.first_key_value(), Some((&1, &"b")));
    /// ```
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.data.first().map(|(k, v)| (k, v))
    }

    /// Returns the last key-value pair in the map.
    /// The key in this pair is the maximum key in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let mut map = FlatMap::new();
    /// map.insert(1, "b");
    /// map.insert(2, "a");
    /// assert_eq!(map.last_key_value(), Some((&2, &"a")));
    /// ```
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.data.last().map(|(k, v)| (k, v))
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let mut map = FlatMap::new();
    /// map.insert(3, "c");
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// for (key, value) in map.iter() {
    ///     println!("{key}: {value}");
    /// }
    ///
    /// let (first_key, first_value) = map.iter().next().unwrap();
    /// assert_eq!((*first_key, *first_value), (1, "a"));
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.data)
    }

    /// Gets a mutable iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let mut map = FlatMap::from([("a", 1), ("b", 2), ("c", 3)]);
    ///
    /// // add 10 to the value if the key isn't "a"
    /// for (key, value) in map.iter_mut() {
    ///     if key != &"a" {
    ///         *value += 10;
    ///     }
    /// }
    /// assert_eq!(map.values().copied().collect::<Vec<_>>(), [1, 12, 13]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(&mut self.data)
    }

    /// Gets an iterator over the keys of the map, in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let mut a = FlatMap::new();
    /// a.insert(2, "b");
    /// a.insert(1, "a");
    ///
    /// let keys: Vec<_> = a.keys().cloned().collect();
    /// assert_eq!(keys, [1, 2]);
    /// ```
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the map, in order by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let mut a = FlatMap::new();
    /// a.insert(1, "hello");
    /// a.insert(2, "goodbye");
    ///
    /// let values: Vec<&str> = a.values().cloned().collect();
    /// assert_eq!(values, ["hello", "goodbye"]);
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Gets a mutable iterator over the values of the map, in order by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let mut a = FlatMap::new();
    /// a.insert(1, String::from("hello"));
    /// a.insert(2, String::from("goodbye"));
    ///
    /// for value in a.values_mut() {
    ///     value.push_str("!");
    /// }
    ///
    /// let values: Vec<String> = a.values().cloned().collect();
    /// assert_eq!(values, [String::from("hello!"), String::from("goodbye!")]);
    /// ```
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut { inner: self.iter_mut() }
    }

    /// Creates a consuming iterator visiting all the keys, in sorted order.
    /// The map cannot be used after calling this.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let mut a = FlatMap::new();
    /// a.insert(2, "b");
    /// a.insert(1, "a");
    ///
    /// let keys: Vec<i32> = a.into_keys().collect();
    /// assert_eq!(keys, [1, 2]);
    /// ```
    pub fn into_keys(self) -> IntoKeys<K, V, A> {
        IntoKeys { inner: self.into_iter() }
    }

    /// Creates a consuming iterator visiting all the values, in order by key.
    /// The map cannot be used after calling this.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let mut a = FlatMap::new();
    /// a.insert(1, "hello");
    /// a.insert(2, "goodbye");
    ///
    /// let values: Vec<&str> = a.into_values().collect();
    /// assert_eq!(values, ["hello", "goodbye"]);
    /// ```
    pub fn into_values(self) -> IntoValues<K, V, A> {
        IntoValues { inner: self.into_iter() }
    }
}

impl<K, V, O, A: Allocator + Clone> FlatMap<K, V, O, A>
where
    K: LookupKey<O>,
    O: TotalOrder,
{
    /// Compares two entries by key under the map's total order.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    /// use std::cmp::Ordering;
    ///
    /// let map = FlatMap::<i32, &str>::new();
    /// assert_eq!(map.entry_ordering(&(1, "z"), &(2, "a")), Ordering::Less);
    /// assert_eq!(map.entry_ordering(&(2, "z"), &(2, "a")), Ordering::Equal);
    /// ```
    pub fn entry_ordering(&self, lhs: &(K, V), rhs: &(K, V)) -> Ordering {
        KeyOrEntry::new(&self.order).entries(lhs, rhs)
    }

    pub(crate) fn is_strictly_sorted(&self) -> bool {
        let cmp = KeyOrEntry::new(&self.order);
        self.data.windows(2).all(|pair| cmp.entry_before_entry(&pair[0], &pair[1]))
    }
}

impl<K: Hash, V: Hash, O, A: Allocator + Clone> Hash for FlatMap<K, V, O, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_length_prefix(self.len());
        for (k, v) in self {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl<K: PartialEq, V: PartialEq, O, A: Allocator + Clone> PartialEq for FlatMap<K, V, O, A> {
    fn eq(&self, other: &FlatMap<K, V, O, A>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<K: Eq, V: Eq, O, A: Allocator + Clone> Eq for FlatMap<K, V, O, A> {}

impl<K: PartialOrd, V: PartialOrd, O, A: Allocator + Clone> PartialOrd for FlatMap<K, V, O, A> {
    #[inline]
    fn partial_cmp(&self, other: &FlatMap<K, V, O, A>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<K: Ord, V: Ord, O, A: Allocator + Clone> Ord for FlatMap<K, V, O, A> {
    #[inline]
    fn cmp(&self, other: &FlatMap<K, V, O, A>) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<K: Clone, V: Clone, O: Clone, A: Allocator + Clone> Clone for FlatMap<K, V, O, A> {
    fn clone(&self) -> Self {
        FlatMap { data: self.data.clone(), order: self.order.clone(), alloc: self.alloc.clone() }
    }

    fn clone_from(&mut self, other: &Self) {
        // keeps our own allocation, and with it our allocator
        self.data.clone_from(&other.data);
        self.order.clone_from(&other.order);
    }
}

impl<K: Debug, V: Debug, O, A: Allocator + Clone> Debug for FlatMap<K, V, O, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, O: Default> Default for FlatMap<K, V, O> {
    /// Creates an empty `FlatMap`, ordered by a default `O` order.
    fn default() -> FlatMap<K, V, O> {
        FlatMap::with_order(O::default())
    }
}

impl<K, Q: ?Sized, V, O, A: Allocator + Clone> Index<&Q> for FlatMap<K, V, O, A>
where
    K: LookupKey<O>,
    Q: LookupKey<O>,
    O: TotalOrder,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the `FlatMap`.
    #[inline]
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}
