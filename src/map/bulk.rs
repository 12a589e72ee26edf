//! Bulk insertion.
//!
//! Inserting a run of entries one at a time costs a shift of the tail for every entry.
//! Instead, entries are appended unchecked into the spare capacity of the storage, the
//! appended batch is stable-sorted and merged into the sorted prefix, and duplicate keys
//! are then dropped, keeping the first occurrence: a key already in the map wins over a
//! newly inserted one, and among new duplicates the earliest in input order wins.

use super::{merge::merge_sorted_runs, FlatMap, KeyOrEntry};
use crate::{polyfill::*, LookupKey, OrdStoredKey, TotalOrder};
use core::{convert::Infallible, mem};

/// Entries appended to the map's storage that have not yet been merged into it.
///
/// Dropping a batch without [`commit`](Batch::commit)ting it truncates the storage back to
/// its length when the batch was opened, which rolls the batch back on every exit path,
/// whether by early return or by unwinding.
struct Batch<'a, K, V, O, A: Allocator + Clone> {
    map: &'a mut FlatMap<K, V, O, A>,
    len_before: usize,
}

impl<'a, K, V, O, A: Allocator + Clone> Batch<'a, K, V, O, A> {
    fn open(map: &'a mut FlatMap<K, V, O, A>) -> Self {
        let len_before = map.data.len();
        Batch { map, len_before }
    }

    /// Appends entries from `iter` until the storage is at capacity or `iter` is exhausted.
    fn fill<E, I>(&mut self, iter: &mut I) -> Result<(), E>
    where
        I: Iterator<Item = Result<(K, V), E>>,
    {
        while self.map.data.len() < self.map.data.capacity() {
            match iter.next() {
                Some(entry) => self.map.data.push(entry?),
                None => break,
            }
        }
        Ok(())
    }

    fn commit(self) -> usize {
        let len_before = self.len_before;
        mem::forget(self);
        len_before
    }
}

impl<K, V, O, A: Allocator + Clone> Drop for Batch<'_, K, V, O, A> {
    fn drop(&mut self) {
        self.map.data.truncate(self.len_before);
    }
}

impl<K, V, O, A: Allocator + Clone> FlatMap<K, V, O, A>
where
    K: LookupKey<O>,
    O: TotalOrder,
{
    /// Inserts every entry of `iter` whose key is not already present, stopping at the
    /// first `Err`, which is returned.
    ///
    /// Entries are inserted in batches sized by the spare capacity of the storage. When
    /// `iter` yields an error (or panics), the entries it yielded since the current batch
    /// began are removed before the error is returned (or the panic resumes); batches that
    /// were already merged stay in the map.
    ///
    /// Keys already in the map are never replaced, and when `iter` yields several entries
    /// with equivalent keys, only the first is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let mut map = FlatMap::from([(1, 'a')]);
    /// let parsed = ["2", "1", "3"].iter().map(|s| s.parse::<i32>().map(|k| (k, 'b')));
    /// assert_eq!(map.try_extend(parsed), Ok(()));
    /// assert_eq!(map.iter().collect::<Vec<_>>(), [(&1, &'a'), (&2, &'b'), (&3, &'b')]);
    ///
    /// let mut map = FlatMap::<i32, char>::with_capacity(8);
    /// let parsed = ["2", "x", "3"].iter().map(|s| s.parse::<i32>().map(|k| (k, 'b')));
    /// assert!(map.try_extend(parsed).is_err());
    /// assert!(map.is_empty());
    /// ```
    pub fn try_extend<E, I>(&mut self, iter: I) -> Result<(), E>
    where
        I: IntoIterator<Item = Result<(K, V), E>>,
    {
        let mut iter = iter.into_iter().fuse();

        loop {
            // Growth would move every entry anyway, so there is nothing to batch up.
            while self.data.len() == self.data.capacity() {
                match iter.next() {
                    Some(entry) => self.insert_entry(entry?),
                    None => return Ok(()),
                };
            }

            let mut batch = Batch::open(self);
            batch.fill(&mut iter)?;
            let len_before = batch.commit();
            if self.data.len() == len_before {
                return Ok(());
            }

            self.merge_appended(len_before);

            if self.data.len() == len_before {
                // Every entry of the batch was a duplicate: make progress one entry at a time.
                match iter.next() {
                    Some(entry) => self.insert_entry(entry?),
                    None => return Ok(()),
                };
            }
        }
    }

    /// Sorts `data[len_before..]`, merges it into the sorted prefix and drops the later of
    /// any equivalent keys.
    fn merge_appended(&mut self, len_before: usize) {
        let cmp = KeyOrEntry::new(&self.order);

        self.data[len_before..].sort_by(|a, b| cmp.entries(a, b));
        merge_sorted_runs(&mut self.data, len_before, &mut |a, b| {
            cmp.entry_before_entry(a, b)
        });
        self.data
            .dedup_by(|later, earlier| cmp.equivalent_entries(&*earlier, &*later));

        debug_assert!(self.is_strictly_sorted());
    }

    /// Moves all entries from `other` into `self`, leaving `other` empty.
    ///
    /// Entries of `other` whose keys are already present in `self` are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let mut a = FlatMap::from([(1, "a"), (2, "b"), (3, "c")]);
    /// let mut b = FlatMap::from([(3, "d"), (4, "e"), (5, "f")]);
    ///
    /// a.append(&mut b);
    ///
    /// assert_eq!(a.len(), 5);
    /// assert_eq!(b.len(), 0);
    /// assert_eq!(a[&3], "c");
    /// assert_eq!(a[&5], "f");
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        let empty = <A!(Vec<(K, V), A>) as VecNewIn<A>>::new_in(other.alloc.clone());
        let entries = mem::replace(&mut other.data, empty);
        self.extend(entries);
    }
}

impl<K, V, O, A: Allocator + Clone> Extend<(K, V)> for FlatMap<K, V, O, A>
where
    K: LookupKey<O>,
    O: TotalOrder,
{
    #[inline]
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        let infallible = iter.into_iter().map(Ok::<_, Infallible>);
        match self.try_extend(infallible) {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_one(&mut self, (k, v): (K, V)) {
        self.insert(k, v);
    }
}

impl<'a, K, V, O, A: Allocator + Clone> Extend<(&'a K, &'a V)> for FlatMap<K, V, O, A>
where
    K: LookupKey<O> + Copy,
    V: Copy,
    O: TotalOrder,
{
    fn extend<I: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: I) {
        self.extend(iter.into_iter().map(|(&key, &value)| (key, value)));
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_one(&mut self, (&k, &v): (&'a K, &'a V)) {
        self.insert(k, v);
    }
}

impl<K, V, O> FromIterator<(K, V)> for FlatMap<K, V, O>
where
    K: LookupKey<O>,
    O: TotalOrder + Default,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> FlatMap<K, V, O> {
        let iter = iter.into_iter();
        let mut map = FlatMap::with_capacity_and_order(iter.size_hint().0, O::default());
        map.extend(iter);
        map
    }
}

impl<K: OrdStoredKey, V, const N: usize> From<[(K, V); N]> for FlatMap<K, V> {
    /// Converts a `[(K, V); N]` into a `FlatMap<K, V>`.
    ///
    /// Where the array holds several entries with equivalent keys, the first is kept.
    ///
    /// ```
    /// use flat_map::FlatMap;
    ///
    /// let map1 = FlatMap::from([(1, 2), (3, 4)]);
    /// let map2: FlatMap<_, _> = [(1, 2), (3, 4)].into();
    /// assert_eq!(map1, map2);
    ///
    /// let first_wins = FlatMap::from([(1, "x"), (1, "y"), (1, "z")]);
    /// assert_eq!(first_wins.into_iter().collect::<Vec<_>>(), [(1, "x")]);
    /// ```
    fn from(arr: [(K, V); N]) -> Self {
        let mut map = FlatMap::with_capacity(N);
        map.extend(arr);
        map
    }
}

