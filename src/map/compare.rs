use crate::{LookupKey, TotalOrder};
use core::cmp::Ordering;

/// Compares bare keys and stored entries with one another under a total order.
///
/// Entries are always projected to their keys, so that the binary searches of the map can
/// use any [`LookupKey`] as their probe without materialising a dummy entry. This is the
/// only place where the map projects anything to its [`TotalOrder::OrderedType`].
pub(crate) struct KeyOrEntry<'a, O>(&'a O);

impl<'a, O> Clone for KeyOrEntry<'a, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, O> Copy for KeyOrEntry<'a, O> {}

impl<'a, O: TotalOrder> KeyOrEntry<'a, O> {
    #[inline]
    pub(crate) fn new(order: &'a O) -> Self {
        KeyOrEntry(order)
    }

    #[inline]
    fn project<Q: ?Sized + LookupKey<O>>(key: &Q) -> &O::OrderedType {
        LookupKey::<O>::key(key)
    }

    /// Key against key.
    #[inline]
    pub(crate) fn keys<P, Q>(self, lhs: &P, rhs: &Q) -> Ordering
    where
        P: ?Sized + LookupKey<O>,
        Q: ?Sized + LookupKey<O>,
    {
        self.0.cmp(Self::project(lhs), Self::project(rhs))
    }

    /// Key against entry.
    #[inline]
    pub(crate) fn key_entry<Q, K, V>(self, key: &Q, entry: &(K, V)) -> Ordering
    where
        Q: ?Sized + LookupKey<O>,
        K: LookupKey<O>,
    {
        self.0.cmp(Self::project(key), Self::project(&entry.0))
    }

    /// Entry against entry.
    #[inline]
    pub(crate) fn entries<K, V>(self, lhs: &(K, V), rhs: &(K, V)) -> Ordering
    where
        K: LookupKey<O>,
    {
        self.0.cmp(Self::project(&lhs.0), Self::project(&rhs.0))
    }

    #[inline]
    pub(crate) fn key_before_entry<Q, K, V>(self, key: &Q, entry: &(K, V)) -> bool
    where
        Q: ?Sized + LookupKey<O>,
        K: LookupKey<O>,
    {
        self.0.lt(Self::project(key), Self::project(&entry.0))
    }

    #[inline]
    pub(crate) fn entry_before_key<Q, K, V>(self, entry: &(K, V), key: &Q) -> bool
    where
        Q: ?Sized + LookupKey<O>,
        K: LookupKey<O>,
    {
        self.0.lt(Self::project(&entry.0), Self::project(key))
    }

    #[inline]
    pub(crate) fn entry_before_entry<K, V>(self, lhs: &(K, V), rhs: &(K, V)) -> bool
    where
        K: LookupKey<O>,
    {
        self.0.lt(Self::project(&lhs.0), Self::project(&rhs.0))
    }

    /// Neither entry is ordered before the other.
    #[inline]
    pub(crate) fn equivalent_entries<K, V>(self, lhs: &(K, V), rhs: &(K, V)) -> bool
    where
        K: LookupKey<O>,
    {
        self.0.eq(Self::project(&lhs.0), Self::project(&rhs.0))
    }
}
