//! Ordering used by a [`FlatMap`] that was built without an explicit [`TotalOrder`].
//!
//! Such a map compares keys through a borrowed form picked by [`OrdStoredKey`]: a
//! `FlatMap<String, V>` sorts and searches by `str`, a `FlatMap<Vec<u8>, V>` by `[u8]`.
//! Lookups then accept any `&Q` whose type borrows as that same form.
//!
//! [`FlatMap`]: crate::FlatMap

use crate::{LookupKey, TotalOrder};
use alloc::{borrow::Cow, boxed::Box, rc::Rc, string::String, sync::Arc, vec::Vec};
use core::{borrow::Borrow, cmp::Ordering, fmt, marker::PhantomData};

/// Sorts a map's keys by the [`Ord`] implementation of `T`, the form each key borrows as.
///
/// The value carries no state, so every `OrdTotalOrder<T>` sorts identically and two maps
/// that use it can be compared and merged freely.
///
/// # Examples
///
/// ```
/// use flat_map::{FlatMap, OrdTotalOrder, TotalOrder};
///
/// let map: FlatMap<String, u8> = FlatMap::new();
/// let order: &OrdTotalOrder<str> = map.order();
/// assert!(order.lt("apple", "banana"));
/// ```
pub struct OrdTotalOrder<T: ?Sized + Ord>(PhantomData<fn(&T)>);

impl<T: ?Sized + Ord> OrdTotalOrder<T> {
    /// Returns the order. Usable in `const` contexts, for instance by [`FlatMap::new`].
    ///
    /// [`FlatMap::new`]: crate::FlatMap::new
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized + Ord> Default for OrdTotalOrder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized + Ord> Clone for OrdTotalOrder<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized + Ord> Copy for OrdTotalOrder<T> {}

impl<T: ?Sized + Ord> fmt::Debug for OrdTotalOrder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OrdTotalOrder")
    }
}

impl<T: ?Sized + Ord> TotalOrder for OrdTotalOrder<T> {
    type OrderedType = T;

    fn cmp(&self, this: &T, that: &T) -> Ordering {
        Ord::cmp(this, that)
    }

    // The predicates go straight to `T`'s operators, which a lawful `T` keeps in line
    // with `cmp`.
    fn eq(&self, this: &T, that: &T) -> bool {
        this == that
    }
    fn ne(&self, this: &T, that: &T) -> bool {
        this != that
    }
    fn lt(&self, this: &T, that: &T) -> bool {
        this < that
    }
    fn le(&self, this: &T, that: &T) -> bool {
        this <= that
    }
    fn gt(&self, this: &T, that: &T) -> bool {
        this > that
    }
    fn ge(&self, this: &T, that: &T) -> bool {
        this >= that
    }
}

/// Anything that borrows as `T` can be looked up in a map ordered by `OrdTotalOrder<T>`.
impl<T: ?Sized + Ord, K: ?Sized + Borrow<T>> LookupKey<OrdTotalOrder<T>> for K {
    fn key(&self) -> &T {
        self.borrow()
    }
}

/// Key types a [`FlatMap`] can store when no total order is given.
///
/// `DefaultComparisonKey` names the borrowed form that the map sorts by and that lookups
/// are expressed in. It decides the `O` parameter of `FlatMap<K, V>`, so it matters for
/// [`FlatMap::new`], [`FlatMap::with_capacity`], [`FromIterator`] and `From<[(K, V); N]>`.
/// Maps built through [`FlatMap::with_order`] do not need it.
///
/// Owning containers compare as what they contain (`String` as `str`, `Vec<T>` and
/// `[T; N]` as `[T]`, `Box<T>`, `Rc<T>` and `Arc<T>` as `T`). Other types compare as
/// themselves.
///
/// A key type of your own opts in with a one-line impl:
///
/// ```
/// use flat_map::{FlatMap, OrdStoredKey};
///
/// #[derive(PartialEq, Eq, PartialOrd, Ord)]
/// struct Ticket(u32);
///
/// impl OrdStoredKey for Ticket {
///     type DefaultComparisonKey = Self;
/// }
///
/// let mut queue = FlatMap::new();
/// queue.insert(Ticket(7), "late");
/// queue.insert(Ticket(2), "early");
/// assert_eq!(queue.first_key_value().map(|(_, v)| *v), Some("early"));
/// ```
///
/// [`FlatMap`]: crate::FlatMap
/// [`FlatMap::new`]: crate::FlatMap::new
/// [`FlatMap::with_capacity`]: crate::FlatMap::with_capacity
/// [`FlatMap::with_order`]: crate::FlatMap::with_order
pub trait OrdStoredKey: LookupKey<OrdTotalOrder<Self::DefaultComparisonKey>> {
    /// The borrowed form keys are sorted and looked up by.
    type DefaultComparisonKey: ?Sized + Ord;
}

// Keys whose own `Ord` is used.
macro_rules! compared_as_self {
    ($($(#[$attr:meta])* $t:ty),* $(,)?) => {
        $(
            $(#[$attr])*
            impl OrdStoredKey for $t {
                type DefaultComparisonKey = Self;
            }
        )*
    };
}

// Keys compared through a borrowed form, with the impl's generics in brackets.
macro_rules! compared_as {
    ($($(#[$attr:meta])* [$($g:tt)*] $t:ty => $m:ty),* $(,)?) => {
        $(
            $(#[$attr])*
            impl<$($g)*> OrdStoredKey for $t {
                type DefaultComparisonKey = $m;
            }
        )*
    };
}

compared_as_self! {
    (), bool, char, str,
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    #[cfg(feature = "std")] std::path::Path,
}

compared_as! {
    [] String => str,
    #[cfg(feature = "std")] [] std::path::PathBuf => std::path::Path,
    [T: Ord] [T] => Self,
    [T: Ord] Vec<T> => [T],
    [T: Ord, const N: usize] [T; N] => [T],
    [T: ?Sized + Ord] &T => T,
    [T: ?Sized + Ord] Box<T> => T,
    [T: ?Sized + Ord] Rc<T> => T,
    [T: ?Sized + Ord] Arc<T> => T,
    [B: ?Sized + Ord + alloc::borrow::ToOwned] Cow<'_, B> => B,
}
