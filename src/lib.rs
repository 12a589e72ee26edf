//! A map that keeps its entries in a single, contiguous, key-sorted vector, ordered by a
//! specified [`TotalOrder`] rather than the [`Ord`] trait.
//!
//! [`FlatMap`] trades the O(log n) insertion and removal of a node-based tree for the memory
//! locality, cache behaviour and random-access iteration of a [`Vec`]: lookups are binary
//! searches, while insertions and removals shift the entries that follow them.
//!
//! [`Vec`]: alloc::vec::Vec
//!
//! # Total orders
//!
//! Rather than requiring keys to implement [`Ord`], a map is sorted by a value of some type
//! that implements [`TotalOrder`], and its keys (together with any types used to look them
//! up) implement [`LookupKey`] for that order. The total order may carry runtime state.
//!
//! ```
//! use flat_map::{FlatMap, LookupKey, TotalOrder};
//! use std::cmp::Ordering;
//!
//! struct OrderByNthByte {
//!     n: usize, // runtime state
//! }
//!
//! impl TotalOrder for OrderByNthByte {
//!     type OrderedType = [u8];
//!     fn cmp(&self, this: &[u8], that: &[u8]) -> Ordering {
//!         match (this.get(self.n), that.get(self.n)) {
//!             (Some(lhs), Some(rhs)) => lhs.cmp(rhs),
//!             (Some(_), None) => Ordering::Greater,
//!             (None, Some(_)) => Ordering::Less,
//!             (None, None) => Ordering::Equal,
//!         }
//!     }
//! }
//!
//! impl LookupKey<OrderByNthByte> for str {
//!     fn key(&self) -> &[u8] {
//!         self.as_bytes()
//!     }
//! }
//!
//! impl LookupKey<OrderByNthByte> for String {
//!     fn key(&self) -> &[u8] {
//!         self.as_bytes()
//!     }
//! }
//!
//! let mut map = FlatMap::with_order(OrderByNthByte { n: 1 });
//! map.insert("za".to_string(), 1);
//! map.insert("yb".to_string(), 2);
//! map.insert("xa".to_string(), 3); // same second byte as "za": not inserted
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("qa"), Some(&1));
//! assert_eq!(map.keys().collect::<Vec<_>>(), ["za", "yb"]);
//! ```
//!
//! When no total order is specified, [`OrdTotalOrder`] delegates to the key's [`Ord`]
//! implementation, so that `FlatMap<K, V>` behaves like a sorted `BTreeMap<K, V>`.
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(feature = "allocator_api", feature(allocator_api))]
#![cfg_attr(feature = "error_in_core", feature(error_in_core))]
#![cfg_attr(feature = "extend_one", feature(extend_one))]
#![cfg_attr(feature = "hasher_prefixfree_extras", feature(hasher_prefixfree_extras))]
// documentation controls
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![deny(missing_docs)]
#![allow(unstable_name_collisions)]
#![cfg_attr(
    test,
    allow(
        clippy::bool_assert_comparison,
        clippy::needless_range_loop,
        clippy::redundant_clone,
        clippy::useless_vec,
    )
)]

extern crate alloc;

use core::cmp::Ordering;

#[macro_use]
mod polyfill;

mod default;
mod error;
pub mod map;

pub use default::{OrdStoredKey, OrdTotalOrder};
pub use error::KeyNotFound;
pub use map::FlatMap;

/// A total order over the type `OrderedType`, by which a [`FlatMap`] sorts its keys.
///
/// Implementations must be consistent: `cmp` must be a total order, and the provided
/// comparison methods (if overridden) must agree with it. It is a logic error for the
/// order to change while a map sorted by it holds entries; the behaviour resulting from
/// such a logic error is not specified, but will be encapsulated to the `FlatMap` that
/// observed it and will not result in undefined behaviour.
pub trait TotalOrder {
    /// The type over which this total order is defined.
    type OrderedType: ?Sized;

    /// Returns the [`Ordering`] between `this` and `that`.
    fn cmp(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> Ordering;

    /// Tests whether `this` and `that` are equivalent under this order.
    #[inline]
    fn eq(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_eq()
    }

    /// Tests whether `this` and `that` are not equivalent under this order.
    #[inline]
    fn ne(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        !self.eq(this, that)
    }

    /// Tests whether `this` is ordered after or equivalent to `that`.
    #[inline]
    fn ge(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_ge()
    }

    /// Tests whether `this` is ordered after `that`.
    #[inline]
    fn gt(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_gt()
    }

    /// Tests whether `this` is ordered before or equivalent to `that`.
    #[inline]
    fn le(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_le()
    }

    /// Tests whether `this` is ordered before `that`.
    #[inline]
    fn lt(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_lt()
    }
}

/// A type that can be used as a key, or to look keys up, in maps sorted by total order `O`.
///
/// Both the stored key type and every type used to probe a map must project to the same
/// [`TotalOrder::OrderedType`], and those projections must order consistently.
pub trait LookupKey<O: TotalOrder> {
    /// Returns the value by which `self` is ordered under `O`.
    fn key(&self) -> &O::OrderedType;
}

#[cfg(test)]
#[allow(dead_code)]
mod testing;
