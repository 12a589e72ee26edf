use core::fmt;

/// The error returned by [`FlatMap::at`] and [`FlatMap::at_mut`] when the map holds no
/// entry for the requested key.
///
/// Neither the map nor the key is affected by a failed lookup.
///
/// [`FlatMap::at`]: crate::FlatMap::at
/// [`FlatMap::at_mut`]: crate::FlatMap::at_mut
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeyNotFound;

impl fmt::Display for KeyNotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("key passed to `at` does not exist in this map")
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "error_in_core")] {
        impl core::error::Error for KeyNotFound {}
    } else if #[cfg(any(feature = "std", test))] {
        impl std::error::Error for KeyNotFound {}
    }
}
