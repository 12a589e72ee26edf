#![allow(unused_imports)]

#[macro_use]
#[allow(unstable_name_collisions)]
mod definitions {
    use alloc::vec::Vec;
    use cfg_if::cfg_if;

    cfg_if! {
        if #[cfg(feature = "allocator_api")] {
            pub use alloc::alloc::{Allocator, Global};
        } else {
            pub trait Allocator {}

            #[derive(Copy, Clone, Debug, Default)]
            pub struct Global;

            impl Allocator for Global {}
        }
    }

    cfg_if! {
        if #[cfg(feature = "hasher_prefixfree_extras")] {
            pub use core::hash::Hasher;
        } else {
            pub trait Hasher: core::hash::Hasher {
                #[inline]
                fn write_length_prefix(&mut self, len: usize) {
                    self.write_usize(len);
                }
            }

            impl<H: core::hash::Hasher> Hasher for H {}
        }
    }

    cfg_if! {
        if #[cfg(feature = "allocator_api")] {
            macro_rules! A {
                (Vec<$t:ty$(, $a:ty)?>) => { alloc::vec::Vec<$t$(, $a)?> };
                (IntoIter<$t:ty$(, $a:ty)?>) => { alloc::vec::IntoIter<$t$(, $a)?> };
            }
        } else {
            macro_rules! A {
                (Vec<$t:ty$(, $a:ty)?>) => { alloc::vec::Vec<$t> };
                (IntoIter<$t:ty$(, $a:ty)?>) => { alloc::vec::IntoIter<$t> };
            }
        }
    }

    /// Allocator-aware construction of the entry vector, whether or not `Vec` itself
    /// is parameterised by an allocator.
    pub trait VecNewIn<A: Allocator>: Sized {
        fn new_in(alloc: A) -> Self;
        fn with_capacity_in(capacity: usize, alloc: A) -> Self;
    }

    cfg_if! {
        if #[cfg(feature = "allocator_api")] {
            impl<T, A: Allocator> VecNewIn<A> for Vec<T, A> {
                #[inline]
                fn new_in(alloc: A) -> Self {
                    Vec::new_in(alloc)
                }

                #[inline]
                fn with_capacity_in(capacity: usize, alloc: A) -> Self {
                    Vec::with_capacity_in(capacity, alloc)
                }
            }
        } else {
            impl<T, A: Allocator> VecNewIn<A> for Vec<T> {
                #[inline]
                fn new_in(_: A) -> Self {
                    Vec::new()
                }

                #[inline]
                fn with_capacity_in(capacity: usize, _: A) -> Self {
                    Vec::with_capacity(capacity)
                }
            }
        }
    }

    macro_rules! decorate_if {
        (
            $(#[$attr:meta])*
            if #[cfg($vis_m:meta)] { $(#[$vis_attr:meta])* $vis:vis }
            $($rest:tt)+
        ) => {
            cfg_if::cfg_if! {
                if #[cfg($vis_m)] {
                    $(#[$attr])*
                    $(#[$vis_attr])*
                    #[cfg_attr(docsrs, doc(cfg($vis_m)))]
                    $vis $($rest)+
                } else {
                    $(#[$attr])*
                    #[allow(dead_code)]
                    pub(crate) $($rest)+
                }
            }
        };
    }
}

pub(crate) use definitions::{Allocator, Global, Hasher as _, VecNewIn};
