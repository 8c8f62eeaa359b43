// boundsafe - boundsafe-foundation
// Module: Bounded container traits
// SW-REQ-ID: REQ_MEM_SAFETY_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Access traits shared by [`BoundedArray`](crate::BoundedArray) and
//! [`RuntimeBoundedArray`](crate::RuntimeBoundedArray).

use core::ops::Range;

use boundsafe_error::Result;

use crate::ordinal::{check_index, Ordinal};

/// A container whose capacity is fixed for its whole lifetime.
pub trait BoundedCapacity {
    /// The fixed capacity.
    fn capacity(&self) -> usize;

    /// Every valid index, `0..capacity()`.
    ///
    /// Loops over a container should iterate this range rather than a bound
    /// computed separately from construction.
    #[inline]
    fn indices(&self) -> Range<usize> {
        0..self.capacity()
    }

    /// Whether `index` lies in `[0, capacity())`.
    #[inline]
    fn contains_index<I: Ordinal>(&self, index: I) -> bool {
        check_index(index, self.capacity()).is_ok()
    }
}

/// Checked indexed access to a bounded container.
pub trait BoundedAccess<T>: BoundedCapacity {
    /// Borrow the element at `index`.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `index` is outside `[0, capacity())`.
    fn get_ref<I: Ordinal>(&self, index: I) -> Result<&T>;

    /// Write `value` at `index`, returning the value it replaced.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `index` is outside `[0, capacity())`. The container
    /// is left unchanged and `value` is dropped.
    fn set<I: Ordinal>(&mut self, index: I, value: T) -> Result<T>;

    /// Copy of the element at `index`.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `index` is outside `[0, capacity())`.
    #[inline]
    fn get<I: Ordinal>(&self, index: I) -> Result<T>
    where
        T: Clone,
    {
        self.get_ref(index).cloned()
    }

    /// Write `f(i)` at every index in `indices()`.
    ///
    /// # Errors
    ///
    /// Propagates the first failed write. Cannot fail for a well-behaved
    /// implementation since every index comes from `indices()`.
    fn fill_with<F>(&mut self, mut f: F) -> Result<()>
    where
        F: FnMut(usize) -> T,
    {
        #[cfg(feature = "tracing")]
        let _span = crate::tracing::AccessTrace::filling(self.capacity()).entered();

        for index in self.indices() {
            self.set(index, f(index))?;
        }
        Ok(())
    }
}
