// boundsafe - boundsafe-foundation
// Module: RuntimeBoundedArray - Boxed fixed-capacity array
// SW-REQ-ID: REQ_RESOURCE_001, REQ_MEM_SAFETY_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity array whose capacity is chosen at run time.
//!
//! This is the checked replacement for a variable-length stack array: the
//! capacity may come from a computation or from caller input, but it is
//! validated once at construction and cannot change afterwards. Storage is a
//! `Box<[T]>`, which has no growth operations.

use alloc::{boxed::Box, vec::Vec};
use core::slice;

use boundsafe_error::{Error, Result};

use crate::{
    ordinal::{slot, slot_mut, validate_capacity, Ordinal},
    traits::{BoundedAccess, BoundedCapacity},
};

/// A fixed-capacity array with run-time capacity.
///
/// # Invariants
///
/// 1. `capacity() > 0`
/// 2. `capacity()` equals the value validated at construction
/// 3. Storage is only reached through [`slot`] / [`slot_mut`]
///
/// # Examples
///
/// ```
/// use boundsafe_foundation::RuntimeBoundedArray;
///
/// let size = 5;
/// let mut buffer = RuntimeBoundedArray::<i32>::new(size)?;
/// for i in 0..10 {
///     match buffer.set(i, i) {
///         Ok(_) => assert!(i < size),
///         Err(e) => assert!(e.is_out_of_range()),
///     }
/// }
/// assert_eq!(buffer.as_slice(), &[0, 1, 2, 3, 4]);
/// # Ok::<(), boundsafe_error::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuntimeBoundedArray<T> {
    data: Box<[T]>,
}

impl<T: Default> RuntimeBoundedArray<T> {
    /// Creates an array of `capacity` default-initialized elements.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCapacity` if `capacity <= 0` or does not fit `usize`,
    /// and `AllocationFailed` if the storage cannot be reserved.
    pub fn new<C: Ordinal>(capacity: C) -> Result<Self> {
        Self::from_fn(capacity, |_| T::default())
    }
}

impl<T> RuntimeBoundedArray<T> {
    /// Creates an array of `capacity` elements where slot `i` holds `f(i)`.
    ///
    /// Storage is reserved up front, so an oversized request is reported
    /// instead of aborting the process.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCapacity` if `capacity <= 0` or does not fit `usize`,
    /// and `AllocationFailed` if the storage cannot be reserved.
    pub fn from_fn<C, F>(capacity: C, f: F) -> Result<Self>
    where
        C: Ordinal,
        F: FnMut(usize) -> T,
    {
        let capacity = validate_capacity(capacity)?;

        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| Error::ALLOCATION_FAILED)?;
        data.extend((0..capacity).map(f));

        #[cfg(feature = "tracing")]
        crate::tracing::AccessTrace::constructed("RuntimeBoundedArray", capacity);

        Ok(Self {
            data: data.into_boxed_slice(),
        })
    }

    /// Takes ownership of `elements`; the capacity becomes their count.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCapacity` if `elements` is empty.
    pub fn from_vec(elements: Vec<T>) -> Result<Self> {
        validate_capacity(elements.len())?;
        Ok(Self {
            data: elements.into_boxed_slice(),
        })
    }

    /// Returns the capacity fixed at construction.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Borrows the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `index < 0` or `index >= capacity()`.
    #[inline]
    pub fn get_ref<I: Ordinal>(&self, index: I) -> Result<&T> {
        slot(&self.data, index)
    }

    /// Returns a copy of the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `index < 0` or `index >= capacity()`.
    #[inline]
    pub fn get<I: Ordinal>(&self, index: I) -> Result<T>
    where
        T: Clone,
    {
        self.get_ref(index).cloned()
    }

    /// Writes `value` at `index` and returns the value it replaced.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `index < 0` or `index >= capacity()`. No
    /// element is modified in that case.
    #[inline]
    pub fn set<I: Ordinal>(&mut self, index: I, value: T) -> Result<T> {
        let target = slot_mut(&mut self.data, index)?;
        Ok(core::mem::replace(target, value))
    }

    /// Read-only view of all elements.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over all elements in index order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the container and returns its storage.
    #[inline]
    #[must_use]
    pub fn into_boxed_slice(self) -> Box<[T]> {
        self.data
    }
}

impl<T> BoundedCapacity for RuntimeBoundedArray<T> {
    #[inline]
    fn capacity(&self) -> usize {
        self.data.len()
    }
}

impl<T> BoundedAccess<T> for RuntimeBoundedArray<T> {
    #[inline]
    fn get_ref<I: Ordinal>(&self, index: I) -> Result<&T> {
        RuntimeBoundedArray::get_ref(self, index)
    }

    #[inline]
    fn set<I: Ordinal>(&mut self, index: I, value: T) -> Result<T> {
        RuntimeBoundedArray::set(self, index, value)
    }
}

impl<T> AsRef<[T]> for RuntimeBoundedArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> TryFrom<Vec<T>> for RuntimeBoundedArray<T> {
    type Error = boundsafe_error::Error;

    fn try_from(elements: Vec<T>) -> Result<Self> {
        Self::from_vec(elements)
    }
}

impl<'a, T> IntoIterator for &'a RuntimeBoundedArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
