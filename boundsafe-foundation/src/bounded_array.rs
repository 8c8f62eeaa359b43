// boundsafe - boundsafe-foundation
// Module: BoundedArray - Inline-storage fixed-capacity array
// SW-REQ-ID: REQ_RESOURCE_001, REQ_MEM_SAFETY_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity array with inline storage and compile-time capacity.
//!
//! `BoundedArray<T, N>` owns exactly `N` elements, all initialized. It is
//! the checked replacement for a plain `T[N]` local: reads and writes take
//! an index of any integer type and fail with `OutOfRange` instead of
//! touching memory outside the array.
//!
//! # Characteristics
//!
//! - **Zero allocation**: storage is an inline `[T; N]`
//! - **Always initialized**: every slot holds a value from construction on
//! - **Checked access**: no method indexes storage without a bounds check
//! - **Fixed capacity**: `N` never changes; there is no push or resize

use core::slice;

use boundsafe_error::Result;

use crate::{
    ordinal::{slot, slot_mut, validate_capacity, Ordinal},
    traits::{BoundedAccess, BoundedCapacity},
};

/// A fixed-capacity array with compile-time capacity and inline storage.
///
/// # Invariants
///
/// 1. `N > 0` for every constructed value
/// 2. All `N` slots are initialized
/// 3. Storage is only reached through [`slot`] / [`slot_mut`]
///
/// # Examples
///
/// ```
/// use boundsafe_foundation::BoundedArray;
///
/// let mut data = BoundedArray::<i32, 8>::new()?;
/// data.set(3, 42)?;
/// assert_eq!(data.get(3)?, 42);
///
/// // Caller-supplied index far past the end
/// assert!(data.set(100, 42).unwrap_err().is_out_of_range());
/// # Ok::<(), boundsafe_error::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoundedArray<T, const N: usize> {
    data: [T; N],
}

impl<T: Default, const N: usize> BoundedArray<T, N> {
    /// Creates an array with every slot set to `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCapacity` if `N == 0`.
    pub fn new() -> Result<Self> {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> BoundedArray<T, N> {
    /// Creates an array where slot `i` holds `f(i)`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCapacity` if `N == 0`.
    pub fn from_fn<F>(f: F) -> Result<Self>
    where
        F: FnMut(usize) -> T,
    {
        validate_capacity(N)?;

        #[cfg(feature = "tracing")]
        crate::tracing::AccessTrace::constructed("BoundedArray", N);

        Ok(Self {
            data: core::array::from_fn(f),
        })
    }

    /// Wraps an existing array.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCapacity` if `N == 0`.
    pub fn from_array(data: [T; N]) -> Result<Self> {
        validate_capacity(N)?;
        Ok(Self { data })
    }

    /// Returns the compile-time capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Borrows the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `index < 0` or `index >= N`.
    #[inline]
    pub fn get_ref<I: Ordinal>(&self, index: I) -> Result<&T> {
        slot(&self.data, index)
    }

    /// Returns a copy of the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `index < 0` or `index >= N`.
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
    /// Returns `OutOfRange` if `index < 0` or `index >= N`. No element is
    /// modified in that case.
    #[inline]
    pub fn set<I: Ordinal>(&mut self, index: I, value: T) -> Result<T> {
        let target = slot_mut(&mut self.data, index)?;
        Ok(core::mem::replace(target, value))
    }

    /// Read-only view of all `N` elements.
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

    /// Consumes the container and returns the underlying array.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> [T; N] {
        self.data
    }
}

impl<T, const N: usize> BoundedCapacity for BoundedArray<T, N> {
    #[inline]
    fn capacity(&self) -> usize {
        N
    }
}

impl<T, const N: usize> BoundedAccess<T> for BoundedArray<T, N> {
    #[inline]
    fn get_ref<I: Ordinal>(&self, index: I) -> Result<&T> {
        BoundedArray::get_ref(self, index)
    }

    #[inline]
    fn set<I: Ordinal>(&mut self, index: I, value: T) -> Result<T> {
        BoundedArray::set(self, index, value)
    }
}

impl<T, const N: usize> AsRef<[T]> for BoundedArray<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> TryFrom<[T; N]> for BoundedArray<T, N> {
    type Error = boundsafe_error::Error;

    fn try_from(data: [T; N]) -> Result<Self> {
        Self::from_array(data)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a BoundedArray<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_default_initialized() -> Result<()> {
        let arr = BoundedArray::<u32, 10>::new()?;
        assert_eq!(arr.capacity(), 10);
        assert!(arr.iter().all(|&v| v == 0));
        Ok(())
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = BoundedArray::<u32, 0>::new().unwrap_err();
        assert!(err.is_invalid_capacity());

        let err = BoundedArray::<u32, 0>::from_array([]).unwrap_err();
        assert!(err.is_invalid_capacity());
    }

    #[test]
    fn test_set_get() -> Result<()> {
        let mut arr = BoundedArray::<i32, 4>::new()?;

        assert_eq!(arr.set(2, 7)?, 0);
        assert_eq!(arr.set(2, 9)?, 7);
        assert_eq!(arr.get(2)?, 9);
        assert_eq!(arr.as_slice(), &[0, 0, 9, 0]);

        Ok(())
    }

    #[test]
    fn test_off_by_one_write_rejected() -> Result<()> {
        let mut arr = BoundedArray::<i32, 10>::new()?;
        for i in 0..10i32 {
            arr.set(i, i * 2)?;
        }

        let err = arr.set(10, 20).unwrap_err();
        assert!(err.is_out_of_range());
        assert_eq!(arr.get(9)?, 18);

        Ok(())
    }

    #[test]
    fn test_negative_index_rejected() -> Result<()> {
        let mut arr = BoundedArray::<u8, 3>::new()?;
        assert!(arr.get(-1i32).unwrap_err().is_out_of_range());
        assert!(arr.set(-1i64, 5).unwrap_err().is_out_of_range());
        assert_eq!(arr.as_slice(), &[0, 0, 0]);
        Ok(())
    }

    #[test]
    fn test_from_fn_and_into_inner() -> Result<()> {
        let arr = BoundedArray::<usize, 5>::from_fn(|i| i * i)?;
        assert_eq!(arr.into_inner(), [0, 1, 4, 9, 16]);
        Ok(())
    }

    #[test]
    fn test_try_from_array() -> Result<()> {
        let arr = BoundedArray::try_from([3u16, 1, 4])?;
        assert_eq!(arr.get(1)?, 1);
        assert_eq!((&arr).into_iter().copied().sum::<u16>(), 8);
        Ok(())
    }

    #[test]
    fn test_get_ref_non_clone() -> Result<()> {
        struct Opaque(u8);

        let arr = BoundedArray::<Opaque, 2>::from_fn(|i| Opaque(u8::try_from(i).unwrap_or(0)))?;
        assert_eq!(arr.get_ref(1)?.0, 1);
        assert!(arr.get_ref(2).is_err());
        Ok(())
    }
}
