// boundsafe - boundsafe-foundation
// Module: Index and capacity validation
// SW-REQ-ID: REQ_MEM_SAFETY_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Index and capacity validation.
//!
//! [`Ordinal`] lets callers pass any primitive integer as an index or a
//! capacity. Conversion to `usize` is checked: negative values and values
//! wider than the platform's `usize` have no offset at all, so they can
//! never alias a valid slot.
//!
//! [`check_index`] is the single bounds check used by every container access
//! path. [`slot`] and [`slot_mut`] are the only way to reach an individual
//! element by index.

use core::fmt;

use boundsafe_error::{
    kinds::{InvalidCapacityError, OutOfRangeError},
    Error, Result,
};

/// An integer usable as an index or a capacity.
///
/// Implemented for every primitive integer type, signed and unsigned.
pub trait Ordinal: Copy + fmt::Debug {
    /// Returns the value as a `usize` offset, or `None` if it is negative or
    /// does not fit.
    fn to_offset(self) -> Option<usize>;

    /// Returns the value widened to `i128` for diagnostics.
    ///
    /// `u128` values above `i128::MAX` saturate.
    fn widen(self) -> i128;
}

macro_rules! impl_ordinal {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Ordinal for $ty {
                #[inline]
                fn to_offset(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }

                #[inline]
                fn widen(self) -> i128 {
                    i128::try_from(self).unwrap_or(i128::MAX)
                }
            }
        )*
    };
}

impl_ordinal!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Validates `index` against `capacity`.
///
/// Returns the offset when `0 <= index < capacity`.
///
/// # Errors
///
/// Returns [`OutOfRangeError`] carrying the index and capacity otherwise.
#[inline]
pub fn check_index<I: Ordinal>(
    index: I,
    capacity: usize,
) -> core::result::Result<usize, OutOfRangeError> {
    match index.to_offset() {
        Some(offset) if offset < capacity => Ok(offset),
        _ => Err(OutOfRangeError::new(index.widen(), capacity)),
    }
}

/// Validates a capacity requested at construction.
///
/// # Errors
///
/// Returns [`InvalidCapacityError`] when `requested <= 0` or when it does
/// not fit in `usize`.
#[inline]
pub fn check_capacity<C: Ordinal>(
    requested: C,
) -> core::result::Result<usize, InvalidCapacityError> {
    match requested.to_offset() {
        Some(capacity) if capacity > 0 => Ok(capacity),
        _ => Err(InvalidCapacityError::new(requested.widen())),
    }
}

/// Shared reference to the slot at `index`.
///
/// # Errors
///
/// Returns an `OutOfRange` error if `index` is outside `storage`.
#[inline]
pub fn slot<T, I: Ordinal>(storage: &[T], index: I) -> Result<&T> {
    let offset = check_index(index, storage.len()).map_err(reject_index)?;
    storage.get(offset).ok_or(Error::OUT_OF_RANGE)
}

/// Mutable reference to the slot at `index`.
///
/// # Errors
///
/// Returns an `OutOfRange` error if `index` is outside `storage`.
#[inline]
pub fn slot_mut<T, I: Ordinal>(storage: &mut [T], index: I) -> Result<&mut T> {
    let offset = check_index(index, storage.len()).map_err(reject_index)?;
    storage.get_mut(offset).ok_or(Error::OUT_OF_RANGE)
}

/// Capacity validation that reports through the shared error type.
pub(crate) fn validate_capacity<C: Ordinal>(requested: C) -> Result<usize> {
    check_capacity(requested).map_err(|error| {
        #[cfg(feature = "tracing")]
        crate::tracing::AccessTrace::invalid_capacity(&error);
        Error::from(error)
    })
}

fn reject_index(error: OutOfRangeError) -> Error {
    #[cfg(feature = "tracing")]
    crate::tracing::AccessTrace::rejected(&error);
    Error::from(error)
}
