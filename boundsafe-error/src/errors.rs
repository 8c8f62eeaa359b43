// boundsafe - boundsafe-error
// Module: Error Types
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Unified error handling for boundsafe
//!
//! Every violation a container can report maps onto one [`Error`] value with
//! a category, a numeric code, and a static message.

use core::fmt;

use crate::{codes, kinds, ToErrorCategory};

/// `Error` categories for boundsafe operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Memory access errors (index outside the container)
    Memory   = 4,
    /// System errors
    System   = 8,
    /// Capacity errors (construction-time sizing)
    Capacity = 12,
}

impl ErrorCategory {
    /// Codes reserved for this category, `discriminant * 1000` onwards
    #[must_use]
    pub const fn code_range(self) -> core::ops::Range<u16> {
        let base = self as u16 * 1000;
        base..base + 1000
    }
}

/// Base trait for all error types - `no_std` version
pub trait ErrorSource: fmt::Debug + Send + Sync {
    /// Get the error code
    fn code(&self) -> u16;

    /// Get the error message
    fn message(&self) -> &'static str;

    /// Get the error category
    fn category(&self) -> ErrorCategory;
}

/// boundsafe `Error` type
///
/// Categorized error with an error code and a static message. `Copy` so it
/// can be returned from `no_std` code without allocation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Index outside `[0, capacity)`
    pub const OUT_OF_RANGE: Self = Self::new(
        ErrorCategory::Memory,
        codes::OUT_OF_RANGE,
        "Index out of range",
    );
    /// Capacity zero or negative at construction
    pub const INVALID_CAPACITY: Self = Self::new(
        ErrorCategory::Capacity,
        codes::INVALID_CAPACITY,
        "Capacity must be positive",
    );

    /// Storage for a run-time capacity could not be allocated
    pub const ALLOCATION_FAILED: Self = Self::new(
        ErrorCategory::Memory,
        codes::ALLOCATION_FAILED,
        "Allocation failed for requested capacity",
    );

    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Create an out-of-range error with a custom static message
    #[must_use]
    pub const fn out_of_range(message: &'static str) -> Self {
        Self::new(ErrorCategory::Memory, codes::OUT_OF_RANGE, message)
    }

    /// Create an invalid capacity error with a custom static message
    #[must_use]
    pub const fn invalid_capacity(message: &'static str) -> Self {
        Self::new(ErrorCategory::Capacity, codes::INVALID_CAPACITY, message)
    }

    /// Check if this is an out-of-range access error
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        self.code == codes::OUT_OF_RANGE
    }

    /// Check if this is an invalid capacity error
    #[must_use]
    pub fn is_invalid_capacity(&self) -> bool {
        self.code == codes::INVALID_CAPACITY
    }

    /// Check if this is an allocation failure
    #[must_use]
    pub fn is_allocation_failed(&self) -> bool {
        self.code == codes::ALLOCATION_FAILED
    }

    /// Check if this is a memory error
    #[must_use]
    pub fn is_memory_error(&self) -> bool {
        self.category == ErrorCategory::Memory
    }

    /// Check if this is a capacity error
    #[must_use]
    pub fn is_capacity_error(&self) -> bool {
        self.category == ErrorCategory::Capacity
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}][E{:04X}] {}",
            self.category, self.code, self.message
        )
    }
}

impl ErrorSource for Error {
    fn code(&self) -> u16 {
        self.code
    }

    fn message(&self) -> &'static str {
        self.message
    }

    fn category(&self) -> ErrorCategory {
        self.category
    }
}

impl ToErrorCategory for Error {
    fn to_category(&self) -> ErrorCategory {
        self.category
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<core::fmt::Error> for Error {
    fn from(_: core::fmt::Error) -> Self {
        Self::new(
            ErrorCategory::System,
            codes::SYSTEM_ERROR,
            "Formatting error (static)",
        )
    }
}

// -- From<kinds::X> for Error implementations --
impl From<kinds::OutOfRangeError> for Error {
    fn from(_e: kinds::OutOfRangeError) -> Self {
        Self::OUT_OF_RANGE
    }
}

impl From<kinds::InvalidCapacityError> for Error {
    fn from(_e: kinds::InvalidCapacityError) -> Self {
        Self::INVALID_CAPACITY
    }
}
