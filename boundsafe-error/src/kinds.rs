// boundsafe - boundsafe-error
// Module: Error Kinds
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Detailed error kinds carrying the values involved in a violation.
//!
//! Kinds convert into [`Error`](crate::Error) through `From`, so code that
//! needs the context (logging, reports) can keep it and everything else can
//! just use `?`.

use core::fmt::{self, Display};

use crate::{ErrorCategory, ToErrorCategory};

/// Access at an index outside `[0, capacity)`
///
/// The index is widened to `i128` so negative caller input survives intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutOfRangeError {
    /// The rejected index
    pub index:    i128,
    /// Capacity of the container at the time of access
    pub capacity: usize,
}

impl OutOfRangeError {
    /// Create a new out-of-range kind
    #[must_use]
    pub const fn new(index: i128, capacity: usize) -> Self {
        Self { index, capacity }
    }
}

impl Display for OutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Index out of range: index {} not in [0, {})",
            self.index, self.capacity
        )
    }
}

impl ToErrorCategory for OutOfRangeError {
    fn to_category(&self) -> ErrorCategory {
        ErrorCategory::Memory
    }
}

/// Construction with a capacity that is zero or negative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidCapacityError {
    /// The rejected capacity
    pub requested: i128,
}

impl InvalidCapacityError {
    /// Create a new invalid capacity kind
    #[must_use]
    pub const fn new(requested: i128) -> Self {
        Self { requested }
    }
}

impl Display for InvalidCapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid capacity: {} (capacity must be positive)",
            self.requested
        )
    }
}

impl ToErrorCategory for InvalidCapacityError {
    fn to_category(&self) -> ErrorCategory {
        ErrorCategory::Capacity
    }
}

/// Create an out-of-range kind
#[must_use]
pub const fn out_of_range_error(index: i128, capacity: usize) -> OutOfRangeError {
    OutOfRangeError::new(index, capacity)
}

/// Create an invalid capacity kind
#[must_use]
pub const fn invalid_capacity_error(requested: i128) -> InvalidCapacityError {
    InvalidCapacityError::new(requested)
}
