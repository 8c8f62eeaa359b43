// boundsafe - boundsafe-foundation
// Module: Foundation Library
// SW-REQ-ID: REQ_MEM_SAFETY_001, REQ_RESOURCE_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Bounds-checked fixed-capacity arrays.
//!
//! Two containers share one access contract:
//!
//! - [`BoundedArray<T, N>`]: inline storage, capacity fixed at compile time.
//! - [`RuntimeBoundedArray<T>`]: boxed storage, capacity chosen at run time
//!   and fixed at construction. It never grows.
//!
//! Every read and write goes through [`ordinal::check_index`]. An index
//! outside `[0, capacity)` produces an `OutOfRange` error and touches no
//! storage. A capacity that is zero or negative produces `InvalidCapacity`.
//! Indices may be any primitive integer, so a negative index coming from
//! caller input is reported as out of range instead of wrapping around.
//!
//! # Examples
//!
//! ```
//! use boundsafe_foundation::prelude::*;
//!
//! let mut arr = BoundedArray::<i32, 10>::new()?;
//! for i in arr.indices() {
//!     arr.set(i, i32::try_from(i).unwrap_or(0) * 2)?;
//! }
//! assert_eq!(arr.get(9)?, 18);
//!
//! // The off-by-one write is rejected and nothing is modified.
//! let err = arr.set(10, 20).unwrap_err();
//! assert!(err.is_out_of_range());
//! assert_eq!(arr.get(9)?, 18);
//! # Ok::<(), boundsafe_error::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

extern crate alloc;

/// Fixed-capacity array with compile-time capacity
pub mod bounded_array;
/// Index and capacity validation
pub mod ordinal;
pub mod prelude;
/// Fixed-capacity array with run-time capacity
pub mod runtime_array;
/// Access traits shared by the bounded containers
pub mod traits;

#[cfg(feature = "tracing")]
pub mod tracing;

pub use bounded_array::BoundedArray;
pub use boundsafe_error::{Error, ErrorCategory, Result};
pub use ordinal::{check_capacity, check_index, Ordinal};
pub use runtime_array::RuntimeBoundedArray;
pub use traits::{BoundedAccess, BoundedCapacity};
