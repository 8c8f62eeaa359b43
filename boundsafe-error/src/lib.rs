// boundsafe - boundsafe-error
// Module: Error Handling
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! boundsafe error handling library
//!
//! This library provides the error type shared by every boundsafe crate.
//! Bounds-checked containers report exactly two kinds of violation, both
//! synchronously at the point where they happen:
//!
//! ## Memory Errors (4000-4999)
//! - Index outside `[0, capacity)` on read or write
//! - Storage allocation failure for a run-time capacity
//!
//! ## Capacity Errors (12000-12999)
//! - Non-positive capacity requested at construction
//!
//! # Usage
//!
//! ```
//! use boundsafe_error::{codes, kinds, Error, ErrorCategory};
//!
//! // Detailed kinds carry the offending values...
//! let detail = kinds::OutOfRangeError::new(10, 10);
//! assert_eq!(detail.index, 10);
//!
//! // ...and convert into the shared `Error` with `?` or `into()`.
//! let error: Error = detail.into();
//! assert_eq!(error.category, ErrorCategory::Memory);
//! assert_eq!(error.code, codes::OUT_OF_RANGE);
//! assert!(error.is_out_of_range());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)] // Rule 2
#![deny(clippy::all)]
#![deny(clippy::perf)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

#[cfg(feature = "std")]
extern crate std;

/// Error codes for boundsafe
pub mod codes;
/// Error and error handling types
pub mod errors;
/// Error kind definitions
pub mod kinds;

pub mod prelude;

// Re-export key types
pub use errors::{Error, ErrorCategory, ErrorSource};
pub use kinds::{invalid_capacity_error, out_of_range_error, InvalidCapacityError, OutOfRangeError};

/// A specialized `Result` type for boundsafe operations.
///
/// Suitable for `no_std` environments since [`Error`] is `Copy` and carries
/// only static data.
pub type Result<T> = core::result::Result<T, Error>;

/// Error conversion trait for converting to specific error categories
///
/// Lets callers classify a detailed kind without first converting it into
/// an [`Error`].
pub trait ToErrorCategory {
    /// Convert the error to a specific category
    fn to_category(&self) -> ErrorCategory;
}
