// boundsafe - boundsafe-error
// Module: Error Prelude
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for boundsafe-error
//!
//! Re-exports the error types and kind constructors so dependent crates can
//! pull everything in with a single `use`.

pub use crate::{
    codes,
    kinds::{self, InvalidCapacityError, OutOfRangeError},
    Error,
    ErrorCategory,
    ErrorSource,
    Result,
    ToErrorCategory,
};
// Re-export error factory functions
pub use crate::{invalid_capacity_error, out_of_range_error};
