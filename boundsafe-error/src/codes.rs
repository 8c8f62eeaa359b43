// boundsafe - boundsafe-error
// Module: Error Codes
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for boundsafe
//!
//! Each category owns the thousand codes starting at its discriminant times
//! 1000, see [`ErrorCategory::code_range`](crate::ErrorCategory::code_range).

// Memory error codes (4000-4999)
/// Index outside `[0, capacity)`
pub const OUT_OF_RANGE: u16 = 4000;
/// Storage for a validated capacity could not be allocated
pub const ALLOCATION_FAILED: u16 = 4001;

// System error codes (8000-8999)
/// Generic system error
pub const SYSTEM_ERROR: u16 = 8000;

// Capacity error codes (12000-12999)
/// Capacity requested at construction is zero or negative
pub const INVALID_CAPACITY: u16 = 12000;
