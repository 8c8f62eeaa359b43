//! Prelude module for boundsafe-foundation
//!
//! Brings the containers, the access traits and the error types into scope.

pub use boundsafe_error::prelude::*;

pub use crate::{
    bounded_array::BoundedArray,
    ordinal::{check_capacity, check_index, Ordinal},
    runtime_array::RuntimeBoundedArray,
    traits::{BoundedAccess, BoundedCapacity},
};
