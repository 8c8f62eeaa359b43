//! Tracing support for boundsafe containers
//!
//! This module provides structured tracing for the bounded containers. It
//! wraps the `tracing` crate and works in both std and `no_std` environments.

#![cfg(feature = "tracing")]

pub use ::tracing::{debug, trace_span, warn, Span};

use boundsafe_error::{InvalidCapacityError, OutOfRangeError};

/// Trace events for container access
#[derive(Debug, Clone)]
pub struct AccessTrace;

impl AccessTrace {
    /// Record a successful construction
    #[inline]
    pub fn constructed(container: &'static str, capacity: usize) {
        debug!(container, capacity, "bounded container constructed");
    }

    /// Record an access rejected by the bounds check
    #[inline]
    pub fn rejected(error: &OutOfRangeError) {
        warn!(
            index = %error.index,
            capacity = error.capacity,
            "out-of-range access rejected"
        );
    }

    /// Record a construction rejected for its capacity
    #[inline]
    pub fn invalid_capacity(error: &InvalidCapacityError) {
        warn!(requested = %error.requested, "invalid capacity rejected");
    }

    /// Create a span covering a whole-container fill
    #[inline]
    #[must_use]
    pub fn filling(capacity: usize) -> Span {
        trace_span!("bounded_fill", capacity = capacity)
    }
}
