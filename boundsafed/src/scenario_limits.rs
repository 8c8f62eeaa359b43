//! Capacities and literal indices replayed by the boundsafed scenarios
//!
//! Each module holds the constants of one unsafe access pattern. The
//! literal indices are the ones the patterns use against a plain array.

/// Loop with a `<=` bound plus fixed out-of-range accesses
pub mod off_by_one {
    /// Capacity of the array under test
    pub const CAPACITY: usize = 10;

    /// Index of the literal write past the end
    pub const FIXED_WRITE_INDEX: usize = 15;

    /// Value of the literal write past the end
    pub const FIXED_WRITE_VALUE: i32 = 100;

    /// Index of the literal read past the end
    pub const FIXED_READ_INDEX: usize = 20;
}

/// Runtime-sized buffer written by a loop with a larger bound
pub mod runtime_overrun {
    /// Buffer size used when none is given on the command line
    pub const DEFAULT_SIZE: i64 = 5;

    /// Largest buffer size accepted from the command line
    pub const MAX_SIZE: i64 = 4096;

    /// Number of writes the loop attempts
    pub const WRITES: i32 = 10;
}

/// Single write at a caller-supplied index
pub mod user_index {
    /// Capacity of the array under test
    pub const CAPACITY: usize = 8;

    /// Index used when none is given on the command line
    pub const DEFAULT_INDEX: i64 = 100;

    /// Value written at the caller-supplied index
    pub const VALUE: i32 = 42;
}

/// Corrected loop bounded by the container's own capacity
pub mod safe_loop {
    /// Capacity of the array under test
    pub const CAPACITY: usize = 10;
}
