// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Re-exports the `approx` assertion macros; gesture math is full of values
//! that are equal only up to rounding.

pub use approx::assert_abs_diff_eq;
