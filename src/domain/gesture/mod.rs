// SPDX-License-Identifier: MPL-2.0
//! Gesture domain types.
//!
//! Pure numeric helpers shared by the pan, pinch and double-tap handlers:
//! range interpolation, ballistic snap-point selection and value newtypes.

pub mod interpolate;
pub mod newtypes;
pub mod snap;

// Re-export commonly used items
pub use interpolate::{interpolate, interpolate_clamped, Extrapolation};
pub use newtypes::{GestureScale, Opacity};
pub use snap::{project, snap_point};
