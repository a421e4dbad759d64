// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the viewer's transform state and the values it is
//! built from, separated from the gesture handlers that mutate it.

pub mod animated;
pub mod transform;
pub mod tuning;

// Re-export commonly used types for convenience
pub use animated::{AnimatedValue, Easing};
pub use transform::{TransformSnapshot, ViewerTransformState};
pub use tuning::GestureTuning;
