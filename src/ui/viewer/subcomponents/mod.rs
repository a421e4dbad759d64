// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the photo viewer.
//!
//! Each gesture has its own State, Message, Effect, and handle() method.
//! The gesture engine orchestrates these sub-components and applies their
//! effects to the shared transform.
//!
//! ## Architecture
//!
//! ```text
//! engine.rs (orchestrator)
//!     ├── pan         - Drag-to-dismiss
//!     ├── pinch       - Pinch-to-zoom and pinch-to-dismiss
//!     └── double_tap  - Zoom toggle
//! ```

pub mod double_tap;
pub mod pan;
pub mod pinch;
