// SPDX-License-Identifier: MPL-2.0
//! Photo viewer: gesture engine, its sub-components and the viewing session.

pub mod engine;
pub mod session;
pub mod subcomponents;

pub use engine::{GestureEngine, GestureEvent, Outcome};
pub use session::{Effect, PhotoViewerSession, TransformObserver};
