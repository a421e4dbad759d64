// SPDX-License-Identifier: MPL-2.0
//! User interface state and gesture handling.
//!
//! This module follows the Elm-style "state down, messages up" pattern:
//! gesture sub-components emit effects and a single orchestrator applies
//! them to the shared transform.
//!
//! # Screens
//!
//! - [`viewer`] - Full-screen photo viewer with pan/pinch dismiss and zoom
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Transform state, animated values and gesture tuning

pub mod state;
pub mod viewer;
