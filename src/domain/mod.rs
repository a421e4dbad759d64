// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core viewer logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`asset`]: Asset descriptor and sync decisions ([`Asset`](asset::Asset),
//!   [`SyncStatus`](asset::SyncStatus), [`SyncBadge`](asset::SyncBadge))
//! - [`gesture`]: Gesture math ([`interpolate`](gesture::interpolate),
//!   [`snap_point`](gesture::snap_point), [`GestureScale`](gesture::GestureScale))

pub mod asset;
pub mod gesture;
