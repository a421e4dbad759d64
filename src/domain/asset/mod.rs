// SPDX-License-Identifier: MPL-2.0
//! Asset domain types.
//!
//! The photo descriptor handed to the viewer and the sync decisions derived
//! from it.

pub mod sync;
pub mod types;

// Re-export commonly used types
pub use sync::{badge, download_action, shows_download, upload_action, SyncAction, SyncBadge};
pub use types::{Asset, ContainerSize, SyncStatus};
