// SPDX-License-Identifier: MPL-2.0
//! Sync badge and header actions for the viewed asset.
//!
//! The viewer only decides which action is available and updates its local
//! copy of the asset; the upload and download themselves belong to the sync
//! service.

use super::types::{Asset, SyncStatus};

/// Badge shown in the viewer header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncBadge {
    /// A sync request is in flight.
    Loading,
    /// Asset is safely on the box.
    Synced,
    /// Tap to upload.
    Upload,
    /// Upload queued; tap to cancel.
    Pending,
}

/// Action requested by tapping the header badge or the download card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncAction {
    /// Mark the asset for upload and hand it to the sync service.
    QueueUpload,
    /// Ask the user whether to cancel the queued upload.
    PromptCancel,
    /// Fetch the asset back from the box.
    Download { cid: Option<String> },
}

/// Returns the header badge for `asset`, or `None` when nothing is shown.
#[must_use]
pub fn badge(asset: &Asset, loading: bool) -> Option<SyncBadge> {
    if loading {
        return Some(SyncBadge::Loading);
    }
    match (asset.sync_status, asset.is_deleted) {
        (SyncStatus::Synced, false) => Some(SyncBadge::Synced),
        (SyncStatus::NotSynced, false) => Some(SyncBadge::Upload),
        (SyncStatus::Sync, _) => Some(SyncBadge::Pending),
        _ => None,
    }
}

/// Whether the "tap to download" card replaces the image.
#[must_use]
pub fn shows_download(asset: &Asset) -> bool {
    asset.sync_status == SyncStatus::Synced && asset.is_deleted
}

/// Action triggered by the header badge.
#[must_use]
pub fn upload_action(asset: &Asset) -> Option<SyncAction> {
    match (asset.sync_status, asset.is_deleted) {
        (SyncStatus::NotSynced, false) => Some(SyncAction::QueueUpload),
        (SyncStatus::Sync, _) => Some(SyncAction::PromptCancel),
        _ => None,
    }
}

/// Action triggered by the download card.
#[must_use]
pub fn download_action(asset: &Asset) -> Option<SyncAction> {
    shows_download(asset).then(|| SyncAction::Download {
        cid: asset.cid.clone(),
    })
}

impl Asset {
    /// Marks the asset as queued for upload.
    pub fn queue_upload(&mut self) {
        self.sync_status = SyncStatus::Sync;
    }

    /// Drops a queued upload.
    pub fn cancel_upload(&mut self) {
        if self.sync_status == SyncStatus::Sync {
            self.sync_status = SyncStatus::NotSynced;
        }
    }

    /// Records the outcome of a background upload. Failures keep the queue.
    pub fn upload_finished(&mut self, success: bool) {
        if success {
            self.sync_status = SyncStatus::Synced;
        }
    }

    /// Records a completed download; the asset is local again.
    pub fn downloaded(&mut self, uri: impl Into<String>) {
        self.uri = uri.into();
        self.is_deleted = false;
    }
}
