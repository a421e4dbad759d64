// SPDX-License-Identifier: MPL-2.0
//! Asset descriptor for the photo being viewed.
//!
//! These types represent pure data without any presentation dependencies.

/// Synchronization state of an asset with its remote box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncStatus {
    /// Only stored locally.
    #[default]
    NotSynced,
    /// Upload queued, waiting for a connection.
    Sync,
    /// Stored on the box.
    Synced,
}

/// Layout size of the image container in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerSize {
    pub width: f32,
    pub height: f32,
}

/// A photo asset as handed to the viewer.
///
/// # Example
///
/// ```
/// use photo_lens::domain::asset::{Asset, SyncStatus};
///
/// let asset = Asset::new("a1", "file:///photos/a1.jpg", 4000, 3000);
/// assert_eq!(asset.sync_status, SyncStatus::NotSynced);
///
/// let size = asset.container_size(400.0);
/// assert_eq!(size.width, 400.0);
/// assert_eq!(size.height, 300.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Asset {
    pub id: String,
    pub uri: String,
    /// Pixel width of the original image.
    pub width: u32,
    /// Pixel height of the original image.
    pub height: u32,
    pub sync_status: SyncStatus,
    /// The local file was removed; only the box copy remains.
    pub is_deleted: bool,
    /// Content identifier on the box, once uploaded.
    pub cid: Option<String>,
}

impl Asset {
    /// Creates a local, not yet synced asset.
    #[must_use]
    pub fn new(id: impl Into<String>, uri: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            uri: uri.into(),
            width,
            height,
            ..Self::default()
        }
    }

    /// Height over width. Falls back to a square for zero-width assets.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.width == 0 {
            return 1.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = self.height as f32 / self.width as f32;
        ratio
    }

    /// Full-width container keeping the image's aspect ratio.
    #[must_use]
    pub fn container_size(&self, screen_width: f32) -> ContainerSize {
        ContainerSize {
            width: screen_width,
            height: screen_width * self.aspect_ratio(),
        }
    }

    /// Whether the image itself can be rendered (the local copy exists).
    #[must_use]
    pub fn is_viewable(&self) -> bool {
        !self.is_deleted
    }
}
