// SPDX-License-Identifier: MPL-2.0
//! Photo viewer session.
//!
//! Binds one asset to a [`GestureEngine`] for as long as the viewer is on
//! screen. The session forwards recognizer events, notifies observers of
//! transform changes, turns the dismiss decision into a single
//! [`Effect::GoBack`] and tracks the header's sync state.
//!
//! Unbinding the session is the only way to cancel: afterwards every event
//! and tick is dropped.

use super::engine::{GestureEngine, GestureEvent, Outcome};
use crate::domain::asset::{self, Asset, ContainerSize, SyncAction, SyncBadge};
use crate::ui::state::{GestureTuning, TransformSnapshot};
use iced_core::Size;
use std::fmt;
use std::time::Duration;

/// Receives the renderable transform whenever it changes.
pub trait TransformObserver {
    fn on_transform(&mut self, snapshot: &TransformSnapshot);
}

impl From<ContainerSize> for Size {
    fn from(size: ContainerSize) -> Self {
        Size::new(size.width, size.height)
    }
}

/// What the host should do after an event or tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The transform changed; draw a new frame.
    Redraw,
    /// Leave the viewer.
    GoBack,
}

/// One photo on screen.
pub struct PhotoViewerSession {
    asset: Asset,
    engine: GestureEngine,
    observers: Vec<Box<dyn TransformObserver>>,
    bound: bool,
    loading: bool,
}

impl fmt::Debug for PhotoViewerSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhotoViewerSession")
            .field("asset", &self.asset)
            .field("engine", &self.engine)
            .field("observers", &self.observers.len())
            .field("bound", &self.bound)
            .field("loading", &self.loading)
            .finish()
    }
}

impl PhotoViewerSession {
    #[must_use]
    pub fn new(asset: Asset, tuning: GestureTuning) -> Self {
        log::debug!("viewer bound to asset {}", asset.id);
        Self {
            asset,
            engine: GestureEngine::new(tuning),
            observers: Vec::new(),
            bound: true,
            loading: false,
        }
    }

    /// Registers an observer for transform changes.
    pub fn subscribe(&mut self, observer: Box<dyn TransformObserver>) {
        self.observers.push(observer);
    }

    /// Forwards a recognizer event to the engine.
    pub fn handle(&mut self, event: GestureEvent) -> Effect {
        if !self.bound {
            return Effect::None;
        }
        match self.engine.handle(event) {
            Outcome::Ignored => Effect::None,
            Outcome::Updated => {
                self.notify();
                Effect::Redraw
            }
            Outcome::Dismissed => {
                self.notify();
                log::info!("leaving viewer for asset {}", self.asset.id);
                Effect::GoBack
            }
        }
    }

    /// Advances animations by one frame.
    pub fn tick(&mut self, dt: Duration) -> Effect {
        if !self.bound || !self.engine.tick(dt) {
            return Effect::None;
        }
        self.notify();
        Effect::Redraw
    }

    /// Detaches the session from its gesture source.
    pub fn unbind(&mut self) {
        if self.bound {
            log::debug!("viewer unbound from asset {}", self.asset.id);
        }
        self.bound = false;
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.bound
    }

    #[must_use]
    pub fn asset(&self) -> &Asset {
        &self.asset
    }

    #[must_use]
    pub fn engine(&self) -> &GestureEngine {
        &self.engine
    }

    #[must_use]
    pub fn snapshot(&self) -> TransformSnapshot {
        self.engine.snapshot()
    }

    /// Layout size of the image container on the session's screen.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.asset
            .container_size(self.engine.tuning().screen.width)
            .into()
    }

    // Sync header

    #[must_use]
    pub fn badge(&self) -> Option<SyncBadge> {
        asset::badge(&self.asset, self.loading)
    }

    #[must_use]
    pub fn shows_download(&self) -> bool {
        asset::shows_download(&self.asset)
    }

    #[must_use]
    pub fn upload_action(&self) -> Option<SyncAction> {
        asset::upload_action(&self.asset)
    }

    #[must_use]
    pub fn download_action(&self) -> Option<SyncAction> {
        asset::download_action(&self.asset)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// A sync request was handed to a collaborator.
    pub fn begin_request(&mut self) {
        self.loading = true;
    }

    pub fn finish_request(&mut self) {
        self.loading = false;
    }

    pub fn queue_upload(&mut self) {
        self.asset.queue_upload();
    }

    pub fn cancel_upload(&mut self) {
        self.asset.cancel_upload();
    }

    pub fn upload_finished(&mut self, success: bool) {
        if !success {
            log::warn!("upload of asset {} failed", self.asset.id);
        }
        self.asset.upload_finished(success);
    }

    pub fn downloaded(&mut self, uri: impl Into<String>) {
        self.asset.downloaded(uri);
    }

    fn notify(&mut self) {
        let snapshot = self.engine.snapshot();
        for observer in &mut self.observers {
            observer.on_transform(&snapshot);
        }
    }
}
