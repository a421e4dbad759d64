// SPDX-License-Identifier: MPL-2.0
//! Gesture script replay.
//!
//! A script is a TOML file describing a screen, an asset and a sequence of
//! recognizer events:
//!
//! ```toml
//! [screen]
//! width = 400
//! height = 800
//!
//! [asset]
//! id = "beach"
//! width = 4000
//! height = 3000
//!
//! [[events]]
//! kind = "pan-start"
//!
//! [[events]]
//! kind = "pan-move"
//! dx = 0
//! dy = 300
//!
//! [[events]]
//! kind = "pan-end"
//! velocity_y = 2500
//! ```
//!
//! [`run`] feeds the events through a [`PhotoViewerSession`] and records one
//! [`Frame`] per event. Replay stops at the event that leaves the viewer.

use crate::domain::asset::Asset;
use crate::error::{Error, Result};
use crate::ui::state::{GestureTuning, TransformSnapshot};
use crate::ui::viewer::{Effect, GestureEvent, PhotoViewerSession};
use iced_core::Size;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// A parsed gesture script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GestureScript {
    #[serde(default)]
    pub screen: Option<ScreenSpec>,
    #[serde(default)]
    pub asset: Option<AssetSpec>,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

/// Logical screen size override.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ScreenSpec {
    pub width: f32,
    pub height: f32,
}

/// The asset shown while replaying.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssetSpec {
    #[serde(default = "default_asset_id")]
    pub id: String,
    #[serde(default)]
    pub uri: String,
    pub width: u32,
    pub height: u32,
}

fn default_asset_id() -> String {
    "script".to_string()
}

/// One line of a script.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ScriptEvent {
    PanStart,
    PanMove { dx: f32, dy: f32 },
    PanEnd { velocity_y: f32 },
    PinchStart,
    PinchMove { scale: f32 },
    PinchEnd { scale: f32 },
    PinchFinish { scale: f32 },
    DoubleTap,
    /// Advance animations by `ms` milliseconds.
    Tick { ms: u64 },
}

impl ScriptEvent {
    /// The recognizer event, or `None` for clock ticks.
    #[must_use]
    pub fn gesture(self) -> Option<GestureEvent> {
        let event = match self {
            ScriptEvent::PanStart => GestureEvent::PanStart,
            ScriptEvent::PanMove { dx, dy } => GestureEvent::PanMove { dx, dy },
            ScriptEvent::PanEnd { velocity_y } => GestureEvent::PanEnd { velocity_y },
            ScriptEvent::PinchStart => GestureEvent::PinchStart,
            ScriptEvent::PinchMove { scale } => GestureEvent::PinchMove { scale },
            ScriptEvent::PinchEnd { scale } => GestureEvent::PinchEnd { scale },
            ScriptEvent::PinchFinish { scale } => GestureEvent::PinchFinish { scale },
            ScriptEvent::DoubleTap => GestureEvent::DoubleTap,
            ScriptEvent::Tick { .. } => return None,
        };
        Some(event)
    }
}

impl fmt::Display for ScriptEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptEvent::PanStart => write!(f, "pan-start"),
            ScriptEvent::PanMove { dx, dy } => write!(f, "pan-move({dx}, {dy})"),
            ScriptEvent::PanEnd { velocity_y } => write!(f, "pan-end({velocity_y})"),
            ScriptEvent::PinchStart => write!(f, "pinch-start"),
            ScriptEvent::PinchMove { scale } => write!(f, "pinch-move({scale})"),
            ScriptEvent::PinchEnd { scale } => write!(f, "pinch-end({scale})"),
            ScriptEvent::PinchFinish { scale } => write!(f, "pinch-finish({scale})"),
            ScriptEvent::DoubleTap => write!(f, "double-tap"),
            ScriptEvent::Tick { ms } => write!(f, "tick({ms}ms)"),
        }
    }
}

impl GestureScript {
    /// Parses and validates a script.
    pub fn parse(source: &str) -> Result<Self> {
        let script: Self =
            toml::from_str(source).map_err(|err| Error::Script(err.to_string()))?;
        script.validate()?;
        Ok(script)
    }

    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::parse(&source)
    }

    fn validate(&self) -> Result<()> {
        if let Some(screen) = self.screen {
            if !(screen.width >= 1.0 && screen.height >= 1.0) {
                return Err(Error::Script(format!(
                    "screen must be at least 1x1, got {}x{}",
                    screen.width, screen.height
                )));
            }
        }

        for (index, event) in self.events.iter().enumerate() {
            let finite = match *event {
                ScriptEvent::PanMove { dx, dy } => dx.is_finite() && dy.is_finite(),
                ScriptEvent::PanEnd { velocity_y } => velocity_y.is_finite(),
                ScriptEvent::PinchMove { scale }
                | ScriptEvent::PinchEnd { scale }
                | ScriptEvent::PinchFinish { scale } => scale.is_finite(),
                _ => true,
            };
            if !finite {
                return Err(Error::Script(format!(
                    "event {index} ({event}) has a non-finite value"
                )));
            }
        }
        Ok(())
    }

    /// Applies the script's screen to `base`.
    #[must_use]
    pub fn tuning(&self, base: GestureTuning) -> GestureTuning {
        match self.screen {
            Some(screen) => base.with_screen(Size::new(screen.width, screen.height)),
            None => base,
        }
    }

    /// The asset to show, or a screen-filling square placeholder.
    #[must_use]
    pub fn asset(&self) -> Asset {
        match &self.asset {
            Some(spec) => Asset::new(spec.id.clone(), spec.uri.clone(), spec.width, spec.height),
            None => Asset::new(default_asset_id(), "", 1, 1),
        }
    }
}

/// State after one replayed event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub index: usize,
    pub event: ScriptEvent,
    pub effect: Effect,
    pub snapshot: TransformSnapshot,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.snapshot;
        write!(
            f,
            "{:>4} {:<22} x={:>8.2} y={:>8.2} scale={:.3} opacity={:.3} container={:.3}",
            self.index,
            self.event.to_string(),
            s.translation.x,
            s.translation.y,
            s.scale,
            s.opacity,
            s.container_scale,
        )?;
        if s.pan_active {
            write!(f, " [pan]")?;
        }
        if s.pinch_active {
            write!(f, " [pinch]")?;
        }
        if self.effect == Effect::GoBack {
            write!(f, " -> go back")?;
        }
        Ok(())
    }
}

/// Result of a replay.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayReport {
    pub frames: Vec<Frame>,
    /// Index of the event that left the viewer.
    pub dismissed_at: Option<usize>,
}

impl ReplayReport {
    #[must_use]
    pub fn final_snapshot(&self) -> Option<&TransformSnapshot> {
        self.frames.last().map(|frame| &frame.snapshot)
    }
}

impl fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frame in &self.frames {
            writeln!(f, "{frame}")?;
        }
        match self.dismissed_at {
            Some(index) => write!(f, "dismissed at event {index}"),
            None => write!(f, "viewer still open after {} events", self.frames.len()),
        }
    }
}

/// Replays `script` through a fresh session.
#[must_use]
pub fn run(script: &GestureScript, tuning: GestureTuning) -> ReplayReport {
    let mut session = PhotoViewerSession::new(script.asset(), tuning);
    let mut frames = Vec::with_capacity(script.events.len());
    let mut dismissed_at = None;

    for (index, &event) in script.events.iter().enumerate() {
        let effect = match event {
            ScriptEvent::Tick { ms } => session.tick(Duration::from_millis(ms)),
            other => match other.gesture() {
                Some(gesture) => session.handle(gesture),
                None => Effect::None,
            },
        };

        frames.push(Frame {
            index,
            event,
            effect,
            snapshot: session.snapshot(),
        });

        if effect == Effect::GoBack {
            dismissed_at = Some(index);
            session.unbind();
            break;
        }
    }

    log::debug!(
        "replayed {} of {} events",
        frames.len(),
        script.events.len()
    );
    ReplayReport {
        frames,
        dismissed_at,
    }
}
