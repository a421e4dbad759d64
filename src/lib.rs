// SPDX-License-Identifier: MPL-2.0
//! `photo_lens` is the gesture core of a full-screen photo viewer.
//!
//! It turns pan, pinch and double-tap events into a photo transform
//! (translation, scale, opacity) and decides when the viewer is dismissed.
//! A small binary replays TOML gesture scripts through the engine.

#![doc(html_root_url = "https://docs.rs/photo_lens/0.1.0")]

pub mod config;
pub mod domain;
pub mod error;
pub mod replay;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
