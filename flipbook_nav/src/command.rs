// Copyright 2025 the Flipbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use flipbook_pagination::SpreadLabel;
use flipbook_timing::FrameToken;

/// Work the host must perform on behalf of the [`Navigator`](crate::Navigator).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Fetch the payload for this spread and report it with
    /// [`Navigator::fetch_resolved`](crate::Navigator::fetch_resolved).
    Fetch(SpreadLabel),
    /// Navigate to this location.
    Push(String),
    /// Call [`Navigator::frame`](crate::Navigator::frame) with this token on
    /// the next animation frame.
    RequestFrame(FrameToken),
    /// Drop the pending callback for this token.
    CancelFrame(FrameToken),
}

/// Why a spread fetch failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The query surface does not know the label.
    #[error("spread {0:?} not found")]
    NotFound(String),
    /// The request did not complete.
    #[error("spread request failed: {0}")]
    Transport(String),
    /// The response was not a spread payload.
    #[error("malformed spread payload: {0}")]
    Decode(String),
}

impl From<flipbook_spread::SpreadError> for FetchError {
    fn from(err: flipbook_spread::SpreadError) -> Self {
        match err {
            flipbook_spread::SpreadError::NotFound(label) => Self::NotFound(label),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Keyboard input the navigator reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Previous spread.
    ArrowLeft,
    /// Next spread.
    ArrowRight,
    /// Reset zoom.
    Escape,
}

/// On-screen navigation controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavButton {
    /// Jump to the cover.
    First,
    /// Turn back.
    Prev,
    /// Turn forward.
    Next,
    /// Jump to the final spread.
    Last,
    /// Zoom in one step.
    ZoomIn,
    /// Zoom out one step.
    ZoomOut,
}
