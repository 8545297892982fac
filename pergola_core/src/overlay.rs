// Copyright 2026 the Pergola Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State machine for the shared video overlay.
//!
//! One overlay instance serves every portrait card on the page. While
//! open it carries the mirrored source URL and the playback timestamp
//! captured from the card, so the enlarged view resumes where the card
//! left off. Closing clears both, releasing the overlay's claim on the
//! media resource.

use alloc::string::String;

/// The overlay's lifecycle state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum OverlayState {
    /// No overlay is shown; the overlay video element holds no source.
    #[default]
    Closed,
    /// The overlay mirrors a card's video.
    Open {
        /// Media source URL copied from the card's `<source>`.
        source: String,
        /// Playback position (seconds) captured from the card at open.
        resume_at: f64,
    },
}

/// Owns the overlay's [`OverlayState`] and enforces its transitions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlayModel {
    state: OverlayState,
}

impl OverlayModel {
    /// Creates a closed overlay.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: OverlayState::Closed,
        }
    }

    /// Opens the overlay on `source`, resuming playback at `resume_at`
    /// seconds. Opening over an already-open overlay replaces its state.
    pub fn open(&mut self, source: String, resume_at: f64) {
        self.state = OverlayState::Open { source, resume_at };
    }

    /// Closes the overlay, clearing the mirrored source.
    ///
    /// Returns `true` when the overlay was open, `false` for a redundant
    /// close (e.g. Escape pressed while nothing is shown) — callers skip
    /// the DOM teardown in that case.
    pub fn close(&mut self) -> bool {
        match self.state {
            OverlayState::Closed => false,
            OverlayState::Open { .. } => {
                self.state = OverlayState::Closed;
                true
            }
        }
    }

    /// Returns `true` while the overlay is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, OverlayState::Open { .. })
    }

    /// The mirrored source URL, while open.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        match &self.state {
            OverlayState::Open { source, .. } => Some(source),
            OverlayState::Closed => None,
        }
    }

    /// The captured playback position, while open.
    #[must_use]
    pub fn resume_at(&self) -> Option<f64> {
        match self.state {
            OverlayState::Open { resume_at, .. } => Some(resume_at),
            OverlayState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString as _;

    use super::*;

    #[test]
    fn open_captures_source_and_timestamp() {
        let mut overlay = OverlayModel::new();
        overlay.open("clip.mp4".to_string(), 12.5);
        assert!(overlay.is_open());
        assert_eq!(overlay.source(), Some("clip.mp4"));
        assert_eq!(overlay.resume_at(), Some(12.5));
    }

    #[test]
    fn close_clears_state() {
        let mut overlay = OverlayModel::new();
        overlay.open("clip.mp4".to_string(), 3.0);
        assert!(overlay.close());
        assert!(!overlay.is_open());
        assert_eq!(overlay.source(), None);
        assert_eq!(overlay.resume_at(), None);
    }

    #[test]
    fn redundant_close_is_a_no_op() {
        let mut overlay = OverlayModel::new();
        assert!(!overlay.close());
        overlay.open("clip.mp4".to_string(), 0.0);
        assert!(overlay.close());
        assert!(!overlay.close());
    }

    #[test]
    fn reopening_replaces_the_mirrored_card() {
        let mut overlay = OverlayModel::new();
        overlay.open("first.mp4".to_string(), 1.0);
        overlay.open("second.mp4".to_string(), 8.25);
        assert_eq!(overlay.source(), Some("second.mp4"));
        assert_eq!(overlay.resume_at(), Some(8.25));
    }
}
