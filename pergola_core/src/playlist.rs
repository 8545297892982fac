// Copyright 2026 the Pergola Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Video playlists for the prev/next switcher widgets.
//!
//! Each switcher widget carries its source list as a JSON-encoded array of
//! URL strings in a data attribute. [`Playlist`] owns the decoded list and
//! the current index; navigation wraps cyclically in both directions via
//! Euclidean modulo, so no target index is ever out of bounds. The list
//! length is fixed at construction.
//!
//! A malformed or missing payload degrades to the empty playlist:
//! navigation becomes a no-op and the counter reads `1 / 0`. The widget is
//! visually degenerate but never faults.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// An ordered list of video source URLs with a current position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Playlist {
    sources: Vec<String>,
    current: usize,
}

impl Playlist {
    /// Creates a playlist positioned on its first entry.
    #[must_use]
    pub const fn new(sources: Vec<String>) -> Self {
        Self {
            sources,
            current: 0,
        }
    }

    /// Decodes a playlist from a JSON array of URL strings.
    ///
    /// Callers are expected to fall back to `Playlist::default()` on error
    /// (see the widget wiring), keeping the decode failure observable in
    /// the logs without disabling the widget.
    pub fn from_json(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Vec<String>>(payload).map(Self::new)
    }

    /// Number of sources in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns `true` when the list holds no sources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// The current zero-based position.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// The source URL at the current position, if any.
    #[must_use]
    pub fn current_source(&self) -> Option<&str> {
        self.sources.get(self.current).map(String::as_str)
    }

    /// Moves to `target`, wrapping modulo the list length in both
    /// directions, and returns the source at the new position.
    ///
    /// On an empty playlist this is a no-op returning `None`.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        reason = "playlists hold a handful of entries; lengths fit in i64"
    )]
    pub fn go(&mut self, target: i64) -> Option<&str> {
        if self.sources.is_empty() {
            return None;
        }
        self.current = target.rem_euclid(self.sources.len() as i64) as usize;
        self.current_source()
    }

    /// Moves `delta` entries relative to the current position. The prev
    /// control passes `-1`, the next control `+1`; either wraps.
    #[expect(
        clippy::cast_possible_wrap,
        reason = "playlists hold a handful of entries; indices fit in i64"
    )]
    pub fn step(&mut self, delta: i64) -> Option<&str> {
        self.go(self.current as i64 + delta)
    }

    /// The 1-based counter text, `"<current + 1> / <len>"`.
    ///
    /// The empty playlist reads `"1 / 0"`, matching the widget's initial
    /// display before any navigation.
    #[must_use]
    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.current + 1, self.sources.len())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString as _;
    use alloc::vec;

    use super::*;

    fn three() -> Playlist {
        Playlist::new(vec![
            "a.mp4".to_string(),
            "b.mp4".to_string(),
            "c.mp4".to_string(),
        ])
    }

    #[test]
    fn wraps_backward_from_start() {
        let mut list = three();
        assert_eq!(list.step(-1), Some("c.mp4"));
        assert_eq!(list.current(), 2);
    }

    #[test]
    fn wraps_forward_from_end() {
        let mut list = three();
        list.go(2);
        assert_eq!(list.step(1), Some("a.mp4"));
        assert_eq!(list.current(), 0);
    }

    #[test]
    fn counter_tracks_position() {
        let mut list = three();
        assert_eq!(list.counter_label(), "1 / 3");
        list.go(1);
        assert_eq!(list.counter_label(), "2 / 3");
        list.step(-1);
        assert_eq!(list.counter_label(), "1 / 3");
    }

    #[test]
    fn far_targets_reduce_modulo_length() {
        let mut list = three();
        assert_eq!(list.go(7), Some("b.mp4"));
        assert_eq!(list.go(-4), Some("c.mp4"));
    }

    #[test]
    fn decodes_json_array() {
        let list = Playlist::from_json(r#"["x.mp4", "y.mp4"]"#).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.current_source(), Some("x.mp4"));
    }

    #[test]
    fn malformed_payload_is_an_error() {
        assert!(Playlist::from_json("not json").is_err());
        assert!(Playlist::from_json(r#"{"a": 1}"#).is_err());
    }

    #[test]
    fn empty_playlist_navigation_is_inert() {
        let mut list = Playlist::default();
        assert_eq!(list.step(1), None);
        assert_eq!(list.step(-1), None);
        assert_eq!(list.go(5), None);
        assert_eq!(list.current(), 0);
        assert_eq!(list.counter_label(), "1 / 0");
    }
}
