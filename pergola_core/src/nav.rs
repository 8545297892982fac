// Copyright 2026 the Pergola Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation-bar scroll styling.
//!
//! [`ScrollStyle`] tracks whether the page has scrolled past the nav
//! threshold. Feeding it the current offset on every scroll event is cheap
//! and idempotent: it reports a value only on the transitions where the
//! nav bar's class actually has to change, so steady scrolling produces no
//! DOM writes.

/// Boolean "scrolled" latch for the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollStyle {
    threshold: f64,
    scrolled: bool,
}

impl ScrollStyle {
    /// Creates the latch in the not-scrolled state.
    ///
    /// This matches the host markup, which ships without the scrolled
    /// class; the first [`observe`](Self::observe) at mount corrects the
    /// state if the page loads mid-scroll.
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    /// Feeds the current vertical scroll offset.
    ///
    /// Returns `Some(new_state)` when the scrolled state flips, `None` when
    /// the offset lands on the same side of the threshold as before. The
    /// comparison is strict: an offset exactly at the threshold is *not*
    /// scrolled.
    pub fn observe(&mut self, offset: f64) -> Option<bool> {
        let next = offset > self.threshold;
        if next == self.scrolled {
            None
        } else {
            self.scrolled = next;
            Some(next)
        }
    }

    /// Returns the current scrolled state.
    #[must_use]
    pub const fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_threshold_boundary() {
        let mut style = ScrollStyle::new(40.0);
        // Exactly at the threshold: still off.
        assert_eq!(style.observe(40.0), None);
        assert!(!style.is_scrolled());
        // One pixel past: on.
        assert_eq!(style.observe(41.0), Some(true));
        assert!(style.is_scrolled());
    }

    #[test]
    fn reports_transitions_only() {
        let mut style = ScrollStyle::new(40.0);
        assert_eq!(style.observe(100.0), Some(true));
        assert_eq!(style.observe(200.0), None);
        assert_eq!(style.observe(55.0), None);
        assert_eq!(style.observe(0.0), Some(false));
        assert_eq!(style.observe(0.0), None);
    }

    #[test]
    fn initial_offset_below_threshold_is_silent() {
        // The markup default (class absent) already matches, so the mount
        // sync must not produce a write.
        let mut style = ScrollStyle::new(40.0);
        assert_eq!(style.observe(0.0), None);
    }
}
