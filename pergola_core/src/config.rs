// Copyright 2026 the Pergola Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page-level configuration.
//!
//! All thresholds that tune the page behaviors live in one [`PageConfig`]
//! value, constructed once at mount and passed to each component. The
//! numbers are in CSS pixels (offsets) or area fractions (reveal ratio).

/// Thresholds for the portfolio page behaviors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageConfig {
    /// Vertical scroll offset (px) beyond which the nav bar takes its
    /// "scrolled" style. Strictly greater-than: an offset equal to the
    /// threshold leaves the style off.
    pub nav_threshold: f64,
    /// A section is eligible to be "current" once its top edge is at or
    /// above this viewport offset (px).
    pub section_offset: f64,
    /// Fraction of an element's area that must be visible before its
    /// one-shot reveal fires.
    pub reveal_ratio: f64,
    /// How far (px) the effective viewport bottom is pulled up when judging
    /// reveal visibility, so the trigger fires slightly before the element
    /// reaches the true viewport edge.
    pub reveal_bottom_margin: f64,
}

impl PageConfig {
    /// The portfolio page defaults.
    #[must_use]
    pub const fn portfolio() -> Self {
        Self {
            nav_threshold: 40.0,
            section_offset: 120.0,
            reveal_ratio: 0.12,
            reveal_bottom_margin: 40.0,
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::portfolio()
    }
}
