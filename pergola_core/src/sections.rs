// Copyright 2026 the Pergola Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-section selection for the nav highlight.
//!
//! On every scroll tick the highlighter reads each section's client rect
//! and asks [`active_section`] which one is "current": the *last* section
//! in document order whose top edge is at or above the activation offset.
//! Sections are visually stacked top to bottom, so the last qualifying one
//! approximates the section most recently scrolled past. When sections
//! overlap or are non-monotonically positioned this heuristic can
//! mis-highlight; that is the intended behavior, not something to correct
//! here.
//!
//! The computation is a full re-evaluation per tick. There is no memoized
//! diffing: the handler reads fresh geometry from the DOM each time it
//! runs, so there is no stale state to reconcile.

use kurbo::Rect;

/// Selects the current section from `(id, client rect)` pairs in document
/// order.
///
/// Returns the id of the last section whose rect top is `<=`
/// `activation_offset` (viewport-relative px), or `None` when no section
/// qualifies. At most one section is ever current.
pub fn active_section<S, I>(sections: I, activation_offset: f64) -> Option<S>
where
    I: IntoIterator<Item = (S, Rect)>,
{
    let mut current = None;
    for (id, rect) in sections {
        if rect.y0 <= activation_offset {
            current = Some(id);
        }
    }
    current
}

/// Returns `true` when a nav link's `href` targets the current section.
///
/// Links address sections by fragment (`#id`). With no current section no
/// link matches, so every link loses its highlight.
#[must_use]
pub fn is_active_href(href: &str, current: Option<&str>) -> bool {
    match current {
        Some(id) => href.strip_prefix('#') == Some(id),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn section(top: f64) -> Rect {
        Rect::new(0.0, top, 800.0, top + 600.0)
    }

    #[test]
    fn last_qualifying_section_wins() {
        // S1 has scrolled past (top = -50), S2 has not reached the
        // activation offset yet (top = 200): S1 is current.
        let sections = vec![("s1", section(-50.0)), ("s2", section(200.0))];
        assert_eq!(active_section(sections, 120.0), Some("s1"));
    }

    #[test]
    fn later_section_shadows_earlier_ones() {
        let sections = vec![
            ("about", section(-400.0)),
            ("work", section(-10.0)),
            ("contact", section(90.0)),
        ];
        // All three qualify; the last in document order wins.
        assert_eq!(active_section(sections, 120.0), Some("contact"));
    }

    #[test]
    fn no_section_qualifies() {
        let sections = vec![("s1", section(121.0)), ("s2", section(900.0))];
        assert_eq!(active_section(sections, 120.0), None);
    }

    #[test]
    fn boundary_is_inclusive() {
        let sections = vec![("s1", section(120.0))];
        assert_eq!(active_section(sections, 120.0), Some("s1"));
    }

    #[test]
    fn href_matches_fragment_only() {
        assert!(is_active_href("#work", Some("work")));
        assert!(!is_active_href("#work", Some("about")));
        assert!(!is_active_href("work", Some("work")));
        assert!(!is_active_href("#work", None));
    }
}
