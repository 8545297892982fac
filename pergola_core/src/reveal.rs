// Copyright 2026 the Pergola Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot fade-in reveal policy.
//!
//! Each element opting into the scroll-in animation gets a [`RevealGate`].
//! The gate fires exactly once, on the first notification where the
//! element intersects the (margin-shrunk) viewport; after that it stays
//! latched and the caller is expected to stop observing the element
//! entirely. Elements are never re-hidden on scroll-away.
//!
//! Per-element state machine:
//!
//! ```text
//!   pending ──(intersecting notification)──► revealed, unobserved
//! ```
//!
//! No other transition exists.

/// One-shot latch deciding when an element's reveal animation runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealGate {
    revealed: bool,
}

impl RevealGate {
    /// Creates a gate in the pending state.
    #[must_use]
    pub const fn new() -> Self {
        Self { revealed: false }
    }

    /// Feeds one visibility notification.
    ///
    /// Returns `true` exactly once: on the first call with
    /// `intersecting = true`. Callers should dispose of their observation
    /// of the element as soon as this fires — the gate never re-arms.
    pub fn notify(&mut self, intersecting: bool) -> bool {
        if intersecting && !self.revealed {
            self.revealed = true;
            true
        } else {
            false
        }
    }

    /// Returns `true` once the reveal has fired.
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_on_first_intersection() {
        let mut gate = RevealGate::new();
        assert!(!gate.notify(false));
        assert!(gate.notify(true));
        assert!(gate.is_revealed());
    }

    #[test]
    fn never_fires_again() {
        // Re-entering and leaving the viewport any number of times after
        // the first reveal must not produce further transitions.
        let mut gate = RevealGate::new();
        assert!(gate.notify(true));
        for intersecting in [false, true, true, false, true] {
            assert!(!gate.notify(intersecting));
        }
        assert!(gate.is_revealed());
    }

    #[test]
    fn stays_pending_while_out_of_view() {
        let mut gate = RevealGate::new();
        for _ in 0..3 {
            assert!(!gate.notify(false));
        }
        assert!(!gate.is_revealed());
    }
}
