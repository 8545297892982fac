// Copyright 2026 the Pergola Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core interaction models for the pergola portfolio page.
//!
//! `pergola_core` holds every piece of page-interaction logic that does not
//! touch the DOM: threshold latches, section selection, reveal policy,
//! playlist arithmetic, and the overlay state machine. It is `no_std`
//! compatible (with `alloc`) so the models run identically in the browser
//! and in host-target unit tests.
//!
//! # Architecture
//!
//! Each page behavior is split into a pure model (this crate) and a DOM
//! component (`pergola_backend_web`) that feeds it browser events and
//! applies its decisions:
//!
//! ```text
//!   Browser event (scroll / intersection / click / keydown)
//!       │
//!       ▼
//!   Model update ──► decision (state transition, source URL, label)
//!       │
//!       ▼
//!   Component applies the decision to the DOM (class, src, text, style)
//! ```
//!
//! **[`config`]** — The page thresholds (nav scroll offset, section
//! activation offset, reveal ratio and margin) as one injected value.
//!
//! **[`nav`]** — [`ScrollStyle`](nav::ScrollStyle), the boolean "scrolled"
//! latch behind the navigation bar's style swap. Reports transitions only.
//!
//! **[`sections`]** — Active-section selection: the last section (document
//! order) whose top edge has crossed the activation offset wins.
//!
//! **[`reveal`]** — [`RevealGate`](reveal::RevealGate), the one-shot
//! fade-in latch. An element is revealed at most once, never re-hidden.
//!
//! **[`playlist`]** — Ordered video source lists with cyclic prev/next
//! navigation and the `"k / n"` counter label.
//!
//! **[`overlay`]** — The shared video overlay's state machine, carrying
//! the mirrored source URL and resume timestamp while open.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod config;
pub mod nav;
pub mod overlay;
pub mod playlist;
pub mod reveal;
pub mod sections;
