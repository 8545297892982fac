// Copyright 2026 the Pergola Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser glue for pergola.
//!
//! This crate binds the models in [`pergola_core`] to the portfolio page's
//! DOM through `wasm-bindgen`/`web-sys`:
//!
//! - [`EventSubscription`]: an owned event-listener registration that
//!   deregisters itself when dropped
//! - [`VisibilityObserver`]: an `IntersectionObserver` wrapper with owned
//!   callback storage
//! - One component per page behavior ([`NavBar`], [`SectionHighlighter`],
//!   [`Revealer`], [`VideoSwitcher`], [`VideoOverlay`]), each constructed
//!   with its DOM dependencies injected
//! - [`Page`]: mounts every component against a document, wiring each one
//!   independently so a missing hook disables only that behavior
//!
//! All components assume the host markup contract of the portfolio page
//! (element ids, structural class names, the `data-videos` attribute);
//! the markup itself is outside this crate's responsibility.

#![no_std]

extern crate alloc;

mod geom;
mod highlight;
mod listener;
mod nav;
mod observer;
mod overlay;
mod page;
mod reveal;
mod switcher;

pub use highlight::SectionHighlighter;
pub use listener::EventSubscription;
pub use nav::NavBar;
pub use observer::VisibilityObserver;
pub use overlay::VideoOverlay;
pub use page::Page;
pub use pergola_core::config::PageConfig;
pub use reveal::Revealer;
pub use switcher::VideoSwitcher;
