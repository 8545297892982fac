// Copyright 2026 the Pergola Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whole-page wiring.
//!
//! [`Page::mount`] constructs every component against a document. Each
//! behavior is wired independently: a missing hook (say, a page variant
//! without the overlay) logs a warning and disables that behavior only,
//! leaving the rest of the page interactive.

use alloc::format;
use alloc::vec::Vec;

use log::warn;
use pergola_core::config::PageConfig;
use wasm_bindgen::JsCast as _;
use web_sys::{Document, HtmlElement};

use crate::highlight::SectionHighlighter;
use crate::nav::NavBar;
use crate::overlay::VideoOverlay;
use crate::reveal::Revealer;
use crate::switcher::VideoSwitcher;

const YEAR_ID: &str = "year";
const NAV_ID: &str = "nav";

/// Every mounted component of the portfolio page.
///
/// Keep the value alive for the lifetime of the page; dropping it tears
/// down every subscription and observer. Page entry points typically
/// `core::mem::forget` it instead.
#[derive(Debug)]
pub struct Page {
    _nav: Option<NavBar>,
    _highlight: Option<SectionHighlighter>,
    _revealer: Option<Revealer>,
    switchers: Vec<VideoSwitcher>,
    _overlay: Option<VideoOverlay>,
}

impl Page {
    /// Mounts all page behaviors on `document`.
    ///
    /// Never fails as a whole: individual component failures are logged
    /// and leave that component unmounted.
    #[must_use]
    pub fn mount(document: &Document, config: PageConfig) -> Self {
        let window = web_sys::window().expect("window");

        set_footer_year(document);

        let nav = match document
            .get_element_by_id(NAV_ID)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            Some(el) => match NavBar::install(&window, el, &config) {
                Ok(nav) => Some(nav),
                Err(err) => {
                    warn!("nav scroll styling disabled: {err:?}");
                    None
                }
            },
            None => {
                warn!("nav element missing; scroll styling disabled");
                None
            }
        };

        let highlight = match SectionHighlighter::install(&window, document, &config) {
            Ok(highlight) => Some(highlight),
            Err(err) => {
                warn!("section highlighting disabled: {err:?}");
                None
            }
        };

        let revealer = match Revealer::install(document, &config) {
            Ok(revealer) => Some(revealer),
            Err(err) => {
                warn!("fade-in reveals disabled: {err:?}");
                None
            }
        };

        let switchers = match VideoSwitcher::install_all(document) {
            Ok(switchers) => switchers,
            Err(err) => {
                warn!("video switchers disabled: {err:?}");
                Vec::new()
            }
        };

        let overlay = match VideoOverlay::install(document) {
            Ok(overlay) => Some(overlay),
            Err(err) => {
                warn!("video overlay disabled: {err:?}");
                None
            }
        };

        Self {
            _nav: nav,
            _highlight: highlight,
            _revealer: revealer,
            switchers,
            _overlay: overlay,
        }
    }

    /// Number of switcher widgets that mounted.
    #[must_use]
    pub fn switcher_count(&self) -> usize {
        self.switchers.len()
    }
}

/// Writes the current calendar year into the footer placeholder.
fn set_footer_year(document: &Document) {
    match document.get_element_by_id(YEAR_ID) {
        Some(el) => {
            let year = js_sys::Date::new_0().get_full_year();
            el.set_text_content(Some(&format!("{year}")));
        }
        None => warn!("footer year placeholder missing"),
    }
}
