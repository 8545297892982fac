// Copyright 2026 the Pergola Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation-bar scroll styling.
//!
//! Mirrors [`ScrollStyle`] transitions onto the nav element as presence
//! of the `scrolled` class. The handler runs once at install (so a page
//! loaded mid-scroll styles correctly) and then on every scroll event,
//! registered passive.

use pergola_core::config::PageConfig;
use pergola_core::nav::ScrollStyle;
use wasm_bindgen::JsValue;
use web_sys::{HtmlElement, Window};

use crate::listener::EventSubscription;

const SCROLLED_CLASS: &str = "scrolled";

/// Keeps the nav element's scrolled style in sync with the scroll offset.
#[derive(Debug)]
pub struct NavBar {
    _scroll: EventSubscription,
}

impl NavBar {
    /// Wires the nav element to the window's scroll events.
    pub fn install(
        window: &Window,
        nav: HtmlElement,
        config: &PageConfig,
    ) -> Result<Self, JsValue> {
        let mut style = ScrollStyle::new(config.nav_threshold);

        let mut sync = {
            let window = window.clone();
            move || {
                let offset = window.scroll_y().unwrap_or(0.0);
                if let Some(scrolled) = style.observe(offset) {
                    let classes = nav.class_list();
                    let _ = if scrolled {
                        classes.add_1(SCROLLED_CLASS)
                    } else {
                        classes.remove_1(SCROLLED_CLASS)
                    };
                }
            }
        };

        sync();
        let scroll = EventSubscription::passive(window, "scroll", move |_event| sync())?;
        Ok(Self { _scroll: scroll })
    }
}
