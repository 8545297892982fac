// Copyright 2026 the Pergola Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-section nav highlighting.
//!
//! On every scroll event (and once at install) the highlighter reads each
//! section's client rect, asks [`sections::active_section`] which one is
//! current, clears the `active` class from every nav link, and sets it on
//! the link whose `href` targets the current section. Full recomputation
//! per tick; the DOM is the source of truth for geometry.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use pergola_core::config::PageConfig;
use pergola_core::sections;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Window};

use crate::geom;
use crate::listener::EventSubscription;

const SECTION_SELECTOR: &str = "section[id]";
const LINK_SELECTOR: &str = ".nav__links a";
const ACTIVE_CLASS: &str = "active";

/// Mirrors the current section onto the nav links' `active` class.
#[derive(Debug)]
pub struct SectionHighlighter {
    _scroll: EventSubscription,
}

struct HighlightDom {
    /// `(id, element)` pairs in document order.
    sections: Vec<(String, Element)>,
    links: Vec<Element>,
    activation_offset: f64,
}

impl HighlightDom {
    fn sync(&self) {
        let current = sections::active_section(
            self.sections
                .iter()
                .map(|(id, el)| (id.as_str(), geom::client_rect(el))),
            self.activation_offset,
        );

        for link in &self.links {
            let classes = link.class_list();
            let _ = classes.remove_1(ACTIVE_CLASS);
            if let Some(href) = link.get_attribute("href")
                && sections::is_active_href(&href, current)
            {
                let _ = classes.add_1(ACTIVE_CLASS);
            }
        }
    }
}

impl SectionHighlighter {
    /// Collects the page's sections and nav links and wires the highlight
    /// to the window's scroll events.
    pub fn install(
        window: &Window,
        document: &Document,
        config: &PageConfig,
    ) -> Result<Self, JsValue> {
        let mut section_list = Vec::new();
        let nodes = document.query_selector_all(SECTION_SELECTOR)?;
        for i in 0..nodes.length() {
            let Some(node) = nodes.item(i) else { continue };
            let Ok(el) = node.dyn_into::<Element>() else {
                continue;
            };
            section_list.push((el.id(), el));
        }

        let mut links = Vec::new();
        let nodes = document.query_selector_all(LINK_SELECTOR)?;
        for i in 0..nodes.length() {
            let Some(node) = nodes.item(i) else { continue };
            if let Ok(el) = node.dyn_into::<Element>() {
                links.push(el);
            }
        }

        let dom = Rc::new(HighlightDom {
            sections: section_list,
            links,
            activation_offset: config.section_offset,
        });

        dom.sync();
        let scroll = EventSubscription::passive(window, "scroll", move |_event| dom.sync())?;
        Ok(Self { _scroll: scroll })
    }
}
