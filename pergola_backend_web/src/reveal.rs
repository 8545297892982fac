// Copyright 2026 the Pergola Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-triggered one-shot fade-in reveals.
//!
//! Every element carrying the `fade-in` class is observed; on its first
//! intersection with the (margin-shrunk) viewport it gains the `visible`
//! class and is unobserved for good. The per-element [`RevealGate`] and
//! the unobserve call together implement the dispose-after-first-
//! notification policy: no element is revealed twice, none is re-hidden.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use pergola_core::config::PageConfig;
use pergola_core::reveal::RevealGate;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::geom;
use crate::observer::VisibilityObserver;

const FADE_SELECTOR: &str = ".fade-in";
const VISIBLE_CLASS: &str = "visible";

/// Owns the fade-in observation for the whole page.
#[derive(Debug)]
pub struct Revealer {
    _observer: VisibilityObserver,
}

impl Revealer {
    /// Observes every `fade-in` element in `document`.
    pub fn install(document: &Document, config: &PageConfig) -> Result<Self, JsValue> {
        let gates: Rc<RefCell<Vec<(Element, RevealGate)>>> = Rc::new(RefCell::new(Vec::new()));

        let callback_gates = Rc::clone(&gates);
        let observer = VisibilityObserver::new(
            config.reveal_ratio,
            &geom::bottom_inset_margin(config.reveal_bottom_margin),
            move |entry, observer| {
                let target = entry.target();
                for (el, gate) in callback_gates.borrow_mut().iter_mut() {
                    if *el != target {
                        continue;
                    }
                    if gate.notify(entry.is_intersecting()) {
                        let _ = target.class_list().add_1(VISIBLE_CLASS);
                        observer.unobserve(&target);
                    }
                    break;
                }
            },
        )?;

        let marked = document.query_selector_all(FADE_SELECTOR)?;
        for i in 0..marked.length() {
            let Some(node) = marked.item(i) else { continue };
            let Ok(el) = node.dyn_into::<Element>() else {
                continue;
            };
            observer.observe(&el);
            gates.borrow_mut().push((el, RevealGate::new()));
        }

        Ok(Self {
            _observer: observer,
        })
    }
}
