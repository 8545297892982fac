// Copyright 2026 the Pergola Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared full-screen video overlay.
//!
//! One overlay serves every portrait project card. An expand control
//! mirrors its card's video into the overlay — same source, same playback
//! position — pauses the card, suppresses page scrolling, and starts
//! overlay playback. Closing (close control, backdrop click, or Escape
//! anywhere in the document) reverses all of it and clears the overlay
//! source so the media resource is released.
//!
//! Card internals (the embedded `<video>` and its `<source>`) are part of
//! the host markup contract and are not guarded; a malformed card faults
//! its own expand control only.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use pergola_core::overlay::OverlayModel;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement, HtmlSourceElement, HtmlVideoElement, KeyboardEvent};

use crate::listener::EventSubscription;

const OVERLAY_ID: &str = "videoOverlay";
const OVERLAY_VIDEO_ID: &str = "overlayVideo";
const CLOSE_ID: &str = "overlayClose";
const BACKDROP_SELECTOR: &str = ".video-overlay__backdrop";
const EXPAND_SELECTOR: &str = ".expand-btn";
const CARD_SELECTOR: &str = ".project-card__media--portrait";
const ACTIVE_CLASS: &str = "active";

/// The mounted overlay and every subscription that can drive it.
#[derive(Debug)]
pub struct VideoOverlay {
    _close: EventSubscription,
    _backdrop: EventSubscription,
    _escape: EventSubscription,
    _expands: Vec<EventSubscription>,
}

struct OverlayDom {
    model: OverlayModel,
    container: HtmlElement,
    video: HtmlVideoElement,
    body: HtmlElement,
}

impl OverlayDom {
    /// Mirrors `card_video` into the overlay and shows it.
    fn open_from(&mut self, card_video: &HtmlVideoElement, source: String) {
        let resume_at = card_video.current_time();
        let _ = card_video.pause();

        self.model.open(source, resume_at);
        if let Some(source) = self.model.source() {
            self.video.set_src(source);
        }
        self.video.set_current_time(resume_at);
        let _ = self.container.class_list().add_1(ACTIVE_CLASS);
        let _ = self.body.style().set_property("overflow", "hidden");
        let _ = self.video.play();
    }

    /// Hides the overlay and releases its media source.
    ///
    /// A close with nothing open (Escape pressed on the idle page) is a
    /// no-op.
    fn close(&mut self) {
        if !self.model.close() {
            return;
        }
        let _ = self.container.class_list().remove_1(ACTIVE_CLASS);
        let _ = self.video.pause();
        self.video.set_src("");
        let _ = self.body.style().remove_property("overflow");
    }
}

impl VideoOverlay {
    /// Locates the overlay structure and wires every expand control.
    pub fn install(document: &Document) -> Result<Self, JsValue> {
        let container: HtmlElement = document
            .get_element_by_id(OVERLAY_ID)
            .ok_or_else(|| JsValue::from_str("overlay container missing"))?
            .dyn_into()?;
        let video: HtmlVideoElement = document
            .get_element_by_id(OVERLAY_VIDEO_ID)
            .ok_or_else(|| JsValue::from_str("overlay video missing"))?
            .dyn_into()?;
        let close_control = document
            .get_element_by_id(CLOSE_ID)
            .ok_or_else(|| JsValue::from_str("overlay close control missing"))?;
        let backdrop = container
            .query_selector(BACKDROP_SELECTOR)?
            .ok_or_else(|| JsValue::from_str("overlay backdrop missing"))?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;

        let dom = Rc::new(RefCell::new(OverlayDom {
            model: OverlayModel::new(),
            container,
            video,
            body,
        }));

        let close = {
            let dom = Rc::clone(&dom);
            EventSubscription::new(&close_control, "click", move |_event| {
                dom.borrow_mut().close();
            })?
        };
        let backdrop = {
            let dom = Rc::clone(&dom);
            EventSubscription::new(&backdrop, "click", move |_event| {
                dom.borrow_mut().close();
            })?
        };
        let escape = {
            let dom = Rc::clone(&dom);
            EventSubscription::new(document, "keydown", move |event| {
                if let Some(key_event) = event.dyn_ref::<KeyboardEvent>()
                    && key_event.key() == "Escape"
                {
                    dom.borrow_mut().close();
                }
            })?
        };

        let mut expands = Vec::new();
        let controls = document.query_selector_all(EXPAND_SELECTOR)?;
        for i in 0..controls.length() {
            let Some(node) = controls.item(i) else { continue };
            let Ok(control) = node.dyn_into::<Element>() else {
                continue;
            };
            let dom = Rc::clone(&dom);
            let owner = control.clone();
            expands.push(EventSubscription::new(&control, "click", move |event| {
                event.stop_propagation();
                let card = owner
                    .closest(CARD_SELECTOR)
                    .ok()
                    .flatten()
                    .expect("expand control outside a portrait media card");
                let card_video: HtmlVideoElement = card
                    .query_selector("video")
                    .ok()
                    .flatten()
                    .expect("portrait card has no video")
                    .unchecked_into();
                let source: HtmlSourceElement = card_video
                    .query_selector("source")
                    .ok()
                    .flatten()
                    .expect("card video has no source")
                    .unchecked_into();
                dom.borrow_mut().open_from(&card_video, source.src());
            })?);
        }

        Ok(Self {
            _close: close,
            _backdrop: backdrop,
            _escape: escape,
            _expands: expands,
        })
    }
}
