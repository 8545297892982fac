// Copyright 2026 the Pergola Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-card video prev/next switchers.
//!
//! Each `.vswitcher` root carries its source list as a JSON array in the
//! `data-videos` attribute. The widget pauses playback, steps the
//! [`Playlist`] (wrapping in both directions), swaps the video source,
//! forces a media reload, and rewrites the `k / n` counter. Widgets are
//! fully independent: each owns its own playlist and subscriptions.
//!
//! A malformed payload degrades to the empty playlist — the widget stays
//! mounted, navigation is inert, and the counter reads `1 / 0`.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use log::warn;
use pergola_core::playlist::Playlist;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlVideoElement};

use crate::listener::EventSubscription;

const ROOT_SELECTOR: &str = ".vswitcher";
const VIDEO_SELECTOR: &str = ".vswitcher__video";
const PREV_SELECTOR: &str = ".vswitcher__btn--prev";
const NEXT_SELECTOR: &str = ".vswitcher__btn--next";
const COUNTER_SELECTOR: &str = ".vswitcher__counter";
const PLAYLIST_ATTR: &str = "data-videos";

/// One mounted switcher widget.
#[derive(Debug)]
pub struct VideoSwitcher {
    _prev: Option<EventSubscription>,
    _next: Option<EventSubscription>,
}

struct SwitcherDom {
    playlist: Playlist,
    video: HtmlVideoElement,
    counter: Option<Element>,
}

impl SwitcherDom {
    /// Steps the playlist by `delta` and mirrors the result onto the DOM.
    fn show(&mut self, delta: i64) {
        let _ = self.video.pause();
        if let Some(source) = self.playlist.step(delta) {
            self.video.set_src(source);
            self.video.load();
        }
        if let Some(counter) = &self.counter {
            counter.set_text_content(Some(&self.playlist.counter_label()));
        }
    }
}

impl VideoSwitcher {
    /// Mounts every `.vswitcher` widget found in `document`.
    ///
    /// A widget that fails to mount (missing video element) is skipped
    /// with a warning; the remaining widgets are unaffected.
    pub fn install_all(document: &Document) -> Result<Vec<Self>, JsValue> {
        let roots = document.query_selector_all(ROOT_SELECTOR)?;
        let mut switchers = Vec::new();
        for i in 0..roots.length() {
            let Some(node) = roots.item(i) else { continue };
            let Ok(root) = node.dyn_into::<Element>() else {
                continue;
            };
            match Self::install(&root) {
                Ok(switcher) => switchers.push(switcher),
                Err(err) => warn!("skipping a video switcher widget: {err:?}"),
            }
        }
        Ok(switchers)
    }

    /// Mounts one switcher on its root element.
    pub fn install(root: &Element) -> Result<Self, JsValue> {
        let playlist = match root.get_attribute(PLAYLIST_ATTR) {
            Some(payload) => Playlist::from_json(&payload).unwrap_or_else(|err| {
                warn!("discarding malformed {PLAYLIST_ATTR} payload: {err}");
                Playlist::default()
            }),
            None => Playlist::default(),
        };

        let video: HtmlVideoElement = root
            .query_selector(VIDEO_SELECTOR)?
            .ok_or_else(|| JsValue::from_str("switcher widget has no video element"))?
            .dyn_into()?;
        let counter = root.query_selector(COUNTER_SELECTOR)?;
        if let Some(counter) = &counter {
            counter.set_text_content(Some(&playlist.counter_label()));
        }

        let dom = Rc::new(RefCell::new(SwitcherDom {
            playlist,
            video,
            counter,
        }));

        let prev = match root.query_selector(PREV_SELECTOR)? {
            Some(button) => {
                let dom = Rc::clone(&dom);
                Some(EventSubscription::new(&button, "click", move |_event| {
                    dom.borrow_mut().show(-1);
                })?)
            }
            None => None,
        };
        let next = match root.query_selector(NEXT_SELECTOR)? {
            Some(button) => {
                let dom = Rc::clone(&dom);
                Some(EventSubscription::new(&button, "click", move |_event| {
                    dom.borrow_mut().show(1);
                })?)
            }
            None => None,
        };

        Ok(Self {
            _prev: prev,
            _next: next,
        })
    }
}
