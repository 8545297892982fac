// Copyright 2026 the Pergola Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `IntersectionObserver` wrapper with owned callback storage.
//!
//! [`VisibilityObserver`] keeps the JS callback closure alive alongside
//! the observer, so the observation is an explicit value: observing stops
//! for all targets when it is dropped. Individual targets can be
//! deregistered early with [`unobserve`](VisibilityObserver::unobserve) —
//! the fade-in revealer does exactly that after an element's one allowed
//! reveal.

use alloc::boxed::Box;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverClosure = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// A configured `IntersectionObserver` plus its callback closure.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    closure: ObserverClosure,
}

impl VisibilityObserver {
    /// Creates an observer firing once `threshold` of a target's area is
    /// visible inside the viewport adjusted by `root_margin` (CSS margin
    /// syntax). `callback` is invoked once per entry per notification
    /// batch, together with the observer so it can deregister targets.
    pub fn new(
        threshold: f64,
        root_margin: &str,
        mut callback: impl FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    ) -> Result<Self, JsValue> {
        let closure: ObserverClosure = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    callback(&entry, &observer);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);
        let observer =
            IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)?;

        Ok(Self { observer, closure })
    }

    /// Starts observing `target`.
    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }

    /// Stops observing `target`; other targets are unaffected.
    pub fn unobserve(&self, target: &Element) {
        self.observer.unobserve(target);
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        // The closure field drops with self, releasing the JS function.
        self.observer.disconnect();
    }
}

impl core::fmt::Debug for VisibilityObserver {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VisibilityObserver").finish_non_exhaustive()
    }
}
