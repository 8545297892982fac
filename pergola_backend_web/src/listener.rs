// Copyright 2026 the Pergola Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned DOM event-listener registrations.
//!
//! [`EventSubscription`] pairs a JS closure with the target it is
//! registered on, so the subscription is an explicit value: keep it alive
//! to keep receiving events, drop it to deregister. Page-lifetime wiring
//! holds its subscriptions in the mounted [`Page`](crate::Page) and leaks
//! them deliberately at the entry point.

use alloc::boxed::Box;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

/// A live `addEventListener` registration, removed on drop.
pub struct EventSubscription {
    target: EventTarget,
    event_type: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventSubscription {
    /// Registers `callback` for `event_type` events on `target`.
    pub fn new(
        target: &EventTarget,
        event_type: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event_type,
            closure,
        })
    }

    /// Registers `callback` as a passive listener.
    ///
    /// Passive listeners promise never to call `preventDefault`, which lets
    /// the browser keep scrolling off the main thread; use this for scroll
    /// handlers.
    pub fn passive(
        target: &EventTarget,
        event_type: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event_type,
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            event_type,
            closure,
        })
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(
                self.event_type,
                self.closure.as_ref().unchecked_ref(),
            );
    }
}

impl core::fmt::Debug for EventSubscription {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventSubscription")
            .field("event_type", &self.event_type)
            .finish_non_exhaustive()
    }
}
