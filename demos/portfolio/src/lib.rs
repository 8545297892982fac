// Copyright 2026 the Pergola Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The portfolio page script.
//!
//! Mounts every pergola component against the page markup on load: footer
//! year, nav scroll styling, fade-in reveals, active-link highlighting,
//! the video switcher widgets, and the shared video overlay.
//!
//! Build with: `wasm-pack build --target web demos/portfolio`
//!
//! Then serve `demos/portfolio/` and open `index.html` in a browser.

use log::info;
use pergola_backend_web::{Page, PageConfig};
use wasm_bindgen::prelude::*;

/// Entry point: wires the page once the module is instantiated.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    let _ = console_log::init_with_level(log::Level::Info);

    let document = web_sys::window()
        .expect("window")
        .document()
        .expect("document");

    let page = Page::mount(&document, PageConfig::portfolio());
    info!(
        "portfolio page mounted ({} video switchers)",
        page.switcher_count()
    );

    // The page components live as long as the page does.
    core::mem::forget(page);

    Ok(())
}
