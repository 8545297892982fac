// Copyright 2026 the Pergola Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM geometry helpers.

use alloc::format;
use alloc::string::String;

use kurbo::Rect;
use web_sys::Element;

/// Reads an element's viewport-relative client rect as a [`Rect`].
pub(crate) fn client_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.right(), rect.bottom())
}

/// Formats a root-margin string that pulls the effective viewport bottom
/// up by `px`, so intersection triggers fire slightly before an element
/// reaches the true viewport edge.
pub(crate) fn bottom_inset_margin(px: f64) -> String {
    format!("0px 0px -{px}px 0px")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_inset_margin_formats_css_margin() {
        assert_eq!(bottom_inset_margin(40.0), "0px 0px -40px 0px");
        assert_eq!(bottom_inset_margin(12.5), "0px 0px -12.5px 0px");
    }
}
