//! DOM Helpers
//!
//! Fail-soft lookups and style manipulation for the imperative
//! animation paths.

use leptos::logging::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// Viewports narrower than this get the compact treatment
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|win| win.document())
}

pub fn get_element_by_id(id: &str) -> Option<HtmlElement> {
    document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

pub fn query_selector(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// Collect matching descendants of `root` as HtmlElements
pub fn query_all_html(root: &Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        warn!("Failed to set style {property}: {err:?}");
    }
}

pub fn clear_style(element: &HtmlElement, property: &str) {
    let _ = element.style().remove_property(property);
}

/// Run a callback on the next animation frame
pub fn raf(f: impl FnOnce() + 'static) {
    let Some(win) = web_sys::window() else {
        return;
    };
    let callback = Closure::once_into_js(f);
    if win
        .request_animation_frame(callback.unchecked_ref())
        .is_err()
    {
        warn!("requestAnimationFrame unavailable");
    }
}

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|win| win.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}
