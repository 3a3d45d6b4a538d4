//! Bootstrap tooltip binding
//!
//! The page loads Bootstrap's bundle as a plain script, which exposes the
//! `bootstrap` global. Each trigger element gets its own `bootstrap.Tooltip`;
//! Bootstrap keeps the instance in its own registry afterwards.

use crate::web_page::js_err;
use dish_page::PageError;
use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Tooltip;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    fn new(element: &Element) -> Result<Tooltip, JsValue>;
}

/// Whether the `bootstrap` global is present
pub fn library_loaded() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("bootstrap")).unwrap_or(false)
}

/// Create a tooltip widget on `element`
///
/// # Errors
/// Returns `PageError::Host` if Bootstrap is missing or rejects the element
pub fn attach(element: &Element) -> Result<(), PageError> {
    Tooltip::new(element).map(drop).map_err(js_err)
}
