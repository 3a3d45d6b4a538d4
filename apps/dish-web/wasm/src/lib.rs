//! WASM bindings for the dish form page
//!
//! Wires the nutrition calculator's dish form in the browser: spinner swap on
//! submit, Bootstrap tooltips, preset example buttons and the back button.
//! The behavior lives in `dish-page`; this crate supplies the DOM.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { initPageController } from './pkg/dish_web_wasm.js';
//!
//! await init();
//!
//! // Standard markup
//! initPageController();
//!
//! // Different ids, no auto-submit on example click
//! initPageController({ form_id: "search-form", auto_submit_examples: false });
//! ```

pub mod logging;
pub mod tooltip;
pub mod web_page;

use dish_page::{PageConfig, PageController, PageError, Wiring};
use std::rc::Rc;
use tracing::{error, warn, Level};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub use web_page::WebPage;

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    logging::init(Level::INFO);
}

/// Get the library version
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Wire the page, waiting for `DOMContentLoaded` if the document is still
/// parsing. `config` may be omitted for the standard markup.
#[wasm_bindgen(js_name = initPageController)]
pub fn init_page_controller(config: JsValue) -> Result<(), JsValue> {
    let config = parse_config(config).map_err(to_js)?;
    when_ready(config).map_err(to_js)
}

fn to_js(e: PageError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// `undefined`/`null` mean the default config
pub fn parse_config(config: JsValue) -> Result<PageConfig, PageError> {
    if config.is_undefined() || config.is_null() {
        return Ok(PageConfig::default());
    }
    serde_wasm_bindgen::from_value(config).map_err(|e| PageError::Config(e.to_string()))
}

fn when_ready(config: PageConfig) -> Result<(), PageError> {
    let page = WebPage::new()?;
    if page.document().ready_state() != "loading" {
        wire(page, config)?;
        return Ok(());
    }

    let document = page.document().clone();
    let on_ready = Closure::once_into_js(move || {
        if let Err(e) = wire(page, config) {
            error!("page wiring failed: {}", e);
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        .map_err(web_page::js_err)
}

/// Wire the page immediately
///
/// # Errors
/// Returns `PageError` if a listener cannot be attached
pub fn wire(page: WebPage, config: PageConfig) -> Result<Wiring, PageError> {
    if !tooltip::library_loaded() {
        warn!("bootstrap is not loaded, tooltips will be skipped");
    }
    PageController::new(Rc::new(page), config).init()
}
