//! `PageHost` backed by the real browser DOM

use crate::tooltip;
use dish_page::{Display, Listener, PageError, PageEvent, PageHost};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventInit, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement, Window,
};

pub(crate) fn js_err(e: JsValue) -> PageError {
    PageError::Host(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

/// The current window and document
pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    /// # Errors
    /// Returns `PageError::NoDocument` outside a browser page
    pub fn new() -> Result<Self, PageError> {
        let window = web_sys::window().ok_or(PageError::NoDocument)?;
        let document = window.document().ok_or(PageError::NoDocument)?;
        Ok(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl PageHost for WebPage {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_all(&self, selector: &str) -> Result<Vec<Element>, PageError> {
        let nodes = self.document.query_selector_all(selector).map_err(js_err)?;
        Ok((0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn root(&self) -> Option<Element> {
        self.document.document_element()
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) -> Result<(), PageError> {
        element.set_attribute(name, value).map_err(js_err)
    }

    fn set_display(&self, element: &Element, display: Display) -> Result<(), PageError> {
        let html = element
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| PageError::Host(format!("<{}> has no style", element.tag_name())))?;
        html.style()
            .set_property("display", display.as_css())
            .map_err(js_err)
    }

    fn set_value(&self, element: &Element, value: &str) -> Result<(), PageError> {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        } else {
            return Err(PageError::NotAnInput(element.id()));
        }
        Ok(())
    }

    // requestSubmit dispatches `submit`, unlike HTMLFormElement.submit(), but
    // refuses a form with an invalid control. Those still go through, after
    // a dispatched `submit` nobody cancelled.
    fn submit(&self, form: &Element) -> Result<(), PageError> {
        let form = form
            .dyn_ref::<HtmlFormElement>()
            .ok_or_else(|| PageError::NotAForm(form.id()))?;
        if form.check_validity() {
            return form.request_submit().map_err(js_err);
        }

        let init = EventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        let event = Event::new_with_event_init_dict("submit", &init).map_err(js_err)?;
        if form.dispatch_event(&event).map_err(js_err)? {
            form.submit().map_err(js_err)?;
        }
        Ok(())
    }

    fn history_back(&self) -> Result<(), PageError> {
        self.window.history().map_err(js_err)?.back().map_err(js_err)
    }

    fn bind_tooltip(&self, element: &Element) -> Result<(), PageError> {
        tooltip::attach(element)
    }

    fn listen(
        &self,
        element: &Element,
        event: PageEvent,
        listener: Listener,
    ) -> Result<(), PageError> {
        let callback =
            Closure::wrap(Box::new(move |_event: web_sys::Event| listener()) as Box<dyn FnMut(_)>);
        element
            .add_event_listener_with_callback(event.as_str(), callback.as_ref().unchecked_ref())
            .map_err(js_err)?;
        // Listeners live as long as the page
        callback.forget();
        Ok(())
    }
}
