//! The DOM seam between the controller and whatever renders the page
//!
//! The browser binding implements [`PageHost`] with `web-sys`; tests implement
//! it in memory. Lookups return `Option` so a missing element is an ordinary
//! value, never an error.

use crate::error::PageError;
use std::rc::Rc;

/// Callback run when a bound event fires.
///
/// It takes no event argument, so a listener has no way to cancel the
/// browser's default action.
pub type Listener = Rc<dyn Fn()>;

/// CSS `display` values the controller toggles between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    None,
    Block,
}

impl Display {
    pub fn as_css(self) -> &'static str {
        match self {
            Display::None => "none",
            Display::Block => "block",
        }
    }
}

/// Events the controller listens for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageEvent {
    Submit,
    Click,
}

impl PageEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            PageEvent::Submit => "submit",
            PageEvent::Click => "click",
        }
    }
}

/// DOM operations the controller needs
pub trait PageHost {
    type Element: Clone + 'static;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// All elements matching `selector`, in document order
    fn query_all(&self, selector: &str) -> Result<Vec<Self::Element>, PageError>;

    /// The document's root element (`<html>`)
    fn root(&self) -> Option<Self::Element>;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn set_attribute(
        &self,
        element: &Self::Element,
        name: &str,
        value: &str,
    ) -> Result<(), PageError>;

    fn set_display(&self, element: &Self::Element, display: Display) -> Result<(), PageError>;

    fn set_value(&self, element: &Self::Element, value: &str) -> Result<(), PageError>;

    /// Submit a form programmatically. Must dispatch the form's `submit`
    /// event so listeners bound with [`PageHost::listen`] run.
    fn submit(&self, form: &Self::Element) -> Result<(), PageError>;

    /// One step back in session history
    fn history_back(&self) -> Result<(), PageError>;

    /// Attach a tooltip widget to a trigger element
    fn bind_tooltip(&self, element: &Self::Element) -> Result<(), PageError>;

    fn listen(
        &self,
        element: &Self::Element,
        event: PageEvent,
        listener: Listener,
    ) -> Result<(), PageError>;
}
