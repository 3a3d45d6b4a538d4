//! Page interaction controller
//!
//! Wires the dish form page once its structure is parsed: spinner swap on
//! submit, tooltip widgets, preset example buttons and the back button.

use crate::config::PageConfig;
use crate::error::PageError;
use crate::host::{Display, Listener, PageEvent, PageHost};
use std::rc::Rc;
use tracing::{debug, info, warn};

/// What a call to [`PageController::init`] bound
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wiring {
    /// The form was found and its submit listener attached
    pub submit_listener: bool,
    /// Tooltip widgets created
    pub tooltips: usize,
    /// Example buttons given a click listener
    pub example_buttons: usize,
    /// The back button was found and its click listener attached
    pub back_listener: bool,
    /// The page carried the init marker, so nothing was bound
    pub already_wired: bool,
}

/// Binds page behavior through a [`PageHost`]
pub struct PageController<H: PageHost> {
    host: Rc<H>,
    config: Rc<PageConfig>,
}

impl<H: PageHost + 'static> PageController<H> {
    pub fn new(host: Rc<H>, config: PageConfig) -> Self {
        Self {
            host,
            config: Rc::new(config),
        }
    }

    /// Attach every listener and widget the page needs.
    ///
    /// Missing elements are skipped. A page already carrying the init marker
    /// is left untouched, so a second call binds nothing. The marker is only
    /// set once every step has succeeded.
    ///
    /// # Errors
    /// Returns `PageError` if the host refuses to attach a listener or to
    /// set the init marker
    pub fn init(&self) -> Result<Wiring, PageError> {
        let root = self.host.root();
        if let Some(root) = &root {
            if self
                .host
                .attribute(root, &self.config.init_marker)
                .is_some()
            {
                debug!(marker = %self.config.init_marker, "page already wired, skipping");
                return Ok(Wiring {
                    already_wired: true,
                    ..Wiring::default()
                });
            }
        }

        let wiring = Wiring {
            submit_listener: self.wire_submit()?,
            tooltips: self.wire_tooltips()?,
            example_buttons: self.wire_examples()?,
            back_listener: self.wire_back()?,
            already_wired: false,
        };

        if let Some(root) = &root {
            self.host
                .set_attribute(root, &self.config.init_marker, "true")?;
        }

        info!(
            submit = wiring.submit_listener,
            tooltips = wiring.tooltips,
            examples = wiring.example_buttons,
            back = wiring.back_listener,
            "page controller wired"
        );
        Ok(wiring)
    }

    fn wire_submit(&self) -> Result<bool, PageError> {
        let Some(form) = self.host.element_by_id(&self.config.form_id) else {
            debug!(id = %self.config.form_id, "no form on page");
            return Ok(false);
        };
        let spinner = self.host.element_by_id(&self.config.spinner_id);

        let host = Rc::clone(&self.host);
        let target = form.clone();
        let listener: Listener =
            Rc::new(move || swap_to_spinner(host.as_ref(), &target, spinner.as_ref()));
        self.host.listen(&form, PageEvent::Submit, listener)?;
        Ok(true)
    }

    fn wire_tooltips(&self) -> Result<usize, PageError> {
        let triggers = self.host.query_all(&self.config.tooltip_selector)?;
        let mut bound = 0;
        for trigger in &triggers {
            match self.host.bind_tooltip(trigger) {
                Ok(()) => bound += 1,
                Err(e) => warn!("tooltip binding failed: {}", e),
            }
        }
        debug!(found = triggers.len(), bound, "tooltips initialized");
        Ok(bound)
    }

    fn wire_examples(&self) -> Result<usize, PageError> {
        let buttons = self.host.query_all(&self.config.example_selector)?;
        for button in &buttons {
            let host = Rc::clone(&self.host);
            let config = Rc::clone(&self.config);
            let source = button.clone();
            let listener: Listener =
                Rc::new(move || fill_from_example(host.as_ref(), &config, &source));
            self.host.listen(button, PageEvent::Click, listener)?;
        }
        debug!(count = buttons.len(), "example buttons wired");
        Ok(buttons.len())
    }

    fn wire_back(&self) -> Result<bool, PageError> {
        let Some(button) = self.host.element_by_id(&self.config.back_button_id) else {
            return Ok(false);
        };
        let host = Rc::clone(&self.host);
        let listener: Listener = Rc::new(move || {
            if let Err(e) = host.history_back() {
                warn!("history back failed: {}", e);
            }
        });
        self.host.listen(&button, PageEvent::Click, listener)?;
        Ok(true)
    }
}

/// Hide the form and show the spinner. Never cancels the submission.
fn swap_to_spinner<H: PageHost>(host: &H, form: &H::Element, spinner: Option<&H::Element>) {
    if let Err(e) = host.set_display(form, Display::None) {
        warn!("could not hide form: {}", e);
    }
    if let Some(spinner) = spinner {
        if let Err(e) = host.set_display(spinner, Display::Block) {
            warn!("could not show spinner: {}", e);
        }
    }
}

fn fill_from_example<H: PageHost>(host: &H, config: &PageConfig, button: &H::Element) {
    let Some(input) = host.element_by_id(&config.input_id) else {
        debug!(id = %config.input_id, "example clicked without a dish input");
        return;
    };
    let dish = host
        .attribute(button, &config.example_value_attr)
        .unwrap_or_default();
    if let Err(e) = host.set_value(&input, &dish) {
        warn!("could not fill dish input: {}", e);
        return;
    }
    if !config.auto_submit_examples {
        return;
    }
    if let Some(form) = host.element_by_id(&config.form_id) {
        debug!(dish = %dish, "submitting example");
        if let Err(e) = host.submit(&form) {
            warn!("example submit failed: {}", e);
        }
    }
}
