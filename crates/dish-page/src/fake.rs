//! In-memory page used by the controller tests
//!
//! Elements are indices into a node list; index 0 is the `<html>` root.
//! Every mutation is appended to an action log so tests can assert exactly
//! what a handler did.

use crate::error::PageError;
use crate::host::{Display, Listener, PageEvent, PageHost};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetDisplay(usize, Display),
    SetValue(usize, String),
    TooltipBound(usize),
    Submitted(usize),
    HistoryBack,
}

#[derive(Debug, Clone, Default)]
pub struct FakeNode {
    tag: &'static str,
    id: Option<String>,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    display: Option<Display>,
    value: Option<String>,
}

impl FakeNode {
    fn tagged(tag: &'static str) -> Self {
        Self {
            tag,
            ..Self::default()
        }
    }

    pub fn form(id: &str) -> Self {
        Self::tagged("form").with_id(id)
    }

    pub fn input(id: &str) -> Self {
        let mut node = Self::tagged("input").with_id(id);
        node.value = Some(String::new());
        node
    }

    pub fn textarea(id: &str) -> Self {
        let mut node = Self::tagged("textarea").with_id(id);
        node.value = Some(String::new());
        node
    }

    pub fn div(id: &str) -> Self {
        Self::tagged("div").with_id(id)
    }

    pub fn div_anonymous() -> Self {
        Self::tagged("div")
    }

    pub fn button() -> Self {
        Self::tagged("button")
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = Some(value.to_string());
        self
    }

    /// Supports `.class`, `[attr]`, `[attr="value"]` and bare tag names
    fn matches(&self, selector: &str) -> bool {
        if let Some(class) = selector.strip_prefix('.') {
            return self.classes.iter().any(|c| c == class);
        }
        if let Some(inner) = selector
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
        {
            return match inner.split_once('=') {
                Some((name, value)) => {
                    let value = value.trim_matches('"');
                    self.attrs.get(name).map(String::as_str) == Some(value)
                }
                None => self.attrs.contains_key(inner),
            };
        }
        self.tag == selector
    }

    fn label(&self) -> String {
        self.id.clone().unwrap_or_else(|| self.tag.to_string())
    }
}

pub struct FakePage {
    nodes: RefCell<Vec<FakeNode>>,
    listeners: RefCell<Vec<(usize, PageEvent, Listener)>>,
    actions: RefCell<Vec<Action>>,
    fail_tooltips: Cell<bool>,
    fail_display: Cell<bool>,
    fail_listen: Cell<bool>,
}

impl FakePage {
    pub fn new() -> Self {
        Self {
            nodes: RefCell::new(vec![FakeNode::tagged("html")]),
            listeners: RefCell::new(Vec::new()),
            actions: RefCell::new(Vec::new()),
            fail_tooltips: Cell::new(false),
            fail_display: Cell::new(false),
            fail_listen: Cell::new(false),
        }
    }

    pub fn add(&self, node: FakeNode) -> usize {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(node);
        nodes.len() - 1
    }

    pub fn root_id(&self) -> usize {
        0
    }

    /// Fire every listener bound to `element` for a click
    pub fn click(&self, element: usize) {
        self.dispatch(element, PageEvent::Click);
    }

    fn dispatch(&self, element: usize, event: PageEvent) {
        // Cloned out so handlers can re-enter the page
        let matching: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(el, ev, _)| *el == element && *ev == event)
            .map(|(_, _, listener)| listener.clone())
            .collect();
        for listener in matching {
            listener();
        }
    }

    pub fn actions(&self) -> Vec<Action> {
        self.actions.borrow().clone()
    }

    pub fn clear_actions(&self) {
        self.actions.borrow_mut().clear();
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn tooltip_count(&self) -> usize {
        self.actions
            .borrow()
            .iter()
            .filter(|a| matches!(a, Action::TooltipBound(_)))
            .count()
    }

    pub fn display(&self, element: usize) -> Option<Display> {
        self.nodes.borrow()[element].display
    }

    pub fn value(&self, element: usize) -> Option<String> {
        self.nodes.borrow()[element].value.clone()
    }

    pub fn fail_tooltips(&self, fail: bool) {
        self.fail_tooltips.set(fail);
    }

    pub fn fail_display(&self, fail: bool) {
        self.fail_display.set(fail);
    }

    pub fn fail_listen(&self, fail: bool) {
        self.fail_listen.set(fail);
    }

    fn record(&self, action: Action) {
        self.actions.borrow_mut().push(action);
    }
}

impl PageHost for FakePage {
    type Element = usize;

    fn element_by_id(&self, id: &str) -> Option<usize> {
        self.nodes
            .borrow()
            .iter()
            .position(|node| node.id.as_deref() == Some(id))
    }

    fn query_all(&self, selector: &str) -> Result<Vec<usize>, PageError> {
        Ok(self
            .nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, node)| node.matches(selector))
            .map(|(index, _)| index)
            .collect())
    }

    fn root(&self) -> Option<usize> {
        Some(0)
    }

    fn attribute(&self, element: &usize, name: &str) -> Option<String> {
        self.nodes.borrow()[*element].attrs.get(name).cloned()
    }

    fn set_attribute(&self, element: &usize, name: &str, value: &str) -> Result<(), PageError> {
        self.nodes.borrow_mut()[*element]
            .attrs
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn set_display(&self, element: &usize, display: Display) -> Result<(), PageError> {
        if self.fail_display.get() {
            return Err(PageError::Host("style is read-only".to_string()));
        }
        self.nodes.borrow_mut()[*element].display = Some(display);
        self.record(Action::SetDisplay(*element, display));
        Ok(())
    }

    fn set_value(&self, element: &usize, value: &str) -> Result<(), PageError> {
        {
            let mut nodes = self.nodes.borrow_mut();
            let node = &mut nodes[*element];
            if node.tag != "input" && node.tag != "textarea" {
                return Err(PageError::NotAnInput(node.label()));
            }
            node.value = Some(value.to_string());
        }
        self.record(Action::SetValue(*element, value.to_string()));
        Ok(())
    }

    fn submit(&self, form: &usize) -> Result<(), PageError> {
        {
            let nodes = self.nodes.borrow();
            let node = &nodes[*form];
            if node.tag != "form" {
                return Err(PageError::NotAForm(node.label()));
            }
        }
        self.dispatch(*form, PageEvent::Submit);
        self.record(Action::Submitted(*form));
        Ok(())
    }

    fn history_back(&self) -> Result<(), PageError> {
        self.record(Action::HistoryBack);
        Ok(())
    }

    fn bind_tooltip(&self, element: &usize) -> Result<(), PageError> {
        if self.fail_tooltips.get() {
            return Err(PageError::Host("bootstrap is not defined".to_string()));
        }
        self.record(Action::TooltipBound(*element));
        Ok(())
    }

    fn listen(&self, element: &usize, event: PageEvent, listener: Listener) -> Result<(), PageError> {
        if self.fail_listen.get() {
            return Err(PageError::Host("listener rejected".to_string()));
        }
        self.listeners
            .borrow_mut()
            .push((*element, event, listener));
        Ok(())
    }
}
