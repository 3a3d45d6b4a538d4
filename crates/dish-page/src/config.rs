//! Element lookups and behavior switches for the dish form page
//!
//! Every field has a default matching the markup rendered by the server, so an
//! empty config object (or no config at all) wires the standard page.

use serde::Deserialize;

/// Where the controller finds its elements, and how example buttons behave
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Id of the dish submission form
    pub form_id: String,
    /// Id of the loading indicator shown while the server works
    pub spinner_id: String,
    /// Selector for elements that get a tooltip widget
    pub tooltip_selector: String,
    /// Selector for preset "example" buttons
    pub example_selector: String,
    /// Attribute on an example button holding its preset dish name
    pub example_value_attr: String,
    /// Id of the dish-name text input
    pub input_id: String,
    /// Id of the back-navigation button
    pub back_button_id: String,
    /// Submit the form right after an example fills in the input
    pub auto_submit_examples: bool,
    /// Attribute set on the document root once the page is wired
    pub init_marker: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            form_id: "dish-form".to_string(),
            spinner_id: "loading-spinner".to_string(),
            tooltip_selector: r#"[data-bs-toggle="tooltip"]"#.to_string(),
            example_selector: ".recipe-example".to_string(),
            example_value_attr: "data-dish".to_string(),
            input_id: "dish-name".to_string(),
            back_button_id: "back-button".to_string(),
            auto_submit_examples: true,
            init_marker: "data-dish-page-wired".to_string(),
        }
    }
}
