//! Dish form page behavior
//!
//! Host-agnostic controller for the nutrition calculator's dish form page.
//! The browser binding lives in `dish-web-wasm`; this crate only talks to the
//! DOM through [`PageHost`].
//!
//! - Submitting the form hides it and shows the loading spinner
//! - Tooltip triggers get a tooltip widget each
//! - Example buttons fill in the dish name and submit
//! - The back button steps back in session history

pub mod config;
pub mod controller;
pub mod error;
pub mod host;

#[cfg(test)]
mod fake;

pub use config::PageConfig;
pub use controller::{PageController, Wiring};
pub use error::PageError;
pub use host::{Display, Listener, PageEvent, PageHost};
