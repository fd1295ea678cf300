//! Thin wrappers over the browser APIs the page touches.

use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::section::SectionId;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

fn window() -> Result<web_sys::Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// Smoothly scrolls the section's anchor into view.
///
/// Returns `Ok(false)` when the document has no element with that id.
pub fn scroll_to_section(section: SectionId) -> Result<bool, DomError> {
    let document = window()?.document().ok_or(DomError::NoDocument)?;
    let Some(element) = document.get_element_by_id(section.as_str()) else {
        return Ok(false);
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(true)
}

/// Current vertical scroll position in whole pixels.
pub fn scroll_offset() -> Result<u32, DomError> {
    let y = window()?.scroll_y()?;
    // `as` saturates: negative overscroll (iOS bounce) becomes 0.
    Ok(y as u32)
}

/// Opens `url` in a new browsing context.
pub fn open_in_new_tab(url: &str) -> Result<(), DomError> {
    window()?.open_with_url_and_target(url, "_blank")?;
    Ok(())
}
