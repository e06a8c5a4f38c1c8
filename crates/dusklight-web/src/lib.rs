//! Browser bindings for dusklight.
//!
//! Implements the storage, document, selector, clock and class-list seams
//! on top of `web-sys`, and wires the event listeners:
//!
//! - `change` on each theme `<select>` routes to the controller
//! - `scroll` on the window toggles the nav bar's scrolled class
//! - `click` on the menu button shows and hides the menu
//!
//! Load the module and call `start()`; it waits for `DOMContentLoaded`
//! when the document is still loading.

mod dom;
mod error;
mod install;

use wasm_bindgen::prelude::*;
use web_sys::Event;

pub use dom::{ElementClasses, JsClock, LocalStorage, RootElement, SelectControl};
pub use error::InstallError;
pub use install::{
    install_nav, install_theme, BrowserController, Listeners, ThemeHandle, DEFAULT_SELECTOR_IDS,
};

/// Installs the theme controller and nav behaviors on the current page.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or(InstallError::NoWindow)?;
    let document = window.document().ok_or(InstallError::NoDocument)?;

    if document.ready_state() != "loading" {
        install::install_page(&window, &document)?;
        return Ok(());
    }

    let ready_window = window.clone();
    let ready_document = document.clone();
    let on_ready = Closure::wrap(Box::new(move |_event: Event| {
        if let Err(e) = install::install_page(&ready_window, &ready_document) {
            tracing::error!(error = %e, "failed to install page behaviors");
        }
    }) as Box<dyn FnMut(Event)>);
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    on_ready.forget();
    Ok(())
}
