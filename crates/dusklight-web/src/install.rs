//! Attaching the controller and nav behaviors to a live page.

use std::cell::RefCell;
use std::rc::Rc;

use dusklight::nav::NavConfig;
use dusklight::{ControllerConfig, EffectiveTheme, ThemeController};
use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, HtmlSelectElement, Window};

use crate::dom::{ElementClasses, JsClock, LocalStorage, RootElement, SelectControl};
use crate::error::InstallError;

/// Element ids of the selectors a page usually carries.
pub const DEFAULT_SELECTOR_IDS: [&str; 2] = ["theme-select", "theme-select-mobile"];

/// The controller as wired into the browser.
pub type BrowserController = ThemeController<LocalStorage, RootElement, JsClock>;

type Listener = Closure<dyn FnMut(Event)>;

/// Event listeners registered by an install call.
///
/// Dropping the set invalidates the callbacks, so keep it alive for as long
/// as the page should react, or [`forget`](Self::forget) it.
#[derive(Default)]
pub struct Listeners(Vec<Listener>);

impl Listeners {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Leaks the callbacks so they live for the rest of the page.
    pub fn forget(self) {
        for listener in self.0 {
            listener.forget();
        }
    }

    fn listen(
        &mut self,
        target: &EventTarget,
        event: &str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), InstallError> {
        let listener = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())?;
        self.0.push(listener);
        Ok(())
    }
}

/// A controller installed on the page, with its change listeners.
pub struct ThemeHandle {
    pub controller: Rc<RefCell<BrowserController>>,
    pub effective: EffectiveTheme,
    pub listeners: Listeners,
}

/// Creates the theme controller for `document`, initializes it and
/// subscribes to `change` on every selector among `selector_ids`.
///
/// Ids that are absent from the page, or that do not name a `<select>`,
/// are skipped.
///
/// # Errors
///
/// Returns an error if the document has no root element or a listener
/// cannot be registered.
pub fn install_theme(
    window: &Window,
    document: &Document,
    config: ControllerConfig,
    selector_ids: &[&str],
) -> Result<ThemeHandle, InstallError> {
    let root = document
        .document_element()
        .ok_or(InstallError::NoRootElement)?;

    let selects: Vec<SelectControl> = selector_ids
        .iter()
        .filter_map(|id| {
            let element = document.get_element_by_id(id)?;
            match element.dyn_into::<HtmlSelectElement>() {
                Ok(select) => Some(SelectControl::new(*id, select)),
                Err(_) => {
                    debug!(id, "theme selector id is not a <select>, skipping");
                    None
                }
            }
        })
        .collect();

    let mut controller = ThemeController::new(
        config,
        LocalStorage::from_window(window),
        RootElement(root),
        JsClock,
    );
    for select in &selects {
        controller.add_selector(Box::new(select.clone()));
    }
    let effective = controller.init();
    let controller = Rc::new(RefCell::new(controller));

    let mut listeners = Listeners::default();
    for select in selects {
        let controller = Rc::clone(&controller);
        let element = select.element().clone();
        let id = dusklight::ThemeSelector::id(&select).to_string();
        listeners.listen(select.element(), "change", move |_event: Event| {
            let value = element.value();
            match controller.try_borrow_mut() {
                Ok(mut controller) => {
                    controller.on_selector_change(&id, &value);
                }
                Err(_) => warn!(id = %id, "theme controller busy, change dropped"),
            }
        })?;
    }

    debug!(
        effective = %effective,
        listeners = listeners.len(),
        "theme controller installed"
    );
    Ok(ThemeHandle {
        controller,
        effective,
        listeners,
    })
}

/// Wires the scroll class and the menu toggle.
///
/// Each behavior is skipped when its elements are missing.
///
/// # Errors
///
/// Returns an error if the nav selector is not valid CSS or a listener
/// cannot be registered.
pub fn install_nav(
    window: &Window,
    document: &Document,
    config: &NavConfig,
) -> Result<Listeners, InstallError> {
    let mut listeners = Listeners::default();

    if let Some(nav) = document.query_selector(&config.nav_selector)? {
        let scroll = config.scroll_class();
        let mut classes = ElementClasses::of(&nav);
        scroll.on_scroll(window.scroll_y().unwrap_or(0.0), &mut classes);

        let scroll_window = window.clone();
        listeners.listen(window, "scroll", move |_event: Event| {
            let y = scroll_window.scroll_y().unwrap_or(0.0);
            scroll.on_scroll(y, &mut classes);
        })?;
    } else {
        debug!(selector = %config.nav_selector, "nav bar not found, scroll class disabled");
    }

    match (
        document.get_element_by_id(&config.menu_toggle_id),
        document.get_element_by_id(&config.menu_id),
    ) {
        (Some(button), Some(menu)) => {
            let toggle = config.menu_toggle();
            let mut classes = ElementClasses::of(&menu);
            listeners.listen(&button, "click", move |_event: Event| {
                toggle.on_click(&mut classes);
            })?;
        }
        _ => debug!(
            toggle = %config.menu_toggle_id,
            menu = %config.menu_id,
            "menu elements not found, menu toggle disabled"
        ),
    }

    Ok(listeners)
}

/// Installs every behavior with default settings.
pub(crate) fn install_page(window: &Window, document: &Document) -> Result<(), InstallError> {
    let theme = install_theme(
        window,
        document,
        ControllerConfig::default(),
        &DEFAULT_SELECTOR_IDS,
    )?;
    theme.listeners.forget();
    install_nav(window, document, &NavConfig::default())?.forget();
    Ok(())
}
