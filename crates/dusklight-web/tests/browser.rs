#![cfg(target_arch = "wasm32")]

use dusklight::nav::NavConfig;
use dusklight::{ControllerConfig, EffectiveTheme, ThemePreference};
use dusklight_web::{install_nav, install_theme, DEFAULT_SELECTOR_IDS};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlElement, HtmlSelectElement, Window};

wasm_bindgen_test_configure!(run_in_browser);

fn page() -> (Window, Document) {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    (window, document)
}

fn add_select(document: &Document, id: &str) -> HtmlSelectElement {
    if let Some(old) = document.get_element_by_id(id) {
        old.remove();
    }
    let select: HtmlSelectElement = document.create_element("select").unwrap().dyn_into().unwrap();
    select.set_id(id);
    for pref in ThemePreference::ALL {
        let option = document.create_element("option").unwrap();
        option.set_attribute("value", pref.as_str()).unwrap();
        option.set_text_content(Some(pref.as_str()));
        select.append_child(&option).unwrap();
    }
    document.body().unwrap().append_child(&select).unwrap();
    select
}

fn add_element(document: &Document, tag: &str, id: &str) -> Element {
    if let Some(old) = document.get_element_by_id(id) {
        old.remove();
    }
    let element = document.create_element(tag).unwrap();
    element.set_id(id);
    document.body().unwrap().append_child(&element).unwrap();
    element
}

fn fire(target: &web_sys::EventTarget, name: &str) {
    let event = Event::new(name).unwrap();
    target.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn stored_preference_is_shown_and_applied() {
    let (window, document) = page();
    let storage = window.local_storage().unwrap().unwrap();
    storage.set_item("theme", "dark").unwrap();

    let desktop = add_select(&document, DEFAULT_SELECTOR_IDS[0]);
    let mobile = add_select(&document, DEFAULT_SELECTOR_IDS[1]);

    let handle = install_theme(
        &window,
        &document,
        ControllerConfig::default(),
        &DEFAULT_SELECTOR_IDS,
    )
    .unwrap();

    assert_eq!(handle.effective, EffectiveTheme::Dark);
    assert_eq!(desktop.value(), "dark");
    assert_eq!(mobile.value(), "dark");
    let root = document.document_element().unwrap();
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("dark"));
    assert_eq!(handle.listeners.len(), 2);
}

#[wasm_bindgen_test]
fn mobile_change_updates_storage_desktop_and_document() {
    let (window, document) = page();
    let storage = window.local_storage().unwrap().unwrap();
    storage.remove_item("theme").unwrap();

    let desktop = add_select(&document, DEFAULT_SELECTOR_IDS[0]);
    let mobile = add_select(&document, DEFAULT_SELECTOR_IDS[1]);

    let handle = install_theme(
        &window,
        &document,
        ControllerConfig::default(),
        &DEFAULT_SELECTOR_IDS,
    )
    .unwrap();
    assert_eq!(desktop.value(), "auto");

    mobile.set_value("light");
    fire(&mobile, "change");

    assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("light"));
    assert_eq!(desktop.value(), "light");
    let root = document.document_element().unwrap();
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("light"));
    assert_eq!(
        handle.controller.borrow().preference(),
        ThemePreference::Light
    );
}

#[wasm_bindgen_test]
fn missing_selectors_are_skipped() {
    let (window, document) = page();
    let handle = install_theme(
        &window,
        &document,
        ControllerConfig::default(),
        &["no-such-select"],
    )
    .unwrap();
    assert!(handle.listeners.is_empty());
    assert_eq!(handle.controller.borrow().selector_count(), 0);
}

#[wasm_bindgen_test]
fn menu_button_toggles_menu() {
    let (window, document) = page();
    let button: HtmlElement = add_element(&document, "button", "menu-toggle")
        .dyn_into()
        .unwrap();
    let menu = add_element(&document, "ul", "nav-menu");

    let listeners = install_nav(&window, &document, &NavConfig::default()).unwrap();
    assert!(!listeners.is_empty());

    button.click();
    assert!(menu.class_list().contains("show"));
    button.click();
    assert!(!menu.class_list().contains("show"));
}

fn add_nav_bar(document: &Document) -> Element {
    let nav = add_element(document, "nav", "site-nav");
    nav.set_class_name("nav-container");
    let filler = add_element(document, "div", "scroll-filler");
    filler.set_attribute("style", "height: 5000px").unwrap();
    nav
}

#[wasm_bindgen_test]
fn scrolling_past_threshold_marks_nav() {
    let (window, document) = page();
    window.scroll_to_with_x_and_y(0.0, 0.0);
    let nav = add_nav_bar(&document);

    let _listeners = install_nav(&window, &document, &NavConfig::default()).unwrap();
    assert!(!nav.class_list().contains("scrolled"));

    window.scroll_to_with_x_and_y(0.0, 200.0);
    fire(&window, "scroll");
    assert!(nav.class_list().contains("scrolled"));

    window.scroll_to_with_x_and_y(0.0, 0.0);
    fire(&window, "scroll");
    assert!(!nav.class_list().contains("scrolled"));
}

#[wasm_bindgen_test]
fn nav_reflects_scroll_position_at_install() {
    let (window, document) = page();
    let nav = add_nav_bar(&document);
    window.scroll_to_with_x_and_y(0.0, 300.0);

    let _listeners = install_nav(&window, &document, &NavConfig::default()).unwrap();
    assert!(nav.class_list().contains("scrolled"));

    window.scroll_to_with_x_and_y(0.0, 0.0);
}

#[wasm_bindgen_test]
fn start_installs_on_loaded_page() {
    let (window, document) = page();
    let storage = window.local_storage().unwrap().unwrap();
    storage.set_item("theme", "light").unwrap();
    let desktop = add_select(&document, DEFAULT_SELECTOR_IDS[0]);

    dusklight_web::start().unwrap();

    assert_eq!(desktop.value(), "light");
    let root = document.document_element().unwrap();
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("light"));
}
