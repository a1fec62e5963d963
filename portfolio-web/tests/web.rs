#![cfg(target_arch = "wasm32")]

use portfolio_web::web::DomPage;
use portfolio_web::{MountPoint, Page, Theme, ThemeIcon};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount(id: &str) -> web_sys::Element {
    let document = document();
    let element = document.create_element("div").unwrap();
    element.set_id(id);
    document.body().unwrap().append_child(&element).unwrap();
    element
}

#[wasm_bindgen_test]
fn absent_mounts_report_false() {
    let page = DomPage::new().unwrap();
    assert!(!page.exists(MountPoint::Joke));
    assert!(!page.set_text(MountPoint::Joke, "nope"));
    assert_eq!(page.toggle_hidden(MountPoint::Tagline), None);
}

#[wasm_bindgen_test]
fn theme_flag_lands_on_the_root_element() {
    let page = DomPage::new().unwrap();
    let root = document().document_element().unwrap();
    page.apply_theme(Theme::Dark);
    assert!(root.class_list().contains("dark"));
    page.apply_theme(Theme::Light);
    assert!(!root.class_list().contains("dark"));
}

#[wasm_bindgen_test]
fn injected_nav_exposes_toggle_icons() {
    let placeholder = mount("nav-placeholder");
    let page = DomPage::new().unwrap();
    let chrome = portfolio_web::markup::render(&Default::default(), "/index.html", Theme::Light);
    assert!(page.set_html(MountPoint::Nav, &chrome.nav));
    assert!(page.exists(MountPoint::ThemeToggleDesktop));

    assert!(page.show_theme_icon(MountPoint::ThemeToggleDesktop, ThemeIcon::Sun));
    let toggle = document().get_element_by_id("theme-toggle-desktop").unwrap();
    let sun = toggle.query_selector(r#"[data-theme-icon="sun"]"#).unwrap().unwrap();
    let moon = toggle.query_selector(r#"[data-theme-icon="moon"]"#).unwrap().unwrap();
    assert!(!sun.class_list().contains("hidden"));
    assert!(moon.class_list().contains("hidden"));

    assert_eq!(page.toggle_hidden(MountPoint::MenuPanel), Some(true));
    assert_eq!(page.toggle_hidden(MountPoint::MenuPanel), Some(false));

    placeholder.remove();
    assert!(!page.exists(MountPoint::MenuPanel));
}
