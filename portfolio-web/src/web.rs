use std::rc::Rc;

use tracing::Level;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Window};

use crate::bootstrap;
use crate::config::{SiteConfig, CONFIG_ELEMENT_ID};
use crate::error::SiteError;
use crate::jokes;
use crate::logging;
use crate::page::{is_still_parsing, MountPoint, Page};
use crate::theme::{LocalThemeStore, Theme, ThemeIcon};
use crate::typewriter::TimeoutScheduler;

const DARK_CLASS: &str = "dark";
const HIDDEN_CLASS: &str = "hidden";
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

pub struct DomPage {
    window: Window,
    document: Document,
}

impl DomPage {
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    fn element(&self, mount: MountPoint) -> Option<Element> {
        self.document.get_element_by_id(mount.element_id())
    }

    fn listen(&self, element: &Element, handler: Box<dyn FnMut()>) -> Result<(), SiteError> {
        let mut handler = handler;
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            handler();
        }) as Box<dyn FnMut(_)>);
        element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn lucide(&self) -> Option<JsValue> {
        let lucide = js_sys::Reflect::get(&self.window, &JsValue::from_str("lucide")).ok()?;
        if lucide.is_undefined() || lucide.is_null() {
            return None;
        }
        Some(lucide)
    }
}

impl Page for DomPage {
    fn current_path(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    fn prefers_dark(&self) -> bool {
        self.window
            .match_media(DARK_QUERY)
            .ok()
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(false)
    }

    fn inline_config(&self) -> Option<String> {
        self.document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content())
    }

    fn apply_theme(&self, theme: Theme) {
        let Some(root) = self.document.document_element() else {
            return;
        };
        let classes = root.class_list();
        let result = match theme {
            Theme::Dark => classes.add_1(DARK_CLASS),
            Theme::Light => classes.remove_1(DARK_CLASS),
        };
        if let Err(err) = result {
            tracing::warn!(error = ?err, "page: applying theme failed");
        }
    }

    fn exists(&self, mount: MountPoint) -> bool {
        self.element(mount).is_some()
    }

    fn set_html(&self, mount: MountPoint, html: &str) -> bool {
        let Some(element) = self.element(mount) else {
            return false;
        };
        element.set_inner_html(html);
        true
    }

    fn set_text(&self, mount: MountPoint, text: &str) -> bool {
        let Some(element) = self.element(mount) else {
            return false;
        };
        element.set_text_content(Some(text));
        true
    }

    fn toggle_hidden(&self, mount: MountPoint) -> Option<bool> {
        let element = self.element(mount)?;
        match element.class_list().toggle(HIDDEN_CLASS) {
            Ok(hidden) => Some(!hidden),
            Err(err) => {
                tracing::warn!(id = mount.element_id(), error = ?err, "page: toggling visibility failed");
                None
            }
        }
    }

    fn set_attribute(&self, mount: MountPoint, name: &str, value: &str) -> bool {
        self.element(mount)
            .map(|element| element.set_attribute(name, value).is_ok())
            .unwrap_or(false)
    }

    fn show_theme_icon(&self, toggle: MountPoint, icon: ThemeIcon) -> bool {
        let Some(element) = self.element(toggle) else {
            return false;
        };
        let Ok(groups) = element.query_selector_all("[data-theme-icon]") else {
            return false;
        };
        for index in 0..groups.length() {
            let Some(group) = groups.item(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
                continue;
            };
            let visible = group.get_attribute("data-theme-icon").as_deref() == Some(icon.as_str());
            if let Err(err) = group.class_list().toggle_with_force(HIDDEN_CLASS, !visible) {
                tracing::warn!(id = toggle.element_id(), error = ?err, "page: syncing theme icon failed");
            }
        }
        true
    }

    fn on_click(&self, mount: MountPoint, handler: Box<dyn FnMut()>) -> bool {
        let Some(element) = self.element(mount) else {
            return false;
        };
        match self.listen(&element, handler) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(id = mount.element_id(), error = %err, "page: click listener not attached");
                false
            }
        }
    }

    fn refresh_icons(&self) -> bool {
        let Some(lucide) = self.lucide() else {
            return false;
        };
        let create = js_sys::Reflect::get(&lucide, &JsValue::from_str("createIcons"))
            .ok()
            .and_then(|value| value.dyn_into::<js_sys::Function>().ok());
        match create {
            Some(create) => create.call0(&lucide).is_ok(),
            None => false,
        }
    }
}

/// Boots now if the document is parsed, otherwise at `DOMContentLoaded`.
pub fn run() {
    let Some(page) = DomPage::new() else {
        return;
    };
    let page = Rc::new(page);
    if !is_still_parsing(&page.document.ready_state()) {
        launch(page);
        return;
    }
    let document = page.document.clone();
    let callback = Closure::once_into_js(move || launch(page));
    if let Err(err) =
        document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
    {
        web_sys::console::error_1(&err);
    }
}

fn launch(page: Rc<DomPage>) {
    let loaded = SiteConfig::load(page.inline_config().as_deref());
    logging::init(
        loaded
            .as_ref()
            .map(SiteConfig::max_log_level)
            .unwrap_or(Level::INFO),
    );
    let config = loaded.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "config: inline config rejected, using defaults");
        SiteConfig::default()
    });
    let mut rng = jokes::browser_rng();
    bootstrap::boot(page, LocalThemeStore, Rc::new(TimeoutScheduler), &mut rng, &config);
}
