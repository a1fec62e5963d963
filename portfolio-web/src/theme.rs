use std::cell::RefCell;
use std::rc::Rc;

use crate::page::{MountPoint, Page};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Toggles show where a click takes you, not where you are.
    pub fn switch_icon(self) -> ThemeIcon {
        match self {
            Theme::Light => ThemeIcon::Moon,
            Theme::Dark => ThemeIcon::Sun,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeIcon {
    Moon,
    Sun,
}

impl ThemeIcon {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeIcon::Moon => "moon",
            ThemeIcon::Sun => "sun",
        }
    }
}

/// One string slot in origin-scoped durable storage.
pub trait ThemeStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

pub struct ThemePreference<S> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: ThemeStore> ThemePreference<S> {
    pub fn load(store: S, key: &str, prefers_dark: bool) -> Self {
        let current = match store.read(key) {
            Some(stored) => Theme::parse(&stored).unwrap_or_else(|| {
                tracing::warn!(key, value = %stored, "theme: unrecognized stored value, using light");
                Theme::Light
            }),
            None if prefers_dark => Theme::Dark,
            None => Theme::Light,
        };
        tracing::debug!(theme = current.as_str(), "theme: loaded");
        Self {
            store,
            key: key.to_string(),
            current,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.flipped();
        self.store.write(&self.key, self.current.as_str());
        self.current
    }
}

/// Wires every theme toggle on the page to one shared preference.
pub struct ThemeToggleController<P, S> {
    page: Rc<P>,
    preference: Rc<RefCell<ThemePreference<S>>>,
}

impl<P, S> Clone for ThemeToggleController<P, S> {
    fn clone(&self) -> Self {
        Self {
            page: Rc::clone(&self.page),
            preference: Rc::clone(&self.preference),
        }
    }
}

impl<P, S> ThemeToggleController<P, S>
where
    P: Page + 'static,
    S: ThemeStore + 'static,
{
    pub fn new(page: Rc<P>, preference: Rc<RefCell<ThemePreference<S>>>) -> Self {
        Self { page, preference }
    }

    /// Returns how many toggle controls were found and wired.
    pub fn wire(&self) -> usize {
        let mut wired = 0;
        for toggle in MountPoint::THEME_TOGGLES {
            let controller = self.clone();
            if self.page.on_click(toggle, Box::new(move || {
                controller.toggle();
            })) {
                wired += 1;
            }
        }
        self.sync_icons();
        wired
    }

    pub fn toggle(&self) -> Theme {
        let theme = self.preference.borrow_mut().toggle();
        tracing::debug!(theme = theme.as_str(), "theme: toggled");
        self.page.apply_theme(theme);
        self.sync_icons();
        self.page.refresh_icons();
        theme
    }

    fn sync_icons(&self) {
        let icon = self.preference.borrow().current().switch_icon();
        for toggle in MountPoint::THEME_TOGGLES {
            self.page.show_theme_icon(toggle, icon);
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub struct LocalThemeStore;

#[cfg(target_arch = "wasm32")]
impl ThemeStore for LocalThemeStore {
    // Raw strings, so the inline head script can read `localStorage.theme`.
    fn read(&self, key: &str) -> Option<String> {
        use gloo_storage::{LocalStorage, Storage};
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        use gloo_storage::{LocalStorage, Storage};
        if let Err(err) = LocalStorage::raw().set_item(key, value) {
            tracing::warn!(key, error = ?err, "theme: persisting preference failed");
        }
    }
}
