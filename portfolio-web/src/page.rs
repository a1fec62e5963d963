use crate::theme::{Theme, ThemeIcon};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MountPoint {
    Nav,
    Footer,
    Tagline,
    Joke,
    MenuButton,
    MenuPanel,
    ThemeToggleDesktop,
    ThemeToggleMobile,
}

impl MountPoint {
    pub const THEME_TOGGLES: [MountPoint; 2] =
        [MountPoint::ThemeToggleDesktop, MountPoint::ThemeToggleMobile];

    pub const fn element_id(self) -> &'static str {
        match self {
            MountPoint::Nav => "nav-placeholder",
            MountPoint::Footer => "footer-placeholder",
            MountPoint::Tagline => "typewriter",
            MountPoint::Joke => "dad-joke",
            MountPoint::MenuButton => "mobile-menu-btn",
            MountPoint::MenuPanel => "mobile-menu",
            MountPoint::ThemeToggleDesktop => "theme-toggle-desktop",
            MountPoint::ThemeToggleMobile => "theme-toggle-mobile",
        }
    }
}

/// Everything the site logic needs from the host document.
///
/// Mount-addressed calls report whether the element was there. A missing
/// mount point only disables the feature that needs it.
pub trait Page {
    fn current_path(&self) -> String;
    /// System-level dark mode signal, consulted only without a stored theme.
    fn prefers_dark(&self) -> bool;
    fn inline_config(&self) -> Option<String>;
    fn apply_theme(&self, theme: Theme);
    fn exists(&self, mount: MountPoint) -> bool;
    fn set_html(&self, mount: MountPoint, html: &str) -> bool;
    fn set_text(&self, mount: MountPoint, text: &str) -> bool;
    /// Returns the element's visibility after the flip.
    fn toggle_hidden(&self, mount: MountPoint) -> Option<bool>;
    fn set_attribute(&self, mount: MountPoint, name: &str, value: &str) -> bool;
    /// Shows `icon` and hides the other icon group inside a theme toggle.
    fn show_theme_icon(&self, toggle: MountPoint, icon: ThemeIcon) -> bool;
    fn on_click(&self, mount: MountPoint, handler: Box<dyn FnMut()>) -> bool;
    /// Asks the icon library to render placeholders; false when it is not loaded.
    fn refresh_icons(&self) -> bool;
}

/// `document.readyState` before the parser has finished; boot waits for
/// `DOMContentLoaded` in that case.
pub fn is_still_parsing(ready_state: &str) -> bool {
    ready_state == "loading"
}
