use std::cell::RefCell;
use std::rc::Rc;

use rand::Rng;

use crate::config::SiteConfig;
use crate::jokes;
use crate::markup;
use crate::page::{MountPoint, Page};
use crate::theme::{Theme, ThemePreference, ThemeStore, ThemeToggleController};
use crate::typewriter::{self, Scheduler, Typewriter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BootReport {
    pub theme: Theme,
    pub nav: bool,
    pub footer: bool,
    pub menu: bool,
    pub theme_toggles: usize,
    pub joke: Option<String>,
    pub icons: bool,
    pub typewriter: bool,
}

/// Runs once per page load. Icon refresh has to follow injection, and the
/// theme flag has to precede it.
pub fn boot<P, S, C, R>(
    page: Rc<P>,
    store: S,
    scheduler: Rc<C>,
    rng: &mut R,
    config: &SiteConfig,
) -> BootReport
where
    P: Page + 'static,
    S: ThemeStore + 'static,
    C: Scheduler + 'static,
    R: Rng,
{
    let preference = ThemePreference::load(store, &config.storage_key, page.prefers_dark());
    let theme = preference.current();
    page.apply_theme(theme);

    let path = page.current_path();
    let chrome = markup::render(config, &path, theme);
    let (nav, footer) = markup::mount(page.as_ref(), &chrome);

    let menu = wire_menu(&page);

    let controller = ThemeToggleController::new(Rc::clone(&page), Rc::new(RefCell::new(preference)));
    let theme_toggles = controller.wire();

    let joke = jokes::show(page.as_ref(), &config.jokes, rng);

    let icons = page.refresh_icons();

    let typewriter = page.exists(MountPoint::Tagline)
        && match Typewriter::new(config.phrases.clone(), config.timing) {
            Ok(engine) => {
                typewriter::start(engine, Rc::clone(&page), scheduler);
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "bootstrap: typewriter not started");
                false
            }
        };

    let report = BootReport {
        theme,
        nav,
        footer,
        menu,
        theme_toggles,
        joke,
        icons,
        typewriter,
    };
    tracing::debug!(
        path = %path,
        theme = theme.as_str(),
        nav,
        footer,
        menu,
        theme_toggles,
        joke = report.joke.is_some(),
        icons,
        typewriter,
        "bootstrap: page ready"
    );
    report
}

/// The panel only closes through the button, never on outside clicks.
fn wire_menu<P: Page + 'static>(page: &Rc<P>) -> bool {
    if !page.exists(MountPoint::MenuButton) || !page.exists(MountPoint::MenuPanel) {
        return false;
    }
    let target = Rc::clone(page);
    page.on_click(
        MountPoint::MenuButton,
        Box::new(move || {
            if let Some(visible) = target.toggle_hidden(MountPoint::MenuPanel) {
                let expanded = if visible { "true" } else { "false" };
                target.set_attribute(MountPoint::MenuButton, "aria-expanded", expanded);
            }
        }),
    )
}
