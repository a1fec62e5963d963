use std::fmt::Write;

use crate::config::{NavEntry, NavTarget, SiteConfig};
use crate::links::{is_current_page, resolve};
use crate::page::{MountPoint, Page};
use crate::theme::{Theme, ThemeIcon};

const LINK_BASE: &str = "transition-colors px-3 py-2 rounded-md text-sm font-medium";
const LINK_IDLE: &str = "text-slate-600 dark:text-slate-300 hover:text-brand-accent";
const LINK_ACTIVE: &str = "text-brand-accent font-bold";
const MOBILE_LINK: &str = "text-slate-600 dark:text-slate-300 hover:text-brand-accent hover:bg-slate-50 dark:hover:bg-slate-800 block px-3 py-2 rounded-md text-base font-medium";
const TOGGLE_CLASS: &str = "p-2 rounded-lg text-slate-500 hover:bg-slate-100 dark:text-slate-400 dark:hover:bg-slate-800 transition-all";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chrome {
    pub nav: String,
    pub footer: String,
}

pub fn render(config: &SiteConfig, path: &str, theme: Theme) -> Chrome {
    Chrome {
        nav: render_nav(config, path, theme),
        footer: render_footer(config),
    }
}

/// Returns `(nav_mounted, footer_mounted)`.
pub fn mount<P: Page>(page: &P, chrome: &Chrome) -> (bool, bool) {
    let nav = page.set_html(MountPoint::Nav, &chrome.nav);
    let footer = page.set_html(MountPoint::Footer, &chrome.footer);
    (nav, footer)
}

struct ResolvedEntry<'a> {
    label: &'a str,
    href: String,
    active: bool,
}

fn resolve_entries<'a>(config: &'a SiteConfig, path: &str) -> Vec<ResolvedEntry<'a>> {
    config
        .nav
        .iter()
        .map(|NavEntry { label, target }| match target {
            NavTarget::Section(anchor) => ResolvedEntry {
                label,
                href: resolve(anchor, path, &config.home_page),
                active: false,
            },
            NavTarget::Page(file) => ResolvedEntry {
                label,
                href: file.clone(),
                active: is_current_page(path, file),
            },
        })
        .collect()
}

fn render_logo(config: &SiteConfig) -> String {
    format!(
        r#"<a href="{home}" class="font-mono text-xl font-bold text-slate-900 dark:text-white tracking-tighter"><span class="text-brand-accent">&lt;</span>{name}<span class="text-brand-accent">/&gt;</span></a>"#,
        home = escape(&config.home_page),
        name = escape(&config.brand.name),
    )
}

fn render_toggle(id: &str, extra_class: &str, theme: Theme) -> String {
    let shown = theme.switch_icon();
    let mut html = format!(
        r#"<button id="{id}" type="button" class="{TOGGLE_CLASS}{extra_class}" aria-label="Toggle Dark Mode">"#
    );
    for icon in [ThemeIcon::Moon, ThemeIcon::Sun] {
        let hidden = if icon == shown { "" } else { " hidden" };
        let name = icon.as_str();
        let _ = write!(
            html,
            r#"<span data-theme-icon="{name}" class="inline-block{hidden}"><i data-lucide="{name}" class="w-5 h-5"></i></span>"#
        );
    }
    html.push_str("</button>");
    html
}

fn render_nav(config: &SiteConfig, path: &str, theme: Theme) -> String {
    let entries = resolve_entries(config, path);

    let mut desktop = String::new();
    let mut mobile = String::new();
    for entry in &entries {
        let state = if entry.active { LINK_ACTIVE } else { LINK_IDLE };
        let current = if entry.active { r#" aria-current="page""# } else { "" };
        let href = escape(&entry.href);
        let label = escape(entry.label);
        let _ = write!(
            desktop,
            r#"<a href="{href}" class="{state} {LINK_BASE}"{current}>{label}</a>"#
        );
        let _ = write!(
            mobile,
            r#"<a href="{href}" class="{MOBILE_LINK}"{current}>{label}</a>"#
        );
    }

    format!(
        r#"<nav class="fixed w-full z-50 bg-white/90 dark:bg-brand-dark/90 backdrop-blur-md border-b border-slate-200 dark:border-white/10 transition-colors duration-300">
<div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8"><div class="flex items-center justify-between h-16">
<div class="flex-shrink-0">{logo}</div>
<div class="hidden md:flex items-center gap-4"><div class="ml-10 flex items-baseline space-x-4">{desktop}</div>{desktop_toggle}</div>
<div class="flex items-center md:hidden gap-2">{mobile_toggle}<button id="{menu_button}" type="button" class="inline-flex items-center justify-center p-2 rounded-md text-slate-600 dark:text-slate-400 hover:text-brand-accent hover:bg-slate-100 dark:hover:bg-slate-800 focus:outline-none" aria-controls="{menu_panel}" aria-expanded="false" aria-label="Open menu"><i data-lucide="menu"></i></button></div>
</div></div>
<div id="{menu_panel}" class="hidden md:hidden bg-white dark:bg-brand-dark border-b border-slate-200 dark:border-white/10"><div class="px-2 pt-2 pb-3 space-y-1 sm:px-3">{mobile}</div></div>
</nav>"#,
        logo = render_logo(config),
        desktop_toggle = render_toggle(MountPoint::ThemeToggleDesktop.element_id(), " ml-4", theme),
        mobile_toggle = render_toggle(MountPoint::ThemeToggleMobile.element_id(), "", theme),
        menu_button = MountPoint::MenuButton.element_id(),
        menu_panel = MountPoint::MenuPanel.element_id(),
    )
}

fn render_footer(config: &SiteConfig) -> String {
    let mut social = String::new();
    for link in &config.social {
        let _ = write!(
            social,
            r#"<a href="{href}" class="text-slate-400 hover:text-brand-accent dark:hover:text-white transition-colors"><span class="sr-only">{label}</span><i data-lucide="{icon}" class="w-6 h-6"></i></a>"#,
            href = escape(&link.href),
            label = escape(&link.label),
            icon = escape(&link.icon),
        );
    }

    format!(
        r#"<footer class="bg-slate-50 dark:bg-brand-dark border-t border-slate-200 dark:border-slate-800 pt-16 pb-8 transition-colors duration-300">
<div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
<div class="flex flex-col md:flex-row justify-between items-center mb-8"><div class="mb-6 md:mb-0">{logo}<p class="text-slate-500 text-sm mt-2">{tagline}</p></div><div class="flex space-x-6">{social}</div></div>
<div class="border-t border-slate-200 dark:border-slate-800 pt-8 flex flex-col md:flex-row justify-between items-center text-sm text-slate-600"><p>{copyright}</p><div class="mt-4 md:mt-0 font-mono text-xs flex items-center"><span class="text-brand-terminal mr-2">&#x279C;</span><span id="{joke}" class="italic">{placeholder}</span></div></div>
</div>
</footer>"#,
        logo = render_logo(config),
        tagline = escape(&config.brand.tagline),
        copyright = escape(&config.brand.copyright),
        joke = MountPoint::Joke.element_id(),
        placeholder = escape(&config.joke_placeholder),
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
