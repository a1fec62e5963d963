pub mod bootstrap;
pub mod config;
mod content;
pub mod error;
pub mod jokes;
pub mod links;
pub mod logging;
pub mod markup;
pub mod page;
pub mod theme;
pub mod typewriter;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use bootstrap::{boot, BootReport};
pub use config::SiteConfig;
pub use error::SiteError;
pub use page::{MountPoint, Page};
pub use theme::{Theme, ThemeIcon, ThemeStore};
pub use typewriter::{Scheduler, Typewriter};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    web::run();
}
