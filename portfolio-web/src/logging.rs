/// Maps the configured `tracing` level onto the `log` facade that
/// `console_log` listens on. `tracing` events reach it through its `log` feature.
pub fn console_level(level: tracing::Level) -> log::Level {
    if level == tracing::Level::ERROR {
        log::Level::Error
    } else if level == tracing::Level::WARN {
        log::Level::Warn
    } else if level == tracing::Level::INFO {
        log::Level::Info
    } else if level == tracing::Level::DEBUG {
        log::Level::Debug
    } else {
        log::Level::Trace
    }
}

#[cfg(target_arch = "wasm32")]
pub fn init(max_level: tracing::Level) {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(console_level(max_level)) {
        web_sys::console::warn_1(&format!("logging already initialised: {err}").into());
    }
}
