//! `log` backend for the engine.
//!
//! On wasm32 records go to the browser console with the matching severity;
//! native builds (tests, tools) use `env_logger`, so `RUST_LOG` still
//! overrides the level there. Installed once by `crate::init`.

use log::LevelFilter;

#[cfg(target_arch = "wasm32")]
mod console {
    use log::{Level, Log, Metadata, Record};

    pub(super) static LOGGER: ConsoleLogger = ConsoleLogger;

    pub(super) struct ConsoleLogger;

    impl Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record) {
            if !self.enabled(record.metadata()) {
                return;
            }
            let line = format!("[{}] {}: {}", record.level(), record.target(), record.args());
            let value = wasm_bindgen::JsValue::from_str(&line);
            match record.level() {
                Level::Error => web_sys::console::error_1(&value),
                Level::Warn => web_sys::console::warn_1(&value),
                Level::Info => web_sys::console::info_1(&value),
                Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
            }
        }

        fn flush(&self) {}
    }
}

/// Install the logger. Safe to call more than once; later calls only
/// adjust the level filter.
#[cfg(target_arch = "wasm32")]
pub fn init_logger(level: LevelFilter) {
    // A logger may already be set by the host (or by an earlier call).
    let _ = log::set_logger(&console::LOGGER);
    log::set_max_level(level);
}

/// Install the logger. Safe to call more than once; later calls only
/// adjust the level filter.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logger(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
    log::set_max_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logger_is_idempotent() {
        init_logger(LevelFilter::Warn);
        init_logger(LevelFilter::Info);
        assert_eq!(log::max_level(), LevelFilter::Info);
        log::info!("logger installed");
    }
}
