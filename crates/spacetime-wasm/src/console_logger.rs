use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

/// Forwards `log` records from the core crate to the browser console.
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

const MAX_LEVEL: LevelFilter = LevelFilter::Info;

fn format_record(level: Level, target: &str, args: &std::fmt::Arguments) -> String {
    format!("[{level} {target}] {args}")
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= MAX_LEVEL
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_record(record.level(), record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Installs the console logger. Safe to call more than once; a logger that is
/// already set is left in place.
pub fn init() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(MAX_LEVEL);
    }
}
