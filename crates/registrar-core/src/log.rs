use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::cell::Cell;

///
/// Level
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug, // least severe
    Info,
    Ok,
    Warn,
    Error, // most severe
}

///
/// Topic
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[remain::sorted]
pub enum Topic {
    Access,
    Config,
    Init,
    Record,
}

// minimum level emitted; raised or lowered from config at init
thread_local! {
    static MIN_LEVEL: Cell<Level> = const { Cell::new(Level::Info) };
}

/// Set the minimum level that `log!` emits.
pub fn set_min_level(level: Level) {
    MIN_LEVEL.with(|min| min.set(level));
}

#[must_use]
pub fn min_level() -> Level {
    MIN_LEVEL.with(Cell::get)
}

#[must_use]
pub fn enabled(level: Level) -> bool {
    level >= min_level()
}

#[macro_export]
macro_rules! log {
    // =========================================
    // INTERNAL
    // =========================================
    (@inner $topic:expr, $level:expr, $fmt:expr $(, $arg:expr)*) => {{
        let level = $level;

        if $crate::log::enabled(level) {
            let topic: Option<$crate::log::Topic> = $topic;
            let message = format!($fmt $(, $arg)*);

            $crate::log::__emit(env!("CARGO_PKG_NAME"), topic, level, &message);
        }
    }};

    // =========================================
    // (1) With topic (normal + trailing comma)
    // =========================================
    ($topic:expr, $level:ident, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        $crate::log!(@inner Some($topic), $crate::log::Level::$level, $fmt $(, $arg)*);
    }};

    // =========================================
    // (2) No topic (normal + trailing comma)
    // =========================================
    ($level:ident, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        $crate::log!(@inner None, $crate::log::Level::$level, $fmt $(, $arg)*);
    }};
}

///
/// Helpers
///

#[doc(hidden)]
pub fn __emit(crate_name: &str, topic: Option<Topic>, level: Level, message: &str) {
    let line = format_line(crate_name, topic, level, message);

    #[cfg(target_arch = "wasm32")]
    crate::cdk::println!("{line}");

    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{line}");
}

fn format_line(crate_name: &str, topic: Option<Topic>, level: Level, message: &str) -> String {
    let (color, reset) = match level {
        Level::Ok => ("\x1b[32m", "\x1b[0m"),
        Level::Info => ("\x1b[34m", "\x1b[0m"),
        Level::Warn => ("\x1b[33m", "\x1b[0m"),
        Level::Error => ("\x1b[31m", "\x1b[0m"),
        Level::Debug => ("", ""),
    };

    let label = format!("{color}{:^5}{reset}", level.to_string().to_uppercase());
    let message = match topic {
        Some(t) => format!("[{t}] {message}"),
        None => message.to_string(),
    };

    format!("{label}|{crate_name:^16}| {message}")
}

///
/// TESTS
///
