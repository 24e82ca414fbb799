use std::cell::Cell;
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
                LogLevel::Warn => 2,
                LogLevel::Error => 3,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    fn as_log_level(self) -> log::Level {
        match self {
            Self::Debug => log::Level::Debug,
            Self::Info => log::Level::Info,
            Self::Warn => log::Level::Warn,
            Self::Error => log::Level::Error,
        }
    }
}

thread_local! {
    static MIN_LEVEL: Cell<LogLevel> = const { Cell::new(LogLevel::Info) };
}

pub fn set_min_level(level: LogLevel) {
    MIN_LEVEL.with(|slot| slot.set(level));
}

#[cfg(target_arch = "wasm32")]
pub fn init(level: LogLevel) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(level.as_log_level());
    set_min_level(level);
}

pub fn format_event(level: LogLevel, event: &str, fields: serde_json::Value) -> String {
    let mut payload = serde_json::Map::new();
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    serde_json::Value::Object(payload).to_string()
}

pub fn log_event(level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < MIN_LEVEL.with(Cell::get) {
        return;
    }

    log::log!(level.as_log_level(), "{}", format_event(level, event, fields));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn level_names_parse_case_insensitively() {
        assert_eq!(LogLevel::from_str("DEBUG"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::from_str("warning"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::from_str("verbose"), None);
    }

    #[test]
    fn formatted_event_merges_extra_fields() {
        let line = format_event(LogLevel::Warn, "contact_submit_finished", json!({ "status": 500 }));
        let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid JSON");

        assert_eq!(parsed["level"], "warn");
        assert_eq!(parsed["event"], "contact_submit_finished");
        assert_eq!(parsed["status"], 500);
    }

    #[test]
    fn non_object_fields_are_ignored() {
        let line = format_event(LogLevel::Info, "controller_started", json!("ignored"));
        let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid JSON");

        assert_eq!(parsed.as_object().map(|map| map.len()), Some(2));
    }
}
