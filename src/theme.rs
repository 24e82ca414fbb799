use std::rc::Rc;

use serde_json::json;

use crate::error::DomError;
use crate::logging::{log_event, LogLevel};
use crate::timer::{Scheduler, TimerSlot};

pub const THEME_KEY: &str = "theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";
const TOGGLE_SPIN_MS: u32 = 400;
pub const TOGGLE_SPIN_TRANSFORM: &str = "rotate(360deg)";
pub const TOGGLE_REST_TRANSFORM: &str = "rotate(0deg)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }
}

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), DomError>;
}

pub trait ThemeView {
    fn applied_theme(&self) -> Option<String>;
    fn apply(&self, theme: Theme);
    fn set_toggle_transform(&self, transform: &str);
}

pub struct ThemeManager<P: PreferenceStore, V: ThemeView, S: Scheduler> {
    store: P,
    view: Rc<V>,
    spin: TimerSlot<S>,
}

impl<P: PreferenceStore, V: ThemeView + 'static, S: Scheduler> ThemeManager<P, V, S> {
    pub fn new(store: P, view: Rc<V>, scheduler: S) -> Self {
        Self {
            store,
            view,
            spin: TimerSlot::new(scheduler),
        }
    }

    pub fn load(&self) -> Theme {
        let theme = self
            .store
            .get(THEME_KEY)
            .as_deref()
            .and_then(Theme::from_str)
            .unwrap_or(Theme::Dark);
        self.view.apply(theme);
        theme
    }

    pub fn toggle(&self) -> Theme {
        let current = self
            .view
            .applied_theme()
            .as_deref()
            .and_then(Theme::from_str)
            .unwrap_or(Theme::Light);
        let next = current.toggled();

        self.view.apply(next);
        if let Err(error) = self.store.set(THEME_KEY, next.as_str()) {
            log_event(
                LogLevel::Debug,
                "preference_write_failed",
                json!({ "key": THEME_KEY, "error": error.to_string() }),
            );
        }
        log_event(LogLevel::Debug, "theme_changed", json!({ "theme": next.as_str() }));

        self.view.set_toggle_transform(TOGGLE_SPIN_TRANSFORM);
        let view = self.view.clone();
        self.spin.replace(TOGGLE_SPIN_MS, move || {
            view.set_toggle_transform(TOGGLE_REST_TRANSFORM);
        });

        next
    }
}
