use std::rc::Rc;

use gloo_events::EventListener;
use web_sys::{Document, Element, HtmlElement};

use crate::error::DomError;
use crate::reveal::StyleTarget;
use crate::theme::{Theme, ThemeManager, ThemeView, THEME_ATTRIBUTE};
use crate::timer::BrowserScheduler;

use super::browser::LocalPreferenceStore;
use super::dom::element_by_id;

struct DomThemeView {
    root: Element,
    toggle: Option<HtmlElement>,
}

impl ThemeView for DomThemeView {
    fn applied_theme(&self) -> Option<String> {
        self.root.get_attribute(THEME_ATTRIBUTE)
    }

    fn apply(&self, theme: Theme) {
        let _ = self.root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
        if let Some(toggle) = self.toggle.as_ref() {
            let _ = toggle.set_attribute("aria-label", &theme.toggle_label());
        }
    }

    fn set_toggle_transform(&self, transform: &str) {
        if let Some(toggle) = self.toggle.as_ref() {
            toggle.set_style("transform", transform);
        }
    }
}

pub fn install(document: &Document) -> Result<(), DomError> {
    let root = document
        .document_element()
        .ok_or_else(|| DomError::missing("html"))?;
    let toggle = element_by_id::<HtmlElement>(document, "themeToggle");

    let view = Rc::new(DomThemeView {
        root,
        toggle: toggle.as_ref().ok().cloned(),
    });
    let manager = Rc::new(ThemeManager::new(LocalPreferenceStore, view, BrowserScheduler));
    manager.load();

    let toggle = toggle?;
    EventListener::new(&toggle, "click", move |_| {
        manager.toggle();
    })
    .forget();

    Ok(())
}
