use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::anchor::{follow_anchor, AnchorView, ANCHOR_SELECTOR};
use crate::error::DomError;

use super::dom::query_all;

struct DomAnchorView {
    window: Window,
    document: Document,
}

impl AnchorView for DomAnchorView {
    fn offset_top_of(&self, id: &str) -> Option<f64> {
        let target = self.document.get_element_by_id(id)?;
        let target = target.dyn_into::<HtmlElement>().ok()?;
        Some(f64::from(target.offset_top()))
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn install(window: &Window, document: &Document) -> Result<(), DomError> {
    let view = Rc::new(DomAnchorView {
        window: window.clone(),
        document: document.clone(),
    });

    for anchor in query_all::<Element>(document, ANCHOR_SELECTOR) {
        let view = view.clone();
        let link = anchor.clone();
        EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                if let Some(href) = link.get_attribute("href") {
                    follow_anchor(view.as_ref(), &href);
                }
            },
        )
        .forget();
    }

    Ok(())
}
