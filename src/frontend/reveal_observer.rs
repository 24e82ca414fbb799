use serde_json::json;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Window,
};

use crate::error::DomError;
use crate::logging::{log_event, LogLevel};
use crate::reveal::{
    disable_motion, prepare_hidden, reveal_if_intersecting, REDUCED_MOTION_QUERY, REVEAL_ROOT_MARGIN,
    REVEAL_SELECTOR, REVEAL_THRESHOLD,
};

use super::dom::query_all;

pub fn install(document: &Document) -> Result<(), DomError> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                reveal_if_intersecting(&entry.target(), entry.is_intersecting());
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for target in query_all::<HtmlElement>(document, REVEAL_SELECTOR) {
        prepare_hidden(&target);
        observer.observe(&target);
    }

    Ok(())
}

pub fn apply_reduced_motion(window: &Window, document: &Document) -> Result<(), DomError> {
    let reduced = window
        .match_media(REDUCED_MOTION_QUERY)?
        .map(|query| query.matches())
        .unwrap_or(false);
    if !reduced {
        return Ok(());
    }

    let elements = query_all::<Element>(document, "*");
    let count = disable_motion(elements.iter());
    log_event(LogLevel::Info, "reduced_motion_applied", json!({ "elements": count }));

    Ok(())
}
