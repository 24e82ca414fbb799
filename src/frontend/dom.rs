use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList, SvgElement, Window};

use crate::error::DomError;
use crate::pointer::Viewport;
use crate::reveal::StyleTarget;

pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, DomError> {
    let selector = format!("#{id}");
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::missing(&selector))?
        .dyn_into::<T>()
        .map_err(|_| DomError::wrong_type(&selector))
}

pub fn query_one<T: JsCast>(document: &Document, selector: &str) -> Result<T, DomError> {
    document
        .query_selector(selector)?
        .ok_or_else(|| DomError::missing(selector))?
        .dyn_into::<T>()
        .map_err(|_| DomError::wrong_type(selector))
}

pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    document
        .query_selector_all(selector)
        .map(|nodes| collect_nodes(&nodes))
        .unwrap_or_default()
}

pub fn query_all_in<T: JsCast>(root: &Element, selector: &str) -> Vec<T> {
    root.query_selector_all(selector)
        .map(|nodes| collect_nodes(&nodes))
        .unwrap_or_default()
}

fn collect_nodes<T: JsCast>(nodes: &NodeList) -> Vec<T> {
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub fn viewport(window: &Window) -> Viewport {
    Viewport::from_inner(
        window.inner_width().ok().and_then(|value| value.as_f64()),
        window.inner_height().ok().and_then(|value| value.as_f64()),
    )
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn js_error_text(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl StyleTarget for HtmlElement {
    fn set_style(&self, property: &str, value: &str) {
        let _ = self.style().set_property(property, value);
    }
}

impl StyleTarget for Element {
    fn set_style(&self, property: &str, value: &str) {
        if let Some(element) = self.dyn_ref::<HtmlElement>() {
            element.set_style(property, value);
        } else if let Some(element) = self.dyn_ref::<SvgElement>() {
            let _ = element.style().set_property(property, value);
        }
    }
}
