use std::cell::Cell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, FormData, HtmlButtonElement, HtmlFormElement};

use crate::config::ControllerConfig;
use crate::contact::{
    FormPayload, FormView, SubmitController, SubmitSettings, CHECK_MARKUP, SENDING_LABEL, SENT_LABEL,
    SPINNER_MARKUP, SPIN_KEYFRAMES,
};
use crate::error::DomError;
use crate::timer::BrowserScheduler;

use super::browser::RelayTransport;
use super::dom::element_by_id;

const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"]";

struct DomFormView {
    document: Document,
    form: HtmlFormElement,
    button: HtmlButtonElement,
    keyframes_injected: Cell<bool>,
}

impl DomFormView {
    fn inject_spin_keyframes(&self) {
        if self.keyframes_injected.replace(true) {
            return;
        }

        let Some(head) = self.document.head() else {
            return;
        };
        if let Ok(style) = self.document.create_element("style") {
            style.set_text_content(Some(SPIN_KEYFRAMES));
            let _ = head.append_child(&style);
        }
    }
}

impl FormView for DomFormView {
    fn button_label(&self) -> String {
        self.button.inner_html()
    }

    fn collect_fields(&self) -> FormPayload {
        let Ok(form_data) = FormData::new_with_form(&self.form) else {
            return FormPayload::default();
        };
        let Ok(Some(entries)) = js_sys::try_iter(&form_data) else {
            return FormPayload::default();
        };

        entries
            .filter_map(Result::ok)
            .filter_map(|entry| entry.dyn_into::<js_sys::Array>().ok())
            .filter_map(|entry| Some((entry.get(0).as_string()?, entry.get(1).as_string()?)))
            .collect()
    }

    fn show_sending(&self) {
        self.inject_spin_keyframes();
        self.button.set_inner_html(&format!("{SPINNER_MARKUP} {SENDING_LABEL}"));
        self.button.set_disabled(true);
    }

    fn show_success(&self) {
        self.button.set_inner_html(&format!("{CHECK_MARKUP} {SENT_LABEL}"));
    }

    fn show_error(&self, label: &str) {
        self.button.set_inner_html(label);
    }

    fn clear_fields(&self) {
        self.form.reset();
    }

    fn restore_button(&self, label: &str) {
        self.button.set_inner_html(label);
        self.button.set_disabled(false);
    }
}

pub fn install(document: &Document, config: &ControllerConfig) -> Result<(), DomError> {
    let form = element_by_id::<HtmlFormElement>(document, "contactForm")?;
    let button = form
        .query_selector(SUBMIT_BUTTON_SELECTOR)?
        .ok_or_else(|| DomError::missing(SUBMIT_BUTTON_SELECTOR))?
        .dyn_into::<HtmlButtonElement>()
        .map_err(|_| DomError::wrong_type(SUBMIT_BUTTON_SELECTOR))?;

    let view = Rc::new(DomFormView {
        document: document.clone(),
        form: form.clone(),
        button,
        keyframes_injected: Cell::new(false),
    });
    let controller = Rc::new(SubmitController::new(
        view,
        RelayTransport,
        BrowserScheduler,
        SubmitSettings {
            endpoint: config.form_endpoint.clone(),
            access_key: config.form_access_key.clone(),
            restore_ms: config.form_restore_ms,
        },
    ));

    EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            let controller = controller.clone();
            spawn_local(async move {
                controller.submit().await;
            });
        },
    )
    .forget();

    Ok(())
}
