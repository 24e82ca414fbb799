mod anchors;
mod browser;
mod contact_form;
mod dom;
mod navigation;
mod pointer_effects;
mod reveal_observer;
mod scroll_effects;
mod theme_toggle;
mod typing_effect;

use serde_json::json;
use web_sys::{window, Document};

use crate::config::ControllerConfig;
use crate::error::DomError;
use crate::logging::{self, log_event, LogLevel};

fn report_install(component: &str, result: Result<(), DomError>) {
    match result {
        Ok(()) => log_event(LogLevel::Debug, "component_installed", json!({ "component": component })),
        Err(error) => log_event(
            LogLevel::Warn,
            "component_install_failed",
            json!({ "component": component, "error": error.to_string() }),
        ),
    }
}

fn mark_loaded(document: &Document) -> Result<(), DomError> {
    let body = document.body().ok_or_else(|| DomError::missing("body"))?;
    body.class_list().add_1("loaded")?;
    Ok(())
}

pub fn run() {
    let config = ControllerConfig::from_build_env();
    logging::init(config.log_level);

    let Some(window) = window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    log_event(
        LogLevel::Info,
        "controller_started",
        json!({
            "form_endpoint": config.form_endpoint.as_str(),
            "scroll_debounce_ms": config.scroll_debounce_ms,
            "typing_effect": config.typing_effect,
        }),
    );

    report_install("theme", theme_toggle::install(&document));
    report_install("navigation", navigation::install(&document));
    report_install(
        "active_link",
        navigation::install_active_link(&window, &document, config.scroll_debounce_ms),
    );
    report_install("navbar_shadow", scroll_effects::install_navbar_shadow(&window, &document));
    report_install("stat_counters", scroll_effects::install_stat_counters(&window, &document));
    report_install("reveal", reveal_observer::install(&document));
    report_install("anchors", anchors::install(&window, &document));
    report_install("contact_form", contact_form::install(&document, &config));
    report_install("parallax", pointer_effects::install_parallax(&window, &document));
    if config.typing_effect {
        report_install("typing_effect", typing_effect::install(&document));
    }
    report_install("tag_hover", pointer_effects::install_tag_hover(&document));
    report_install("tilt", pointer_effects::install_tilt(&document));
    report_install("progress_bar", scroll_effects::install_progress_bar(&window, &document));
    report_install("reduced_motion", reveal_observer::apply_reduced_motion(&window, &document));
    report_install("loaded", mark_loaded(&document));

    log_event(
        LogLevel::Info,
        "developer_greeting",
        json!({ "message": "Hello developer! Looking at the code? Feel free to reach out." }),
    );
}
