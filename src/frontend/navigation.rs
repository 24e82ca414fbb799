use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, Node, Window};

use crate::error::DomError;
use crate::nav::{
    link_targets_section, ActiveLinkHighlighter, NavController, NavEvent, NavView, SectionBounds,
    SectionView,
};
use crate::timer::{BrowserScheduler, Debouncer};

use super::dom::{element_by_id, query_all, query_all_in, query_one, scroll_y};

const ACTIVE_CLASS: &str = "active";
const NAV_LINK_SELECTOR: &str = ".nav-link";
const MENU_FOCUSABLE_SELECTOR: &str = "a, button";

struct DomNavView {
    document: Document,
    hamburger: Element,
    menu: Element,
}

impl DomNavView {
    fn focusables(&self) -> Vec<HtmlElement> {
        query_all_in(&self.menu, MENU_FOCUSABLE_SELECTOR)
    }
}

impl NavView for DomNavView {
    fn set_menu_open(&self, open: bool) {
        let _ = self.hamburger.class_list().toggle_with_force(ACTIVE_CLASS, open);
        let _ = self.menu.class_list().toggle_with_force(ACTIVE_CLASS, open);
    }

    fn focusable_count(&self) -> usize {
        self.focusables().len()
    }

    fn focused_index(&self) -> Option<usize> {
        let active = self.document.active_element()?;
        let active: &Node = &active;
        self.focusables()
            .iter()
            .position(|element| element.is_same_node(Some(active)))
    }

    fn focus(&self, index: usize) {
        if let Some(element) = self.focusables().get(index) {
            let _ = element.focus();
        }
    }
}

pub fn install(document: &Document) -> Result<(), DomError> {
    let hamburger = element_by_id::<Element>(document, "hamburger")?;
    let menu = query_one::<Element>(document, ".nav-menu")?;
    let controller = Rc::new(NavController::new(DomNavView {
        document: document.clone(),
        hamburger: hamburger.clone(),
        menu: menu.clone(),
    }));

    {
        let controller = controller.clone();
        EventListener::new(&hamburger, "click", move |_| {
            controller.dispatch(NavEvent::HamburgerClick);
        })
        .forget();
    }

    for link in query_all::<Element>(document, NAV_LINK_SELECTOR) {
        let controller = controller.clone();
        EventListener::new(&link, "click", move |_| {
            controller.dispatch(NavEvent::LinkClick);
        })
        .forget();
    }

    {
        let controller = controller.clone();
        EventListener::new(document, "keydown", move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                if event.key() == "Escape" {
                    controller.dispatch(NavEvent::Escape);
                }
            }
        })
        .forget();
    }

    EventListener::new_with_options(
        &menu,
        "keydown",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                if controller.trap_focus(&event.key(), event.shift_key()) {
                    event.prevent_default();
                }
            }
        },
    )
    .forget();

    Ok(())
}

struct DomSectionView {
    window: Window,
    document: Document,
}

impl SectionView for DomSectionView {
    fn scroll_y(&self) -> f64 {
        scroll_y(&self.window)
    }

    fn sections(&self) -> Vec<SectionBounds> {
        query_all::<HtmlElement>(&self.document, "section[id]")
            .into_iter()
            .map(|section| SectionBounds {
                id: section.id(),
                offset_top: f64::from(section.offset_top()),
                height: f64::from(section.offset_height()),
            })
            .collect()
    }

    fn mark_active(&self, section_id: &str) {
        for link in query_all::<Element>(&self.document, NAV_LINK_SELECTOR) {
            let _ = link.class_list().remove_1(ACTIVE_CLASS);
            let targets = link
                .get_attribute("href")
                .is_some_and(|href| link_targets_section(&href, section_id));
            if targets {
                let _ = link.class_list().add_1(ACTIVE_CLASS);
            }
        }
    }
}

pub fn install_active_link(window: &Window, document: &Document, debounce_ms: u32) -> Result<(), DomError> {
    let highlighter = Rc::new(ActiveLinkHighlighter::new(DomSectionView {
        window: window.clone(),
        document: document.clone(),
    }));
    highlighter.refresh();

    let debouncer = Debouncer::new(BrowserScheduler, debounce_ms);
    EventListener::new(window, "scroll", move |_| {
        let highlighter = highlighter.clone();
        debouncer.call(move || highlighter.refresh());
    })
    .forget();

    Ok(())
}
