use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use serde_json::json;
use web_sys::{Document, HtmlElement, Window};

use crate::error::DomError;
use crate::logging::{log_event, LogLevel};
use crate::reveal::StyleTarget;
use crate::scroll::{
    navbar_shadow, parse_counter_target, progress_width, scroll_progress_percent, CounterAnimation,
    StatsTrigger, PROGRESS_BAR_STYLE,
};

use super::dom::{query_all, query_one, scroll_y, viewport};

pub fn install_navbar_shadow(window: &Window, document: &Document) -> Result<(), DomError> {
    let navbar = query_one::<HtmlElement>(document, ".navbar")?;
    let window_handle = window.clone();

    EventListener::new(window, "scroll", move |_| {
        navbar.set_style("box-shadow", navbar_shadow(scroll_y(&window_handle)));
    })
    .forget();

    Ok(())
}

pub fn install_progress_bar(window: &Window, document: &Document) -> Result<(), DomError> {
    let body = document.body().ok_or_else(|| DomError::missing("body"))?;
    let bar = document.create_element("div")?;
    bar.set_attribute("style", PROGRESS_BAR_STYLE)?;
    body.append_child(&bar)?;

    let window_handle = window.clone();
    let document = document.clone();
    EventListener::new(window, "scroll", move |_| {
        let Some(root) = document.document_element() else {
            return;
        };
        let percent = scroll_progress_percent(
            scroll_y(&window_handle),
            f64::from(root.scroll_height()),
            f64::from(root.client_height()),
        );
        bar.set_style("width", &progress_width(percent));
    })
    .forget();

    Ok(())
}

pub fn install_stat_counters(window: &Window, document: &Document) -> Result<(), DomError> {
    let section = query_one::<HtmlElement>(document, ".about-stats")?;
    let stats = query_all::<HtmlElement>(document, ".stat-number");
    let trigger = Cell::new(StatsTrigger::default());
    let window_handle = window.clone();

    EventListener::new(window, "scroll", move |_| {
        let viewport_height = viewport(&window_handle).height;

        let mut state = trigger.get();
        let fired = state.check(
            scroll_y(&window_handle),
            viewport_height,
            f64::from(section.offset_top()),
            f64::from(section.offset_height()),
        );
        trigger.set(state);

        if fired {
            log_event(LogLevel::Debug, "stats_triggered", json!({ "counters": stats.len() }));
            for stat in &stats {
                let target = parse_counter_target(stat.get_attribute("data-target").as_deref());
                animate_counter(stat.clone(), target);
            }
        }
    })
    .forget();

    Ok(())
}

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

fn animate_counter(element: HtmlElement, target: i64) {
    let animation = Rc::new(RefCell::new(CounterAnimation::new(target)));
    step_counter(element, animation, Rc::new(RefCell::new(None)));
}

fn step_counter(element: HtmlElement, animation: Rc<RefCell<CounterAnimation>>, slot: FrameSlot) {
    let frame = animation.borrow_mut().step();
    element.set_text_content(Some(&frame.text()));

    if frame.is_finished() {
        slot.borrow_mut().take();
        return;
    }

    let next_slot = slot.clone();
    let handle = request_animation_frame(move |_| step_counter(element, animation, next_slot));
    *slot.borrow_mut() = Some(handle);
}
