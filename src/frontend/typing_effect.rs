use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use web_sys::{Document, HtmlElement};

use crate::error::DomError;
use crate::reveal::StyleTarget;
use crate::typing::{line_start_delay_ms, TypingLine, TITLE_LINE_SELECTOR, TYPING_INTERVAL_MS};

use super::dom::query_all;

pub fn install(document: &Document) -> Result<(), DomError> {
    for (index, element) in query_all::<HtmlElement>(document, TITLE_LINE_SELECTOR)
        .into_iter()
        .enumerate()
    {
        let line = TypingLine::new(&element.text_content().unwrap_or_default());
        element.set_text_content(Some(""));
        element.set_style("opacity", "1");

        let delay = line_start_delay_ms(index, line.char_count());
        Timeout::new(delay, move || type_line(element, line)).forget();
    }

    Ok(())
}

fn type_line(element: HtmlElement, mut line: TypingLine) {
    let slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let interval_slot = slot.clone();

    let interval = Interval::new(TYPING_INTERVAL_MS, move || {
        if line.next_char().is_some() {
            element.set_text_content(Some(&line.typed_text()));
        } else {
            interval_slot.borrow_mut().take();
        }
    });
    *slot.borrow_mut() = Some(interval);
}
