use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent, Window};

use crate::error::DomError;
use crate::pointer::{
    floating_card_offset, orb_offset, tag_transform, tilt_angles, tilt_transform, translate_transform,
    CardRect, TILT_REST_TRANSFORM,
};
use crate::reveal::StyleTarget;

use super::dom::{query_all, viewport};

pub fn install_parallax(window: &Window, document: &Document) -> Result<(), DomError> {
    let cards = query_all::<HtmlElement>(document, ".floating-card");
    let orbs = query_all::<HtmlElement>(document, ".gradient-orb");
    let window_handle = window.clone();

    EventListener::new(window, "mousemove", move |event| {
        let Some(event) = event.dyn_ref::<MouseEvent>() else {
            return;
        };
        let viewport = viewport(&window_handle);
        let client_x = f64::from(event.client_x());
        let client_y = f64::from(event.client_y());

        for (index, card) in cards.iter().enumerate() {
            let offset = floating_card_offset(index, client_x, client_y, viewport);
            card.set_style("transform", &translate_transform(offset));
        }
        for (index, orb) in orbs.iter().enumerate() {
            let offset = orb_offset(index, client_x, client_y, viewport);
            orb.set_style("transform", &translate_transform(offset));
        }
    })
    .forget();

    Ok(())
}

pub fn install_tilt(document: &Document) -> Result<(), DomError> {
    for card in query_all::<HtmlElement>(document, ".project-card") {
        let tilted = card.clone();
        EventListener::new(&card, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let rect = tilted.get_bounding_client_rect();
            let angles = tilt_angles(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
                CardRect {
                    left: rect.left(),
                    top: rect.top(),
                    width: rect.width(),
                    height: rect.height(),
                },
            );
            tilted.set_style("transform", &tilt_transform(angles));
        })
        .forget();

        let resting = card.clone();
        EventListener::new(&card, "mouseleave", move |_| {
            resting.set_style("transform", TILT_REST_TRANSFORM);
        })
        .forget();
    }

    Ok(())
}

pub fn install_tag_hover(document: &Document) -> Result<(), DomError> {
    for tag in query_all::<HtmlElement>(document, ".tag") {
        for (event_type, hovered) in [("mouseenter", true), ("mouseleave", false)] {
            let target = tag.clone();
            EventListener::new(&tag, event_type, move |_| {
                target.set_style("transform", tag_transform(hovered));
            })
            .forget();
        }
    }

    Ok(())
}
