use crate::frame::SharedController;
use gloo::events::EventListener;
use motion_core::{ElementEvent, ElementId};
use wasm_bindgen::JsCast;
use web_sys as web;

const ELEMENT_EVENTS: [(&str, ElementEvent); 5] = [
    ("pointerenter", ElementEvent::Enter),
    ("pointerleave", ElementEvent::Leave),
    ("pointerdown", ElementEvent::Down),
    ("pointerup", ElementEvent::Up),
    ("pointercancel", ElementEvent::Cancel),
];

#[inline]
fn client_xy(ev: &web::Event) -> Option<(f32, f32)> {
    let ev = ev.dyn_ref::<web::MouseEvent>()?;
    Some((ev.client_x() as f32, ev.client_y() as f32))
}

fn pointer_move_listener(
    target: &web::EventTarget,
    controller: &SharedController,
) -> EventListener {
    let ctl = controller.clone();
    EventListener::new(target, "pointermove", move |ev| {
        if let Some((x, y)) = client_xy(ev) {
            ctl.borrow_mut().pointer_moved(x, y);
        }
    })
}

/// Hover/press tracking plus pointer position while over the element.
pub fn wire_element_handlers(
    element: &web::HtmlElement,
    id: ElementId,
    controller: &SharedController,
    listeners: &mut Vec<EventListener>,
) {
    for (kind, event) in ELEMENT_EVENTS {
        let ctl = controller.clone();
        listeners.push(EventListener::new(element, kind, move |_| {
            ctl.borrow_mut().element_event(id, event);
        }));
    }
    listeners.push(pointer_move_listener(element, controller));
}

/// Global pointer tracking plus scroll/resize, which move elements under a
/// stationary pointer.
pub fn wire_window_handlers(
    window: &web::Window,
    controller: &SharedController,
    listeners: &mut Vec<EventListener>,
) {
    listeners.push(pointer_move_listener(window, controller));

    let ctl = controller.clone();
    listeners.push(EventListener::new(window, "pointerleave", move |_| {
        ctl.borrow_mut().pointer_left_window();
    }));

    for kind in ["scroll", "resize"] {
        let ctl = controller.clone();
        listeners.push(EventListener::new(window, kind, move |_| {
            ctl.borrow_mut().viewport_changed();
        }));
    }
}
