use crate::dom::{self, DomSurface};
use crate::events;
use crate::frame::{self, SharedController};
use gloo::events::EventListener;
use motion_core::{ElementId, MountOptions};
use web_sys as web;

/// One page view's worth of motion: the controller plus every listener
/// attached for it. Dropping the session removes the listeners and cancels
/// any pending frame.
pub struct Session {
    // Declared first so the listeners (and their controller clones) go
    // before the controller itself.
    listeners: Vec<EventListener>,
    controller: SharedController,
}

impl Session {
    /// Discover opted-in elements and start tracking. Returns `Ok(None)` when
    /// motion is reduced or the page has nothing to drive.
    pub fn mount(
        window: &web::Window,
        document: &web::Document,
        options: MountOptions,
    ) -> anyhow::Result<Option<Self>> {
        if options.reduced_motion {
            log::info!("[session] reduced motion; effects disabled");
            return Ok(None);
        }

        let elements = dom::discover(document)?;
        if elements.is_empty() {
            log::debug!("[session] no interactive elements");
            return Ok(None);
        }

        let mut configs = Vec::with_capacity(elements.len());
        for (i, el) in elements.iter().enumerate() {
            let config = dom::read_config(el);
            dom::mark_classes(el, &config);
            if let Err(e) = dom::ensure_decoration_layers(document, el) {
                log::warn!("[session] decoration layers for element {}: {:?}", i, e);
            }
            configs.push((ElementId(i as u32), config));
        }

        let controller =
            frame::mount_controller(options, DomSurface::new(elements.clone()), configs);

        let mut listeners = Vec::with_capacity(elements.len() * 6 + 4);
        for (i, el) in elements.iter().enumerate() {
            events::wire_element_handlers(el, ElementId(i as u32), &controller, &mut listeners);
        }
        events::wire_window_handlers(window, &controller, &mut listeners);

        log::info!(
            "[session] tracking {} elements ({} listeners)",
            elements.len(),
            listeners.len()
        );
        Ok(Some(Self {
            listeners,
            controller,
        }))
    }

    pub fn len(&self) -> usize {
        self.controller.borrow().len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Remove all listeners and cancel the pending frame. Idempotent.
    pub fn teardown(&mut self) {
        let removed = self.listeners.len();
        self.listeners.clear();
        self.controller.borrow_mut().teardown();
        if removed > 0 {
            log::info!("[session] removed {} listeners", removed);
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn window_document() -> (web::Window, web::Document) {
        dom::window_document().expect("browser window")
    }

    fn add_element(document: &web::Document, left: u32) -> web::HtmlElement {
        let el = document
            .create_element("div")
            .unwrap()
            .dyn_into::<web::HtmlElement>()
            .unwrap();
        el.set_attribute("data-premium", "").unwrap();
        let style = el.style();
        style.set_property("position", "fixed").unwrap();
        style.set_property("left", &format!("{}px", left)).unwrap();
        style.set_property("top", "0px").unwrap();
        style.set_property("width", "100px").unwrap();
        style.set_property("height", "40px").unwrap();
        document.body().unwrap().append_child(&el).unwrap();
        el
    }

    fn pointer_move(target: &web::EventTarget, x: i32, y: i32) {
        let init = web::MouseEventInit::new();
        init.set_client_x(x);
        init.set_client_y(y);
        init.set_bubbles(true);
        let ev = web::MouseEvent::new_with_mouse_event_init_dict("pointermove", &init).unwrap();
        target.dispatch_event(&ev).unwrap();
    }

    async fn next_frame() {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            _ = web::window().unwrap().request_animation_frame(&resolve);
        });
        _ = wasm_bindgen_futures::JsFuture::from(promise).await;
    }

    fn prox(el: &web::HtmlElement) -> String {
        el.style().get_property_value("--pm-prox").unwrap()
    }

    #[wasm_bindgen_test]
    async fn mounted_session_writes_channels_on_pointer_move() {
        let (window, document) = window_document();
        let a = add_element(&document, 0);
        let b = add_element(&document, 200);

        let session = Session::mount(&window, &document, MountOptions::default())
            .unwrap()
            .expect("session");
        assert_eq!(session.len(), 2);
        assert_eq!(session.listener_count(), 2 * 6 + 4);
        assert!(a.class_list().contains("premium-interactive"));

        pointer_move(&a, 50, 20);
        next_frame().await;
        next_frame().await;
        assert_eq!(prox(&a), "1.0000");
        assert!(!prox(&b).is_empty());

        drop(session);
        a.remove();
        b.remove();
    }

    #[wasm_bindgen_test]
    async fn dropping_session_detaches_listeners_and_cancels_frame() {
        let (window, document) = window_document();
        let el = add_element(&document, 0);

        let session = Session::mount(&window, &document, MountOptions::default())
            .unwrap()
            .expect("session");
        let controller = Rc::downgrade(&session.controller);
        // Mounting requested the first frame; drop before it fires.
        drop(session);
        assert!(
            controller.upgrade().is_none(),
            "listener closures still hold the controller"
        );

        pointer_move(&el, 50, 20);
        pointer_move(&window, 50, 20);
        next_frame().await;
        next_frame().await;
        assert_eq!(prox(&el), "");

        el.remove();
    }

    #[wasm_bindgen_test]
    async fn teardown_after_frames_stops_further_writes() {
        let (window, document) = window_document();
        let el = add_element(&document, 0);

        let mut session = Session::mount(&window, &document, MountOptions::default())
            .unwrap()
            .expect("session");
        next_frame().await;
        next_frame().await;
        let parked = prox(&el);
        assert_eq!(parked, "0.0000");

        session.teardown();
        session.teardown();
        assert_eq!(session.listener_count(), 0);

        pointer_move(&el, 50, 20);
        next_frame().await;
        next_frame().await;
        assert_eq!(prox(&el), parked);

        drop(session);
        el.remove();
    }

    #[wasm_bindgen_test]
    fn reduced_motion_touches_nothing() {
        let (window, document) = window_document();
        let el = add_element(&document, 0);

        let session = Session::mount(
            &window,
            &document,
            MountOptions {
                reduced_motion: true,
            },
        )
        .unwrap();
        assert!(session.is_none());
        assert!(!el.class_list().contains("premium-interactive"));
        assert_eq!(el.child_element_count(), 0);

        el.remove();
    }
}
