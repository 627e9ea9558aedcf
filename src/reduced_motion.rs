use crate::constants::REDUCED_MOTION_QUERY;
use gloo::events::EventListener;
use web_sys as web;

/// Tracks the user's `prefers-reduced-motion` setting.
pub struct ReducedMotion {
    query: Option<web::MediaQueryList>,
    _listener: Option<EventListener>,
}

impl ReducedMotion {
    /// Read the preference and call `on_change` whenever it flips.
    pub fn watch(window: &web::Window, mut on_change: impl FnMut(bool) + 'static) -> Self {
        let query = match window.match_media(REDUCED_MOTION_QUERY) {
            Ok(q) => q,
            Err(e) => {
                log::warn!("matchMedia failed: {:?}", e);
                None
            }
        };
        let listener = query.as_ref().map(|q| {
            let q2 = q.clone();
            EventListener::new(q, "change", move |_| on_change(q2.matches()))
        });
        Self {
            query,
            _listener: listener,
        }
    }

    /// Without media query support motion stays enabled.
    pub fn matches(&self) -> bool {
        self.query.as_ref().map(|q| q.matches()).unwrap_or(false)
    }
}
