#![cfg(target_arch = "wasm32")]
use gloo::events::EventListener;
use motion_core::MountOptions;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod navigation;
mod reduced_motion;
mod session;

use navigation::PathTracker;
use reduced_motion::ReducedMotion;
use session::Session;

struct Runtime {
    window: web::Window,
    document: web::Document,
    reduced_motion: ReducedMotion,
    path: PathTracker,
    _popstate: EventListener,
    session: Option<Session>,
}

impl Runtime {
    fn new() -> anyhow::Result<Self> {
        let (window, document) =
            dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;
        let reduced_motion = ReducedMotion::watch(&window, |reduce| {
            log::info!("[motion] reduced motion changed: {}", reduce);
            with_runtime(|rt| rt.rebuild());
        });
        // Back/forward navigation swaps the page without a host notification.
        let popstate = EventListener::new(&window, "popstate", |_| {
            with_runtime(|rt| {
                if rt.path.changed(&rt.pathname()) {
                    rt.rebuild();
                }
            });
        });
        Ok(Self {
            window,
            document,
            reduced_motion,
            path: PathTracker::default(),
            _popstate: popstate,
            session: None,
        })
    }

    fn pathname(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    /// Tear down the current session and mount a fresh one for the page as
    /// it is now.
    fn rebuild(&mut self) {
        self.session = None;
        let path = self.pathname();
        self.path.mounted(&path);
        let options = MountOptions {
            reduced_motion: self.reduced_motion.matches(),
        };
        match Session::mount(&self.window, &self.document, options) {
            Ok(session) => self.session = session,
            Err(e) => log::error!("[motion] mount error: {:?}", e),
        }
        log::debug!(
            "[motion] mounted for {}",
            self.path.current().unwrap_or("?")
        );
    }
}

thread_local! {
    static RUNTIME: RefCell<Option<Runtime>> = const { RefCell::new(None) };
}

fn with_runtime<R>(f: impl FnOnce(&mut Runtime) -> R) -> Option<R> {
    RUNTIME.with(|rt| rt.borrow_mut().as_mut().map(f))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("motion-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let runtime = Runtime::new()?;
    RUNTIME.with(|rt| *rt.borrow_mut() = Some(runtime));
    with_runtime(|rt| rt.rebuild());
    Ok(())
}

/// Call after client-side navigation has rendered the new page.
#[wasm_bindgen]
pub fn notify_navigation() {
    if with_runtime(|rt| rt.rebuild()).is_none() {
        log::warn!("[motion] navigation before start");
    }
}

/// Number of elements the current session drives (0 when inactive).
#[wasm_bindgen]
pub fn active_elements() -> u32 {
    with_runtime(|rt| rt.session.as_ref().map(|s| s.len()).unwrap_or(0))
        .unwrap_or(0) as u32
}

/// Remove every listener and stop all motion.
#[wasm_bindgen]
pub fn shutdown() {
    let runtime = RUNTIME.with(|rt| rt.borrow_mut().take());
    if runtime.is_some() {
        log::info!("motion-web stopped");
    }
}
