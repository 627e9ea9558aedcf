use crate::dom::DomSurface;
use gloo::render::{request_animation_frame, AnimationFrame};
use instant::Instant;
use motion_core::{ElementConfig, ElementId, FrameScheduler, MotionController, MountOptions};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub type SharedController = Rc<RefCell<MotionController<RafScheduler>>>;

/// One-shot animation frame requests against a fixed callback. Dropping the
/// held `AnimationFrame` cancels it.
pub struct RafScheduler {
    on_frame: Rc<dyn Fn()>,
    frame: Option<AnimationFrame>,
}

impl FrameScheduler for RafScheduler {
    fn schedule(&mut self) -> bool {
        let on_frame = self.on_frame.clone();
        self.frame = Some(request_animation_frame(move |_| on_frame()));
        true
    }

    fn cancel(&mut self) {
        self.frame.take();
    }
}

/// Mount a controller whose frame callback writes into `surface`.
///
/// The callback only holds a weak reference, so dropping the last strong
/// handle tears the controller down (cancelling any pending frame).
pub fn mount_controller(
    options: MountOptions,
    surface: DomSurface,
    configs: Vec<(ElementId, ElementConfig)>,
) -> SharedController {
    Rc::new_cyclic(|weak: &Weak<RefCell<MotionController<RafScheduler>>>| {
        let weak = weak.clone();
        let surface = RefCell::new(surface);
        let on_frame: Rc<dyn Fn()> = Rc::new(move || {
            let Some(ctl) = weak.upgrade() else {
                return;
            };
            let started = Instant::now();
            let written = ctl.borrow_mut().run_frame(&mut *surface.borrow_mut());
            log::trace!("[frame] {} elements in {:?}", written, started.elapsed());
        });

        let scheduler = RafScheduler {
            on_frame,
            frame: None,
        };
        RefCell::new(MotionController::mount(options, scheduler, configs))
    })
}
