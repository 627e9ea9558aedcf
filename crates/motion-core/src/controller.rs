//! Controller lifecycle: element records, pointer snapshot, frame coalescing
//! and teardown.
//!
//! The controller never touches a platform API directly. Geometry comes from
//! and results go to a [`Surface`]; frame callbacks are requested through a
//! [`FrameScheduler`]. The owner is expected to call [`MotionController::run_frame`]
//! when the scheduled frame fires.

use crate::channel::ChannelValues;
use crate::constants::POINTER_PARKED;
use crate::frame::{compute, FrameInput, InteractionState, Rect};
use crate::tuning::{ElementConfig, Tuning};
use fnv::FnvHashMap;
use glam::Vec2;

/// Identifier for an element registered with one controller mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

/// Where geometry is read from and channel values are written to.
pub trait Surface {
    /// Current bounding box, or `None` once the element is gone.
    fn rect(&mut self, id: ElementId) -> Option<Rect>;

    fn apply_frame(&mut self, id: ElementId, values: &ChannelValues);
}

/// Requests a single callback on the next animation frame.
pub trait FrameScheduler {
    /// Returns `false` if no frame could be requested.
    fn schedule(&mut self) -> bool;

    /// Cancel the outstanding request, if any.
    fn cancel(&mut self);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MountOptions {
    pub reduced_motion: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementEvent {
    Enter,
    Leave,
    Down,
    Up,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Reduced motion or nothing to drive; never schedules or writes.
    Inert,
    Active,
    TornDown,
}

#[derive(Clone, Debug)]
pub struct ElementRecord {
    pub id: ElementId,
    pub config: ElementConfig,
    pub tuning: Tuning,
    pub state: InteractionState,
}

impl ElementRecord {
    pub fn new(id: ElementId, config: ElementConfig) -> Self {
        Self {
            id,
            tuning: config.tuning(),
            config,
            state: InteractionState::default(),
        }
    }

    fn handle(&mut self, event: ElementEvent) {
        match event {
            ElementEvent::Enter => self.state.hovered = true,
            ElementEvent::Leave => {
                self.state.hovered = false;
                self.state.pressed = false;
            }
            ElementEvent::Down => self.state.pressed = true,
            ElementEvent::Up | ElementEvent::Cancel => self.state.pressed = false,
        }
    }
}

pub struct MotionController<S: FrameScheduler> {
    scheduler: S,
    records: Vec<ElementRecord>,
    index: FnvHashMap<ElementId, usize>,
    pointer: Vec2,
    pending: bool,
    lifecycle: Lifecycle,
    frames_run: u64,
}

impl<S: FrameScheduler> MotionController<S> {
    /// Build records for `elements` and request the first frame.
    ///
    /// With reduced motion requested, or no elements, the controller is
    /// inert: the elements are not even recorded.
    pub fn mount(
        options: MountOptions,
        scheduler: S,
        elements: impl IntoIterator<Item = (ElementId, ElementConfig)>,
    ) -> Self {
        let mut ctl = Self {
            scheduler,
            records: Vec::new(),
            index: FnvHashMap::default(),
            pointer: Vec2::splat(POINTER_PARKED),
            pending: false,
            lifecycle: Lifecycle::Inert,
            frames_run: 0,
        };
        if options.reduced_motion {
            log::debug!("[motion] reduced motion requested; controller inert");
            return ctl;
        }

        for (id, config) in elements {
            if ctl.index.contains_key(&id) {
                log::warn!("[motion] duplicate element id {:?} ignored", id);
                continue;
            }
            ctl.index.insert(id, ctl.records.len());
            ctl.records.push(ElementRecord::new(id, config));
        }
        if ctl.records.is_empty() {
            log::debug!("[motion] no interactive elements; controller inert");
            return ctl;
        }

        ctl.lifecycle = Lifecycle::Active;
        log::debug!("[motion] mounted {} elements", ctl.records.len());
        ctl.request_update();
        ctl
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle == Lifecycle::Active
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }

    pub fn record(&self, id: ElementId) -> Option<&ElementRecord> {
        self.index.get(&id).map(|&i| &self.records[i])
    }

    /// Ask for a recompute on the next frame. Repeated requests before the
    /// frame runs collapse into the one already pending.
    pub fn request_update(&mut self) {
        if !self.is_active() || self.pending {
            return;
        }
        if self.scheduler.schedule() {
            self.pending = true;
        } else {
            log::warn!("[motion] frame request failed");
        }
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if !self.is_active() {
            return;
        }
        self.pointer = Vec2::new(x, y);
        self.request_update();
    }

    /// Park the pointer far away so nothing stays in range.
    pub fn pointer_left_window(&mut self) {
        if !self.is_active() {
            return;
        }
        self.pointer = Vec2::splat(POINTER_PARKED);
        self.request_update();
    }

    /// Scroll or resize moved elements under a stationary pointer.
    pub fn viewport_changed(&mut self) {
        self.request_update();
    }

    pub fn element_event(&mut self, id: ElementId, event: ElementEvent) {
        if !self.is_active() {
            return;
        }
        let Some(&i) = self.index.get(&id) else {
            return;
        };
        self.records[i].handle(event);
        self.request_update();
    }

    /// Stop driving an element that left the page.
    pub fn unregister(&mut self, id: ElementId) -> Option<ElementRecord> {
        let i = self.index.remove(&id)?;
        let record = self.records.remove(i);
        for slot in self.index.values_mut() {
            if *slot > i {
                *slot -= 1;
            }
        }
        Some(record)
    }

    /// Recompute every record against one pointer snapshot and write the
    /// results. Elements the surface no longer knows are unregistered.
    /// Returns the number of elements written.
    pub fn run_frame(&mut self, surface: &mut impl Surface) -> usize {
        self.pending = false;
        if !self.is_active() {
            return 0;
        }
        let pointer = self.pointer;
        let mut written = 0;
        let mut gone = Vec::new();
        for record in &self.records {
            let Some(rect) = surface.rect(record.id) else {
                gone.push(record.id);
                continue;
            };
            let input = FrameInput {
                rect,
                variant: record.config.variant,
                tuning: record.tuning,
                transform_enabled: record.config.transform_enabled,
                state: record.state,
            };
            if let Some(values) = compute(&input, pointer) {
                surface.apply_frame(record.id, &values.channel_values());
                written += 1;
            }
        }
        for id in gone {
            log::debug!("[motion] element {:?} left the page", id);
            self.unregister(id);
        }
        self.frames_run += 1;
        log::trace!(
            "[motion] frame {} wrote {}/{} elements at ({:.1},{:.1})",
            self.frames_run,
            written,
            self.records.len(),
            pointer.x,
            pointer.y
        );
        written
    }

    /// Cancel any pending frame and drop all records. Safe to call twice.
    pub fn teardown(&mut self) {
        if self.lifecycle == Lifecycle::TornDown {
            return;
        }
        if self.pending {
            self.scheduler.cancel();
            self.pending = false;
        }
        self.records.clear();
        self.index.clear();
        self.lifecycle = Lifecycle::TornDown;
        log::debug!("[motion] torn down after {} frames", self.frames_run);
    }
}

impl<S: FrameScheduler> Drop for MotionController<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
