//! # Pointer Dispatch
//!
//! ```text
//! down  → hit test → handle of a listening slider? → begin drag
//! move  → every listening slider (each checks its own drag state)
//! up    → every listening slider → committed? → change event
//!       → press and release on the same element? → click
//! click → hit test → track (not a handle) of a listening slider?
//!       → nearest handle moves
//! ```
//!
//! Moves and releases are document-level: they reach a dragging slider
//! wherever the pointer is.

use pricerange_ui::{PointerEvent, PointerKind, Widget};
use tracing::debug;

use crate::document::{Document, ElementId, Role};
use crate::events::RangeChangeEvent;
use crate::mount::SliderId;

/// What one dispatched pointer event did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchResult {
    /// The host must suppress its default action (text selection, native
    /// drag, scrolling).
    pub default_prevented: bool,
    /// Change events dispatched, one per completed gesture.
    pub changes: usize,
    /// Listener deliveries, counting every bubbling copy.
    pub delivered: usize,
}

impl DispatchResult {
    fn merge(&mut self, other: Self) {
        self.default_prevented |= other.default_prevented;
        self.changes += other.changes;
        self.delivered += other.delivered;
    }
}

impl Document {
    /// Dispatches one pointer event.
    pub fn dispatch(&mut self, event: &PointerEvent) -> DispatchResult {
        self.input.apply(event);
        let mut result = DispatchResult::default();

        match *event {
            PointerEvent::Down { x, y, .. } => {
                let target = self.hit_test(x, y);
                self.press_target = target;
                if let Some(target) = target {
                    result.default_prevented = self.press(target, x, y);
                }
            }
            PointerEvent::Move { .. } => {
                for id in self.pointer_listeners.clone() {
                    let Some(instance) = self.sliders.get_mut(&id) else {
                        continue;
                    };
                    let response = instance.slider.handle_event(event);
                    result.default_prevented |= response.consumed;
                    if response.changed {
                        self.sync(id);
                    }
                }
            }
            PointerEvent::Up { x, y, .. } => {
                for id in self.pointer_listeners.clone() {
                    let Some(instance) = self.sliders.get_mut(&id) else {
                        continue;
                    };
                    if instance.slider.handle_event(event).committed {
                        self.sync(id);
                        result.merge(self.emit_change(id));
                    }
                }

                let pressed = self.press_target.take();
                if pressed.is_some() && pressed == self.hit_test(x, y) {
                    result.merge(self.click(x, y));
                }
            }
            PointerEvent::Click { x, y } => {
                if let Some(target) = self.hit_test(x, y) {
                    result.merge(self.click_on(target, x, y));
                }
            }
        }

        result
    }

    /// Mouse button pressed.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> DispatchResult {
        self.dispatch(&PointerEvent::mouse_down(x, y))
    }

    /// Mouse moved.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> DispatchResult {
        self.dispatch(&PointerEvent::mouse_move(x, y))
    }

    /// Mouse button released.
    pub fn pointer_up(&mut self, x: f32, y: f32) -> DispatchResult {
        self.dispatch(&PointerEvent::mouse_up(x, y))
    }

    /// First touch point went down.
    pub fn touch_start(&mut self, x: f32, y: f32) -> DispatchResult {
        self.dispatch(&PointerEvent::touch_start(x, y))
    }

    /// First touch point moved.
    pub fn touch_move(&mut self, x: f32, y: f32) -> DispatchResult {
        self.dispatch(&PointerEvent::touch_move(x, y))
    }

    /// Touch ended; released at the last known touch position.
    pub fn touch_end(&mut self) -> DispatchResult {
        let release = match self.input.release() {
            PointerEvent::Up { x, y, .. } => PointerEvent::Up {
                kind: PointerKind::Touch,
                x,
                y,
            },
            other => other,
        };
        self.dispatch(&release)
    }

    /// Clicks at a point without a preceding press.
    pub fn click(&mut self, x: f32, y: f32) -> DispatchResult {
        self.dispatch(&PointerEvent::Click { x, y })
    }

    /// Starts a drag if `target` is a handle of a listening slider.
    fn press(&mut self, target: ElementId, x: f32, y: f32) -> bool {
        let Some((id, side)) = self.element(target).and_then(|element| match element.role() {
            Role::Handle(side) => element.owner().map(|id| (id, side)),
            _ => None,
        }) else {
            return false;
        };
        if !self.pointer_listeners.contains(&id) {
            return false;
        }
        let Some(instance) = self.sliders.get_mut(&id) else {
            return false;
        };

        // where handles overlap, the slider knows which one can move
        let side = instance.slider.handle_at(x, y).unwrap_or(side);
        if instance.slider.begin_drag(side) {
            self.sync(id);
            true
        } else {
            false
        }
    }

    /// Runs track-click resolution if `target` is a track or the active
    /// range inside it. Handles are not part of the clickable track.
    fn click_on(&mut self, target: ElementId, x: f32, y: f32) -> DispatchResult {
        let Some(id) = self
            .element(target)
            .filter(|element| matches!(element.role(), Role::Track | Role::ActiveRange))
            .and_then(|element| element.owner())
        else {
            return DispatchResult::default();
        };
        if !self.pointer_listeners.contains(&id) {
            return DispatchResult::default();
        }
        let Some(instance) = self.sliders.get_mut(&id) else {
            return DispatchResult::default();
        };

        if instance.slider.handle_event(&PointerEvent::Click { x, y }).committed {
            self.sync(id);
            self.emit_change(id)
        } else {
            DispatchResult::default()
        }
    }

    /// Dispatches `priceRangeChange` on the slider's container.
    fn emit_change(&mut self, id: SliderId) -> DispatchResult {
        let Some(instance) = self.sliders.get(&id) else {
            return DispatchResult::default();
        };
        let container = instance.container;
        let event = RangeChangeEvent {
            target: container,
            current_target: container,
            detail: instance.slider.values(),
        };

        let delivered = self.dispatch_change(container, event);
        debug!(
            slider = id.raw(),
            min = event.detail.min,
            max = event.detail.max,
            delivered,
            "range change dispatched"
        );

        DispatchResult {
            default_prevented: false,
            changes: 1,
            delivered,
        }
    }
}
