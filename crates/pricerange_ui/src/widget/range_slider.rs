//! Two-handle range slider.
//!
//! ```text
//!            DraggingMin
//!          ↗ (down on min)  ↘ (up anywhere)
//!     Idle                    Idle   → one committed response
//!          ↘ (down on max)  ↗
//!            DraggingMax
//! ```
//!
//! Moves while dragging update the values and report `changed`; only the
//! release reports `committed`. A click on the bare track moves the nearer
//! handle and commits immediately.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Widget, WidgetFlags, WidgetId, WidgetResponse, WidgetState};
use crate::config::SliderConfig;
use crate::input::PointerEvent;
use crate::layout::{Alignment, Layout, Rect};
use crate::render::RenderCommand;
use crate::scale::ValueScale;
use crate::style::SliderStyle;

/// The selected `(min, max)` pair; also the change notification payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeValues {
    /// Lower selected value.
    pub min: f64,
    /// Upper selected value.
    pub max: f64,
}

impl RangeValues {
    /// Creates a value pair.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Which end of the selection a handle is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleSide {
    /// Lower bound handle.
    Min,
    /// Upper bound handle.
    Max,
}

impl HandleSide {
    /// Short name, as used in `data-handle` attributes.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

/// Drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No handle is held.
    #[default]
    Idle,
    /// The given handle is held.
    Dragging(HandleSide),
}

impl DragState {
    /// Returns true while a handle is held.
    #[must_use]
    pub const fn is_dragging(self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Returns the held handle.
    #[must_use]
    pub const fn target(self) -> Option<HandleSide> {
        match self {
            Self::Idle => None,
            Self::Dragging(side) => Some(side),
        }
    }
}

/// Visual proxy for one end of the selection.
///
/// Owns its hit box and active flag, never a value.
#[derive(Debug, Clone)]
pub struct Handle {
    side: HandleSide,
    flags: WidgetFlags,
    rect: Rect,
}

impl Handle {
    fn new(side: HandleSide) -> Self {
        Self {
            side,
            flags: WidgetFlags::new(),
            rect: Rect::ZERO,
        }
    }

    /// Side this handle is bound to.
    #[must_use]
    pub const fn side(&self) -> HandleSide {
        self.side
    }

    /// Returns true while this handle is dragged.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.flags.has(WidgetFlags::ACTIVE)
    }

    /// Hit box in client coordinates.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.rect
    }
}

/// Derived presentation state, as a DOM host writes it into inline styles
/// and text nodes. All numbers are finite.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderView {
    /// `left` of the min handle, percent.
    pub min_percent: f64,
    /// `left` of the max handle, percent.
    pub max_percent: f64,
    /// `left` of the active range, percent.
    pub active_left: f64,
    /// `width` of the active range, percent.
    pub active_width: f64,
    /// Text of the lower value display and field.
    pub from_text: String,
    /// Text of the upper value display and field.
    pub to_text: String,
    /// Min handle is dragged.
    pub min_active: bool,
    /// Max handle is dragged.
    pub max_active: bool,
}

/// Two-handle range slider widget.
#[derive(Debug, Clone)]
pub struct RangeSlider {
    /// Widget state; `rect` is the full widget bounds.
    state: WidgetState,
    config: SliderConfig,
    scale: ValueScale,
    style: SliderStyle,
    values: RangeValues,
    drag: DragState,
    /// Track bounds; `None` when the host has no mount point for it.
    track: Option<Rect>,
    label_row: Option<Rect>,
    handles: [Handle; 2],
}

impl RangeSlider {
    /// Creates a slider selecting the full domain, or `config.initial`.
    #[must_use]
    pub fn new(id: WidgetId, config: SliderConfig) -> Self {
        let config = config.sanitized();
        let scale = config.scale();
        let initial = config.initial;

        let mut slider = Self {
            state: WidgetState::new(id),
            values: RangeValues::new(scale.min(), scale.max()),
            config,
            scale,
            style: SliderStyle::default(),
            drag: DragState::Idle,
            track: None,
            label_row: None,
            handles: [Handle::new(HandleSide::Min), Handle::new(HandleSide::Max)],
        };

        if let Some(initial) = initial {
            slider.set_values(initial.min, initial.max);
        }

        slider
    }

    /// Returns the sanitized configuration.
    #[must_use]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Returns the value scale.
    #[must_use]
    pub fn scale(&self) -> ValueScale {
        self.scale
    }

    /// Returns the style.
    #[must_use]
    pub fn style(&self) -> &SliderStyle {
        &self.style
    }

    /// Returns the current selection.
    #[must_use]
    pub fn values(&self) -> RangeValues {
        self.values
    }

    /// Returns the drag state.
    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Returns true while a handle is held.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Returns a handle.
    #[must_use]
    pub fn handle(&self, side: HandleSide) -> &Handle {
        &self.handles[Self::slot(side)]
    }

    /// Returns the track bounds, if the slider has a track.
    #[must_use]
    pub fn track(&self) -> Option<Rect> {
        self.track
    }

    /// Lays out label row and track inside `bounds`.
    pub fn layout(&mut self, bounds: Rect) {
        let style = &self.style;
        let mut sizes = Vec::with_capacity(2);
        if self.config.show_labels {
            sizes.push((bounds.width, style.label_height));
        }
        sizes.push((bounds.width, style.handle_size));

        let rects = Layout::vertical().with_gap(style.label_gap).arrange(bounds, &sizes);
        let area = rects.last().copied().unwrap_or(bounds);
        self.label_row = if self.config.show_labels { rects.first().copied() } else { None };

        self.state.rect = bounds;
        self.fit_track(area);
    }

    /// Places the track inside `area`: vertically centered, inset by half a
    /// handle on each side so handles at the domain edges stay inside.
    /// Returns the track bounds.
    pub fn fit_track(&mut self, area: Rect) -> Rect {
        let inset = self.style.handle_size * 0.5;
        let (_, cy) = area.center();
        let track = Rect::new(
            area.x + inset,
            cy - self.style.track_height * 0.5,
            (area.width - inset * 2.0).max(0.0),
            self.style.track_height,
        );

        self.set_track(track);
        track
    }

    /// Sets the track bounds directly, for hosts that lay out themselves.
    pub fn set_track(&mut self, track: Rect) {
        self.track = Some(track);
        self.update_handle_rects();
        self.state.mark_dirty();
    }

    /// Domain value under `client_x` on the current track.
    #[must_use]
    pub fn value_at(&self, client_x: f32) -> f64 {
        self.scale.value_at(self.track.unwrap_or(Rect::ZERO), client_x)
    }

    /// `Idle → Dragging(side)`. Returns false if a drag is already running.
    pub fn begin_drag(&mut self, side: HandleSide) -> bool {
        if self.drag.is_dragging() {
            return false;
        }

        self.drag = DragState::Dragging(side);
        self.handles[Self::slot(side)].flags.set(WidgetFlags::ACTIVE);
        self.state.mark_dirty();
        debug!(widget = self.state.id.raw(), handle = side.name(), "drag started");
        true
    }

    /// Moves the held handle to the value under `client_x`.
    ///
    /// The min handle stops at the max handle and vice versa. No-op while
    /// idle. Returns true if a value changed.
    pub fn drag_to(&mut self, client_x: f32) -> bool {
        match self.drag {
            DragState::Idle => false,
            DragState::Dragging(side) => {
                let value = self.value_at(client_x);
                self.apply(side, value)
            }
        }
    }

    /// `Dragging → Idle`. Returns the final values, i.e. the payload of the
    /// one notification this gesture produces; `None` while idle.
    pub fn end_drag(&mut self) -> Option<RangeValues> {
        let side = self.drag.target()?;

        self.drag = DragState::Idle;
        for handle in &mut self.handles {
            handle.flags.clear(WidgetFlags::ACTIVE);
        }
        self.state.mark_dirty();
        debug!(
            widget = self.state.id.raw(),
            handle = side.name(),
            min = self.values.min,
            max = self.values.max,
            "drag ended"
        );
        Some(self.values)
    }

    /// Moves the nearer handle to the value under `client_x`.
    ///
    /// Ignored while dragging. Otherwise always returns the resulting
    /// values, even if nothing moved: a click is a complete gesture.
    pub fn click_track(&mut self, client_x: f32) -> Option<RangeValues> {
        if self.drag.is_dragging() {
            return None;
        }

        let value = self.value_at(client_x);
        let side = self.nearest_side(value);
        self.apply(side, value);
        debug!(
            widget = self.state.id.raw(),
            handle = side.name(),
            value,
            "track clicked"
        );
        Some(self.values)
    }

    /// Picks the handle a track click at `value` moves.
    ///
    /// The nearer handle wins; on a tie the min handle wins, unless both
    /// handles sit on the same value, where the click side decides so the
    /// pair can be pulled apart in either direction.
    #[must_use]
    pub fn nearest_side(&self, value: f64) -> HandleSide {
        let to_min = (value - self.values.min).abs();
        let to_max = (value - self.values.max).abs();

        if to_min < to_max {
            HandleSide::Min
        } else if to_max < to_min {
            HandleSide::Max
        } else if self.values.min < self.values.max || value < self.values.min {
            HandleSide::Min
        } else {
            HandleSide::Max
        }
    }

    /// Sets the lower value, clamped to `[domain_min, max]`.
    ///
    /// Non-finite input is ignored. Returns true if the value changed.
    pub fn set_min_value(&mut self, value: f64) -> bool {
        match self.scale.quantize(value) {
            Some(value) => self.apply(HandleSide::Min, value),
            None => false,
        }
    }

    /// Sets the upper value, clamped to `[min, domain_max]`.
    ///
    /// Non-finite input is ignored. Returns true if the value changed.
    pub fn set_max_value(&mut self, value: f64) -> bool {
        match self.scale.quantize(value) {
            Some(value) => self.apply(HandleSide::Max, value),
            None => false,
        }
    }

    /// Replaces the selection.
    ///
    /// Min is applied first against the domain alone, then max against
    /// `[min, domain_max]`; any input yields a valid state. Never commits.
    /// A non-finite side keeps its current value.
    pub fn set_values(&mut self, min: f64, max: f64) -> bool {
        let before = self.values;

        if let Some(min) = self.scale.quantize(min) {
            self.values.min = min;
            if self.values.max < min {
                self.values.max = min;
            }
        }
        self.set_max_value(max);

        let changed = self.values != before;
        if changed {
            self.update_handle_rects();
            self.state.mark_dirty();
        }
        changed
    }

    /// Returns the handle under a point; the max handle is on top.
    ///
    /// Where the hit boxes overlap, the handle whose center is nearer
    /// wins; if both centers coincide, the one that can still move does.
    #[must_use]
    pub fn handle_at(&self, x: f32, y: f32) -> Option<HandleSide> {
        let min = self.handle(HandleSide::Min).rect;
        let max = self.handle(HandleSide::Max).rect;

        match (min.contains(x, y), max.contains(x, y)) {
            (false, false) => None,
            (true, false) => Some(HandleSide::Min),
            (false, true) => Some(HandleSide::Max),
            (true, true) => {
                let to_min = (min.center().0 - x).abs();
                let to_max = (max.center().0 - x).abs();
                if to_min < to_max {
                    Some(HandleSide::Min)
                } else if to_max < to_min || self.values.max < self.scale.max() {
                    Some(HandleSide::Max)
                } else {
                    Some(HandleSide::Min)
                }
            }
        }
    }

    /// Clickable area of the track: the track widened to handle height.
    #[must_use]
    pub fn track_hit_area(&self) -> Option<Rect> {
        self.track.map(|track| {
            let (_, cy) = track.center();
            let height = self.style.handle_size.max(track.height);
            Rect::new(track.x, cy - height * 0.5, track.width, height)
        })
    }

    /// Presentation state for the current values.
    #[must_use]
    pub fn view(&self) -> SliderView {
        let min_percent = self.scale.percent_of(self.values.min);
        let max_percent = self.scale.percent_of(self.values.max);

        SliderView {
            min_percent,
            max_percent,
            active_left: min_percent,
            active_width: (max_percent - min_percent).max(0.0),
            from_text: format_value(self.values.min),
            to_text: format_value(self.values.max),
            min_active: self.handle(HandleSide::Min).is_active(),
            max_active: self.handle(HandleSide::Max).is_active(),
        }
    }

    /// Assigns `value` to one side under the ordering rule.
    fn apply(&mut self, side: HandleSide, value: f64) -> bool {
        let before = self.values;
        match side {
            HandleSide::Min => {
                self.values.min = value.clamp(self.scale.min(), self.values.max);
            }
            HandleSide::Max => {
                self.values.max = value.clamp(self.values.min, self.scale.max());
            }
        }

        let changed = self.values != before;
        if changed {
            self.update_handle_rects();
            self.state.mark_dirty();
        }
        changed
    }

    fn update_handle_rects(&mut self) {
        let Some(track) = self.track else {
            return;
        };

        let (_, cy) = track.center();
        let size = self.style.handle_size;
        for handle in &mut self.handles {
            let value = match handle.side {
                HandleSide::Min => self.values.min,
                HandleSide::Max => self.values.max,
            };
            let cx = self.scale.x_of(track, value);
            handle.rect = Rect::centered_at(cx, cy, size, size);
        }
    }

    const fn slot(side: HandleSide) -> usize {
        match side {
            HandleSide::Min => 0,
            HandleSide::Max => 1,
        }
    }
}

impl Widget for RangeSlider {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn handle_event(&mut self, event: &PointerEvent) -> WidgetResponse {
        let mut response = WidgetResponse::default();
        if self.track.is_none() {
            return response;
        }

        match *event {
            PointerEvent::Down { x, y, .. } => {
                if let Some(side) = self.handle_at(x, y) {
                    if self.begin_drag(side) {
                        response.pressed = true;
                        response.consumed = true;
                    }
                }
            }
            PointerEvent::Move { x, .. } => {
                if self.drag.is_dragging() {
                    response.consumed = true;
                    response.changed = self.drag_to(x);
                }
            }
            PointerEvent::Up { .. } => {
                if self.end_drag().is_some() {
                    response.released = true;
                    response.committed = true;
                }
            }
            PointerEvent::Click { x, y } => {
                let on_track = self.track_hit_area().is_some_and(|area| area.contains(x, y));
                if on_track && self.handle_at(x, y).is_none() {
                    let before = self.values;
                    if self.click_track(x).is_some() {
                        response.clicked = true;
                        response.committed = true;
                        response.changed = self.values != before;
                    }
                }
            }
        }

        response
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        let style = &self.style;
        let view = self.view();

        if let Some(row) = self.label_row {
            let groups = [
                (view.from_text.as_str(), self.config.from_label.as_str()),
                (view.to_text.as_str(), self.config.to_label.as_str()),
            ];
            let sizes: Vec<(f32, f32)> = groups
                .iter()
                .map(|(value, caption)| {
                    (text_width(value.len().max(caption.len()), style.font_size), row.height)
                })
                .collect();
            let cells = Layout::horizontal()
                .with_gap(0.0)
                .align(Alignment::SpaceBetween)
                .arrange(row, &sizes);

            for ((value, caption), cell) in groups.iter().zip(cells) {
                commands.push(RenderCommand::Text {
                    text: (*value).to_string(),
                    x: cell.x,
                    y: cell.y,
                    color: style.value_text,
                    font_size: style.font_size,
                });
                commands.push(RenderCommand::Text {
                    text: (*caption).to_string(),
                    x: cell.x,
                    y: cell.y + style.font_size + 4.0,
                    color: style.caption_text,
                    font_size: style.font_size * 0.75,
                });
            }
        }

        let Some(track) = self.track else {
            return;
        };

        let radius = track.height * 0.5;
        commands.push(RenderCommand::Rect {
            bounds: track,
            color: style.track,
            corner_radius: radius,
        });

        let left = self.scale.x_of(track, self.values.min);
        let right = self.scale.x_of(track, self.values.max);
        commands.push(RenderCommand::Rect {
            bounds: Rect::new(left, track.y, (right - left).max(0.0), track.height),
            color: style.active_range,
            corner_radius: radius,
        });

        for handle in &self.handles {
            let fill = if handle.is_active() {
                style.handle_active
            } else {
                style.handle
            };
            commands.push(RenderCommand::Rect {
                bounds: handle.rect,
                color: fill,
                corner_radius: style.handle_size * 0.5,
            });
            commands.push(RenderCommand::RectOutline {
                bounds: handle.rect,
                color: style.handle_border,
                width: if handle.is_active() { 3.0 } else { 2.0 },
                corner_radius: style.handle_size * 0.5,
            });
        }
    }
}

/// Formats a value for labels and fields; integral values print without a
/// fractional part.
fn format_value(value: f64) -> String {
    // -0.0 would print as "-0"
    let value = if value == 0.0 { 0.0 } else { value };
    value.to_string()
}

/// Estimated width of `chars` proportional glyphs.
#[allow(clippy::cast_precision_loss)]
fn text_width(chars: usize, font_size: f32) -> f32 {
    chars as f32 * font_size * 0.6
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Domain 0..100, step 1, on a 100px track at x = 0, so x == value.
    fn slider() -> RangeSlider {
        let config = SliderConfig::default().with_domain(0.0, 100.0);
        let mut slider = RangeSlider::new(WidgetId::new(1), config);
        slider.set_track(Rect::new(0.0, 0.0, 100.0, 20.0));
        slider
    }

    fn slider_with(min: f64, max: f64) -> RangeSlider {
        let mut slider = slider();
        slider.set_values(min, max);
        slider
    }

    #[test]
    fn test_construction_defaults() {
        let slider = RangeSlider::new(WidgetId::new(1), SliderConfig::default());
        assert_eq!(slider.values(), RangeValues::new(0.0, 10_000.0));
        assert_eq!(slider.drag_state(), DragState::Idle);
        assert!(slider.track().is_none());
    }

    #[test]
    fn test_construction_with_initial_values() {
        let config = SliderConfig::default().with_initial(-20.0, 2_500.4);
        let slider = RangeSlider::new(WidgetId::new(1), config);
        assert_eq!(slider.values(), RangeValues::new(0.0, 2_500.0));
    }

    #[test]
    fn test_drag_min_collides_with_max() {
        let mut slider = slider_with(20.0, 80.0);

        assert!(slider.begin_drag(HandleSide::Min));
        assert!(slider.handle(HandleSide::Min).is_active());

        assert!(slider.drag_to(30.0));
        assert_eq!(slider.values().min, 30.0);

        slider.drag_to(95.0);
        assert_eq!(slider.values(), RangeValues::new(80.0, 80.0));

        assert_eq!(slider.end_drag(), Some(RangeValues::new(80.0, 80.0)));
        assert!(!slider.handle(HandleSide::Min).is_active());
    }

    #[test]
    fn test_drag_max_collides_with_min() {
        let mut slider = slider_with(20.0, 80.0);

        slider.begin_drag(HandleSide::Max);
        slider.drag_to(5.0);

        assert_eq!(slider.values(), RangeValues::new(20.0, 20.0));
    }

    #[test]
    fn test_drag_outside_track_clamps_to_domain() {
        let mut slider = slider_with(20.0, 80.0);

        slider.begin_drag(HandleSide::Min);
        slider.drag_to(-500.0);
        assert_eq!(slider.values().min, 0.0);
        slider.end_drag();

        slider.begin_drag(HandleSide::Max);
        slider.drag_to(900.0);
        assert_eq!(slider.values().max, 100.0);
    }

    #[test]
    fn test_drag_quantizes_to_step() {
        let config = SliderConfig::default().with_domain(0.0, 100.0).with_step(5.0);
        let mut slider = RangeSlider::new(WidgetId::new(1), config);
        slider.set_track(Rect::new(0.0, 0.0, 100.0, 20.0));

        slider.begin_drag(HandleSide::Min);
        slider.drag_to(33.0);
        assert_eq!(slider.values().min, 35.0);
        slider.drag_to(32.0);
        assert_eq!(slider.values().min, 30.0);
    }

    #[test]
    fn test_idle_moves_and_releases_are_noops() {
        let mut slider = slider_with(20.0, 80.0);

        assert!(!slider.drag_to(50.0));
        assert_eq!(slider.end_drag(), None);
        assert_eq!(slider.values(), RangeValues::new(20.0, 80.0));
    }

    #[test]
    fn test_second_press_is_ignored_while_dragging() {
        let mut slider = slider_with(20.0, 80.0);

        assert!(slider.begin_drag(HandleSide::Min));
        assert!(!slider.begin_drag(HandleSide::Max));
        assert_eq!(slider.drag_state(), DragState::Dragging(HandleSide::Min));
        assert!(!slider.handle(HandleSide::Max).is_active());
    }

    #[test]
    fn test_click_moves_nearest_handle() {
        let mut slider = slider_with(20.0, 80.0);
        // |45 - 20| = 25 < |45 - 80| = 35
        assert_eq!(slider.click_track(45.0), Some(RangeValues::new(45.0, 80.0)));

        let mut slider = slider_with(20.0, 80.0);
        assert_eq!(slider.click_track(70.0), Some(RangeValues::new(20.0, 70.0)));
    }

    #[test]
    fn test_click_tie_moves_min() {
        let mut slider = slider_with(20.0, 80.0);
        assert_eq!(slider.click_track(50.0), Some(RangeValues::new(50.0, 80.0)));
    }

    #[test]
    fn test_click_on_collapsed_handles_uses_side() {
        let mut slider = slider_with(50.0, 50.0);
        assert_eq!(slider.click_track(30.0), Some(RangeValues::new(30.0, 50.0)));

        let mut slider = slider_with(50.0, 50.0);
        assert_eq!(slider.click_track(70.0), Some(RangeValues::new(50.0, 70.0)));
    }

    #[test]
    fn test_click_ignored_while_dragging() {
        let mut slider = slider_with(20.0, 80.0);
        slider.begin_drag(HandleSide::Max);

        assert_eq!(slider.click_track(10.0), None);
        assert_eq!(slider.values(), RangeValues::new(20.0, 80.0));
    }

    #[test]
    fn test_set_values_exact() {
        let mut slider = RangeSlider::new(WidgetId::new(1), SliderConfig::default());
        slider.set_values(30.0, 70.0);
        assert_eq!(slider.values(), RangeValues::new(30.0, 70.0));
    }

    #[test]
    fn test_set_values_out_of_range() {
        let mut slider = RangeSlider::new(WidgetId::new(1), SliderConfig::default());
        slider.set_values(30.0, 70.0);
        slider.set_values(-50.0, 99_999.0);
        assert_eq!(slider.values(), RangeValues::new(0.0, 10_000.0));
    }

    #[test]
    fn test_set_values_does_not_depend_on_previous_state() {
        let mut slider = slider_with(10.0, 15.0);
        slider.set_values(30.0, 70.0);
        assert_eq!(slider.values(), RangeValues::new(30.0, 70.0));
    }

    #[test]
    fn test_set_values_swapped_input() {
        let mut slider = slider();
        slider.set_values(70.0, 30.0);
        assert_eq!(slider.values(), RangeValues::new(70.0, 70.0));
    }

    #[test]
    fn test_domain_edges_reachable_off_grid() {
        let config = SliderConfig::default()
            .with_domain(0.0, 100.0)
            .with_step(30.0)
            .with_initial(0.0, 100.0);
        let mut slider = RangeSlider::new(WidgetId::new(1), config);
        slider.set_track(Rect::new(0.0, 0.0, 100.0, 20.0));
        assert_eq!(slider.values(), RangeValues::new(0.0, 100.0));

        slider.set_values(30.0, 60.0);
        slider.set_values(0.0, 100.0);
        assert_eq!(slider.values(), RangeValues::new(0.0, 100.0));

        slider.set_max_value(60.0);
        slider.set_max_value(100.0);
        assert_eq!(slider.values().max, 100.0);

        slider.set_max_value(95.0);
        assert_eq!(slider.values().max, 90.0);

        slider.begin_drag(HandleSide::Max);
        slider.drag_to(100.0);
        assert_eq!(slider.values().max, 100.0);
    }

    #[test]
    fn test_single_side_setters_respect_order() {
        let mut slider = slider_with(20.0, 80.0);

        slider.set_min_value(90.0);
        assert_eq!(slider.values(), RangeValues::new(80.0, 80.0));

        slider.set_max_value(-5.0);
        assert_eq!(slider.values(), RangeValues::new(80.0, 80.0));

        assert!(!slider.set_min_value(f64::NAN));
        assert!(!slider.set_max_value(f64::INFINITY));
    }

    #[test]
    fn test_gesture_commits_once() {
        let mut slider = slider_with(20.0, 80.0);
        let mut commits = 0;
        let mut last = None;

        let mut feed = |slider: &mut RangeSlider, event: PointerEvent| {
            let response = slider.handle_event(&event);
            if response.committed {
                commits += 1;
                last = Some(slider.values());
            }
            response
        };

        let down = feed(&mut slider, PointerEvent::mouse_down(20.0, 10.0));
        assert!(down.pressed && down.consumed);

        for step in 0..50u8 {
            let x = 20.0 + f32::from(step);
            let response = feed(&mut slider, PointerEvent::mouse_move(x, 300.0));
            assert!(!response.committed);
        }
        feed(&mut slider, PointerEvent::mouse_up(69.0, 300.0));

        assert_eq!(commits, 1);
        assert_eq!(last, Some(RangeValues::new(69.0, 80.0)));
    }

    #[test]
    fn test_click_on_handle_is_not_a_track_click() {
        let mut slider = slider_with(20.0, 80.0);
        let response = slider.handle_event(&PointerEvent::Click { x: 80.0, y: 10.0 });
        assert!(!response.committed);

        let response = slider.handle_event(&PointerEvent::Click { x: 45.0, y: 10.0 });
        assert!(response.clicked && response.committed && response.changed);
        assert_eq!(slider.values(), RangeValues::new(45.0, 80.0));
    }

    #[test]
    fn test_handle_at_prefers_movable_handle() {
        let slider = slider_with(100.0, 100.0);
        assert_eq!(slider.handle_at(100.0, 10.0), Some(HandleSide::Min));

        let slider = slider_with(0.0, 0.0);
        assert_eq!(slider.handle_at(0.0, 10.0), Some(HandleSide::Max));

        let slider = slider_with(40.0, 50.0);
        assert_eq!(slider.handle_at(42.0, 10.0), Some(HandleSide::Min));
        assert_eq!(slider.handle_at(48.0, 10.0), Some(HandleSide::Max));
        assert_eq!(slider.handle_at(70.0, 10.0), None);
    }

    #[test]
    fn test_zero_width_track() {
        let mut slider = slider_with(20.0, 80.0);
        slider.set_track(Rect::new(10.0, 0.0, 0.0, 20.0));

        slider.begin_drag(HandleSide::Max);
        slider.drag_to(50.0);
        assert_eq!(slider.values(), RangeValues::new(20.0, 20.0));

        let view = slider.view();
        assert!(view.min_percent.is_finite());
        assert!(view.active_width.is_finite());
    }

    #[test]
    fn test_view() {
        let mut slider = slider_with(25.0, 75.0);
        slider.begin_drag(HandleSide::Max);

        let view = slider.view();
        assert_eq!(view.min_percent, 25.0);
        assert_eq!(view.max_percent, 75.0);
        assert_eq!(view.active_left, 25.0);
        assert_eq!(view.active_width, 50.0);
        assert_eq!(view.from_text, "25");
        assert_eq!(view.to_text, "75");
        assert!(!view.min_active);
        assert!(view.max_active);
    }

    #[test]
    fn test_no_track_ignores_pointer() {
        let mut slider = RangeSlider::new(WidgetId::new(1), SliderConfig::default());
        let response = slider.handle_event(&PointerEvent::mouse_down(0.0, 0.0));
        assert_eq!(response, WidgetResponse::default());
    }

    #[test]
    fn test_layout_and_render() {
        let mut slider = RangeSlider::new(WidgetId::new(1), SliderConfig::default());
        slider.layout(Rect::new(0.0, 0.0, 320.0, 80.0));

        let track = slider.track().unwrap();
        assert_eq!(track.x, 10.0);
        assert_eq!(track.width, 300.0);

        let mut commands = Vec::new();
        slider.render(&mut commands);

        // 2 labels x (value + caption), track, active range, 2 handles x (fill + outline)
        assert_eq!(commands.len(), 10);
        assert!(commands.iter().any(|c| matches!(c, RenderCommand::Text { text, .. } if text == "FROM")));
        assert!(commands.iter().any(|c| matches!(c, RenderCommand::Text { text, .. } if text == "10000")));
    }

    #[test]
    fn test_render_without_labels() {
        let config = SliderConfig::default().with_show_labels(false);
        let mut slider = RangeSlider::new(WidgetId::new(1), config);
        slider.layout(Rect::new(0.0, 0.0, 320.0, 20.0));

        let mut commands = Vec::new();
        slider.render(&mut commands);

        assert_eq!(commands.len(), 6);
        assert!(!commands.iter().any(|c| matches!(c, RenderCommand::Text { .. })));
    }
}
