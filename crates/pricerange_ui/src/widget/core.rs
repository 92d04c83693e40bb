//! Core widget types and traits.

use crate::input::PointerEvent;
use crate::layout::Rect;
use crate::render::RenderCommand;

/// Unique identifier for a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Creates a new widget ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Widget state flags (bitfield).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetFlags(u32);

impl WidgetFlags {
    /// Widget is visible.
    pub const VISIBLE: u32 = 1 << 0;
    /// Widget is being dragged.
    pub const ACTIVE: u32 = 1 << 1;
    /// Widget needs redraw.
    pub const DIRTY_RENDER: u32 = 1 << 2;

    /// Default flags for a new widget.
    pub const DEFAULT: Self = Self(Self::VISIBLE | Self::DIRTY_RENDER);

    /// Creates new flags with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Returns true if the flag is set.
    #[inline]
    #[must_use]
    pub const fn has(self, flag: u32) -> bool {
        (self.0 & flag) != 0
    }

    /// Sets a flag.
    #[inline]
    pub fn set(&mut self, flag: u32) {
        self.0 |= flag;
    }

    /// Clears a flag.
    #[inline]
    pub fn clear(&mut self, flag: u32) {
        self.0 &= !flag;
    }
}

/// Common widget state.
#[derive(Debug, Clone)]
pub struct WidgetState {
    /// Widget identifier.
    pub id: WidgetId,
    /// Bounding rectangle (set after layout).
    pub rect: Rect,
    /// State flags.
    pub flags: WidgetFlags,
    /// Parent widget ID (None for root).
    pub parent: Option<WidgetId>,
}

impl WidgetState {
    /// Creates a new widget state.
    #[must_use]
    pub fn new(id: WidgetId) -> Self {
        Self {
            id,
            rect: Rect::ZERO,
            flags: WidgetFlags::DEFAULT,
            parent: None,
        }
    }

    /// Creates a widget state with bounds.
    #[must_use]
    pub fn with_rect(id: WidgetId, rect: Rect) -> Self {
        Self {
            rect,
            ..Self::new(id)
        }
    }

    /// Returns true if the widget is visible.
    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.flags.has(WidgetFlags::VISIBLE)
    }

    /// Marks the widget as needing redraw.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.flags.set(WidgetFlags::DIRTY_RENDER);
    }

    /// Clears the redraw flag, returning whether it was set.
    #[inline]
    pub fn take_dirty(&mut self) -> bool {
        let dirty = self.flags.has(WidgetFlags::DIRTY_RENDER);
        self.flags.clear(WidgetFlags::DIRTY_RENDER);
        dirty
    }
}

/// Response from handling one pointer event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetResponse {
    /// A drag started on this event.
    pub pressed: bool,
    /// A drag ended on this event.
    pub released: bool,
    /// A track click was resolved on this event.
    pub clicked: bool,
    /// The selected values changed; the view must be re-synced.
    pub changed: bool,
    /// A gesture completed; exactly one change notification is due.
    pub committed: bool,
    /// The host should suppress its default handling (text selection,
    /// native drag, scrolling).
    pub consumed: bool,
}

/// Base trait for all widgets.
pub trait Widget {
    /// Returns the widget's state.
    fn state(&self) -> &WidgetState;

    /// Returns mutable access to the widget's state.
    fn state_mut(&mut self) -> &mut WidgetState;

    /// Handles one pointer event.
    ///
    /// Runs synchronously inside the host's dispatch; must not block.
    fn handle_event(&mut self, event: &PointerEvent) -> WidgetResponse;

    /// Generates render commands for this widget.
    fn render(&self, commands: &mut Vec<RenderCommand>);
}
