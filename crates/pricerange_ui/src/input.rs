//! Pointer input for slider interaction.
//!
//! Mouse and touch are folded into one event stream. Only the horizontal
//! position matters to the slider; `y` is kept for hit testing.

/// Source device of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerKind {
    /// Mouse pointer.
    #[default]
    Mouse,
    /// First touch point of a touch sequence.
    Touch,
}

/// A single pointer event in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Button pressed / touch started.
    Down {
        /// Source device.
        kind: PointerKind,
        /// Client X.
        x: f32,
        /// Client Y.
        y: f32,
    },
    /// Pointer moved.
    Move {
        /// Source device.
        kind: PointerKind,
        /// Client X.
        x: f32,
        /// Client Y.
        y: f32,
    },
    /// Button released / touch ended.
    Up {
        /// Source device.
        kind: PointerKind,
        /// Client X.
        x: f32,
        /// Client Y.
        y: f32,
    },
    /// Press and release on the same target.
    Click {
        /// Client X.
        x: f32,
        /// Client Y.
        y: f32,
    },
}

impl PointerEvent {
    /// Mouse button press.
    #[must_use]
    pub const fn mouse_down(x: f32, y: f32) -> Self {
        Self::Down { kind: PointerKind::Mouse, x, y }
    }

    /// Mouse motion.
    #[must_use]
    pub const fn mouse_move(x: f32, y: f32) -> Self {
        Self::Move { kind: PointerKind::Mouse, x, y }
    }

    /// Mouse button release.
    #[must_use]
    pub const fn mouse_up(x: f32, y: f32) -> Self {
        Self::Up { kind: PointerKind::Mouse, x, y }
    }

    /// Touch start.
    #[must_use]
    pub const fn touch_start(x: f32, y: f32) -> Self {
        Self::Down { kind: PointerKind::Touch, x, y }
    }

    /// Touch motion.
    #[must_use]
    pub const fn touch_move(x: f32, y: f32) -> Self {
        Self::Move { kind: PointerKind::Touch, x, y }
    }

    /// Returns the event position.
    #[must_use]
    pub const fn position(&self) -> (f32, f32) {
        match *self {
            Self::Down { x, y, .. }
            | Self::Move { x, y, .. }
            | Self::Up { x, y, .. }
            | Self::Click { x, y } => (x, y),
        }
    }
}

/// Pointer tracking between events.
///
/// Hosts feed every event through [`InputState::apply`] so that events
/// without coordinates (a touch end carries no touch point) can be
/// completed with the last known position.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Current pointer X position.
    pub pointer_x: f32,
    /// Current pointer Y position.
    pub pointer_y: f32,
    /// Device of the last press, move or release.
    kind: PointerKind,
}

impl InputState {
    /// Creates a new empty input state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an event.
    pub fn apply(&mut self, event: &PointerEvent) {
        let (x, y) = event.position();
        self.pointer_x = x;
        self.pointer_y = y;

        match *event {
            PointerEvent::Down { kind, .. }
            | PointerEvent::Move { kind, .. }
            | PointerEvent::Up { kind, .. } => self.kind = kind,
            PointerEvent::Click { .. } => {}
        }
    }

    /// Builds a release event at the last known position.
    #[must_use]
    pub fn release(&self) -> PointerEvent {
        PointerEvent::Up {
            kind: self.kind,
            x: self.pointer_x,
            y: self.pointer_y,
        }
    }

    /// Returns the device of the last press, move or release.
    #[must_use]
    pub fn kind(&self) -> PointerKind {
        self.kind
    }
}
