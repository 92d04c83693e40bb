//! # PRICERANGE UI
//!
//! Two-handle range slider for picking a `(min, max)` pair, e.g. a price
//! range, by dragging handles, clicking the track, or setting values from
//! code.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       SLIDER PIPELINE                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Pointer Events → RangeSlider → ValueScale → Render Commands │
//! │        ↓               ↓             ↓              ↓        │
//! │   Handle Hits     Drag State    Quantize/Clamp   Host Sync   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The crate owns no host. A host (see the `pricerange` crate) feeds
//! [`PointerEvent`]s in, reads [`WidgetResponse`]s back, and turns
//! `committed` responses into change notifications.
//!
//! ## Invariants
//!
//! After every state transition:
//! - `domain_min <= min <= max <= domain_max`
//! - both values sit on a step boundary counted from `domain_min`,
//!   unless clamped to a domain edge
//! - at most one handle is active

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod render;
pub mod scale;
pub mod style;
pub mod widget;

pub use config::SliderConfig;
pub use error::{ConfigError, ConfigResult};
pub use input::{InputState, PointerEvent, PointerKind};
pub use layout::{Layout, Rect};
pub use render::{RenderCommand, UIBatch, UIRenderer, UIVertex};
pub use scale::ValueScale;
pub use style::{Color, SliderStyle};
pub use widget::{
    DragState, HandleSide, RangeSlider, RangeValues, Widget, WidgetId, WidgetResponse, WidgetState,
    WidgetTree,
};
