//! # PRICERANGE
//!
//! Host integration for the price range slider: a document of elements the
//! slider mounts into, pointer dispatch, and change events.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                          DOCUMENT                                │
//! ├──────────────────────────────────────────────────────────────────┤
//! │  Pointer Events → Hit Test → RangeSlider → Sync (styles, text,   │
//! │                                    │         field values)       │
//! │                                    ↓                             │
//! │                       priceRangeChange (bubbling)                │
//! │                                    ↓                             │
//! │                       crossbeam channels → listeners             │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `document`: element tree, hit testing, listeners
//! - `mount`: mounting, sync, programmatic values, bound fields, destroy
//! - `dispatch`: pointer routing and click synthesis
//! - `events`: change event type and channels

pub mod dispatch;
pub mod document;
pub mod error;
pub mod events;
pub mod mount;

// Re-export the widget crate
pub use pricerange_ui as ui;

pub use dispatch::DispatchResult;
pub use document::{Document, Element, ElementId, Role, FILTER_ATTRIBUTE};
pub use error::{DocumentError, DocumentResult};
pub use events::{ChangeBus, ChangeReceiver, ChangeSender, Delivery, RangeChangeEvent, EVENT_NAME};
pub use mount::{class, SliderId, SliderInstance, DEFAULT_MAX_FIELD, DEFAULT_MIN_FIELD};
