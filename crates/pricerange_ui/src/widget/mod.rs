//! Widget system for UI components.
//!
//! The range slider is the only concrete widget; the tree holds the host's
//! element hierarchy for hit testing and event bubbling.

mod core;
mod range_slider;
mod tree;

pub use self::core::{Widget, WidgetFlags, WidgetId, WidgetResponse, WidgetState};
pub use self::range_slider::{DragState, Handle, HandleSide, RangeSlider, RangeValues, SliderView};
pub use self::tree::WidgetTree;
