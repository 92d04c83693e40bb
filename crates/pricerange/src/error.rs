//! # Document Error Types
//!
//! Addressing mistakes made by the embedding code. Pointer input never
//! fails.

use thiserror::Error;

use crate::document::ElementId;
use crate::mount::SliderId;

/// Errors that can occur while building or driving a document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// No element with this id exists.
    #[error("element not found: {0:?}")]
    ElementNotFound(ElementId),

    /// No mounted slider with this id exists.
    #[error("slider not found: {0:?}")]
    SliderNotFound(SliderId),

    /// The element is not a field bound to any slider.
    #[error("element {0:?} is not a field bound to a slider")]
    UnboundField(ElementId),

    /// Track parts are created by the slider itself.
    #[error("cannot append a {role} element by hand")]
    ReservedRole {
        /// Role that was requested.
        role: &'static str,
    },
}

/// Result type for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;
