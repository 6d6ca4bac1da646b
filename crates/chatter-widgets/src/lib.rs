#![forbid(unsafe_code)]

//! Dialogue widgets for Chatter.
//!
//! - [`DialogueRenderer`] - lays out speaker/text entries and mounts them
//! - [`ScrollViewport`] - clamped single-finger vertical scrolling
//! - [`DialoguePayload`] - decoding of the provider's JSON document
//! - [`ColumnPolicy`] - viewport-width dependent column sizing
//! - [`DialogueView`] - owns a scene and keeps layout and scroller in step

pub mod dialogue;
pub mod payload;
pub mod responsive;
pub mod scroll;
pub mod view;

pub use dialogue::{
    Columns, DialogueEntry, DialogueLayout, DialogueMetrics, DialogueRenderer, EntryLayout,
    LabelLayout, LineLayout, PlacedKind, PlacedToken,
};
pub use payload::{DialogueContent, DialoguePayload, ImageRef, PayloadError};
pub use responsive::ColumnPolicy;
pub use scroll::{
    ALLOW_OVERSCROLL_WHEN_CONTENT_FITS, EventOutcome, ScrollBounds, ScrollConfig, ScrollState,
    ScrollViewport,
};
pub use view::DialogueView;
