#![forbid(unsafe_code)]

//! Chatter public facade crate.
//!
//! Re-exports the dialogue layout engine, the touch-scroll viewport, and
//! their supporting types, plus a prelude and a logging initializer.
//!
//! # Example
//! ```
//! use chatter::prelude::*;
//!
//! let content = DialoguePayload::from_json(
//!     r#"{"dialogue":[{"name":"Bob","text":"Hello {smile} world"}],
//!         "emojies":[{"name":"smile","url":"smile.png"}]}"#,
//! )?
//! .into_parts();
//!
//! let mut surface = HeadlessSurface::new();
//! let mut view = DialogueView::new(AdvanceMeasurer::default(), Size::new(375.0, 667.0));
//! view.load(&mut surface, content);
//! assert!(view.content_height() > 0.0);
//! view.teardown(&mut surface);
//! # Ok::<(), chatter::Error>(())
//! ```

use std::fmt;

pub mod logging;

// --- Core re-exports -------------------------------------------------------

pub use chatter_core::event::{TouchEvent, TouchPhase, TouchPoint};
pub use chatter_core::geometry::{Point, Rect, Size};
pub use chatter_core::surface::{
    HeadlessSurface, InputSurface, ListenerId, ListenerOptions, TouchAction,
};

// --- Render re-exports -----------------------------------------------------

pub use chatter_render::{ImageHandle, NodeId, NodeKind, Rgb, Scene, TextStyle};

// --- Text re-exports -------------------------------------------------------

pub use chatter_text::{
    AdvanceMeasurer, CachedMeasurer, FnMeasurer, ImageTable, TextMeasurer, Token, tokenize,
};

// --- Widget re-exports -----------------------------------------------------

pub use chatter_widgets::{
    ColumnPolicy, Columns, DialogueContent, DialogueEntry, DialogueLayout, DialogueMetrics,
    DialoguePayload, DialogueRenderer, DialogueView, EventOutcome, PayloadError, ScrollBounds,
    ScrollConfig, ScrollViewport,
};

pub use logging::LogConfig;

// --- Errors ---------------------------------------------------------------

/// Top-level error type for chatter apps.
#[derive(Debug)]
pub enum Error {
    /// The content payload could not be read or decoded.
    Payload(PayloadError),
    /// A global log subscriber could not be installed.
    Logging(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Payload(err) => write!(f, "{err}"),
            Self::Logging(msg) => write!(f, "logging setup failed: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Payload(err) => Some(err),
            Self::Logging(_) => None,
        }
    }
}

impl From<PayloadError> for Error {
    fn from(err: PayloadError) -> Self {
        Self::Payload(err)
    }
}

/// Standard result type for chatter APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        AdvanceMeasurer, DialogueContent, DialogueEntry, DialoguePayload, DialogueView, Error,
        EventOutcome, HeadlessSurface, InputSurface, Result, Size, TextMeasurer, TouchEvent,
    };

    pub use crate::{core, render, text, widgets};
}

pub use chatter_core as core;
pub use chatter_render as render;
pub use chatter_text as text;
pub use chatter_widgets as widgets;
