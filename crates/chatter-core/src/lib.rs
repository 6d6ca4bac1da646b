#![forbid(unsafe_code)]

//! Core: pixel geometry, touch input events, and input-surface listeners.

pub mod event;
pub mod geometry;
pub mod surface;

pub use event::{TouchEvent, TouchPhase, TouchPoint};
pub use geometry::{Point, Rect, Size};
pub use surface::{HeadlessSurface, InputSurface, ListenerId, ListenerOptions, TouchAction};
