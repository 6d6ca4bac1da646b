#![forbid(unsafe_code)]

//! Canonical touch input types.
//!
//! # Design Notes
//!
//! - `TouchEvent::touches` lists every contact point currently down on the
//!   surface, not only the point that changed. End and Cancel events list the
//!   points that remain after the change.
//! - Coordinates are surface pixels, origin at top-left.

use smallvec::SmallVec;

/// Phase of a touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// A contact point was pressed.
    Start,
    /// One or more contact points moved.
    Move,
    /// A contact point was lifted.
    End,
    /// The host aborted the contact (e.g. the OS took over the gesture).
    Cancel,
}

impl TouchPhase {
    /// All phases, in lifecycle order.
    pub const ALL: [TouchPhase; 4] = [Self::Start, Self::Move, Self::End, Self::Cancel];
}

/// One contact point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Host-assigned identifier, stable for the lifetime of the contact.
    pub id: u64,
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    #[inline]
    pub const fn new(id: u64, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }
}

/// A touch event delivered by the host input system.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    /// Contact points currently on the surface.
    pub touches: SmallVec<[TouchPoint; 2]>,
}

impl TouchEvent {
    /// Create an event from any iterator of contact points.
    pub fn new(phase: TouchPhase, touches: impl IntoIterator<Item = TouchPoint>) -> Self {
        Self {
            phase,
            touches: touches.into_iter().collect(),
        }
    }

    /// Single-finger press at vertical position `y`.
    #[must_use]
    pub fn start(y: f32) -> Self {
        Self::new(TouchPhase::Start, [TouchPoint::new(0, 0.0, y)])
    }

    /// Single-finger move to vertical position `y`.
    #[must_use]
    pub fn moved(y: f32) -> Self {
        Self::new(TouchPhase::Move, [TouchPoint::new(0, 0.0, y)])
    }

    /// Last finger lifted.
    #[must_use]
    pub fn end() -> Self {
        Self::new(TouchPhase::End, [])
    }

    /// Gesture cancelled by the host.
    #[must_use]
    pub fn cancel() -> Self {
        Self::new(TouchPhase::Cancel, [])
    }

    /// The contact point when exactly one finger is down.
    #[must_use]
    pub fn single(&self) -> Option<&TouchPoint> {
        match self.touches.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_requires_exactly_one_point() {
        assert!(TouchEvent::start(10.0).single().is_some());
        assert!(TouchEvent::end().single().is_none());

        let two = TouchEvent::new(
            TouchPhase::Start,
            [TouchPoint::new(0, 0.0, 1.0), TouchPoint::new(1, 0.0, 2.0)],
        );
        assert!(two.single().is_none());
    }

    #[test]
    fn constructors_set_phase() {
        assert_eq!(TouchEvent::moved(3.0).phase, TouchPhase::Move);
        assert_eq!(TouchEvent::cancel().phase, TouchPhase::Cancel);
        assert_eq!(TouchEvent::moved(3.0).single().map(|p| p.y), Some(3.0));
    }
}
