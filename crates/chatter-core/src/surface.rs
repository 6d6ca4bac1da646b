#![forbid(unsafe_code)]

//! Input surfaces: where touch listeners are registered.
//!
//! A component that reacts to touch input registers one listener per phase it
//! cares about and keeps the returned [`ListenerId`]s. It must hand every id
//! back through [`InputSurface::unsubscribe`] on teardown and restore any
//! [`TouchAction`] it changed.

use crate::event::TouchPhase;

/// Opaque handle for a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Registration options for a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListenerOptions {
    /// A passive listener promises never to suppress the host's default
    /// handling (native scrolling). Listeners that need to suppress it must
    /// register with `passive: false`.
    pub passive: bool,
}

impl ListenerOptions {
    /// Options for a listener that may suppress default handling.
    pub const ACTIVE: Self = Self { passive: false };
    /// Options for a listener that never suppresses default handling.
    pub const PASSIVE: Self = Self { passive: true };
}

/// Host-level gesture handling for the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TouchAction {
    /// The host performs its default panning and zooming.
    #[default]
    Auto,
    /// The host performs no default touch behavior.
    None,
}

/// A host input system that touch listeners attach to.
pub trait InputSurface {
    /// Register a listener for `phase`.
    fn subscribe(&mut self, phase: TouchPhase, options: ListenerOptions) -> ListenerId;

    /// Remove a previously registered listener. Unknown ids are ignored.
    fn unsubscribe(&mut self, id: ListenerId);

    /// Set the host's default gesture handling.
    fn set_touch_action(&mut self, action: TouchAction);

    /// Current default gesture handling.
    fn touch_action(&self) -> TouchAction;
}

#[derive(Debug, Clone, Copy)]
struct Registration {
    id: ListenerId,
    phase: TouchPhase,
    options: ListenerOptions,
}

/// An in-memory [`InputSurface`] with no real input system behind it.
///
/// Records live registrations so tests and headless hosts can inspect what
/// a component attached.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    next_id: u64,
    registrations: Vec<Registration>,
    touch_action: TouchAction,
}

impl HeadlessSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registrations.len()
    }

    /// Number of live listeners for one phase.
    #[must_use]
    pub fn listeners_for(&self, phase: TouchPhase) -> usize {
        self.registrations
            .iter()
            .filter(|r| r.phase == phase)
            .count()
    }

    /// Whether any live listener for `phase` was registered non-passive.
    #[must_use]
    pub fn has_active_listener(&self, phase: TouchPhase) -> bool {
        self.registrations
            .iter()
            .any(|r| r.phase == phase && !r.options.passive)
    }
}

impl InputSurface for HeadlessSurface {
    fn subscribe(&mut self, phase: TouchPhase, options: ListenerOptions) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.registrations.push(Registration { id, phase, options });
        #[cfg(feature = "tracing")]
        tracing::trace!(listener = id.0, ?phase, passive = options.passive, "subscribe");
        id
    }

    fn unsubscribe(&mut self, id: ListenerId) {
        self.registrations.retain(|r| r.id != id);
        #[cfg(feature = "tracing")]
        tracing::trace!(listener = id.0, "unsubscribe");
    }

    fn set_touch_action(&mut self, action: TouchAction) {
        self.touch_action = action;
    }

    fn touch_action(&self) -> TouchAction {
        self.touch_action
    }
}
