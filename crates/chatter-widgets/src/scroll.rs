#![forbid(unsafe_code)]

//! Clamped single-finger vertical scrolling.
//!
//! A [`ScrollViewport`] moves one content node up and down in response to
//! single-finger drags, keeping its vertical offset inside a clamp range
//! derived from the content extent, the viewport height, and a top padding.
//!
//! # Gesture state machine
//!
//! ```text
//!            single-point Start
//!   Idle ───────────────────────▶ Dragging ──┐ Move (single point):
//!    ▲                               │       │ offset = clamp(anchor + Δy)
//!    └──────── End / Cancel ─────────┘◀──────┘
//! ```
//!
//! - A Start while already dragging is ignored; the gesture keeps its
//!   original anchors.
//! - A Start or Move carrying more than one contact point is ignored but
//!   does not end an ongoing drag.
//! - There is no inertia: releasing stops the content where it is.
//!
//! # Clamp range
//!
//! `max_y = top_padding` (scrolled to the top) and
//! `min_y = top_padding + viewport_height − content_height` (scrolled to the
//! bottom). Content shorter than the viewport gives `min_y > max_y`; see
//! [`ScrollConfig::allow_overscroll_when_content_fits`].
//!
//! # Listener discipline
//!
//! [`ScrollViewport::attach`] registers one listener per touch phase and
//! turns off the surface's default touch handling; [`ScrollViewport::detach`]
//! undoes both. Each is idempotent, so attaching twice never double-registers.

use chatter_core::event::{TouchEvent, TouchPhase};
use chatter_core::surface::{InputSurface, ListenerId, ListenerOptions, TouchAction};
use chatter_render::{NodeId, Scene};
use smallvec::SmallVec;

/// Whether content shorter than the viewport may be dragged by default.
///
/// `false` freezes such content at its top rest position.
pub const ALLOW_OVERSCROLL_WHEN_CONTENT_FITS: bool = false;

/// Scroll behavior options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollConfig {
    /// When the content is shorter than the viewport (`min_y > max_y`):
    /// - `false`: the offset is pinned at `max_y`; dragging has no effect.
    /// - `true`: the offset may move within `[max_y, min_y]`, letting the
    ///   content slide down until its bottom meets the viewport bottom.
    pub allow_overscroll_when_content_fits: bool,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            allow_overscroll_when_content_fits: ALLOW_OVERSCROLL_WHEN_CONTENT_FITS,
        }
    }
}

impl ScrollConfig {
    #[must_use]
    pub fn allow_overscroll_when_content_fits(mut self, allow: bool) -> Self {
        self.allow_overscroll_when_content_fits = allow;
        self
    }
}

/// Legal vertical offsets for the content node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollBounds {
    /// Offset when scrolled fully to the bottom.
    pub min_y: f32,
    /// Offset when scrolled fully to the top.
    pub max_y: f32,
}

impl ScrollBounds {
    #[must_use]
    pub fn new(viewport_height: f32, top_padding: f32, content_height: f32) -> Self {
        Self {
            min_y: top_padding + viewport_height - content_height,
            max_y: top_padding,
        }
    }

    /// Whether the content is shorter than the viewport.
    #[inline]
    #[must_use]
    pub fn content_fits(&self) -> bool {
        self.min_y > self.max_y
    }

    /// Clamp a proposed offset.
    ///
    /// Never panics, including for inverted ranges; a NaN proposal resolves
    /// to an endpoint of the range.
    #[must_use]
    pub fn clamp(&self, proposed: f32, config: &ScrollConfig) -> f32 {
        if !self.content_fits() {
            proposed.max(self.min_y).min(self.max_y)
        } else if config.allow_overscroll_when_content_fits {
            proposed.max(self.max_y).min(self.min_y)
        } else {
            self.max_y
        }
    }
}

/// Mutable gesture state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub is_dragging: bool,
    /// Touch y at gesture start.
    pub drag_anchor_y: f32,
    /// Content offset at gesture start.
    pub content_anchor_y: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl ScrollState {
    fn idle(bounds: ScrollBounds) -> Self {
        Self {
            is_dragging: false,
            drag_anchor_y: 0.0,
            content_anchor_y: 0.0,
            min_y: bounds.min_y,
            max_y: bounds.max_y,
        }
    }

    #[inline]
    fn bounds(&self) -> ScrollBounds {
        ScrollBounds {
            min_y: self.min_y,
            max_y: self.max_y,
        }
    }
}

/// Result of offering an event to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The viewport did nothing with the event.
    Ignored,
    /// The viewport acted on the event.
    Consumed {
        /// The host should suppress its default handling (native scrolling).
        prevent_default: bool,
    },
}

impl EventOutcome {
    #[must_use]
    pub fn is_consumed(&self) -> bool {
        matches!(self, Self::Consumed { .. })
    }

    #[must_use]
    pub fn prevents_default(&self) -> bool {
        matches!(
            self,
            Self::Consumed {
                prevent_default: true
            }
        )
    }
}

/// Touch-drag scroller for one content node.
#[derive(Debug)]
pub struct ScrollViewport {
    content: NodeId,
    viewport_height: f32,
    top_padding: f32,
    content_height: f32,
    config: ScrollConfig,
    state: ScrollState,
    listeners: SmallVec<[ListenerId; 4]>,
    saved_touch_action: TouchAction,
}

impl ScrollViewport {
    /// Create a detached viewport for `content`.
    #[must_use]
    pub fn new(content: NodeId, viewport_height: f32, top_padding: f32, content_height: f32) -> Self {
        let bounds = ScrollBounds::new(viewport_height, top_padding, content_height);
        Self {
            content,
            viewport_height,
            top_padding,
            content_height,
            config: ScrollConfig::default(),
            state: ScrollState::idle(bounds),
            listeners: SmallVec::new(),
            saved_touch_action: TouchAction::Auto,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: ScrollConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn content(&self) -> NodeId {
        self.content
    }

    #[must_use]
    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    #[must_use]
    pub fn bounds(&self) -> ScrollBounds {
        self.state.bounds()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        !self.listeners.is_empty()
    }

    /// Update the content extent after a relayout.
    pub fn set_content_height(&mut self, content_height: f32) {
        self.content_height = content_height;
        self.recompute_bounds();
    }

    /// Update the visible height after a resize.
    pub fn set_viewport_height(&mut self, viewport_height: f32) {
        self.viewport_height = viewport_height;
        self.recompute_bounds();
    }

    /// Register touch listeners and disable default touch handling.
    ///
    /// Does nothing if already attached.
    pub fn attach(&mut self, surface: &mut dyn InputSurface) {
        if self.is_attached() {
            return;
        }
        self.saved_touch_action = surface.touch_action();
        surface.set_touch_action(TouchAction::None);
        for phase in TouchPhase::ALL {
            let options = match phase {
                TouchPhase::Start | TouchPhase::Move => ListenerOptions::ACTIVE,
                TouchPhase::End | TouchPhase::Cancel => ListenerOptions::PASSIVE,
            };
            self.listeners.push(surface.subscribe(phase, options));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            min_y = self.state.min_y,
            max_y = self.state.max_y,
            "scroll viewport attached"
        );
    }

    /// Remove every listener and restore default touch handling.
    ///
    /// Also ends any gesture in progress. Does nothing if not attached.
    pub fn detach(&mut self, surface: &mut dyn InputSurface) {
        if !self.is_attached() {
            return;
        }
        for id in self.listeners.drain(..) {
            surface.unsubscribe(id);
        }
        surface.set_touch_action(self.saved_touch_action);
        self.state.is_dragging = false;

        #[cfg(feature = "tracing")]
        tracing::debug!("scroll viewport detached");
    }

    /// Offer a touch event. Events are ignored while detached.
    pub fn handle_touch(&mut self, event: &TouchEvent, scene: &mut Scene) -> EventOutcome {
        if !self.is_attached() {
            return EventOutcome::Ignored;
        }
        match event.phase {
            TouchPhase::Start => self.on_start(event, scene),
            TouchPhase::Move => self.on_move(event, scene),
            TouchPhase::End | TouchPhase::Cancel => self.on_end(),
        }
    }

    fn on_start(&mut self, event: &TouchEvent, scene: &Scene) -> EventOutcome {
        if self.state.is_dragging {
            return EventOutcome::Ignored;
        }
        let (Some(point), Some(position)) = (event.single(), scene.position(self.content)) else {
            return EventOutcome::Ignored;
        };
        self.state.is_dragging = true;
        self.state.drag_anchor_y = point.y;
        self.state.content_anchor_y = position.y;
        EventOutcome::Consumed {
            prevent_default: true,
        }
    }

    fn on_move(&mut self, event: &TouchEvent, scene: &mut Scene) -> EventOutcome {
        if !self.state.is_dragging {
            return EventOutcome::Ignored;
        }
        let Some(point) = event.single() else {
            return EventOutcome::Ignored;
        };
        let delta = point.y - self.state.drag_anchor_y;
        let y = self
            .bounds()
            .clamp(self.state.content_anchor_y + delta, &self.config);
        scene.set_y(self.content, y);

        #[cfg(feature = "tracing")]
        tracing::trace!(delta, y, "scroll move");

        EventOutcome::Consumed {
            prevent_default: true,
        }
    }

    fn on_end(&mut self) -> EventOutcome {
        if !self.state.is_dragging {
            return EventOutcome::Ignored;
        }
        self.state.is_dragging = false;
        EventOutcome::Consumed {
            prevent_default: false,
        }
    }

    fn recompute_bounds(&mut self) {
        let bounds = ScrollBounds::new(self.viewport_height, self.top_padding, self.content_height);
        self.state.min_y = bounds.min_y;
        self.state.max_y = bounds.max_y;
    }
}

#[cfg(feature = "tracing")]
impl Drop for ScrollViewport {
    fn drop(&mut self) {
        if self.is_attached() {
            tracing::warn!(
                listeners = self.listeners.len(),
                "scroll viewport dropped while attached; listeners leak until the surface is reset"
            );
        }
    }
}
