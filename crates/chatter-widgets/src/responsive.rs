#![forbid(unsafe_code)]

//! Viewport-width dependent column sizing.

use chatter_core::geometry::{Rect, Size};
use serde::Deserialize;

/// Chooses the dialogue column width and whether touch scrolling is on.
///
/// Viewports at or below `breakpoint` wide are "narrow": they get the
/// narrow column and touch scrolling. Wider viewports get the wide column
/// and no scroller.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColumnPolicy {
    pub breakpoint: f32,
    pub narrow_width: f32,
    pub wide_width: f32,
    /// Vertical inset of the clip region and rest offset of the content.
    pub padding: f32,
}

impl Default for ColumnPolicy {
    fn default() -> Self {
        Self {
            breakpoint: 480.0,
            narrow_width: 320.0,
            wide_width: 600.0,
            padding: 20.0,
        }
    }
}

impl ColumnPolicy {
    #[must_use]
    pub fn breakpoint(mut self, px: f32) -> Self {
        self.breakpoint = px;
        self
    }

    #[must_use]
    pub fn narrow_width(mut self, px: f32) -> Self {
        self.narrow_width = px;
        self
    }

    #[must_use]
    pub fn wide_width(mut self, px: f32) -> Self {
        self.wide_width = px;
        self
    }

    #[must_use]
    pub fn padding(mut self, px: f32) -> Self {
        self.padding = px;
        self
    }

    #[inline]
    #[must_use]
    pub fn is_narrow(&self, viewport_width: f32) -> bool {
        viewport_width <= self.breakpoint
    }

    #[must_use]
    pub fn column_width(&self, viewport_width: f32) -> f32 {
        if self.is_narrow(viewport_width) {
            self.narrow_width
        } else {
            self.wide_width
        }
    }

    #[must_use]
    pub fn touch_scroll_enabled(&self, viewport_width: f32) -> bool {
        self.is_narrow(viewport_width)
    }

    /// Visible region of the content: the centered column, inset
    /// vertically by `padding`. Never negative in size.
    #[must_use]
    pub fn clip_rect(&self, viewport: Size) -> Rect {
        let column = self.column_width(viewport.width);
        Rect::new(
            (viewport.width - column) / 2.0,
            self.padding,
            column,
            (viewport.height - 2.0 * self.padding).max(0.0),
        )
    }
}
