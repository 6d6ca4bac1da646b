#![forbid(unsafe_code)]

//! Greedy line packing for mixed word/icon runs.
//!
//! [`LineBox`] is a small value cursor. Each call to [`LineBox::place`]
//! consumes the cursor and returns the advanced one together with where the
//! item landed, so a layout pass is a fold over tokens with no shared mutable
//! state.
//!
//! # Break rule
//!
//! An item of width `w` at cursor `x` breaks to a new line when
//! `x + w > max_x`. A break resets `x` to the indent and advances the line
//! offset by one line height. The item is then placed unconditionally, even
//! if it is still wider than the remaining space: items are never split.
//! The check is made once per item, so a single oversized item occupies one
//! line by itself.

/// Horizontal bounds and line pitch for packing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineLimits {
    /// Right edge an item may not cross without breaking.
    pub max_x: f32,
    /// Cursor position at the start of every wrapped line.
    pub indent: f32,
    /// Vertical distance between consecutive lines.
    pub line_height: f32,
}

/// Packing cursor: horizontal position, current line offset, line index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineBox {
    pub x: f32,
    /// Top of the current line, relative to the first line.
    pub y: f32,
    /// Zero-based index of the current line.
    pub line: usize,
}

/// Where one item was placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Left edge of the item.
    pub x: f32,
    /// Top of the line the item sits on.
    pub line_y: f32,
    pub line: usize,
    /// Whether placing this item opened a new line.
    pub wrapped: bool,
}

impl LineBox {
    /// Cursor at `x` on the first line.
    #[must_use]
    pub const fn new(x: f32) -> Self {
        Self { x, y: 0.0, line: 0 }
    }

    /// Place an item of `width` and advance the cursor by `advance`.
    ///
    /// `advance` is usually `width`, plus any trailing gap the item owns.
    #[must_use]
    pub fn place(self, width: f32, advance: f32, limits: &LineLimits) -> (Self, Placement) {
        let wrapped = self.x + width > limits.max_x;
        let start = if wrapped {
            Self {
                x: limits.indent,
                y: self.y + limits.line_height,
                line: self.line + 1,
            }
        } else {
            self
        };
        let placement = Placement {
            x: start.x,
            line_y: start.y,
            line: start.line,
            wrapped,
        };
        (
            Self {
                x: start.x + advance,
                ..start
            },
            placement,
        )
    }

    /// Lines used so far (always at least one).
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.line + 1
    }

    /// Height of all lines used so far.
    #[must_use]
    pub fn height(&self, line_height: f32) -> f32 {
        self.line_count() as f32 * line_height
    }
}
