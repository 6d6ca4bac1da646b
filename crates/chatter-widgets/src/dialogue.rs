#![forbid(unsafe_code)]

//! Dialogue layout engine.
//!
//! Lays out `(speaker, text)` entries top to bottom inside a fixed-width
//! column. Each entry gets an optional avatar, a bold `"Name: "` label, and
//! its text packed into lines of words and inline icons.
//!
//! Layout is split in two passes:
//!
//! 1. [`DialogueRenderer::layout`] is pure. It produces a [`DialogueLayout`]
//!    describing every placement and touches no scene.
//! 2. [`DialogueRenderer::mount`] replaces the children of a content node
//!    with one group per entry and one sub-group per wrapped line.
//!
//! [`DialogueRenderer::render`] runs both and returns the total height.
//!
//! # Geometry (per entry, in entry-group coordinates)
//!
//! ```text
//! |<- avatar ->|<- pad ->|Name: word word {icon} word |
//! |            |         |word word word              |   <- wrapped line
//! ```
//!
//! - The avatar sits at the origin, `avatar_size` square.
//! - The label starts at `indent = avatar_size + padding`.
//! - The first line's cursor starts after the label; wrapped lines restart
//!   at `indent`.
//! - A token breaks the line when `x + width > available − 2·padding − avatar_size`.
//! - Icons are vertically centered in the line; words sit at the line top.
//! - Entry height is `lines × line_height + padding / 2`.
//!
//! Layout is total: missing avatars, unknown icons, empty text, and
//! oversized words all degrade to a well-defined geometry.

use chatter_core::geometry::{Point, Size};
use chatter_render::{NodeId, Scene};
use chatter_text::{
    ImageHandle, ImageTable, LineBox, LineLimits, TextMeasurer, TextStyle, Token, tokenize,
};
use serde::{Deserialize, Serialize};

/// One line of dialogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueEntry {
    #[serde(rename = "name", alias = "speaker")]
    pub speaker: String,
    pub text: String,
}

impl DialogueEntry {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
        }
    }
}

/// Sizes and styles used by the layout engine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DialogueMetrics {
    /// Side of the square avatar slot (default: 40).
    pub avatar_size: f32,
    /// Side of an inline icon (default: 24).
    pub icon_size: f32,
    /// Horizontal space after each icon (default: 5).
    pub icon_gap: f32,
    /// Line pitch (default: 28).
    pub line_height: f32,
    /// Column padding; half of it separates entries (default: 20).
    pub padding: f32,
    #[serde(skip)]
    pub speaker_style: TextStyle,
    #[serde(skip)]
    pub body_style: TextStyle,
}

impl Default for DialogueMetrics {
    fn default() -> Self {
        Self {
            avatar_size: 40.0,
            icon_size: 24.0,
            icon_gap: 5.0,
            line_height: 28.0,
            padding: 20.0,
            speaker_style: TextStyle::speaker(),
            body_style: TextStyle::body(),
        }
    }
}

impl DialogueMetrics {
    #[must_use]
    pub fn avatar_size(mut self, px: f32) -> Self {
        self.avatar_size = px;
        self
    }

    #[must_use]
    pub fn icon_size(mut self, px: f32) -> Self {
        self.icon_size = px;
        self
    }

    #[must_use]
    pub fn icon_gap(mut self, px: f32) -> Self {
        self.icon_gap = px;
        self
    }

    #[must_use]
    pub fn line_height(mut self, px: f32) -> Self {
        self.line_height = px;
        self
    }

    #[must_use]
    pub fn padding(mut self, px: f32) -> Self {
        self.padding = px;
        self
    }

    #[must_use]
    pub fn speaker_style(mut self, style: TextStyle) -> Self {
        self.speaker_style = style;
        self
    }

    #[must_use]
    pub fn body_style(mut self, style: TextStyle) -> Self {
        self.body_style = style;
        self
    }

    /// Vertical gap appended after every entry.
    #[inline]
    #[must_use]
    pub fn entry_gap(&self) -> f32 {
        self.padding / 2.0
    }

    /// Horizontal start of the label and of every wrapped line.
    #[inline]
    #[must_use]
    pub fn indent(&self) -> f32 {
        self.avatar_size + self.padding
    }

    /// Break limit for a column of `available_width`.
    #[inline]
    #[must_use]
    pub fn max_text_width(&self, available_width: f32) -> f32 {
        available_width - 2.0 * self.padding - self.avatar_size
    }
}

/// Width of the dialogue column and of the whole drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Columns {
    pub available_width: f32,
    pub renderer_width: f32,
}

impl Columns {
    #[must_use]
    pub const fn new(available_width: f32, renderer_width: f32) -> Self {
        Self {
            available_width,
            renderer_width,
        }
    }

    /// Left edge that centers the column on the surface.
    #[inline]
    #[must_use]
    pub fn left(&self) -> f32 {
        (self.renderer_width - self.available_width) / 2.0
    }
}

/// What a placed token draws.
#[derive(Debug, Clone, PartialEq)]
pub enum PlacedKind {
    /// A word run (with its trailing space).
    Word(String),
    Icon { name: String, handle: ImageHandle },
}

/// A token positioned within its line.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedToken {
    pub kind: PlacedKind,
    pub x: f32,
    /// Offset from the line top.
    pub y: f32,
    pub width: f32,
}

/// A wrapped line of tokens.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineLayout {
    /// Offset of the line from the entry top.
    pub y: f32,
    pub tokens: Vec<PlacedToken>,
}

/// The speaker label of an entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLayout {
    pub text: String,
    pub x: f32,
    pub width: f32,
}

/// Layout of one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryLayout {
    /// Position of the entry group in content coordinates.
    pub origin: Point,
    /// Vertical space consumed, including the trailing gap.
    pub height: f32,
    pub avatar: Option<ImageHandle>,
    pub label: LabelLayout,
    /// At least one line, even for empty text.
    pub lines: Vec<LineLayout>,
}

impl EntryLayout {
    /// Placed tokens in reading order.
    pub fn tokens(&self) -> impl Iterator<Item = &PlacedToken> {
        self.lines.iter().flat_map(|l| l.tokens.iter())
    }
}

/// Layout of a whole dialogue.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DialogueLayout {
    entries: Vec<EntryLayout>,
    total_height: f32,
}

impl DialogueLayout {
    #[must_use]
    pub fn entries(&self) -> &[EntryLayout] {
        &self.entries
    }

    /// Content extent: the sum of all entry heights.
    #[must_use]
    pub fn total_height(&self) -> f32 {
        self.total_height
    }

    /// Wrapped lines across all entries.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.entries.iter().map(|e| e.lines.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Lays out dialogue and mounts it into a [`Scene`].
#[derive(Debug)]
pub struct DialogueRenderer<M> {
    metrics: DialogueMetrics,
    measurer: M,
}

impl<M: TextMeasurer> DialogueRenderer<M> {
    /// Renderer with default metrics.
    pub fn new(measurer: M) -> Self {
        Self {
            metrics: DialogueMetrics::default(),
            measurer,
        }
    }

    #[must_use]
    pub fn with_metrics(mut self, metrics: DialogueMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    #[must_use]
    pub fn metrics(&self) -> &DialogueMetrics {
        &self.metrics
    }

    pub fn measurer_mut(&mut self) -> &mut M {
        &mut self.measurer
    }

    /// Compute the layout of `entries` without touching any scene.
    pub fn layout(
        &mut self,
        entries: &[DialogueEntry],
        columns: Columns,
        avatars: &ImageTable,
        icons: &ImageTable,
    ) -> DialogueLayout {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "dialogue_layout",
            entries = entries.len(),
            available_width = columns.available_width
        )
        .entered();

        let mut y = 0.0;
        let mut out = Vec::with_capacity(entries.len());
        for entry in entries {
            let laid = self.layout_entry(entry, y, columns, avatars, icons);
            y += laid.height;
            out.push(laid);
        }

        DialogueLayout {
            entries: out,
            total_height: y,
        }
    }

    /// Replace the children of `content` with the nodes for `layout`.
    ///
    /// Returns the layout's total height. If `content` is not a live node
    /// nothing is mounted.
    pub fn mount(&self, scene: &mut Scene, content: NodeId, layout: &DialogueLayout) -> f32 {
        if !scene.contains(content) {
            #[cfg(feature = "tracing")]
            tracing::warn!(?content, "dialogue mount skipped: content node is gone");
            return layout.total_height();
        }
        scene.clear_children(content);

        let m = &self.metrics;
        for entry in &layout.entries {
            let Some(group) = scene.add_group(content, entry.origin) else {
                continue;
            };
            if let Some(handle) = &entry.avatar {
                scene.add_image(
                    group,
                    Point::ZERO,
                    Size::square(m.avatar_size),
                    handle.clone(),
                );
            }
            scene.add_label(
                group,
                Point::new(entry.label.x, 0.0),
                entry.label.text.as_str(),
                m.speaker_style,
                entry.label.width,
            );

            for line in &entry.lines {
                let Some(line_node) = scene.add_group(group, Point::new(0.0, line.y)) else {
                    continue;
                };
                for token in &line.tokens {
                    let at = Point::new(token.x, token.y);
                    match &token.kind {
                        PlacedKind::Word(word) => {
                            scene.add_label(line_node, at, word.as_str(), m.body_style, token.width);
                        }
                        PlacedKind::Icon { handle, .. } => {
                            scene.add_image(
                                line_node,
                                at,
                                Size::square(m.icon_size),
                                handle.clone(),
                            );
                        }
                    }
                }
            }
        }

        layout.total_height()
    }

    /// Lay out `entries` under `content` and return the content extent.
    pub fn render(
        &mut self,
        scene: &mut Scene,
        content: NodeId,
        entries: &[DialogueEntry],
        columns: Columns,
        avatars: &ImageTable,
        icons: &ImageTable,
    ) -> f32 {
        let layout = self.layout(entries, columns, avatars, icons);
        self.mount(scene, content, &layout)
    }

    fn layout_entry(
        &mut self,
        entry: &DialogueEntry,
        y: f32,
        columns: Columns,
        avatars: &ImageTable,
        icons: &ImageTable,
    ) -> EntryLayout {
        let m = &self.metrics;
        let limits = LineLimits {
            max_x: m.max_text_width(columns.available_width),
            indent: m.indent(),
            line_height: m.line_height,
        };

        let label_text = format!("{}: ", entry.speaker);
        let label_width = self.measurer.measure(&label_text, &m.speaker_style);

        let mut cursor = LineBox::new(limits.indent + label_width);
        let mut lines = vec![LineLayout::default()];

        for token in tokenize(&entry.text, icons) {
            let (kind, width, advance, token_y) = match token {
                Token::Word(word) => {
                    let w = self.measurer.measure(&word, &m.body_style);
                    (PlacedKind::Word(word), w, w, 0.0)
                }
                Token::Icon(name) => {
                    // The tokenizer only emits names present in the table.
                    let Some(handle) = icons.get(&name).cloned() else {
                        continue;
                    };
                    (
                        PlacedKind::Icon { name, handle },
                        m.icon_size,
                        m.icon_size + m.icon_gap,
                        (m.line_height - m.icon_size) / 2.0,
                    )
                }
            };

            let (next, at) = cursor.place(width, advance, &limits);
            if at.wrapped {
                lines.push(LineLayout {
                    y: at.line_y,
                    tokens: Vec::new(),
                });
            }
            if let Some(line) = lines.last_mut() {
                line.tokens.push(PlacedToken {
                    kind,
                    x: at.x,
                    y: token_y,
                    width,
                });
            }
            cursor = next;
        }

        EntryLayout {
            origin: Point::new(columns.left(), y),
            height: cursor.height(m.line_height) + m.entry_gap(),
            avatar: avatars.get(&entry.speaker).cloned(),
            label: LabelLayout {
                text: label_text,
                x: limits.indent,
                width: label_width,
            },
            lines,
        }
    }
}
